#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the typegraph crates.
//!
//! - `Interner`/`Symbol`: cheap handles for type, field and fragment names
//! - `utils`: identifier case conversion used by naming conventions
//! - `Colors`: ANSI palette for terminal output

mod colors;
mod interner;
pub mod utils;

pub use colors::Colors;
pub use interner::{Interner, Symbol};

#[cfg(test)]
mod colors_tests;
#[cfg(test)]
mod interner_tests;
#[cfg(test)]
mod utils_tests;
