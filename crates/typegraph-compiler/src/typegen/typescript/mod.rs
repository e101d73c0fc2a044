//! TypeScript emitter for resolver tables, fragments and operations.

mod config;
mod emitter;
mod render;


pub use config::Config;
pub use emitter::Emitter;
