#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Type resolution and selection-set compilation for GraphQL schemas.
//!
//! Pipeline stages:
//! - `schema` / `document`: index the parsed schema and operation documents
//! - `mappers`: user overrides for schema types
//! - `resolvers`: per-type resolver tables (output and parent)
//! - `fragments`: dependency ordering of fragment definitions
//! - `selection`: selection sets to structural type expressions
//! - `unused`: diagnostics for mappers nothing consumed
//! - `typegen`: TypeScript rendering of the resulting expressions
//!
//! `Codegen` wires the stages together for a single output.

pub mod config;
pub mod diagnostics;
pub mod document;
pub mod fragments;
pub mod mappers;
pub mod naming;
pub mod pipeline;
pub mod resolvers;
pub mod schema;
pub mod selection;
pub mod typegen;
pub mod types;
pub mod unused;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod fragments_tests;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use pipeline::{Codegen, CodegenOutput};

/// Result type for passes that produce both a value and soft diagnostics.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

/// Errors that stop a compilation unit.
///
/// Each variant names the type, field or fragment involved so callers can
/// attribute it to a source location.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("failed to parse GraphQL {what}: {message}")]
    Parse { what: &'static str, message: String },

    #[error("unknown type `{0}`")]
    UnknownType(String),

    #[error("type `{parent}` has no field `{field}`")]
    UnknownField { parent: String, field: String },

    #[error("`{condition}` is not a valid type condition inside `{parent}`")]
    InvalidTypeCondition { parent: String, condition: String },

    #[error("unknown fragment `{0}`")]
    UnknownFragment(String),

    #[error("fragment `{0}` is defined more than once with different selections")]
    ConflictingFragment(String),

    #[error("fragments spread each other in a cycle: {}", .0.join(" -> "))]
    FragmentCycle(Vec<String>),

    #[error("schema has no {0} root type")]
    MissingRootType(&'static str),

    #[error("invalid mapper for `{type_name}`: {reason}")]
    InvalidMapper { type_name: String, reason: String },

    #[error("{table} references `{name}` which has no entry")]
    DanglingReference { table: &'static str, name: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("analysis failed with {} errors", .0.error_count())]
    Analyze(Diagnostics),
}

pub type Result<T> = std::result::Result<T, Error>;
