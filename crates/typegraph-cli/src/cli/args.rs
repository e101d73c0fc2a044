//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be
//! composed into every command that needs it.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// GraphQL SDL file (-s/--schema).
pub fn schema_arg() -> Arg {
    Arg::new("schema")
        .short('s')
        .long("schema")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("GraphQL schema (SDL) file")
}

/// Operation documents or directories of `.graphql` files (positional).
pub fn documents_arg() -> Arg {
    Arg::new("documents")
        .value_name("DOCUMENTS")
        .value_parser(value_parser!(PathBuf))
        .action(ArgAction::Append)
        .help("Operation documents, or directories of .graphql files")
}

/// TOML configuration file (-c/--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("TOML configuration (mappers, naming, table names)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Don't export generated types (--no-export).
pub fn no_export_arg() -> Arg {
    Arg::new("no_export")
        .long("no-export")
        .action(ArgAction::SetTrue)
        .help("Don't export generated types")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}
