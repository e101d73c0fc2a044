//! Command builders for the CLI.
//!
//! Every command reads the same inputs (schema, configuration, documents),
//! so they share one set of input args.

use clap::Command;

use super::args::*;

/// Schema, configuration and document inputs.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(schema_arg())
        .arg(config_arg())
        .arg(documents_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("typegraph")
        .about("Resolver and operation types for GraphQL schemas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(resolvers_command())
        .subcommand(types_command())
        .subcommand(check_command())
}

/// Print the resolver type tables of a schema.
pub fn resolvers_command() -> Command {
    let cmd = Command::new("resolvers")
        .about("Generate resolver type tables for a schema")
        .override_usage(
            "\
  typegraph resolvers -s <SCHEMA> [-c <CONFIG>]",
        )
        .after_help(
            r#"EXAMPLES:
  typegraph resolvers -s schema.graphql                   # identity tables
  typegraph resolvers -s schema.graphql -c codegen.toml   # with mappers
  typegraph resolvers -s schema.graphql -o resolvers.ts   # write to file

NOTE: documents are optional here; the tables depend on the schema and config."#,
        )
        .arg(no_export_arg())
        .arg(output_file_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

/// Print fragment and operation types.
pub fn types_command() -> Command {
    let cmd = Command::new("types")
        .about("Generate fragment and operation types from documents")
        .override_usage(
            "\
  typegraph types -s <SCHEMA> <DOCUMENTS>...
  typegraph types -s <SCHEMA> <DIR>",
        )
        .after_help(
            r#"EXAMPLES:
  typegraph types -s schema.graphql queries.graphql      # one document
  typegraph types -s schema.graphql src/graphql/         # every .graphql file
  typegraph types -s schema.graphql ops/ -o types.ts     # write to file"#,
        )
        .arg(no_export_arg())
        .arg(output_file_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

/// Run every pass and report diagnostics.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Check a schema, configuration and documents")
        .override_usage(
            "\
  typegraph check -s <SCHEMA> [-c <CONFIG>] [DOCUMENTS]...",
        )
        .after_help(
            r#"EXAMPLES:
  typegraph check -s schema.graphql -c codegen.toml          # mappers only
  typegraph check -s schema.graphql src/graphql/ --strict    # warnings fail"#,
        )
        .arg(strict_arg())
        .arg(color_arg());

    with_input_args(cmd)
}
