//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Every command shares the schema/config/document inputs
//! 2. Params extraction: correct fields are extracted from ArgMatches
//! 3. Help text lists each command's flags

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, resolvers_command, types_command};
use crate::commands::check::CheckArgs;
use crate::commands::resolvers::ResolversArgs;
use crate::commands::types::TypesArgs;

#[test]
fn schema_is_required() {
    let result = types_command().try_get_matches_from(["types", "ops.graphql"]);

    assert!(result.is_err());
}

#[test]
fn types_collects_every_document() {
    let m = types_command()
        .try_get_matches_from([
            "types",
            "-s",
            "schema.graphql",
            "a.graphql",
            "ops/",
            "-o",
            "types.ts",
        ])
        .unwrap();
    let params = TypesParams::from_matches(&m);

    assert_eq!(params.inputs.schema, PathBuf::from("schema.graphql"));
    assert_eq!(
        params.inputs.documents,
        [PathBuf::from("a.graphql"), PathBuf::from("ops/")]
    );
    assert_eq!(params.output, Some(PathBuf::from("types.ts")));
    assert!(!params.no_export);
}

#[test]
fn resolvers_reads_config_and_export() {
    let m = resolvers_command()
        .try_get_matches_from([
            "resolvers",
            "--schema",
            "schema.graphql",
            "--config",
            "codegen.toml",
            "--no-export",
            "--color",
            "never",
        ])
        .unwrap();
    let params = ResolversParams::from_matches(&m);

    assert_eq!(params.inputs.config, Some(PathBuf::from("codegen.toml")));
    assert!(params.inputs.documents.is_empty());
    assert_eq!(params.color, ColorChoice::Never);

    let args: ResolversArgs = params.into();
    assert!(!args.export);
    assert!(!args.color);
}

#[test]
fn file_output_is_never_colored() {
    let m = types_command()
        .try_get_matches_from([
            "types",
            "-s",
            "schema.graphql",
            "q.graphql",
            "--color",
            "always",
            "-o",
            "out.ts",
        ])
        .unwrap();

    let args: TypesArgs = TypesParams::from_matches(&m).into();

    assert!(!args.color);
    assert!(args.export);
}

#[test]
fn check_strict_flag() {
    let m = check_command()
        .try_get_matches_from(["check", "-s", "schema.graphql", "--strict", "--color", "always"])
        .unwrap();

    let args: CheckArgs = CheckParams::from_matches(&m).into();

    assert!(args.strict);
    assert!(args.color);
}

#[test]
fn check_rejects_output_flag() {
    let result =
        check_command().try_get_matches_from(["check", "-s", "schema.graphql", "-o", "x.ts"]);

    assert!(result.is_err());
}

#[test]
fn invalid_color_value_is_rejected() {
    let result = resolvers_command().try_get_matches_from([
        "resolvers",
        "-s",
        "schema.graphql",
        "--color",
        "sometimes",
    ]);

    assert!(result.is_err());
}

#[test]
fn types_help_lists_its_flags() {
    let help = types_command().render_help().to_string();

    assert!(help.contains("--schema"));
    assert!(help.contains("--config"));
    assert!(help.contains("--output"));
    assert!(help.contains("--no-export"));
    assert!(!help.contains("--strict"));
}

#[test]
fn cli_has_every_subcommand() {
    let cli = build_cli();
    let names: Vec<&str> = cli.get_subcommands().map(|c| c.get_name()).collect();

    assert_eq!(names, ["resolvers", "types", "check"]);
}
