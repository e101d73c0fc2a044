//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but are populated from clap;
//! the `Into<*Args>` impls bridge dispatch and the command handlers.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::loader::Inputs;
use crate::commands::resolvers::ResolversArgs;
use crate::commands::types::TypesArgs;

pub struct InputParams {
    pub schema: PathBuf,
    pub config: Option<PathBuf>,
    pub documents: Vec<PathBuf>,
}

impl InputParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            // Required by clap, so the fallback is never observed.
            schema: m.get_one::<PathBuf>("schema").cloned().unwrap_or_default(),
            config: m.get_one::<PathBuf>("config").cloned(),
            documents: m
                .get_many::<PathBuf>("documents")
                .map(|paths| paths.cloned().collect())
                .unwrap_or_default(),
        }
    }
}

impl From<InputParams> for Inputs {
    fn from(p: InputParams) -> Self {
        Self {
            schema: p.schema,
            config: p.config,
            documents: p.documents,
        }
    }
}

pub struct ResolversParams {
    pub inputs: InputParams,
    pub no_export: bool,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl ResolversParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: InputParams::from_matches(m),
            no_export: m.get_flag("no_export"),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<ResolversParams> for ResolversArgs {
    fn from(p: ResolversParams) -> Self {
        Self {
            inputs: p.inputs.into(),
            export: !p.no_export,
            // Never color text written to a file.
            color: p.output.is_none() && p.color.should_colorize(),
            output: p.output,
        }
    }
}

pub struct TypesParams {
    pub inputs: InputParams,
    pub no_export: bool,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl TypesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: InputParams::from_matches(m),
            no_export: m.get_flag("no_export"),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<TypesParams> for TypesArgs {
    fn from(p: TypesParams) -> Self {
        Self {
            inputs: p.inputs.into(),
            export: !p.no_export,
            color: p.output.is_none() && p.color.should_colorize(),
            output: p.output,
        }
    }
}

pub struct CheckParams {
    pub inputs: InputParams,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: InputParams::from_matches(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            inputs: p.inputs.into(),
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
