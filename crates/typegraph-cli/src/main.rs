mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

use cli::{CheckParams, ResolversParams, TypesParams, build_cli};

/// Environment variable holding the log filter (`TYPEGRAPH_LOG=debug`).
const LOG_ENV: &str = "TYPEGRAPH_LOG";

fn main() {
    init_logging();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("resolvers", m)) => {
            let params = ResolversParams::from_matches(m);
            commands::resolvers::run(params.into());
        }
        Some(("types", m)) => {
            let params = TypesParams::from_matches(m);
            commands::types::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
