use std::path::PathBuf;

use super::loader::{Inputs, compile};
use super::write_output;

pub struct ResolversArgs {
    pub inputs: Inputs,
    pub export: bool,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: ResolversArgs) {
    let output = compile(&args.inputs, args.export, args.color);
    write_output(args.output.as_deref(), &output.render_resolvers(args.color));
}
