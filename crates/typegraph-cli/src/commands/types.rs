use std::path::PathBuf;

use super::loader::{Inputs, compile};
use super::write_output;

pub struct TypesArgs {
    pub inputs: Inputs,
    pub export: bool,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: TypesArgs) {
    if args.inputs.documents.is_empty() {
        eprintln!("error: at least one document is required");
        std::process::exit(1);
    }

    let output = compile(&args.inputs, args.export, args.color);
    let text = output.render_operations(args.color);
    if text.is_empty() {
        tracing::warn!("documents define no fragments or operations");
    }
    write_output(args.output.as_deref(), &text);
}
