use super::loader::{Inputs, load};

pub struct CheckArgs {
    pub inputs: Inputs,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let codegen = load(&args.inputs, true).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    let output = match codegen.run() {
        Ok(output) => output,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let diagnostics = &output.diagnostics;
    let is_valid = if args.strict {
        !diagnostics.has_errors() && !diagnostics.has_warnings()
    } else {
        output.is_valid()
    };

    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.printer().colored(args.color).render());
    }
    if !is_valid {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
