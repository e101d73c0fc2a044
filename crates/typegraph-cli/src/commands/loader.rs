//! Reads the schema, configuration and documents a command runs on.

use std::fs;
use std::path::{Path, PathBuf};

use typegraph_compiler::config::CodegenConfig;
use typegraph_compiler::{Codegen, CodegenOutput};

/// File extensions picked up when a document argument is a directory.
const DOCUMENT_EXTENSIONS: &[&str] = &["graphql", "gql"];

pub struct Inputs {
    pub schema: PathBuf,
    pub config: Option<PathBuf>,
    pub documents: Vec<PathBuf>,
}

/// Load every input and run all passes.
///
/// Diagnostics are printed to stderr. Exits when loading fails, a pass fails
/// hard or any diagnostic is an error.
pub fn compile(inputs: &Inputs, export: bool, color: bool) -> CodegenOutput {
    let codegen = load(inputs, export).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    let output = codegen.run().unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    if !output.diagnostics.is_empty() {
        eprint!("{}", output.diagnostics.printer().colored(color).render());
    }
    if !output.is_valid() {
        std::process::exit(1);
    }
    output
}

pub fn load(inputs: &Inputs, export: bool) -> Result<Codegen, String> {
    let mut config = match &inputs.config {
        Some(path) => load_config(path)?,
        None => CodegenConfig::default(),
    };
    config.export = export;

    let sdl = read(&inputs.schema)?;
    let mut codegen = Codegen::from_sdl(&sdl, config)
        .map_err(|e| format!("in '{}': {}", inputs.schema.display(), e))?;

    for path in document_paths(&inputs.documents)? {
        let source = read(&path)?;
        codegen = codegen
            .add_document_source(&source)
            .map_err(|e| format!("in '{}': {}", path.display(), e))?;
        tracing::debug!(path = %path.display(), "loaded document");
    }

    Ok(codegen)
}

fn load_config(path: &Path) -> Result<CodegenConfig, String> {
    let text = read(path)?;
    CodegenConfig::from_toml(&text).map_err(|e| format!("in '{}': {}", path.display(), e))
}

/// Expand directory arguments into their document files.
///
/// Files inside a directory are sorted for deterministic ordering; explicit
/// file arguments keep their command line order.
pub fn document_paths(args: &[PathBuf]) -> Result<Vec<PathBuf>, String> {
    let mut paths = Vec::new();
    for arg in args {
        if !arg.is_dir() {
            paths.push(arg.clone());
            continue;
        }

        let mut entries: Vec<PathBuf> = fs::read_dir(arg)
            .map_err(|e| format!("failed to read directory '{}': {}", arg.display(), e))?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| is_document_file(p))
            .collect();

        if entries.is_empty() {
            return Err(format!(
                "no .graphql files found in directory '{}'",
                arg.display()
            ));
        }

        entries.sort();
        paths.extend(entries);
    }
    Ok(paths)
}

pub fn is_document_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext))
}

fn read(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}
