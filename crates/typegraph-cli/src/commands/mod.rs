use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub mod check;
pub mod loader;
pub mod resolvers;
pub mod types;

#[cfg(test)]
mod loader_tests;

/// Write generated text to a file, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, text: &str) {
    let result = match path {
        Some(path) => fs::write(path, text)
            .map_err(|e| format!("failed to write '{}': {}", path.display(), e)),
        None => io::stdout()
            .write_all(text.as_bytes())
            .map_err(|e| format!("failed to write to stdout: {}", e)),
    };
    if let Err(msg) = result {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    }
}
