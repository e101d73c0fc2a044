//! Configuration types for TypeScript emission.

use typegraph_core::Colors;

/// Configuration for TypeScript emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to export declarations
    pub(crate) export: bool,
    /// Whether to declare the `Maybe` helper
    pub(crate) emit_maybe: bool,
    /// Name of the output resolver table
    pub(crate) output_table_name: String,
    /// Name of the parent resolver table
    pub(crate) parent_table_name: String,
    /// Color configuration for output
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: true,
            emit_maybe: true,
            output_table_name: "ResolversTypes".to_string(),
            parent_table_name: "ResolversParentTypes".to_string(),
            colors: Colors::OFF,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    /// Set whether to declare `Maybe<T>` ahead of everything else.
    pub fn emit_maybe(mut self, value: bool) -> Self {
        self.emit_maybe = value;
        self
    }

    pub fn table_names(mut self, output: impl Into<String>, parent: impl Into<String>) -> Self {
        self.output_table_name = output.into();
        self.parent_table_name = parent.into();
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}
