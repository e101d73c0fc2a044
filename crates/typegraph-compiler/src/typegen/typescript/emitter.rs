//! Core emitter struct and the declaration entry points.

use std::collections::HashMap;

use typegraph_core::Colors;

use crate::mappers::MapperImport;
use crate::resolvers::ResolverTables;
use crate::schema::SchemaTypeGraph;
use crate::selection::{CompiledFragment, CompiledOperation, FragmentTable, SubType};
use crate::types::{TypeContext, TypeId};

use super::Config;

/// TypeScript emitter over one type context.
///
/// Declarations are appended in call order; `finish` puts the imports and
/// the `Maybe` helper in front of them.
pub struct Emitter<'a> {
    pub(super) ctx: &'a TypeContext,
    pub(super) schema: &'a SchemaTypeGraph,
    pub(super) fragments: &'a FragmentTable,
    pub(super) config: Config,

    /// Sub-type names of the unit being emitted
    pub(super) named: HashMap<TypeId, String>,
    /// Import statements
    pub(super) header: String,
    /// Declarations
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(
        ctx: &'a TypeContext,
        schema: &'a SchemaTypeGraph,
        fragments: &'a FragmentTable,
        config: Config,
    ) -> Self {
        Self {
            ctx,
            schema,
            fragments,
            config,
            named: HashMap::new(),
            header: String::new(),
            output: String::new(),
        }
    }

    pub(super) fn c(&self) -> Colors {
        self.config.colors
    }

    /// One import statement per module.
    pub fn emit_imports(&mut self, imports: &[MapperImport]) {
        let c = self.c();
        for import in imports {
            let mut bindings = Vec::new();
            if let Some(default) = &import.default {
                bindings.push(c.name(default));
            }
            if !import.named.is_empty() {
                let named: Vec<String> = import.named.iter().map(|n| c.name(n)).collect();
                bindings.push(format!("{{ {} }}", named.join(", ")));
            }
            if bindings.is_empty() {
                continue;
            }
            self.header.push_str(&format!(
                "{} {} {} {}'{}'{}{}\n",
                c.punct("import"),
                bindings.join(", "),
                c.punct("from"),
                c.green,
                import.module,
                c.reset,
                c.punct(";"),
            ));
        }
    }

    /// The output table followed by the parent table.
    pub fn emit_resolver_tables(&mut self, tables: &ResolverTables) {
        let output_name = self.config.output_table_name.clone();
        let parent_name = self.config.parent_table_name.clone();
        self.emit_table(&output_name, &tables.output);
        self.emit_table(&parent_name, &tables.parent);
    }

    /// Sub-types first, then the fragment type itself.
    pub fn emit_fragment(&mut self, fragment: &CompiledFragment) {
        self.name_sub_types(&fragment.sub_types);
        self.emit_selection_type(&fragment.type_name, fragment.ty);
        self.named.clear();
    }

    /// Sub-types, the result type, then the variables type.
    pub fn emit_operation(&mut self, operation: &CompiledOperation) {
        self.name_sub_types(&operation.sub_types);
        self.emit_selection_type(&operation.type_name, operation.ty);
        self.named.clear();
        self.emit_variables_type(&operation.variables_name, operation.variables);
    }

    /// Declare each sub-type, then refer to it by name. Identical sub-types
    /// share the first name.
    fn name_sub_types(&mut self, sub_types: &[SubType]) {
        for sub in sub_types {
            self.emit_selection_type(&sub.name, sub.ty);
            self.named.entry(sub.ty).or_insert_with(|| sub.name.clone());
        }
    }

    /// Assemble the final text.
    pub fn finish(self) -> String {
        if self.header.is_empty() && self.output.is_empty() {
            return String::new();
        }

        let mut text = self.header;
        if !text.is_empty() {
            text.push('\n');
        }
        if self.config.emit_maybe && !self.output.is_empty() {
            let c = self.config.colors;
            if self.config.export {
                text.push_str(&format!("{} ", c.punct("export")));
            }
            text.push_str(&format!(
                "{} {}<T> {} T {} null{}\n\n",
                c.punct("type"),
                c.name("Maybe"),
                c.punct("="),
                c.punct("|"),
                c.punct(";"),
            ));
        }
        text.push_str(&self.output);

        // Ensure exactly one trailing newline
        text.truncate(text.trim_end().len());
        text.push('\n');
        text
    }
}
