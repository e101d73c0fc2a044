//! End-to-end code generation for one output.
//!
//! ```ignore
//! let output = Codegen::from_sdl(sdl, config)?
//!     .add_document_source(operations)?
//!     .run()?;
//! println!("{}", output.render(false));
//! ```

use crate::config::CodegenConfig;
use crate::diagnostics::Diagnostics;
use crate::document::Document;
use crate::document::load::parse_document;
use crate::fragments;
use crate::mappers::MapperImport;
use crate::naming::NameScope;
use crate::resolvers::{self, ResolverTables};
use crate::schema::SchemaTypeGraph;
use crate::schema::load::parse_schema;
use crate::selection::{
    CompiledFragment, CompiledOperation, FragmentTable, SelectionCompiler, SubType,
};
use crate::typegen::typescript::{Config, Emitter};
use crate::types::TypeContext;
use crate::unused::report_unused_mappers;
use crate::{Error, Result};

/// Inputs of one output: a schema, its configuration and any number of
/// executable documents.
pub struct Codegen {
    schema: SchemaTypeGraph,
    config: CodegenConfig,
    document: Document,
}

impl Codegen {
    pub fn new(schema: SchemaTypeGraph, config: CodegenConfig) -> Self {
        Self {
            schema,
            config,
            document: Document::default(),
        }
    }

    pub fn from_sdl(sdl: &str, config: CodegenConfig) -> Result<Self> {
        Ok(Self::new(parse_schema(sdl)?, config))
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.document.merge(document);
        self
    }

    pub fn add_document_source(self, source: &str) -> Result<Self> {
        let document = parse_document(source)?;
        Ok(self.with_document(document))
    }

    /// Run every pass.
    ///
    /// Configuration problems that do not stop the build (unknown or unused
    /// mapper keys, duplicate fragments) end up in `CodegenOutput::diagnostics`.
    pub fn run(self) -> Result<CodegenOutput> {
        let Self {
            schema,
            config,
            document,
        } = self;
        let mut diagnostics = Diagnostics::new();
        let mut ctx = TypeContext::new();

        let mappers = config.mapper_table()?;
        let options = config.resolver_options()?;
        let (tables, resolver_diag) = resolvers::build(&mut ctx, &schema, &mappers, &options)?;
        diagnostics.extend(resolver_diag);
        diagnostics.extend(report_unused_mappers(
            &mappers,
            &tables.used_mappers,
            config.show_unused_mappers,
        ));

        let (ordered, fragment_diag) = fragments::order(&document.fragments)?;
        diagnostics.extend(fragment_diag);

        let namer = config.namer();
        let compile_options = config.compile_options();
        let mut units = NameScope::new();
        let mut fragment_table = FragmentTable::new();
        let mut compiled_fragments = Vec::with_capacity(ordered.len());
        for fragment in &ordered {
            let mut compiled = {
                let mut compiler = SelectionCompiler::new(
                    &mut ctx,
                    &schema,
                    &fragment_table,
                    &namer,
                    compile_options,
                );
                compiler.compile_fragment(fragment)?
            };
            compiled.type_name = units.claim(&compiled.type_name);
            claim_sub_types(&mut units, &mut compiled.sub_types);
            fragment_table.insert(&compiled);
            compiled_fragments.push(compiled);
        }

        let mut operations = Vec::with_capacity(document.operations.len());
        for operation in &document.operations {
            let mut compiled = {
                let mut compiler = SelectionCompiler::new(
                    &mut ctx,
                    &schema,
                    &fragment_table,
                    &namer,
                    compile_options,
                );
                compiler.compile_operation(operation)?
            };
            compiled.type_name = units.claim(&compiled.type_name);
            compiled.variables_name = units.claim(&compiled.variables_name);
            claim_sub_types(&mut units, &mut compiled.sub_types);
            operations.push(compiled);
        }

        tracing::debug!(
            types = ctx.len(),
            fragments = compiled_fragments.len(),
            operations = operations.len(),
            diagnostics = diagnostics.len(),
            "codegen finished"
        );

        Ok(CodegenOutput {
            imports: mappers.imports(),
            ctx,
            schema,
            config,
            tables,
            fragment_table,
            fragments: compiled_fragments,
            operations,
            diagnostics,
        })
    }
}

/// Generated names are unique across the whole output, not only per unit.
fn claim_sub_types(units: &mut NameScope, sub_types: &mut [SubType]) {
    for sub in sub_types {
        sub.name = units.claim(&sub.name);
    }
}

/// Everything computed for one output.
pub struct CodegenOutput {
    pub ctx: TypeContext,
    pub schema: SchemaTypeGraph,
    pub config: CodegenConfig,
    pub tables: ResolverTables,
    pub fragment_table: FragmentTable,
    /// In dependency order.
    pub fragments: Vec<CompiledFragment>,
    /// In document order.
    pub operations: Vec<CompiledOperation>,
    pub diagnostics: Diagnostics,
    imports: Vec<MapperImport>,
}

impl CodegenOutput {
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// Fail with the collected diagnostics if any of them is an error.
    pub fn into_valid(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::Analyze(self.diagnostics))
        }
    }

    pub fn imports(&self) -> &[MapperImport] {
        &self.imports
    }

    /// Mapper imports and both resolver tables.
    pub fn render_resolvers(&self, colored: bool) -> String {
        let mut emitter = self.emitter(colored);
        emitter.emit_imports(&self.imports);
        emitter.emit_resolver_tables(&self.tables);
        emitter.finish()
    }

    /// Fragment and operation types.
    pub fn render_operations(&self, colored: bool) -> String {
        let mut emitter = self.emitter(colored);
        self.emit_units(&mut emitter);
        emitter.finish()
    }

    /// The whole output file.
    pub fn render(&self, colored: bool) -> String {
        let mut emitter = self.emitter(colored);
        emitter.emit_imports(&self.imports);
        emitter.emit_resolver_tables(&self.tables);
        self.emit_units(&mut emitter);
        emitter.finish()
    }

    fn emit_units(&self, emitter: &mut Emitter<'_>) {
        for fragment in &self.fragments {
            emitter.emit_fragment(fragment);
        }
        for operation in &self.operations {
            emitter.emit_operation(operation);
        }
    }

    fn emitter(&self, colored: bool) -> Emitter<'_> {
        let config = Config::new()
            .export(self.config.export)
            .colored(colored)
            .table_names(
                self.config.output_table_name.as_str(),
                self.config.parent_table_name.as_str(),
            );
        Emitter::new(&self.ctx, &self.schema, &self.fragment_table, config)
    }
}
