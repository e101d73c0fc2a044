//! Resolver type tables.
//!
//! For every named schema type two entries are built with the same
//! algorithm: the output table (what a resolver may return, wrapped in the
//! resolver wrapper) and the parent table (what the next resolver receives,
//! unwrapped). Cross-type links are `Ref(Table, name)` nodes, so each table
//! is self-contained and recursive schemas stay finite.

mod reach;


pub use reach::MappedReach;

use indexmap::{IndexMap, IndexSet};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::mappers::{Mapper, MapperTable, MapperTarget, PLACEHOLDER};
use crate::schema::{NamedType, SchemaTypeGraph, TypeKind};
use crate::types::{RecordField, RefTarget, TypeContext, TypeId};
use crate::{Error, PassResult, Result};

pub const DEFAULT_RESOLVER_WRAPPER: &str = "ResolverTypeWrapper<{T}>";

#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Template applied to output-table entries (enums excepted).
    pub resolver_wrapper: Option<Vec<String>>,
    /// Replaces the entries of the root operation types.
    pub root_value: Option<Mapper>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            resolver_wrapper: Some(split_template(DEFAULT_RESOLVER_WRAPPER)),
            root_value: None,
        }
    }
}

impl ResolverOptions {
    /// `None` disables wrapping; text without a placeholder is a config error.
    pub fn with_wrapper(mut self, template: Option<&str>) -> Result<Self> {
        self.resolver_wrapper = match template {
            None => None,
            Some(text) if text.contains(PLACEHOLDER) => Some(split_template(text)),
            Some(text) => {
                return Err(Error::Config(format!(
                    "resolver wrapper `{text}` has no `{PLACEHOLDER}` placeholder"
                )));
            }
        };
        Ok(self)
    }

    pub fn with_root_value(mut self, root_value: Option<Mapper>) -> Self {
        self.root_value = root_value;
        self
    }
}

fn split_template(text: &str) -> Vec<String> {
    text.split(PLACEHOLDER).map(str::to_string).collect()
}

#[derive(Debug, Clone, Default)]
pub struct ResolverTables {
    /// Entries as resolvers may return them.
    pub output: IndexMap<String, TypeId>,
    /// Entries as parent values handed to field resolvers.
    pub parent: IndexMap<String, TypeId>,
    /// Mapper keys consumed while building, in schema order.
    pub used_mappers: IndexSet<String>,
}

impl ResolverTables {
    /// Check that every reference in both tables resolves within its own
    /// table or the schema.
    pub fn verify(&self, ctx: &TypeContext, schema: &SchemaTypeGraph) -> Result<()> {
        for table in [&self.output, &self.parent] {
            for &id in table.values() {
                for r in ctx.references(id) {
                    let name = ctx.resolve(r.name);
                    let ok = match r.target {
                        RefTarget::Table => table.contains_key(name),
                        RefTarget::Schema => schema.contains(name),
                        RefTarget::Introspection => true,
                        RefTarget::Fragment => false,
                    };
                    if !ok {
                        return Err(Error::DanglingReference {
                            table: r.target.as_str(),
                            name: name.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

/// Build both resolver tables for `schema`.
///
/// Mapper keys that name no schema type are reported as errors in the
/// returned diagnostics; they do not stop the build.
pub fn build(
    ctx: &mut TypeContext,
    schema: &SchemaTypeGraph,
    mappers: &MapperTable,
    options: &ResolverOptions,
) -> PassResult<ResolverTables> {
    let mut diagnostics = Diagnostics::new();
    for key in mappers.keys() {
        if !schema.contains(key) {
            diagnostics
                .report(DiagnosticKind::UnknownMapperType)
                .subject(key)
                .message(key)
                .emit();
        }
    }
    for (key, mapper) in mappers.iter() {
        if mapper.import.as_ref().is_some_and(|i| i.legacy) {
            diagnostics
                .report(DiagnosticKind::LegacyMapperSyntax)
                .subject(key)
                .message(key)
                .emit();
        }
    }

    let mut builder = ResolverBuilder::new(ctx, schema, mappers, options);
    let mut tables = ResolverTables::default();
    for ty in schema.types().filter(|t| !t.is_introspection()) {
        let Some(entry) = builder.resolve(&ty.name) else {
            continue;
        };
        let output = builder.apply_wrapper(ty, entry);
        tables.output.insert(ty.name.clone(), output);
        tables.parent.insert(ty.name.clone(), entry);
    }
    tables.used_mappers = builder.finish();

    tables.verify(ctx, schema)?;
    tracing::debug!(
        entries = tables.output.len(),
        used_mappers = tables.used_mappers.len(),
        "resolver tables built"
    );
    Ok((tables, diagnostics))
}

/// Computes unwrapped table entries one type at a time.
pub struct ResolverBuilder<'a> {
    ctx: &'a mut TypeContext,
    schema: &'a SchemaTypeGraph,
    mappers: &'a MapperTable,
    options: &'a ResolverOptions,
    reach: MappedReach,
    used: IndexSet<String>,
}

impl<'a> ResolverBuilder<'a> {
    pub fn new(
        ctx: &'a mut TypeContext,
        schema: &'a SchemaTypeGraph,
        mappers: &'a MapperTable,
        options: &'a ResolverOptions,
    ) -> Self {
        Self {
            ctx,
            schema,
            mappers,
            options,
            reach: MappedReach::compute(schema, mappers),
            used: IndexSet::new(),
        }
    }

    /// The unwrapped entry for `type_name`, or `None` for unknown and
    /// introspection types. Calling it again yields the same ID.
    pub fn resolve(&mut self, type_name: &str) -> Option<TypeId> {
        let ty = self.schema.get(type_name)?;
        if ty.is_introspection() {
            return None;
        }

        if let Some(root_value) = &self.options.root_value
            && self.schema.is_root_type(type_name)
        {
            return Some(self.apply_mapper(root_value, ty, false));
        }

        if let Some(mapper) = self.mappers.get(type_name) {
            self.used.insert(type_name.to_string());
            return Some(self.apply_mapper(mapper, ty, false));
        }

        let entry = match self.mappers.default_mapper() {
            Some(default) => self.apply_mapper(default, ty, true),
            None => self.declared_entry(ty),
        };
        Some(entry)
    }

    /// Consume the builder, returning the mapper keys it used.
    pub fn finish(self) -> IndexSet<String> {
        self.used
    }

    /// Entry for a type without its own mapper, before any default mapper.
    fn declared_entry(&mut self, ty: &NamedType) -> TypeId {
        match ty.kind {
            TypeKind::Union | TypeKind::Interface => {
                let members: Vec<&str> = self.schema.possible_types(&ty.name);
                let variants: Vec<TypeId> = members
                    .into_iter()
                    .map(|member| self.ctx.table_ref(member))
                    .collect();
                self.ctx.union(variants)
            }
            TypeKind::Object => self.rewrite_fields(ty),
            TypeKind::Scalar | TypeKind::Enum | TypeKind::InputObject => {
                self.ctx.schema_ref(&ty.name)
            }
        }
    }

    /// `Ref(Schema, T)`, with fields whose type resolves differently
    /// replaced by references into the table.
    fn rewrite_fields(&mut self, ty: &NamedType) -> TypeId {
        let source = self.ctx.schema_ref(&ty.name);
        let mut removed = Vec::new();
        let mut added = Vec::new();
        for field in &ty.fields {
            if !self.reach.needs_rewrite(&field.base) {
                continue;
            }
            let name = self.ctx.intern(&field.name);
            let target = self.ctx.table_ref(&field.base);
            let wrapped = self.ctx.wrap(target, &field.wrapping);
            removed.push(name);
            added.push(RecordField {
                name,
                ty: wrapped,
                optional: field.nullable(),
            });
        }
        self.ctx.override_merge(source, removed, added)
    }

    /// Entry `mapper` gives `ty`. A template wraps the declared entry for
    /// the default mapper and the rewritten declaration otherwise.
    fn apply_mapper(&mut self, mapper: &Mapper, ty: &NamedType, declared: bool) -> TypeId {
        match &mapper.target {
            MapperTarget::Inline(text) => self.ctx.inline(text),
            MapperTarget::External { module, symbol } => self.ctx.external(module, symbol),
            MapperTarget::Template(pieces) => {
                let inner = match ty.kind {
                    _ if declared => self.declared_entry(ty),
                    TypeKind::Object => self.rewrite_fields(ty),
                    _ => self.ctx.schema_ref(&ty.name),
                };
                self.ctx.template(pieces, inner)
            }
        }
    }

    /// Output-table form of an entry.
    fn apply_wrapper(&mut self, ty: &NamedType, entry: TypeId) -> TypeId {
        match &self.options.resolver_wrapper {
            Some(pieces) if ty.kind != TypeKind::Enum => self.ctx.template(pieces, entry),
            _ => entry,
        }
    }
}
