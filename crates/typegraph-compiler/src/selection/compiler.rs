use indexmap::IndexMap;

use super::{
    CompileOptions, CompiledFragment, CompiledOperation, CompiledSelection, FragmentTable, SubType,
};
use crate::document::{FieldSelection, FragmentDefinition, OperationDefinition, Selection};
use crate::naming::{ConvertOptions, NameConverter, NameScope};
use crate::schema::SchemaTypeGraph;
use crate::types::{RecordField, RefTarget, TypeContext, TypeId};
use crate::{Error, Result};

const TYPENAME: &str = "__typename";

/// How an inline fragment or spread relates to the enclosing type.
enum Narrowing {
    /// Selects on the enclosing object itself; merged by intersection.
    Same,
    /// An abstract type overlapping an abstract enclosing type; merged by
    /// intersection. `covers` is false when some possible types of the
    /// enclosing type are outside the condition.
    Overlap { covers: bool },
    /// One concrete member of an abstract enclosing type.
    Branch(String),
}

#[derive(Clone, Copy)]
struct SetScope<'p> {
    /// Generated name of the enclosing sub-type; prefixes nested names.
    path: &'p str,
    conditional: bool,
    implicit_typename: bool,
}

struct FieldGroup<'s> {
    field: &'s FieldSelection,
    selections: Vec<&'s Selection>,
    conditional: bool,
}

#[derive(Default)]
struct Collected<'s> {
    fields: IndexMap<&'s str, FieldGroup<'s>>,
    /// Fragment refs and same-type inline fragments, intersected with the fields.
    parts: Vec<TypeId>,
    branches: IndexMap<String, Vec<&'s Selection>>,
}

/// Compiles selection sets of one document against one schema.
///
/// Fragments must be compiled, and inserted into the fragment table,
/// before any selection spreading them.
pub struct SelectionCompiler<'a> {
    ctx: &'a mut TypeContext,
    schema: &'a SchemaTypeGraph,
    fragments: &'a FragmentTable,
    namer: &'a dyn NameConverter,
    options: CompileOptions,
    scope: NameScope,
    sub_types: Vec<SubType>,
}

impl<'a> SelectionCompiler<'a> {
    pub fn new(
        ctx: &'a mut TypeContext,
        schema: &'a SchemaTypeGraph,
        fragments: &'a FragmentTable,
        namer: &'a dyn NameConverter,
        options: CompileOptions,
    ) -> Self {
        Self {
            ctx,
            schema,
            fragments,
            namer,
            options,
            scope: NameScope::new(),
            sub_types: Vec::new(),
        }
    }

    /// Compile `selections` on `parent` as a fresh compilation unit.
    ///
    /// Sub-type names are prefixed with `unit` and deduplicated within this
    /// call only.
    pub fn compile(
        &mut self,
        unit: &str,
        parent: &str,
        selections: &[Selection],
    ) -> Result<CompiledSelection> {
        self.schema.expect_type(parent)?;
        self.scope = NameScope::new();
        self.sub_types.clear();

        let selections: Vec<&Selection> = selections.iter().collect();
        let scope = SetScope {
            path: unit,
            conditional: false,
            implicit_typename: self.options.add_typename,
        };
        let ty = self.selection_set(parent, &selections, scope)?;
        Ok(CompiledSelection {
            ty,
            sub_types: std::mem::take(&mut self.sub_types),
        })
    }

    pub fn compile_operation(&mut self, operation: &OperationDefinition) -> Result<CompiledOperation> {
        let schema = self.schema;
        let root = schema
            .root_type(operation.kind)
            .ok_or(Error::MissingRootType(operation.kind.as_str()))?;
        let raw_name = operation.name.as_deref().unwrap_or("Anonymous");
        let type_name = self
            .namer
            .convert(raw_name, &ConvertOptions::suffix(operation.kind.type_suffix()));
        let variables_suffix = format!("{}Variables", operation.kind.type_suffix());
        let variables_name = self
            .namer
            .convert(raw_name, &ConvertOptions::suffix(&variables_suffix));

        let compiled = self.compile(&type_name, root, &operation.selection_set)?;
        let variables = self.compile_variables(operation)?;
        tracing::debug!(
            operation = %type_name,
            sub_types = compiled.sub_types.len(),
            "operation compiled"
        );
        Ok(CompiledOperation {
            type_name,
            variables_name,
            kind: operation.kind,
            ty: compiled.ty,
            variables,
            sub_types: compiled.sub_types,
        })
    }

    pub fn compile_fragment(&mut self, fragment: &FragmentDefinition) -> Result<CompiledFragment> {
        let condition = self.schema.expect_type(&fragment.type_condition)?;
        if !condition.kind.is_composite() {
            return Err(Error::InvalidTypeCondition {
                parent: fragment.name.clone(),
                condition: fragment.type_condition.clone(),
            });
        }
        let type_name = self
            .namer
            .convert(&fragment.name, &ConvertOptions::suffix("Fragment"));

        let compiled = self.compile(&type_name, &fragment.type_condition, &fragment.selection_set)?;
        tracing::debug!(fragment = %type_name, "fragment compiled");
        Ok(CompiledFragment {
            name: fragment.name.clone(),
            type_name,
            type_condition: fragment.type_condition.clone(),
            ty: compiled.ty,
            sub_types: compiled.sub_types,
        })
    }

    /// Record of the operation's variables; nullable or defaulted ones are optional.
    pub fn compile_variables(&mut self, operation: &OperationDefinition) -> Result<TypeId> {
        let mut fields = Vec::with_capacity(operation.variables.len());
        for variable in &operation.variables {
            self.schema.expect_type(&variable.base)?;
            let base = self.ctx.schema_ref(&variable.base);
            let ty = self.ctx.wrap(base, &variable.wrapping);
            let name = self.ctx.intern(&variable.name);
            fields.push(RecordField {
                name,
                ty,
                optional: variable.wrapping.nullable || variable.has_default,
            });
        }
        Ok(self.ctx.record(fields))
    }

    fn selection_set(
        &mut self,
        parent: &str,
        selections: &[&Selection],
        scope: SetScope<'_>,
    ) -> Result<TypeId> {
        let mut collected = Collected::default();
        self.collect(parent, selections, scope, &mut collected)?;

        let explicit_typename = collected.fields.values().any(|g| g.field.name == TYPENAME);
        let mut record = Vec::with_capacity(collected.fields.len() + 1);
        if scope.implicit_typename && !explicit_typename && collected.branches.is_empty() {
            let name = self.ctx.intern(TYPENAME);
            let ty = self.typename(parent);
            record.push(RecordField {
                name,
                ty,
                optional: !self.options.non_optional_typename,
            });
        }
        for (key, group) in &collected.fields {
            let ty = self.field_type(parent, group, scope)?;
            let name = self.ctx.intern(key);
            record.push(RecordField {
                name,
                ty,
                optional: group.conditional,
            });
        }

        let common = if collected.parts.is_empty() {
            self.ctx.record(record)
        } else {
            let mut parts = Vec::with_capacity(collected.parts.len() + 1);
            if !record.is_empty() {
                parts.push(self.ctx.record(record));
            }
            parts.extend(collected.parts);
            self.ctx.intersection(parts)
        };
        if collected.branches.is_empty() {
            return Ok(common);
        }

        let mut variants = Vec::with_capacity(collected.branches.len());
        for (condition, selections) in &collected.branches {
            let branch_name = self.claim(scope.path, condition, Some("InlineFragment"));
            let branch_scope = SetScope {
                implicit_typename: false,
                ..scope
            };
            let branch = self.selection_set(condition, selections, branch_scope)?;
            self.sub_types.push(SubType {
                name: branch_name,
                ty: branch,
            });

            let typename = self.ctx.intern(TYPENAME);
            let literal = self.ctx.literal(condition);
            let discriminant = self.ctx.record(vec![RecordField::required(typename, literal)]);
            let mut parts = vec![discriminant];
            if !self.is_empty_record(common) {
                parts.push(common);
            }
            if !self.is_empty_record(branch) {
                parts.push(branch);
            }
            variants.push(self.ctx.intersection(parts));
        }
        Ok(self.ctx.union(variants))
    }

    fn collect<'s>(
        &mut self,
        parent: &str,
        selections: &[&'s Selection],
        scope: SetScope<'_>,
        out: &mut Collected<'s>,
    ) -> Result<()> {
        for &selection in selections {
            match selection {
                Selection::Field(field) => {
                    let conditional = scope.conditional || field.is_conditional();
                    match out.fields.get_mut(field.response_key()) {
                        Some(group) => {
                            group.conditional &= conditional;
                            group.selections.extend(field.selection_set.iter());
                        }
                        None => {
                            out.fields.insert(
                                field.response_key(),
                                FieldGroup {
                                    field,
                                    selections: field.selection_set.iter().collect(),
                                    conditional,
                                },
                            );
                        }
                    }
                }
                Selection::FragmentSpread(spread) => {
                    let name = spread.fragment_name.as_str();
                    let entry = self
                        .fragments
                        .get(name)
                        .ok_or_else(|| Error::UnknownFragment(name.to_string()))?;
                    match self.narrowing(parent, &entry.type_condition)? {
                        Narrowing::Same | Narrowing::Overlap { .. } => {
                            let reference = self.ctx.reference(RefTarget::Fragment, name);
                            out.parts.push(reference);
                        }
                        Narrowing::Branch(condition) => {
                            out.branches.entry(condition).or_default().push(selection);
                        }
                    }
                }
                Selection::InlineFragment(inline) => {
                    let condition = inline.type_condition.as_deref().unwrap_or(parent);
                    let inner: Vec<&'s Selection> = inline.selection_set.iter().collect();
                    match self.narrowing(parent, condition)? {
                        Narrowing::Same => {
                            let inner_scope = SetScope {
                                conditional: scope.conditional || inline.is_conditional(),
                                implicit_typename: false,
                                ..scope
                            };
                            let part = self.selection_set(parent, &inner, inner_scope)?;
                            out.parts.push(part);
                        }
                        Narrowing::Overlap { covers } => {
                            let inner_scope = SetScope {
                                conditional: scope.conditional || inline.is_conditional() || !covers,
                                implicit_typename: false,
                                ..scope
                            };
                            let part = self.selection_set(condition, &inner, inner_scope)?;
                            out.parts.push(part);
                        }
                        // A conditional fragment is kept whole so the branch
                        // compiles it as a conditional part of itself.
                        Narrowing::Branch(condition) if inline.is_conditional() => {
                            out.branches.entry(condition).or_default().push(selection);
                        }
                        Narrowing::Branch(condition) => {
                            out.branches.entry(condition).or_default().extend(inner);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn narrowing(&self, parent: &str, condition: &str) -> Result<Narrowing> {
        if parent == condition {
            return Ok(Narrowing::Same);
        }
        let parent_kind = self.schema.expect_type(parent)?.kind;
        let condition_kind = self.schema.expect_type(condition)?.kind;
        let invalid = || Error::InvalidTypeCondition {
            parent: parent.to_string(),
            condition: condition.to_string(),
        };
        if !condition_kind.is_composite() {
            return Err(invalid());
        }

        match (parent_kind.is_abstract(), condition_kind.is_abstract()) {
            (true, false) if self.schema.is_possible_type(parent, condition) => {
                Ok(Narrowing::Branch(condition.to_string()))
            }
            (false, true) if self.schema.is_possible_type(condition, parent) => Ok(Narrowing::Same),
            (true, true) => {
                let inner = self.schema.possible_types(condition);
                let outer = self.schema.possible_types(parent);
                if outer.iter().any(|t| inner.contains(t)) {
                    let covers = outer.iter().all(|t| inner.contains(t));
                    Ok(Narrowing::Overlap { covers })
                } else {
                    Err(invalid())
                }
            }
            _ => Err(invalid()),
        }
    }

    fn field_type(
        &mut self,
        parent: &str,
        group: &FieldGroup<'_>,
        scope: SetScope<'_>,
    ) -> Result<TypeId> {
        let field = group.field;
        match field.name.as_str() {
            TYPENAME => return Ok(self.typename(parent)),
            "__schema" => return Ok(self.ctx.reference(RefTarget::Introspection, "__Schema")),
            "__type" => {
                let ty = self.ctx.reference(RefTarget::Introspection, "__Type");
                return Ok(self.ctx.nullable(ty));
            }
            _ => {}
        }

        let schema = self.schema;
        let definition = schema
            .field(parent, &field.name)
            .ok_or_else(|| Error::UnknownField {
                parent: parent.to_string(),
                field: field.name.clone(),
            })?;
        let base = schema.expect_type(&definition.base)?;

        let inner = if base.kind.is_composite() {
            let name = self.claim(scope.path, field.response_key(), None);
            let nested = SetScope {
                path: &name,
                conditional: false,
                implicit_typename: self.options.add_typename,
            };
            let ty = self.selection_set(&base.name, &group.selections, nested)?;
            self.sub_types.push(SubType { name, ty });
            ty
        } else {
            self.ctx.schema_ref(&base.name)
        };
        Ok(self.ctx.wrap(inner, &definition.wrapping))
    }

    /// `__typename` of a value at `parent`: one literal per possible type.
    fn typename(&mut self, parent: &str) -> TypeId {
        let schema = self.schema;
        let names = schema.possible_types(parent);
        if names.is_empty() {
            return self.ctx.literal(parent);
        }
        let literals: Vec<TypeId> = names.into_iter().map(|n| self.ctx.literal(n)).collect();
        self.ctx.union(literals)
    }

    fn claim(&mut self, path: &str, raw: &str, suffix: Option<&str>) -> String {
        let prefix = if path.is_empty() {
            String::new()
        } else {
            format!("{path}_")
        };
        let options = ConvertOptions {
            prefix: Some(&prefix),
            suffix,
            case: None,
        };
        let name = self.namer.convert(raw, &options);
        self.scope.claim(&name)
    }

    fn is_empty_record(&self, id: TypeId) -> bool {
        self.ctx.record_fields(id).is_some_and(|fields| fields.is_empty())
    }
}
