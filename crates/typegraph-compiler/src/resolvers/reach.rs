//! Which schema types resolve differently from their declaration.
//!
//! A type needs rewriting when it is mapped (explicitly, or as a composite
//! type under a default mapper), or when any type it can hand out (field
//! types, union members, interface implementors) needs it. The closure is
//! computed once up front by walking reverse edges from the mapped types,
//! so cycles cost nothing and table construction never waits
//! on entries built later.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::mappers::MapperTable;
use crate::schema::{SchemaTypeGraph, TypeKind};

#[derive(Debug, Clone, Default)]
pub struct MappedReach {
    rewritten: HashSet<String>,
}

impl MappedReach {
    pub fn compute(schema: &SchemaTypeGraph, mappers: &MapperTable) -> Self {
        let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();
        for ty in schema.types().filter(|t| !t.is_introspection()) {
            let targets: Vec<&str> = match ty.kind {
                TypeKind::Object => ty.fields.iter().map(|f| f.base.as_str()).collect(),
                TypeKind::Interface => ty
                    .fields
                    .iter()
                    .map(|f| f.base.as_str())
                    .chain(ty.members.iter().map(String::as_str))
                    .collect(),
                TypeKind::Union => ty.members.iter().map(String::as_str).collect(),
                _ => Vec::new(),
            };
            for target in targets {
                dependents.entry(target).or_default().push(&ty.name);
            }
        }

        let mut rewritten = HashSet::new();
        let mut queue: VecDeque<&str> = mappers
            .keys()
            .filter(|name| schema.contains(name) && !name.starts_with("__"))
            .collect();
        // A default mapper changes every composite entry.
        if mappers.default_mapper().is_some() {
            queue.extend(
                schema
                    .types()
                    .filter(|t| !t.is_introspection() && t.kind.is_composite())
                    .map(|t| t.name.as_str()),
            );
        }
        while let Some(name) = queue.pop_front() {
            if !rewritten.insert(name.to_string()) {
                continue;
            }
            if let Some(next) = dependents.get(name) {
                queue.extend(next.iter().copied());
            }
        }

        tracing::debug!(count = rewritten.len(), "mapped reach computed");
        Self { rewritten }
    }

    /// Whether values of `type_name` differ from the declared schema shape.
    pub fn needs_rewrite(&self, type_name: &str) -> bool {
        self.rewritten.contains(type_name)
    }
}
