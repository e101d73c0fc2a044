//! Selection-set compilation.
//!
//! Walks an operation's or fragment's selection set against the schema and
//! produces one type expression describing the response shape. Fragment
//! spreads and same-type inline fragments are intersected; inline fragments
//! narrowing an abstract position to distinct concrete types become the
//! arms of a union, each discriminated by a `__typename` literal.

mod compiler;


pub use compiler::SelectionCompiler;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::document::OperationKind;
use crate::types::TypeId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Add `__typename` to every object record even when not selected.
    pub add_typename: bool,
    /// Implicit `__typename` fields are required rather than optional.
    pub non_optional_typename: bool,
}

/// A synthesized object type with a generated name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubType {
    pub name: String,
    pub ty: TypeId,
}

/// Result of compiling one selection set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSelection {
    pub ty: TypeId,
    /// Named sub-objects, children before parents.
    pub sub_types: Vec<SubType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledOperation {
    /// Generated type name, e.g. `GetUserQuery`.
    pub type_name: String,
    pub variables_name: String,
    pub kind: OperationKind,
    pub ty: TypeId,
    pub variables: TypeId,
    pub sub_types: Vec<SubType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledFragment {
    pub name: String,
    pub type_name: String,
    pub type_condition: String,
    pub ty: TypeId,
    pub sub_types: Vec<SubType>,
}

/// A compiled fragment as seen by the spreads that reference it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentEntry {
    pub type_name: String,
    pub type_condition: String,
    pub ty: TypeId,
}

/// Compiled fragments by GraphQL name, in compilation order.
#[derive(Debug, Clone, Default)]
pub struct FragmentTable {
    entries: IndexMap<String, FragmentEntry>,
}

impl FragmentTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, fragment: &CompiledFragment) {
        self.entries.insert(
            fragment.name.clone(),
            FragmentEntry {
                type_name: fragment.type_name.clone(),
                type_condition: fragment.type_condition.clone(),
                ty: fragment.ty,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&FragmentEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FragmentEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
