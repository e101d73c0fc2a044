//! Read-only index over a GraphQL schema.
//!
//! Types keep their declaration order so every table built from the graph
//! is byte-stable across runs. Built-in scalars are always present.

pub mod load;

#[cfg(test)]
mod schema_tests;

use indexmap::IndexMap;

use crate::document::OperationKind;
use crate::{Error, Result};

pub const BUILTIN_SCALARS: [&str; 5] = ["ID", "String", "Int", "Float", "Boolean"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Object,
    Interface,
    Union,
    Enum,
    Scalar,
    InputObject,
}

impl TypeKind {
    pub fn is_abstract(self) -> bool {
        matches!(self, TypeKind::Interface | TypeKind::Union)
    }

    /// Types with a selection set of their own.
    pub fn is_composite(self) -> bool {
        matches!(self, TypeKind::Object | TypeKind::Interface | TypeKind::Union)
    }

    pub fn is_leaf(self) -> bool {
        matches!(self, TypeKind::Enum | TypeKind::Scalar)
    }
}

/// List/nullability wrapping of a named base type.
///
/// Depth is a count, not a nesting, so unwrapping is arithmetic. Bit `i` of
/// `item_nullability` tells whether the elements of the `i`-th list
/// (0 = outermost) may be null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Wrapping {
    pub nullable: bool,
    pub list_depth: u8,
    item_nullability: u32,
}

impl Wrapping {
    /// A plain named type.
    pub const fn named(nullable: bool) -> Self {
        Self {
            nullable,
            list_depth: 0,
            item_nullability: 0,
        }
    }

    /// Wrap `self` as the element type of a new outermost list.
    pub fn in_list(self, list_nullable: bool) -> Self {
        Self {
            nullable: list_nullable,
            list_depth: self.list_depth + 1,
            item_nullability: (self.item_nullability << 1) | u32::from(self.nullable),
        }
    }

    pub fn is_list(&self) -> bool {
        self.list_depth > 0
    }

    /// Whether elements at list level `level` (0 = outermost) may be null.
    pub fn item_nullable_at(&self, level: u8) -> bool {
        level < self.list_depth && self.item_nullability & (1 << level) != 0
    }

    /// Whether the innermost list's elements (the base type values) may be null.
    pub fn list_item_nullable(&self) -> bool {
        self.list_depth > 0 && self.item_nullable_at(self.list_depth - 1)
    }

    /// Strip the outermost list level, yielding the element wrapping.
    pub fn unwrap_list(&self) -> Option<Self> {
        if self.list_depth == 0 {
            return None;
        }
        Some(Self {
            nullable: self.item_nullability & 1 != 0,
            list_depth: self.list_depth - 1,
            item_nullability: self.item_nullability >> 1,
        })
    }

    /// SDL spelling around `base`, e.g. `[User!]!`.
    pub fn display(&self, base: &str) -> String {
        let mut out = base.to_string();
        for level in (0..self.list_depth).rev() {
            if !self.item_nullable_at(level) {
                out.push('!');
            }
            out = format!("[{out}]");
        }
        if !self.nullable {
            out.push('!');
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub base: String,
    pub wrapping: Wrapping,
    pub has_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    /// Named type at the bottom of the wrapping.
    pub base: String,
    pub wrapping: Wrapping,
    pub arguments: Vec<Argument>,
    /// Input object fields only.
    pub has_default: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, base: impl Into<String>, wrapping: Wrapping) -> Self {
        Self {
            name: name.into(),
            base: base.into(),
            wrapping,
            arguments: Vec::new(),
            has_default: false,
        }
    }

    pub fn nullable(&self) -> bool {
        self.wrapping.nullable
    }

    pub fn list_depth(&self) -> u8 {
        self.wrapping.list_depth
    }

    pub fn list_item_nullable(&self) -> bool {
        self.wrapping.list_item_nullable()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    pub name: String,
    pub kind: TypeKind,
    pub description: Option<String>,
    /// Objects, interfaces and input objects.
    pub fields: Vec<Field>,
    /// Union members, or the implementors of an interface.
    pub members: Vec<String>,
    /// Interfaces an object or interface declares.
    pub interfaces: Vec<String>,
    pub enum_values: Vec<String>,
}

impl NamedType {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            fields: Vec::new(),
            members: Vec::new(),
            interfaces: Vec::new(),
            enum_values: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// `__`-prefixed names are reserved for introspection.
    pub fn is_introspection(&self) -> bool {
        self.name.starts_with("__")
    }
}

/// The schema, indexed by type name.
#[derive(Debug, Clone, Default)]
pub struct SchemaTypeGraph {
    types: IndexMap<String, NamedType>,
    query: Option<String>,
    mutation: Option<String>,
    subscription: Option<String>,
}

impl SchemaTypeGraph {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    pub fn get(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name)
    }

    /// Like `get`, but a missing type is an error naming it.
    pub fn expect_type(&self, name: &str) -> Result<&NamedType> {
        self.get(name)
            .ok_or_else(|| Error::UnknownType(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn kind(&self, name: &str) -> Option<TypeKind> {
        self.get(name).map(|t| t.kind)
    }

    pub fn types(&self) -> impl Iterator<Item = &NamedType> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn field(&self, type_name: &str, field_name: &str) -> Option<&Field> {
        self.get(type_name)?.field(field_name)
    }

    /// Concrete object types a value of `name` may have at runtime.
    pub fn possible_types(&self, name: &str) -> Vec<&str> {
        let Some(ty) = self.get(name) else {
            return Vec::new();
        };
        match ty.kind {
            TypeKind::Object => vec![ty.name.as_str()],
            TypeKind::Union | TypeKind::Interface => ty
                .members
                .iter()
                .filter(|m| self.kind(m) == Some(TypeKind::Object))
                .map(String::as_str)
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn is_possible_type(&self, abstract_name: &str, object_name: &str) -> bool {
        self.possible_types(abstract_name).contains(&object_name)
    }

    pub fn root_type(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Query => self.query.as_deref(),
            OperationKind::Mutation => self.mutation.as_deref(),
            OperationKind::Subscription => self.subscription.as_deref(),
        }
    }

    pub fn is_root_type(&self, name: &str) -> bool {
        [&self.query, &self.mutation, &self.subscription]
            .into_iter()
            .any(|root| root.as_deref() == Some(name))
    }
}

/// Accumulates type definitions and extensions, then freezes them.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    types: IndexMap<String, NamedType>,
    extensions: Vec<NamedType>,
    query: Option<String>,
    mutation: Option<String>,
    subscription: Option<String>,
}

impl SchemaBuilder {
    pub fn add_type(&mut self, ty: NamedType) -> &mut Self {
        self.types.insert(ty.name.clone(), ty);
        self
    }

    /// Queue an `extend type` whose fields, members and values are appended
    /// to the base definition when the graph is built.
    pub fn extend_type(&mut self, ty: NamedType) -> &mut Self {
        self.extensions.push(ty);
        self
    }

    pub fn root(&mut self, kind: OperationKind, name: impl Into<String>) -> &mut Self {
        let slot = match kind {
            OperationKind::Query => &mut self.query,
            OperationKind::Mutation => &mut self.mutation,
            OperationKind::Subscription => &mut self.subscription,
        };
        *slot = Some(name.into());
        self
    }

    pub fn build(self) -> Result<SchemaTypeGraph> {
        let Self {
            mut types,
            extensions,
            query,
            mutation,
            subscription,
        } = self;

        for ext in extensions {
            let Some(base) = types.get_mut(&ext.name) else {
                return Err(Error::UnknownType(ext.name));
            };
            base.fields.extend(ext.fields);
            base.members.extend(ext.members);
            base.interfaces.extend(ext.interfaces);
            base.enum_values.extend(ext.enum_values);
        }

        for scalar in BUILTIN_SCALARS {
            if !types.contains_key(scalar) {
                types.insert(scalar.to_string(), NamedType::new(scalar, TypeKind::Scalar));
            }
        }

        // Interfaces learn their implementors from the objects naming them.
        let implementors: Vec<(String, String)> = types
            .values()
            .flat_map(|t| {
                t.interfaces
                    .iter()
                    .map(move |iface| (iface.clone(), t.name.clone()))
            })
            .collect();
        for (iface, implementor) in implementors {
            let Some(target) = types.get_mut(&iface) else {
                return Err(Error::UnknownType(iface));
            };
            if target.kind == TypeKind::Interface && !target.members.contains(&implementor) {
                target.members.push(implementor);
            }
        }

        let default_root = |name: &str| types.contains_key(name).then(|| name.to_string());
        let query = query.or_else(|| default_root("Query"));
        let mutation = mutation.or_else(|| default_root("Mutation"));
        let subscription = subscription.or_else(|| default_root("Subscription"));

        Ok(SchemaTypeGraph {
            types,
            query,
            mutation,
            subscription,
        })
    }
}
