//! Symbolic type expressions.
//!
//! Every table entry and every compiled selection is a tree of `TypeExpr`
//! nodes interned in a `TypeContext`. Named schema types are never inlined:
//! they appear as `Ref` nodes keyed by name, which keeps recursive schemas
//! finite.

mod context;

#[cfg(test)]
mod types_tests;

pub use context::TypeContext;

use typegraph_core::Symbol;

/// Interned type expression ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Which table a `Ref` points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RefTarget {
    /// The declared shape of a schema type (fields as written in the SDL).
    Schema,
    /// The resolver table the expression lives in (output or parent).
    Table,
    /// The compiled fragment table.
    Fragment,
    /// The reserved introspection types (`__Schema`, `__Type`, ...).
    Introspection,
}

impl RefTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            RefTarget::Schema => "schema",
            RefTarget::Table => "resolver table",
            RefTarget::Fragment => "fragment table",
            RefTarget::Introspection => "introspection schema",
        }
    }
}

/// Lazy pointer to a named entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub target: RefTarget,
    pub name: Symbol,
}

/// A field of a `Record`, or a field added by an `OverrideMerge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordField {
    pub name: Symbol,
    pub ty: TypeId,
    /// The key may be absent from the value (conditional selection,
    /// nullable resolver field).
    pub optional: bool,
}

impl RecordField {
    pub fn required(name: Symbol, ty: TypeId) -> Self {
        Self {
            name,
            ty,
            optional: false,
        }
    }

    pub fn optional(name: Symbol, ty: TypeId) -> Self {
        Self {
            name,
            ty,
            optional: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    Ref(TypeRef),
    /// An opaque type imported from another module.
    External { module: Symbol, symbol: Symbol },
    /// Target-language type text supplied verbatim by a mapper.
    Inline(Symbol),
    /// A string literal type, used for `__typename` discriminants.
    Literal(Symbol),
    /// Only `fields` of `source`.
    Projection { source: TypeId, fields: Vec<Symbol> },
    /// `source` without `removed`, plus `added` (which may replace removed keys).
    OverrideMerge {
        source: TypeId,
        removed: Vec<Symbol>,
        added: Vec<RecordField>,
    },
    /// One arm per mutually exclusive concrete type. Empty means uninhabited.
    Union(Vec<TypeId>),
    /// Structural merge of every part.
    Intersection(Vec<TypeId>),
    Nullable(TypeId),
    List { item: TypeId, item_nullable: bool },
    /// Template text split at each placeholder; `inner` fills every gap.
    /// `pieces.len()` is the placeholder count plus one.
    Template { pieces: Vec<Symbol>, inner: TypeId },
    /// Anonymous object, fields in source order.
    Record(Vec<RecordField>),
}

impl TypeExpr {
    pub fn as_type_ref(&self) -> Option<TypeRef> {
        match self {
            TypeExpr::Ref(r) => Some(*r),
            _ => None,
        }
    }

    pub fn is_union(&self) -> bool {
        matches!(self, TypeExpr::Union(_))
    }

    pub fn is_intersection(&self) -> bool {
        matches!(self, TypeExpr::Intersection(_))
    }

    /// Direct child expressions, in a stable order.
    pub fn children(&self) -> Vec<TypeId> {
        match self {
            TypeExpr::Ref(_) | TypeExpr::External { .. } | TypeExpr::Inline(_) => vec![],
            TypeExpr::Literal(_) => vec![],
            TypeExpr::Projection { source, .. } => vec![*source],
            TypeExpr::OverrideMerge { source, added, .. } => std::iter::once(*source)
                .chain(added.iter().map(|f| f.ty))
                .collect(),
            TypeExpr::Union(items) | TypeExpr::Intersection(items) => items.clone(),
            TypeExpr::Nullable(inner) => vec![*inner],
            TypeExpr::List { item, .. } => vec![*item],
            TypeExpr::Template { inner, .. } => vec![*inner],
            TypeExpr::Record(fields) => fields.iter().map(|f| f.ty).collect(),
        }
    }
}
