//! TypeContext: interned type expressions and names.
//!
//! Expressions are hash-consed, so structurally identical trees share one
//! `TypeId`. Building the same entry twice is therefore free and yields the
//! same ID, and tests can compare expressions by building the expected tree
//! in the same context.

use std::collections::{HashMap, HashSet};

use typegraph_core::{Interner, Symbol};

use super::{RecordField, RefTarget, TypeExpr, TypeId, TypeRef};
use crate::schema::Wrapping;

#[derive(Debug, Clone, Default)]
pub struct TypeContext {
    interner: Interner,
    types: Vec<TypeExpr>,
    type_map: HashMap<TypeExpr, TypeId>,
}

impl TypeContext {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Symbol interning ==========

    #[inline]
    pub fn intern(&mut self, s: &str) -> Symbol {
        self.interner.intern(s)
    }

    #[inline]
    pub fn resolve(&self, sym: Symbol) -> &str {
        self.interner.resolve(sym)
    }

    #[inline]
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    // ========== Type interning ==========

    /// Intern an expression, deduplicating identical ones.
    pub fn intern_type(&mut self, expr: TypeExpr) -> TypeId {
        if let Some(&id) = self.type_map.get(&expr) {
            return id;
        }

        let id = TypeId(self.types.len() as u32);
        self.types.push(expr.clone());
        self.type_map.insert(expr, id);
        id
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeExpr> {
        self.types.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    // ========== Constructors ==========

    pub fn reference(&mut self, target: RefTarget, name: &str) -> TypeId {
        let name = self.intern(name);
        self.intern_type(TypeExpr::Ref(TypeRef { target, name }))
    }

    pub fn schema_ref(&mut self, name: &str) -> TypeId {
        self.reference(RefTarget::Schema, name)
    }

    pub fn table_ref(&mut self, name: &str) -> TypeId {
        self.reference(RefTarget::Table, name)
    }

    pub fn fragment_ref(&mut self, name: &str) -> TypeId {
        self.reference(RefTarget::Fragment, name)
    }

    pub fn external(&mut self, module: &str, symbol: &str) -> TypeId {
        let module = self.intern(module);
        let symbol = self.intern(symbol);
        self.intern_type(TypeExpr::External { module, symbol })
    }

    pub fn inline(&mut self, text: &str) -> TypeId {
        let text = self.intern(text);
        self.intern_type(TypeExpr::Inline(text))
    }

    pub fn literal(&mut self, text: &str) -> TypeId {
        let text = self.intern(text);
        self.intern_type(TypeExpr::Literal(text))
    }

    /// Pick `fields` of `source`. Field order is kept as given.
    pub fn projection(&mut self, source: TypeId, fields: &[&str]) -> TypeId {
        let fields = fields.iter().map(|f| self.intern(f)).collect();
        self.intern_type(TypeExpr::Projection { source, fields })
    }

    /// `source` minus `removed` plus `added`; plain `source` when both are empty.
    pub fn override_merge(
        &mut self,
        source: TypeId,
        removed: Vec<Symbol>,
        added: Vec<RecordField>,
    ) -> TypeId {
        if removed.is_empty() && added.is_empty() {
            return source;
        }
        self.intern_type(TypeExpr::OverrideMerge {
            source,
            removed,
            added,
        })
    }

    /// Union of `variants`. Nested unions are flattened and duplicates
    /// dropped; a single variant is returned as is.
    pub fn union(&mut self, variants: impl IntoIterator<Item = TypeId>) -> TypeId {
        let items = self.flatten(variants, TypeExpr::is_union);
        if let [single] = items.as_slice() {
            return *single;
        }
        self.intern_type(TypeExpr::Union(items))
    }

    /// Intersection of `parts`, flattened like `union`. No parts is the empty record.
    pub fn intersection(&mut self, parts: impl IntoIterator<Item = TypeId>) -> TypeId {
        let items = self.flatten(parts, TypeExpr::is_intersection);
        if items.is_empty() {
            return self.record(Vec::new());
        }
        if let [single] = items.as_slice() {
            return *single;
        }
        self.intern_type(TypeExpr::Intersection(items))
    }

    fn flatten(
        &self,
        items: impl IntoIterator<Item = TypeId>,
        nested: fn(&TypeExpr) -> bool,
    ) -> Vec<TypeId> {
        let mut out: Vec<TypeId> = Vec::new();
        for id in items {
            let children = match self.get(id) {
                Some(expr) if nested(expr) => expr.children(),
                _ => vec![id],
            };
            for child in children {
                if !out.contains(&child) {
                    out.push(child);
                }
            }
        }
        out
    }

    pub fn nullable(&mut self, inner: TypeId) -> TypeId {
        if let Some(TypeExpr::Nullable(_)) = self.get(inner) {
            return inner;
        }
        self.intern_type(TypeExpr::Nullable(inner))
    }

    pub fn list(&mut self, item: TypeId, item_nullable: bool) -> TypeId {
        self.intern_type(TypeExpr::List {
            item,
            item_nullable,
        })
    }

    /// Wrap `base` in lists (innermost first) and an outer `Nullable`
    /// following `wrapping`.
    pub fn wrap(&mut self, base: TypeId, wrapping: &Wrapping) -> TypeId {
        let mut ty = base;
        for level in (0..wrapping.list_depth).rev() {
            ty = self.list(ty, wrapping.item_nullable_at(level));
        }
        if wrapping.nullable {
            ty = self.nullable(ty);
        }
        ty
    }

    /// Fill the gaps between `pieces` with `inner`.
    pub fn template(&mut self, pieces: &[String], inner: TypeId) -> TypeId {
        let pieces = pieces.iter().map(|p| self.intern(p)).collect();
        self.intern_type(TypeExpr::Template { pieces, inner })
    }

    pub fn record(&mut self, fields: Vec<RecordField>) -> TypeId {
        self.intern_type(TypeExpr::Record(fields))
    }

    // ========== Queries ==========

    pub fn record_fields(&self, id: TypeId) -> Option<&[RecordField]> {
        match self.get(id)? {
            TypeExpr::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Names of a record's fields, in order.
    pub fn field_names(&self, id: TypeId) -> Vec<&str> {
        self.record_fields(id)
            .map(|fields| fields.iter().map(|f| self.resolve(f.name)).collect())
            .unwrap_or_default()
    }

    /// Every `Ref` reachable from `root`, in first-visit order.
    pub fn references(&self, root: TypeId) -> Vec<TypeRef> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            let Some(expr) = self.get(id) else { continue };
            if let Some(r) = expr.as_type_ref()
                && !out.contains(&r)
            {
                out.push(r);
            }
            stack.extend(expr.children().into_iter().rev());
        }
        out
    }
}
