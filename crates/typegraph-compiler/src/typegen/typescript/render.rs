//! Type expression to TypeScript text.

use indexmap::IndexMap;
use typegraph_core::Symbol;

use crate::schema::TypeKind;
use crate::types::{RecordField, RefTarget, TypeExpr, TypeId, TypeRef};

use super::Emitter;

impl Emitter<'_> {
    /// Emit `export type Name = Body;`.
    pub(super) fn emit_type_decl(&mut self, name: &str, body: &str) {
        let c = self.c();
        if self.config.export {
            self.output.push_str(&format!("{} ", c.punct("export")));
        }
        self.output.push_str(&format!(
            "{} {} {} {}{}\n\n",
            c.punct("type"),
            c.name(name),
            c.punct("="),
            body,
            c.punct(";"),
        ));
    }

    pub(super) fn emit_table(&mut self, name: &str, entries: &IndexMap<String, TypeId>) {
        let c = self.c();
        let mut body = format!("{}\n", c.punct("{"));
        for (key, &id) in entries {
            let ts = self.type_to_ts(id, Some(name));
            body.push_str(&format!(
                "  {}{} {}{}\n",
                key,
                c.punct(":"),
                ts,
                c.punct(";")
            ));
        }
        body.push_str(&c.punct("}"));
        self.emit_type_decl(name, &body);
    }

    pub(super) fn emit_selection_type(&mut self, name: &str, ty: TypeId) {
        let body = self.expr_to_ts(ty, None);
        self.emit_type_decl(name, &body);
    }

    pub(super) fn emit_variables_type(&mut self, name: &str, ty: TypeId) {
        let body = match self.ctx.record_fields(ty) {
            Some([]) => "Record<string, never>".to_string(),
            _ => self.type_to_ts(ty, None),
        };
        self.emit_type_decl(name, &body);
    }

    /// Render `id`, or the sub-type name declared for it.
    pub(super) fn type_to_ts(&self, id: TypeId, table: Option<&str>) -> String {
        match self.named.get(&id) {
            Some(name) => self.c().name(name),
            None => self.expr_to_ts(id, table),
        }
    }

    /// Render the expression behind `id`. Table references index into `table`.
    fn expr_to_ts(&self, id: TypeId, table: Option<&str>) -> String {
        let c = self.c();
        let Some(expr) = self.ctx.get(id) else {
            return "unknown".to_string();
        };

        match expr {
            TypeExpr::Ref(r) => self.ref_to_ts(*r, table),
            TypeExpr::External { symbol, .. } => c.name(self.ctx.resolve(*symbol)),
            TypeExpr::Inline(text) => self.ctx.resolve(*text).to_string(),
            TypeExpr::Literal(text) => {
                format!("{}'{}'{}", c.green, self.ctx.resolve(*text), c.reset)
            }
            TypeExpr::Projection { source, fields } => {
                let source = self.type_to_ts(*source, table);
                format!("Pick<{}, {}>", source, self.key_union(fields))
            }
            TypeExpr::OverrideMerge {
                source,
                removed,
                added,
            } => {
                let source = self.type_to_ts(*source, table);
                let base = if removed.is_empty() {
                    source
                } else {
                    format!("Omit<{}, {}>", source, self.key_union(removed))
                };
                if added.is_empty() {
                    return base;
                }
                format!("{} {} {}", base, c.punct("&"), self.record_to_ts(added, table))
            }
            TypeExpr::Union(variants) if variants.is_empty() => "never".to_string(),
            TypeExpr::Union(variants) => variants
                .iter()
                .map(|&v| self.type_to_ts(v, table))
                .collect::<Vec<_>>()
                .join(&format!(" {} ", c.punct("|"))),
            TypeExpr::Intersection(parts) => parts
                .iter()
                .map(|&p| self.operand(p, table))
                .collect::<Vec<_>>()
                .join(&format!(" {} ", c.punct("&"))),
            TypeExpr::Nullable(inner) => format!("Maybe<{}>", self.type_to_ts(*inner, table)),
            TypeExpr::List {
                item,
                item_nullable,
            } => {
                let item = self.type_to_ts(*item, table);
                if *item_nullable {
                    format!("Array<Maybe<{item}>>")
                } else {
                    format!("Array<{item}>")
                }
            }
            TypeExpr::Template { pieces, inner } => {
                let inner = self.operand(*inner, table);
                pieces
                    .iter()
                    .map(|&p| self.ctx.resolve(p))
                    .collect::<Vec<_>>()
                    .join(&inner)
            }
            TypeExpr::Record(fields) => self.record_to_ts(fields, table),
        }
    }

    /// Like `type_to_ts`, but parenthesizes unions.
    fn operand(&self, id: TypeId, table: Option<&str>) -> String {
        let text = self.type_to_ts(id, table);
        match self.ctx.get(id) {
            Some(TypeExpr::Union(variants)) if variants.len() > 1 => format!("({text})"),
            _ => text,
        }
    }

    fn ref_to_ts(&self, r: TypeRef, table: Option<&str>) -> String {
        let c = self.c();
        let name = self.ctx.resolve(r.name);
        match r.target {
            RefTarget::Table => match table {
                Some(table) => format!("{}['{}']", c.name(table), name),
                None => c.name(name),
            },
            RefTarget::Schema => match self.schema.kind(name) {
                Some(TypeKind::Scalar) => format!("{}['{}']", c.name("Scalars"), name),
                _ => c.name(name),
            },
            RefTarget::Fragment => match self.fragments.get(name) {
                Some(entry) => c.name(&entry.type_name),
                None => c.name(name),
            },
            RefTarget::Introspection => c.name(name),
        }
    }

    fn record_to_ts(&self, fields: &[RecordField], table: Option<&str>) -> String {
        let c = self.c();
        if fields.is_empty() {
            return c.punct("{}");
        }

        let fields: Vec<String> = fields
            .iter()
            .map(|f| {
                let marker = if f.optional { "?" } else { "" };
                format!(
                    "{}{} {}",
                    self.ctx.resolve(f.name),
                    c.punct(&format!("{marker}:")),
                    self.type_to_ts(f.ty, table)
                )
            })
            .collect();
        format!(
            "{} {} {}",
            c.punct("{"),
            fields.join(&format!("{} ", c.punct(";"))),
            c.punct("}")
        )
    }

    fn key_union(&self, keys: &[Symbol]) -> String {
        let c = self.c();
        keys.iter()
            .map(|&k| format!("{}'{}'{}", c.green, self.ctx.resolve(k), c.reset))
            .collect::<Vec<_>>()
            .join(&format!(" {} ", c.punct("|")))
    }
}
