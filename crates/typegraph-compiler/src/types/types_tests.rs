use super::*;
use crate::schema::Wrapping;

#[test]
fn identical_expressions_share_an_id() {
    let mut ctx = TypeContext::new();

    let a = ctx.schema_ref("User");
    let b = ctx.schema_ref("User");
    let table = ctx.table_ref("User");

    assert_eq!(a, b);
    assert_ne!(a, table);
    assert_eq!(ctx.len(), 2);
}

#[test]
fn union_flattens_and_dedupes() {
    let mut ctx = TypeContext::new();
    let a = ctx.literal("A");
    let b = ctx.literal("B");
    let c = ctx.literal("C");

    let ab = ctx.union([a, b]);
    let abc = ctx.union([ab, b, c]);

    assert_eq!(ctx.get(abc), Some(&TypeExpr::Union(vec![a, b, c])));
    assert_eq!(ctx.union([a]), a);
    assert_eq!(ctx.union([a, a]), a);
}

#[test]
fn empty_union_is_uninhabited() {
    let mut ctx = TypeContext::new();

    let never = ctx.union([]);

    assert_eq!(ctx.get(never), Some(&TypeExpr::Union(vec![])));
}

#[test]
fn intersection_flattens_and_collapses() {
    let mut ctx = TypeContext::new();
    let a = ctx.schema_ref("A");
    let b = ctx.schema_ref("B");
    let c = ctx.schema_ref("C");

    let ab = ctx.intersection([a, b]);
    let abc = ctx.intersection([c, ab]);

    assert_eq!(ctx.get(abc), Some(&TypeExpr::Intersection(vec![c, a, b])));
    assert_eq!(ctx.intersection([b]), b);
    let empty = ctx.intersection([]);
    assert_eq!(ctx.record_fields(empty), Some(&[][..]));
}

#[test]
fn nullable_is_idempotent() {
    let mut ctx = TypeContext::new();
    let user = ctx.schema_ref("User");

    let once = ctx.nullable(user);
    let twice = ctx.nullable(once);

    assert_eq!(once, twice);
    assert_eq!(ctx.get(once), Some(&TypeExpr::Nullable(user)));
}

#[test]
fn override_merge_without_changes_is_the_source() {
    let mut ctx = TypeContext::new();
    let user = ctx.schema_ref("User");

    assert_eq!(ctx.override_merge(user, Vec::new(), Vec::new()), user);
}

#[test]
fn wrap_builds_lists_inside_out() {
    let mut ctx = TypeContext::new();
    let string = ctx.schema_ref("String");
    // [[String!]]
    let wrapping = Wrapping::named(false).in_list(true).in_list(true);

    let wrapped = ctx.wrap(string, &wrapping);

    let inner = ctx.list(string, false);
    let outer = ctx.list(inner, true);
    let expected = ctx.nullable(outer);
    assert_eq!(wrapped, expected);
}

#[test]
fn wrap_of_plain_non_null_is_identity() {
    let mut ctx = TypeContext::new();
    let id = ctx.schema_ref("ID");

    assert_eq!(ctx.wrap(id, &Wrapping::named(false)), id);
}

#[test]
fn template_keeps_pieces_and_inner() {
    let mut ctx = TypeContext::new();
    let user = ctx.schema_ref("User");

    let wrapped = ctx.template(&["Promise<".to_string(), ">".to_string()], user);

    let Some(TypeExpr::Template { pieces, inner }) = ctx.get(wrapped) else {
        panic!("expected a template");
    };
    let pieces: Vec<&str> = pieces.iter().map(|p| ctx.resolve(*p)).collect();
    assert_eq!(pieces, ["Promise<", ">"]);
    assert_eq!(*inner, user);
}

#[test]
fn record_fields_keep_order() {
    let mut ctx = TypeContext::new();
    let string = ctx.schema_ref("String");
    let b = ctx.intern("b");
    let a = ctx.intern("a");

    let record = ctx.record(vec![
        RecordField::required(b, string),
        RecordField::optional(a, string),
    ]);

    assert_eq!(ctx.field_names(record), ["b", "a"]);
    assert!(ctx.record_fields(record).unwrap()[1].optional);
    assert!(ctx.field_names(string).is_empty());
}

#[test]
fn references_are_collected_once_in_visit_order() {
    let mut ctx = TypeContext::new();
    let user = ctx.table_ref("User");
    let post = ctx.table_ref("Post");
    let query = ctx.schema_ref("Query");
    let me = ctx.intern("me");
    let posts = ctx.intern("posts");
    let list = ctx.list(post, false);
    let merged = ctx.override_merge(
        query,
        vec![me, posts],
        vec![RecordField::optional(me, user), RecordField::required(posts, list)],
    );
    let both = ctx.intersection([merged, user]);

    let names: Vec<(RefTarget, &str)> = ctx
        .references(both)
        .into_iter()
        .map(|r| (r.target, ctx.resolve(r.name)))
        .collect();
    assert_eq!(
        names,
        [
            (RefTarget::Schema, "Query"),
            (RefTarget::Table, "User"),
            (RefTarget::Table, "Post"),
        ]
    );
}

#[test]
fn children_cover_every_operand() {
    let mut ctx = TypeContext::new();
    let a = ctx.schema_ref("A");
    let b = ctx.schema_ref("B");
    let f = ctx.intern("f");

    let merge = TypeExpr::OverrideMerge {
        source: a,
        removed: vec![f],
        added: vec![RecordField::required(f, b)],
    };
    assert_eq!(merge.children(), [a, b]);
    assert!(TypeExpr::Literal(f).children().is_empty());
    assert_eq!(
        TypeExpr::List {
            item: a,
            item_nullable: true
        }
        .children(),
        [a]
    );
}
