use indoc::indoc;

use super::*;
use crate::Error;
use crate::schema::load::parse_schema;
use crate::test_utils::{fixture_schema, schema};

#[test]
fn types_keep_declaration_order_with_builtins_last() {
    let schema = schema(indoc! {r#"
        type Query { b: B }
        type B { a: A }
        type A { id: ID }
    "#});

    let names: Vec<&str> = schema.types().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        ["Query", "B", "A", "ID", "String", "Int", "Float", "Boolean"]
    );
}

#[test]
fn declared_builtin_scalar_is_not_duplicated() {
    let schema = schema(indoc! {r#"
        scalar String
        type Query { name: String }
    "#});

    let strings = schema.types().filter(|t| t.name == "String").count();
    assert_eq!(strings, 1);
    assert_eq!(schema.types().next().map(|t| t.name.as_str()), Some("String"));
}

#[test]
fn conventional_root_names() {
    let schema = fixture_schema();

    assert_eq!(schema.root_type(OperationKind::Query), Some("Query"));
    assert_eq!(schema.root_type(OperationKind::Mutation), Some("Mutation"));
    assert_eq!(schema.root_type(OperationKind::Subscription), None);
    assert!(schema.is_root_type("Mutation"));
    assert!(!schema.is_root_type("User"));
}

#[test]
fn schema_definition_overrides_root_names() {
    let schema = schema(indoc! {r#"
        schema { query: Root }
        type Root { ok: Boolean }
        type Query { unused: Boolean }
    "#});

    assert_eq!(schema.root_type(OperationKind::Query), Some("Root"));
    assert!(!schema.is_root_type("Query"));
}

#[test]
fn possible_types_of_each_kind() {
    let schema = fixture_schema();

    assert_eq!(schema.possible_types("SearchResult"), ["User", "Post"]);
    assert_eq!(schema.possible_types("Node"), ["User", "Post"]);
    assert_eq!(schema.possible_types("User"), ["User"]);
    assert!(schema.possible_types("Role").is_empty());
    assert!(schema.possible_types("Missing").is_empty());
    assert!(schema.is_possible_type("Node", "Post"));
    assert!(!schema.is_possible_type("SearchResult", "Node"));
}

#[test]
fn extensions_append_to_the_base_type() {
    let schema = schema(indoc! {r#"
        type Query { a: Int }
        extend type Query { b: Int }
        enum Color { RED }
        extend enum Color { BLUE }
    "#});

    let query = schema.get("Query").unwrap();
    let fields: Vec<&str> = query.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fields, ["a", "b"]);
    assert_eq!(schema.get("Color").unwrap().enum_values, ["RED", "BLUE"]);
}

#[test]
fn extending_an_unknown_type_fails() {
    let err = parse_schema("extend type Ghost { a: Int }").unwrap_err();

    insta::assert_snapshot!(err, @"unknown type `Ghost`");
}

#[test]
fn invalid_sdl_is_a_parse_error() {
    let err = parse_schema("type Query {").unwrap_err();

    assert!(matches!(err, Error::Parse { what: "schema", .. }));
}

#[test]
fn field_wrapping_is_lossless() {
    let schema = fixture_schema();

    let tags = schema.field("Post", "tags").unwrap();
    assert_eq!(tags.base, "String");
    assert_eq!(tags.list_depth(), 2);
    assert!(tags.nullable());
    assert!(!tags.list_item_nullable());
    assert_eq!(tags.wrapping.display("String"), "[[String!]]");

    let friends = schema.field("User", "friends").unwrap();
    assert_eq!(friends.wrapping.display("User"), "[User]");
    let posts = schema.field("User", "posts").unwrap();
    assert_eq!(posts.wrapping.display("Post"), "[Post!]!");
}

#[test]
fn unwrap_list_strips_the_outer_level() {
    let inner = Wrapping::named(false).in_list(true).in_list(false);
    assert_eq!(inner.display("T"), "[[T!]]!");
    assert!(inner.item_nullable_at(0));
    assert!(!inner.item_nullable_at(1));

    let once = inner.unwrap_list().unwrap();
    assert_eq!(once.display("T"), "[T!]");
    let twice = once.unwrap_list().unwrap();
    assert_eq!(twice.display("T"), "T!");
    assert_eq!(twice.unwrap_list(), None);
}

#[test]
fn input_objects_record_defaults() {
    let schema = fixture_schema();

    let filter = schema.get("UserFilter").unwrap();
    assert_eq!(filter.kind, TypeKind::InputObject);
    assert!(!filter.field("role").unwrap().has_default);
    assert!(filter.field("limit").unwrap().has_default);
}

#[test]
fn arguments_are_indexed() {
    let schema = fixture_schema();

    let rename = schema.field("Mutation", "rename").unwrap();
    let args: Vec<String> = rename
        .arguments
        .iter()
        .map(|a| format!("{}: {}", a.name, a.wrapping.display(&a.base)))
        .collect();
    assert_eq!(args, ["id: ID!", "name: String!"]);
}

#[test]
fn kinds_classify_selection_behavior() {
    assert!(TypeKind::Union.is_abstract());
    assert!(TypeKind::Interface.is_composite());
    assert!(!TypeKind::InputObject.is_composite());
    assert!(TypeKind::Enum.is_leaf());
    assert!(!TypeKind::Object.is_leaf());
}
