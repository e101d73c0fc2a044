use indoc::indoc;

use super::*;
use crate::Error;
use crate::document::load::parse_document;
use crate::test_utils::document;

fn field(selection: &Selection) -> &FieldSelection {
    match selection {
        Selection::Field(field) => field,
        other => panic!("expected a field, got {other:?}"),
    }
}

#[test]
fn definitions_keep_source_order() {
    let document = document(indoc! {r#"
        query Zeta { me { id } }
        fragment B on User { id }
        mutation Alpha { rename(id: "1", name: "x") { id } }
        fragment A on User { name }
    "#});

    let operations: Vec<Option<&str>> = document
        .operations
        .iter()
        .map(|op| op.name.as_deref())
        .collect();
    assert_eq!(operations, [Some("Zeta"), Some("Alpha")]);
    assert_eq!(document.operations[1].kind, OperationKind::Mutation);

    let fragments: Vec<&str> = document.fragments.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fragments, ["B", "A"]);
    assert_eq!(document.fragments[0].pos, Pos { line: 2, column: 1 });
}

#[test]
fn fields_keep_aliases_arguments_and_directives() {
    let document = document(indoc! {r#"
        query Q($skip: Boolean!) {
          who: user(id: "1") @skip(if: $skip) { name }
        }
    "#});

    let who = field(&document.operations[0].selection_set[0]);
    assert_eq!(who.name, "user");
    assert_eq!(who.response_key(), "who");
    assert_eq!(who.arguments, ["id"]);
    assert!(who.is_conditional());
    assert_eq!(who.selection_set, [Selection::field("name")]);
}

#[test]
fn unrelated_directives_are_not_conditions() {
    let document = document("query Q { me @deprecated { id } }");

    assert!(!field(&document.operations[0].selection_set[0]).is_conditional());
}

#[test]
fn inline_fragments_and_spreads() {
    let document = document(indoc! {r#"
        query Q {
          node(id: "1") {
            ... on User @include(if: true) { name }
            ... { id }
            ...PostFields
          }
        }
        fragment PostFields on Post { title }
    "#});

    let node = field(&document.operations[0].selection_set[0]);
    let [on_user, bare, spread] = node.selection_set.as_slice() else {
        panic!("expected three selections");
    };
    let Selection::InlineFragment(on_user) = on_user else {
        panic!("expected an inline fragment");
    };
    assert_eq!(on_user.type_condition.as_deref(), Some("User"));
    assert!(on_user.is_conditional());
    let Selection::InlineFragment(bare) = bare else {
        panic!("expected an inline fragment");
    };
    assert_eq!(bare.type_condition, None);
    assert_eq!(spread, &Selection::spread("PostFields"));
}

#[test]
fn variables_carry_wrapping_and_defaults() {
    let document = document("query Q($ids: [ID!]!, $limit: Int = 10) { me { id } }");

    let variables = &document.operations[0].variables;
    assert_eq!(variables[0].name, "ids");
    assert_eq!(variables[0].wrapping.display(&variables[0].base), "[ID!]!");
    assert!(!variables[0].has_default);
    assert_eq!(variables[1].base, "Int");
    assert!(variables[1].has_default);
}

#[test]
fn fragment_only_documents_parse() {
    let document = document(indoc! {r#"
        fragment A on User { ...B }
        fragment B on User { id }
    "#});

    assert!(document.operations.is_empty());
    assert_eq!(document.fragments.len(), 2);
}

#[test]
fn spreads_are_found_at_any_depth_once() {
    let document = document(indoc! {r#"
        fragment A on User {
          ...B
          friends { ...C ...B }
          ... on User { ...D }
        }
    "#});

    assert_eq!(document.fragments[0].spreads(), ["B", "C", "D"]);
}

#[test]
fn same_definition_ignores_position() {
    let first = document("fragment A on User { id }");
    let second = document("\n\nfragment A on User { id }");
    let other = document("fragment A on User { name }");

    let a = &first.fragments[0];
    assert_ne!(a.pos, second.fragments[0].pos);
    assert!(a.same_definition(&second.fragments[0]));
    assert!(!a.same_definition(&other.fragments[0]));
}

#[test]
fn merge_appends_definitions() {
    let mut merged = document("query A { me { id } }");
    merged.merge(document("fragment F on User { id }"));

    assert_eq!(merged.operations.len(), 1);
    assert_eq!(merged.fragments.len(), 1);
    assert!(!merged.is_empty());
    assert!(Document::default().is_empty());
}

#[test]
fn syntax_errors_are_parse_errors() {
    let err = parse_document("query {").unwrap_err();

    assert!(matches!(err, Error::Parse { what: "document", .. }));
}

#[test]
fn operation_kind_names() {
    assert_eq!(OperationKind::Subscription.to_string(), "subscription");
    assert_eq!(OperationKind::Mutation.type_suffix(), "Mutation");
}
