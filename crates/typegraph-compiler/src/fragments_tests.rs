use indoc::indoc;

use crate::fragments::order;
use crate::test_utils::document;

fn names(source: &str) -> Vec<String> {
    let document = document(source);
    let (ordered, _) = order(&document.fragments).unwrap();
    ordered.into_iter().map(|f| f.name).collect()
}

#[test]
fn chain_is_emitted_leaves_first() {
    let ordered = names(indoc! {r#"
        fragment F1 on User { ...F2 }
        fragment F2 on User { ...F3 }
        fragment F3 on User { id }
    "#});

    assert_eq!(ordered, ["F3", "F2", "F1"]);
}

#[test]
fn every_spread_precedes_its_user() {
    let document = document(indoc! {r#"
        fragment A on User { ...B ...C }
        fragment B on User { ...D }
        fragment C on User { ...D name }
        fragment D on User { id }
        fragment E on User { email }
    "#});

    let (ordered, _) = order(&document.fragments).unwrap();

    let position = |name: &str| ordered.iter().position(|f| f.name == name).unwrap();
    for fragment in &ordered {
        for spread in fragment.spreads() {
            assert!(position(spread) < position(&fragment.name));
        }
    }
    assert_eq!(ordered.len(), 5);
}

#[test]
fn independent_fragments_keep_source_order() {
    let ordered = names(indoc! {r#"
        fragment B on User { id }
        fragment A on User { name }
        fragment C on Post { title }
    "#});

    assert_eq!(ordered, ["B", "A", "C"]);
}

#[test]
fn spreads_of_unknown_fragments_are_ignored() {
    let ordered = names(indoc! {r#"
        fragment A on User { ...Elsewhere id }
    "#});

    assert_eq!(ordered, ["A"]);
}

#[test]
fn identical_duplicates_collapse_with_warning() {
    let mut fragments = document("fragment A on User { id }").fragments;
    fragments.extend(document("fragment A on User { id }").fragments);

    let (ordered, diagnostics) = order(&fragments).unwrap();

    assert_eq!(ordered.len(), 1);
    insta::assert_snapshot!(diagnostics.render(), @"warning: fragment `A` is defined more than once");
}

#[test]
fn conflicting_duplicates_are_rejected() {
    let mut fragments = document("fragment A on User { id }").fragments;
    fragments.extend(document("fragment A on User { name }").fragments);

    let err = order(&fragments).unwrap_err();

    insta::assert_snapshot!(err, @"fragment `A` is defined more than once with different selections");
}

#[test]
fn mutual_spreads_are_a_cycle() {
    let document = document(indoc! {r#"
        fragment A on User { ...B }
        fragment B on User { ...A }
    "#});

    let err = order(&document.fragments).unwrap_err();

    assert!(matches!(err, crate::Error::FragmentCycle(ref names) if names.len() == 3));
}

#[test]
fn self_spread_is_a_cycle() {
    let document = document("fragment A on User { friends { ...A } }");

    let err = order(&document.fragments).unwrap_err();

    insta::assert_snapshot!(err, @"fragments spread each other in a cycle: A -> A");
}
