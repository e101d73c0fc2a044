use crate::Interner;

#[test]
fn intern_deduplicates_type_names() {
    let mut interner = Interner::new();

    let a = interner.intern("User");
    let b = interner.intern("User");
    let c = interner.intern("Post");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.len(), 2);
}

#[test]
fn resolve_returns_original_text() {
    let mut interner = Interner::new();

    let sym = interner.intern("__typename");
    assert_eq!(interner.resolve(sym), "__typename");
}

#[test]
fn intern_owned_reuses_existing_symbol() {
    let mut interner = Interner::new();

    let a = interner.intern("Query");
    let b = interner.intern_owned("Query".to_string());

    assert_eq!(a, b);
    assert_eq!(interner.len(), 1);
}

#[test]
fn get_does_not_intern() {
    let mut interner = Interner::new();
    interner.intern("Node");

    assert!(interner.get("Node").is_some());
    assert!(interner.get("Edge").is_none());
    assert_eq!(interner.len(), 1);
}

#[test]
fn symbol_ordering_is_insertion_order() {
    let mut interner = Interner::new();

    let z = interner.intern("Zebra");
    let a = interner.intern("Apple");

    assert!(z < a);
}

#[test]
fn try_resolve_foreign_symbol() {
    let mut big = Interner::new();
    big.intern("a");
    let foreign = big.intern("b");

    let small = Interner::new();
    assert_eq!(small.try_resolve(foreign), None);
}

#[test]
fn iter_in_insertion_order() {
    let mut interner = Interner::new();
    interner.intern("Query");
    interner.intern("User");
    interner.intern("Query");

    let names: Vec<_> = interner.iter().map(|(_, s)| s).collect();
    assert_eq!(names, ["Query", "User"]);
}
