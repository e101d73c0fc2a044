use std::path::{Path, PathBuf};

use super::loader::{Inputs, document_paths, is_document_file, load};

#[test]
fn document_extensions() {
    assert!(is_document_file(Path::new("ops/me.graphql")));
    assert!(is_document_file(Path::new("me.gql")));
    assert!(!is_document_file(Path::new("schema.graphqls")));
    assert!(!is_document_file(Path::new("README")));
}

#[test]
fn file_arguments_keep_their_order() {
    let args = [PathBuf::from("b.graphql"), PathBuf::from("a.graphql")];

    let paths = document_paths(&args).unwrap();

    assert_eq!(paths, args);
}

#[test]
fn directory_without_documents_is_an_error() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let err = document_paths(&[dir]).unwrap_err();

    assert!(err.starts_with("no .graphql files found in directory"));
}

#[test]
fn missing_schema_names_the_file() {
    let inputs = Inputs {
        schema: PathBuf::from("does-not-exist.graphql"),
        config: None,
        documents: Vec::new(),
    };

    let Err(err) = load(&inputs, true) else {
        panic!("expected a load error");
    };

    assert!(err.starts_with("failed to read 'does-not-exist.graphql'"));
}
