use super::*;

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::UnknownMapperType).emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    assert!(!diagnostics.has_warnings());
}

#[test]
fn report_with_detail_and_subject() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnknownMapperType)
        .subject("Usr")
        .message("Usr")
        .emit();

    let msg = diagnostics.iter().next().unwrap();
    assert_eq!(msg.message(), "mapper targets unknown type `Usr`");
    assert_eq!(msg.subjects(), ["Usr"]);
}

#[test]
fn warnings_are_counted_separately() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnusedMappers)
        .message("A,B")
        .emit();
    diagnostics
        .report(DiagnosticKind::DuplicateFragment)
        .message("UserFields")
        .emit();

    assert_eq!(diagnostics.warning_count(), 2);
    assert_eq!(diagnostics.error_count(), 0);
}

#[test]
fn render_plain_without_source() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnusedMappers)
        .message("Post,Comment")
        .emit();
    diagnostics
        .report(DiagnosticKind::UnknownMapperType)
        .message("Usr")
        .emit();

    insta::assert_snapshot!(diagnostics.render(), @r"
    error: mapper targets unknown type `Usr`
      = help: mapper keys must name a type defined in the schema

    warning: Unused mappers: Post,Comment
      = help: set `show_unused_mappers = false` to silence this
    ");
}

#[test]
fn extend_keeps_order() {
    let mut a = Diagnostics::new();
    a.report(DiagnosticKind::DuplicateFragment).message("A").emit();
    let mut b = Diagnostics::new();
    b.report(DiagnosticKind::DuplicateFragment).message("B").emit();

    a.extend(b);

    let messages: Vec<_> = a.iter().map(|d| d.message().to_string()).collect();
    assert_eq!(
        messages,
        [
            "fragment `A` is defined more than once",
            "fragment `B` is defined more than once"
        ]
    );
}

#[test]
fn of_kind_filters() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::UnusedMappers).emit();
    diagnostics.report(DiagnosticKind::LegacyMapperSyntax).emit();

    assert_eq!(diagnostics.of_kind(DiagnosticKind::UnusedMappers).count(), 1);
    assert_eq!(diagnostics.of_kind(DiagnosticKind::UnknownMapperType).count(), 0);
}

#[test]
fn render_with_source_points_at_the_span() {
    let source = "[mappers]\nUsr = \"./models#User\"\n";
    let start = source.find("Usr").unwrap();
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnknownMapperType)
        .message("Usr")
        .span(start..start + 3)
        .emit();

    let text = diagnostics
        .printer()
        .source(source)
        .path("codegen.toml")
        .render();

    assert!(text.starts_with("error: mapper targets unknown type `Usr`"));
    assert!(text.contains("codegen.toml"));
    assert!(text.contains("^^^"));
    assert!(text.contains("help: mapper keys must name a type defined in the schema"));
}
