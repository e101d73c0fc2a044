use crate::Colors;

#[test]
fn off_renders_plain_text() {
    let c = Colors::new(false);

    assert!(!c.is_enabled());
    assert_eq!(c.name("User"), "User");
    assert_eq!(c.punct(";"), ";");
}

#[test]
fn on_wraps_in_escape_codes() {
    let c = Colors::new(true);

    assert!(c.is_enabled());
    assert_eq!(c.name("User"), "\x1b[34mUser\x1b[0m");
}
