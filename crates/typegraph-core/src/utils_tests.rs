use crate::utils::{to_camel_case, to_pascal_case, to_snake_case};

#[test]
fn pascal_case_from_snake() {
    assert_eq!(to_pascal_case("user_profile"), "UserProfile");
    assert_eq!(to_pascal_case("user"), "User");
    assert_eq!(to_pascal_case("_user"), "User");
    assert_eq!(to_pascal_case("user_"), "User");
}

#[test]
fn pascal_case_from_camel_keeps_humps() {
    assert_eq!(to_pascal_case("allPosts"), "AllPosts");
    assert_eq!(to_pascal_case("getUserById"), "GetUserById");
}

#[test]
fn pascal_case_normalizes_screaming() {
    assert_eq!(to_pascal_case("FOO_BAR"), "FooBar");
    assert_eq!(to_pascal_case("FOO"), "Foo");
}

#[test]
fn pascal_case_idempotent() {
    assert_eq!(to_pascal_case("UserProfile"), "UserProfile");
    assert_eq!(to_pascal_case("QRow"), "QRow");
    assert_eq!(to_pascal_case("Q"), "Q");
}

#[test]
fn pascal_case_from_kebab_and_dotted() {
    assert_eq!(to_pascal_case("user-profile"), "UserProfile");
    assert_eq!(to_pascal_case("user.profile"), "UserProfile");
}

#[test]
fn camel_case() {
    assert_eq!(to_camel_case("user_profile"), "userProfile");
    assert_eq!(to_camel_case("GetUser"), "getUser");
    assert_eq!(to_camel_case(""), "");
}

#[test]
fn snake_case() {
    assert_eq!(to_snake_case("UserProfile"), "user_profile");
    assert_eq!(to_snake_case("allPosts"), "all_posts");
    assert_eq!(to_snake_case("user-profile"), "user_profile");
}
