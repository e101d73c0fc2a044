//! Identifier case conversion.
//!
//! These back the default naming convention. Callers that need another
//! convention plug in their own converter and never reach this module.

fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | '.' | ' ')
}

/// Convert snake_case, kebab-case or camelCase to PascalCase.
///
/// Words separated by `_`, `-`, `.` or spaces are capitalized and joined.
/// Input that is already PascalCase is returned unchanged.
///
/// # Examples
/// ```
/// use typegraph_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("user_profile"), "UserProfile");
/// assert_eq!(to_pascal_case("allPosts"), "AllPosts");
/// assert_eq!(to_pascal_case("DroidInlineFragment"), "DroidInlineFragment");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let has_separator = s.chars().any(is_separator);
    let has_lowercase = s.chars().any(|c| c.is_ascii_lowercase());
    let starts_uppercase = s.chars().next().is_some_and(|c| c.is_ascii_uppercase());

    if starts_uppercase && has_lowercase && !has_separator {
        return s.to_string();
    }

    // camelCase keeps its inner humps, SCREAMING_CASE is normalized.
    let keep_inner_case = has_lowercase && !has_separator;

    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if is_separator(c) {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else if keep_inner_case {
            result.push(c);
        } else {
            result.push(c.to_ascii_lowercase());
        }
    }
    result
}

/// Convert to camelCase: PascalCase with a lowercase first letter.
///
/// # Examples
/// ```
/// use typegraph_core::utils::to_camel_case;
/// assert_eq!(to_camel_case("user_profile"), "userProfile");
/// assert_eq!(to_camel_case("GetUser"), "getUser");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => pascal,
    }
}

/// Convert PascalCase or camelCase to snake_case.
///
/// # Examples
/// ```
/// use typegraph_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("UserProfile"), "user_profile");
/// assert_eq!(to_snake_case("allPosts"), "all_posts");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 && !result.ends_with('_') {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else if is_separator(c) {
            if !result.ends_with('_') {
                result.push('_');
            }
        } else {
            result.push(c);
        }
    }
    result
}
