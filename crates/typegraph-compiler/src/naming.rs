//! Identifier generation for synthesized types.
//!
//! The naming convention is a pluggable `NameConverter` passed explicitly to
//! every pass that needs one. `NameScope` hands out unique names within one
//! compilation unit.

use std::collections::BTreeSet;

use serde::Deserialize;
use typegraph_core::utils::{to_camel_case, to_pascal_case, to_snake_case};

/// Prefix added per collision when a generated name is already taken.
pub const COLLISION_MARKER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    #[default]
    Pascal,
    Camel,
    Snake,
    /// Leave the raw name untouched.
    Keep,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOptions<'a> {
    pub prefix: Option<&'a str>,
    pub suffix: Option<&'a str>,
    /// Overrides the converter's own case style.
    pub case: Option<CaseStyle>,
}

impl<'a> ConvertOptions<'a> {
    pub fn suffix(suffix: &'a str) -> Self {
        Self {
            suffix: Some(suffix),
            ..Self::default()
        }
    }
}

pub trait NameConverter {
    fn convert(&self, raw: &str, options: &ConvertOptions<'_>) -> String;
}

impl<F> NameConverter for F
where
    F: Fn(&str, &ConvertOptions<'_>) -> String,
{
    fn convert(&self, raw: &str, options: &ConvertOptions<'_>) -> String {
        self(raw, options)
    }
}

/// Case conversion plus a fixed type prefix.
#[derive(Debug, Clone, Default)]
pub struct DefaultNamer {
    pub case: CaseStyle,
    pub prefix: String,
}

impl DefaultNamer {
    pub fn new(case: CaseStyle, prefix: impl Into<String>) -> Self {
        Self {
            case,
            prefix: prefix.into(),
        }
    }
}

impl NameConverter for DefaultNamer {
    fn convert(&self, raw: &str, options: &ConvertOptions<'_>) -> String {
        let case = options.case.unwrap_or(self.case);
        let body = match case {
            CaseStyle::Pascal => to_pascal_case(raw),
            CaseStyle::Camel => to_camel_case(raw),
            CaseStyle::Snake => to_snake_case(raw),
            CaseStyle::Keep => raw.to_string(),
        };
        let prefix = options.prefix.unwrap_or(&self.prefix);
        let suffix = options.suffix.unwrap_or_default();
        format!("{prefix}{body}{suffix}")
    }
}

/// Names already handed out in one compilation unit.
///
/// A taken name gets one more leading `_` per collision, so the n-th
/// claim of `User` yields `User`, `_User`, `__User`, ...
#[derive(Debug, Clone, Default)]
pub struct NameScope {
    used: BTreeSet<String>,
}

impl NameScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, name: &str) -> String {
        let mut candidate = name.to_string();
        while self.used.contains(&candidate) {
            candidate.insert(0, COLLISION_MARKER);
        }
        self.used.insert(candidate.clone());
        candidate
    }

    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
