//! Mapper table: user overrides for schema type representations.
//!
//! A mapper string is either inline type text or an external reference:
//!
//! | Syntax                         | Type in output   | Import element        |
//! |--------------------------------|------------------|-----------------------|
//! | `Partial<{T}>`                 | template         | none                  |
//! | `./models#User`                | `User`           | `User`                |
//! | `./models#User as UserModel`   | `UserModel`      | `User as UserModel`   |
//! | `./models#default`             | the type's name  | default import        |
//! | `./models#default as Model`    | `Model`          | default import        |
//! | `./models#Models.User`         | `Models.User`    | `Models`              |
//! | `./models#Models#User`         | `Models.User`    | `Models` (legacy)     |
//!
//! A `{T}` placeholder anywhere in the type text makes the mapper a template
//! wrapped around the type's own resolved entry.

use indexmap::IndexMap;

use crate::{Error, Result};

pub const PLACEHOLDER: &str = "{T}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapperTarget {
    /// Type text used as written.
    Inline(String),
    /// Type text split at each placeholder.
    Template(Vec<String>),
    /// An imported type.
    External { module: String, symbol: String },
}

/// What a module must export for a mapper to typecheck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub module: String,
    /// `User`, `User as UserModel`, a namespace, or the default binding.
    pub element: String,
    pub default: bool,
    /// Written with the three-part `module#Ns#Type` form.
    pub legacy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapper {
    pub target: MapperTarget,
    pub import: Option<ImportSpec>,
}

impl Mapper {
    /// Parse a mapper string configured for `type_name`.
    ///
    /// `suffix` is appended to imported type names (before any generic
    /// arguments) and the import is aliased accordingly.
    pub fn parse(raw: &str, type_name: &str, suffix: Option<&str>) -> Result<Self> {
        let raw = raw.trim();
        let invalid = |reason: &str| Error::InvalidMapper {
            type_name: type_name.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(invalid("mapper is empty"));
        }
        if !raw.contains('#') {
            return Ok(Self {
                target: target_for(raw, None),
                import: None,
            });
        }

        let parts: Vec<&str> = raw.split('#').map(str::trim).collect();
        if parts.len() > 3 {
            return Err(invalid("expected `module#Type`"));
        }
        if parts.iter().any(|p| p.is_empty()) {
            return Err(invalid("module and type must not be empty"));
        }
        let module = parts[0].to_string();
        let legacy = parts.len() == 3;
        let path = parts[1];
        let with_suffix = |ty: &str| match suffix {
            Some(suffix) => add_suffix(ty, suffix),
            None => ty.to_string(),
        };

        let is_default = path == "default" || path.starts_with("default ");
        let alias = split_alias(path);

        let (symbol, element) = if legacy {
            (format!("{}.{}", parts[1], parts[2]), parts[1].to_string())
        } else if let Some((namespace, _)) = path.split_once('.').filter(|_| alias.is_none()) {
            (path.to_string(), namespace.to_string())
        } else if let Some((imported, alias)) = alias {
            let ty = with_suffix(alias);
            let element = if is_default {
                ty.clone()
            } else {
                format!("{imported} as {ty}")
            };
            (ty, element)
        } else if is_default {
            let ty = with_suffix(type_name);
            (ty.clone(), ty)
        } else {
            let ty = with_suffix(path);
            let element = if suffix.is_some() {
                format!("{path} as {ty}")
            } else {
                ty.clone()
            };
            (ty, element)
        };

        Ok(Self {
            target: target_for(&symbol, Some(&module)),
            import: Some(ImportSpec {
                module,
                element: strip_generics(&element),
                default: is_default,
                legacy,
            }),
        })
    }

    pub fn has_placeholder(&self) -> bool {
        matches!(self.target, MapperTarget::Template(_))
    }

    pub fn is_external(&self) -> bool {
        self.import.is_some()
    }
}

fn target_for(text: &str, module: Option<&str>) -> MapperTarget {
    if text.contains(PLACEHOLDER) {
        return MapperTarget::Template(text.split(PLACEHOLDER).map(str::to_string).collect());
    }
    match module {
        Some(module) => MapperTarget::External {
            module: module.to_string(),
            symbol: text.to_string(),
        },
        None => MapperTarget::Inline(text.to_string()),
    }
}

fn split_alias(path: &str) -> Option<(&str, &str)> {
    let mut words = path.split_whitespace();
    let imported = words.next()?;
    match (words.next(), words.next(), words.next()) {
        (Some("as"), Some(alias), None) => Some((imported, alias)),
        _ => None,
    }
}

/// `Model<T>` + `Suffix` = `ModelSuffix<T>`.
fn add_suffix(ty: &str, suffix: &str) -> String {
    match ty.find('<') {
        Some(generic) => format!("{}{suffix}{}", &ty[..generic], &ty[generic..]),
        None => format!("{ty}{suffix}"),
    }
}

/// Import elements never carry generic arguments.
fn strip_generics(element: &str) -> String {
    let mut out = String::with_capacity(element.len());
    let mut depth = 0usize;
    for c in element.chars() {
        match c {
            '<' => depth += 1,
            '>' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Imports needed by the configured mappers, grouped per module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperImport {
    pub module: String,
    pub default: Option<String>,
    pub named: Vec<String>,
}

/// Mapper configuration for one output: per-type mappers plus an optional
/// default applied to every type without its own.
#[derive(Debug, Clone, Default)]
pub struct MapperTable {
    mappers: IndexMap<String, Mapper>,
    default: Option<Mapper>,
}

impl MapperTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw mapper strings in configuration order.
    pub fn from_raw<'a>(
        mappers: impl IntoIterator<Item = (&'a str, &'a str)>,
        default: Option<&str>,
        suffix: Option<&str>,
    ) -> Result<Self> {
        let mut table = Self::new();
        for (type_name, raw) in mappers {
            table.insert(type_name, Mapper::parse(raw, type_name, suffix)?);
        }
        if let Some(raw) = default {
            table.default = Some(Mapper::parse(raw, "default", suffix)?);
        }
        Ok(table)
    }

    pub fn insert(&mut self, type_name: impl Into<String>, mapper: Mapper) -> &mut Self {
        self.mappers.insert(type_name.into(), mapper);
        self
    }

    pub fn set_default(&mut self, mapper: Mapper) -> &mut Self {
        self.default = Some(mapper);
        self
    }

    pub fn get(&self, type_name: &str) -> Option<&Mapper> {
        self.mappers.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.mappers.contains_key(type_name)
    }

    pub fn default_mapper(&self) -> Option<&Mapper> {
        self.default.as_ref()
    }

    /// Configured type names, in configuration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.mappers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Mapper)> {
        self.mappers.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }

    pub fn imports(&self) -> Vec<MapperImport> {
        let mut grouped: IndexMap<&str, MapperImport> = IndexMap::new();
        let specs = self
            .mappers
            .values()
            .chain(self.default.as_ref())
            .filter_map(|m| m.import.as_ref());
        for spec in specs {
            let entry = grouped
                .entry(spec.module.as_str())
                .or_insert_with(|| MapperImport {
                    module: spec.module.clone(),
                    default: None,
                    named: Vec::new(),
                });
            if spec.default {
                entry.default.get_or_insert_with(|| spec.element.clone());
            } else if !entry.named.contains(&spec.element) {
                entry.named.push(spec.element.clone());
            }
        }
        grouped.into_values().collect()
    }
}
