//! Per-output configuration, read from TOML.
//!
//! ```toml
//! default_mapper = "Partial<{T}>"
//! show_unused_mappers = true
//!
//! [mappers]
//! User = "./models#UserModel"
//! Date = "Date"
//!
//! [naming]
//! case = "pascal"
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use crate::mappers::{Mapper, MapperTable};
use crate::naming::{CaseStyle, DefaultNamer};
use crate::resolvers::{DEFAULT_RESOLVER_WRAPPER, ResolverOptions};
use crate::selection::CompileOptions;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Schema type name to mapper string, in file order.
    pub mappers: IndexMap<String, String>,
    pub default_mapper: Option<String>,
    /// Appended to imported mapper symbols.
    pub mapper_type_suffix: Option<String>,
    pub show_unused_mappers: bool,
    /// Output-table wrapper; an empty string disables it.
    pub resolver_wrapper: String,
    pub root_value_type: Option<String>,
    pub add_typename: bool,
    pub non_optional_typename: bool,
    pub naming: NamingConfig,
    pub output_table_name: String,
    pub parent_table_name: String,
    /// Whether generated declarations are exported.
    pub export: bool,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            mappers: IndexMap::new(),
            default_mapper: None,
            mapper_type_suffix: None,
            show_unused_mappers: true,
            resolver_wrapper: DEFAULT_RESOLVER_WRAPPER.to_string(),
            root_value_type: None,
            add_typename: false,
            non_optional_typename: false,
            naming: NamingConfig::default(),
            output_table_name: "ResolversTypes".to_string(),
            parent_table_name: "ResolversParentTypes".to_string(),
            export: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    /// Prepended to every generated top-level name.
    pub prefix: String,
    pub case: CaseStyle,
}

impl CodegenConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn mapper_table(&self) -> Result<MapperTable> {
        MapperTable::from_raw(
            self.mappers.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            self.default_mapper.as_deref(),
            self.mapper_type_suffix.as_deref(),
        )
    }

    pub fn resolver_options(&self) -> Result<ResolverOptions> {
        let wrapper = Some(self.resolver_wrapper.as_str()).filter(|w| !w.is_empty());
        let root_value = self
            .root_value_type
            .as_deref()
            .map(|raw| Mapper::parse(raw, "root value", self.mapper_type_suffix.as_deref()))
            .transpose()?;
        Ok(ResolverOptions::default()
            .with_wrapper(wrapper)?
            .with_root_value(root_value))
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            add_typename: self.add_typename,
            non_optional_typename: self.non_optional_typename,
        }
    }

    pub fn namer(&self) -> DefaultNamer {
        DefaultNamer::new(self.naming.case, self.naming.prefix.clone())
    }
}
