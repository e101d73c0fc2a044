use indoc::indoc;

use crate::config::CodegenConfig;
use crate::mappers::MapperTarget;
use crate::naming::{CaseStyle, ConvertOptions, NameConverter};

#[test]
fn empty_config_uses_defaults() {
    let config = CodegenConfig::from_toml("").unwrap();

    assert_eq!(config, CodegenConfig::default());
    assert!(config.show_unused_mappers);
    assert_eq!(config.resolver_wrapper, "ResolverTypeWrapper<{T}>");
    assert_eq!(config.output_table_name, "ResolversTypes");
}

#[test]
fn mappers_keep_file_order() {
    let config = CodegenConfig::from_toml(indoc! {r#"
        [mappers]
        User = "./models#UserModel"
        Post = "PostRecord"
        Comment = "Partial<{T}>"
    "#})
    .unwrap();

    let table = config.mapper_table().unwrap();
    assert_eq!(table.keys().collect::<Vec<_>>(), ["User", "Post", "Comment"]);
    assert_eq!(
        table.get("User").map(|m| &m.target),
        Some(&MapperTarget::External {
            module: "./models".into(),
            symbol: "UserModel".into(),
        })
    );
    assert!(table.get("Comment").is_some_and(|m| m.has_placeholder()));
}

#[test]
fn default_mapper_and_suffix() {
    let config = CodegenConfig::from_toml(indoc! {r#"
        default_mapper = "any"
        mapper_type_suffix = "Model"

        [mappers]
        User = "./models#User"
    "#})
    .unwrap();

    let table = config.mapper_table().unwrap();
    assert!(table.default_mapper().is_some());
    let user = table.get("User").unwrap();
    assert_eq!(user.import.as_ref().unwrap().element, "User as UserModel");
}

#[test]
fn empty_wrapper_disables_it() {
    let config = CodegenConfig::from_toml(r#"resolver_wrapper = """#).unwrap();

    assert!(config.resolver_options().unwrap().resolver_wrapper.is_none());
}

#[test]
fn root_value_type_is_parsed_as_mapper() {
    let config = CodegenConfig::from_toml(r#"root_value_type = "./context#Root""#).unwrap();

    let options = config.resolver_options().unwrap();
    assert!(options.root_value.is_some_and(|m| m.is_external()));
}

#[test]
fn naming_section() {
    let config = CodegenConfig::from_toml(indoc! {r#"
        [naming]
        prefix = "I"
        case = "keep"
    "#})
    .unwrap();

    assert_eq!(config.naming.case, CaseStyle::Keep);
    let namer = config.namer();
    assert_eq!(namer.convert("user_name", &ConvertOptions::default()), "Iuser_name");
}

#[test]
fn unknown_keys_are_rejected() {
    let err = CodegenConfig::from_toml("mapper = 1").unwrap_err();

    assert!(err.to_string().starts_with("configuration error:"));
    assert!(err.to_string().contains("unknown field `mapper`"));
}

#[test]
fn invalid_mapper_is_an_error() {
    let config = CodegenConfig::from_toml(indoc! {r##"
        [mappers]
        User = "#User"
    "##})
    .unwrap();

    let err = config.mapper_table().unwrap_err();
    insta::assert_snapshot!(err, @"invalid mapper for `User`: module and type must not be empty");
}
