//! Schema provider backed by `async-graphql-parser`.

use async_graphql_parser::types::{
    BaseType, FieldDefinition, InputValueDefinition, Type, TypeDefinition, TypeKind as AstKind,
    TypeSystemDefinition,
};

use super::{Argument, Field, NamedType, SchemaTypeGraph, TypeKind, Wrapping};
use crate::document::OperationKind;
use crate::{Error, Result};

/// Parse SDL text into a schema graph.
pub fn parse_schema(sdl: &str) -> Result<SchemaTypeGraph> {
    let document = async_graphql_parser::parse_schema(sdl).map_err(|e| Error::Parse {
        what: "schema",
        message: e.to_string(),
    })?;

    let mut builder = SchemaTypeGraph::builder();
    for definition in document.definitions {
        match definition {
            TypeSystemDefinition::Schema(schema) => {
                let schema = schema.node;
                let roots = [
                    (OperationKind::Query, schema.query),
                    (OperationKind::Mutation, schema.mutation),
                    (OperationKind::Subscription, schema.subscription),
                ];
                for (kind, name) in roots {
                    if let Some(name) = name {
                        builder.root(kind, name.node.to_string());
                    }
                }
            }
            TypeSystemDefinition::Type(def) => {
                let def = def.node;
                let extend = def.extend;
                let ty = convert_type(def);
                if extend {
                    builder.extend_type(ty);
                } else {
                    builder.add_type(ty);
                }
            }
            TypeSystemDefinition::Directive(_) => {}
        }
    }

    let schema = builder.build()?;
    tracing::debug!(types = schema.len(), "schema indexed");
    Ok(schema)
}

fn convert_type(def: TypeDefinition) -> NamedType {
    let name = def.name.node.to_string();
    let mut ty = match def.kind {
        AstKind::Scalar => NamedType::new(name, TypeKind::Scalar),
        AstKind::Object(object) => {
            let mut ty = NamedType::new(name, TypeKind::Object);
            ty.interfaces = object.implements.iter().map(|i| i.node.to_string()).collect();
            ty.fields = object.fields.into_iter().map(|f| convert_field(f.node)).collect();
            ty
        }
        AstKind::Interface(interface) => {
            let mut ty = NamedType::new(name, TypeKind::Interface);
            ty.interfaces = interface
                .implements
                .iter()
                .map(|i| i.node.to_string())
                .collect();
            ty.fields = interface
                .fields
                .into_iter()
                .map(|f| convert_field(f.node))
                .collect();
            ty
        }
        AstKind::Union(union) => {
            let mut ty = NamedType::new(name, TypeKind::Union);
            ty.members = union.members.iter().map(|m| m.node.to_string()).collect();
            ty
        }
        AstKind::Enum(enumeration) => {
            let mut ty = NamedType::new(name, TypeKind::Enum);
            ty.enum_values = enumeration
                .values
                .iter()
                .map(|v| v.node.value.node.to_string())
                .collect();
            ty
        }
        AstKind::InputObject(input) => {
            let mut ty = NamedType::new(name, TypeKind::InputObject);
            ty.fields = input
                .fields
                .into_iter()
                .map(|f| convert_input_field(f.node))
                .collect();
            ty
        }
    };
    ty.description = def.description.map(|d| d.node);
    ty
}

fn convert_field(field: FieldDefinition) -> Field {
    let (base, wrapping) = unwrap_type(&field.ty.node);
    let mut out = Field::new(field.name.node.to_string(), base, wrapping);
    out.arguments = field
        .arguments
        .iter()
        .map(|arg| {
            let (base, wrapping) = unwrap_type(&arg.node.ty.node);
            Argument {
                name: arg.node.name.node.to_string(),
                base,
                wrapping,
                has_default: arg.node.default_value.is_some(),
            }
        })
        .collect();
    out
}

fn convert_input_field(field: InputValueDefinition) -> Field {
    let (base, wrapping) = unwrap_type(&field.ty.node);
    let mut out = Field::new(field.name.node.to_string(), base, wrapping);
    out.has_default = field.default_value.is_some();
    out
}

/// Flatten a nested AST type into its base name and numeric wrapping.
pub(crate) fn unwrap_type(ty: &Type) -> (String, Wrapping) {
    match &ty.base {
        BaseType::Named(name) => (name.to_string(), Wrapping::named(ty.nullable)),
        BaseType::List(inner) => {
            let (base, inner_wrapping) = unwrap_type(inner);
            (base, inner_wrapping.in_list(ty.nullable))
        }
    }
}
