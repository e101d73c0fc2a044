//! Document provider backed by `async-graphql-parser`.

use async_graphql_parser::Positioned;
use async_graphql_parser::types::{
    ExecutableDocument, OperationType, Selection as AstSelection, SelectionSet,
};

use super::{
    Directive, Document, FieldSelection, FragmentDefinition, FragmentSpread, InlineFragment,
    OperationDefinition, OperationKind, Pos, Selection, VariableDefinition,
};
use crate::schema::load::unwrap_type;
use crate::{Error, Result};

/// Placeholder operation that lets fragment-only documents through the
/// parser, which requires at least one operation.
const FRAGMENTS_ONLY: &str = "__TypegraphFragmentsOnly";

/// Parse one executable document.
///
/// The parser keys operations and fragments by name, so definitions are
/// re-sorted by position to restore source order.
pub fn parse_document(source: &str) -> Result<Document> {
    let document = match async_graphql_parser::parse_query(source) {
        Ok(document) => document,
        Err(err) => {
            let padded = format!("{source}\nquery {FRAGMENTS_ONLY} {{ __typename }}\n");
            async_graphql_parser::parse_query(padded).map_err(|_| Error::Parse {
                what: "document",
                message: err.to_string(),
            })?
        }
    };
    let mut document = convert_document(document);
    document
        .operations
        .retain(|op| op.name.as_deref() != Some(FRAGMENTS_ONLY));
    Ok(document)
}

fn convert_document(document: ExecutableDocument) -> Document {
    let mut operations: Vec<OperationDefinition> = document
        .operations
        .iter()
        .map(|(name, op)| OperationDefinition {
            name: name.map(|n| n.to_string()),
            kind: convert_kind(op.node.ty),
            variables: op
                .node
                .variable_definitions
                .iter()
                .map(|var| {
                    let (base, wrapping) = unwrap_type(&var.node.var_type.node);
                    VariableDefinition {
                        name: var.node.name.node.to_string(),
                        base,
                        wrapping,
                        has_default: var.node.default_value.is_some(),
                    }
                })
                .collect(),
            selection_set: convert_selection_set(&op.node.selection_set),
            pos: convert_pos(op.pos),
        })
        .collect();
    operations.sort_by_key(|op| op.pos);

    let mut fragments: Vec<FragmentDefinition> = document
        .fragments
        .iter()
        .map(|(name, fragment)| FragmentDefinition {
            name: name.to_string(),
            type_condition: fragment.node.type_condition.node.on.node.to_string(),
            selection_set: convert_selection_set(&fragment.node.selection_set),
            pos: convert_pos(fragment.pos),
        })
        .collect();
    fragments.sort_by_key(|f| f.pos);

    Document {
        operations,
        fragments,
    }
}

fn convert_kind(ty: OperationType) -> OperationKind {
    match ty {
        OperationType::Query => OperationKind::Query,
        OperationType::Mutation => OperationKind::Mutation,
        OperationType::Subscription => OperationKind::Subscription,
    }
}

fn convert_pos(pos: async_graphql_parser::Pos) -> Pos {
    Pos {
        line: pos.line,
        column: pos.column,
    }
}

fn convert_directives(
    directives: &[Positioned<async_graphql_parser::types::Directive>],
) -> Vec<Directive> {
    directives
        .iter()
        .map(|d| Directive {
            name: d.node.name.node.to_string(),
        })
        .collect()
}

fn convert_selection_set(set: &Positioned<SelectionSet>) -> Vec<Selection> {
    set.node
        .items
        .iter()
        .map(|item| match &item.node {
            AstSelection::Field(field) => {
                let field = &field.node;
                Selection::Field(FieldSelection {
                    alias: field.alias.as_ref().map(|a| a.node.to_string()),
                    name: field.name.node.to_string(),
                    arguments: field
                        .arguments
                        .iter()
                        .map(|(name, _)| name.node.to_string())
                        .collect(),
                    directives: convert_directives(&field.directives),
                    selection_set: convert_selection_set(&field.selection_set),
                })
            }
            AstSelection::FragmentSpread(spread) => Selection::FragmentSpread(FragmentSpread {
                fragment_name: spread.node.fragment_name.node.to_string(),
                directives: convert_directives(&spread.node.directives),
            }),
            AstSelection::InlineFragment(inline) => {
                let inline = &inline.node;
                Selection::InlineFragment(InlineFragment {
                    type_condition: inline
                        .type_condition
                        .as_ref()
                        .map(|c| c.node.on.node.to_string()),
                    directives: convert_directives(&inline.directives),
                    selection_set: convert_selection_set(&inline.selection_set),
                })
            }
        })
        .collect()
}
