//! Operation documents: operations, fragments and their selection sets.
//!
//! The compiler works on this crate-owned AST rather than on the parser's
//! types. Positions live on definitions only, so structurally equal
//! selection sets compare equal wherever they were written.

pub mod load;

#[cfg(test)]
mod document_tests;

use std::fmt;

/// 1-based source position of a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }

    /// Suffix appended to generated operation type names.
    pub fn type_suffix(self) -> &'static str {
        match self {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
            OperationKind::Subscription => "Subscription",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelection {
    pub alias: Option<String>,
    pub name: String,
    /// Argument names; values do not influence the result type.
    pub arguments: Vec<String>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

impl FieldSelection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            name: name.into(),
            arguments: Vec::new(),
            directives: Vec::new(),
            selection_set: Vec::new(),
        }
    }

    /// The key under which the field appears in the response.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// `@skip` or `@include` may drop the field from the response.
    pub fn is_conditional(&self) -> bool {
        has_condition(&self.directives)
    }
}

fn has_condition(directives: &[Directive]) -> bool {
    directives
        .iter()
        .any(|d| d.name == "skip" || d.name == "include")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentSpread {
    pub fragment_name: String,
    pub directives: Vec<Directive>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

impl InlineFragment {
    pub fn is_conditional(&self) -> bool {
        has_condition(&self.directives)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    pub fn field(name: impl Into<String>) -> Self {
        Selection::Field(FieldSelection::new(name))
    }

    pub fn spread(fragment_name: impl Into<String>) -> Self {
        Selection::FragmentSpread(FragmentSpread {
            fragment_name: fragment_name.into(),
            directives: Vec::new(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDefinition {
    pub name: String,
    pub base: String,
    pub wrapping: crate::schema::Wrapping,
    pub has_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDefinition {
    pub name: Option<String>,
    pub kind: OperationKind,
    pub variables: Vec<VariableDefinition>,
    pub selection_set: Vec<Selection>,
    pub pos: Pos,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentDefinition {
    pub name: String,
    pub type_condition: String,
    pub selection_set: Vec<Selection>,
    pub pos: Pos,
}

impl FragmentDefinition {
    /// Same name, condition and selections, wherever it was written.
    pub fn same_definition(&self, other: &FragmentDefinition) -> bool {
        self.name == other.name
            && self.type_condition == other.type_condition
            && self.selection_set == other.selection_set
    }

    /// Names of fragments spread anywhere in this fragment, first occurrence order.
    pub fn spreads(&self) -> Vec<&str> {
        let mut out = Vec::new();
        collect_spreads(&self.selection_set, &mut out);
        out
    }
}

fn collect_spreads<'a>(selections: &'a [Selection], out: &mut Vec<&'a str>) {
    for selection in selections {
        match selection {
            Selection::Field(field) => collect_spreads(&field.selection_set, out),
            Selection::InlineFragment(inline) => collect_spreads(&inline.selection_set, out),
            Selection::FragmentSpread(spread) => {
                if !out.contains(&spread.fragment_name.as_str()) {
                    out.push(&spread.fragment_name);
                }
            }
        }
    }
}

/// Every operation and fragment of one or more source documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub operations: Vec<OperationDefinition>,
    pub fragments: Vec<FragmentDefinition>,
}

impl Document {
    /// Append another document. Fragment conflicts are left to the orderer.
    pub fn merge(&mut self, other: Document) {
        self.operations.extend(other.operations);
        self.fragments.extend(other.fragments);
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty() && self.fragments.is_empty()
    }
}
