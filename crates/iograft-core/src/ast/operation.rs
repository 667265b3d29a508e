//! Operation-side syntax nodes.

use serde::Serialize;

use super::schema::TypeSignature;

/// Whether an operation reads or writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    /// Reserved root type name for this kind, also used as the codec name
    /// suffix for emitted operation and variable definitions.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
        }
    }
}

/// A named query or mutation document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OperationDefinition {
    pub kind: OperationKind,
    pub name: String,
    pub variables: Vec<VariableDefinition>,
    pub selections: Vec<Selection>,
}

/// A declared operation variable (`$id: ID!`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VariableDefinition {
    pub name: String,
    pub signature: TypeSignature,
}

/// One node of a selection tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Selection {
    /// A field selection; an empty selection set marks a leaf.
    Field {
        name: String,
        selections: Vec<Selection>,
    },
    /// `... on TypeName { ... }` - type-conditioned fragment on a union.
    InlineFragment {
        type_condition: String,
        selections: Vec<Selection>,
    },
    /// `...FragmentName` - rejected during selection compilation.
    FragmentSpread { name: String },
}
