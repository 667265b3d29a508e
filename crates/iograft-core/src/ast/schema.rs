//! Schema-side syntax nodes.

use serde::Serialize;

/// A nullable/list/named type signature as written in the schema.
///
/// Nullability is inverted relative to the IR: a signature is optional unless
/// wrapped in `NonNull`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TypeSignature {
    /// Reference to a type by name.
    Named(String),
    /// `[T]` list wrapper.
    List(Box<TypeSignature>),
    /// `T!` non-null wrapper.
    NonNull(Box<TypeSignature>),
}

impl TypeSignature {
    /// Name of the underlying named type, unwrapping list/non-null wrappers.
    pub fn named_type(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
        }
    }
}

/// One field of an object or input-object definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    pub name: String,
    pub signature: TypeSignature,
}

/// One schema type definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TypeDefinition {
    /// `type Name { ... }`
    Object {
        name: String,
        fields: Vec<FieldDefinition>,
    },
    /// `union Name = A | B`
    Union { name: String, members: Vec<String> },
    /// `enum Name { A B }`
    Enum { name: String, values: Vec<String> },
    /// `input Name { ... }`
    InputObject {
        name: String,
        fields: Vec<FieldDefinition>,
    },
    /// `scalar Name`
    Scalar { name: String },
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            Self::Object { name, .. }
            | Self::Union { name, .. }
            | Self::Enum { name, .. }
            | Self::InputObject { name, .. }
            | Self::Scalar { name } => name,
        }
    }
}
