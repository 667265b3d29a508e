//! The codec IR: a closed tagged-variant tree describing one runtime
//! validation codec.
//!
//! Schema compilation builds one tree per schema type definition; selection
//! and variable compilation build one disposable tree per operation. Nodes are
//! immutable once built and cross-reference each other by name only - the
//! emitter resolves a name against the definitions emitted in the same pass,
//! never against a structural pointer.

use indexmap::IndexMap;
use serde::Serialize;

/// Field-name to codec mapping. Keys are unique; iteration follows insertion
/// order.
pub type FieldMap = IndexMap<String, CodecType>;

/// The five built-in primitive type names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Primitive {
    String,
    Int,
    Boolean,
    Float,
    Id,
}

impl Primitive {
    pub const ALL: [Primitive; 5] = [
        Primitive::Id,
        Primitive::String,
        Primitive::Boolean,
        Primitive::Int,
        Primitive::Float,
    ];

    /// Schema-facing name of the primitive.
    pub fn name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int => "Int",
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::Id => "ID",
        }
    }

    /// Look up a built-in primitive by its schema name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(Self::String),
            "Int" => Some(Self::Int),
            "Boolean" => Some(Self::Boolean),
            "Float" => Some(Self::Float),
            "ID" => Some(Self::Id),
            _ => None,
        }
    }
}

/// One codec IR node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum CodecType {
    /// Built-in leaf type.
    Primitive(Primitive),
    /// Opaque custom scalar; admits no structural checks.
    Scalar { name: String },
    /// Enumeration; case order is declaration order.
    Enum { name: String, cases: Vec<String> },
    /// String literal, used as a typename discriminant.
    Literal { value: String },
    /// Anonymous structural object; gains identity only via `Named`.
    Object(FieldMap),
    /// A cross-referenceable identity for an `Object` or `Union` value.
    Named { name: String, value: Box<CodecType> },
    /// Input-object definition or compiled operation variables.
    Input { name: String, fields: FieldMap },
    /// The reserved Query root, or a compiled query selection.
    Query { name: String, fields: FieldMap },
    /// The reserved Mutation root, or a compiled mutation selection.
    Mutation { name: String, fields: FieldMap },
    /// List of values.
    Array(Box<CodecType>),
    /// Nullable/absent value; never doubly nested.
    Option(Box<CodecType>),
    /// Ordered disjunction; member order is schema declaration order.
    Union(Vec<CodecType>),
    /// Ordered conjunction; order affects emitted grouping.
    Intersection(Vec<CodecType>),
    /// A subset of a named type's fields, referenced by name and resolved
    /// only at emission time.
    Pick { target: String, fields: Vec<String> },
}

impl CodecType {
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::Scalar { name: name.into() }
    }

    pub fn named(name: impl Into<String>, value: CodecType) -> Self {
        Self::Named {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn array(value: CodecType) -> Self {
        Self::Array(Box::new(value))
    }

    pub fn option(value: CodecType) -> Self {
        Self::Option(Box::new(value))
    }

    pub fn pick(
        target: impl Into<String>,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::Pick {
            target: target.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The typename discriminant for `name`: a named empty object. Emission
    /// injects `__typename` into every named object body, so the empty form
    /// validates exactly the discriminant.
    pub fn typename(name: impl Into<String>) -> Self {
        Self::named(name.into(), Self::Object(FieldMap::new()))
    }

    /// Name of a named node (`Named`, `Enum`, `Scalar`, `Input`, `Query`,
    /// `Mutation`); `None` otherwise.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named { name, .. }
            | Self::Enum { name, .. }
            | Self::Scalar { name }
            | Self::Input { name, .. }
            | Self::Query { name, .. }
            | Self::Mutation { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Whether this node carries its own cross-referenceable name, meaning it
    /// gets a top-level definition when emitted and can be referenced by that
    /// name from other nodes.
    pub fn is_named_type(&self) -> bool {
        self.name().is_some()
    }

    /// Variant label, for error messages about unnamed nodes.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Primitive(_) => "Primitive",
            Self::Scalar { .. } => "Scalar",
            Self::Enum { .. } => "Enum",
            Self::Literal { .. } => "Literal",
            Self::Object(_) => "Object",
            Self::Named { .. } => "Named",
            Self::Input { .. } => "Input",
            Self::Query { .. } => "Query",
            Self::Mutation { .. } => "Mutation",
            Self::Array(_) => "Array",
            Self::Option(_) => "Option",
            Self::Union(_) => "Union",
            Self::Intersection(_) => "Intersection",
            Self::Pick { .. } => "Pick",
        }
    }

    /// Field map of an object-shaped node (`Object`, `Input`, `Query`,
    /// `Mutation`, or `Named` object).
    pub fn fields(&self) -> Option<&FieldMap> {
        match self {
            Self::Object(fields)
            | Self::Input { fields, .. }
            | Self::Query { fields, .. }
            | Self::Mutation { fields, .. } => Some(fields),
            Self::Named { value, .. } => match value.as_ref() {
                Self::Object(fields) => Some(fields),
                _ => None,
            },
            _ => None,
        }
    }

    /// Members of a named union, in schema declaration order.
    pub fn union_members(&self) -> Option<&[CodecType]> {
        match self {
            Self::Named { value, .. } => match value.as_ref() {
                Self::Union(members) => Some(members),
                _ => None,
            },
            _ => None,
        }
    }
}
