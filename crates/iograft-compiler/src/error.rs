//! Compiler error values.
//!
//! Every error aborts the current compilation; nothing is downgraded to a
//! warning and no partial output is produced.

/// Fatal compilation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A named type, union member, or variable type reference is missing from
    /// the lookup table.
    #[error("could not find type definition with name: {name}")]
    UnresolvedTypeReference { name: String },

    /// An operation selects a field the current type does not declare.
    #[error("field `{field}` does not exist on type `{on}`")]
    UnknownField { field: String, on: String },

    /// A polymorphic selection omits declared union members.
    #[error("non-exhaustive selection on union `{union}`, missing cases: {}", .missing.join(", "))]
    NonExhaustiveUnion { union: String, missing: Vec<String> },

    /// A selection node kind the compiler does not support.
    #[error("unsupported selection kind: {kind}")]
    UnsupportedSelection { kind: &'static str },
}

/// Result type for compiler passes.
pub type Result<T> = std::result::Result<T, CompileError>;
