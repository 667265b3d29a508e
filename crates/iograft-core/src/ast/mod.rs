//! Syntax nodes consumed by the compiler.
//!
//! Iograft does not parse GraphQL source text; an external parser hands these
//! nodes over fully constructed. Declaration order is preserved wherever it is
//! semantically relevant (enum cases, union members, variables, selections).

mod operation;
mod schema;


pub use operation::{OperationDefinition, OperationKind, Selection, VariableDefinition};
pub use schema::{FieldDefinition, TypeDefinition, TypeSignature};
