//! Compilation of operation variable declarations.
//!
//! Structurally parallel to schema field resolution, but named types resolve
//! against a precomputed table of input-capable IR nodes instead of raw
//! definitions.

use indexmap::IndexMap;

use iograft_core::ast::{OperationDefinition, TypeSignature};
use iograft_core::{CodecType, FieldMap, Primitive};

use crate::error::{CompileError, Result};

/// Name to IR table of the types a variable declaration may reference.
pub type InputTable = IndexMap<String, CodecType>;

/// Build the variable-resolution table: the five default primitives plus the
/// schema's scalar, enum, and input-object nodes.
pub fn input_table(schema_types: &[CodecType]) -> InputTable {
    let mut table: InputTable = Primitive::ALL
        .iter()
        .map(|primitive| (primitive.name().to_string(), CodecType::Primitive(*primitive)))
        .collect();
    for ty in schema_types {
        match ty {
            CodecType::Scalar { name }
            | CodecType::Enum { name, .. }
            | CodecType::Input { name, .. } => {
                table.insert(name.clone(), ty.clone());
            }
            _ => {}
        }
    }
    table
}

/// Compile an operation's declared variables into one input-object IR named
/// `<OperationName><Kind>Variables`, one entry per variable in declaration
/// order.
pub fn compile_variables(operation: &OperationDefinition, table: &InputTable) -> Result<CodecType> {
    let mut fields = FieldMap::with_capacity(operation.variables.len());
    for variable in &operation.variables {
        fields.insert(
            variable.name.clone(),
            compile_signature(&variable.signature, table, false)?,
        );
    }
    Ok(CodecType::Input {
        name: format!("{}{}Variables", operation.name, operation.kind.type_name()),
        fields,
    })
}

fn compile_signature(
    signature: &TypeSignature,
    table: &InputTable,
    required: bool,
) -> Result<CodecType> {
    match signature {
        TypeSignature::NonNull(inner) => compile_signature(inner, table, true),
        TypeSignature::List(inner) => {
            let array = CodecType::array(compile_signature(inner, table, false)?);
            Ok(if required {
                array
            } else {
                CodecType::option(array)
            })
        }
        TypeSignature::Named(name) => {
            let resolved =
                table
                    .get(name)
                    .cloned()
                    .ok_or_else(|| CompileError::UnresolvedTypeReference {
                        name: name.clone(),
                    })?;
            Ok(if required {
                resolved
            } else {
                CodecType::option(resolved)
            })
        }
    }
}
