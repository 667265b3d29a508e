//! End-to-end pipeline: schema and operations in, codec source text out.

use iograft_core::ast::{OperationDefinition, OperationKind, TypeDefinition};
use iograft_core::CodecType;

use crate::emit::{render_definition, render_operation, render_variables, PREAMBLE};
use crate::error::{CompileError, Result};
use crate::graph::sort_definitions;
use crate::model::{compile_definition, definition_map};
use crate::selection::compile_operation;
use crate::variables::{compile_variables, input_table};

/// Compile a schema and a set of operations into the complete codec source
/// text: preamble, named-type codecs, variable codecs, selection codecs, in
/// that order, separated by blank lines.
///
/// Output is unformatted; callers are expected to run it through a formatter.
/// Any error aborts the whole compilation with no partial output.
pub fn generate(
    schema: &[TypeDefinition],
    operations: &[OperationDefinition],
) -> Result<String> {
    let ordered = sort_definitions(schema);
    let table = definition_map(&ordered);

    let compiled = ordered
        .iter()
        .map(|def| compile_definition(def, &table))
        .collect::<Result<Vec<_>>>()?;
    let named: Vec<&CodecType> = compiled.iter().filter(|ty| ty.is_named_type()).collect();

    let mut selections = Vec::with_capacity(operations.len());
    for operation in operations {
        let root = root_for(operation.kind, &named)?;
        selections.push(compile_operation(operation, root)?);
    }

    let inputs = input_table(&compiled);
    let variables = operations
        .iter()
        .map(|operation| compile_variables(operation, &inputs))
        .collect::<Result<Vec<_>>>()?;

    let mut sections = vec![PREAMBLE.to_string()];
    sections.extend(named.iter().map(|ty| render_definition(ty)));
    sections.extend(variables.iter().map(|ty| render_variables(ty)));
    sections.extend(selections.iter().map(|ty| render_operation(ty)));
    Ok(sections.join("\n\n"))
}

/// The schema root an operation compiles against, selected by kind.
fn root_for<'a>(kind: OperationKind, named: &[&'a CodecType]) -> Result<&'a CodecType> {
    named
        .iter()
        .copied()
        .find(|ty| match kind {
            OperationKind::Query => matches!(ty, CodecType::Query { .. }),
            OperationKind::Mutation => matches!(ty, CodecType::Mutation { .. }),
        })
        .ok_or_else(|| CompileError::UnresolvedTypeReference {
            name: kind.type_name().to_string(),
        })
}
