//! Compilation of schema type definitions into codec IR.

use indexmap::IndexMap;

use iograft_core::ast::{FieldDefinition, TypeDefinition, TypeSignature};
use iograft_core::{CodecType, FieldMap, Primitive};

use crate::error::{CompileError, Result};

/// Name to definition lookup table for resolving references encountered while
/// compiling.
pub type DefinitionMap<'a> = IndexMap<&'a str, &'a TypeDefinition>;

/// Build the lookup table from an ordered definition slice.
pub fn definition_map<'a>(definitions: &[&'a TypeDefinition]) -> DefinitionMap<'a> {
    definitions.iter().map(|def| (def.name(), *def)).collect()
}

/// Compile one schema type definition into its codec IR.
///
/// Object definitions named exactly `Query` or `Mutation` become the matching
/// root variant; every other object becomes a `Named` structural object.
pub fn compile_definition(def: &TypeDefinition, table: &DefinitionMap) -> Result<CodecType> {
    match def {
        TypeDefinition::Enum { name, values } => Ok(CodecType::Enum {
            name: name.clone(),
            cases: values.clone(),
        }),
        TypeDefinition::Scalar { name } => Ok(CodecType::scalar(name.clone())),
        TypeDefinition::Object { name, fields } => {
            let fields = compile_fields(fields, table)?;
            Ok(match name.as_str() {
                "Query" => CodecType::Query {
                    name: name.clone(),
                    fields,
                },
                "Mutation" => CodecType::Mutation {
                    name: name.clone(),
                    fields,
                },
                _ => CodecType::named(name.clone(), CodecType::Object(fields)),
            })
        }
        TypeDefinition::InputObject { name, fields } => Ok(CodecType::Input {
            name: name.clone(),
            fields: compile_fields(fields, table)?,
        }),
        TypeDefinition::Union { name, members } => {
            let members = members
                .iter()
                .map(|member| {
                    let def = table.get(member.as_str()).ok_or_else(|| {
                        CompileError::UnresolvedTypeReference {
                            name: member.clone(),
                        }
                    })?;
                    compile_definition(def, table)
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(CodecType::named(name.clone(), CodecType::Union(members)))
        }
    }
}

fn compile_fields(fields: &[FieldDefinition], table: &DefinitionMap) -> Result<FieldMap> {
    let mut map = FieldMap::with_capacity(fields.len());
    for field in fields {
        map.insert(
            field.name.clone(),
            compile_signature(&field.signature, table, false)?,
        );
    }
    Ok(map)
}

/// Resolve one field signature. Optionality and list wrapping mirror the
/// nesting of non-null markers: `[String]`, `[String!]`, `[String]!` and
/// `[String!]!` produce four distinct shapes.
fn compile_signature(
    signature: &TypeSignature,
    table: &DefinitionMap,
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
            let resolved = resolve_named(name, table)?;
            Ok(if required {
                resolved
            } else {
                CodecType::option(resolved)
            })
        }
    }
}

fn resolve_named(name: &str, table: &DefinitionMap) -> Result<CodecType> {
    if let Some(primitive) = Primitive::from_name(name) {
        return Ok(CodecType::Primitive(primitive));
    }
    let def = table
        .get(name)
        .ok_or_else(|| CompileError::UnresolvedTypeReference {
            name: name.to_string(),
        })?;
    compile_definition(def, table)
}
