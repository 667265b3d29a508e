//! Compilation of operation selection trees into minimal per-operation IR.
//!
//! The result of a compiled selection is proportional to the operation, not
//! the schema: every selected object-shaped field narrows to an intersection
//! of its typename discriminant, a `Pick` of the requested primitive leaves,
//! and one single-field object per nested selection. Union selections are
//! checked for exhaustiveness against the schema's declared members.

use iograft_core::ast::{OperationDefinition, OperationKind, Selection};
use iograft_core::{CodecType, FieldMap};

use crate::error::{CompileError, Result};

/// Compile one operation against the schema's Query or Mutation root IR.
///
/// The result holds one entry per top-level selected field, in
/// operation-declared order.
pub fn compile_operation(operation: &OperationDefinition, root: &CodecType) -> Result<CodecType> {
    let mut fields = FieldMap::with_capacity(operation.selections.len());
    for selection in &operation.selections {
        match selection {
            Selection::Field { name, selections } => {
                fields.insert(name.clone(), compile_field(name, selections, root)?);
            }
            // The roots are never unions, so a type condition at the top
            // level has nothing to resolve against.
            Selection::InlineFragment { type_condition, .. } => {
                return Err(CompileError::UnresolvedTypeReference {
                    name: type_condition.clone(),
                });
            }
            Selection::FragmentSpread { .. } => {
                return Err(CompileError::UnsupportedSelection {
                    kind: "fragment spread",
                });
            }
        }
    }

    let name = operation.name.clone();
    Ok(match operation.kind {
        OperationKind::Query => CodecType::Query { name, fields },
        OperationKind::Mutation => CodecType::Mutation { name, fields },
    })
}

/// Sub-selections of one field, split by role.
#[derive(Default)]
struct Partition<'a> {
    /// Leaf fields with no further selection, `__typename` excluded.
    leaves: Vec<&'a str>,
    /// Fields carrying their own selection set.
    nested: Vec<(&'a str, &'a [Selection])>,
    /// Inline fragments, keyed by type condition.
    fragments: Vec<(&'a str, &'a [Selection])>,
}

impl<'a> Partition<'a> {
    fn of(selections: &'a [Selection]) -> Result<Self> {
        let mut parts = Self::default();
        for selection in selections {
            match selection {
                Selection::Field { name, selections } if selections.is_empty() => {
                    if name != "__typename" {
                        parts.leaves.push(name.as_str());
                    }
                }
                Selection::Field { name, selections } => {
                    parts.nested.push((name.as_str(), selections.as_slice()));
                }
                Selection::InlineFragment {
                    type_condition,
                    selections,
                } => {
                    parts
                        .fragments
                        .push((type_condition.as_str(), selections.as_slice()));
                }
                Selection::FragmentSpread { .. } => {
                    return Err(CompileError::UnsupportedSelection {
                        kind: "fragment spread",
                    });
                }
            }
        }
        Ok(parts)
    }

    fn is_empty(&self) -> bool {
        self.leaves.is_empty() && self.nested.is_empty() && self.fragments.is_empty()
    }
}

fn compile_field(name: &str, selections: &[Selection], parent: &CodecType) -> Result<CodecType> {
    let declared = parent
        .fields()
        .and_then(|fields| fields.get(name))
        .ok_or_else(|| CompileError::UnknownField {
            field: name.to_string(),
            on: type_label(parent),
        })?;

    let parts = Partition::of(selections)?;

    // Custom scalars admit no narrowing.
    if let CodecType::Scalar { .. } = declared {
        return Ok(declared.clone());
    }

    // A bare field selection narrows to the parent's declared codec for that
    // single field, whatever its shape.
    if parts.is_empty() {
        let parent_name = parent.name().unwrap_or_default().to_string();
        return Ok(CodecType::Intersection(vec![
            CodecType::typename(parent_name.clone()),
            CodecType::pick(parent_name, [name]),
        ]));
    }

    let (wrappers, core) = unwrap_wrappers(declared);

    if let Some(members) = core.union_members() {
        if !parts.fragments.is_empty() {
            let compiled = compile_union(core, members, &parts.fragments)?;
            return Ok(rewrap(compiled, &wrappers));
        }
    } else if let Some((condition, _)) = parts.fragments.first() {
        // A type condition resolves against union members only.
        return Err(CompileError::UnresolvedTypeReference {
            name: condition.to_string(),
        });
    }

    Ok(rewrap(narrow(core, &parts)?, &wrappers))
}

/// The minimal structural shape for an object-shaped node: typename
/// discriminant, a pick of the primitive leaves, one single-field object per
/// nested selection.
fn narrow(core: &CodecType, parts: &Partition) -> Result<CodecType> {
    let core_name = core.name().unwrap_or_default().to_string();
    let mut members = Vec::with_capacity(parts.nested.len() + 2);
    members.push(CodecType::typename(core_name.clone()));
    members.push(CodecType::pick(core_name, parts.leaves.iter().copied()));
    for (nested_name, nested_selections) in &parts.nested {
        let mut fields = FieldMap::with_capacity(1);
        fields.insert(
            nested_name.to_string(),
            compile_field(nested_name, nested_selections, core)?,
        );
        members.push(CodecType::Object(fields));
    }
    Ok(CodecType::Intersection(members))
}

/// Compile an exhaustively-matched union selection. The output follows the
/// schema's declared member order regardless of fragment order.
fn compile_union(
    core: &CodecType,
    members: &[CodecType],
    fragments: &[(&str, &[Selection])],
) -> Result<CodecType> {
    let member_names: Vec<&str> = members.iter().filter_map(CodecType::name).collect();

    let missing: Vec<String> = member_names
        .iter()
        .filter(|member| !fragments.iter().any(|(condition, _)| condition == *member))
        .map(|member| member.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(CompileError::NonExhaustiveUnion {
            union: core.name().unwrap_or_default().to_string(),
            missing,
        });
    }

    for (condition, _) in fragments {
        if !member_names.contains(condition) {
            return Err(CompileError::UnresolvedTypeReference {
                name: condition.to_string(),
            });
        }
    }

    let mut compiled = Vec::with_capacity(members.len());
    for member in members {
        let Some(member_name) = member.name() else {
            continue;
        };
        // Exhaustiveness above guarantees a fragment per member.
        for (condition, selections) in fragments {
            if *condition == member_name {
                compiled.push(fragment_body(member, selections)?);
                break;
            }
        }
    }
    Ok(CodecType::Union(compiled))
}

fn fragment_body(member: &CodecType, selections: &[Selection]) -> Result<CodecType> {
    let parts = Partition::of(selections)?;
    if let Some((condition, _)) = parts.fragments.first() {
        // Union members are objects; a nested condition cannot resolve here.
        return Err(CompileError::UnresolvedTypeReference {
            name: condition.to_string(),
        });
    }
    narrow(member, &parts)
}

/// Array/Option wrappers stripped from a declared field type, outermost
/// first.
enum Wrapper {
    Array,
    Option,
}

fn unwrap_wrappers(ty: &CodecType) -> (Vec<Wrapper>, &CodecType) {
    let mut wrappers = Vec::new();
    let mut current = ty;
    loop {
        match current {
            CodecType::Array(inner) => {
                wrappers.push(Wrapper::Array);
                current = inner;
            }
            CodecType::Option(inner) => {
                wrappers.push(Wrapper::Option);
                current = inner;
            }
            _ => return (wrappers, current),
        }
    }
}

fn rewrap(ty: CodecType, wrappers: &[Wrapper]) -> CodecType {
    wrappers.iter().rev().fold(ty, |acc, wrapper| match wrapper {
        Wrapper::Array => CodecType::array(acc),
        Wrapper::Option => CodecType::option(acc),
    })
}

fn type_label(ty: &CodecType) -> String {
    ty.name().unwrap_or(ty.kind_name()).to_string()
}
