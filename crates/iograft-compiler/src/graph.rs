//! Dependency ordering of schema type definitions.
//!
//! Each named definition is emitted once, and nested named members are
//! referenced by bare name, so a definition must appear after everything its
//! fields or members reference. `sort_definitions` produces that order.

use std::collections::HashMap;
use std::collections::HashSet;

use iograft_core::ast::TypeDefinition;

/// Order `definitions` so that any locally-defined type referenced by another
/// definition's fields or members precedes its dependents.
///
/// Depth-first, keyed by type name. A definition is marked visited before its
/// dependencies are walked, which bounds recursion on self- and
/// mutually-referential types; the order inside such a cycle is
/// first-reachable, with its dependency closure inline. References to names
/// with no local definition (externally supplied built-ins) are skipped.
pub fn sort_definitions(definitions: &[TypeDefinition]) -> Vec<&TypeDefinition> {
    let by_name: HashMap<&str, &TypeDefinition> =
        definitions.iter().map(|def| (def.name(), def)).collect();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut ordered = Vec::with_capacity(definitions.len());
    for def in definitions {
        visit(def, &by_name, &mut visited, &mut ordered);
    }
    ordered
}

fn visit<'a>(
    def: &'a TypeDefinition,
    by_name: &HashMap<&'a str, &'a TypeDefinition>,
    visited: &mut HashSet<&'a str>,
    ordered: &mut Vec<&'a TypeDefinition>,
) {
    if !visited.insert(def.name()) {
        return;
    }

    match def {
        // No dependencies; appended on first visit.
        TypeDefinition::Enum { .. } | TypeDefinition::Scalar { .. } => {}
        TypeDefinition::Object { fields, .. } | TypeDefinition::InputObject { fields, .. } => {
            for field in fields {
                if let Some(dep) = by_name.get(field.signature.named_type()) {
                    visit(dep, by_name, visited, ordered);
                }
            }
        }
        TypeDefinition::Union { members, .. } => {
            for member in members {
                if let Some(dep) = by_name.get(member.as_str()) {
                    visit(dep, by_name, visited, ordered);
                }
            }
        }
    }

    ordered.push(def);
}
