//! Shared builders and fixtures for compiler tests.

use iograft_core::ast::{
    FieldDefinition, OperationDefinition, OperationKind, Selection, TypeDefinition, TypeSignature,
    VariableDefinition,
};
use iograft_core::CodecType;

use crate::graph::sort_definitions;
use crate::model::{compile_definition, definition_map};

pub fn named(name: &str) -> TypeSignature {
    TypeSignature::Named(name.to_string())
}

pub fn non_null(inner: TypeSignature) -> TypeSignature {
    TypeSignature::NonNull(Box::new(inner))
}

pub fn list(inner: TypeSignature) -> TypeSignature {
    TypeSignature::List(Box::new(inner))
}

/// `Name!` - the most common signature shape.
pub fn required(name: &str) -> TypeSignature {
    non_null(named(name))
}

pub fn field(name: &str, signature: TypeSignature) -> FieldDefinition {
    FieldDefinition {
        name: name.to_string(),
        signature,
    }
}

pub fn object(name: &str, fields: Vec<FieldDefinition>) -> TypeDefinition {
    TypeDefinition::Object {
        name: name.to_string(),
        fields,
    }
}

pub fn input_object(name: &str, fields: Vec<FieldDefinition>) -> TypeDefinition {
    TypeDefinition::InputObject {
        name: name.to_string(),
        fields,
    }
}

pub fn union_def(name: &str, members: &[&str]) -> TypeDefinition {
    TypeDefinition::Union {
        name: name.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
    }
}

pub fn enum_def(name: &str, values: &[&str]) -> TypeDefinition {
    TypeDefinition::Enum {
        name: name.to_string(),
        values: values.iter().map(|v| v.to_string()).collect(),
    }
}

pub fn scalar_def(name: &str) -> TypeDefinition {
    TypeDefinition::Scalar {
        name: name.to_string(),
    }
}

pub fn leaf(name: &str) -> Selection {
    Selection::Field {
        name: name.to_string(),
        selections: vec![],
    }
}

pub fn select(name: &str, selections: Vec<Selection>) -> Selection {
    Selection::Field {
        name: name.to_string(),
        selections,
    }
}

pub fn fragment(type_condition: &str, selections: Vec<Selection>) -> Selection {
    Selection::InlineFragment {
        type_condition: type_condition.to_string(),
        selections,
    }
}

pub fn variable(name: &str, signature: TypeSignature) -> VariableDefinition {
    VariableDefinition {
        name: name.to_string(),
        signature,
    }
}

pub fn query_op(name: &str, selections: Vec<Selection>) -> OperationDefinition {
    OperationDefinition {
        kind: OperationKind::Query,
        name: name.to_string(),
        variables: vec![],
        selections,
    }
}

pub fn mutation_op(
    name: &str,
    variables: Vec<VariableDefinition>,
    selections: Vec<Selection>,
) -> OperationDefinition {
    OperationDefinition {
        kind: OperationKind::Mutation,
        name: name.to_string(),
        variables,
        selections,
    }
}

/// Order and compile a whole schema, panicking on any error.
pub fn compile_schema(definitions: &[TypeDefinition]) -> Vec<CodecType> {
    let ordered = sort_definitions(definitions);
    let table = definition_map(&ordered);
    ordered
        .iter()
        .map(|def| compile_definition(def, &table).unwrap())
        .collect()
}

pub fn query_root(types: &[CodecType]) -> &CodecType {
    types
        .iter()
        .find(|ty| matches!(ty, CodecType::Query { .. }))
        .unwrap()
}

pub fn mutation_root(types: &[CodecType]) -> &CodecType {
    types
        .iter()
        .find(|ty| matches!(ty, CodecType::Mutation { .. }))
        .unwrap()
}

/// The schema the selection tests run against: a todo list with nested
/// objects, custom scalars, and unions two levels deep.
pub fn todo_schema() -> Vec<TypeDefinition> {
    vec![
        object(
            "Todo",
            vec![
                field("id", required("ID")),
                field("description", required("String")),
                field("author", required("Author")),
                field("lastUpdated", required("LastUpdated")),
                field("unit", required("Unit")),
            ],
        ),
        scalar_def("Unit"),
        object(
            "Author",
            vec![
                field("name", required("String")),
                field("address", required("Address")),
            ],
        ),
        object("Address", vec![field("postcode", required("String"))]),
        union_def("LastUpdated", &["Today", "Never"]),
        object(
            "Today",
            vec![
                field("date", required("String")),
                field("dayOfWeek", required("DayOfWeek")),
            ],
        ),
        union_def("DayOfWeek", &["Monday", "Tuesday"]),
        object("Monday", vec![field("day", required("Int"))]),
        object("Tuesday", vec![field("day", required("Int"))]),
        object("Never", vec![field("creation", required("String"))]),
        object(
            "Query",
            vec![
                field("todo", required("Todo")),
                field("todos", non_null(list(required("Todo")))),
                field("headTodo", named("Todo")),
                field("todoIncAddress", required("Address")),
                field("unit", required("Unit")),
            ],
        ),
        object("Mutation", vec![field("update", required("UpdateResponse"))]),
        union_def("UpdateResponse", &["Todo", "Error"]),
        object("Error", vec![field("message", required("String"))]),
    ]
}
