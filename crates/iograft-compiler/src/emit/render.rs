//! Rendering of codec IR nodes to io-ts literal text.

use iograft_core::{CodecType, FieldMap, Primitive};

/// How `Option` nodes are rendered.
///
/// Output positions mark absent values by key absence or null and decode
/// through `optionFromNullable`; input positions must accept a literal
/// `null`, rendered as an explicit nullable union.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OptionStyle {
    FromNullable,
    NullUnion,
}

/// Render one IR node in the output-facing style.
pub fn render(ty: &CodecType) -> String {
    render_with(ty, OptionStyle::FromNullable)
}

/// Render a named schema type as a top-level codec definition plus its type
/// alias. Input objects use the input-facing option style.
pub fn render_definition(ty: &CodecType) -> String {
    if let CodecType::Input { .. } = ty {
        return render_variables(ty);
    }
    let name = ty.name().unwrap_or_default();
    format!(
        "export const {name} = {};\nexport type {name} = t.TypeOf<typeof {name}>;",
        render(ty)
    )
}

/// Render a compiled operation selection as a codec over the response's
/// `data` envelope. The definition is named `<OperationName><Kind>`.
pub fn render_operation(ty: &CodecType) -> String {
    let suffix = match ty {
        CodecType::Query { .. } => "Query",
        CodecType::Mutation { .. } => "Mutation",
        _ => "",
    };
    let name = format!("{}{suffix}", ty.name().unwrap_or_default());
    format!(
        "export const {name} = t.type({{ data: {} }});\nexport type {name} = t.TypeOf<typeof {name}>['data'];",
        render(ty)
    )
}

/// Render a compiled variable input-object in the input-facing style.
pub fn render_variables(ty: &CodecType) -> String {
    let name = ty.name().unwrap_or_default();
    format!(
        "export const {name} = {};\nexport type {name} = t.TypeOf<typeof {name}>;",
        render_with(ty, OptionStyle::NullUnion)
    )
}

fn render_with(ty: &CodecType, style: OptionStyle) -> String {
    match ty {
        CodecType::Primitive(primitive) => primitive_codec(*primitive).to_string(),
        CodecType::Scalar { .. } => "t.any".to_string(),
        CodecType::Literal { value } => format!("t.literal('{value}')"),
        CodecType::Enum { cases, .. } => match cases.as_slice() {
            [single] => format!("t.literal('{single}')"),
            _ => format!(
                "t.union([{}])",
                cases
                    .iter()
                    .map(|case| format!("t.literal('{case}')"))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        },
        CodecType::Array(value) => format!("t.array({})", reference_or(value, style)),
        CodecType::Option(value) => match style {
            OptionStyle::FromNullable => {
                format!("optionFromNullable({})", reference_or(value, style))
            }
            OptionStyle::NullUnion => {
                format!("t.union([t.null, {}])", reference_or(value, style))
            }
        },
        CodecType::Object(fields)
        | CodecType::Input { fields, .. }
        | CodecType::Query { fields, .. }
        | CodecType::Mutation { fields, .. } => render_fields(fields, None, style),
        CodecType::Union(types) => format!(
            "t.union([{}])",
            types
                .iter()
                .map(|member| reference_or(member, style))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        CodecType::Intersection(types) => render_intersection(types, style),
        CodecType::Pick { target, fields } => format!(
            "Pick({target}.props, {})",
            fields
                .iter()
                .map(|field| format!("'{field}'"))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        CodecType::Named { name, value } => match value.as_ref() {
            CodecType::Object(fields) => render_fields(fields, Some(name), style),
            other => render_with(other, style),
        },
    }
}

/// Bare name reference for named members nested inside another node; full
/// rendering otherwise.
fn reference_or(ty: &CodecType, style: OptionStyle) -> String {
    match ty.name() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => render_with(ty, style),
    }
}

/// `t.type({ ... })`, injecting the `__typename` discriminant first when the
/// object carries an identity.
fn render_fields(fields: &FieldMap, typename: Option<&str>, style: OptionStyle) -> String {
    let mut entries = Vec::with_capacity(fields.len() + 1);
    if let Some(name) = typename {
        entries.push(format!("__typename: t.literal('{name}')"));
    }
    for (key, value) in fields {
        entries.push(format!("{key}: {}", reference_or(value, style)));
    }
    if entries.is_empty() {
        return "t.type({})".to_string();
    }
    format!("t.type({{ {} }})", entries.join(", "))
}

/// Intersections above 5 members split into consecutive nested groups to stay
/// within the combinator's arity limit. Group size is 5, or 4 when the member
/// count is 1 mod 5, which avoids a trailing single-member group.
fn render_intersection(types: &[CodecType], style: OptionStyle) -> String {
    let rendered: Vec<String> = types
        .iter()
        .map(|member| render_with(member, style))
        .collect();
    if rendered.len() > 5 {
        let size = if rendered.len() % 5 == 1 { 4 } else { 5 };
        let groups: Vec<String> = rendered
            .chunks(size)
            .map(|group| format!("t.intersection([{}])", group.join(", ")))
            .collect();
        return format!("t.intersection([{}])", groups.join(", "));
    }
    format!("t.intersection([{}])", rendered.join(", "))
}

fn primitive_codec(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::String | Primitive::Id => "t.string",
        Primitive::Int | Primitive::Float => "t.number",
        Primitive::Boolean => "t.boolean",
    }
}
