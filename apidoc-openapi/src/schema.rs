use apidoc_core::descriptor::{RecordDescriptor, TypeDescriptor};
use serde_json::{json, Map, Value};

use crate::annotation;

/// Nesting bound for the reflection walk. Descriptor trees are finite, but a
/// runaway descriptor generator could still produce pathological depth; past
/// this bound the walk degrades to a generic object schema instead of
/// recursing further.
const MAX_DEPTH: usize = 32;

/// Reflect a type descriptor into a JSON-Schema-shaped document.
///
/// Total by design: every input, including [`TypeDescriptor::Opaque`] and
/// over-deep nesting, produces some schema. Documentation generation must
/// never be able to crash a host service.
pub fn reflect(ty: &TypeDescriptor) -> Value {
    Value::Object(reflect_map(ty, 0))
}

fn reflect_map(ty: &TypeDescriptor, depth: usize) -> Map<String, Value> {
    if depth > MAX_DEPTH {
        tracing::debug!(depth, "type nesting exceeds reflection depth bound, emitting generic object");
        return scalar_schema("object");
    }

    match ty {
        // Unwrap optionality before dispatching on the underlying shape.
        TypeDescriptor::Optional(inner) => reflect_map(inner, depth + 1),
        TypeDescriptor::String => scalar_schema("string"),
        TypeDescriptor::Integer => scalar_schema("integer"),
        TypeDescriptor::Number => scalar_schema("number"),
        TypeDescriptor::Boolean => scalar_schema("boolean"),
        TypeDescriptor::Sequence(element) => {
            let mut schema = scalar_schema("array");
            schema.insert("items".into(), Value::Object(reflect_map(element, depth + 1)));
            schema
        }
        TypeDescriptor::Mapping(value) => {
            let mut schema = scalar_schema("object");
            schema.insert(
                "additionalProperties".into(),
                Value::Object(reflect_map(value, depth + 1)),
            );
            schema
        }
        TypeDescriptor::Record(record) => record_schema(record, depth),
        TypeDescriptor::Opaque => scalar_schema("object"),
    }
}

fn scalar_schema(kind: &str) -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String(kind.to_string()));
    schema
}

/// Expand a record field by field.
///
/// Field declaration order is preserved in `properties`. A field's
/// annotation is applied to its base schema first, then the free-text doc
/// string, so the doc wins when both carry a description. `required` is
/// only emitted when at least one field asked for it.
fn record_schema(record: &RecordDescriptor, depth: usize) -> Map<String, Value> {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for field in &record.fields {
        let Some(name) = field.wire_name() else {
            continue;
        };

        let mut schema = reflect_map(&field.ty, depth + 1);

        if !field.annotation.is_empty() {
            let parsed = annotation::parse(&field.annotation);
            if parsed.required {
                required.push(name.to_string());
            }
            parsed.apply(&mut schema);
        }

        if !field.doc.is_empty() {
            schema.insert("description".into(), Value::String(field.doc.clone()));
        }

        properties.insert(name.to_string(), Value::Object(schema));
    }

    let mut schema = scalar_schema("object");
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert("required".into(), json!(required));
    }
    schema
}
