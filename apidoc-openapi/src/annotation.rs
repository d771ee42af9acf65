use serde_json::{Map, Number, Value};

/// Parsed form of one field annotation string.
///
/// The annotation mini-language is a comma-separated token list:
/// a bare `required`, or `key=value` pairs (`enum=a|b|c`, `min=1`,
/// `format=date-time`, ...). Parsing is deliberately permissive — unknown
/// keys and malformed tokens are dropped, never errors, so an annotation
/// typo can degrade a schema but cannot break document generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldAnnotation {
    pub required: bool,
    pub enum_values: Option<Vec<String>>,
    pub minimum: Option<Value>,
    pub maximum: Option<Value>,
    pub min_length: Option<Value>,
    pub max_length: Option<Value>,
    pub pattern: Option<String>,
    /// Raw literal; coerced against the field's schema type in [`apply`](Self::apply).
    pub default: Option<String>,
    /// Raw literal; coerced like `default`.
    pub example: Option<String>,
    pub description: Option<String>,
    pub format: Option<String>,
}

/// Parse an annotation string into a [`FieldAnnotation`].
pub fn parse(annotation: &str) -> FieldAnnotation {
    let mut parsed = FieldAnnotation::default();

    for token in annotation.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        if token == "required" {
            parsed.required = true;
            continue;
        }

        let Some((key, value)) = token.split_once('=') else {
            tracing::debug!(token, "dropping malformed annotation token");
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "enum" => {
                parsed.enum_values = Some(value.split('|').map(str::to_string).collect());
            }
            "min" | "minimum" => parsed.minimum = Some(parse_number(value)),
            "max" | "maximum" => parsed.maximum = Some(parse_number(value)),
            "minLength" => parsed.min_length = Some(parse_number(value)),
            "maxLength" => parsed.max_length = Some(parse_number(value)),
            "pattern" => parsed.pattern = Some(value.to_string()),
            "default" => parsed.default = Some(value.to_string()),
            "example" => parsed.example = Some(value.to_string()),
            "description" => parsed.description = Some(value.to_string()),
            "format" => parsed.format = Some(value.to_string()),
            _ => tracing::debug!(key, "ignoring unknown annotation key"),
        }
    }

    parsed
}

impl FieldAnnotation {
    /// Merge this annotation's effects into a field schema.
    ///
    /// `required` is not handled here — membership in the record's
    /// `required` list belongs to the record expansion, which knows the
    /// field's serialization name.
    pub fn apply(&self, schema: &mut Map<String, Value>) {
        // The base type drives default/example coercion, so read it before
        // touching the map.
        let field_type = schema
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("object")
            .to_string();

        if let Some(values) = &self.enum_values {
            schema.insert("enum".into(), serde_json::json!(values));
        }
        if let Some(minimum) = &self.minimum {
            schema.insert("minimum".into(), minimum.clone());
        }
        if let Some(maximum) = &self.maximum {
            schema.insert("maximum".into(), maximum.clone());
        }
        if let Some(min_length) = &self.min_length {
            schema.insert("minLength".into(), min_length.clone());
        }
        if let Some(max_length) = &self.max_length {
            schema.insert("maxLength".into(), max_length.clone());
        }
        if let Some(pattern) = &self.pattern {
            schema.insert("pattern".into(), Value::String(pattern.clone()));
        }
        if let Some(default) = &self.default {
            schema.insert("default".into(), coerce_literal(default, &field_type));
        }
        if let Some(example) = &self.example {
            schema.insert("example".into(), coerce_literal(example, &field_type));
        }
        if let Some(description) = &self.description {
            schema.insert("description".into(), Value::String(description.clone()));
        }
        if let Some(format) = &self.format {
            schema.insert("format".into(), Value::String(format.clone()));
        }
    }
}

/// Parse a bound literal: integer first, then float, else the literal
/// string survives unchanged. A schema holding a string where a number was
/// intended is a degraded schema, not an error.
fn parse_number(literal: &str) -> Value {
    if let Ok(n) = literal.parse::<i64>() {
        return Value::Number(Number::from(n));
    }
    if let Ok(f) = literal.parse::<f64>() {
        if let Some(n) = Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    Value::String(literal.to_string())
}

/// Coerce a `default`/`example` literal against the field's resolved type.
fn coerce_literal(literal: &str, field_type: &str) -> Value {
    match field_type {
        "integer" | "number" => parse_number(literal),
        "boolean" => Value::Bool(literal == "true"),
        _ => Value::String(literal.to_string()),
    }
}
