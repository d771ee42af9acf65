use apidoc_core::endpoint::{EndpointRecord, ResponseSpec, ServiceInfo};
use apidoc_core::registry::ApiRegistry;
use serde_json::{json, Map, Value};

use crate::schema::reflect;

/// Resolve a numeric status code to its human reason phrase, falling back
/// to the literal word `"Response"` for unassigned codes.
pub(crate) fn status_phrase(code: u16) -> &'static str {
    http::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("Response")
}

/// Generate an OpenAPI 3.0 document from a registry.
///
/// Takes one coherent snapshot and delegates to [`build_spec`]; the result
/// is recomputed on every call, nothing is cached or persisted.
pub fn generate_openapi(registry: &ApiRegistry) -> Value {
    let snapshot = registry.snapshot();
    build_spec(&snapshot.info, &snapshot.endpoints)
}

/// Build an OpenAPI 3.0 JSON document from service info and endpoint records.
///
/// Two security schemes (`mTLS`, `Bearer`) are always advertised under
/// `components.securitySchemes`, whether or not any endpoint references
/// them. With no endpoints registered this still yields a minimal valid
/// document with empty `paths`.
pub fn build_spec(info: &ServiceInfo, endpoints: &[EndpointRecord]) -> Value {
    let mut paths: Map<String, Value> = Map::new();

    for endpoint in endpoints {
        let method_slot = match endpoint.method.as_str() {
            "GET" => "get",
            "POST" => "post",
            "PUT" => "put",
            "DELETE" => "delete",
            "PATCH" => "patch",
            other => {
                tracing::debug!(
                    method = other,
                    path = %endpoint.path,
                    "skipping endpoint with unrecognized HTTP method"
                );
                continue;
            }
        };

        let operation = endpoint_operation(endpoint);

        let path_entry = paths
            .entry(endpoint.path.clone())
            .or_insert_with(|| json!({}));

        // Re-registering the same path+method overwrites the slot, so the
        // last registration wins.
        if let Some(obj) = path_entry.as_object_mut() {
            obj.insert(method_slot.into(), operation);
        }
    }

    let mut doc_info: Map<String, Value> = Map::new();
    doc_info.insert("title".into(), json!(info.title));
    doc_info.insert("version".into(), json!(info.version));
    if let Some(ref description) = info.description {
        doc_info.insert("description".into(), json!(description));
    }

    json!({
        "openapi": "3.0.0",
        "info": doc_info,
        "servers": [{ "url": info.base_url }],
        "paths": paths,
        "components": {
            "securitySchemes": {
                "mTLS": {
                    "type": "mutualTLS",
                    "description": "Mutual TLS authentication with client certificates"
                },
                "Bearer": {
                    "type": "http",
                    "scheme": "bearer",
                    "description": "JWT Bearer token authentication"
                }
            }
        }
    })
}

/// Convert one endpoint record into an OpenAPI operation object.
fn endpoint_operation(endpoint: &EndpointRecord) -> Value {
    let mut operation: Map<String, Value> = Map::new();

    if let Some(ref operation_id) = endpoint.operation_id {
        operation.insert("operationId".into(), json!(operation_id));
    }
    if let Some(ref summary) = endpoint.summary {
        operation.insert("summary".into(), json!(summary));
    }
    if let Some(ref description) = endpoint.description {
        operation.insert("description".into(), json!(description));
    }
    if !endpoint.tags.is_empty() {
        operation.insert("tags".into(), json!(endpoint.tags));
    }

    if let Some(ref body) = endpoint.request_body {
        operation.insert(
            "requestBody".into(),
            json!({
                "required": true,
                "content": {
                    "application/json": {
                        "schema": reflect(body)
                    }
                }
            }),
        );
    }

    let mut responses: Map<String, Value> = Map::new();
    for (code, response) in &endpoint.responses {
        let phrase = status_phrase(*code);
        match response {
            // A plain string is the whole documentation for the response.
            ResponseSpec::Text(text) => {
                responses.insert(phrase.to_string(), json!({ "description": text }));
            }
            ResponseSpec::Schema(ty) => {
                responses.insert(
                    phrase.to_string(),
                    json!({
                        "description": phrase,
                        "content": {
                            "application/json": {
                                "schema": reflect(ty)
                            }
                        }
                    }),
                );
            }
        }
    }
    operation.insert("responses".into(), Value::Object(responses));

    if !endpoint.security.is_empty() {
        let security: Vec<Value> = endpoint
            .security
            .iter()
            .map(|scheme| {
                let mut requirement = Map::new();
                requirement.insert(scheme.clone(), json!([]));
                Value::Object(requirement)
            })
            .collect();
        operation.insert("security".into(), Value::Array(security));
    }

    Value::Object(operation)
}
