use apidoc_core::endpoint::{EndpointRecord, ResponseSpec, ServiceInfo};
use apidoc_core::registry::ApiRegistry;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::builder::status_phrase;
use crate::schema::reflect;

// ── Internal API description format ─────────────────────────────────────────

/// Flat service description for internal introspection — similar to OpenAPI
/// but without the envelope: no per-path grouping, no security catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ApiDescription {
    pub service_name: String,
    pub version: String,
    pub base_url: String,
    pub endpoints: Vec<ApiEndpoint>,
}

/// One endpoint of the internal description.
#[derive(Debug, Clone, Serialize)]
pub struct ApiEndpoint {
    pub method: String,
    pub path: String,
    pub summary: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBodySchema>,
    /// Keyed by status reason phrase, e.g. `"Created"`.
    pub responses: BTreeMap<String, ResponseSchema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestBodySchema {
    pub content_type: String,
    pub schema: Value,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseSchema {
    pub description: String,
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

// ── Generation ──────────────────────────────────────────────────────────────

/// Generate the internal API description from a registry.
pub fn generate_api_description(registry: &ApiRegistry) -> ApiDescription {
    let snapshot = registry.snapshot();
    build_api_description(&snapshot.info, &snapshot.endpoints)
}

/// Build the internal API description from service info and endpoint
/// records. One output element per record, in registration order.
pub fn build_api_description(
    info: &ServiceInfo,
    endpoints: &[EndpointRecord],
) -> ApiDescription {
    let mut description = ApiDescription {
        service_name: info.title.clone(),
        version: info.version.clone(),
        base_url: info.base_url.clone(),
        endpoints: Vec::with_capacity(endpoints.len()),
    };

    for endpoint in endpoints {
        let mut api_endpoint = ApiEndpoint {
            method: endpoint.method.clone(),
            path: endpoint.path.clone(),
            summary: endpoint.summary.clone().unwrap_or_default(),
            description: endpoint.description.clone().unwrap_or_default(),
            request_body: endpoint.request_body.as_ref().map(|body| RequestBodySchema {
                content_type: "application/json".to_string(),
                schema: reflect(body),
                required: true,
            }),
            responses: BTreeMap::new(),
            tags: endpoint.tags.clone(),
        };

        for (code, response) in &endpoint.responses {
            let phrase = status_phrase(*code);
            let response_schema = match response {
                ResponseSpec::Text(text) => ResponseSchema {
                    description: text.clone(),
                    content_type: "text/plain".to_string(),
                    schema: None,
                },
                ResponseSpec::Schema(ty) => ResponseSchema {
                    description: phrase.to_string(),
                    content_type: "application/json".to_string(),
                    schema: Some(reflect(ty)),
                },
            };
            api_endpoint
                .responses
                .insert(phrase.to_string(), response_schema);
        }

        description.endpoints.push(api_endpoint);
    }

    description
}
