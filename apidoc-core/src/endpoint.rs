use crate::descriptor::TypeDescriptor;
use serde::Serialize;
use std::collections::BTreeMap;

// ── Service metadata ────────────────────────────────────────────────────────

/// Service-level metadata embedded in every generated document.
///
/// One slot per registry; replaced wholesale by
/// [`ApiRegistry::set_service_info`](crate::registry::ApiRegistry::set_service_info).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServiceInfo {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
    pub base_url: String,
}

impl ServiceInfo {
    pub fn new(title: &str, version: &str) -> Self {
        Self {
            title: title.to_string(),
            version: version.to_string(),
            description: None,
            base_url: String::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }
}

// ── Endpoint metadata ───────────────────────────────────────────────────────

/// Documentation metadata for one registered route.
///
/// Created once at startup by the owning service and never mutated after
/// registration. Only the structural shape of the body types matters; no
/// live traffic flows through this crate — services wire real request
/// handling through their own transport layer.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointRecord {
    /// HTTP method verb, e.g. `"GET"`, `"POST"`.
    pub method: String,
    /// URL path, e.g. `"/api/resource"`.
    pub path: String,
    pub operation_id: Option<String>,
    /// Short one-line description.
    pub summary: Option<String>,
    /// Detailed description, can be multi-line.
    pub description: Option<String>,
    /// Grouping tags, e.g. `["certificates", "admin"]`.
    pub tags: Vec<String>,
    /// Request body shape, reflected into the generated document.
    pub request_body: Option<TypeDescriptor>,
    /// Status code → documented response.
    pub responses: BTreeMap<u16, ResponseSpec>,
    /// Security scheme names, e.g. `["mTLS", "Bearer"]`.
    pub security: Vec<String>,
}

/// What an endpoint documents for one status code.
#[derive(Debug, Clone, Serialize)]
pub enum ResponseSpec {
    /// Plain-text description, no body schema.
    Text(String),
    /// Response body shape, reflected into a JSON schema.
    Schema(TypeDescriptor),
}

impl EndpointRecord {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            operation_id: None,
            summary: None,
            description: None,
            tags: Vec::new(),
            request_body: None,
            responses: BTreeMap::new(),
            security: Vec::new(),
        }
    }

    pub fn with_operation_id(mut self, operation_id: &str) -> Self {
        self.operation_id = Some(operation_id.to_string());
        self
    }

    pub fn with_summary(mut self, summary: &str) -> Self {
        self.summary = Some(summary.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    pub fn with_request_body(mut self, body: TypeDescriptor) -> Self {
        self.request_body = Some(body);
        self
    }

    /// Document a response body schema for a status code.
    pub fn with_response(mut self, status: u16, body: TypeDescriptor) -> Self {
        self.responses.insert(status, ResponseSpec::Schema(body));
        self
    }

    /// Document a plain-text response for a status code.
    pub fn with_text_response(mut self, status: u16, description: &str) -> Self {
        self.responses
            .insert(status, ResponseSpec::Text(description.to_string()));
        self
    }

    pub fn with_security(mut self, scheme: &str) -> Self {
        self.security.push(scheme.to_string());
        self
    }
}
