use apidoc_core::descriptor::{FieldDescriptor, RecordDescriptor, TypeDescriptor};
use apidoc_core::endpoint::{EndpointRecord, ServiceInfo};
use apidoc_core::registry::ApiRegistry;
use apidoc_openapi::{build_api_description, generate_api_description};
use serde_json::json;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn default_info() -> ServiceInfo {
    ServiceInfo::new("Cert Service", "1.2.3").with_base_url("https://certs.internal")
}

fn order_record() -> TypeDescriptor {
    TypeDescriptor::Record(
        RecordDescriptor::new()
            .with_field(FieldDescriptor::new("id", TypeDescriptor::Integer).with_annotation("required"))
            .with_field(FieldDescriptor::new("total", TypeDescriptor::Number)),
    )
}

// ── Envelope ────────────────────────────────────────────────────────────────

#[test]
fn empty_description() {
    let description = build_api_description(&default_info(), &[]);
    assert_eq!(description.service_name, "Cert Service");
    assert_eq!(description.version, "1.2.3");
    assert_eq!(description.base_url, "https://certs.internal");
    assert!(description.endpoints.is_empty());
}

#[test]
fn one_record_per_endpoint_in_order() {
    let endpoints = vec![
        EndpointRecord::new("GET", "/a"),
        EndpointRecord::new("POST", "/b"),
        EndpointRecord::new("GET", "/a"),
    ];
    let description = build_api_description(&default_info(), &endpoints);

    // Flat projection: no grouping, duplicates stay separate records.
    let paths: Vec<_> = description.endpoints.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, ["/a", "/b", "/a"]);
}

#[test]
fn unrecognized_methods_are_kept_in_flat_projection() {
    let endpoints = vec![EndpointRecord::new("TRACE", "/debug")];
    let description = build_api_description(&default_info(), &endpoints);
    assert_eq!(description.endpoints.len(), 1);
    assert_eq!(description.endpoints[0].method, "TRACE");
}

#[test]
fn summary_and_description_flatten_to_empty_strings() {
    let endpoints = vec![EndpointRecord::new("GET", "/bare")];
    let description = build_api_description(&default_info(), &endpoints);

    assert_eq!(description.endpoints[0].summary, "");
    assert_eq!(description.endpoints[0].description, "");
}

// ── Request bodies and responses ────────────────────────────────────────────

#[test]
fn request_body_schema() {
    let endpoints = vec![
        EndpointRecord::new("POST", "/orders").with_request_body(order_record()),
    ];
    let description = build_api_description(&default_info(), &endpoints);

    let body = description.endpoints[0].request_body.as_ref().unwrap();
    assert_eq!(body.content_type, "application/json");
    assert!(body.required);
    assert_eq!(body.schema["properties"]["id"]["type"], "integer");
    assert_eq!(body.schema["required"], json!(["id"]));
}

#[test]
fn schema_response_keyed_by_phrase() {
    let endpoints = vec![
        EndpointRecord::new("POST", "/orders").with_response(201, order_record()),
    ];
    let description = build_api_description(&default_info(), &endpoints);

    let response = &description.endpoints[0].responses["Created"];
    assert_eq!(response.description, "Created");
    assert_eq!(response.content_type, "application/json");
    let schema = response.schema.as_ref().unwrap();
    assert_eq!(schema["properties"]["total"]["type"], "number");
}

#[test]
fn text_response_is_plain_text_without_schema() {
    let endpoints = vec![
        EndpointRecord::new("POST", "/orders").with_text_response(400, "Invalid request"),
    ];
    let description = build_api_description(&default_info(), &endpoints);

    let response = &description.endpoints[0].responses["Bad Request"];
    assert_eq!(response.description, "Invalid request");
    assert_eq!(response.content_type, "text/plain");
    assert!(response.schema.is_none());
}

#[test]
fn unassigned_status_code_falls_back_to_response() {
    let endpoints = vec![
        EndpointRecord::new("GET", "/odd").with_text_response(299, "Maybe"),
    ];
    let description = build_api_description(&default_info(), &endpoints);
    assert!(description.endpoints[0].responses.contains_key("Response"));
}

// ── Serialized wire format ──────────────────────────────────────────────────

#[test]
fn serialized_field_names_are_snake_case() {
    let endpoints = vec![EndpointRecord::new("POST", "/orders")
        .with_summary("Create an order")
        .with_tag("orders")
        .with_request_body(order_record())
        .with_response(201, order_record())];
    let description = build_api_description(&default_info(), &endpoints);

    let value = serde_json::to_value(&description).unwrap();
    assert_eq!(value["service_name"], "Cert Service");
    assert_eq!(value["base_url"], "https://certs.internal");

    let endpoint = &value["endpoints"][0];
    assert_eq!(endpoint["method"], "POST");
    assert_eq!(endpoint["request_body"]["content_type"], "application/json");
    assert_eq!(endpoint["request_body"]["required"], true);
    assert_eq!(endpoint["tags"], json!(["orders"]));
    assert_eq!(
        endpoint["responses"]["Created"]["content_type"],
        "application/json"
    );
}

#[test]
fn serialized_optionals_are_omitted() {
    let endpoints = vec![EndpointRecord::new("GET", "/bare").with_text_response(404, "Not here")];
    let description = build_api_description(&default_info(), &endpoints);

    let value = serde_json::to_value(&description).unwrap();
    let endpoint = &value["endpoints"][0];

    assert!(endpoint.get("request_body").is_none());
    assert!(endpoint.get("tags").is_none());
    assert!(endpoint["responses"]["Not Found"].get("schema").is_none());
}

// ── Registry integration ────────────────────────────────────────────────────

#[test]
fn generate_from_empty_registry() {
    let registry = ApiRegistry::new();
    let description = generate_api_description(&registry);
    assert!(description.endpoints.is_empty());
    assert_eq!(description.service_name, "");
}

#[test]
fn generate_uses_current_registry_contents() {
    let registry = ApiRegistry::new();
    registry.set_service_info(default_info());
    registry.register_endpoint(EndpointRecord::new("GET", "/certs").with_summary("List"));

    let description = generate_api_description(&registry);
    assert_eq!(description.service_name, "Cert Service");
    assert_eq!(description.endpoints.len(), 1);
    assert_eq!(description.endpoints[0].summary, "List");
}
