//! Unit tests for API request/response types.
//!
//! Covers request validation and the JSON shape of responses.

#![allow(clippy::unwrap_used, clippy::panic)]

use serde_json::json;
use serverconf::api::{
    ComponentsResponse, ErrorResponse, HealthResponse, IdRequest, ListQuery, MAX_ID_LENGTH,
    MAX_QUERY_LENGTH, MutationResponse, SearchQuery,
};
use serverconf_core::{Component, ComponentType, ConfiguratorError};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

#[test]
fn test_health_response_default() {
    let health = HealthResponse::default();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// ID REQUEST
// =============================================================================

#[test]
fn test_id_request_trims() {
    let request: IdRequest = serde_json::from_value(json!({ "id": "  hp_ml350g4p " })).unwrap();
    assert_eq!(request.component_id().unwrap(), "hp_ml350g4p");
}

#[test]
fn test_id_request_empty() {
    let request = IdRequest { id: " ".to_string() };
    assert!(matches!(
        request.component_id(),
        Err(ConfiguratorError::InvalidInput(_))
    ));
}

#[test]
fn test_id_request_length_boundary() {
    let at_limit = IdRequest {
        id: "a".repeat(MAX_ID_LENGTH),
    };
    assert!(at_limit.component_id().is_ok());

    let over = IdRequest {
        id: "a".repeat(MAX_ID_LENGTH + 1),
    };
    assert!(over.component_id().is_err());
}

#[test]
fn test_id_request_missing_field() {
    let result: Result<IdRequest, _> = serde_json::from_value(json!({ "name": "x" }));
    assert!(result.is_err());
}

// =============================================================================
// QUERY PARAMETERS
// =============================================================================

#[test]
fn test_list_query_type_key() {
    let query: ListQuery = serde_json::from_value(json!({ "type": "memory" })).unwrap();
    assert_eq!(query.component_type.as_deref(), Some("memory"));

    let empty: ListQuery = serde_json::from_value(json!({})).unwrap();
    assert!(empty.component_type.is_none());
}

#[test]
fn test_search_query_defaults_and_limit() {
    let query: SearchQuery = serde_json::from_value(json!({})).unwrap();
    assert_eq!(query.q, "");
    assert!(query.validate().is_ok());

    let long = SearchQuery {
        q: "q".repeat(MAX_QUERY_LENGTH + 1),
        component_type: None,
    };
    assert!(long.validate().is_err());
}

// =============================================================================
// RESPONSES
// =============================================================================

#[test]
fn test_mutation_response_omits_empty_errors() {
    let value = serde_json::to_value(MutationResponse::success(Some("x".to_string()), 1)).unwrap();
    assert_eq!(value["success"], true);
    assert!(value.get("errors").is_none());

    let rejected = MutationResponse::rejected("x".to_string(), vec!["nope".to_string()], 0);
    let value = serde_json::to_value(rejected).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["errors"], json!(["nope"]));
}

#[test]
fn test_components_response_counts() {
    let a = Component::new("a", "A", ComponentType::Cooling, "Acme", "A1");
    let b = Component::new("b", "B", ComponentType::Chassis, "Acme", "B1");

    let response = ComponentsResponse::new([&a, &b]);

    assert_eq!(response.count, 2);
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["components"][1]["type"], "chassis");
    assert_eq!(value["components"][0]["price"], serde_json::Value::Null);
}

#[test]
fn test_error_response_shape() {
    let value = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
    assert_eq!(value, json!({ "error": "boom" }));
}
