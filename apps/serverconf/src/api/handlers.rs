//! # API Endpoint Handlers

use super::{
    AppState,
    types::{
        CompatibilityResponse, ComponentsResponse, ErrorResponse, ExportQuery, HealthResponse,
        IdRequest, ListQuery, MutationResponse, SearchQuery, parse_type,
    },
};
use crate::export::{self, ExportDocument, ExportFormat};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serverconf_core::{ComponentId, ComponentType, ConfiguratorError, ViolationKind};

/// 400 with the error message.
fn bad_request(err: &ConfiguratorError) -> Response {
    tracing::warn!("Rejected request: {}", err);
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err.to_string()))).into_response()
}

fn not_found(id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(format!("Component not found: {}", id))),
    )
        .into_response()
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// CATALOG HANDLERS
// =============================================================================

/// List catalog components, optionally of one type.
pub async fn components_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Response {
    let component_type = match parse_type(query.component_type.as_deref()) {
        Ok(t) => t,
        Err(e) => return bad_request(&e),
    };

    let session = state.session.read().await;
    let catalog = session.inventory().catalog();
    let response = match component_type {
        Some(t) => ComponentsResponse::new(catalog.list_by_type(t)),
        None => ComponentsResponse::new(catalog.iter()),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Details of one component.
pub async fn component_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let session = state.session.read().await;
    match session.component(&id) {
        Some(component) => (StatusCode::OK, Json(component.clone())).into_response(),
        None => not_found(&id),
    }
}

/// Case-insensitive search over names and manufacturers.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Response {
    if let Err(e) = query.validate() {
        return bad_request(&e);
    }
    let component_type = match parse_type(query.component_type.as_deref()) {
        Ok(t) => t,
        Err(e) => return bad_request(&e),
    };

    let session = state.session.read().await;
    let response = ComponentsResponse::new(session.search(&query.q, component_type));
    (StatusCode::OK, Json(response)).into_response()
}

/// Compatibility overview of one component.
pub async fn compat_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let session = state.session.read().await;
    if session.component(&id).is_none() {
        return not_found(&id);
    }
    let response = CompatibilityResponse::new(ComponentId::new(&id), session.compatibility_info(&id));
    (StatusCode::OK, Json(response)).into_response()
}

// =============================================================================
// CONFIGURATION HANDLERS
// =============================================================================

/// Current configuration snapshot.
pub async fn configuration_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.session.read().await;
    let document = ExportDocument::new(&session.snapshot(), state.lang, session.inventory().catalog());
    (StatusCode::OK, Json(document))
}

/// Add a component to the configuration.
pub async fn add_handler(
    State(state): State<AppState>,
    Json(request): Json<IdRequest>,
) -> Response {
    let id = match request.component_id() {
        Ok(id) => id,
        Err(e) => return bad_request(&e),
    };

    let mut session = state.session.write().await;
    let outcome = session.add(id);
    if outcome.accepted {
        tracing::debug!(id, "component added");
        let response = MutationResponse::success(Some(id.to_string()), session.selected_count());
        return (StatusCode::OK, Json(response)).into_response();
    }

    let status = if outcome
        .violations
        .iter()
        .any(|v| v.kind() == ViolationKind::NotFound)
    {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::CONFLICT
    };
    let errors = state
        .lang
        .violations(&outcome.violations, session.inventory().catalog());
    tracing::debug!(id, reasons = errors.len(), "component rejected");

    let response = MutationResponse::rejected(id.to_string(), errors, session.selected_count());
    (status, Json(response)).into_response()
}

/// Remove a component from the configuration.
pub async fn remove_handler(
    State(state): State<AppState>,
    Json(request): Json<IdRequest>,
) -> Response {
    let id = match request.component_id() {
        Ok(id) => id,
        Err(e) => return bad_request(&e),
    };

    let mut session = state.session.write().await;
    if !session.remove(id) {
        return not_found(id);
    }
    let response = MutationResponse::success(Some(id.to_string()), session.selected_count());
    (StatusCode::OK, Json(response)).into_response()
}

/// Empty the configuration and start a new one.
pub async fn clear_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut session = state.session.write().await;
    session.clear();
    (StatusCode::OK, Json(MutationResponse::success(None, 0)))
}

/// Components of a type that can be added to the current configuration.
pub async fn available_handler(
    State(state): State<AppState>,
    Path(type_name): Path<String>,
) -> Response {
    let component_type = match type_name.parse::<ComponentType>() {
        Ok(t) => t,
        Err(e) => return bad_request(&e),
    };

    let session = state.session.read().await;
    let response = ComponentsResponse::new(session.available_components(component_type));
    (StatusCode::OK, Json(response)).into_response()
}

// =============================================================================
// EXPORT HANDLER
// =============================================================================

/// Export the configuration as JSON (default) or CSV.
pub async fn export_handler(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Response {
    let format = match query.format.as_deref().map(str::parse::<ExportFormat>) {
        None => ExportFormat::Json,
        Some(Ok(format)) => format,
        Some(Err(e)) => return bad_request(&e),
    };

    let session = state.session.read().await;
    let config = session.snapshot();
    let content_type = match format {
        ExportFormat::Json => "application/json",
        ExportFormat::Csv => "text/csv; charset=utf-8",
    };

    match export::render(&config, format, state.lang, session.inventory().catalog()) {
        Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], body).into_response(),
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!("Export failed: {}", e))),
            )
                .into_response()
        }
    }
}
