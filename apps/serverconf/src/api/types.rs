//! # API Request/Response Types
//!
//! JSON structures for the HTTP API.

use serde::{Deserialize, Serialize};
use serverconf_core::{
    CompatibilityInfo, Component, ComponentId, ComponentType, ConfiguratorError,
};

/// Maximum accepted length of a component id in a request body.
pub const MAX_ID_LENGTH: usize = 256;

/// Maximum accepted length of a search query.
pub const MAX_QUERY_LENGTH: usize = 256;

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Body of every 4xx/5xx response that is not a rejected addition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

// =============================================================================
// QUERY PARAMETERS
// =============================================================================

/// `GET /components?type=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "type")]
    pub component_type: Option<String>,
}

/// `GET /search?q=&type=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(rename = "type")]
    pub component_type: Option<String>,
}

impl SearchQuery {
    /// Check the query length.
    pub fn validate(&self) -> Result<(), ConfiguratorError> {
        if self.q.len() > MAX_QUERY_LENGTH {
            return Err(ConfiguratorError::InvalidInput(format!(
                "Query length {} exceeds maximum {} bytes",
                self.q.len(),
                MAX_QUERY_LENGTH
            )));
        }
        Ok(())
    }
}

/// `GET /export?format=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

/// Parse an optional component type parameter.
pub fn parse_type(raw: Option<&str>) -> Result<Option<ComponentType>, ConfiguratorError> {
    raw.map(str::parse::<ComponentType>).transpose()
}

// =============================================================================
// COMPONENT LISTINGS
// =============================================================================

/// A list of components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentsResponse {
    pub count: usize,
    pub components: Vec<Component>,
}

impl ComponentsResponse {
    pub fn new<'a>(components: impl IntoIterator<Item = &'a Component>) -> Self {
        let components: Vec<Component> = components.into_iter().cloned().collect();
        Self {
            count: components.len(),
            components,
        }
    }
}

/// `GET /compat/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResponse {
    pub id: ComponentId,
    pub compatible_with: Vec<ComponentId>,
    pub incompatible_with: Vec<ComponentId>,
}

impl CompatibilityResponse {
    pub fn new(id: ComponentId, info: CompatibilityInfo) -> Self {
        Self {
            id,
            compatible_with: info.compatible_with,
            incompatible_with: info.incompatible_with,
        }
    }
}

// =============================================================================
// CONFIGURATION MUTATIONS
// =============================================================================

/// Body of `POST /configuration/add` and `POST /configuration/remove`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdRequest {
    pub id: String,
}

impl IdRequest {
    /// Trimmed id, checked for length.
    pub fn component_id(&self) -> Result<&str, ConfiguratorError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(ConfiguratorError::InvalidInput(
                "Component id must not be empty".to_string(),
            ));
        }
        if id.len() > MAX_ID_LENGTH {
            return Err(ConfiguratorError::InvalidInput(format!(
                "Component id length {} exceeds maximum {} bytes",
                id.len(),
                MAX_ID_LENGTH
            )));
        }
        Ok(id)
    }
}

/// Result of a configuration mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    pub id: Option<String>,
    /// Localized reasons for a rejected addition.
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    pub selected_count: usize,
}

impl MutationResponse {
    pub fn success(id: Option<String>, selected_count: usize) -> Self {
        Self {
            success: true,
            id,
            errors: Vec::new(),
            selected_count,
        }
    }

    pub fn rejected(id: String, errors: Vec<String>, selected_count: usize) -> Self {
        Self {
            success: false,
            id: Some(id),
            errors,
            selected_count,
        }
    }
}
