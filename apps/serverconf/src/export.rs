//! # Configuration Export
//!
//! JSON and CSV renderings of a configuration snapshot.
//!
//! The JSON document carries validation errors as localized strings, so it
//! depends on the presentation language. The CSV table does not.

use crate::i18n::Language;
use clap::ValueEnum;
use csv::Writer;
use serde::{Deserialize, Serialize};
use serverconf_core::{
    Catalog, Component, ComponentId, ComponentType, Configuration, ConfiguratorError, Price,
};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Header row of the CSV export.
pub const CSV_HEADER: [&str; 5] = ["Component Type", "Name", "Manufacturer", "Model", "Price"];

// =============================================================================
// FORMAT
// =============================================================================

/// Export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(ConfiguratorError::InvalidInput(format!(
                "unknown export format: {other}"
            ))),
        }
    }
}

// =============================================================================
// JSON DOCUMENT
// =============================================================================

/// Exported attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedAttribute {
    pub name: String,
    pub value: String,
    pub unit: Option<String>,
}

/// Exported component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedComponent {
    pub id: ComponentId,
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub price: Option<Price>,
    pub attributes: Vec<ExportedAttribute>,
}

impl From<&Component> for ExportedComponent {
    fn from(component: &Component) -> Self {
        Self {
            id: component.id.clone(),
            name: component.name.clone(),
            manufacturer: component.manufacturer.clone(),
            model: component.model.clone(),
            price: component.price,
            attributes: component
                .attributes
                .iter()
                .map(|a| ExportedAttribute {
                    name: a.name.clone(),
                    value: a.value.clone(),
                    unit: a.unit.clone(),
                })
                .collect(),
        }
    }
}

/// The JSON export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub id: String,
    pub name: String,
    pub total_price: Price,
    pub is_valid: bool,
    pub validation_errors: Vec<String>,
    pub components: BTreeMap<ComponentType, Vec<ExportedComponent>>,
}

impl ExportDocument {
    /// Build the document for a snapshot.
    #[must_use]
    pub fn new(config: &Configuration, lang: Language, catalog: &Catalog) -> Self {
        Self {
            id: config.id(),
            name: configuration_name(config, lang),
            total_price: config.total_price,
            is_valid: config.is_valid,
            validation_errors: lang.violations(&config.validation_errors, catalog),
            components: config
                .components
                .iter()
                .map(|(t, list)| (*t, list.iter().map(ExportedComponent::from).collect()))
                .collect(),
        }
    }
}

/// Human name of a configuration (`Configuration 3`).
#[must_use]
pub fn configuration_name(config: &Configuration, lang: Language) -> String {
    format!(
        "{} {}",
        lang.text(crate::i18n::Msg::Configuration),
        config.number
    )
}

// =============================================================================
// RENDERING
// =============================================================================

/// Pretty-printed JSON export.
pub fn to_json(
    config: &Configuration,
    lang: Language,
    catalog: &Catalog,
) -> Result<String, ConfiguratorError> {
    serde_json::to_string_pretty(&ExportDocument::new(config, lang, catalog))
        .map_err(|e| ConfiguratorError::SerializationError(format!("JSON export: {}", e)))
}

/// CSV export: one row per selected component, absent prices as `0.00`.
pub fn to_csv(config: &Configuration) -> Result<String, ConfiguratorError> {
    let csv_error = |e: csv::Error| ConfiguratorError::SerializationError(format!("CSV export: {}", e));

    let mut wtr = Writer::from_writer(vec![]);
    wtr.write_record(CSV_HEADER).map_err(csv_error)?;

    for (component_type, component) in config.iter() {
        wtr.write_record([
            component_type.as_str(),
            component.name.as_str(),
            component.manufacturer.as_str(),
            component.model.as_str(),
            component.effective_price().to_string().as_str(),
        ])
        .map_err(csv_error)?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| ConfiguratorError::SerializationError(format!("CSV writer: {}", e)))?;
    String::from_utf8(data)
        .map_err(|e| ConfiguratorError::SerializationError(format!("CSV encoding: {}", e)))
}

/// Render `config` in `format`.
pub fn render(
    config: &Configuration,
    format: ExportFormat,
    lang: Language,
    catalog: &Catalog,
) -> Result<String, ConfiguratorError> {
    match format {
        ExportFormat::Json => to_json(config, lang, catalog),
        ExportFormat::Csv => to_csv(config),
    }
}

// =============================================================================
// TESTS
// =============================================================================
