//! # Inventory Loading
//!
//! Resolves the inventory a run works against: one of the built-in sample
//! datasets, or a TOML inventory file.
//!
//! ## File format
//!
//! ```toml
//! [[components]]
//! id = "hp_ml350g4p"
//! name = "HP ProLiant ML350 G4p"
//! type = "server"
//! manufacturer = "HP"
//! model = "ML350 G4p"
//! price = "1500.00"
//! attributes = [{ name = "socket_type", value = "Socket 604" }]
//!
//! [compatibility]
//! hp_ml350g4p = ["intel_xeon_3_0_604"]
//!
//! [[rules]]
//! id = "ddr2_ddr3"
//! kind = "excluded"
//! primary = "kingston_1gb_ddr2_400"
//! secondary = "samsung_4gb_ddr3_1333"
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serverconf_core::{
    Catalog, CompatibilityTable, Component, ComponentId, ConfiguratorError, Inventory, Rule,
    RuleSet, sample,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Maximum inventory file size (10 MB).
pub const MAX_INVENTORY_FILE_SIZE: u64 = 10 * 1024 * 1024;

// =============================================================================
// DATASETS
// =============================================================================

/// Built-in sample datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Dataset {
    #[default]
    Standard,
    Extended,
}

impl Dataset {
    /// Build the dataset.
    pub fn load(self) -> Result<Inventory, ConfiguratorError> {
        match self {
            Dataset::Standard => sample::standard(),
            Dataset::Extended => sample::extended(),
        }
    }
}

// =============================================================================
// FILE FORMAT
// =============================================================================

/// On-disk shape of an inventory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryFile {
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub compatibility: BTreeMap<ComponentId, Vec<ComponentId>>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl InventoryFile {
    /// Build the in-memory inventory.
    pub fn into_inventory(self) -> Result<Inventory, ConfiguratorError> {
        let mut catalog = Catalog::new();
        for component in self.components {
            catalog.insert(component)?;
        }

        let mut table = CompatibilityTable::new();
        for (id, compatible) in self.compatibility {
            table.declare(id, compatible);
        }

        let rules: RuleSet = self.rules.into_iter().collect();
        Ok(Inventory::new(catalog, table, rules))
    }
}

/// Parse an inventory from TOML text.
pub fn parse_inventory(text: &str) -> Result<Inventory, ConfiguratorError> {
    let file: InventoryFile = toml::from_str(text)
        .map_err(|e| ConfiguratorError::DeserializationError(format!("inventory: {}", e)))?;
    file.into_inventory()
}

// =============================================================================
// FILE ACCESS
// =============================================================================

/// Canonicalize `path` and make sure it names a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, ConfiguratorError> {
    let canonical = path.canonicalize().map_err(|e| {
        ConfiguratorError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(ConfiguratorError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Reject files larger than `max_size` before reading them.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), ConfiguratorError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| ConfiguratorError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(ConfiguratorError::InvalidInput(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Load an inventory from a TOML file.
pub fn load_inventory(path: &Path) -> Result<Inventory, ConfiguratorError> {
    let validated = validate_file_path(path)?;
    validate_file_size(&validated, MAX_INVENTORY_FILE_SIZE)?;

    let text = std::fs::read_to_string(&validated)
        .map_err(|e| ConfiguratorError::IoError(format!("Read file: {}", e)))?;
    parse_inventory(&text)
}

/// Resolve the inventory for a run: the file when given, else the dataset.
///
/// Rule lint findings are logged as warnings.
pub fn resolve(dataset: Dataset, path: Option<&Path>) -> Result<Inventory, ConfiguratorError> {
    let inventory = match path {
        Some(path) => {
            tracing::info!("Loading inventory from {}", path.display());
            load_inventory(path)?
        }
        None => {
            tracing::info!("Using built-in {:?} dataset", dataset);
            dataset.load()?
        }
    };

    tracing::info!(
        components = inventory.catalog().len(),
        compatibility_entries = inventory.compatibility().len(),
        rules = inventory.rules().len(),
        "Inventory loaded"
    );
    for finding in inventory.lint() {
        tracing::warn!("{}", finding);
    }

    Ok(inventory)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serverconf_core::{ComponentType, Price, RuleKind};

    const SMALL: &str = r#"
[[components]]
id = "srv"
name = "Server"
type = "server"
manufacturer = "Acme"
model = "S1"
price = "1500.00"
attributes = [{ name = "socket_type", value = "Socket 604" }]

[[components]]
id = "cpu"
name = "CPU"
type = "processor"
manufacturer = "Acme"
model = "C1"
price = 150

[compatibility]
srv = ["cpu"]

[[rules]]
id = "max_cpu"
kind = "limited"
primary = "cpu"
max = 2
condition = "two sockets"
"#;

    #[test]
    fn parses_components_table_and_rules() {
        let inventory = parse_inventory(SMALL).expect("parse");

        let srv = inventory.catalog().get("srv").expect("srv");
        assert_eq!(srv.component_type, ComponentType::Server);
        assert_eq!(srv.price, Some(Price::from_units(1500)));
        assert!(srv.available);
        assert_eq!(srv.attributes[0].unit, None);

        let cpu = inventory.catalog().get("cpu").expect("cpu");
        assert_eq!(cpu.price, Some(Price::from_units(150)));

        assert!(inventory.compatibility().permits("srv", "cpu"));
        assert!(matches!(
            inventory.rules().rules()[0].kind,
            RuleKind::Limited {
                max: Some(2),
                min: None,
                ..
            }
        ));
    }

    #[test]
    fn excluded_rule_without_secondary_is_rejected() {
        let text = r#"
[[rules]]
id = "bad"
kind = "excluded"
primary = "a"
"#;
        let err = parse_inventory(text).expect_err("must fail");
        assert!(matches!(err, ConfiguratorError::DeserializationError(_)));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let text = r#"
[[components]]
id = "x"
name = "X"
type = "toaster"
manufacturer = "Acme"
model = "T"
"#;
        assert!(parse_inventory(text).is_err());
    }

    #[test]
    fn empty_file_is_an_empty_inventory() {
        let inventory = parse_inventory("").expect("parse");
        assert!(inventory.catalog().is_empty());
        assert!(inventory.rules().is_empty());
    }

    #[test]
    fn datasets_load() {
        assert_eq!(Dataset::Standard.load().expect("standard").catalog().len(), 12);
        assert_eq!(Dataset::Extended.load().expect("extended").catalog().len(), 17);
    }
}
