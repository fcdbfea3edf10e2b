//! # Core Type Definitions
//!
//! This module contains the data model shared by every part of the engine:
//! - Identifiers (`ComponentId`)
//! - The closed set of hardware categories (`ComponentType`)
//! - Descriptive data (`Attribute`, `Price`, `Component`)
//! - Operational error types (`ConfiguratorError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (prices are stored in minor units)
//! - Implement `Ord` where they are used as `BTreeMap`/`BTreeSet` keys

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// COMPONENT IDENTIFIER
// =============================================================================

/// Stable, unique key of a component in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(pub String);

impl ComponentId {
    /// Create a new identifier from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ComponentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for ComponentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// COMPONENT TYPE
// =============================================================================

/// Hardware category of a component.
///
/// Declaration order is the display order used by listings, snapshots and
/// exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Server,
    Processor,
    Memory,
    /// SATA solid state drives.
    Ssd,
    /// NVMe drives.
    Nvme,
    /// SAS/SATA hard disks.
    HddSasSata,
    /// Legacy U320 SCSI hard disks.
    HddU320,
    Controller,
    Network,
    PowerSupply,
    Cooling,
    Chassis,
}

impl ComponentType {
    /// Every component type, in display order.
    pub const ALL: [ComponentType; 12] = [
        ComponentType::Server,
        ComponentType::Processor,
        ComponentType::Memory,
        ComponentType::Ssd,
        ComponentType::Nvme,
        ComponentType::HddSasSata,
        ComponentType::HddU320,
        ComponentType::Controller,
        ComponentType::Network,
        ComponentType::PowerSupply,
        ComponentType::Cooling,
        ComponentType::Chassis,
    ];

    /// Stable wire name (`snake_case`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ComponentType::Server => "server",
            ComponentType::Processor => "processor",
            ComponentType::Memory => "memory",
            ComponentType::Ssd => "ssd",
            ComponentType::Nvme => "nvme",
            ComponentType::HddSasSata => "hdd_sas_sata",
            ComponentType::HddU320 => "hdd_u320",
            ComponentType::Controller => "controller",
            ComponentType::Network => "network",
            ComponentType::PowerSupply => "power_supply",
            ComponentType::Cooling => "cooling",
            ComponentType::Chassis => "chassis",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = ConfiguratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        ComponentType::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| ConfiguratorError::UnknownComponentType(s.to_string()))
    }
}

// =============================================================================
// ATTRIBUTE
// =============================================================================

const fn default_true() -> bool {
    true
}

/// Descriptive attribute of a component.
///
/// Values are kept as text and never parsed; they are not consulted by the
/// compatibility logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default = "default_true")]
    pub required: bool,
}

impl Attribute {
    /// Create a required attribute without a unit.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            unit: None,
            required: true,
        }
    }

    /// Create a required attribute with a unit.
    #[must_use]
    pub fn with_unit(
        name: impl Into<String>,
        value: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            unit: Some(unit.into()),
            ..Self::new(name, value)
        }
    }
}

// =============================================================================
// PRICE
// =============================================================================

/// Monetary amount in minor units (cents).
///
/// Rendered and parsed as decimal text with two fractional digits, so that no
/// floating-point arithmetic is ever involved in totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

impl Price {
    /// Zero amount.
    pub const ZERO: Price = Price(0);

    /// Create a price from minor units.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Create a price from whole currency units.
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Get the amount in minor units.
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Add two prices using saturating arithmetic.
    #[must_use]
    pub const fn saturating_add(self, other: Price) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = ConfiguratorError;

    /// Parse `"1500"`, `"1500.5"` or `"1500.50"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfiguratorError::InvalidPrice(s.to_string());
        let text = s.trim();
        let (whole, fraction) = match text.split_once('.') {
            Some((w, f)) => (w, f),
            None => (text, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if text.ends_with('.') {
            return Err(invalid());
        }

        let units: u64 = whole.parse().map_err(|_| invalid())?;
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Price)
            .ok_or_else(invalid)
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Price::saturating_add)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PriceVisitor;

        impl Visitor<'_> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal string such as \"1500.00\" or a whole number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
                Ok(Price::from_units(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
                u64::try_from(v)
                    .map(Price::from_units)
                    .map_err(|_| E::custom("price must not be negative"))
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}

// =============================================================================
// COMPONENT
// =============================================================================

/// A hardware component known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub manufacturer: String,
    pub model: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Component {
    /// Create an available component with no attributes and no price.
    #[must_use]
    pub fn new(
        id: impl Into<ComponentId>,
        name: impl Into<String>,
        component_type: ComponentType,
        manufacturer: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            component_type,
            manufacturer: manufacturer.into(),
            model: model.into(),
            attributes: Vec::new(),
            price: None,
            available: true,
            description: None,
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Price used for totals: an absent price counts as zero.
    #[must_use]
    pub fn effective_price(&self) -> Price {
        self.price.unwrap_or(Price::ZERO)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Operational errors of the configurator.
///
/// Rejected additions and rule breaches are not errors; they are reported as
/// [`crate::Violation`] values. These variants cover malformed input and I/O.
#[derive(Debug, Error)]
pub enum ConfiguratorError {
    /// A component type name did not match any known category.
    #[error("Unknown component type: {0}")]
    UnknownComponentType(String),

    /// A price string could not be parsed.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// A component id was inserted twice with different types.
    #[error("Duplicate component id with conflicting type: {0}")]
    DuplicateComponent(ComponentId),

    /// Input supplied by a caller was malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A deserialization error occurred.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_type_round_trips_wire_names() {
        for t in ComponentType::ALL {
            assert_eq!(t.as_str().parse::<ComponentType>().expect("parse"), t);
        }
    }

    #[test]
    fn component_type_parse_is_case_insensitive() {
        assert_eq!(
            " Power_Supply ".parse::<ComponentType>().expect("parse"),
            ComponentType::PowerSupply
        );
        assert!(matches!(
            "storage".parse::<ComponentType>(),
            Err(ConfiguratorError::UnknownComponentType(_))
        ));
    }

    #[test]
    fn component_type_order_matches_display_order() {
        let mut sorted = ComponentType::ALL;
        sorted.sort();
        assert_eq!(sorted, ComponentType::ALL);
    }

    #[test]
    fn price_parses_decimal_text() {
        assert_eq!("1500".parse::<Price>().expect("parse").cents(), 150_000);
        assert_eq!("1500.5".parse::<Price>().expect("parse").cents(), 150_050);
        assert_eq!("0.07".parse::<Price>().expect("parse").cents(), 7);
    }

    #[test]
    fn price_rejects_malformed_text() {
        for bad in ["", "-1", "1.234", "abc", "1.", ".5", "1.x"] {
            assert!(bad.parse::<Price>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn price_display_has_two_decimals() {
        assert_eq!(Price::from_cents(150_000).to_string(), "1500.00");
        assert_eq!(Price::from_cents(5).to_string(), "0.05");
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }

    #[test]
    fn price_sum_saturates() {
        let total: Price = [Price::from_cents(u64::MAX), Price::from_cents(1)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), u64::MAX);
    }

    #[test]
    fn effective_price_treats_absent_as_zero() {
        let c = Component::new("x", "X", ComponentType::Cooling, "Acme", "X1");
        assert_eq!(c.effective_price(), Price::ZERO);
        let priced = c.with_price(Price::from_units(3));
        assert_eq!(priced.effective_price().cents(), 300);
    }
}
