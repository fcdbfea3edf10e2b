//! # serverconf-core
//!
//! The deterministic compatibility engine of the server configurator.
//!
//! This crate answers one question: may this hardware component join the
//! current configuration? It holds a read-only inventory (catalog,
//! compatibility table, rule set) and a mutable selection, and every change
//! to the selection is validated first.
//!
//! ## Architectural Constraints
//!
//! The core:
//! - Is pure: no I/O, no async, no logging, no clock
//! - Is deterministic: `BTreeMap` everywhere, integer money, stable ordering
//! - Never produces user-facing text: rejections are typed [`Violation`]s
//! - Leaves presentation (language, shell, HTTP, export) to the app crate

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod compat;
pub mod engine;
pub mod inventory;
pub mod rules;
pub mod sample;
pub mod selection;
pub mod session;
pub mod types;
pub mod violation;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Attribute, Component, ComponentId, ComponentType, ConfiguratorError, Price};

// =============================================================================
// RE-EXPORTS: Inventory
// =============================================================================

pub use catalog::Catalog;
pub use compat::{CompatibilityInfo, CompatibilityTable};
pub use inventory::Inventory;
pub use rules::{Rule, RuleKind, RuleLint, RuleSet};

// =============================================================================
// RE-EXPORTS: Validation & Sessions
// =============================================================================

pub use engine::ValidationEngine;
pub use selection::Selection;
pub use session::{Addition, Configuration, Session};
pub use violation::{Breach, Violation, ViolationKind};
