//! # serverconf
//!
//! Application layer of the server hardware configurator: the interactive
//! shell, the one-shot CLI, the HTTP API, localization, export and inventory
//! loading. All compatibility decisions are made by `serverconf-core`.

pub mod api;
pub mod cli;
pub mod data;
pub mod export;
pub mod i18n;
pub mod shell;
