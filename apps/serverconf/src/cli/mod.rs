//! # CLI Module
//!
//! Command-line interface of the configurator.
//!
//! ## Available Commands
//!
//! - `shell` - Interactive configurator (default)
//! - `server` - Start the HTTP server
//! - `list` - List catalog components
//! - `search` - Search components by name or manufacturer
//! - `compat` - Show the compatibility entry of a component
//! - `info` - Show component details
//! - `check` - Validate a set of component ids as one configuration
//! - `export` - Build a configuration from ids and export it

mod commands;

use crate::data::{self, Dataset};
use crate::export::ExportFormat;
use crate::i18n::Language;
use clap::{Parser, Subcommand};
use serverconf_core::{ConfiguratorError, Session};
use std::path::PathBuf;
use std::sync::Arc;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// serverconf - server hardware configurator
///
/// Assembles server configurations from a parts catalog and rejects
/// incompatible combinations.
#[derive(Parser, Debug)]
#[command(name = "serverconf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Presentation language
    #[arg(
        short = 'L',
        long,
        global = true,
        value_enum,
        env = "SERVERCONF_LANG",
        default_value = "en"
    )]
    pub lang: Language,

    /// Built-in dataset to use when no inventory file is given
    #[arg(short = 'd', long, global = true, value_enum, default_value = "standard")]
    pub dataset: Dataset,

    /// TOML inventory file (overrides --dataset)
    #[arg(short = 'i', long, global = true)]
    pub inventory: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive configurator
    Shell,

    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// List catalog components
    List {
        /// Only components of this type (e.g. processor, memory)
        #[arg(short = 't', long = "type")]
        component_type: Option<String>,
    },

    /// Search components by name or manufacturer
    Search {
        /// Case-insensitive substring
        query: String,

        /// Only components of this type
        #[arg(short = 't', long = "type")]
        component_type: Option<String>,
    },

    /// Show the compatibility entry of a component
    Compat {
        /// Component id
        id: String,
    },

    /// Show component details
    Info {
        /// Component id
        id: String,
    },

    /// Validate a set of component ids as one configuration
    Check {
        /// Component ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Build a configuration from ids and export it
    Export {
        /// Component ids, added in order
        ids: Vec<String>,

        /// Export format
        #[arg(short = 'f', long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), ConfiguratorError> {
    let inventory = Arc::new(data::resolve(cli.dataset, cli.inventory.as_deref())?);
    let session = Session::new(inventory);
    let lang = cli.lang;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port }) => cmd_server(session, lang, &host, port).await,
        Some(Commands::List { component_type }) => {
            cmd_list(&session, lang, json_mode, component_type.as_deref())
        }
        Some(Commands::Search {
            query,
            component_type,
        }) => cmd_search(&session, lang, json_mode, &query, component_type.as_deref()),
        Some(Commands::Compat { id }) => cmd_compat(&session, lang, json_mode, &id),
        Some(Commands::Info { id }) => cmd_info(&session, lang, json_mode, &id),
        Some(Commands::Check { ids }) => cmd_check(&session, lang, json_mode, &ids),
        Some(Commands::Export {
            ids,
            format,
            output,
        }) => cmd_export(session, lang, &ids, format, output.as_deref()),
        Some(Commands::Shell) | None => cmd_shell(session, lang),
    }
}
