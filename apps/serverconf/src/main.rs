//! # serverconf
//!
//! Server hardware configurator binary.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   apps/serverconf (THE BINARY)               │
//! │                                                              │
//! │  ┌─────────────┐   ┌─────────────┐   ┌──────────────────┐    │
//! │  │   Shell     │   │  HTTP API   │   │  One-shot CLI    │    │
//! │  │ (stdin)     │   │   (axum)    │   │    (clap)        │    │
//! │  └──────┬──────┘   └──────┬──────┘   └────────┬─────────┘    │
//! │         └─────────────────┼───────────────────┘              │
//! │                           ▼                                  │
//! │                 ┌──────────────────┐                         │
//! │                 │ serverconf-core  │                         │
//! │                 │   (THE LOGIC)    │                         │
//! │                 └──────────────────┘                         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Interactive configurator
//! serverconf --lang ru
//!
//! # One-shot commands
//! serverconf list --type processor
//! serverconf check hp_ml350g4p intel_xeon_3_0_604
//! serverconf export hp_ml350g4p kingston_1gb_ddr2_400 -f csv
//!
//! # HTTP server
//! serverconf server --port 8080 --dataset extended
//! ```

use clap::Parser;
use serverconf::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    if !cli.quiet && cli.command.is_some() && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `SERVERCONF_LOG_FORMAT=json` switches to JSON lines.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("SERVERCONF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if verbose {
        "serverconf=debug,serverconf_core=debug,tower_http=debug"
    } else {
        "serverconf=info,tower_http=debug"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

/// Print the startup banner.
fn print_banner() {
    eprintln!(
        r#"
  ┌─┐┌─┐┬─┐┬  ┬┌─┐┬─┐┌─┐┌─┐┌┐┌┌─┐
  └─┐├┤ ├┬┘└┐┌┘├┤ ├┬┘│  │ ││││├┤
  └─┘└─┘┴└─ └┘ └─┘┴└─└─┘└─┘┘└┘└

  Server hardware configurator v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
