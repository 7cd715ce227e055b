//! Station CLI Library
//!
//! Command implementations for the `station` binary, which prints, checks
//! and queries the site content registry.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (show, check, title, links)
//!
//! # Example
//!
//! ```no_run
//! use station::cmd;
//! use station_core::Format;
//!
//! // Print the built-in registry as TOML
//! cmd::show::run(None, Format::Toml).unwrap();
//! ```

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};

pub mod cmd;

// Re-export core types for convenience
pub use station_core::{Format, Registry, Route};

/// Resolve the registry a command works on.
///
/// Without a config file the built-in registry is used; otherwise the file
/// is loaded with `STATION__*` environment overrides and validated.
pub fn load_registry(config: Option<&Path>) -> Result<Registry> {
    match config {
        Some(path) => {
            tracing::info!(?path, "Loading registry from config file");
            Registry::load_with_env(path).wrap_err("Failed to load configuration")
        }
        None => {
            tracing::debug!("Using built-in registry");
            Ok(Registry::builtin().clone())
        }
    }
}

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
