//! Show command - print the registry as a document

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use station_core::{Format, Registry};

/// Run the show command.
pub fn run(config_path: Option<&Path>, format: Format) -> Result<()> {
    tracing::info!(?config_path, %format, "Showing registry");

    let registry = crate::load_registry(config_path)?;
    print!("{}", render(&registry, format)?);

    Ok(())
}

/// Serialize the registry, always ending with a newline.
fn render(registry: &Registry, format: Format) -> Result<String> {
    let mut doc = registry
        .to_document(format)
        .wrap_err_with(|| format!("Failed to serialize registry as {format}"))?;
    if !doc.ends_with('\n') {
        doc.push('\n');
    }
    Ok(doc)
}
