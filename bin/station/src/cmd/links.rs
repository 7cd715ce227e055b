//! Links command - list navigation and social links in display order

use std::{fmt::Write as _, path::Path};

use color_eyre::eyre::Result;
use station_core::Registry;

/// Run the links command.
///
/// The entry matching `current` is marked as active.
pub fn run(config_path: Option<&Path>, current: Option<&str>) -> Result<()> {
    tracing::info!(?config_path, ?current, "Listing links");

    let registry = crate::load_registry(config_path)?;
    print!("{}", render(&registry, current)?);

    Ok(())
}

fn render(registry: &Registry, current: Option<&str>) -> Result<String> {
    let active = current.and_then(|path| registry.active_link(path));
    let mut out = String::new();

    writeln!(out, "Navigation:")?;
    for link in registry.links() {
        let marker = if active == Some(link) { '*' } else { ' ' };
        writeln!(out, "  {marker} {:<12} {}", link.text, link.href)?;
    }

    writeln!(out)?;
    writeln!(out, "Socials:")?;
    for social in registry.socials() {
        writeln!(
            out,
            "    {:<12} {:<10} {:<20} {}",
            social.name, social.icon, social.text, social.href
        )?;
    }

    Ok(out)
}
