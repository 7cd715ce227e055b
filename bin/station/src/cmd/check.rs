//! Check command - validate the registry

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, bail};
use station_core::{Format, Issue, Registry};

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<Issue>,
    warnings: Vec<Issue>,
}

impl ValidationResult {
    fn from_issues(issues: Vec<Issue>) -> Self {
        let (errors, warnings) = issues.into_iter().partition(Issue::is_error);
        Self { errors, warnings }
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Fail on errors, and on warnings in strict mode.
    fn verdict(&self, strict: bool) -> Result<()> {
        if self.has_errors() {
            bail!("Validation failed with {} error(s)", self.errors.len());
        }

        if strict && self.has_warnings() {
            bail!(
                "Validation failed with {} warning(s) (strict mode)",
                self.warnings.len()
            );
        }

        Ok(())
    }
}

/// Run the check command.
///
/// Unlike the other commands, an invalid config file is reported issue by
/// issue instead of aborting on the first failure.
pub fn run(config_path: Option<&Path>, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking registry");

    println!("Checking registry...");
    let registry = match config_path {
        Some(path) => read_unvalidated(path)?,
        None => Registry::builtin().clone(),
    };

    let result = ValidationResult::from_issues(registry.issues());

    println!(
        "  {} navigation link(s), {} social link(s)",
        registry.links.len(),
        registry.socials.len()
    );

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    result.verdict(strict)?;

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Parse a config file without rejecting invalid content.
fn read_unvalidated(path: &Path) -> Result<Registry> {
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let registry = Registry::from_document(format, &content)
        .wrap_err_with(|| format!("Failed to parse {}", path.display()))?;
    Ok(registry)
}
