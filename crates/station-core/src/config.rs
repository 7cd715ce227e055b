//! Loading a registry from an override file.

use std::path::Path;

use crate::{
    error::{CoreError, Result},
    format::Format,
    registry::Registry,
};

/// Prefix of environment variables that override loaded values.
pub const ENV_PREFIX: &str = "STATION";

/// Separator between nested keys in environment variable names.
pub const ENV_SEPARATOR: &str = "__";

impl Registry {
    /// Load a registry from a TOML, JSON or YAML file.
    ///
    /// Sections absent from the file keep their built-in values.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let registry = Registry::from_document(format, &content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        tracing::debug!(?path, %format, "Loaded registry");
        registry.validate()?;
        Ok(registry)
    }

    /// Load a registry using the config crate, layering `STATION__*`
    /// environment variables over the file.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        Self::load_layered(path, environment())
    }

    fn load_layered(path: &Path, env: config::Environment) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(env)
            .build()?;

        let registry: Registry = settings.try_deserialize()?;
        tracing::debug!(?path, "Loaded registry with environment overrides");
        registry.validate()?;
        Ok(registry)
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR)
}
