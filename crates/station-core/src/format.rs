//! Key-value document formats for the registry.

use std::{fmt, path::Path, str::FromStr};

use crate::{
    error::{CoreError, Result},
    registry::Registry,
};

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Toml,
    Json,
    Yaml,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Toml, Format::Json, Format::Yaml];

    /// Canonical file extension.
    pub const fn extension(self) -> &'static str {
        match self {
            Format::Toml => "toml",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| CoreError::UnknownFormat(path.display().to_string()))?;
        ext.parse()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(CoreError::UnknownFormat(s.to_string())),
        }
    }
}

impl Registry {
    /// Serialize the registry into a document.
    pub fn to_document(&self, format: Format) -> Result<String> {
        let doc = match format {
            Format::Toml => toml::to_string_pretty(self)?,
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Yaml => serde_yaml::to_string(self)?,
        };
        Ok(doc)
    }

    /// Parse a registry from a document.
    ///
    /// Sections missing from the document keep their built-in values. The
    /// result is not validated.
    pub fn from_document(format: Format, input: &str) -> Result<Self> {
        let registry = match format {
            Format::Toml => toml::from_str(input)?,
            Format::Json => serde_json::from_str(input)?,
            Format::Yaml => serde_yaml::from_str(input)?,
        };
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Icon;

    #[test]
    fn test_format_parsing() {
        assert_eq!("toml".parse::<Format>().expect("toml"), Format::Toml);
        assert_eq!("JSON".parse::<Format>().expect("json"), Format::Json);
        assert_eq!("yml".parse::<Format>().expect("yml"), Format::Yaml);
        assert!("ini".parse::<Format>().is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            Format::from_path(Path::new("site.yml")).expect("yml"),
            Format::Yaml
        );
        assert_eq!(
            Format::from_path(Path::new("config/station.toml")).expect("toml"),
            Format::Toml
        );
        assert!(Format::from_path(Path::new("station")).is_err());
    }

    #[test]
    fn test_roundtrip_every_format() {
        let registry = Registry::builtin();
        for format in Format::ALL {
            let doc = registry.to_document(format).expect("serialize");
            let parsed = Registry::from_document(format, &doc).expect("parse");
            assert_eq!(&parsed, registry, "round-trip through {format}");
        }
    }

    #[test]
    fn test_toml_document_layout() {
        let doc = Registry::builtin()
            .to_document(Format::Toml)
            .expect("serialize");
        assert!(doc.contains("[site]"));
        assert!(doc.contains("[pages.work]"));
        assert!(doc.contains("[[links]]"));
        assert!(doc.contains("[[socials]]"));
        assert!(doc.contains("icon = \"twitter-x\""));
    }

    #[test]
    fn test_partial_document_keeps_builtins() {
        let doc = r#"
[site]
title = "Another station"
description = "Somewhere else."
author = "someone"
"#;
        let registry = Registry::from_document(Format::Toml, doc).expect("parse");
        assert_eq!(registry.site.title, "Another station");
        assert_eq!(registry.pages, Registry::builtin().pages);
        assert_eq!(registry.links(), Registry::builtin().links());
        assert_eq!(registry.socials.len(), 4);
    }

    #[test]
    fn test_unknown_icon_fails_to_parse() {
        let doc = r#"
socials:
  - name: Mastodon
    icon: mastodon
    text: me
    href: https://mastodon.social/@me
"#;
        assert!(Registry::from_document(Format::Yaml, doc).is_err());

        let ok = doc.replace("icon: mastodon", "icon: github");
        let registry = Registry::from_document(Format::Yaml, &ok).expect("parse");
        assert_eq!(registry.socials.len(), 1);
        assert_eq!(registry.socials[0].icon, Icon::Github);
    }
}
