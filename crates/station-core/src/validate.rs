//! Content invariants of a [`Registry`].
//!
//! The registry itself never checks anything. Loaders call
//! [`Registry::validate`] before handing a registry to consumers, and the
//! `check` command reports [`Registry::issues`] verbatim.

use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    error::{CoreError, Result},
    registry::Registry,
    site::PageInfo,
};

/// Base used to resolve site-relative navigation paths.
const SITE_BASE: &str = "https://localhost/";

/// Schemes a social link may use.
const SOCIAL_SCHEMES: [&str; 3] = ["mailto", "https", "http"];

/// How serious an [`Issue`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single broken or suspicious field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,

    /// Path of the field, e.g. `socials[1].href`.
    pub field: String,

    pub message: String,
}

impl Issue {
    pub fn new(severity: Severity, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Collects issues while walking the registry.
#[derive(Debug, Default)]
struct Checker {
    issues: Vec<Issue>,
}

impl Checker {
    fn error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue::new(Severity::Error, field, message));
    }

    fn warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(Issue::new(Severity::Warning, field, message));
    }

    fn non_empty(&mut self, field: impl Into<String>, value: &str) {
        if value.trim().is_empty() {
            self.error(field, "must not be empty");
        }
    }

    fn page(&mut self, name: &str, page: &PageInfo) {
        self.non_empty(format!("pages.{name}.title"), &page.title);
        self.non_empty(format!("pages.{name}.description"), &page.description);
    }

    fn nav_href(&mut self, field: String, href: &str) {
        match Url::parse(href) {
            Ok(url) => {
                if url.cannot_be_a_base() {
                    self.error(field, format!("\"{href}\" is not a navigable URL"));
                } else {
                    self.warning(field, format!("\"{href}\" points off-site"));
                }
            }
            Err(url::ParseError::RelativeUrlWithoutBase) if href.starts_with('/') => {
                let resolved = Url::parse(SITE_BASE)
                    .and_then(|base| base.join(href).map(|url| (base, url)));
                match resolved {
                    Ok((base, url)) if url.host() != base.host() || href.starts_with("//") => {
                        self.warning(field, format!("\"{href}\" points off-site"));
                    }
                    Ok(_) => {}
                    Err(e) => self.error(field, format!("\"{href}\" is not a valid path: {e}")),
                }
            }
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                self.error(field, format!("\"{href}\" must start with '/'"));
            }
            Err(e) => self.error(field, format!("\"{href}\" is not a valid URI: {e}")),
        }
    }

    fn social_href(&mut self, field: String, href: &str) {
        let url = match Url::parse(href) {
            Ok(url) => url,
            Err(e) => {
                self.error(field, format!("\"{href}\" is not a valid URI: {e}"));
                return;
            }
        };

        match url.scheme() {
            "mailto" => {
                let address = url.path();
                match address.split_once('@') {
                    Some((user, host)) if !user.is_empty() && !host.is_empty() => {}
                    _ => self.error(field, format!("\"{href}\" has no email address")),
                }
            }
            "http" => self.warning(field, format!("\"{href}\" should use https")),
            "https" => {
                if url.host_str().is_none_or(str::is_empty) {
                    self.error(field, format!("\"{href}\" has no host"));
                }
            }
            scheme => self.error(
                field,
                format!(
                    "scheme \"{scheme}\" is not one of {}",
                    SOCIAL_SCHEMES.join(", ")
                ),
            ),
        }
    }

    /// Report every href that already appeared earlier in the same sequence.
    fn unique_hrefs<'a>(&mut self, section: &str, hrefs: impl Iterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for (i, href) in hrefs.enumerate() {
            if !href.is_empty() && !seen.insert(href) {
                self.error(
                    format!("{section}[{i}].href"),
                    format!("duplicate href \"{href}\""),
                );
            }
        }
    }
}

impl Registry {
    /// Every invariant violation and warning, in field order.
    pub fn issues(&self) -> Vec<Issue> {
        let mut checker = Checker::default();

        checker.non_empty("site.title", &self.site.title);
        checker.non_empty("site.description", &self.site.description);
        checker.non_empty("site.author", &self.site.author);

        checker.page("work", &self.pages.work);
        checker.page("blog", &self.pages.blog);
        checker.page("projects", &self.pages.projects);
        checker.page("search", &self.pages.search);

        for (i, link) in self.links.iter().enumerate() {
            checker.non_empty(format!("links[{i}].text"), &link.text);
            if link.href.is_empty() {
                checker.error(format!("links[{i}].href"), "must not be empty");
            } else {
                checker.nav_href(format!("links[{i}].href"), &link.href);
            }
        }
        checker.unique_hrefs("links", self.links.iter().map(|l| l.href.as_ref()));

        for (i, social) in self.socials.iter().enumerate() {
            checker.non_empty(format!("socials[{i}].name"), &social.name);
            checker.non_empty(format!("socials[{i}].text"), &social.text);
            if social.href.is_empty() {
                checker.error(format!("socials[{i}].href"), "must not be empty");
            } else {
                checker.social_href(format!("socials[{i}].href"), &social.href);
            }
        }
        checker.unique_hrefs("socials", self.socials.iter().map(|s| s.href.as_ref()));

        checker.issues
    }

    /// Fail on any error-severity issue; warnings are only logged.
    pub fn validate(&self) -> Result<()> {
        let (errors, warnings): (Vec<Issue>, Vec<Issue>) =
            self.issues().into_iter().partition(Issue::is_error);

        for warning in &warnings {
            tracing::warn!(field = %warning.field, "{}", warning.message);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::site::{Icon, NavLink, SocialLink};

    fn fields(issues: &[Issue]) -> Vec<&str> {
        issues.iter().map(|i| i.field.as_str()).collect()
    }

    #[test]
    fn test_builtin_registry_is_clean() {
        assert!(Registry::builtin().issues().is_empty());
        assert!(Registry::builtin().validate().is_ok());
    }

    #[test]
    fn test_empty_fields_are_errors() {
        let mut registry = Registry::default();
        registry.site.title = Cow::Borrowed("");
        registry.pages.blog.description = Cow::Borrowed("   ");

        let issues = registry.issues();
        assert_eq!(fields(&issues), ["site.title", "pages.blog.description"]);
        assert!(issues.iter().all(Issue::is_error));
    }

    #[test]
    fn test_nav_href_rules() {
        let mut registry = Registry::default();
        registry.links = Cow::Owned(vec![
            NavLink::new("Home", "/"),
            NavLink::new("Relative", "work"),
            NavLink::new("Empty", ""),
            NavLink::new("Elsewhere", "https://example.com/"),
            NavLink::new("Scheme relative", "//evil.example/x"),
        ]);

        let issues = registry.issues();
        assert_eq!(
            fields(&issues),
            ["links[1].href", "links[2].href", "links[3].href", "links[4].href"]
        );
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(issues[0].message.contains("must start with '/'"));
        assert_eq!(issues[1].severity, Severity::Error);
        assert_eq!(issues[2].severity, Severity::Warning);
        assert_eq!(issues[3].severity, Severity::Warning);
        assert!(issues[3].message.contains("points off-site"));
    }

    #[test]
    fn test_social_href_rules() {
        let mut registry = Registry::default();
        registry.socials = Cow::Owned(vec![
            SocialLink::new("Email", Icon::Email, "me", "mailto:nobody"),
            SocialLink::new("Github", Icon::Github, "me", "ftp://github.com/me"),
            SocialLink::new("LinkedIn", Icon::Linkedin, "me", "http://linkedin.com/in/me"),
            SocialLink::new("Twitter", Icon::TwitterX, "me", "not a uri"),
        ]);

        let issues = registry.issues();
        assert_eq!(
            fields(&issues),
            [
                "socials[0].href",
                "socials[1].href",
                "socials[2].href",
                "socials[3].href"
            ]
        );
        assert!(issues[0].message.contains("no email address"));
        assert!(issues[1].message.contains("scheme \"ftp\""));
        assert_eq!(issues[2].severity, Severity::Warning);
        assert_eq!(issues[3].severity, Severity::Error);
    }

    #[test]
    fn test_duplicate_hrefs() {
        let mut registry = Registry::default();
        registry.links = Cow::Owned(vec![
            NavLink::new("Home", "/"),
            NavLink::new("Also home", "/"),
        ]);

        let issues = registry.issues();
        assert_eq!(fields(&issues), ["links[1].href"]);
        assert!(issues[0].message.contains("duplicate"));
    }

    #[test]
    fn test_validate_ignores_warnings() {
        let mut registry = Registry::default();
        registry.links.to_mut().push(NavLink::new("Elsewhere", "https://example.com/"));

        assert_eq!(registry.issues().len(), 1);
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_errors() {
        let mut registry = Registry::default();
        registry.site.author = Cow::Borrowed("");

        let err = registry.validate().expect_err("empty author must fail");
        assert_eq!(fields(err.issues()), ["site.author"]);
    }
}
