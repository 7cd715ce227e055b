//! Site content records and the built-in values.
//!
//! Every record is a plain value type. The built-in values are `const`
//! items borrowing `'static` strings, while records read from a document
//! own their strings; both share one type through [`Text`].

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

/// String storage shared by built-in and loaded records.
pub type Text = Cow<'static, str>;

/// Site-wide metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Site title, used verbatim for the home page `<title>`.
    pub title: Text,

    /// Site description for meta tags.
    pub description: Text,

    /// Site author name.
    pub author: Text,
}

/// Heading and meta description for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Page title.
    pub title: Text,

    /// Page description for meta tags.
    pub description: Text,
}

impl PageInfo {
    /// Create page metadata from static strings.
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self {
            title: Cow::Borrowed(title),
            description: Cow::Borrowed(description),
        }
    }
}

/// An entry of the primary navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Display text.
    pub text: Text,

    /// Target path or URL.
    pub href: Text,
}

impl NavLink {
    /// Create a navigation link from static strings.
    pub const fn new(text: &'static str, href: &'static str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            href: Cow::Borrowed(href),
        }
    }

    /// Whether this link should be highlighted while `current` is displayed.
    ///
    /// The root link only matches the root itself; any other link matches
    /// its own path and everything below it.
    pub fn is_active(&self, current: &str) -> bool {
        let href = self.href.strip_suffix('/').unwrap_or(&self.href);
        let current = current.strip_suffix('/').unwrap_or(current);

        if href.is_empty() {
            return current.is_empty();
        }

        match current.strip_prefix(href) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Icon identifiers understood by the icon set of the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Email,
    Github,
    Linkedin,
    #[serde(rename = "twitter-x")]
    TwitterX,
}

impl Icon {
    /// All known icons.
    pub const ALL: [Icon; 4] = [Icon::Email, Icon::Github, Icon::Linkedin, Icon::TwitterX];

    /// Identifier as used by the icon set.
    pub const fn as_str(self) -> &'static str {
        match self {
            Icon::Email => "email",
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::TwitterX => "twitter-x",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A link to an external profile or contact method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Service name.
    pub name: Text,

    /// Icon shown next to the link.
    pub icon: Icon,

    /// Display label.
    pub text: Text,

    /// Target URI, `mailto:` or `https:`.
    pub href: Text,
}

impl SocialLink {
    /// Create a social link from static strings.
    pub const fn new(
        name: &'static str,
        icon: Icon,
        text: &'static str,
        href: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            icon,
            text: Cow::Borrowed(text),
            href: Cow::Borrowed(href),
        }
    }
}

// Global
pub const SITE: SiteInfo = SiteInfo {
    title: Cow::Borrowed("ntscshen's small station"),
    description: Cow::Borrowed(
        "Welcome to ntscshen's small station, a portfolio and blog for developers and clients.",
    ),
    author: Cow::Borrowed("ntscshen"),
};

pub const WORK: PageInfo = PageInfo::new("Work", "Places I have worked.");

pub const BLOG: PageInfo = PageInfo::new("Blog", "Writing on topics I am passionate about.");

pub const PROJECTS: PageInfo = PageInfo::new("Projects", "Recent projects I have worked on.");

pub const SEARCH: PageInfo = PageInfo::new("Search", "Search all posts and projects by keyword.");

pub const LINKS: &[NavLink] = &[
    NavLink::new("Home", "/"),
    NavLink::new("Work", "/work"),
    NavLink::new("Blog", "/blog"),
    NavLink::new("Projects", "/projects"),
];

pub const SOCIALS: &[SocialLink] = &[
    SocialLink::new(
        "Email",
        Icon::Email,
        "ntscshen@gmail.com",
        "mailto:ntscshen@gmail.com",
    ),
    SocialLink::new(
        "Github",
        Icon::Github,
        "ntscshen",
        "https://github.com/ntscshen/",
    ),
    SocialLink::new(
        "LinkedIn",
        Icon::Linkedin,
        "ntscshen",
        "https://www.linkedin.com/in/ntscshen/",
    ),
    SocialLink::new(
        "Twitter",
        Icon::TwitterX,
        "ntscshen888",
        "https://twitter.com/ntscshen888",
    ),
];
