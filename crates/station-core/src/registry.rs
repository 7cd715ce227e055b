//! The configuration registry consumed by the rendering layer.

use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::CoreError,
    site::{
        BLOG, LINKS, NavLink, PROJECTS, PageInfo, SEARCH, SITE, SOCIALS, SiteInfo, SocialLink,
        WORK,
    },
};

/// Every record a page template can ask for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Registry {
    /// Site-wide metadata.
    pub site: SiteInfo,

    /// Per-page metadata.
    pub pages: Pages,

    /// Navigation menu, in display order.
    pub links: Cow<'static, [NavLink]>,

    /// Social links, in display order.
    pub socials: Cow<'static, [SocialLink]>,
}

/// Metadata of the pages that have their own route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pages {
    /// Places worked.
    pub work: PageInfo,

    /// Blog index.
    pub blog: PageInfo,

    /// Project list.
    pub projects: PageInfo,

    /// Search page.
    pub search: PageInfo,
}

/// The built-in registry.
pub const REGISTRY: Registry = Registry {
    site: SITE,
    pages: Pages {
        work: WORK,
        blog: BLOG,
        projects: PROJECTS,
        search: SEARCH,
    },
    links: Cow::Borrowed(LINKS),
    socials: Cow::Borrowed(SOCIALS),
};

static BUILTIN: Registry = REGISTRY;

impl Default for Registry {
    fn default() -> Self {
        REGISTRY
    }
}

impl Default for Pages {
    fn default() -> Self {
        REGISTRY.pages
    }
}

impl Registry {
    /// Shared reference to the built-in registry.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Site-wide metadata.
    pub fn site(&self) -> &SiteInfo {
        &self.site
    }

    /// Page metadata for a route; the home route has none of its own.
    pub fn page(&self, route: Route) -> Option<&PageInfo> {
        match route {
            Route::Home => None,
            Route::Work => Some(&self.pages.work),
            Route::Blog => Some(&self.pages.blog),
            Route::Projects => Some(&self.pages.projects),
            Route::Search => Some(&self.pages.search),
        }
    }

    /// Navigation menu, in display order.
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Social links, in display order.
    pub fn socials(&self) -> &[SocialLink] {
        &self.socials
    }

    /// Find a social link by name, ignoring case.
    pub fn social(&self, name: &str) -> Option<&SocialLink> {
        self.socials
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// Text for the `<title>` element of a route.
    ///
    /// The home route uses the site title verbatim, every other route is
    /// `"{page} | {site}"`.
    pub fn document_title(&self, route: Route) -> Cow<'_, str> {
        match self.page(route) {
            None => Cow::Borrowed(&*self.site.title),
            Some(page) => Cow::Owned(format!("{} | {}", page.title, self.site.title)),
        }
    }

    /// Text for the meta description of a route.
    pub fn meta_description(&self, route: Route) -> &str {
        match self.page(route) {
            None => &*self.site.description,
            Some(page) => &*page.description,
        }
    }

    /// The navigation entry to highlight while `current` is displayed.
    ///
    /// When several entries match, the most specific one wins.
    pub fn active_link(&self, current: &str) -> Option<&NavLink> {
        self.links
            .iter()
            .filter(|link| link.is_active(current))
            .max_by_key(|link| link.href.len())
    }
}

/// Routes that carry their own metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Work,
    Blog,
    Projects,
    Search,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Work,
        Route::Blog,
        Route::Projects,
        Route::Search,
    ];

    /// Site path of the route.
    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Work => "/work",
            Route::Blog => "/blog",
            Route::Projects => "/projects",
            Route::Search => "/search",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Work => "work",
            Route::Blog => "blog",
            Route::Projects => "projects",
            Route::Search => "search",
        }
    }

    /// Route whose path equals `path`, ignoring a single trailing slash.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        Self::ALL.into_iter().find(|route| {
            let own = route.path();
            own.strip_suffix('/').unwrap_or(own) == trimmed
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Route {
    type Err = CoreError;

    /// Accepts a route name (`blog`) or a path (`/blog`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('/') {
            return Route::from_path(s).ok_or_else(|| CoreError::UnknownRoute(s.to_string()));
        }

        Self::ALL
            .into_iter()
            .find(|route| route.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownRoute(s.to_string()))
    }
}
