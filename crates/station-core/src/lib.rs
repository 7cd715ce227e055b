//! Station Core Library
//!
//! Site metadata, page metadata, navigation and social links for
//! ntscshen's small station, plus loading, validation and serialization of
//! that data for the rendering layer.

pub mod config;
pub mod error;
pub mod format;
pub mod registry;
pub mod site;
pub mod validate;

pub use error::{CoreError, Result};
pub use format::Format;
pub use registry::{Pages, REGISTRY, Registry, Route};
pub use site::{
    BLOG, Icon, LINKS, NavLink, PROJECTS, PageInfo, SEARCH, SITE, SOCIALS, SiteInfo, SocialLink,
    WORK,
};
pub use validate::{Issue, Severity};
