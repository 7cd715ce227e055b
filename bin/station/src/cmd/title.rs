//! Title command - print the document title and description of a route

use std::path::Path;

use color_eyre::eyre::Result;
use station_core::{Registry, Route};

/// Run the title command.
pub fn run(config_path: Option<&Path>, route: Route) -> Result<()> {
    tracing::info!(?config_path, %route, "Resolving title");

    let registry = crate::load_registry(config_path)?;
    print!("{}", render(&registry, route));

    Ok(())
}

fn render(registry: &Registry, route: Route) -> String {
    format!(
        "{}\n{}\n",
        registry.document_title(route),
        registry.meta_description(route)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_title_verbatim() {
        let out = render(Registry::builtin(), Route::Home);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("ntscshen's small station"));
        assert_eq!(
            lines.next(),
            Some(
                "Welcome to ntscshen's small station, a portfolio and blog for developers and clients."
            )
        );
    }

    #[test]
    fn test_search_title() {
        let out = render(Registry::builtin(), Route::Search);
        assert_eq!(
            out,
            "Search | ntscshen's small station\nSearch all posts and projects by keyword.\n"
        );
    }
}
