//! Station CLI
//!
//! Prints, checks and queries the content registry of ntscshen's small
//! station.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use station_core::{Format, Route};

/// Command-line interface for station.
#[derive(Parser)]
#[command(
    name = "station",
    version,
    about = "Site content registry for ntscshen's small station"
)]
struct Cli {
    /// Path to a configuration file overriding the built-in registry
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Print the registry as a document
    Show {
        /// Output format (toml, json, yaml)
        #[arg(short, long, default_value = "toml")]
        format: Format,
    },
    /// Validate the registry
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Print the document title and meta description of a route
    Title {
        /// Route name or path (e.g. blog, /projects)
        route: Route,
    },
    /// List navigation and social links
    Links {
        /// Path of the page being displayed, marks the active entry
        #[arg(long)]
        current: Option<String>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    station::init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Show { format } => {
            station::cmd::show::run(config, format)?;
        }
        Commands::Check { strict } => {
            station::cmd::check::run(config, strict)?;
        }
        Commands::Title { route } => {
            station::cmd::title::run(config, route)?;
        }
        Commands::Links { current } => {
            station::cmd::links::run(config, current.as_deref())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_show_command_parsing() {
        let args = ["station", "show", "--format", "yaml"];
        let cli = Cli::parse_from(args);

        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);

        match cli.command {
            Commands::Show { format } => {
                assert_eq!(format, Format::Yaml);
            }
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_show_defaults_to_toml() {
        let cli = Cli::parse_from(["station", "show"]);

        match cli.command {
            Commands::Show { format } => assert_eq!(format, Format::Toml),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["station", "show", "--format", "ini"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["station", "check", "--strict"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Check { strict } => {
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_title_accepts_name_and_path() {
        let cli = Cli::parse_from(["station", "title", "blog"]);
        match cli.command {
            Commands::Title { route } => assert_eq!(route, Route::Blog),
            _ => panic!("Expected Title command"),
        }

        let cli = Cli::parse_from(["station", "title", "/"]);
        match cli.command {
            Commands::Title { route } => assert_eq!(route, Route::Home),
            _ => panic!("Expected Title command"),
        }

        assert!(Cli::try_parse_from(["station", "title", "about"]).is_err());
    }

    #[test]
    fn test_cli_links_command_parsing() {
        let cli = Cli::parse_from(["station", "links", "--current", "/blog/post"]);

        match cli.command {
            Commands::Links { current } => {
                assert_eq!(current.as_deref(), Some("/blog/post"));
            }
            _ => panic!("Expected Links command"),
        }
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["station", "-vvv", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["station", "--config", "site.toml", "show"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, Some(std::path::PathBuf::from("site.toml")));
    }
}
