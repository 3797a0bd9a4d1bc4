//! Tongues CLI - multi-language documentation sites.
//!
//! Provides commands for:
//! - `build`: Partition a site manifest per locale and write the results
//! - `check`: Validate configuration and manifest without writing anything

mod commands;
mod error;
mod manifest;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs};
use output::Output;

/// Log level used when neither `--verbose` nor `RUST_LOG` is given.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Tongues - locale partitioning for documentation sites.
#[derive(Parser)]
#[command(name = "tongues", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Partition the site and write navigations, page contexts and the landing page.
    Build(BuildArgs),
    /// Validate configuration and manifest.
    Check(CheckArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Build(args) => args.verbose,
            Self::Check(args) => args.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(cli.command.verbose(), rust_log.as_deref());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Build the log filter.
///
/// `--verbose` enables INFO level, otherwise `RUST_LOG` is used when it
/// parses, falling back to WARN.
fn env_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("info");
    }
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn test_env_filter_defaults_to_warn() {
        let filter = env_filter(false, None);

        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_env_filter_verbose_is_info() {
        let filter = env_filter(true, Some("trace"));

        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_env_filter_blank_rust_log_defaults_to_warn() {
        let filter = env_filter(false, Some("  "));

        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_env_filter_uses_rust_log() {
        let filter = env_filter(false, Some("debug"));

        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
