//! `tongues check` command implementation.

use std::path::PathBuf;

use clap::Args;
use tongues_config::CliSettings;

use super::{load_site, report_partition};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Site manifest with pages and navigation (JSON or YAML).
    #[arg(short, long)]
    manifest: PathBuf,

    /// Path to configuration file (default: auto-discover tongues.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or a locale navigation failed to
    /// build.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let loaded = load_site(
            self.config.as_deref(),
            &self.manifest,
            &CliSettings::default(),
            &output,
        )?;
        let site = &loaded.site;

        for locale in site.registry().locales() {
            output.locale(&locale.lang, &locale.name);
            match site.navigation(&locale.lang) {
                Some(navigation) => output.info(&format!(
                    "  {} pages, {} nav nodes",
                    navigation.pages().len(),
                    navigation.nodes().len()
                )),
                None => output.info("  navigation failed"),
            }
        }

        report_partition(site.partition(), &output)?;

        output.success(&format!(
            "OK: {} locale(s), {} page(s)",
            site.registry().len(),
            loaded.manifest.pages.len()
        ));
        Ok(())
    }
}
