//! `tongues build` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use rayon::prelude::*;
use serde::Serialize;
use tongues_config::CliSettings;
use tongues_landing::LandingPage;
use tongues_site::{Locale, PageContext};

use super::{load_site, report_partition};
use crate::error::CliError;
use crate::output::Output;

/// File name of each locale's navigation, written under the locale's path prefix.
const NAVIGATION_FILE: &str = "navigation.json";
/// File name of the page context list.
const CONTEXTS_FILE: &str = "contexts.json";

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Site manifest with pages and navigation (JSON or YAML).
    #[arg(short, long)]
    manifest: PathBuf,

    /// Path to configuration file (default: auto-discover tongues.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    site_dir: Option<PathBuf>,

    /// Skip the language-redirect landing page.
    #[arg(long)]
    no_landing: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// Navigations of successfully partitioned locales are written even when
    /// another locale fails; the failure is reported afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails, an output cannot be written, or a
    /// locale navigation failed to build.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            site_dir: self.site_dir,
            landing_enabled: self.no_landing.then_some(false),
        };
        let loaded = load_site(
            self.config.as_deref(),
            &self.manifest,
            &cli_settings,
            &output,
        )?;
        let site_dir = &loaded.config.site_dir_resolved;
        let site = &loaded.site;

        output.info(&format!("Output: {}", site_dir.display()));

        for navigation in site.partition().navigations() {
            let prefix = site
                .registry()
                .get(navigation.lang())
                .map_or(navigation.lang(), Locale::partition_key);
            let path = site_dir.join(prefix).join(NAVIGATION_FILE);
            write_json(&path, navigation)?;
            output.info(&format!(
                "[{}] {} pages -> {}",
                navigation.lang(),
                navigation.pages().len(),
                path.display()
            ));
        }

        let contexts: Vec<PageContext<'_>> = loaded
            .manifest
            .pages
            .par_iter()
            .map(|page| site.page_context(page))
            .collect();
        write_json(&site_dir.join(CONTEXTS_FILE), &contexts)?;

        let landing = &loaded.config.landing_resolved;
        if landing.enabled {
            let default_locale = loaded
                .config
                .default_locale()
                .ok_or_else(|| CliError::Validation("No default locale".to_owned()))?;
            let path = LandingPage::new(site.registry().locales(), &default_locale)
                .write(site_dir, landing.template.as_deref())?;
            output.info(&format!("Landing page: {}", path.display()));
        }

        report_partition(site.partition(), &output)?;

        output.success(&format!(
            "Built {} locale(s), {} page(s)",
            site.registry().len(),
            contexts.len()
        ));
        Ok(())
    }
}

/// Serialize `value` as pretty JSON into `path`, creating parent directories.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| CliError::File {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, json).map_err(|source| CliError::File {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "Wrote JSON output");
    Ok(())
}
