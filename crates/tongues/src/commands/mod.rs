//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;

use std::path::Path;

use tongues_config::{CliSettings, Config};
use tongues_site::{I18nSite, Partition, SiteManifest};

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;

use crate::error::CliError;
use crate::manifest::load_manifest;
use crate::output::Output;

/// Configuration, manifest and partitioned site shared by every command.
pub(crate) struct Loaded {
    pub config: Config,
    pub manifest: SiteManifest,
    pub site: I18nSite,
}

/// Load config and manifest, then partition the site.
///
/// Configuration warnings are printed as they are found.
pub(crate) fn load_site(
    config_path: Option<&Path>,
    manifest_path: &Path,
    cli_settings: &CliSettings,
    output: &Output,
) -> Result<Loaded, CliError> {
    let config = Config::load(config_path, Some(cli_settings))?;
    for warning in config.warnings() {
        output.warning(&format!("Warning: {warning}"));
    }

    let manifest = load_manifest(manifest_path)?;
    let site = I18nSite::build(config.locales(), &manifest.nav_or_pages(), &manifest.pages)?;

    Ok(Loaded {
        config,
        manifest,
        site,
    })
}

/// Print partition problems and fail if any locale could not be built.
pub(crate) fn report_partition(partition: &Partition, output: &Output) -> Result<(), CliError> {
    for page in partition.unresolved() {
        output.warning(&format!(
            "Warning: {} does not belong to any locale",
            page.source_path
        ));
    }
    for failure in partition.failures() {
        output.error(&format!("[{}] {failure}", failure.lang()));
    }

    if partition.is_complete() {
        Ok(())
    } else {
        Err(CliError::Validation(format!(
            "Navigation failed for {} locale(s)",
            partition.failures().len()
        )))
    }
}
