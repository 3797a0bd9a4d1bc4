//! Configuration management for tongues.
//!
//! Parses `tongues.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site_dir`
//! - `landing.template`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tongues_site::{Locale, NavEntry};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output site directory.
    pub site_dir: Option<PathBuf>,
    /// Override landing page generation flag.
    pub landing_enabled: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "tongues.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language of the locale visitors land on by default.
    default_lang: Option<String>,
    /// Output directory (relative string from TOML).
    site_dir: Option<String>,
    /// Configured locales, in display order.
    locales: Vec<LocaleConfig>,
    /// Landing page configuration (paths are relative strings from TOML).
    landing: LandingConfigRaw,

    /// Resolved output directory (set after loading).
    #[serde(skip)]
    pub site_dir_resolved: PathBuf,
    /// Resolved landing page configuration (set after loading).
    #[serde(skip)]
    pub landing_resolved: LandingConfig,
    /// Non-fatal findings from validation.
    #[serde(skip)]
    warnings: Vec<String>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// A locale as written in the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Language code (required).
    pub lang: String,
    /// Display name, defaults to `lang`.
    pub name: Option<String>,
    /// Base link, defaults to `/{lang}/`.
    pub link: Option<String>,
    /// Localized site title.
    pub site_name: Option<String>,
    /// Custom navigation for this locale.
    pub nav: Option<Vec<NavEntry>>,
}

impl LocaleConfig {
    /// Convert to a [`Locale`], filling in default name and link.
    #[must_use]
    pub fn to_locale(&self) -> Locale {
        let mut locale = Locale::new(self.lang.clone());
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            locale.name = name.to_owned();
        }
        if let Some(link) = self.link.as_deref().filter(|l| !l.is_empty()) {
            locale.link = link.to_owned();
        }
        locale.site_name.clone_from(&self.site_name);
        locale.nav.clone_from(&self.nav);
        locale
    }
}

/// Raw landing configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct LandingConfigRaw {
    enabled: Option<bool>,
    template: Option<String>,
}

/// Resolved landing page configuration with absolute paths.
#[derive(Debug)]
pub struct LandingConfig {
    /// Whether to write the language-redirect `index.html`.
    pub enabled: bool,
    /// Custom template replacing the built-in one.
    pub template: Option<PathBuf>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            template: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site_dir`").
        field: String,
        /// Error message (e.g., "${`SITE_DIR`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `tongues.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if no config file exists, parsing fails, or validation
    /// fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => path.to_path_buf(),
            None => Self::discover_config()
                .ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)))?,
        };
        let mut config = Self::load_from_file(&path)?;

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse and validate configuration text.
    ///
    /// Relative paths are resolved against `config_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml_str(content: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;
        config.resolve_paths(config_dir);
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(site_dir) = &settings.site_dir {
            self.site_dir_resolved.clone_from(site_dir);
        }
        if let Some(enabled) = settings.landing_enabled {
            self.landing_resolved.enabled = enabled;
        }
    }

    /// Configured locales with defaults applied, in configured order.
    #[must_use]
    pub fn locales(&self) -> Vec<Locale> {
        self.locales.iter().map(LocaleConfig::to_locale).collect()
    }

    /// Raw locale entries.
    #[must_use]
    pub fn locale_configs(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// Default language: `default_lang` if set, else the first locale's.
    #[must_use]
    pub fn default_lang(&self) -> Option<&str> {
        self.default_lang
            .as_deref()
            .or_else(|| self.locales.first().map(|locale| locale.lang.as_str()))
    }

    /// Locale matching [`default_lang`](Self::default_lang).
    #[must_use]
    pub fn default_locale(&self) -> Option<Locale> {
        let lang = self.default_lang()?;
        self.locales
            .iter()
            .find(|locale| locale.lang == lang)
            .map(LocaleConfig::to_locale)
    }

    /// Warnings collected during validation.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            default_lang: None,
            site_dir: None,
            locales: Vec::new(),
            landing: LandingConfigRaw::default(),
            site_dir_resolved: base.join("site"),
            landing_resolved: LandingConfig::default(),
            warnings: Vec::new(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_toml_str(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that at least one locale is configured, that every locale has
    /// a language code, and that `default_lang` names a configured locale.
    /// A single locale is accepted with a warning.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.warnings.clear();

        match self.locales.len() {
            0 => {
                return Err(ConfigError::Validation(
                    "At least 1 locale must be configured".to_owned(),
                ));
            }
            1 => self.warnings.push(
                "Only 1 locale is configured; per-language navigation is meant for \
                 multi-language sites"
                    .to_owned(),
            ),
            _ => {}
        }

        if let Some(idx) = self.locales.iter().position(|l| l.lang.is_empty()) {
            return Err(ConfigError::Validation(format!(
                "locales[{idx}].lang is required"
            )));
        }

        if let Some(lang) = &self.default_lang
            && !self.locales.iter().any(|locale| &locale.lang == lang)
        {
            return Err(ConfigError::Validation(format!(
                "default_lang '{lang}' does not match any configured locale's lang"
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.site_dir {
            self.site_dir = Some(expand::expand_env(dir, "site_dir")?);
        }
        if let Some(ref template) = self.landing.template {
            self.landing.template = Some(expand::expand_env(template, "landing.template")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.site_dir_resolved = config_dir.join(self.site_dir.as_deref().unwrap_or("site"));
        self.landing_resolved = LandingConfig {
            enabled: self.landing.enabled.unwrap_or(true),
            template: self.landing.template.as_deref().map(|t| config_dir.join(t)),
        };
    }
}
