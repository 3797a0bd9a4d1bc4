//! Locales and the registry mapping path prefixes to them.
//!
//! Every locale owns a *partition key*: the first path segment of its link
//! (`zh` for `/zh/`). Any source path or URL whose first segment equals the
//! key belongs to that locale.
//!
//! The registry is built once per build and is read-only afterwards. A new
//! build constructs a new registry instead of patching the old one.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Entry of a locale-specific navigation spec.
///
/// Mirrors the usual documentation-site nav syntax:
///
/// ```toml
/// nav = [
///     "zh/index.md",
///     { "指南" = ["zh/guide/intro.md", { "安装" = "zh/guide/install.md" }] },
///     { "GitHub" = "https://github.com/example/project" },
/// ]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Bare page reference; the page's own title is used.
    Reference(String),
    /// Single-key table mapping a title to its target.
    Titled(BTreeMap<String, NavTarget>),
}

/// Target of a titled [`NavEntry`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavTarget {
    /// Page reference or external URL.
    Reference(String),
    /// Nested entries forming a section.
    Children(Vec<NavEntry>),
}

/// A configured language variant of the site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    /// Language code (e.g., "zh", "pt-br").
    pub lang: String,
    /// Display name (e.g., "中文").
    pub name: String,
    /// Root-relative base path ending in a separator (e.g., "/zh/").
    pub link: String,
    /// Locale-specific navigation, replacing the filtered whole-site tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<Vec<NavEntry>>,
    /// Localized site title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
}

impl Locale {
    /// Create a locale with the default `/{lang}/` link and the code as name.
    #[must_use]
    pub fn new(lang: impl Into<String>) -> Self {
        let lang = lang.into();
        Self {
            name: lang.clone(),
            link: format!("/{lang}/"),
            lang,
            nav: None,
            site_name: None,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the base link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    /// Set a custom navigation spec.
    #[must_use]
    pub fn with_nav(mut self, nav: Vec<NavEntry>) -> Self {
        self.nav = Some(nav);
        self
    }

    /// Set the localized site title.
    #[must_use]
    pub fn with_site_name(mut self, site_name: impl Into<String>) -> Self {
        self.site_name = Some(site_name.into());
        self
    }

    /// First path segment of the link, or an empty string for `/`.
    #[must_use]
    pub fn partition_key(&self) -> &str {
        first_segment(&self.link).unwrap_or_default()
    }
}

/// First non-empty segment of a path or URL.
///
/// Accepts `/` and `\` as separators and ignores `.` segments, so
/// `zh/guide.md`, `/zh/guide/` and `./zh\guide.md` all yield `zh`.
#[must_use]
pub(crate) fn first_segment(path: &str) -> Option<&str> {
    path.split(['/', '\\'])
        .find(|segment| !segment.is_empty() && *segment != ".")
}

/// Immutable mapping from partition key to [`Locale`].
///
/// Lookups are read-only, so a registry can be shared across threads once
/// built.
#[derive(Clone, Debug, Default)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
    by_key: HashMap<String, usize>,
}

impl LocaleRegistry {
    /// Build a registry from locales in configured order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the list is empty, if a locale's link
    /// has no first segment, or if two locales share a partition key or a
    /// language code.
    pub fn new(locales: Vec<Locale>) -> Result<Self, ConfigurationError> {
        if locales.is_empty() {
            return Err(ConfigurationError::NoLocales);
        }

        let mut by_key = HashMap::with_capacity(locales.len());
        let mut langs: HashMap<&str, usize> = HashMap::with_capacity(locales.len());

        for (idx, locale) in locales.iter().enumerate() {
            let key = locale.partition_key();
            if key.is_empty() {
                return Err(ConfigurationError::EmptyPartitionKey {
                    lang: locale.lang.clone(),
                    link: locale.link.clone(),
                });
            }
            if let Some(&first) = by_key.get(key) {
                let first: &Locale = &locales[first];
                return Err(ConfigurationError::DuplicatePartitionKey {
                    key: key.to_owned(),
                    first: first.lang.clone(),
                    second: locale.lang.clone(),
                });
            }
            if langs.insert(locale.lang.as_str(), idx).is_some() {
                return Err(ConfigurationError::DuplicateLang(locale.lang.clone()));
            }

            tracing::debug!(key = %key, lang = %locale.lang, "Mapped path prefix to locale");
            by_key.insert(key.to_owned(), idx);
        }

        tracing::info!(locales = locales.len(), "Locale registry initialized");

        Ok(Self { locales, by_key })
    }

    /// Replace the whole mapping with one built from `locales`.
    ///
    /// On error the previous mapping is left untouched.
    ///
    /// # Errors
    ///
    /// Same as [`LocaleRegistry::new`].
    pub fn initialize(&mut self, locales: Vec<Locale>) -> Result<(), ConfigurationError> {
        *self = Self::new(locales)?;
        Ok(())
    }

    /// Locale owning `path`, matched on its first segment.
    ///
    /// # Arguments
    ///
    /// * `path` - Source path or URL (e.g., "zh/guide.md", "/zh/guide/")
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&Locale> {
        first_segment(path).and_then(|key| self.locale_for_key(key))
    }

    /// Locale registered under a partition key.
    #[must_use]
    pub fn locale_for_key(&self, key: &str) -> Option<&Locale> {
        self.by_key.get(key).map(|&idx| &self.locales[idx])
    }

    /// Locale with the given language code.
    #[must_use]
    pub fn get(&self, lang: &str) -> Option<&Locale> {
        self.locales.iter().find(|locale| locale.lang == lang)
    }

    /// All locales in configured order.
    #[must_use]
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Partition keys in configured order.
    pub fn partition_keys(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(Locale::partition_key)
    }

    /// Number of registered locales.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// True if no locale is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
