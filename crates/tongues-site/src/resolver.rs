//! Locale detection for pages and paths.

use crate::locale::{Locale, LocaleRegistry};
use crate::page::Page;

/// Derives the owning locale of a page from its source path.
///
/// Holds no state besides a borrowed registry, so it is `Copy` and can be
/// handed to every component and thread that needs it.
#[derive(Clone, Copy, Debug)]
pub struct PathLocaleResolver<'a> {
    registry: &'a LocaleRegistry,
}

impl<'a> PathLocaleResolver<'a> {
    /// Create a resolver over a built registry.
    #[must_use]
    pub fn new(registry: &'a LocaleRegistry) -> Self {
        Self { registry }
    }

    /// Locale owning `page`, or `None` if its source path matches no locale.
    #[must_use]
    pub fn detect_locale(&self, page: &Page) -> Option<&'a Locale> {
        self.detect_locale_from_path(&page.source_path)
    }

    /// Language code of the locale owning `page`.
    #[must_use]
    pub fn detect_lang(&self, page: &Page) -> Option<&'a str> {
        self.detect_locale(page).map(|locale| locale.lang.as_str())
    }

    /// Locale owning a source path.
    #[must_use]
    pub fn detect_locale_from_path(&self, source_path: &str) -> Option<&'a Locale> {
        self.registry.resolve(source_path)
    }

    /// Language code of the locale owning a source path.
    #[must_use]
    pub fn detect_lang_from_path(&self, source_path: &str) -> Option<&'a str> {
        self.detect_locale_from_path(source_path)
            .map(|locale| locale.lang.as_str())
    }

    /// True if some locale owns `source_path`.
    #[must_use]
    pub fn has_locale_for_path(&self, source_path: &str) -> bool {
        self.detect_locale_from_path(source_path).is_some()
    }

    /// True if `page` belongs to the locale with language `lang`.
    #[must_use]
    pub(crate) fn belongs_to(&self, page: &Page, lang: &str) -> bool {
        self.detect_lang(page) == Some(lang)
    }

    /// The registry this resolver reads.
    #[must_use]
    pub fn registry(&self) -> &'a LocaleRegistry {
        self.registry
    }
}
