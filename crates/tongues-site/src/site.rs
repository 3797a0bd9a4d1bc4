//! Per-build facade over the registry, partition and alternate links.
//!
//! An [`I18nSite`] is built once per site build, eagerly partitioning every
//! locale before any page renders. Afterwards it is read-only, so page
//! contexts can be computed from many threads at once.

use serde::Serialize;

use crate::alternate::{AlternateLinkRewriter, AlternateLinkSet};
use crate::error::ConfigurationError;
use crate::locale::{Locale, LocaleRegistry};
use crate::navigation::LocaleNavigation;
use crate::page::{NavNode, Page};
use crate::partition::{NavigationPartitioner, Partition};
use crate::resolver::PathLocaleResolver;

/// Locale-specific values a page template needs.
#[derive(Clone, Debug, Serialize)]
pub struct PageContext<'s> {
    /// Rendered URL of the page.
    pub url: String,
    /// Language of the page, used as the theme language.
    pub lang: Option<&'s str>,
    /// Localized site title, if the locale sets one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<&'s str>,
    /// Navigation to show instead of the whole-site tree.
    #[serde(skip)]
    pub navigation: Option<&'s LocaleNavigation>,
    /// Previous page within the locale.
    pub previous: Option<&'s Page>,
    /// Next page within the locale.
    pub next: Option<&'s Page>,
    /// Links to this page in every locale.
    pub alternates: AlternateLinkSet,
}

/// Multi-language view of one site build.
pub struct I18nSite {
    registry: LocaleRegistry,
    partition: Partition,
    rewriter: AlternateLinkRewriter,
}

impl I18nSite {
    /// Build the registry and partition every locale.
    ///
    /// Custom nav failures do not abort the build; they are available from
    /// [`Partition::failures`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the locales cannot form a registry.
    pub fn build(
        locales: Vec<Locale>,
        site_nav: &[NavNode],
        pages: &[Page],
    ) -> Result<Self, ConfigurationError> {
        let registry = LocaleRegistry::new(locales)?;
        let partition = NavigationPartitioner::new(&registry).build_all(site_nav, pages);
        let rewriter = AlternateLinkRewriter::new(pages);

        Ok(Self {
            registry,
            partition,
            rewriter,
        })
    }

    /// The locale registry of this build.
    #[must_use]
    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Resolver over this build's registry.
    #[must_use]
    pub fn resolver(&self) -> PathLocaleResolver<'_> {
        PathLocaleResolver::new(&self.registry)
    }

    /// The partition result.
    #[must_use]
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Navigation for `lang`.
    #[must_use]
    pub fn navigation(&self, lang: &str) -> Option<&LocaleNavigation> {
        self.partition.get(lang)
    }

    /// Alternate links for `page`.
    #[must_use]
    pub fn alternates_for(&self, page: &Page) -> Option<AlternateLinkSet> {
        self.rewriter.alternates_for(page, &self.registry)
    }

    /// Render context for `page`.
    ///
    /// Pages outside every locale, and pages of a locale whose navigation
    /// failed to build, get no navigation so the host keeps its whole-site
    /// tree. Their alternates are the plain locale links.
    #[must_use]
    pub fn page_context(&self, page: &Page) -> PageContext<'_> {
        let locale = self.resolver().detect_locale(page);
        let navigation = locale.and_then(|locale| self.navigation(&locale.lang));
        let links = navigation.and_then(|nav| nav.links(&page.url));

        if locale.is_none() {
            tracing::debug!(path = %page.source_path, "Page has no locale, keeping site context");
        }

        PageContext {
            url: page.url.clone(),
            lang: locale.map(|locale| locale.lang.as_str()),
            site_name: locale.and_then(|locale| locale.site_name.as_deref()),
            navigation,
            previous: links.and_then(|links| links.previous),
            next: links.and_then(|links| links.next),
            alternates: self
                .alternates_for(page)
                .unwrap_or_else(|| AlternateLinkSet::base_links(&self.registry)),
        }
    }
}
