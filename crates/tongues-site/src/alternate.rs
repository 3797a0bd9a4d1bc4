//! Per-page "view in another language" links.
//!
//! The rendered URL of a page minus its locale's link is the page *tail*
//! (`/zh/guide/intro/` minus `/zh/` is `guide/intro/`). The alternate in
//! another locale is that locale's link followed by the same tail, or the
//! bare locale link when no page is rendered at that URL.

use std::collections::HashSet;

use serde::Serialize;

use crate::locale::{Locale, LocaleRegistry};
use crate::page::Page;
use crate::resolver::PathLocaleResolver;

/// Link to one locale's variant of a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlternateLink {
    /// Language code.
    pub lang: String,
    /// Display name of the locale.
    pub name: String,
    /// Target URL.
    pub link: String,
}

/// Alternate links for one page, in configured locale order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AlternateLinkSet {
    links: Vec<AlternateLink>,
}

impl AlternateLinkSet {
    /// Links pointing at each locale's base path.
    #[must_use]
    pub fn base_links(registry: &LocaleRegistry) -> Self {
        Self {
            links: registry
                .locales()
                .iter()
                .map(|locale| AlternateLink {
                    lang: locale.lang.clone(),
                    name: locale.name.clone(),
                    link: locale.link.clone(),
                })
                .collect(),
        }
    }

    /// Link for `lang`.
    #[must_use]
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.links
            .iter()
            .find(|alt| alt.lang == lang)
            .map(|alt| alt.link.as_str())
    }

    /// Iterate links in configured locale order.
    pub fn iter(&self) -> std::slice::Iter<'_, AlternateLink> {
        self.links.iter()
    }

    /// Links as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[AlternateLink] {
        &self.links
    }

    /// Number of links.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// True if there are no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl<'s> IntoIterator for &'s AlternateLinkSet {
    type Item = &'s AlternateLink;
    type IntoIter = std::slice::Iter<'s, AlternateLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

/// Computes alternate links for the page being rendered.
///
/// Knows the set of rendered URLs so links to pages missing in a locale fall
/// back to that locale's base link.
#[derive(Clone, Debug, Default)]
pub struct AlternateLinkRewriter {
    known_urls: HashSet<String>,
}

impl AlternateLinkRewriter {
    /// Create a rewriter for a site's page list.
    #[must_use]
    pub fn new(pages: &[Page]) -> Self {
        Self {
            known_urls: pages.iter().map(|page| normalize_url(&page.url)).collect(),
        }
    }

    /// Alternate links for `page`, one per locale of `registry`.
    ///
    /// Returns `None` if the page belongs to no locale.
    #[must_use]
    pub fn alternates_for(
        &self,
        page: &Page,
        registry: &LocaleRegistry,
    ) -> Option<AlternateLinkSet> {
        let current = PathLocaleResolver::new(registry).detect_locale(page)?;
        let url = normalize_url(&page.url);
        let tail = page_tail(current, &url);

        let links = registry
            .locales()
            .iter()
            .map(|locale| AlternateLink {
                lang: locale.lang.clone(),
                name: locale.name.clone(),
                link: self.target(locale, current, tail, &url),
            })
            .collect();

        Some(AlternateLinkSet { links })
    }

    fn target(&self, locale: &Locale, current: &Locale, tail: &str, url: &str) -> String {
        if tail.is_empty() {
            return locale.link.clone();
        }
        if locale.lang == current.lang {
            return url.to_owned();
        }

        let candidate = join_link(&locale.link, tail);
        if self.known_urls.contains(&normalize_url(&candidate)) {
            candidate
        } else {
            tracing::debug!(
                lang = %locale.lang,
                url = %candidate,
                "No page at alternate URL, using locale link"
            );
            locale.link.clone()
        }
    }
}

/// Ensure a URL starts with `/`.
fn normalize_url(url: &str) -> String {
    if url.starts_with('/') {
        url.to_owned()
    } else {
        format!("/{url}")
    }
}

/// Part of `url` after the locale's link.
///
/// URLs outside the link (which should not happen for resolved pages) drop
/// their first segment instead.
fn page_tail<'u>(locale: &Locale, url: &'u str) -> &'u str {
    let base = locale.link.trim_end_matches('/');
    if let Some(rest) = url.strip_prefix(base)
        && (rest.is_empty() || rest.starts_with('/'))
    {
        return rest.trim_start_matches('/');
    }

    let trimmed = url.trim_start_matches('/');
    trimmed.split_once('/').map_or("", |(_, rest)| rest)
}

fn join_link(base: &str, tail: &str) -> String {
    if base.ends_with('/') {
        format!("{base}{tail}")
    } else {
        format!("{base}/{tail}")
    }
}
