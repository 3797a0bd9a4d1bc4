//! Splitting the whole-site navigation into per-locale navigations.
//!
//! For each configured locale the partitioner either builds the tree from
//! the locale's custom nav spec, or filters the whole-site tree down to the
//! pages the locale owns. Sibling order is always taken from the source and
//! never resorted.
//!
//! # Failure policy
//!
//! A bad custom nav reference fails only its own locale. The remaining
//! locales are still partitioned; the failure is recorded in
//! [`Partition::failures`] and the locale is absent from the result.

use std::collections::{HashMap, HashSet};

use crate::error::PartitionError;
use crate::locale::{Locale, LocaleRegistry, NavEntry, NavTarget};
use crate::navigation::LocaleNavigation;
use crate::page::{NavNode, Page};
use crate::resolver::PathLocaleResolver;

/// Result of partitioning a site for all configured locales.
#[derive(Clone, Debug, Default)]
pub struct Partition {
    navigations: Vec<LocaleNavigation>,
    failures: Vec<PartitionError>,
    unresolved: Vec<Page>,
}

impl Partition {
    /// Navigation for `lang`, `None` if unknown or failed.
    #[must_use]
    pub fn get(&self, lang: &str) -> Option<&LocaleNavigation> {
        self.navigations.iter().find(|nav| nav.lang() == lang)
    }

    /// Successfully built navigations in configured locale order.
    #[must_use]
    pub fn navigations(&self) -> &[LocaleNavigation] {
        &self.navigations
    }

    /// Locales whose custom nav could not be built.
    #[must_use]
    pub fn failures(&self) -> &[PartitionError] {
        &self.failures
    }

    /// Site pages whose source path matches no locale.
    #[must_use]
    pub fn unresolved(&self) -> &[Page] {
        &self.unresolved
    }

    /// True if every configured locale produced a navigation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Builds per-locale navigations from the whole-site tree.
#[derive(Clone, Copy, Debug)]
pub struct NavigationPartitioner<'a> {
    resolver: PathLocaleResolver<'a>,
}

impl<'a> NavigationPartitioner<'a> {
    /// Create a partitioner over a built registry.
    #[must_use]
    pub fn new(registry: &'a LocaleRegistry) -> Self {
        Self {
            resolver: PathLocaleResolver::new(registry),
        }
    }

    /// Partition the site for every configured locale.
    ///
    /// # Arguments
    ///
    /// * `site_nav` - Root items of the whole-site navigation tree
    /// * `pages` - Whole-site page list, used to resolve custom nav references
    #[must_use]
    pub fn build_all(&self, site_nav: &[NavNode], pages: &[Page]) -> Partition {
        let unresolved: Vec<Page> = pages
            .iter()
            .filter(|page| self.resolver.detect_locale(page).is_none())
            .cloned()
            .collect();
        for page in &unresolved {
            tracing::warn!(
                path = %page.source_path,
                "Page matches no locale; excluded from all locale navigations"
            );
        }

        let lookup = PageLookup::new(pages);
        let mut partition = Partition {
            unresolved,
            ..Partition::default()
        };

        for locale in self.resolver.registry().locales() {
            match self.build_with_lookup(locale, site_nav, &lookup) {
                Ok(nav) => partition.navigations.push(nav),
                Err(e) => {
                    tracing::error!(lang = %locale.lang, error = %e, "Failed to build locale navigation");
                    partition.failures.push(e);
                }
            }
        }

        partition
    }

    /// Build the navigation of a single locale.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError`] if the locale's custom nav references a
    /// missing page or a page of another locale.
    pub fn build(
        &self,
        locale: &Locale,
        site_nav: &[NavNode],
        pages: &[Page],
    ) -> Result<LocaleNavigation, PartitionError> {
        self.build_with_lookup(locale, site_nav, &PageLookup::new(pages))
    }

    fn build_with_lookup(
        &self,
        locale: &Locale,
        site_nav: &[NavNode],
        lookup: &PageLookup<'_>,
    ) -> Result<LocaleNavigation, PartitionError> {
        // An empty custom nav counts as no custom nav
        let items = match &locale.nav {
            Some(entries) if !entries.is_empty() => {
                self.build_custom(locale, entries, lookup, &mut HashSet::new())?
            }
            _ => self.filter_items(site_nav, &locale.lang),
        };
        let nav = LocaleNavigation::new(locale.lang.clone(), items);

        if nav.pages().is_empty() {
            tracing::warn!(lang = %locale.lang, link = %locale.link, "Locale has no pages");
        } else {
            tracing::debug!(
                lang = %locale.lang,
                pages = nav.pages().len(),
                custom = locale.nav.as_ref().is_some_and(|nav| !nav.is_empty()),
                "Built locale navigation"
            );
        }

        Ok(nav)
    }

    /// Copy of `items` restricted to pages of `lang`.
    ///
    /// Sections left without children are dropped; links are always kept.
    fn filter_items(&self, items: &[NavNode], lang: &str) -> Vec<NavNode> {
        items
            .iter()
            .filter_map(|item| match item {
                NavNode::Page(page) => self
                    .resolver
                    .belongs_to(page, lang)
                    .then(|| item.clone()),
                NavNode::Section { title, children } => {
                    let children = self.filter_items(children, lang);
                    (!children.is_empty()).then(|| NavNode::section(title.clone(), children))
                }
                NavNode::Link { .. } => Some(item.clone()),
            })
            .collect()
    }

    /// Tree from a custom nav spec.
    ///
    /// `seen` holds the URLs already placed, so a page can appear only once.
    fn build_custom(
        &self,
        locale: &Locale,
        entries: &[NavEntry],
        lookup: &PageLookup<'_>,
        seen: &mut HashSet<String>,
    ) -> Result<Vec<NavNode>, PartitionError> {
        entries
            .iter()
            .map(|entry| match entry {
                NavEntry::Reference(reference) => {
                    self.resolve_reference(locale, None, reference, lookup, seen)
                }
                NavEntry::Titled(map) => {
                    let mut iter = map.iter();
                    let (Some((title, target)), None) = (iter.next(), iter.next()) else {
                        return Err(PartitionError::InvalidNavEntry {
                            lang: locale.lang.clone(),
                            keys: map.len(),
                        });
                    };
                    match target {
                        NavTarget::Reference(reference) => {
                            self.resolve_reference(locale, Some(title), reference, lookup, seen)
                        }
                        NavTarget::Children(children) => Ok(NavNode::section(
                            title.clone(),
                            self.build_custom(locale, children, lookup, seen)?,
                        )),
                    }
                }
            })
            .collect()
    }

    fn resolve_reference(
        &self,
        locale: &Locale,
        title: Option<&String>,
        reference: &str,
        lookup: &PageLookup<'_>,
        seen: &mut HashSet<String>,
    ) -> Result<NavNode, PartitionError> {
        if is_external(reference) {
            let title = title.map_or(reference, String::as_str);
            return Ok(NavNode::link(title, reference));
        }

        let unknown = |owner: Option<&str>| PartitionError::UnknownPageReference {
            lang: locale.lang.clone(),
            reference: reference.to_owned(),
            owner: owner.map(str::to_owned),
        };

        let page = lookup.get(reference).ok_or_else(|| unknown(None))?;
        if !self.resolver.belongs_to(page, &locale.lang) {
            return Err(unknown(self.resolver.detect_lang(page)));
        }
        if !seen.insert(page.url.clone()) {
            return Err(PartitionError::DuplicatePageReference {
                lang: locale.lang.clone(),
                reference: reference.to_owned(),
            });
        }

        let mut page = page.clone();
        if let Some(title) = title {
            page.title.clone_from(title);
        }
        Ok(NavNode::Page(page))
    }
}

/// Source path lookup over the whole-site page list.
struct PageLookup<'p> {
    by_source: HashMap<String, &'p Page>,
}

impl<'p> PageLookup<'p> {
    fn new(pages: &'p [Page]) -> Self {
        let mut by_source = HashMap::with_capacity(pages.len());
        for page in pages {
            by_source
                .entry(normalize_source(&page.source_path))
                .or_insert(page);
        }
        Self { by_source }
    }

    fn get(&self, reference: &str) -> Option<&'p Page> {
        self.by_source.get(&normalize_source(reference)).copied()
    }
}

/// Normalize separators and strip leading `/` or `./`.
fn normalize_source(path: &str) -> String {
    let path = path.replace('\\', "/");
    let mut rest = path.as_str();
    loop {
        if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('/') {
            rest = stripped;
        } else {
            return rest.to_owned();
        }
    }
}

fn is_external(reference: &str) -> bool {
    reference.contains("://") || reference.starts_with("mailto:")
}
