//! Locale partitioning for multi-language documentation sites.
//!
//! This crate provides:
//! - [`LocaleRegistry`]: maps the first path segment of a page to its locale
//! - [`PathLocaleResolver`]: derives the locale of a page
//! - [`NavigationPartitioner`]: one navigation tree per locale
//! - [`AlternateLinkRewriter`]: "this page in another language" links
//! - [`I18nSite`]: all of the above for one build, plus per-page contexts
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use tongues_site::{I18nSite, Locale, NavNode, Page};
//!
//! let pages = vec![
//!     Page::new("en/guide.md", "/en/guide/", "Guide"),
//!     Page::new("zh/guide.md", "/zh/guide/", "指南"),
//! ];
//! let nav: Vec<NavNode> = pages.iter().cloned().map(NavNode::Page).collect();
//! let site = I18nSite::build(vec![Locale::new("en"), Locale::new("zh")], &nav, &pages)?;
//!
//! let ctx = site.page_context(&pages[1]);
//! assert_eq!(ctx.lang, Some("zh"));
//! assert_eq!(ctx.alternates.get("en"), Some("/en/guide/"));
//! # Ok(())
//! # }
//! ```

mod alternate;
mod error;
mod locale;
mod manifest;
mod navigation;
mod page;
mod partition;
mod resolver;
mod site;

pub use alternate::{AlternateLink, AlternateLinkRewriter, AlternateLinkSet};
pub use error::{ConfigurationError, PartitionError};
pub use locale::{Locale, LocaleRegistry, NavEntry, NavTarget};
pub use manifest::{ManifestError, SiteManifest};
pub use navigation::{LocaleNavigation, NodeId, NodeInfo, NodeKind, PageLinks};
pub use page::{NavNode, Page};
pub use partition::{NavigationPartitioner, Partition};
pub use resolver::PathLocaleResolver;
pub use site::{I18nSite, PageContext};
