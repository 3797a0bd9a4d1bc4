//! Pages and navigation tree nodes supplied by the host build.

use serde::{Deserialize, Serialize};

/// Document page as assembled by the host build.
///
/// A page's locale is never stored here; it is derived from `source_path`
/// through [`PathLocaleResolver`](crate::PathLocaleResolver).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    /// Source file path relative to the docs root (e.g., "zh/guide/intro.md").
    pub source_path: String,
    /// Rendered URL (e.g., "/zh/guide/intro/").
    pub url: String,
    /// Page title.
    pub title: String,
}

impl Page {
    /// Create a new page.
    #[must_use]
    pub fn new(
        source_path: impl Into<String>,
        url: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Node of a navigation tree.
///
/// Trees are never mutated in place: filtering and custom builds always
/// produce new nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavNode {
    /// A document page.
    Page(Page),
    /// A titled group of child nodes.
    Section {
        /// Display title.
        title: String,
        /// Ordered children.
        children: Vec<NavNode>,
    },
    /// An external link, independent of any locale.
    Link {
        /// Display title.
        title: String,
        /// Link target.
        href: String,
    },
}

impl NavNode {
    /// Create a section node.
    #[must_use]
    pub fn section(title: impl Into<String>, children: Vec<NavNode>) -> Self {
        Self::Section {
            title: title.into(),
            children,
        }
    }

    /// Create an external link node.
    #[must_use]
    pub fn link(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            title: title.into(),
            href: href.into(),
        }
    }

    /// Display title of the node.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Page(page) => &page.title,
            Self::Section { title, .. } | Self::Link { title, .. } => title,
        }
    }
}

/// Collect the pages of `items` in left-to-right leaf order.
pub(crate) fn collect_pages(items: &[NavNode], pages: &mut Vec<Page>) {
    for item in items {
        match item {
            NavNode::Page(page) => pages.push(page.clone()),
            NavNode::Section { children, .. } => collect_pages(children, pages),
            NavNode::Link { .. } => {}
        }
    }
}
