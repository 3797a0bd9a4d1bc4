//! Per-locale navigation with page ordering and parent lookups.
//!
//! # Architecture
//!
//! The tree itself is kept as owned [`NavNode`] values. Next to it, every
//! node is indexed in a flat `Vec` in pre-order, with parent relationships
//! tracked by [`NodeId`]. This provides:
//! - O(1) URL lookups of a page's position via `url_index`
//! - O(1) previous/next lookups by adjacency in the ordered page list
//! - O(d) ancestor chains where d is the node depth
//!
//! Parent ids are lookups only; ownership stays with the tree.

use std::collections::HashMap;

use serde::Serialize;

use crate::page::{NavNode, Page, collect_pages};

/// Position of a node in the pre-order index of a [`LocaleNavigation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Index into [`LocaleNavigation::nodes`].
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Kind of an indexed node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Page at the given position of [`LocaleNavigation::pages`].
    Page(usize),
    /// Section with children.
    Section,
    /// External link.
    Link,
}

/// Index entry for one node of the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeInfo {
    /// Display title.
    pub title: String,
    /// Node kind.
    pub kind: NodeKind,
    /// Enclosing section, `None` for root items.
    pub parent: Option<NodeId>,
    /// Child nodes in tree order.
    pub children: Vec<NodeId>,
}

/// Previous, next and parent of a page within one locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLinks<'a> {
    /// Page before this one in reading order.
    pub previous: Option<&'a Page>,
    /// Page after this one in reading order.
    pub next: Option<&'a Page>,
    /// Nearest enclosing section.
    pub parent: Option<&'a NodeInfo>,
}

/// Navigation of a single locale.
///
/// `pages` is exactly the left-to-right page traversal of `items`. Built
/// once per build and never mutated afterwards.
#[derive(Clone, Debug, Serialize)]
pub struct LocaleNavigation {
    lang: String,
    items: Vec<NavNode>,
    pages: Vec<Page>,
    #[serde(skip)]
    nodes: Vec<NodeInfo>,
    #[serde(skip)]
    page_nodes: Vec<NodeId>,
    #[serde(skip)]
    url_index: HashMap<String, usize>,
}

impl LocaleNavigation {
    /// Build navigation for `lang` from a finished tree.
    #[must_use]
    pub fn new(lang: impl Into<String>, items: Vec<NavNode>) -> Self {
        let mut pages = Vec::new();
        collect_pages(&items, &mut pages);

        let mut index = NodeIndexBuilder::default();
        index.add_all(&items, None);
        debug_assert_eq!(index.page_nodes.len(), pages.len());

        // First occurrence wins when the same URL appears twice
        let mut url_index = HashMap::with_capacity(pages.len());
        for (i, page) in pages.iter().enumerate() {
            url_index.entry(page.url.clone()).or_insert(i);
        }

        Self {
            lang: lang.into(),
            items,
            pages,
            nodes: index.nodes,
            page_nodes: index.page_nodes,
            url_index,
        }
    }

    /// Language code this navigation belongs to.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Root items of the tree.
    #[must_use]
    pub fn items(&self) -> &[NavNode] {
        &self.items
    }

    /// Pages in reading order.
    #[must_use]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// All nodes in pre-order.
    #[must_use]
    pub fn nodes(&self) -> &[NodeInfo] {
        &self.nodes
    }

    /// Node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &NodeInfo {
        &self.nodes[id.0]
    }

    /// True if the tree has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the page with `url` in [`pages`](Self::pages).
    #[must_use]
    pub fn position(&self, url: &str) -> Option<usize> {
        self.url_index.get(url).copied()
    }

    /// Page preceding the page with `url`.
    #[must_use]
    pub fn previous_page(&self, url: &str) -> Option<&Page> {
        let idx = self.position(url)?;
        idx.checked_sub(1).map(|prev| &self.pages[prev])
    }

    /// Page following the page with `url`.
    #[must_use]
    pub fn next_page(&self, url: &str) -> Option<&Page> {
        let idx = self.position(url)?;
        self.pages.get(idx + 1)
    }

    /// Nearest section enclosing the page with `url`.
    #[must_use]
    pub fn parent(&self, url: &str) -> Option<&NodeInfo> {
        let idx = self.position(url)?;
        self.nodes[self.page_nodes[idx].0]
            .parent
            .map(|id| self.node(id))
    }

    /// Sections enclosing the page with `url`, root first.
    ///
    /// Empty for root-level pages and unknown URLs.
    #[must_use]
    pub fn ancestors(&self, url: &str) -> Vec<&NodeInfo> {
        let Some(idx) = self.position(url) else {
            return Vec::new();
        };

        let mut ancestors = Vec::new();
        let mut current = self.nodes[self.page_nodes[idx].0].parent;
        while let Some(id) = current {
            let node = self.node(id);
            ancestors.push(node);
            current = node.parent;
        }
        ancestors.reverse();
        ancestors
    }

    /// Previous, next and parent of the page with `url`.
    #[must_use]
    pub fn links(&self, url: &str) -> Option<PageLinks<'_>> {
        self.position(url)?;
        Some(PageLinks {
            previous: self.previous_page(url),
            next: self.next_page(url),
            parent: self.parent(url),
        })
    }
}

/// Pre-order flattening of a tree into [`NodeInfo`] entries.
#[derive(Default)]
struct NodeIndexBuilder {
    nodes: Vec<NodeInfo>,
    page_nodes: Vec<NodeId>,
}

impl NodeIndexBuilder {
    fn add_all(&mut self, items: &[NavNode], parent: Option<NodeId>) {
        for item in items {
            let id = self.add(item, parent);
            if let Some(parent) = parent {
                self.nodes[parent.0].children.push(id);
            }
        }
    }

    fn add(&mut self, item: &NavNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let kind = match item {
            NavNode::Page(_) => {
                self.page_nodes.push(id);
                NodeKind::Page(self.page_nodes.len() - 1)
            }
            NavNode::Section { .. } => NodeKind::Section,
            NavNode::Link { .. } => NodeKind::Link,
        };
        self.nodes.push(NodeInfo {
            title: item.title().to_owned(),
            kind,
            parent,
            children: Vec::new(),
        });

        if let NavNode::Section { children, .. } = item {
            self.add_all(children, Some(id));
        }

        id
    }
}
