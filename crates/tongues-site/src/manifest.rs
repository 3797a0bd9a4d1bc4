//! Site manifest exported by the host build.
//!
//! The host writes the materialized page list and whole-site navigation
//! tree; this module only parses it.

use serde::{Deserialize, Serialize};

use crate::page::{NavNode, Page};

/// Error returned when a manifest cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Whole-site pages and navigation tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteManifest {
    /// Every page of the site, in site order.
    pub pages: Vec<Page>,
    /// Whole-site navigation. When omitted, the page list is used as a flat tree.
    #[serde(default)]
    pub nav: Vec<NavNode>,
}

impl SiteManifest {
    /// Parse a JSON manifest.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Json` on malformed input.
    pub fn from_json_str(s: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a YAML manifest.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError::Yaml` on malformed input.
    pub fn from_yaml_str(s: &str) -> Result<Self, ManifestError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Navigation tree, falling back to one page node per page.
    #[must_use]
    pub fn nav_or_pages(&self) -> Vec<NavNode> {
        if self.nav.is_empty() {
            self.pages.iter().cloned().map(NavNode::Page).collect()
        } else {
            self.nav.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "pages": [{"source_path": "en/index.md", "url": "/en/", "title": "Home"}],
            "nav": [{"type": "section", "title": "Docs", "children": [
                {"type": "page", "source_path": "en/index.md", "url": "/en/", "title": "Home"}
            ]}]
        }"#;

        let manifest = SiteManifest::from_json_str(json).unwrap();

        assert_eq!(manifest.pages.len(), 1);
        assert_eq!(manifest.nav[0].title(), "Docs");
    }

    #[test]
    fn test_from_yaml_str_without_nav_uses_pages() {
        let yaml = "
pages:
  - source_path: en/index.md
    url: /en/
    title: Home
  - source_path: zh/index.md
    url: /zh/
    title: 首页
";

        let manifest = SiteManifest::from_yaml_str(yaml).unwrap();

        assert!(manifest.nav.is_empty());
        assert_eq!(
            manifest.nav_or_pages(),
            vec![
                NavNode::Page(Page::new("en/index.md", "/en/", "Home")),
                NavNode::Page(Page::new("zh/index.md", "/zh/", "首页")),
            ]
        );
    }

    #[test]
    fn test_from_json_str_invalid() {
        let result = SiteManifest::from_json_str("{\"pages\": 3}");

        assert!(matches!(result, Err(ManifestError::Json(_))));
    }
}
