//! Navigation feed types.
//!
//! These mirror the JSON produced by the documentation generator: a list of
//! [`NavSection`]s, each holding a tree of [`NavItem`]s.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Navigation item with optional children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Link target path, or an absolute URL for external links.
    pub path: String,
    /// Child navigation items.
    ///
    /// `None` and `Some(vec![])` are kept apart so feeds round-trip, but both
    /// render as a leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavItem>>,
}

impl NavItem {
    /// Create a leaf item.
    #[must_use]
    pub fn leaf(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            children: None,
        }
    }

    /// Create an item with children.
    #[must_use]
    pub fn with_children(
        title: impl Into<String>,
        path: impl Into<String>,
        children: Vec<NavItem>,
    ) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            children: Some(children),
        }
    }

    /// Whether the path points outside the site (carries a URI scheme).
    #[must_use]
    pub fn is_external(&self) -> bool {
        is_external_path(&self.path)
    }

    /// Whether the item has at least one child.
    #[must_use]
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }
}

/// Section flavor, used by the host for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Hand-written guides.
    Manual,
    /// Generated API reference.
    Api,
}

impl SectionKind {
    /// Lowercase name as used in the feed.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Api => "api",
        }
    }
}

/// Top-level collapsible group of navigation items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    /// Section heading.
    pub title: String,
    /// Section flavor.
    #[serde(rename = "type")]
    pub kind: SectionKind,
    /// Items in display order.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

impl NavSection {
    /// Create a section.
    #[must_use]
    pub fn new(title: impl Into<String>, kind: SectionKind, items: Vec<NavItem>) -> Self {
        Self {
            title: title.into(),
            kind,
            items,
        }
    }
}

/// Parse a navigation feed (`NavSection[]`) from JSON.
pub fn parse_sections(json: &str) -> Result<Vec<NavSection>, NavError> {
    Ok(serde_json::from_str(json)?)
}

/// Read a navigation feed from a JSON file.
pub fn load_sections(path: &Path) -> Result<Vec<NavSection>, NavError> {
    let content = fs::read_to_string(path).map_err(|source| NavError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_sections(&content)
}

/// Check whether a path starts with a URI scheme (`https:`, `mailto:`, ...).
///
/// Site-relative paths start with `/` and never match.
pub(crate) fn is_external_path(path: &str) -> bool {
    let Some((scheme, _)) = path.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
