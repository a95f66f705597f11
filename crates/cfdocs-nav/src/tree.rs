//! Arena-backed navigation tree.
//!
//! # Architecture
//!
//! Items are stored in a flat `Vec<NavNode>` with parent/children links held
//! as [`NodeId`] indices, and sections in a `Vec<SectionNode>` indexed by
//! [`SectionId`]. This provides:
//! - O(1) node lookups by id
//! - O(1) path lookups via `path_index` `HashMap`
//! - O(d) ancestor walks where d is the item depth
//!
//! The tree is immutable once built. Open/closed state lives in
//! [`NavController`](crate::NavController), keyed by the same ids.

use std::collections::HashMap;

use serde::Serialize;

use crate::item::{NavItem, NavSection, SectionKind, is_external_path};

/// Index of an item in a [`NavTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in build order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of a section in a [`NavTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SectionId(usize);

impl SectionId {
    /// Position of the section in feed order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Navigation item stored in the arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavNode {
    title: String,
    path: String,
    external: bool,
    section: SectionId,
    parent: Option<NodeId>,
    depth: usize,
    children: Option<Vec<NodeId>>,
}

impl NavNode {
    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Link target.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the link leaves the site.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.external
    }

    /// Section the item belongs to.
    #[must_use]
    pub fn section(&self) -> SectionId {
        self.section
    }

    /// Parent item, `None` for top-level items.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Nesting level, 0 for top-level items.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Child ids, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Whether the item shows a disclosure control.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }
}

/// Section stored in the arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionNode {
    title: String,
    kind: SectionKind,
    items: Vec<NodeId>,
}

impl SectionNode {
    /// Section heading.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Section flavor.
    #[must_use]
    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    /// Top-level items in display order.
    #[must_use]
    pub fn items(&self) -> &[NodeId] {
        &self.items
    }
}

/// Breadcrumb entry leading to the active item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Display title.
    pub title: String,
    /// Link target, `None` for the section heading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Immutable navigation tree.
#[derive(Clone, Debug, Default)]
pub struct NavTree {
    sections: Vec<SectionNode>,
    nodes: Vec<NavNode>,
    path_index: HashMap<String, NodeId>,
}

impl NavTree {
    /// Build a tree from a navigation feed.
    #[must_use]
    pub fn from_sections(sections: &[NavSection]) -> Self {
        fn add(builder: &mut NavTreeBuilder, section: SectionId, parent: Option<NodeId>, item: &NavItem) {
            let id = match &item.children {
                Some(_) => builder.add_branch(section, parent, item.title.clone(), item.path.clone()),
                None => builder.add_item(section, parent, item.title.clone(), item.path.clone()),
            };
            for child in item.children.iter().flatten() {
                add(builder, section, Some(id), child);
            }
        }

        let mut builder = NavTreeBuilder::new();
        for section in sections {
            let sid = builder.add_section(section.title.clone(), section.kind);
            for item in &section.items {
                add(&mut builder, sid, None, item);
            }
        }
        builder.build()
    }

    /// Section ids in feed order.
    pub fn section_ids(&self) -> impl ExactSizeIterator<Item = SectionId> + '_ {
        (0..self.sections.len()).map(SectionId)
    }

    /// Number of sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of items across all sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a section.
    ///
    /// # Panics
    ///
    /// Panics if the id belongs to another tree.
    #[must_use]
    pub fn section(&self, id: SectionId) -> &SectionNode {
        &self.sections[id.0]
    }

    /// Get an item.
    ///
    /// # Panics
    ///
    /// Panics if the id belongs to another tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &NavNode {
        &self.nodes[id.0]
    }

    /// Find the item with a given (non-external) path.
    ///
    /// When the feed repeats a path, the first item wins.
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<NodeId> {
        self.path_index.get(path).copied()
    }

    /// Item matches the route exactly. External items never match.
    #[must_use]
    pub fn is_active(&self, id: NodeId, route: &str) -> bool {
        let node = self.node(id);
        !node.external && node.path == route
    }

    /// Route starts with the path of one of the item's direct children.
    ///
    /// Only one level is inspected; grandchildren do not count.
    #[must_use]
    pub fn is_parent_of_active(&self, id: NodeId, route: &str) -> bool {
        self.node(id)
            .children()
            .iter()
            .any(|&child| route.starts_with(self.node(child).path.as_str()))
    }

    /// Whether the section holds the page being viewed.
    ///
    /// A top-level item matches when the route equals its path or lies below
    /// it (`path + "/"`), or when the route starts with a direct child's path.
    #[must_use]
    pub fn section_has_active_item(&self, id: SectionId, route: &str) -> bool {
        self.section(id).items.iter().any(|&item| {
            let path = self.node(item).path.as_str();
            route == path
                || route
                    .strip_prefix(path)
                    .is_some_and(|rest| rest.starts_with('/'))
                || self.is_parent_of_active(item, route)
        })
    }

    /// Ids from the top-level ancestor down to `id` itself.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::with_capacity(self.node(id).depth + 1);
        let mut current = Some(id);
        while let Some(i) = current {
            chain.push(i);
            current = self.nodes[i.0].parent;
        }
        chain.reverse();
        chain
    }

    /// Build breadcrumbs for a route.
    ///
    /// Starts with the section heading, followed by ancestor items. The
    /// active item itself is not included. Unknown routes yield no crumbs.
    #[must_use]
    pub fn breadcrumbs(&self, route: &str) -> Vec<BreadcrumbItem> {
        let Some(id) = self.find_by_path(route) else {
            return Vec::new();
        };

        let chain = self.ancestors(id);
        let mut crumbs = vec![BreadcrumbItem {
            title: self.section(self.node(id).section).title.clone(),
            path: None,
        }];
        crumbs.extend(
            chain
                .iter()
                .take(chain.len().saturating_sub(1))
                .map(|&i| BreadcrumbItem {
                    title: self.nodes[i.0].title.clone(),
                    path: Some(self.nodes[i.0].path.clone()),
                }),
        );
        crumbs
    }

    /// Rebuild the feed representation.
    #[must_use]
    pub fn to_sections(&self) -> Vec<NavSection> {
        self.sections
            .iter()
            .map(|section| NavSection {
                title: section.title.clone(),
                kind: section.kind,
                items: section.items.iter().map(|&id| self.to_item(id)).collect(),
            })
            .collect()
    }

    fn to_item(&self, id: NodeId) -> NavItem {
        let node = self.node(id);
        NavItem {
            title: node.title.clone(),
            path: node.path.clone(),
            children: node
                .children
                .as_ref()
                .map(|children| children.iter().map(|&c| self.to_item(c)).collect()),
        }
    }
}

/// Builder for constructing [`NavTree`] instances.
#[derive(Debug, Default)]
pub struct NavTreeBuilder {
    sections: Vec<SectionNode>,
    nodes: Vec<NavNode>,
}

impl NavTreeBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section.
    pub fn add_section(&mut self, title: String, kind: SectionKind) -> SectionId {
        let id = SectionId(self.sections.len());
        self.sections.push(SectionNode {
            title,
            kind,
            items: Vec::new(),
        });
        id
    }

    /// Append a leaf item under `parent`, or at the section's top level.
    ///
    /// # Panics
    ///
    /// Panics if `section` or `parent` were not issued by this builder.
    pub fn add_item(
        &mut self,
        section: SectionId,
        parent: Option<NodeId>,
        title: String,
        path: String,
    ) -> NodeId {
        self.push(section, parent, title, path, None)
    }

    /// Append an item whose `children` list is present (possibly empty).
    pub fn add_branch(
        &mut self,
        section: SectionId,
        parent: Option<NodeId>,
        title: String,
        path: String,
    ) -> NodeId {
        self.push(section, parent, title, path, Some(Vec::new()))
    }

    fn push(
        &mut self,
        section: SectionId,
        parent: Option<NodeId>,
        title: String,
        path: String,
        children: Option<Vec<NodeId>>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = parent.map_or(0, |p| self.nodes[p.0].depth + 1);

        match parent {
            Some(p) => self.nodes[p.0].children.get_or_insert_with(Vec::new).push(id),
            None => self.sections[section.0].items.push(id),
        }

        self.nodes.push(NavNode {
            external: is_external_path(&path),
            title,
            path,
            section,
            parent,
            depth,
            children,
        });
        id
    }

    /// Build the [`NavTree`] instance.
    #[must_use]
    pub fn build(self) -> NavTree {
        let mut path_index = HashMap::with_capacity(self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            if node.external {
                continue;
            }
            if path_index.contains_key(&node.path) {
                tracing::warn!(path = %node.path, title = %node.title, "Duplicate navigation path");
                continue;
            }
            path_index.insert(node.path.clone(), NodeId(i));
        }

        NavTree {
            sections: self.sections,
            nodes: self.nodes,
            path_index,
        }
    }
}
