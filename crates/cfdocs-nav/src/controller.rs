//! Open/closed state for the sidebar.
//!
//! [`NavController`] owns the expand/collapse booleans for a [`NavTree`] and
//! keeps them in step with the current route:
//!
//! - Sections are always present. A section starts open when it is among the
//!   first `default_open_sections` or holds the current route, and is forced
//!   open whenever a route change makes it hold the route. It is never closed
//!   automatically.
//! - An item with children gets its state when it first becomes visible
//!   (its section and every ancestor are open). The initial value is
//!   `is_active || is_parent_of_active` for the route at that moment. When
//!   the item is hidden again its state is dropped, so the next reveal
//!   recomputes it.
//! - Toggling flips exactly one boolean.
//!
//! All recomputation is synchronous; there is no debouncing.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::item::SectionKind;
use crate::tree::{NavTree, NodeId, SectionId};

/// Layout and default-open settings for the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavOptions {
    /// Number of leading sections open by default.
    pub default_open_sections: usize,
    /// Indentation added per nesting level, in pixels.
    pub indent_step: u32,
    /// Indentation of top-level items, in pixels.
    pub indent_base: u32,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            default_open_sections: 3,
            indent_step: 12,
            indent_base: 8,
        }
    }
}

/// One rendered line of the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "row", rename_all = "lowercase")]
pub enum NavRow {
    /// Section header.
    Section(SectionRow),
    /// Navigation link.
    Item(ItemRow),
}

/// Section header line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionRow {
    /// Section id.
    pub id: SectionId,
    /// Heading text.
    pub title: String,
    /// Section flavor.
    pub kind: SectionKind,
    /// Whether the body is shown.
    pub open: bool,
    /// Whether the section holds the current route.
    pub has_active_item: bool,
}

/// Navigation link line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    /// Item id.
    pub id: NodeId,
    /// Link text.
    pub title: String,
    /// Link target.
    pub path: String,
    /// Nesting level.
    pub depth: usize,
    /// Left padding in pixels.
    pub indent_px: u32,
    /// Item is the current page.
    pub active: bool,
    /// Link leaves the site.
    pub external: bool,
    /// `Some(open)` for items with a disclosure control, `None` for leaves.
    pub disclosure: Option<bool>,
}

impl ItemRow {
    /// Accessible label for the disclosure control.
    #[must_use]
    pub fn aria_label(&self) -> Option<&'static str> {
        self.disclosure
            .map(|open| if open { "Collapse" } else { "Expand" })
    }
}

/// Stateful sidebar controller.
#[derive(Clone, Debug)]
pub struct NavController {
    tree: NavTree,
    options: NavOptions,
    route: String,
    section_open: Vec<bool>,
    /// Last observed `has_active_item` per section; re-open fires on the
    /// false -> true edge only.
    section_active: Vec<bool>,
    item_open: HashMap<NodeId, bool>,
}

impl NavController {
    /// Create a controller for the initial route.
    #[must_use]
    pub fn new(tree: NavTree, route: impl Into<String>, options: NavOptions) -> Self {
        let route = route.into();
        let section_active: Vec<bool> = tree
            .section_ids()
            .map(|id| tree.section_has_active_item(id, &route))
            .collect();
        let section_open = section_active
            .iter()
            .enumerate()
            .map(|(index, &active)| index < options.default_open_sections || active)
            .collect();

        let mut controller = Self {
            tree,
            options,
            route,
            section_open,
            section_active,
            item_open: HashMap::new(),
        };
        controller.reconcile();
        controller
    }

    /// Navigation tree.
    #[must_use]
    pub fn tree(&self) -> &NavTree {
        &self.tree
    }

    /// Layout settings.
    #[must_use]
    pub fn options(&self) -> &NavOptions {
        &self.options
    }

    /// Current route.
    #[must_use]
    pub fn route(&self) -> &str {
        &self.route
    }

    /// Whether a section body is shown.
    #[must_use]
    pub fn is_section_open(&self, id: SectionId) -> bool {
        self.section_open[id.index()]
    }

    /// Open state of an item, `None` if it is a leaf or currently hidden.
    #[must_use]
    pub fn is_item_open(&self, id: NodeId) -> Option<bool> {
        self.item_open.get(&id).copied()
    }

    /// Apply a route change.
    ///
    /// Sections that now hold the route, and did not before, are forced
    /// open. Returns the sections that were closed and got opened.
    pub fn set_route(&mut self, route: impl Into<String>) -> Vec<SectionId> {
        self.route = route.into();
        tracing::debug!(route = %self.route, "Route changed");

        let mut opened = Vec::new();
        for id in self.tree.section_ids() {
            let index = id.index();
            let active = self.tree.section_has_active_item(id, &self.route);
            if active && !self.section_active[index] && !self.section_open[index] {
                self.section_open[index] = true;
                opened.push(id);
                tracing::debug!(section = %self.tree.section(id).title(), "Section opened by route");
            }
            self.section_active[index] = active;
        }

        self.reconcile();
        opened
    }

    /// Flip a section. Returns the new state.
    pub fn toggle_section(&mut self, id: SectionId) -> bool {
        let open = &mut self.section_open[id.index()];
        *open = !*open;
        let open = *open;
        tracing::debug!(section = %self.tree.section(id).title(), open, "Section toggled");
        self.reconcile();
        open
    }

    /// Flip an item's disclosure. Returns the new state, or `None` when the
    /// item is a leaf or hidden.
    pub fn toggle_item(&mut self, id: NodeId) -> Option<bool> {
        let open = self.item_open.get_mut(&id)?;
        *open = !*open;
        let open = *open;
        tracing::debug!(path = %self.tree.node(id).path(), open, "Item toggled");
        self.reconcile();
        Some(open)
    }

    /// Toggle the item with a given path. Returns `None` when no visible
    /// item with children has that path.
    pub fn toggle_path(&mut self, path: &str) -> Option<bool> {
        let id = self.tree.find_by_path(path)?;
        self.toggle_item(id)
    }

    /// Flatten the visible sidebar in display order.
    #[must_use]
    pub fn rows(&self) -> Vec<NavRow> {
        let mut rows = Vec::with_capacity(self.tree.section_count() + self.item_open.len());
        for id in self.tree.section_ids() {
            let section = self.tree.section(id);
            let open = self.is_section_open(id);
            rows.push(NavRow::Section(SectionRow {
                id,
                title: section.title().to_owned(),
                kind: section.kind(),
                open,
                has_active_item: self.tree.section_has_active_item(id, &self.route),
            }));
            if open {
                for &item in section.items() {
                    self.push_item_rows(item, &mut rows);
                }
            }
        }
        rows
    }

    fn push_item_rows(&self, id: NodeId, rows: &mut Vec<NavRow>) {
        let node = self.tree.node(id);
        let disclosure = if node.has_children() {
            self.item_open.get(&id).copied()
        } else {
            None
        };
        let depth = u32::try_from(node.depth()).unwrap_or(u32::MAX);

        rows.push(NavRow::Item(ItemRow {
            id,
            title: node.title().to_owned(),
            path: node.path().to_owned(),
            depth: node.depth(),
            indent_px: depth
                .saturating_mul(self.options.indent_step)
                .saturating_add(self.options.indent_base),
            active: self.tree.is_active(id, &self.route),
            external: node.is_external(),
            disclosure,
        }));

        if disclosure == Some(true) {
            for &child in node.children() {
                self.push_item_rows(child, rows);
            }
        }
    }

    /// Mount newly visible items and drop state of hidden ones.
    fn reconcile(&mut self) {
        let tree = &self.tree;
        let route = self.route.as_str();
        let section_open = &self.section_open;
        let mut stack: Vec<NodeId> = tree
            .section_ids()
            .filter(|id| section_open[id.index()])
            .flat_map(|id| tree.section(id).items().iter().copied())
            .collect();

        let item_open = &mut self.item_open;
        let mut visible = HashSet::new();

        while let Some(id) = stack.pop() {
            let node = tree.node(id);
            if !node.has_children() {
                continue;
            }
            visible.insert(id);
            let open = *item_open
                .entry(id)
                .or_insert_with(|| tree.is_active(id, route) || tree.is_parent_of_active(id, route));
            if open {
                stack.extend(node.children().iter().copied());
            }
        }

        let before = item_open.len();
        item_open.retain(|id, _| visible.contains(id));
        if item_open.len() != before {
            tracing::debug!(dropped = before - item_open.len(), "Hidden items unmounted");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::item::{NavItem, NavSection};

    fn site_sections() -> Vec<NavSection> {
        vec![
            NavSection::new(
                "Getting Started",
                SectionKind::Manual,
                vec![
                    NavItem::leaf("Introduction", "/docs"),
                    NavItem::leaf("Paper", "/docs/paper"),
                ],
            ),
            NavSection::new(
                "Guides",
                SectionKind::Manual,
                vec![NavItem::with_children(
                    "Search",
                    "/docs/guides/search",
                    vec![
                        NavItem::leaf("Templates", "/docs/guides/search/templates"),
                        NavItem::leaf("Quantifiers", "/docs/guides/search/quantifiers"),
                    ],
                )],
            ),
            NavSection::new("Tutorials", SectionKind::Manual, vec![]),
            NavSection::new(
                "API Reference",
                SectionKind::Api,
                vec![
                    NavItem::with_children(
                        "cfabric",
                        "/docs/api/cfabric",
                        vec![
                            NavItem::with_children(
                                "core",
                                "/docs/api/cfabric/core",
                                vec![NavItem::leaf("Fabric", "/docs/api/cfabric/core/fabric")],
                            ),
                            NavItem::leaf("search", "/docs/api/cfabric/search"),
                        ],
                    ),
                    NavItem::leaf("GitHub", "https://github.com/Context-Fabric/context-fabric"),
                ],
            ),
            NavSection::new(
                "MCP",
                SectionKind::Api,
                vec![NavItem::leaf("server", "/docs/api/cfabric_mcp")],
            ),
        ]
    }

    fn controller(route: &str) -> NavController {
        NavController::new(
            NavTree::from_sections(&site_sections()),
            route,
            NavOptions::default(),
        )
    }

    fn sid(index: usize) -> SectionId {
        controller("/").tree().section_ids().nth(index).unwrap()
    }

    fn id(c: &NavController, path: &str) -> NodeId {
        c.tree().find_by_path(path).unwrap()
    }

    fn visible_paths(c: &NavController) -> Vec<String> {
        c.rows()
            .into_iter()
            .filter_map(|row| match row {
                NavRow::Item(item) => Some(item.path),
                NavRow::Section(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_first_three_sections_open_by_default() {
        let c = controller("/elsewhere");

        let open: Vec<bool> = c.tree().section_ids().map(|s| c.is_section_open(s)).collect();

        assert_eq!(open, vec![true, true, true, false, false]);
    }

    #[test]
    fn test_section_with_active_route_starts_open() {
        let c = controller("/docs/api/cfabric/search");

        assert!(c.is_section_open(sid(3)));
        assert!(!c.is_section_open(sid(4)));
    }

    #[test]
    fn test_item_initial_state_from_route() {
        let c = controller("/docs/api/cfabric/core/fabric");

        assert_eq!(c.is_item_open(id(&c, "/docs/api/cfabric")), Some(true));
        assert_eq!(c.is_item_open(id(&c, "/docs/api/cfabric/core")), Some(true));
        assert_eq!(c.is_item_open(id(&c, "/docs/guides/search")), Some(false));
    }

    #[test]
    fn test_active_item_with_children_starts_open() {
        let c = controller("/docs/guides/search");

        assert_eq!(c.is_item_open(id(&c, "/docs/guides/search")), Some(true));
    }

    #[test]
    fn test_items_in_closed_section_have_no_state() {
        let c = controller("/docs");

        assert_eq!(c.is_item_open(id(&c, "/docs/api/cfabric")), None);
    }

    #[test]
    fn test_leaf_has_no_state_and_cannot_toggle() {
        let mut c = controller("/docs");
        let paper = id(&c, "/docs/paper");

        assert_eq!(c.is_item_open(paper), None);
        assert_eq!(c.toggle_item(paper), None);
    }

    #[test]
    fn test_route_change_opens_section_once() {
        let mut c = controller("/docs");
        let api = sid(3);
        assert!(!c.is_section_open(api));

        let opened = c.set_route("/docs/api/cfabric/search");

        assert_eq!(opened, vec![api]);
        assert!(c.is_section_open(api));
    }

    #[test]
    fn test_route_change_never_closes_section() {
        let mut c = controller("/docs/api/cfabric");
        assert!(c.is_section_open(sid(3)));

        c.set_route("/docs");

        assert!(c.is_section_open(sid(3)));
    }

    #[test]
    fn test_route_within_active_section_keeps_user_close() {
        let mut c = controller("/docs/api/cfabric");
        c.toggle_section(sid(3));

        let opened = c.set_route("/docs/api/cfabric/search");

        assert!(opened.is_empty());
        assert!(!c.is_section_open(sid(3)));
    }

    #[test]
    fn test_route_reentering_section_reopens_it() {
        let mut c = controller("/docs/api/cfabric");
        c.toggle_section(sid(3));
        c.set_route("/docs/paper");

        let opened = c.set_route("/docs/api/cfabric/search");

        assert_eq!(opened, vec![sid(3)]);
    }

    #[test]
    fn test_route_change_does_not_recompute_item_state() {
        let mut c = controller("/docs/paper");
        let search = id(&c, "/docs/guides/search");
        assert_eq!(c.is_item_open(search), Some(false));

        c.set_route("/docs/guides/search/templates");

        assert_eq!(c.is_item_open(search), Some(false));
    }

    #[test]
    fn test_newly_mounted_item_uses_current_route() {
        let mut c = controller("/docs");
        c.set_route("/docs/api/cfabric/core/fabric");

        let cfabric = id(&c, "/docs/api/cfabric");
        let core = id(&c, "/docs/api/cfabric/core");

        assert_eq!(c.is_item_open(cfabric), Some(true));
        assert_eq!(c.is_item_open(core), Some(true));
        assert!(visible_paths(&c).contains(&"/docs/api/cfabric/core/fabric".to_owned()));
    }

    #[test]
    fn test_toggle_item_flips_only_that_item() {
        let mut c = controller("/docs/api/cfabric/core/fabric");
        let cfabric = id(&c, "/docs/api/cfabric");
        let core = id(&c, "/docs/api/cfabric/core");

        assert_eq!(c.toggle_item(core), Some(false));

        assert_eq!(c.is_item_open(cfabric), Some(true));
        assert_eq!(c.is_item_open(core), Some(false));
        assert!(c.is_section_open(sid(3)));
    }

    #[test]
    fn test_collapsing_parent_drops_child_state() {
        let mut c = controller("/docs/api/cfabric/core/fabric");
        let cfabric = id(&c, "/docs/api/cfabric");
        let core = id(&c, "/docs/api/cfabric/core");
        c.toggle_item(core);

        c.toggle_item(cfabric);
        assert_eq!(c.is_item_open(core), None);

        // Re-expanding remounts `core` with a fresh value for the route
        c.toggle_item(cfabric);
        assert_eq!(c.is_item_open(core), Some(true));
    }

    #[test]
    fn test_closing_section_drops_item_state() {
        let mut c = controller("/docs/guides/search/templates");
        let search = id(&c, "/docs/guides/search");
        c.toggle_item(search);

        c.toggle_section(sid(1));
        assert_eq!(c.is_item_open(search), None);

        c.set_route("/docs/paper");
        c.toggle_section(sid(1));
        assert_eq!(c.is_item_open(search), Some(false));
    }

    #[test]
    fn test_toggle_path() {
        let mut c = controller("/docs");

        assert_eq!(c.toggle_path("/docs/guides/search"), Some(true));
        assert_eq!(c.toggle_path("/docs/paper"), None);
        assert_eq!(c.toggle_path("/missing"), None);
    }

    #[test]
    fn test_rows_order_and_indent() {
        let c = controller("/docs/api/cfabric/core/fabric");

        let items: Vec<(String, usize, u32)> = c
            .rows()
            .into_iter()
            .filter_map(|row| match row {
                NavRow::Item(item) if item.path.starts_with("/docs/api") => {
                    Some((item.path, item.depth, item.indent_px))
                }
                _ => None,
            })
            .collect();

        assert_eq!(
            items,
            vec![
                ("/docs/api/cfabric".to_owned(), 0, 8),
                ("/docs/api/cfabric/core".to_owned(), 1, 20),
                ("/docs/api/cfabric/core/fabric".to_owned(), 2, 32),
                ("/docs/api/cfabric/search".to_owned(), 1, 20),
            ]
        );
    }

    #[test]
    fn test_rows_mark_active_and_external() {
        let c = controller("/docs/api/cfabric/search");

        let rows = c.rows();
        let active: Vec<_> = rows
            .iter()
            .filter_map(|row| match row {
                NavRow::Item(item) if item.active => Some(item.path.as_str()),
                _ => None,
            })
            .collect();
        let external = rows.iter().any(|row| {
            matches!(row, NavRow::Item(item) if item.external && item.disclosure.is_none())
        });

        assert_eq!(active, vec!["/docs/api/cfabric/search"]);
        assert!(external);
    }

    #[test]
    fn test_empty_section_renders_header_only() {
        let mut c = controller("/docs/anything");
        let tutorials = sid(2);

        let rows = c.rows();
        let header = rows.iter().find_map(|row| match row {
            NavRow::Section(s) if s.id == tutorials => Some(s.clone()),
            _ => None,
        });

        let header = header.unwrap();
        assert!(header.open);
        assert!(!header.has_active_item);
        assert!(!c.toggle_section(tutorials));
        assert!(c.toggle_section(tutorials));
    }

    #[test]
    fn test_aria_label() {
        let c = controller("/docs/guides/search");

        let labels: Vec<_> = c
            .rows()
            .into_iter()
            .filter_map(|row| match row {
                NavRow::Item(item) => Some((item.path.clone(), item.aria_label())),
                NavRow::Section(_) => None,
            })
            .collect();

        assert!(labels.contains(&("/docs/guides/search".to_owned(), Some("Collapse"))));
        assert!(labels.contains(&("/docs/paper".to_owned(), None)));
    }

    #[test]
    fn test_custom_options() {
        let options = NavOptions {
            default_open_sections: 0,
            indent_step: 16,
            indent_base: 4,
        };
        let c = NavController::new(NavTree::from_sections(&site_sections()), "/docs/paper", options);

        assert!(c.is_section_open(sid(0)));
        assert!(!c.is_section_open(sid(1)));
        let first = c.rows().into_iter().find_map(|row| match row {
            NavRow::Item(item) => Some(item.indent_px),
            NavRow::Section(_) => None,
        });
        assert_eq!(first, Some(4));
    }

    #[test]
    fn test_row_serialization_is_tagged() {
        let c = controller("/docs");

        let json = serde_json::to_value(c.rows()).unwrap();

        assert_eq!(json[0]["row"], "section");
        assert_eq!(json[0]["kind"], "manual");
        assert_eq!(json[1]["row"], "item");
        assert_eq!(json[1]["path"], "/docs");
    }

    fn all_routes() -> Vec<String> {
        let mut routes: Vec<String> = NavTree::from_sections(&site_sections())
            .to_sections()
            .iter()
            .flat_map(|s| s.items.clone())
            .flat_map(|item| {
                let mut paths = vec![item.path.clone()];
                for child in item.children.iter().flatten() {
                    paths.push(child.path.clone());
                    paths.extend(child.children.iter().flatten().map(|g| g.path.clone()));
                }
                paths
            })
            .collect();
        routes.push("/unknown".to_owned());
        routes
    }

    proptest! {
        #[test]
        fn prop_sections_never_auto_close(
            start in 0usize..12,
            steps in proptest::collection::vec((0usize..12, proptest::option::of(0usize..5)), 0..20),
        ) {
            let routes = all_routes();
            let mut c = controller(&routes[start % routes.len()]);

            for (route, toggle) in steps {
                if let Some(section) = toggle {
                    c.toggle_section(sid(section));
                }
                let before: Vec<bool> = c.tree().section_ids().map(|s| c.is_section_open(s)).collect();
                c.set_route(routes[route % routes.len()].clone());
                for (index, was_open) in before.into_iter().enumerate() {
                    if was_open {
                        prop_assert!(c.is_section_open(sid(index)));
                    }
                }
            }
        }

        #[test]
        fn prop_route_only_navigation_keeps_active_section_open(
            steps in proptest::collection::vec(0usize..12, 1..20),
        ) {
            let routes = all_routes();
            let mut c = controller("/");

            for route in steps {
                c.set_route(routes[route % routes.len()].clone());
                for section in c.tree().section_ids() {
                    if c.tree().section_has_active_item(section, c.route()) {
                        prop_assert!(c.is_section_open(section));
                    }
                }
            }
        }
    }
}
