//! Sidebar navigation for cfdocs.
//!
//! This crate provides:
//! - [`NavSection`] / [`NavItem`]: the navigation feed produced by the docs generator
//! - [`NavTree`]: an immutable arena over the feed with active-route rules
//! - [`NavController`]: expand/collapse state kept in step with the current route
//! - [`render_sidebar`]: HTML output for the host page
//!
//! # Example
//!
//! ```
//! use cfdocs_nav::{NavController, NavItem, NavOptions, NavSection, NavTree, SectionKind};
//!
//! let sections = vec![NavSection::new(
//!     "API Reference",
//!     SectionKind::Api,
//!     vec![NavItem::with_children(
//!         "cfabric",
//!         "/docs/api/cfabric",
//!         vec![NavItem::leaf("core", "/docs/api/cfabric/core")],
//!     )],
//! )];
//!
//! let tree = NavTree::from_sections(&sections);
//! let controller = NavController::new(tree, "/docs/api/cfabric/core", NavOptions::default());
//! let parent = controller.tree().find_by_path("/docs/api/cfabric").unwrap();
//! assert_eq!(controller.is_item_open(parent), Some(true));
//! ```

mod controller;
mod error;
mod item;
mod render;
mod tree;

pub use controller::{ItemRow, NavController, NavOptions, NavRow, SectionRow};
pub use error::NavError;
pub use item::{NavItem, NavSection, SectionKind, load_sections, parse_sections};
pub use render::render_sidebar;
pub use tree::{BreadcrumbItem, NavNode, NavTree, NavTreeBuilder, NodeId, SectionId, SectionNode};
