//! CLI command implementations.

pub(crate) mod corpora;
pub(crate) mod sidebar;

pub(crate) use corpora::CorporaArgs;
pub(crate) use sidebar::SidebarArgs;
