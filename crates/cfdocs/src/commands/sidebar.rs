//! `cfdocs sidebar` command implementation.

use std::fmt::Write;
use std::path::PathBuf;

use cfdocs_config::{CliSettings, Config, NavigationConfig};
use cfdocs_nav::{NavController, NavOptions, NavRow, NavTree, load_sections, render_sidebar};
use clap::{Args, ValueEnum};

use crate::error::CliError;
use crate::output::Output;

/// Sidebar output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum SidebarFormat {
    /// HTML fragment.
    Html,
    /// Indented text outline.
    Tree,
    /// Row models as JSON.
    Json,
}

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Path to configuration file (default: auto-discover cfdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Navigation feed JSON (overrides config).
    #[arg(long, env = "CFDOCS_NAV")]
    nav: Option<PathBuf>,

    /// Current route. Repeat to navigate: the first value mounts the
    /// sidebar, each further value is a route change.
    #[arg(short, long = "route", required = true)]
    routes: Vec<String>,

    /// Toggle the item with this path after mounting.
    #[arg(short, long = "toggle")]
    toggles: Vec<String>,

    /// Toggle the section with this title after mounting.
    #[arg(long = "toggle-section")]
    toggle_sections: Vec<String>,

    /// Number of sections open by default (overrides config).
    #[arg(long)]
    open_sections: Option<usize>,

    /// Print breadcrumbs for the final route to stderr.
    #[arg(long)]
    breadcrumbs: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = SidebarFormat::Html)]
    format: SidebarFormat,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if config or the navigation feed cannot be loaded.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            nav_source: self.nav.clone(),
            default_open_sections: self.open_sections,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let nav_config = &config.navigation_resolved;

        let sections = load_sections(&nav_config.source)?;
        let tree = NavTree::from_sections(&sections);
        tracing::debug!(
            source = %nav_config.source.display(),
            sections = tree.section_count(),
            items = tree.len(),
            "Loaded navigation"
        );

        let (first, rest) = self
            .routes
            .split_first()
            .ok_or_else(|| CliError::Validation("at least one --route is required".to_owned()))?;
        let mut controller = NavController::new(tree, first.as_str(), nav_options(nav_config));

        for title in &self.toggle_sections {
            let id = controller
                .tree()
                .section_ids()
                .find(|&id| controller.tree().section(id).title() == title);
            match id {
                Some(id) => {
                    controller.toggle_section(id);
                }
                None => output.warning(&format!("No section titled '{title}'")),
            }
        }

        for path in &self.toggles {
            if controller.toggle_path(path).is_none() {
                output.warning(&format!("No visible expandable item at '{path}'"));
            }
        }

        for route in rest {
            for id in controller.set_route(route.as_str()) {
                output.note(&format!(
                    "Opened section '{}' for {route}",
                    controller.tree().section(id).title()
                ));
            }
        }

        if self.breadcrumbs {
            let crumbs = controller.tree().breadcrumbs(controller.route());
            let trail: Vec<&str> = crumbs.iter().map(|crumb| crumb.title.as_str()).collect();
            output.note(&trail.join(" › "));
        }

        let text = match self.format {
            SidebarFormat::Html => render_sidebar(&controller),
            SidebarFormat::Tree => render_outline(&controller.rows()),
            SidebarFormat::Json => serde_json::to_string_pretty(&controller.rows())?,
        };
        output.result(&text)?;
        Ok(())
    }
}

fn nav_options(config: &NavigationConfig) -> NavOptions {
    NavOptions {
        default_open_sections: config.default_open_sections,
        indent_step: config.indent_step,
        indent_base: config.indent_base,
    }
}

/// Render rows as an indented outline.
fn render_outline(rows: &[NavRow]) -> String {
    let mut out = String::new();
    for row in rows {
        match row {
            NavRow::Section(section) => {
                let marker = if section.open { '▾' } else { '▸' };
                writeln!(out, "{marker} {} ({})", section.title, section.kind.as_str()).unwrap();
            }
            NavRow::Item(item) => {
                let marker = match item.disclosure {
                    Some(true) => '▾',
                    Some(false) => '▸',
                    None => '-',
                };
                let indent = "  ".repeat(item.depth + 1);
                write!(out, "{indent}{marker} {}  {}", item.title, item.path).unwrap();
                if item.external {
                    out.push_str(" ↗");
                }
                if item.active {
                    out.push_str("  *");
                }
                out.push('\n');
            }
        }
    }
    out
}
