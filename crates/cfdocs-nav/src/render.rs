//! HTML rendering of the sidebar.

use std::fmt::Write;

use html_escape::encode_quoted_attribute as escape_html;

use crate::controller::{ItemRow, NavController, NavRow, SectionRow};

/// Render the sidebar as a `<nav>` fragment.
///
/// Section bodies and item children are only emitted when open. The host
/// attaches click handlers to the `data-section` / `data-item` buttons and
/// feeds them back through [`NavController::toggle_section`] and
/// [`NavController::toggle_item`].
#[must_use]
pub fn render_sidebar(controller: &NavController) -> String {
    let rows = controller.rows();
    let mut out = String::with_capacity(rows.len() * 128);
    out.push_str(r#"<nav class="sidebar">"#);

    // Each open container is closed when the next row is shallower.
    let mut open_lists: Vec<usize> = Vec::new();
    let mut in_section = false;

    for row in &rows {
        match row {
            NavRow::Section(section) => {
                close_lists(&mut out, &mut open_lists, 0);
                if in_section {
                    out.push_str("</div>");
                }
                write_section_header(&mut out, section);
                in_section = true;
            }
            NavRow::Item(item) => {
                let depth = item.depth;
                close_lists(&mut out, &mut open_lists, depth + 1);
                if open_lists.len() == depth {
                    out.push_str(r#"<ul class="nav-list">"#);
                    open_lists.push(depth);
                } else {
                    out.push_str("</li>");
                }
                write_item(&mut out, item);
            }
        }
    }

    close_lists(&mut out, &mut open_lists, 0);
    if in_section {
        out.push_str("</div>");
    }
    out.push_str("</nav>");
    out
}

/// Close `<li>`/`<ul>` pairs until only `keep` lists remain open.
fn close_lists(out: &mut String, open_lists: &mut Vec<usize>, keep: usize) {
    while open_lists.len() > keep {
        open_lists.pop();
        out.push_str("</li></ul>");
    }
}

fn write_section_header(out: &mut String, section: &SectionRow) {
    write!(
        out,
        r#"<div class="nav-section nav-section-{kind}"><button class="nav-section-toggle" data-section="{id}" aria-expanded="{open}"><h2>{title}</h2>{chevron}</button>"#,
        kind = section.kind.as_str(),
        id = section.id.index(),
        open = section.open,
        title = escape_html(&section.title),
        chevron = chevron(section.open),
    )
    .unwrap();
}

fn write_item(out: &mut String, item: &ItemRow) {
    out.push_str(r#"<li><div class="nav-row">"#);

    if let (Some(open), Some(label)) = (item.disclosure, item.aria_label()) {
        write!(
            out,
            r#"<button class="nav-disclosure" data-item="{}" aria-label="{label}">{}</button>"#,
            item.id.index(),
            chevron(open),
        )
        .unwrap();
    }

    let class = if item.active { "nav-link active" } else { "nav-link" };
    let current = if item.active { r#" aria-current="page""# } else { "" };
    let title = escape_html(&item.title);
    let href = escape_html(&item.path);

    if item.external {
        write!(
            out,
            r#"<a href="{href}" class="{class}" style="padding-left: {}px" target="_blank" rel="noopener noreferrer">{title}<span class="nav-external">↗</span></a>"#,
            item.indent_px,
        )
        .unwrap();
    } else {
        write!(
            out,
            r#"<a href="{href}" class="{class}"{current} style="padding-left: {}px">{title}</a>"#,
            item.indent_px,
        )
        .unwrap();
    }

    out.push_str("</div>");
}

fn chevron(open: bool) -> &'static str {
    if open {
        r#"<span class="chevron open" aria-hidden="true">▸</span>"#
    } else {
        r#"<span class="chevron" aria-hidden="true">▸</span>"#
    }
}
