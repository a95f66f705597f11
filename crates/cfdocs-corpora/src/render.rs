//! HTML and plain-text rendering of the corpus table.

use std::fmt::Write;

use html_escape::encode_quoted_attribute as escape_html;

use crate::engine::{EMPTY_MESSAGE, FilterChoice, TableView};
use crate::query::{QueryState, SortDirection, SortKey};
use crate::record::CorpusRecord;
use crate::table::CorporaTable;

const SEARCH_PLACEHOLDER: &str = "Search corpora...";

/// Render the full table widget: controls, count line and table body.
#[must_use]
pub fn render_table(table: &CorporaTable<'_>) -> String {
    let view = table.view();
    let query = table.query();
    let mut out = String::with_capacity(1024 + view.rows.len() * 512);

    out.push_str(r#"<div class="corpora-table">"#);
    out.push_str(r#"<div class="corpora-controls">"#);
    write!(
        out,
        r#"<input type="search" class="corpora-search" placeholder="{SEARCH_PLACEHOLDER}" value="{}">"#,
        escape_html(&query.search),
    )
    .unwrap();
    write_select(&mut out, "language", &table.options().language_choices(), query.language.as_str());
    write_select(&mut out, "category", &table.options().category_choices(), query.category.as_str());
    out.push_str("</div>");

    write!(out, r#"<p class="corpora-count">{}</p>"#, view.summary()).unwrap();

    out.push_str(r#"<table class="corpora"><thead><tr>"#);
    for key in SortKey::ALL {
        write!(
            out,
            r#"<th><button class="sort-header" data-sort="{key}">{}<span class="sort-icon">{}</span></button></th>"#,
            key.label(),
            sort_icon(query, key),
        )
        .unwrap();
    }
    out.push_str("<th>Description</th></tr></thead><tbody>");

    if view.is_empty() {
        write!(out, r#"<tr class="corpora-empty"><td colspan="5">{EMPTY_MESSAGE}</td></tr>"#).unwrap();
    } else {
        for record in &view.rows {
            write_row(&mut out, record);
        }
    }

    out.push_str("</tbody></table></div>");
    out
}

fn write_select(out: &mut String, name: &str, choices: &[FilterChoice], selected: &str) {
    write!(out, r#"<select class="corpora-filter" name="{name}">"#).unwrap();
    for choice in choices {
        let marker = if choice.value == selected { " selected" } else { "" };
        write!(
            out,
            r#"<option value="{}"{marker}>{}</option>"#,
            escape_html(&choice.value),
            escape_html(&choice.label),
        )
        .unwrap();
    }
    out.push_str("</select>");
}

fn write_row(out: &mut String, record: &CorpusRecord) {
    write!(
        out,
        r#"<tr><td><a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        escape_html(&record.repository),
        escape_html(&record.name),
    )
    .unwrap();
    if let Some(size) = &record.size {
        write!(out, r#"<span class="corpus-size">{}</span>"#, escape_html(size)).unwrap();
    }
    write!(
        out,
        "</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape_html(&record.language),
        escape_html(&record.category),
        escape_html(&record.period),
        escape_html(&record.description),
    )
    .unwrap();
}

/// Header icon: `↕` for inactive columns, `↑`/`↓` for the active one.
#[must_use]
pub fn sort_icon(query: &QueryState, key: SortKey) -> &'static str {
    if query.sort_key != key {
        "↕"
    } else {
        match query.sort_direction {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Render a view as an aligned plain-text table for terminals.
#[must_use]
pub fn render_text(view: &TableView<'_>, query: &QueryState) -> String {
    let mut headers: Vec<String> = SortKey::ALL
        .iter()
        .map(|&key| format!("{} {}", key.label(), sort_icon(query, key)))
        .collect();
    headers.push("Size".to_owned());

    let rows: Vec<[&str; 5]> = view
        .rows
        .iter()
        .map(|r| {
            [
                r.name.as_str(),
                r.language.as_str(),
                r.category.as_str(),
                r.period.as_str(),
                r.size.as_deref().unwrap_or(""),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_text_line(&mut out, headers.iter().map(String::as_str), &widths);
    for row in &rows {
        write_text_line(&mut out, row.iter().copied(), &widths);
    }
    if view.is_empty() {
        out.push_str(EMPTY_MESSAGE);
        out.push('\n');
    }
    out.push_str(&view.summary());
    out.push('\n');
    out
}

fn write_text_line<'s>(out: &mut String, cells: impl Iterator<Item = &'s str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
