//! `cfdocs corpora` command implementation.

use std::path::PathBuf;

use cfdocs_config::{CliSettings, Config};
use cfdocs_corpora::{
    ALL, CorporaTable, CorpusDataset, FilterOptions, QueryState, SortDirection, SortKey,
    TableView, render_table, render_text,
};
use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::error::CliError;
use crate::output::Output;

/// Corpus table output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum CorporaFormat {
    /// Aligned text table.
    Table,
    /// HTML widget.
    Html,
    /// Query and rows as JSON.
    Json,
    /// Filter dropdown contents as JSON.
    Options,
}

/// Arguments for the corpora command.
#[derive(Args)]
pub(crate) struct CorporaArgs {
    /// Path to configuration file (default: auto-discover cfdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Corpus dataset file, JSON or YAML (overrides config).
    #[arg(long, env = "CFDOCS_CORPORA")]
    data: Option<PathBuf>,

    /// Case-insensitive search over name, description and language.
    #[arg(short, long, default_value = "")]
    search: String,

    /// Exact language filter (`all` for none).
    #[arg(short, long, default_value = ALL)]
    language: String,

    /// Exact category filter (`all` for none).
    #[arg(long, default_value = ALL)]
    category: String,

    /// Click a column header. Repeat to click several times.
    #[arg(long = "sort")]
    sorts: Vec<SortKey>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = CorporaFormat::Table)]
    format: CorporaFormat,
}

/// JSON shape of a query result.
#[derive(Serialize)]
struct Report<'a> {
    search: &'a str,
    language: &'a str,
    category: &'a str,
    sort_key: SortKey,
    sort_direction: SortDirection,
    summary: String,
    #[serde(flatten)]
    view: &'a TableView<'a>,
}

impl CorporaArgs {
    /// Execute the corpora command.
    ///
    /// # Errors
    ///
    /// Returns an error if config or the dataset cannot be loaded.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            corpora_source: self.data.clone(),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let corpora_config = &config.corpora_resolved;

        let dataset = match &corpora_config.source {
            Some(path) => CorpusDataset::load(path)?,
            None => CorpusDataset::builtin(),
        };

        let initial =
            QueryState::sorted_by(corpora_config.sort_key, corpora_config.sort_direction);
        let mut table = CorporaTable::with_query(&dataset, initial);
        table.set_search(self.search.as_str());
        table.set_language_filter(&self.language);
        table.set_category_filter(&self.category);
        for &key in &self.sorts {
            table.click_header(key);
        }

        warn_unknown_filters(output, table.options(), table.query());

        let text = match self.format {
            CorporaFormat::Table => render_text(&table.view(), table.query()),
            CorporaFormat::Html => render_table(&table),
            CorporaFormat::Json => {
                let view = table.view();
                let query = table.query();
                serde_json::to_string_pretty(&Report {
                    search: &query.search,
                    language: query.language.as_str(),
                    category: query.category.as_str(),
                    sort_key: query.sort_key,
                    sort_direction: query.sort_direction,
                    summary: view.summary(),
                    view: &view,
                })?
            }
            CorporaFormat::Options => serde_json::to_string_pretty(table.options())?,
        };
        output.result(&text)?;
        Ok(())
    }
}

/// Filter values not present in the dataset match nothing.
fn warn_unknown_filters(output: &Output, options: &FilterOptions, query: &QueryState) {
    let checks = [
        ("language", query.language.as_str(), &options.languages),
        ("category", query.category.as_str(), &options.categories),
    ];
    for (field, value, known) in checks {
        if value != ALL && !known.iter().any(|k| k == value) {
            output.warning(&format!("Unknown {field} '{value}'; no corpora will match"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json_shape() {
        let dataset = CorpusDataset::builtin();
        let mut table = CorporaTable::new(&dataset);
        table.set_language_filter("Ugaritic");
        let view = table.view();
        let query = table.query();

        let value = serde_json::to_value(Report {
            search: &query.search,
            language: query.language.as_str(),
            category: query.category.as_str(),
            sort_key: query.sort_key,
            sort_direction: query.sort_direction,
            summary: view.summary(),
            view: &view,
        })
        .unwrap();

        assert_eq!(value["language"], "Ugaritic");
        assert_eq!(value["category"], "all");
        assert_eq!(value["sort_key"], "language");
        assert_eq!(value["sort_direction"], "asc");
        assert_eq!(value["summary"], "Showing 1 of 35 corpora");
        assert_eq!(value["total_count"], 35);
        assert_eq!(value["rows"][0]["name"], "cuc");
        assert_eq!(value["rows"][0]["size"], "1.6 MB");
    }
}
