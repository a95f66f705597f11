//! Stateful corpus table.

use crate::dataset::CorpusDataset;
use crate::engine::{FilterOptions, TableView, compute_view};
use crate::query::{Filter, QueryState, SortKey};

/// Corpus table component state.
///
/// Owns the query; the dataset is borrowed and never modified. Dropdown
/// options are computed once at construction. Every setter is followed by a
/// full recompute on the next [`view`](Self::view) call; inputs are not
/// debounced.
#[derive(Clone, Debug)]
pub struct CorporaTable<'a> {
    dataset: &'a CorpusDataset,
    options: FilterOptions,
    initial: QueryState,
    query: QueryState,
}

impl<'a> CorporaTable<'a> {
    /// Table with the default query (all records, language ascending).
    #[must_use]
    pub fn new(dataset: &'a CorpusDataset) -> Self {
        Self::with_query(dataset, QueryState::default())
    }

    /// Table starting from a given query; [`reset`](Self::reset) returns to it.
    #[must_use]
    pub fn with_query(dataset: &'a CorpusDataset, query: QueryState) -> Self {
        Self {
            dataset,
            options: FilterOptions::from_dataset(dataset),
            initial: query.clone(),
            query,
        }
    }

    /// Underlying dataset.
    #[must_use]
    pub fn dataset(&self) -> &'a CorpusDataset {
        self.dataset
    }

    /// Current query.
    #[must_use]
    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Dropdown contents.
    #[must_use]
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Replace the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    /// Select a language (`all` or blank clears the filter).
    pub fn set_language_filter(&mut self, value: &str) {
        self.query.language = Filter::from_input(value);
    }

    /// Select a category (`all` or blank clears the filter).
    pub fn set_category_filter(&mut self, value: &str) {
        self.query.category = Filter::from_input(value);
    }

    /// Handle a click on a column header.
    pub fn click_header(&mut self, key: SortKey) {
        self.query.toggle_sort(key);
        tracing::debug!(sort = %self.query.sort_key, direction = %self.query.sort_direction, "Sort changed");
    }

    /// Restore the initial query.
    pub fn reset(&mut self) {
        self.query = self.initial.clone();
    }

    /// Rows for the current query.
    #[must_use]
    pub fn view(&self) -> TableView<'a> {
        compute_view(self.dataset, &self.query)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::query::SortDirection;

    #[test]
    fn test_click_header_sequence() {
        let dataset = CorpusDataset::builtin();
        let mut table =
            CorporaTable::with_query(&dataset, QueryState::sorted_by(SortKey::Name, SortDirection::Asc));

        table.click_header(SortKey::Language);
        assert_eq!(table.query().sort_key, SortKey::Language);
        assert_eq!(table.query().sort_direction, SortDirection::Asc);

        table.click_header(SortKey::Language);
        assert_eq!(table.query().sort_key, SortKey::Language);
        assert_eq!(table.query().sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_filters_do_not_change_options() {
        let dataset = CorpusDataset::builtin();
        let mut table = CorporaTable::new(&dataset);
        let before = table.options().clone();

        table.set_language_filter("Hebrew");
        let view = table.view();

        assert_eq!(table.options(), &before);
        assert_eq!(table.options().categories.len(), 4);
        assert!(view.rows.iter().all(|r| r.language == "Hebrew"));
    }

    #[test]
    fn test_combined_filters() {
        let dataset = CorpusDataset::builtin();
        let mut table = CorporaTable::new(&dataset);

        table.set_language_filter("Greek");
        table.set_category_filter("Literary");
        table.set_search("athen");

        assert_eq!(table.view().names(), vec!["athenaeus"]);
    }

    #[test]
    fn test_blank_filter_clears() {
        let dataset = CorpusDataset::builtin();
        let mut table = CorporaTable::new(&dataset);
        table.set_language_filter("Hebrew");

        table.set_language_filter("");

        assert_eq!(table.view().filtered_count(), 35);
    }

    #[test]
    fn test_reset_restores_initial_query() {
        let dataset = CorpusDataset::builtin();
        let mut table = CorporaTable::new(&dataset);
        table.set_search("quran");
        table.click_header(SortKey::Period);

        table.reset();

        assert_eq!(table.query(), &QueryState::default());
        assert_eq!(table.view().filtered_count(), dataset.len());
    }

    #[test]
    fn test_view_counts() {
        let dataset = CorpusDataset::builtin();
        let mut table = CorporaTable::new(&dataset);
        table.set_search("greek");

        let view = table.view();

        assert_eq!(view.total_count, 35);
        assert_eq!(view.summary(), format!("Showing {} of 35 corpora", view.filtered_count()));
        assert!(view.filtered_count() > 0);
    }
}
