//! Filter and sort pipeline over a [`CorpusDataset`].
//!
//! Everything here is a pure function of `(dataset, query)`. There is no
//! caching or index: each call rescans the dataset, which is fine for the
//! tens of records the site ships. A much larger catalog would want an index
//! by language and category instead of a full scan per keystroke.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::collate::locale_compare;
use crate::dataset::CorpusDataset;
use crate::query::{Filter, QueryState, SortDirection, SortKey};
use crate::record::CorpusRecord;

/// Records passing the query's search and filters, in input order.
pub fn filter_records<'a, I>(records: I, query: &QueryState) -> Vec<&'a CorpusRecord>
where
    I: IntoIterator<Item = &'a CorpusRecord>,
{
    records.into_iter().filter(|r| query.matches(r)).collect()
}

/// Sort rows in place on the lowercased column value.
///
/// The sort is stable: rows whose keys compare equal keep their relative
/// order, in both directions.
pub fn sort_records(rows: &mut [&CorpusRecord], key: SortKey, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = locale_compare(&key.value(a).to_lowercase(), &key.value(b).to_lowercase());
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

/// Ordered subset of the dataset for one query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableView<'a> {
    /// Matching records in display order.
    pub rows: Vec<&'a CorpusRecord>,
    /// Size of the whole dataset.
    pub total_count: usize,
}

impl TableView<'_> {
    /// Number of matching records.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Count line shown above the table.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("Showing {} of {} corpora", self.filtered_count(), self.total_count)
    }

    /// Names of the matching records, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.name.as_str()).collect()
    }
}

/// Message shown when no record matches.
pub const EMPTY_MESSAGE: &str = "No corpora match your search criteria.";

/// Filter then sort the dataset.
#[must_use]
pub fn compute_view<'a>(dataset: &'a CorpusDataset, query: &QueryState) -> TableView<'a> {
    let mut rows = filter_records(dataset.records(), query);
    sort_records(&mut rows, query.sort_key, query.sort_direction);
    tracing::debug!(
        search = %query.search,
        language = %query.language.as_str(),
        category = %query.category.as_str(),
        sort = %query.sort_key,
        direction = %query.sort_direction,
        matched = rows.len(),
        "Recomputed corpus view"
    );
    TableView {
        rows,
        total_count: dataset.len(),
    }
}

/// One entry of a filter dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterChoice {
    /// Value submitted when selected (`all` for the sentinel).
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

/// Dropdown contents, derived once from the unfiltered dataset.
///
/// Selecting a filter never narrows the other dropdown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Distinct languages, ascending.
    pub languages: Vec<String>,
    /// Distinct categories, ascending.
    pub categories: Vec<String>,
}

impl FilterOptions {
    /// Collect distinct languages and categories.
    #[must_use]
    pub fn from_dataset(dataset: &CorpusDataset) -> Self {
        let languages: BTreeSet<&str> = dataset.records().iter().map(|r| r.language.as_str()).collect();
        let categories: BTreeSet<&str> = dataset.records().iter().map(|r| r.category.as_str()).collect();
        Self {
            languages: languages.into_iter().map(str::to_owned).collect(),
            categories: categories.into_iter().map(str::to_owned).collect(),
        }
    }

    /// Language dropdown entries, led by the "All Languages" sentinel.
    #[must_use]
    pub fn language_choices(&self) -> Vec<FilterChoice> {
        choices("All Languages", &self.languages)
    }

    /// Category dropdown entries, led by the "All Categories" sentinel.
    #[must_use]
    pub fn category_choices(&self) -> Vec<FilterChoice> {
        choices("All Categories", &self.categories)
    }
}

fn choices(all_label: &str, values: &[String]) -> Vec<FilterChoice> {
    std::iter::once(FilterChoice {
        value: Filter::All.as_str().to_owned(),
        label: all_label.to_owned(),
    })
    .chain(values.iter().map(|v| FilterChoice {
        value: v.clone(),
        label: v.clone(),
    }))
    .collect()
}
