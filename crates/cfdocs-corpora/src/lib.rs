//! Corpus catalog and table state for cfdocs.
//!
//! [`CorpusDataset`] holds the read-only records. [`QueryState`] carries the
//! search text, filters and sort; [`compute_view`] turns both into the rows to
//! display. [`CorporaTable`] wraps that into the stateful component the
//! corpora page drives, and [`render_table`] emits its HTML.
//!
//! # Example
//!
//! ```
//! use cfdocs_corpora::{CorporaTable, CorpusDataset, SortKey};
//!
//! let dataset = CorpusDataset::builtin();
//! let mut table = CorporaTable::new(&dataset);
//! table.set_language_filter("Akkadian");
//! table.click_header(SortKey::Name);
//!
//! let view = table.view();
//! assert_eq!(view.names(), vec!["ninmed", "oldassyrian", "oldbabylonian"]);
//! assert_eq!(view.summary(), "Showing 3 of 35 corpora");
//! ```

mod catalog;
mod collate;
mod dataset;
mod engine;
mod error;
mod query;
mod record;
mod render;
mod table;

pub use collate::locale_compare;
pub use dataset::CorpusDataset;
pub use engine::{
    EMPTY_MESSAGE, FilterChoice, FilterOptions, TableView, compute_view, filter_records,
    sort_records,
};
pub use error::CorpusError;
pub use query::{ALL, Filter, QueryState, SortDirection, SortKey};
pub use record::CorpusRecord;
pub use render::{render_table, render_text, sort_icon};
pub use table::CorporaTable;
