//! Query state for the corpus table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::record::CorpusRecord;

/// Sentinel value meaning "no filter".
pub const ALL: &str = "all";

/// Sortable table column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Corpus name.
    Name,
    /// Language.
    #[default]
    Language,
    /// Category.
    Category,
    /// Period.
    Period,
}

impl SortKey {
    /// Columns in display order.
    pub const ALL: [SortKey; 4] = [Self::Name, Self::Language, Self::Category, Self::Period];

    /// Field value this column sorts on.
    #[must_use]
    pub fn value(self, record: &CorpusRecord) -> &str {
        match self {
            Self::Name => &record.name,
            Self::Language => &record.language,
            Self::Category => &record.category,
            Self::Period => &record.period,
        }
    }

    /// Column header text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Corpus",
            Self::Language => "Language",
            Self::Category => "Category",
            Self::Period => "Period",
        }
    }

    /// Lowercase identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Language => "language",
            Self::Category => "category",
            Self::Period => "period",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "language" => Ok(Self::Language),
            "category" => Ok(Self::Category),
            "period" => Ok(Self::Period),
            other => Err(format!(
                "unknown sort key '{other}' (expected name, language, category or period)"
            )),
        }
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Lowercase identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unknown sort direction '{other}' (expected asc or desc)")),
        }
    }
}

/// Exact-match column filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Every value passes.
    #[default]
    All,
    /// Only this value passes.
    Only(String),
}

impl Filter {
    /// Interpret user input. Blank input and the `all` sentinel mean no filter.
    #[must_use]
    pub fn from_input(value: &str) -> Self {
        if value.trim().is_empty() || value == ALL {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    /// Whether a field value passes.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    /// Selected value, `all` when unfiltered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(value) => value,
        }
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        Self::from_input(value)
    }
}

/// Search text, filters and sort configuration for the corpus table.
///
/// The default shows every record sorted by language, ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryState {
    /// Case-insensitive search text.
    pub search: String,
    /// Language filter.
    pub language: Filter,
    /// Category filter.
    pub category: Filter,
    /// Active sort column.
    pub sort_key: SortKey,
    /// Active sort direction.
    pub sort_direction: SortDirection,
}

impl QueryState {
    /// Query with the given initial sort and no filters.
    #[must_use]
    pub fn sorted_by(sort_key: SortKey, sort_direction: SortDirection) -> Self {
        Self {
            sort_key,
            sort_direction,
            ..Self::default()
        }
    }

    /// Apply a header click: the active column flips direction, another
    /// column becomes active in ascending order.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// Whether a record passes the search and both filters.
    #[must_use]
    pub fn matches(&self, record: &CorpusRecord) -> bool {
        self.matches_search(record)
            && self.language.matches(&record.language)
            && self.category.matches(&record.category)
    }

    fn matches_search(&self, record: &CorpusRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [&record.name, &record.description, &record.language]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, language: &str, category: &str, description: &str) -> CorpusRecord {
        CorpusRecord {
            name: name.to_owned(),
            language: language.to_owned(),
            category: category.to_owned(),
            period: "Various".to_owned(),
            description: description.to_owned(),
            repository: String::new(),
            size: None,
        }
    }

    #[test]
    fn test_default_query() {
        let query = QueryState::default();

        assert_eq!(query.search, "");
        assert_eq!(query.language, Filter::All);
        assert_eq!(query.category, Filter::All);
        assert_eq!(query.sort_key, SortKey::Language);
        assert_eq!(query.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_toggle_sort_same_key_flips_direction() {
        let mut query = QueryState::sorted_by(SortKey::Name, SortDirection::Asc);

        query.toggle_sort(SortKey::Language);
        assert_eq!((query.sort_key, query.sort_direction), (SortKey::Language, SortDirection::Asc));

        query.toggle_sort(SortKey::Language);
        assert_eq!((query.sort_key, query.sort_direction), (SortKey::Language, SortDirection::Desc));
    }

    #[test]
    fn test_toggle_sort_other_key_resets_to_asc() {
        let mut query = QueryState::sorted_by(SortKey::Period, SortDirection::Desc);

        query.toggle_sort(SortKey::Category);

        assert_eq!(query.sort_key, SortKey::Category);
        assert_eq!(query.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_filter_from_input() {
        assert_eq!(Filter::from_input(""), Filter::All);
        assert_eq!(Filter::from_input("   "), Filter::All);
        assert_eq!(Filter::from_input("all"), Filter::All);
        assert_eq!(Filter::from_input("Hebrew"), Filter::Only("Hebrew".to_owned()));
        assert_eq!(Filter::from("Greek").as_str(), "Greek");
        assert_eq!(Filter::All.as_str(), "all");
    }

    #[test]
    fn test_filter_is_exact() {
        let filter = Filter::from_input("Hebrew");

        assert!(filter.matches("Hebrew"));
        assert!(!filter.matches("hebrew"));
        assert!(!filter.matches("Hebrew "));
    }

    #[test]
    fn test_search_matches_name_description_or_language() {
        let bhsa = record("bhsa", "Hebrew", "Biblical", "Biblia Hebraica");
        let mut query = QueryState::default();

        for (search, expected) in [
            ("BHS", true),
            ("hebraica", true),
            ("hebrew", true),
            ("biblical", false),
            ("greek", false),
        ] {
            query.search = search.to_owned();
            assert_eq!(query.matches(&bhsa), expected, "search {search:?}");
        }
    }

    #[test]
    fn test_search_reaches_language_branch() {
        let peshitta = record("peshitta", "Syriac", "Biblical", "Old Testament");
        let query = QueryState {
            search: "syriac".to_owned(),
            ..QueryState::default()
        };

        assert!(query.matches(&peshitta));
    }

    #[test]
    fn test_all_predicates_must_hold() {
        let bhsa = record("bhsa", "Hebrew", "Biblical", "");
        let query = QueryState {
            search: "bhsa".to_owned(),
            language: Filter::from_input("Hebrew"),
            category: Filter::from_input("Religious"),
            ..QueryState::default()
        };

        assert!(!query.matches(&bhsa));
    }

    #[test]
    fn test_sort_key_parse_and_display() {
        assert_eq!("Language".parse::<SortKey>().unwrap(), SortKey::Language);
        assert_eq!(SortKey::Period.to_string(), "period");
        assert!("size".parse::<SortKey>().is_err());
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_sort_key_serde() {
        let key: SortKey = serde_json::from_str(r#""category""#).unwrap();

        assert_eq!(key, SortKey::Category);
        assert_eq!(serde_json::to_string(&SortDirection::Desc).unwrap(), r#""desc""#);
    }
}
