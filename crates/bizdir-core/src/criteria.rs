//! Search criteria value types.
//!
//! A [`SearchCriteria`] snapshot controls both what is fetched from the
//! catalog (`term`, `location`, `category`) and how the fetched set is
//! displayed (`sort`, `min_rating`). The display-only fields never trigger a
//! network request; see [`SearchCriteria::fetch_fields_eq`].

use serde::{Deserialize, Serialize};

/// Client-side sort order for a fetched result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Descending by average rating (default).
    #[default]
    Rating,
    /// Ascending by business name, case-insensitive.
    Name,
    /// Descending by creation timestamp.
    Newest,
    /// Ascending by creation timestamp.
    Oldest,
}

impl SortKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::Name => "name",
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
        }
    }

    /// Parses the external encoding. Unrecognized input falls back to the
    /// default rather than erroring, matching the silent-fallback rule for
    /// shareable query parameters.
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "name" => SortKey::Name,
            "newest" => SortKey::Newest,
            "oldest" => SortKey::Oldest,
            _ => SortKey::Rating,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum-rating filter applied client-side after fetch.
///
/// Encoded externally as `"all" | "2" | "3" | "4"`, in serde as well as in
/// the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MinRating {
    /// No filter (default).
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
}

impl MinRating {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MinRating::All => "all",
            MinRating::Two => "2",
            MinRating::Three => "3",
            MinRating::Four => "4",
        }
    }

    /// Parses the external encoding; unrecognized input falls back to `All`.
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "2" => MinRating::Two,
            "3" => MinRating::Three,
            "4" => MinRating::Four,
            _ => MinRating::All,
        }
    }

    /// The inclusive rating threshold a record must meet to be kept.
    #[must_use]
    pub fn threshold(self) -> f64 {
        match self {
            MinRating::All => 0.0,
            MinRating::Two => 2.0,
            MinRating::Three => 3.0,
            MinRating::Four => 4.0,
        }
    }
}

impl std::fmt::Display for MinRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable snapshot of the user's search intent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    /// Free-text search term. May be empty.
    pub term: String,
    /// Free-text city/area filter. May be empty.
    pub location: String,
    /// Canonical category code, or empty meaning "all categories".
    pub category: String,
    pub sort: SortKey,
    pub min_rating: MinRating,
}

impl SearchCriteria {
    /// True when no category constraint is active.
    #[must_use]
    pub fn category_is_all(&self) -> bool {
        self.category.is_empty() || self.category == "all"
    }

    /// Compares only the fields that affect the catalog request.
    ///
    /// `sort` and `min_rating` are applied client-side and must never
    /// trigger a new network query.
    #[must_use]
    pub fn fetch_fields_eq(&self, other: &Self) -> bool {
        self.term == other.term
            && self.location == other.location
            && self.category == other.category
    }
}
