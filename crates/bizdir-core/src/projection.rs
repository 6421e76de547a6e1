//! Client-side projection of an already-fetched result set.
//!
//! `project` applies the rating filter and sort order without touching the
//! network or mutating its input; the same inputs always yield the same
//! ordered list. [`ProjectionCache`] memoizes on result-set identity so the
//! transform can run on every render without redundant work.

use chrono::{DateTime, Utc};

use crate::criteria::{MinRating, SortKey};
use crate::model::BusinessRecord;

/// Filters and sorts `records` per the display criteria.
///
/// - Keeps a record iff `rating >= min_rating.threshold()` (`All` keeps
///   everything).
/// - Sorting is stable with respect to the original fetch order for ties:
///   `Rating` descending, `Name` ascending case-insensitive,
///   `Newest`/`Oldest` by creation timestamp with missing timestamps
///   treated as the epoch.
///
/// Total over all inputs; never panics, never mutates `records`.
#[must_use]
pub fn project(
    records: &[BusinessRecord],
    sort: SortKey,
    min_rating: MinRating,
) -> Vec<BusinessRecord> {
    let mut kept: Vec<BusinessRecord> = records
        .iter()
        .filter(|r| r.rating >= min_rating.threshold())
        .cloned()
        .collect();

    match sort {
        SortKey::Rating => kept.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Name => kept.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortKey::Newest => kept.sort_by(|a, b| created_key(b).cmp(&created_key(a))),
        SortKey::Oldest => kept.sort_by(|a, b| created_key(a).cmp(&created_key(b))),
    }

    kept
}

fn created_key(r: &BusinessRecord) -> DateTime<Utc> {
    r.created_at.unwrap_or(DateTime::UNIX_EPOCH)
}

/// Memoizes [`project`] on `(result-set version, sort, min_rating)`.
///
/// The result set is replaced wholesale on every successful query, so a
/// monotonically bumped version number is sufficient identity — there is no
/// incremental patching to track.
#[derive(Debug, Default)]
pub struct ProjectionCache {
    key: Option<(u64, SortKey, MinRating)>,
    cached: Vec<BusinessRecord>,
}

impl ProjectionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the projection for `records`, recomputing only when the
    /// version or display criteria changed since the last call.
    pub fn project(
        &mut self,
        version: u64,
        records: &[BusinessRecord],
        sort: SortKey,
        min_rating: MinRating,
    ) -> &[BusinessRecord] {
        let key = (version, sort, min_rating);
        if self.key != Some(key) {
            self.cached = project(records, sort, min_rating);
            self.key = Some(key);
        }
        &self.cached
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn record(id: &str, name: &str, rating: f64, created_year: Option<i32>) -> BusinessRecord {
        BusinessRecord {
            id: id.to_owned(),
            name: name.to_owned(),
            city: "Lahore".to_owned(),
            address: String::new(),
            logo: None,
            cover: None,
            description: String::new(),
            rating,
            total_reviews: 0,
            category: "plumbing".to_owned(),
            phone: None,
            email: None,
            created_at: created_year.map(|y| Utc.with_ymd_and_hms(y, 1, 1, 0, 0, 0).unwrap()),
        }
    }

    fn ids(records: &[BusinessRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn rating_filter_keeps_only_records_at_or_above_threshold() {
        let set = vec![
            record("a", "A", 4.5, None),
            record("b", "B", 2.0, None),
            record("c", "C", 3.9, None),
        ];
        let out = project(&set, SortKey::Rating, MinRating::Three);
        assert_eq!(ids(&out), vec!["a", "c"]);
    }

    #[test]
    fn min_rating_all_keeps_zero_rated_records() {
        let set = vec![record("a", "A", 0.0, None)];
        let out = project(&set, SortKey::Rating, MinRating::All);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn rating_sort_is_descending_and_stable_for_ties() {
        let set = vec![
            record("first", "X", 4.0, None),
            record("top", "Y", 5.0, None),
            record("second", "Z", 4.0, None),
        ];
        let out = project(&set, SortKey::Rating, MinRating::All);
        // "first" and "second" tie on rating; fetch order must be preserved.
        assert_eq!(ids(&out), vec!["top", "first", "second"]);
    }

    #[test]
    fn name_sort_is_case_insensitive_ascending() {
        let set = vec![
            record("1", "zeta plumbing", 0.0, None),
            record("2", "Alpha Plumbing", 0.0, None),
            record("3", "beta plumbing", 0.0, None),
        ];
        let out = project(&set, SortKey::Name, MinRating::All);
        assert_eq!(ids(&out), vec!["2", "3", "1"]);
    }

    #[test]
    fn newest_and_oldest_treat_missing_timestamp_as_epoch() {
        let set = vec![
            record("old", "A", 0.0, Some(2020)),
            record("missing", "B", 0.0, None),
            record("new", "C", 0.0, Some(2024)),
        ];
        let newest = project(&set, SortKey::Newest, MinRating::All);
        assert_eq!(ids(&newest), vec!["new", "old", "missing"]);

        let oldest = project(&set, SortKey::Oldest, MinRating::All);
        assert_eq!(ids(&oldest), vec!["missing", "old", "new"]);
    }

    #[test]
    fn projection_is_deterministic_and_does_not_mutate_input() {
        let set = vec![
            record("a", "A", 4.0, Some(2021)),
            record("b", "B", 5.0, Some(2023)),
        ];
        let before = set.clone();
        let first = project(&set, SortKey::Newest, MinRating::All);
        let second = project(&set, SortKey::Newest, MinRating::All);
        assert_eq!(first, second);
        assert_eq!(set, before);
    }

    #[test]
    fn cache_recomputes_only_on_key_change() {
        let set_v1 = vec![record("a", "A", 4.0, None)];
        let mut cache = ProjectionCache::new();

        let out = cache.project(1, &set_v1, SortKey::Rating, MinRating::All).to_vec();
        assert_eq!(ids(&out), vec!["a"]);

        // Same key: served from cache even if the slice differs (identity is
        // the version, not the contents).
        let unrelated = vec![record("zzz", "Z", 1.0, None)];
        let cached = cache.project(1, &unrelated, SortKey::Rating, MinRating::All).to_vec();
        assert_eq!(ids(&cached), vec!["a"]);

        // Version bump: recomputed.
        let fresh = cache.project(2, &unrelated, SortKey::Rating, MinRating::All).to_vec();
        assert_eq!(ids(&fresh), vec!["zzz"]);

        // Display-criteria change alone also recomputes.
        let filtered = cache.project(2, &unrelated, SortKey::Rating, MinRating::Four).to_vec();
        assert!(filtered.is_empty());
    }
}
