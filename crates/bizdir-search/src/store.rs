//! Single source of truth for the current search criteria, kept in sync
//! with the shareable query string.
//!
//! Sync is asymmetric by design: structural filters (`category`, `sort`,
//! `rating`) reach the query string immediately, while `term`/`location`
//! are deferred to the debounce boundary so typing does not thrash the
//! addressable history. For out-of-band navigation the query string is
//! authoritative; for in-page edits the in-memory criteria is, until the
//! next sync point.

use bizdir_core::{MinRating, SearchCriteria, SortKey};

use crate::query_string::{decode_query, encode_query};

/// A partial criteria update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct CriteriaPatch {
    pub term: Option<String>,
    pub location: Option<String>,
    /// A label or code; the "all" sentinel clears the constraint.
    pub category: Option<String>,
    pub sort: Option<SortKey>,
    pub min_rating: Option<MinRating>,
}

impl CriteriaPatch {
    #[must_use]
    pub fn term(value: impl Into<String>) -> Self {
        Self {
            term: Some(value.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn location(value: impl Into<String>) -> Self {
        Self {
            location: Some(value.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn category(value: impl Into<String>) -> Self {
        Self {
            category: Some(value.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn sort(value: SortKey) -> Self {
        Self {
            sort: Some(value),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn min_rating(value: MinRating) -> Self {
        Self {
            min_rating: Some(value),
            ..Self::default()
        }
    }
}

/// Criteria owner with bidirectional query-string reconciliation.
#[derive(Debug)]
pub struct SearchStore {
    criteria: SearchCriteria,
    /// `term` as currently reflected in the query string (may lag while
    /// the user is typing).
    synced_term: String,
    /// `location` as currently reflected in the query string.
    synced_location: String,
}

impl SearchStore {
    /// Initializes from the addressable query string. Malformed or
    /// unrecognized values fall back to defaults silently.
    #[must_use]
    pub fn init_from_query(query: &str) -> Self {
        let criteria = decode_query(query);
        Self {
            synced_term: criteria.term.clone(),
            synced_location: criteria.location.clone(),
            criteria,
        }
    }

    #[must_use]
    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// The shareable query string as currently addressed: structural fields
    /// are live, text fields reflect the last committed values.
    #[must_use]
    pub fn synced_query(&self) -> String {
        let addressed = SearchCriteria {
            term: self.synced_term.clone(),
            location: self.synced_location.clone(),
            ..self.criteria.clone()
        };
        encode_query(&addressed)
    }

    /// Merges a patch into the current criteria.
    ///
    /// A fresh non-empty `term` or `location` resets `category` to "all"
    /// unless the same patch also sets a category: a bare keyword/location
    /// search always starts unconstrained by category.
    pub fn apply(&mut self, patch: CriteriaPatch) {
        let fresh_text = patch
            .term
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
            || patch
                .location
                .as_deref()
                .is_some_and(|l| !l.trim().is_empty());

        if let Some(term) = patch.term {
            self.criteria.term = term;
        }
        if let Some(location) = patch.location {
            self.criteria.location = location;
        }

        match patch.category {
            Some(category) => {
                self.criteria.category = if category == "all" {
                    String::new()
                } else {
                    category
                };
            }
            None if fresh_text => self.criteria.category = String::new(),
            None => {}
        }

        if let Some(sort) = patch.sort {
            self.criteria.sort = sort;
        }
        if let Some(min_rating) = patch.min_rating {
            self.criteria.min_rating = min_rating;
        }
    }

    /// Syncs deferred text fields into the query string. Called at the
    /// debounce boundary, never per keystroke.
    pub fn commit_deferred(&mut self) {
        self.synced_term = self.criteria.term.clone();
        self.synced_location = self.criteria.location.clone();
    }

    /// Absorbs an externally observed query string (back/forward
    /// navigation). The query string wins whenever it differs from memory.
    /// Returns true when the in-memory criteria changed.
    pub fn reconcile_external(&mut self, query: &str) -> bool {
        let incoming = decode_query(query);
        if incoming == self.criteria {
            return false;
        }
        self.synced_term = incoming.term.clone();
        self.synced_location = incoming.location.clone();
        self.criteria = incoming;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_parses_recognized_parameters() {
        let store =
            SearchStore::init_from_query("service=plumber&location=Lahore&category=plumbing");
        assert_eq!(store.criteria().term, "plumber");
        assert_eq!(store.criteria().location, "Lahore");
        assert_eq!(store.criteria().category, "plumbing");
    }

    #[test]
    fn init_from_garbage_falls_back_to_defaults() {
        let store = SearchStore::init_from_query("sort=banana&rating=-3&bogus=1");
        assert_eq!(store.criteria(), &SearchCriteria::default());
        assert_eq!(store.synced_query(), "");
    }

    #[test]
    fn structural_patch_syncs_immediately() {
        let mut store = SearchStore::init_from_query("");
        store.apply(CriteriaPatch::sort(SortKey::Name));
        store.apply(CriteriaPatch::min_rating(MinRating::Three));
        assert_eq!(store.synced_query(), "sort=name&rating=3");
    }

    #[test]
    fn text_patch_is_deferred_until_commit() {
        let mut store = SearchStore::init_from_query("");
        store.apply(CriteriaPatch::term("plumber"));
        assert_eq!(store.criteria().term, "plumber");
        assert_eq!(store.synced_query(), "", "term must not sync per keystroke");

        store.commit_deferred();
        assert_eq!(store.synced_query(), "service=plumber");
    }

    #[test]
    fn fresh_term_resets_previously_chosen_category() {
        let mut store = SearchStore::init_from_query("category=electrical");
        store.apply(CriteriaPatch::term("plumber"));
        assert!(store.criteria().category_is_all());
    }

    #[test]
    fn fresh_location_resets_category_too() {
        let mut store = SearchStore::init_from_query("category=electrical");
        store.apply(CriteriaPatch::location("Karachi"));
        assert!(store.criteria().category_is_all());
    }

    #[test]
    fn patch_setting_both_text_and_category_keeps_the_category() {
        let mut store = SearchStore::init_from_query("");
        store.apply(CriteriaPatch {
            term: Some("wiring".to_owned()),
            category: Some("electrical".to_owned()),
            ..CriteriaPatch::default()
        });
        assert_eq!(store.criteria().category, "electrical");
    }

    #[test]
    fn clearing_text_does_not_reset_category() {
        let mut store = SearchStore::init_from_query("category=electrical");
        store.apply(CriteriaPatch::term(""));
        assert_eq!(store.criteria().category, "electrical");
    }

    #[test]
    fn category_all_sentinel_clears_the_constraint() {
        let mut store = SearchStore::init_from_query("category=plumbing");
        store.apply(CriteriaPatch::category("all"));
        assert!(store.criteria().category_is_all());
    }

    #[test]
    fn external_query_string_is_authoritative() {
        let mut store = SearchStore::init_from_query("service=plumber");
        store.apply(CriteriaPatch::term("electrician"));

        let changed = store.reconcile_external("service=painter&sort=name");
        assert!(changed);
        assert_eq!(store.criteria().term, "painter");
        assert_eq!(store.criteria().sort, SortKey::Name);
        assert_eq!(store.synced_query(), "service=painter&sort=name");
    }

    #[test]
    fn reconcile_with_identical_criteria_reports_no_change() {
        let mut store = SearchStore::init_from_query("service=plumber");
        assert!(!store.reconcile_external("service=plumber"));
    }
}
