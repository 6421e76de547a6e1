//! Shareable query-string codec for search criteria.
//!
//! Recognized parameters: `service` (term), `location`, `category` (omitted
//! when "all"), `sort` (`rating|name|newest|oldest`), `rating`
//! (`all|2|3|4`). Defaults are omitted from the encoding; absent, unknown,
//! or malformed parameters decode to defaults silently. Encode and decode
//! are inverse for every representable criteria value.

use url::form_urlencoded;

use bizdir_core::{MinRating, SearchCriteria, SortKey};

/// Encodes criteria into a query string (no leading `?`), omitting fields
/// that hold their default value.
#[must_use]
pub fn encode_query(criteria: &SearchCriteria) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if !criteria.term.is_empty() {
        serializer.append_pair("service", &criteria.term);
    }
    if !criteria.location.is_empty() {
        serializer.append_pair("location", &criteria.location);
    }
    if !criteria.category_is_all() {
        serializer.append_pair("category", &criteria.category);
    }
    if criteria.sort != SortKey::default() {
        serializer.append_pair("sort", criteria.sort.as_str());
    }
    if criteria.min_rating != MinRating::default() {
        serializer.append_pair("rating", criteria.min_rating.as_str());
    }
    serializer.finish()
}

/// Decodes a query string (with or without a leading `?`) into criteria.
///
/// Unrecognized keys are ignored; unrecognized `sort`/`rating` values fall
/// back to their defaults. Never fails.
#[must_use]
pub fn decode_query(query: &str) -> SearchCriteria {
    let mut criteria = SearchCriteria::default();
    let raw = query.trim_start_matches('?');
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "service" => criteria.term = value.into_owned(),
            "location" => criteria.location = value.into_owned(),
            "category" => {
                criteria.category = if value == "all" {
                    String::new()
                } else {
                    value.into_owned()
                };
            }
            "sort" => criteria.sort = SortKey::parse_or_default(&value),
            "rating" => criteria.min_rating = MinRating::parse_or_default(&value),
            _ => {}
        }
    }
    criteria
}
