use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One business listing as seen by the search pipeline.
///
/// Server-sourced and read-only to this core: the catalog crate maps the
/// upstream wire payload into this shape, applying the default fills
/// (`rating`/`total_reviews` are `0` when absent upstream — a missing
/// rating is never an error).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub id: String,
    pub name: String,
    pub city: String,
    pub address: String,
    pub logo: Option<String>,
    pub cover: Option<String>,
    pub description: String,
    /// Average rating in `[0, 5]`; `0.0` when the upstream omitted it.
    pub rating: f64,
    /// `0` when the upstream omitted it.
    pub total_reviews: u32,
    /// Canonical category code.
    pub category: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
