//! Catalog API response types for `GET /business`.
//!
//! ## Observed shape
//!
//! ```json
//! { "businesses": [ { "_id", "businessName", "location": {"city","address"},
//!   "images": {"logo","cover"}, "description",
//!   "rating": {"average","totalReviews"}, "businessType",
//!   "contact": {"phone","email"}, "createdAt" } ] }
//! ```
//!
//! Listings created before the review feature shipped carry no `rating`
//! object at all; newer ones may carry `"rating": {}`. Both decode to
//! `average = 0.0`, `totalReviews = 0` — a missing rating is data, not an
//! error, and such records participate in rating filter/sort as explicit
//! zeros.
//!
//! `location`, `images`, and `contact` are similarly defaultable: sparse
//! listings omit whole sub-objects rather than sending nulls per field.
//! Only `_id` and `businessName` are required; a record without them (or a
//! body without `businesses`) fails decoding and surfaces as
//! [`crate::CatalogError::Malformed`].

use chrono::{DateTime, Utc};
use serde::Deserialize;

use bizdir_core::BusinessRecord;

/// Top-level success body. `businesses` is required: a 2xx response without
/// it is malformed, not an empty result.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub businesses: Vec<WireBusiness>,
}

/// One business as sent by the catalog.
#[derive(Debug, Deserialize)]
pub struct WireBusiness {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "businessName")]
    pub business_name: String,

    #[serde(default)]
    pub location: WireLocation,

    #[serde(default)]
    pub images: WireImages,

    #[serde(default)]
    pub description: String,

    /// Absent on unreviewed listings; defaults to all zeros.
    #[serde(default)]
    pub rating: WireRating,

    /// Canonical category code. May be absent on legacy records.
    #[serde(rename = "businessType", default)]
    pub business_type: String,

    #[serde(default)]
    pub contact: WireContact,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireLocation {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireImages {
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireRating {
    #[serde(default)]
    pub average: f64,
    #[serde(rename = "totalReviews", default)]
    pub total_reviews: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireContact {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl WireBusiness {
    /// Maps the wire shape into the domain record, applying the default
    /// fills for absent sub-objects.
    #[must_use]
    pub fn into_record(self) -> BusinessRecord {
        BusinessRecord {
            id: self.id,
            name: self.business_name,
            city: self.location.city,
            address: self.location.address,
            logo: self.images.logo,
            cover: self.images.cover,
            description: self.description,
            rating: self.rating.average,
            total_reviews: self.rating.total_reviews,
            category: self.business_type,
            phone: self.contact.phone,
            email: self.contact.email,
            created_at: self.created_at,
        }
    }
}
