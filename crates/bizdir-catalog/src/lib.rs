//! HTTP client for the catalog API.
//!
//! Translates [`bizdir_core::SearchCriteria`] into `GET /business` queries,
//! validates the response shape at the boundary, and maps the wire payload
//! into [`bizdir_core::BusinessRecord`] with the documented default fills.

mod client;
mod error;
mod types;

pub use client::{BusinessQuery, CatalogClient};
pub use error::CatalogError;
pub use types::{CatalogResponse, WireBusiness};
