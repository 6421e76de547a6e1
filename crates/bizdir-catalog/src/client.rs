//! HTTP client for the catalog's `GET /business` endpoint.
//!
//! Wraps `reqwest` with the catalog-specific error taxonomy and typed
//! response deserialization. Non-2xx statuses are classified before any
//! decoding; a 2xx body that does not match the expected shape is a
//! [`CatalogError::Malformed`], never a silently-defaulted result.

use std::time::Duration;

use reqwest::{Client, Url};

use bizdir_core::{map_category, AppConfig, BusinessRecord, SearchCriteria};

use crate::error::CatalogError;
use crate::types::CatalogResponse;

/// One catalog request, derived from the fetch-relevant criteria fields.
///
/// `sort`/`min_rating` deliberately have no representation here: they are
/// client-side projections and must never reach the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessQuery {
    /// Trimmed search term; `None` when empty.
    pub term: Option<String>,
    /// Trimmed city filter; `None` when empty.
    pub city: Option<String>,
    /// Canonical category code; `None` when the mapper yields no constraint.
    pub business_type: Option<String>,
    pub limit: u32,
}

impl BusinessQuery {
    /// Builds the request from a criteria snapshot: terms are trimmed,
    /// empty fields are omitted, and the category label goes through the
    /// canonical mapper.
    #[must_use]
    pub fn from_criteria(criteria: &SearchCriteria, limit: u32) -> Self {
        let non_empty = |s: &str| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        };

        let business_type = match map_category(&criteria.category) {
            "" => None,
            code => Some(code.to_owned()),
        };

        Self {
            term: non_empty(&criteria.term),
            city: non_empty(&criteria.location),
            business_type,
            limit,
        }
    }
}

/// Client for the catalog REST API.
///
/// Manages the HTTP client and base URL. Use [`CatalogClient::new`] for
/// production or [`CatalogClient::with_base_url`] to point at a mock server
/// in tests.
pub struct CatalogClient {
    client: Client,
    business_url: Url,
}

impl CatalogClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Network`] if the underlying `reqwest::Client`
    ///   cannot be constructed.
    /// - [`CatalogError::InvalidBaseUrl`] if the configured base URL does
    ///   not parse.
    pub fn new(config: &AppConfig) -> Result<Self, CatalogError> {
        Self::with_base_url(
            &config.catalog_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with an explicit base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`CatalogClient::new`].
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: exactly one trailing slash so join() appends a path
        // segment instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| CatalogError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason,
        };
        let business_url = Url::parse(&normalised)
            .map_err(|e| invalid(e.to_string()))?
            .join("business")
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            business_url,
        })
    }

    /// Fetches active businesses matching `query` and maps them into domain
    /// records.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Network`] — transport failure (connection refused,
    ///   DNS, timeout).
    /// - [`CatalogError::Status`] — non-2xx HTTP status, with a best-effort
    ///   message from the body.
    /// - [`CatalogError::Malformed`] — 2xx but the body is not the expected
    ///   shape.
    pub async fn search_businesses(
        &self,
        query: &BusinessQuery,
    ) -> Result<Vec<BusinessRecord>, CatalogError> {
        let url = self.search_url(query);
        tracing::debug!(%url, "querying catalog");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let body = response.text().await?;
        let parsed: CatalogResponse =
            serde_json::from_str(&body).map_err(|e| CatalogError::Malformed {
                context: url.to_string(),
                source: e,
            })?;

        Ok(parsed
            .businesses
            .into_iter()
            .map(crate::types::WireBusiness::into_record)
            .collect())
    }

    /// Builds the full request URL with percent-encoded query parameters.
    /// Empty fields are omitted entirely, never sent as empty values.
    fn search_url(&self, query: &BusinessQuery) -> Url {
        let mut url = self.business_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("status", "active");
            if let Some(term) = &query.term {
                pairs.append_pair("search", term);
            }
            if let Some(city) = &query.city {
                pairs.append_pair("city", city);
            }
            if let Some(business_type) = &query.business_type {
                pairs.append_pair("businessType", business_type);
            }
            pairs.append_pair("limit", &query.limit.to_string());
        }
        url
    }
}

/// Best-effort extraction of a `message` field from an error body.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| "no details provided".to_owned())
}
