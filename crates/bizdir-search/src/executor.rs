//! Cancellable catalog query execution with supersession.
//!
//! One request may be outstanding at a time. Issuing a new request bumps a
//! generation counter and cancels the previous token; a superseded request's
//! resolution — success or failure, whenever it arrives — is a guaranteed
//! no-op because the generation is re-checked under the state lock at the
//! single point where responses are applied.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use bizdir_catalog::{BusinessQuery, CatalogClient, CatalogError};
use bizdir_core::{BusinessRecord, SearchCriteria};

use crate::cancel::CancelToken;

/// Read-only copy of the executor's shared result state.
#[derive(Debug, Clone, Default)]
pub struct ResultSnapshot {
    /// Most recently applied result set, replaced wholesale per response.
    pub records: Vec<BusinessRecord>,
    /// Bumped on every wholesale replacement; identity key for projection
    /// memoization.
    pub version: u64,
    /// Human-readable message of the last genuine failure, if any.
    pub error: Option<String>,
    /// True from request issuance until the minimum-loading window elapses.
    pub loading: bool,
    /// True once any request has resolved and been applied.
    pub attempted: bool,
}

/// Issues catalog queries and guarantees only the latest one can affect
/// visible state.
pub struct QueryExecutor {
    client: Arc<CatalogClient>,
    state: Arc<Mutex<ResultSnapshot>>,
    latest: Arc<AtomicU64>,
    limit: u32,
    min_loading: Duration,
    cancel: Option<CancelToken>,
    last_issued: Option<BusinessQuery>,
    current_task: Option<JoinHandle<()>>,
}

impl QueryExecutor {
    #[must_use]
    pub fn new(client: CatalogClient, limit: u32, min_loading: Duration) -> Self {
        Self {
            client: Arc::new(client),
            state: Arc::new(Mutex::new(ResultSnapshot::default())),
            latest: Arc::new(AtomicU64::new(0)),
            limit,
            min_loading,
            cancel: None,
            last_issued: None,
            current_task: None,
        }
    }

    /// Issues a request for `criteria`, superseding anything in flight.
    ///
    /// Submitting criteria whose fetch-relevant fields equal the last issued
    /// query is a no-op: no duplicate request, no visible flicker.
    pub async fn submit(&mut self, criteria: &SearchCriteria) {
        let query = BusinessQuery::from_criteria(criteria, self.limit);
        if self.last_issued.as_ref() == Some(&query) {
            tracing::debug!("identical fetch criteria; skipping duplicate request");
            return;
        }
        self.issue(query).await;
    }

    /// Re-issues the last query unchanged (the error-state retry
    /// affordance). Bypasses duplicate suppression deliberately.
    pub async fn retry(&mut self) {
        if let Some(query) = self.last_issued.clone() {
            self.issue(query).await;
        }
    }

    async fn issue(&mut self, query: BusinessQuery) {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        // Supersede: the old request's completion handler becomes a no-op.
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
        let token = CancelToken::new();
        self.cancel = Some(token.clone());
        self.last_issued = Some(query.clone());

        self.state.lock().await.loading = true;

        tracing::debug!(generation, ?query, "issuing catalog query");

        let client = Arc::clone(&self.client);
        let state = Arc::clone(&self.state);
        let latest = Arc::clone(&self.latest);
        let min_loading = self.min_loading;

        let handle = tokio::spawn(async move {
            let outcome = tokio::select! {
                () = token.cancelled() => Err(CatalogError::Cancelled),
                result = client.search_businesses(&query) => result,
            };

            // Cancelled requests resolve silently: not an error, no state
            // change, regardless of what the transport eventually returns.
            if matches!(outcome, Err(CatalogError::Cancelled)) {
                tracing::debug!(generation, "request cancelled before resolution");
                return;
            }

            // Hold the loading indicator for the minimum display window so
            // rapid successive updates do not flash.
            tokio::time::sleep(min_loading).await;

            let mut s = state.lock().await;
            if latest.load(Ordering::SeqCst) != generation {
                tracing::debug!(generation, "superseded response discarded");
                return;
            }

            s.attempted = true;
            s.loading = false;
            match outcome {
                Ok(records) => {
                    tracing::debug!(generation, count = records.len(), "result set replaced");
                    s.records = records;
                    s.version += 1;
                    s.error = None;
                }
                Err(err) => {
                    tracing::warn!(generation, error = %err, "catalog query failed");
                    s.error = Some(err.user_message());
                }
            }
        });
        self.current_task = Some(handle);
    }

    /// Clones the current shared state.
    pub async fn snapshot(&self) -> ResultSnapshot {
        self.state.lock().await.clone()
    }

    /// Awaits the most recently issued request's resolution (including its
    /// minimum-loading window). Superseded requests settle on their own.
    pub async fn wait_for_current(&mut self) {
        if let Some(handle) = self.current_task.take() {
            // An aborted or panicked task changes nothing observable here.
            let _ = handle.await;
        }
    }

    /// Cancels any in-flight request. Its completion handler will no-op.
    ///
    /// The generation bump covers the case where the response has already
    /// won the select and is holding in the minimum-loading window: the
    /// application point re-checks the generation and discards it.
    pub fn teardown(&mut self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }
}
