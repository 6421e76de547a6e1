//! Top-level search session: owns the store, the debounced input, the query
//! executor, and the projection cache, with a defined lifecycle (initial
//! query on start, timers and in-flight work cancelled on teardown).

use std::time::Duration;

use tokio::sync::mpsc;

use bizdir_catalog::{CatalogClient, CatalogError};
use bizdir_core::{
    map_category, AppConfig, BusinessRecord, MinRating, ProjectionCache, SearchCriteria, SortKey,
};

use crate::debounce::{DebouncedInput, InputCommit, InputField};
use crate::executor::QueryExecutor;
use crate::store::{CriteriaPatch, SearchStore};
use crate::view::{derive_view_state, ViewState};

/// User-initiated inputs to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// A keystroke in the term field (debounced).
    TermInput(String),
    /// A keystroke in the location field (debounced).
    LocationInput(String),
    /// A category picked from the taxonomy; the label is mapped to its
    /// canonical code before it touches criteria or the query string.
    /// "all" clears.
    CategorySelected(String),
    /// Client-side only; never triggers a request.
    SortSelected(SortKey),
    /// Client-side only; never triggers a request.
    RatingSelected(MinRating),
    /// The externally observed query string changed (back/forward).
    QueryStringChanged(String),
    /// Re-issue the current criteria after an error.
    Retry,
}

/// One mounted instance of the search-and-browse pipeline.
pub struct SearchSession {
    store: SearchStore,
    input: DebouncedInput,
    commits: mpsc::UnboundedReceiver<InputCommit>,
    executor: QueryExecutor,
    projection: ProjectionCache,
}

impl SearchSession {
    /// Builds a session against the configured catalog, initializing
    /// criteria from a shareable query string (pass `""` for a fresh
    /// session).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the catalog client cannot be constructed.
    pub fn new(config: &AppConfig, initial_query: &str) -> Result<Self, CatalogError> {
        let client = CatalogClient::new(config)?;
        Ok(Self::with_client(client, config, initial_query))
    }

    /// Builds a session around an existing client (tests point this at a
    /// mock server).
    #[must_use]
    pub fn with_client(client: CatalogClient, config: &AppConfig, initial_query: &str) -> Self {
        let (input, commits) = DebouncedInput::new(Duration::from_millis(config.debounce_ms));
        Self {
            store: SearchStore::init_from_query(initial_query),
            input,
            commits,
            executor: QueryExecutor::new(
                client,
                config.result_limit,
                Duration::from_millis(config.min_loading_ms),
            ),
            projection: ProjectionCache::new(),
        }
    }

    /// Issues the initial query for the mounted criteria.
    pub async fn start(&mut self) {
        let criteria = self.store.criteria().clone();
        self.executor.submit(&criteria).await;
    }

    /// Routes one user event through the pipeline.
    pub async fn handle(&mut self, event: SearchEvent) {
        match event {
            SearchEvent::TermInput(value) => self.input.on_change(InputField::Term, &value),
            SearchEvent::LocationInput(value) => {
                self.input.on_change(InputField::Location, &value);
            }
            SearchEvent::CategorySelected(label) => {
                let code = map_category(&label).to_owned();
                self.apply_and_fetch(CriteriaPatch::category(code)).await;
            }
            SearchEvent::SortSelected(sort) => self.store.apply(CriteriaPatch::sort(sort)),
            SearchEvent::RatingSelected(min_rating) => {
                self.store.apply(CriteriaPatch::min_rating(min_rating));
            }
            SearchEvent::QueryStringChanged(query) => {
                if self.store.reconcile_external(&query) {
                    let criteria = self.store.criteria().clone();
                    self.executor.submit(&criteria).await;
                }
            }
            SearchEvent::Retry => self.executor.retry().await,
        }
    }

    /// Drains debounce commits into the store and issues queries for any
    /// fetch-relevant change. Called by the event loop after timers fire.
    pub async fn pump_commits(&mut self) {
        while let Ok(commit) = self.commits.try_recv() {
            let patch = match commit.field {
                InputField::Term => CriteriaPatch::term(commit.value),
                InputField::Location => CriteriaPatch::location(commit.value),
            };
            self.apply_and_fetch(patch).await;
            self.store.commit_deferred();
            self.input.clear_searching();
        }
    }

    async fn apply_and_fetch(&mut self, patch: CriteriaPatch) {
        let before = self.store.criteria().clone();
        self.store.apply(patch);
        if !self.store.criteria().fetch_fields_eq(&before) {
            let criteria = self.store.criteria().clone();
            self.executor.submit(&criteria).await;
        }
    }

    /// Current view state and the projected (sorted, filtered) records.
    /// Recomputes the projection only when the result set or display
    /// criteria changed.
    pub async fn view(&mut self) -> (ViewState, Vec<BusinessRecord>) {
        let snapshot = self.executor.snapshot().await;
        let criteria = self.store.criteria();
        let projected = self
            .projection
            .project(
                snapshot.version,
                &snapshot.records,
                criteria.sort,
                criteria.min_rating,
            )
            .to_vec();
        let state = derive_view_state(&snapshot, projected.len(), self.input.searching());
        (state, projected)
    }

    /// The immediately-visible value of a text field.
    #[must_use]
    pub fn visible(&self, field: InputField) -> &str {
        self.input.visible(field)
    }

    #[must_use]
    pub fn criteria(&self) -> &SearchCriteria {
        self.store.criteria()
    }

    /// The shareable query string for the current criteria.
    #[must_use]
    pub fn share_query(&self) -> String {
        self.store.synced_query()
    }

    /// Awaits the latest request's resolution. Test and one-shot-CLI
    /// convenience; an interactive event loop just polls [`Self::view`].
    pub async fn settle(&mut self) {
        self.executor.wait_for_current().await;
    }

    /// Unmount: cancels pending debounce timers and the in-flight request.
    /// No state mutation can occur afterwards.
    pub fn teardown(&mut self) {
        self.input.shutdown();
        self.executor.teardown();
    }
}
