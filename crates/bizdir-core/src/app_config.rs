/// Application configuration for the directory search pipeline.
///
/// Every field has a documented default; see `config.rs` for the
/// corresponding `BIZDIR_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the catalog API, e.g. `http://localhost:5000`.
    pub catalog_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Trailing-edge debounce window for text input, in milliseconds.
    pub debounce_ms: u64,
    /// How long the loading indicator stays asserted after a response
    /// arrives, in milliseconds.
    pub min_loading_ms: u64,
    /// Page size requested from the catalog.
    pub result_limit: u32,
    pub log_level: String,
}
