//! Search-and-browse orchestration.
//!
//! Wires the pipeline together: user input flows through the debounced
//! input controller into the [`store::SearchStore`] (kept in sync with the
//! shareable query string), fetch-relevant changes reach the
//! [`executor::QueryExecutor`] (one outstanding cancellable request), and
//! the fetched result set is re-sorted/re-filtered client-side without
//! touching the network.

pub mod cancel;
pub mod debounce;
pub mod executor;
pub mod query_string;
pub mod session;
pub mod store;
pub mod view;

pub use cancel::CancelToken;
pub use debounce::{DebouncedInput, InputCommit, InputField};
pub use executor::{QueryExecutor, ResultSnapshot};
pub use query_string::{decode_query, encode_query};
pub use session::{SearchEvent, SearchSession};
pub use store::{CriteriaPatch, SearchStore};
pub use view::ViewState;
