//! Trailing-edge debounce for keystroke-driven input fields.
//!
//! Each keystroke updates the immediately-visible control value and re-arms
//! a single-shot commit timer; only the trailing edge (the last value before
//! the idle window elapses) is committed downstream. The "searching"
//! indicator is raised synchronously at keystroke time so the user sees
//! feedback before any network activity.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Text-input fields subject to debouncing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Term,
    Location,
}

/// A committed (post-debounce) field update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputCommit {
    pub field: InputField,
    pub value: String,
}

/// Per-field trailing-edge debouncer.
///
/// Pending timers are always aborted before rescheduling, so at most one
/// commit per field can fire per idle window. [`DebouncedInput::shutdown`]
/// aborts everything outstanding; no commit is delivered after it.
pub struct DebouncedInput {
    window: Duration,
    commit_tx: mpsc::UnboundedSender<InputCommit>,
    visible: HashMap<InputField, String>,
    searching: bool,
    pending: HashMap<InputField, JoinHandle<()>>,
}

impl DebouncedInput {
    /// Creates the controller and the receiving end of its commit channel.
    #[must_use]
    pub fn new(window: Duration) -> (Self, mpsc::UnboundedReceiver<InputCommit>) {
        let (commit_tx, commit_rx) = mpsc::unbounded_channel();
        (
            Self {
                window,
                commit_tx,
                visible: HashMap::new(),
                searching: false,
                pending: HashMap::new(),
            },
            commit_rx,
        )
    }

    /// Records a keystroke: the value becomes visible immediately, the
    /// field's commit timer is re-armed, and a non-empty value raises the
    /// searching indicator synchronously.
    pub fn on_change(&mut self, field: InputField, value: &str) {
        self.visible.insert(field, value.to_owned());
        if !value.trim().is_empty() {
            self.searching = true;
        }

        if let Some(previous) = self.pending.remove(&field) {
            previous.abort();
        }

        let tx = self.commit_tx.clone();
        let window = self.window;
        let value = value.to_owned();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let _ = tx.send(InputCommit { field, value });
        });
        self.pending.insert(field, handle);
    }

    /// The immediately-visible control value, so the input never lags.
    #[must_use]
    pub fn visible(&self, field: InputField) -> &str {
        self.visible.get(&field).map_or("", String::as_str)
    }

    /// True between a non-empty keystroke and the next committed update.
    #[must_use]
    pub fn searching(&self) -> bool {
        self.searching
    }

    /// Lowered by the session once a commit has been absorbed.
    pub fn clear_searching(&mut self) {
        self.searching = false;
    }

    /// Aborts all pending timers. No commit fires after this.
    pub fn shutdown(&mut self) {
        for (_, handle) in self.pending.drain() {
            handle.abort();
        }
    }
}

impl Drop for DebouncedInput {
    fn drop(&mut self) {
        self.shutdown();
    }
}
