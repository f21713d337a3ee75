//! Debounced search query
//!
//! Keeps the raw per-keystroke query and a settled copy that only changes
//! once the input has been stable for the configured delay. At most one
//! settle timer is outstanding per instance; scheduling a new one always
//! cancels the previous one, so the last `set_query` in a window wins.
//!
//! Cancellation is deterministic: every scheduled timer carries the
//! generation it was created for and only publishes while that generation
//! is still current. Superseding, clearing and dropping all bump the
//! generation under the same lock the timer checks.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Default settle delay (300ms)
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// State shared with the settle timer
struct Shared {
    /// Generation of the most recent schedule/cancel
    generation: Mutex<u64>,
    /// Settled query
    settled: watch::Sender<String>,
}

/// Raw and settled search query with a cancellable settle timer
///
/// Must be created inside a Tokio runtime; the timer is spawned on the
/// runtime that was current at construction.
pub struct DebouncedQuery {
    /// Raw query, updated on every call
    query: String,

    /// Settle delay
    delay: Duration,

    /// Generation counter and settled value
    shared: Arc<Shared>,

    /// Outstanding settle timer
    pending: Option<JoinHandle<()>>,

    /// Runtime timers are spawned on
    handle: Handle,
}

impl DebouncedQuery {
    /// Create an empty query with the given settle delay
    ///
    /// # Panics
    ///
    /// Panics when called outside of a Tokio runtime.
    pub fn new(delay: Duration) -> Self {
        Self::with_handle(delay, Handle::current())
    }

    /// Create an empty query spawning its timer on `handle`
    pub fn with_handle(delay: Duration, handle: Handle) -> Self {
        let (settled, _) = watch::channel(String::new());
        Self {
            query: String::new(),
            delay,
            shared: Arc::new(Shared {
                generation: Mutex::new(0),
                settled,
            }),
            pending: None,
            handle,
        }
    }

    /// Raw query as last typed
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Settled query (trimmed, or empty)
    pub fn debounced_query(&self) -> String {
        self.shared.settled.borrow().clone()
    }

    /// Settle delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Watch settled values
    ///
    /// Receivers are only notified when the settled value actually changes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.shared.settled.subscribe()
    }

    /// Whether a settle timer is outstanding
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
    }

    /// Update the raw query and (re)schedule settling
    ///
    /// Whitespace-only input clears the settled value immediately without
    /// scheduling a timer. A zero delay settles synchronously.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        let trimmed = self.query.trim().to_owned();

        if trimmed.is_empty() {
            self.supersede(Some(String::new()));
            trace!("Query emptied, settled value cleared");
            return;
        }

        if self.delay.is_zero() {
            self.supersede(Some(trimmed));
            return;
        }

        let generation = self.supersede(None);
        let shared = Arc::clone(&self.shared);
        let delay = self.delay;

        trace!(generation, ?delay, "Scheduling query settle");

        self.pending = Some(self.handle.spawn(async move {
            tokio::time::sleep(delay).await;

            let current = shared.generation.lock();
            if *current == generation {
                debug!(query = %trimmed, "Query settled");
                publish(&shared.settled, trimmed);
            } else {
                trace!(generation, current = *current, "Dropping superseded settle");
            }
        }));
    }

    /// Settle the current query now, cancelling any pending timer
    pub fn flush(&mut self) {
        let trimmed = self.query.trim().to_owned();
        self.supersede(Some(trimmed));
    }

    /// Cancel any pending timer and empty both values
    pub fn clear(&mut self) {
        self.query.clear();
        self.supersede(Some(String::new()));
        trace!("Query cleared");
    }

    /// Invalidate outstanding timers, optionally publishing a value
    ///
    /// Returns the new generation.
    fn supersede(&mut self, settle: Option<String>) -> u64 {
        let mut generation = self.shared.generation.lock();
        *generation = generation.wrapping_add(1);

        if let Some(handle) = self.pending.take() {
            handle.abort();
        }

        if let Some(value) = settle {
            publish(&self.shared.settled, value);
        }

        *generation
    }
}

impl Drop for DebouncedQuery {
    fn drop(&mut self) {
        self.supersede(None);
    }
}

impl std::fmt::Debug for DebouncedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DebouncedQuery")
            .field("query", &self.query)
            .field("settled", &*self.shared.settled.borrow())
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}

/// Replace the settled value, notifying watchers only on change
fn publish(settled: &watch::Sender<String>, value: String) {
    settled.send_if_modified(|current| {
        if *current == value {
            false
        } else {
            *current = value;
            true
        }
    });
}
