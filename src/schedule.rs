//! Deferred-action queue
//!
//! A minimal list of (delay, action) entries driven by an external
//! monotonically advancing clock. Used to sequence the post-reset countdown
//! (spawn the first piece, then start the simulation); it is not a general
//! scheduler.
//!
//! Each entry fires at most once, strictly after its delay has elapsed, and
//! entries sharing a due time fire in registration order.

/// A pending action with its registration time and delay (seconds)
#[derive(Debug, Clone)]
struct Entry<A> {
    registered_at: f64,
    delay: f64,
    action: A,
}

/// FIFO-ordered deferred actions on a caller-advanced clock
#[derive(Debug, Clone)]
pub struct DeferredQueue<A> {
    now: f64,
    entries: Vec<Entry<A>>,
}

impl<A> DeferredQueue<A> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            entries: Vec::new(),
        }
    }

    /// Register an action to fire once `delay_seconds` have elapsed
    pub fn schedule(&mut self, action: A, delay_seconds: f64) {
        self.entries.push(Entry {
            registered_at: self.now,
            delay: delay_seconds,
            action,
        });
    }

    /// Advance the clock by `dt` seconds and drain every due action,
    /// preserving registration order
    pub fn advance(&mut self, dt: f64) -> Vec<A> {
        self.now += dt;
        let now = self.now;

        let entries = std::mem::take(&mut self.entries);
        let (due, pending): (Vec<Entry<A>>, Vec<Entry<A>>) = entries
            .into_iter()
            .partition(|entry| now - entry.registered_at > entry.delay);
        self.entries = pending;

        due.into_iter().map(|entry| entry.action).collect()
    }

    /// Drop all pending actions without firing them
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<A> Default for DeferredQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}
