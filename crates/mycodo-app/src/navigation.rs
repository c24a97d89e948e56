//! Navigation state: the current location plus back/forward history
//!
//! There is exactly one `Navigator`, owned by [`crate::state::AppState`].
//! Every transition publishes the new [`Location`] on a `watch` channel;
//! consumers hold a receiver from [`Navigator::subscribe`] and re-derive
//! what they show when it reports a change.

use tokio::sync::watch;

use mycodo_core::prelude::*;

/// Oldest entries are dropped beyond this many
pub const MAX_HISTORY: usize = 50;

/// Location published to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Owned history stack with a cursor
#[derive(Debug)]
pub struct Navigator {
    entries: Vec<String>,
    index: usize,
    tx: watch::Sender<Location>,
}

impl Navigator {
    /// Start at `initial_path` with a single history entry
    pub fn new(initial_path: impl Into<String>) -> Self {
        let initial_path = initial_path.into();
        let (tx, _rx) = watch::channel(Location::new(initial_path.clone()));
        Self {
            entries: vec![initial_path],
            index: 0,
            tx,
        }
    }

    /// Current path
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Subscription point for location changes.
    ///
    /// The returned receiver has already seen the current location; it
    /// reports a change on the next transition.
    pub fn subscribe(&self) -> watch::Receiver<Location> {
        self.tx.subscribe()
    }

    /// Push a new history entry and move to it.
    ///
    /// Entries ahead of the cursor (reachable with `forward`) are discarded,
    /// and the oldest entry goes once the history exceeds [`MAX_HISTORY`].
    pub fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        self.entries.truncate(self.index + 1);
        self.entries.push(path);
        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
        }
        self.index = self.entries.len() - 1;
        info!("Navigate to {}", self.current());
        self.publish();
    }

    /// Step back one entry. Returns `false` (and publishes nothing) at the start.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.index -= 1;
        debug!("Back to {}", self.current());
        self.publish();
        true
    }

    /// Step forward one entry. Returns `false` (and publishes nothing) at the end.
    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.index += 1;
        debug!("Forward to {}", self.current());
        self.publish();
        true
    }

    /// Re-publish the current location without touching history
    pub fn reload(&mut self) {
        debug!("Reload {}", self.current());
        self.publish();
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    fn publish(&self) {
        // send_replace never fails, even with no live receivers
        self.tx.send_replace(Location::new(self.current()));
    }
}
