//! Observable single-slot state holders.

use std::sync::Arc;

use tokio::sync::watch;

/// A single-slot state holder read by the UI layer.
///
/// Holds `None` until the first write. Writers replace the whole value,
/// never merge. Readers either snapshot with [`Cell::get`] or subscribe for
/// change notification; clones share the same slot.
#[derive(Debug, Clone)]
pub struct Cell<V> {
    slot: Arc<watch::Sender<Option<V>>>,
}

impl<V: Clone> Cell<V> {
    pub(crate) fn new() -> Self {
        let (slot, _) = watch::channel(None);
        Self {
            slot: Arc::new(slot),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> Option<V> {
        self.slot.borrow().clone()
    }

    /// Receiver that wakes whenever the slot changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<V>> {
        self.slot.subscribe()
    }

    pub(crate) fn set(&self, value: V) {
        self.slot.send_replace(Some(value));
    }

    pub(crate) fn clear(&self) {
        self.slot.send_replace(None);
    }
}
