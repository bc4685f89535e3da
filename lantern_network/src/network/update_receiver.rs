use super::*;

use std::cell::RefCell;

/// Holds state changes until the caller is ready to process them, so that they
/// can be relayed after the change is complete.
#[derive(Default)]
pub struct SavedUpdateReceiver {
    saved: RefCell<Vec<NetworkStateChange>>,
}

impl NetworkUpdateReceiver for SavedUpdateReceiver {
    fn notify_update(&self, update: NetworkStateChange) {
        self.saved.borrow_mut().push(update);
    }
}

impl SavedUpdateReceiver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything saved so far, in the order it was received
    pub fn take(&self) -> Vec<NetworkStateChange> {
        self.saved.take()
    }

    pub fn playback(&self, into: &dyn NetworkUpdateReceiver) {
        for update in self.take() {
            into.notify_update(update);
        }
    }
}
