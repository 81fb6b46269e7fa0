//! Publish-subscribe hub for machine state changes
//!
//! Every mutation publishes a [`MachineEvent`] plus the post-transition
//! snapshot, so observers track the machine without polling it.

use crate::events::MachineEvent;
use crate::machine::MachineSnapshot;

/// Subscriber callback.
///
/// Runs on the thread performing the mutation (or the scheduler thread for
/// reveals) and must not call back into the machine.
pub type Subscriber = Box<dyn Fn(&MachineEvent, &MachineSnapshot) + Send + Sync>;

/// Handle identifying a registered subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// Subscriber registry for machine state changes
#[derive(Default)]
pub struct StateHub {
    next_id: u64,
    subscribers: Vec<(SubscriberId, Subscriber)>,
}

impl StateHub {
    /// Create an empty hub
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber
    pub fn subscribe(&mut self, subscriber: Subscriber) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        id
    }

    /// Remove a subscriber; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Deliver an event and snapshot to every subscriber
    pub fn publish(&self, event: &MachineEvent, snapshot: &MachineSnapshot) {
        log::trace!("publish {} to {} subscriber(s)", event.name(), self.subscribers.len());
        for (_, subscriber) in &self.subscribers {
            subscriber(event, snapshot);
        }
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
