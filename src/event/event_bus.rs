// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event bus for broadcasting signal events.

use tokio::sync::broadcast;

use super::SignalEvent;

/// Default channel capacity for the event bus.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Event bus for broadcasting signal events to multiple subscribers.
///
/// The `EventBus` uses tokio's broadcast channel, so every subscriber gets
/// its own copy of each event. A subscriber that falls more than the
/// capacity behind loses the oldest events and receives
/// `RecvError::Lagged`.
///
/// # Examples
///
/// ```
/// use traffic_signal::event::{ControllerId, EventBus, SignalEvent};
/// use traffic_signal::types::ClockValue;
///
/// let bus = EventBus::new();
/// let mut rx = bus.subscribe();
///
/// bus.publish(SignalEvent::interrupted(ControllerId::new(), ClockValue::MIDNIGHT));
/// assert!(rx.try_recv().unwrap().is_interruption());
/// ```
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<SignalEvent>,
}

impl EventBus {
    /// Creates a new event bus with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a new event bus with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to signal events published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SignalEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes an event to all subscribers.
    ///
    /// Without subscribers the event is discarded.
    pub fn publish(&self, event: SignalEvent) {
        // No subscribers is not an error
        let _ = self.sender.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ControllerId;
    use crate::types::{ClockValue, Phase};

    #[test]
    fn new_bus_has_no_subscribers() {
        assert_eq!(EventBus::new().subscriber_count(), 0);
    }

    #[test]
    fn subscribe_and_drop_track_count() {
        let bus = EventBus::new();
        let rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        drop(rx1);
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[tokio::test]
    async fn publish_delivers_to_multiple_subscribers() {
        let bus = EventBus::new();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        let id = ControllerId::new();
        let at = ClockValue::new(4, 0, 0).unwrap();
        bus.publish(SignalEvent::phase_changed(id, Phase::Green, at, false));

        assert_eq!(rx1.recv().await.unwrap().phase(), Some(Phase::Green));
        assert_eq!(rx2.recv().await.unwrap().controller(), id);
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::with_capacity(4);
        bus.publish(SignalEvent::interrupted(
            ControllerId::new(),
            ClockValue::MIDNIGHT,
        ));
    }

    #[test]
    fn clone_shares_same_channel() {
        let bus1 = EventBus::new();
        let bus2 = bus1.clone();

        let _rx = bus1.subscribe();
        assert_eq!(bus2.subscriber_count(), 1);
    }
}
