// Fan-out notification mechanism for element events

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// High-level notifications raised by a player element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The source finished preparing
    Prepared,

    /// Playback reached the end of the media
    Completion,

    /// Loading or playback failed
    Error { message: String },
}

/// Player callback trait
/// Implementations should be lightweight and non-blocking
pub trait PlayerCallback: Send + Sync {
    /// Called once per event, in the order the backend emitted them
    fn on_event(&self, event: &PlayerEvent);
}

impl<F> PlayerCallback for F
where
    F: Fn(&PlayerEvent) + Send + Sync,
{
    fn on_event(&self, event: &PlayerEvent) {
        self(event)
    }
}

/// Handle returned by [`NotificationHub::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback manager for handling multiple subscribers
///
/// Subscribing never replaces an earlier subscriber; every subscriber sees
/// every event.
pub struct NotificationHub {
    callbacks: Mutex<Vec<(SubscriptionId, Arc<dyn PlayerCallback>)>>,
    next_id: AtomicU64,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self {
            callbacks: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn subscribe(&self, callback: Arc<dyn PlayerCallback>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.callbacks.lock().push((id, callback));
        id
    }

    /// Removes a subscriber. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut callbacks = self.callbacks.lock();
        let before = callbacks.len();
        callbacks.retain(|(existing, _)| *existing != id);
        callbacks.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.callbacks.lock().len()
    }

    pub fn dispatch(&self, event: PlayerEvent) {
        // Snapshot so a subscriber may (un)subscribe from inside its callback
        let callbacks: Vec<_> = self
            .callbacks
            .lock()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();

        log::debug!("Dispatching {:?} to {} subscriber(s)", event, callbacks.len());
        for callback in callbacks {
            callback.on_event(&event);
        }
    }
}

impl Default for NotificationHub {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationHub")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Callback that records every event it receives
#[derive(Default)]
pub struct RecordingCallback {
    events: Mutex<Vec<PlayerEvent>>,
}

impl RecordingCallback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<PlayerEvent> {
        self.events.lock().clone()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    /// Returns the recorded events and empties the log.
    pub fn take_events(&self) -> Vec<PlayerEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl PlayerCallback for RecordingCallback {
    fn on_event(&self, event: &PlayerEvent) {
        self.events.lock().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn fan_out_to_every_subscriber() {
        let hub = NotificationHub::new();
        let first = Arc::new(RecordingCallback::new());
        let second = Arc::new(RecordingCallback::new());
        hub.subscribe(first.clone());
        hub.subscribe(second.clone());

        hub.dispatch(PlayerEvent::Prepared);
        hub.dispatch(PlayerEvent::Completion);

        let expected = vec![PlayerEvent::Prepared, PlayerEvent::Completion];
        assert_eq!(first.get_events(), expected);
        assert_eq!(second.get_events(), expected);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let hub = NotificationHub::new();
        let recorder = Arc::new(RecordingCallback::new());
        let id = hub.subscribe(recorder.clone());

        assert!(hub.unsubscribe(id));
        assert!(!hub.unsubscribe(id));
        hub.dispatch(PlayerEvent::Prepared);

        assert!(recorder.get_events().is_empty());
        assert_eq!(hub.subscriber_count(), 0);
    }

    #[test]
    fn closures_are_callbacks() {
        let hub = NotificationHub::new();
        let errors = Arc::new(AtomicUsize::new(0));
        let counter = errors.clone();
        hub.subscribe(Arc::new(move |event: &PlayerEvent| {
            if matches!(event, PlayerEvent::Error { .. }) {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        }));

        hub.dispatch(PlayerEvent::Error {
            message: "boom".to_string(),
        });
        hub.dispatch(PlayerEvent::Prepared);

        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn take_events_drains_the_log() {
        let recorder = RecordingCallback::new();
        recorder.on_event(&PlayerEvent::Prepared);

        assert_eq!(recorder.take_events(), vec![PlayerEvent::Prepared]);
        assert!(recorder.get_events().is_empty());
    }
}
