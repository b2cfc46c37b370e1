//! Synchronous notifications published by search trackers.
//!
//! Listeners are called on the publishing thread, in subscription order,
//! before the publishing method returns.

use std::sync::Arc;

use crate::state::{ObjectId, TrackerId};

/// Kind of event, for listeners that only care about one stream.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topic {
    TargetFound,
    SessionComplete,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// `tracker` recorded `object` as found.
    TargetFound { tracker: TrackerId, object: ObjectId },

    /// The find that brought `tracker` to its last target. Fired once.
    SessionComplete { tracker: TrackerId, elapsed: f32 },
}

impl SearchEvent {
    pub fn topic(&self) -> Topic {
        match self {
            SearchEvent::TargetFound { .. } => Topic::TargetFound,
            SearchEvent::SessionComplete { .. } => Topic::SessionComplete,
        }
    }

    pub fn tracker(&self) -> TrackerId {
        match self {
            SearchEvent::TargetFound { tracker, .. }
            | SearchEvent::SessionComplete { tracker, .. } => *tracker,
        }
    }
}

/// Receiver of [`SearchEvent`]s.
pub trait SearchListener: Send + Sync {
    fn on_event(&self, event: &SearchEvent);
}

impl<F> SearchListener for F
where
    F: Fn(&SearchEvent) + Send + Sync,
{
    fn on_event(&self, event: &SearchEvent) {
        self(event)
    }
}

/// Observer list with synchronous fan-out.
#[derive(Clone, Default)]
pub struct Listeners {
    listeners: Vec<Arc<dyn SearchListener>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Arc<dyn SearchListener>) {
        self.listeners.push(listener);
    }

    /// Subscribes a closure that only sees events on `topic`.
    pub fn subscribe_topic<F>(&mut self, topic: Topic, listener: F)
    where
        F: Fn(&SearchEvent) + Send + Sync + 'static,
    {
        self.subscribe(Arc::new(move |event: &SearchEvent| {
            if event.topic() == topic {
                listener(event);
            }
        }));
    }

    pub fn publish(&self, event: &SearchEvent) {
        if self.listeners.is_empty() {
            tracing::trace!(target: "hunt::events", topic = %event.topic(), "No listeners");
            return;
        }
        for listener in &self.listeners {
            listener.on_event(event);
        }
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl core::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn publish_fans_out_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = Listeners::new();
        for tag in ["first", "second"] {
            let log = Arc::clone(&log);
            listeners.subscribe(Arc::new(move |_: &SearchEvent| {
                log.lock().unwrap().push(tag);
            }));
        }

        listeners.publish(&SearchEvent::TargetFound {
            tracker: TrackerId::PLAYER,
            object: ObjectId(4),
        });
        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn topic_filter_skips_other_events() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = Listeners::new();
        let sink = Arc::clone(&seen);
        listeners.subscribe_topic(Topic::SessionComplete, move |event| {
            sink.lock().unwrap().push(event.clone());
        });

        listeners.publish(&SearchEvent::TargetFound {
            tracker: TrackerId(2),
            object: ObjectId(1),
        });
        listeners.publish(&SearchEvent::SessionComplete {
            tracker: TrackerId(2),
            elapsed: 1.5,
        });

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].tracker(), TrackerId(2));
        assert_eq!(seen[0].topic(), Topic::SessionComplete);
    }

    #[test]
    fn publishing_without_listeners_is_fine() {
        let listeners = Listeners::new();
        assert!(listeners.is_empty());
        listeners.publish(&SearchEvent::SessionComplete {
            tracker: TrackerId::PLAYER,
            elapsed: 0.0,
        });
    }
}
