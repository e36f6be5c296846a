//! Cross-view notification bus.
//!
//! Replaces the ad-hoc window-level "ticket booked" broadcast of the original
//! client with a typed publish/subscribe channel: payloads are enum variants,
//! and subscriber lifecycle is explicit — `subscribe` registers, dropping the
//! returned [`Subscription`] unregisters. Publishing never blocks; delivery
//! is per-subscriber unbounded queues drained by the consumer.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

/// Notices carried across views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A ticket was booked for the given event; dependent counters should
    /// refresh from the server.
    TicketBooked { event_id: i64 },
}

/// Bus over notices of type `T`.
#[derive(Debug)]
pub struct Bus<T> {
    inner: Arc<Mutex<Registry<T>>>,
}

#[derive(Debug)]
struct Registry<T> {
    next_id: u64,
    subscribers: Vec<(u64, mpsc::UnboundedSender<T>)>,
}

impl<T: Clone> Default for Bus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Bus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Bus<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Registry {
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Registers a subscriber. Dropping the returned subscription
    /// unregisters it.
    pub fn subscribe(&self) -> Subscription<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut registry = self.inner.lock().expect("bus registry poisoned");
        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.push((id, tx));
        Subscription {
            id,
            rx,
            inner: Arc::clone(&self.inner),
        }
    }

    /// Delivers a notice to every live subscriber.
    pub fn publish(&self, notice: &T) {
        let mut registry = self.inner.lock().expect("bus registry poisoned");
        registry
            .subscribers
            .retain(|(_, tx)| tx.send(notice.clone()).is_ok());
    }

    /// Number of live subscribers (for diagnostics and tests).
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .expect("bus registry poisoned")
            .subscribers
            .len()
    }
}

/// A live bus subscription. Unregisters itself on drop.
#[derive(Debug)]
pub struct Subscription<T> {
    id: u64,
    rx: mpsc::UnboundedReceiver<T>,
    inner: Arc<Mutex<Registry<T>>>,
}

impl<T> Subscription<T> {
    /// Receives the next notice, or `None` once the bus is gone.
    pub async fn recv(&mut self) -> Option<T> {
        self.rx.recv().await
    }

    /// Non-blocking receive for synchronous drains.
    pub fn try_recv(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Ok(mut registry) = self.inner.lock() {
            registry.subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_reaches_all_subscribers() {
        let bus: Bus<Notice> = Bus::new();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        bus.publish(&Notice::TicketBooked { event_id: 7 });

        assert_eq!(first.try_recv(), Some(Notice::TicketBooked { event_id: 7 }));
        assert_eq!(second.try_recv(), Some(Notice::TicketBooked { event_id: 7 }));
        assert_eq!(first.try_recv(), None);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let bus: Bus<Notice> = Bus::new();
        let first = bus.subscribe();
        let _second = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);

        drop(first);
        assert_eq!(bus.subscriber_count(), 1);

        // Publishing with a dropped subscriber neither panics nor leaks.
        bus.publish(&Notice::TicketBooked { event_id: 1 });
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn test_publish_without_subscribers_is_noop() {
        let bus: Bus<Notice> = Bus::new();
        bus.publish(&Notice::TicketBooked { event_id: 1 });
    }

    #[tokio::test]
    async fn test_async_recv_sees_published_notice() {
        let bus: Bus<Notice> = Bus::new();
        let mut sub = bus.subscribe();
        bus.publish(&Notice::TicketBooked { event_id: 42 });
        assert_eq!(sub.recv().await, Some(Notice::TicketBooked { event_id: 42 }));
    }
}
