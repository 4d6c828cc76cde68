// Push-style subscriptions backed by channels.
//
// Purpose
// - Replace callback registration with a receiver plus an explicit detachment handle.
//
// Responsibilities
// - Keep one unbounded sender per live subscription, tagged with the key it was registered for.
// - Let publishers build a snapshot per subscriber key.
// - Stop delivery once a subscription is detached or its receiver is gone.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, mpsc};

struct Subscriber<T> {
    key: String,
    sender: mpsc::UnboundedSender<T>,
}

pub struct SubscriberRegistry<T> {
    next_id: AtomicU64,
    subscribers: Mutex<HashMap<u64, Subscriber<T>>>,
}

impl<T> Default for SubscriberRegistry<T> {
    fn default() -> Self {
        Self {
            next_id: AtomicU64::new(0),
            subscribers: Mutex::new(HashMap::new()),
        }
    }
}

impl<T: Send + 'static> SubscriberRegistry<T> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Registers a subscriber and queues `initial` as its first delivery.
    pub async fn register(self: &Arc<Self>, key: impl Into<String>, initial: T) -> Subscription<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = mpsc::unbounded_channel();
        // The receiver is still in scope, so this send cannot fail.
        let _ = sender.send(initial);
        self.subscribers.lock().await.insert(
            id,
            Subscriber {
                key: key.into(),
                sender,
            },
        );
        Subscription {
            id,
            receiver,
            registry: Arc::clone(self),
        }
    }

    pub async fn publish_with<F>(&self, mut snapshot: F)
    where
        F: FnMut(&str) -> T,
    {
        let mut guard = self.subscribers.lock().await;
        guard.retain(|_, subscriber| subscriber.sender.send(snapshot(&subscriber.key)).is_ok());
    }

    pub async fn len(&self) -> usize {
        self.subscribers.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn detach(&self, id: u64) {
        self.subscribers.lock().await.remove(&id);
    }
}

/// A live subscription. Delivery continues until [`Subscription::detach`] is called.
pub struct Subscription<T: Send + 'static> {
    id: u64,
    receiver: mpsc::UnboundedReceiver<T>,
    registry: Arc<SubscriberRegistry<T>>,
}

impl<T: Send + 'static> Subscription<T> {
    pub async fn recv(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    pub fn try_recv(&mut self) -> Option<T> {
        self.receiver.try_recv().ok()
    }

    pub async fn detach(self) {
        self.registry.detach(self.id).await;
    }
}
