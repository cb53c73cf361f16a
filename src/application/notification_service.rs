use gloo::timers::callback::Timeout;
use leptos::*;
use uuid::Uuid;

use crate::domain::logging::{LogComponent, get_time_provider};
use crate::domain::notifications::{Notification, NotificationDraft, NotificationId, NotificationQueue};
use crate::log_trace;

/// Toast queue with automatic expiry.
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
    ttl_ms: u32,
}

impl NotificationService {
    pub fn new(ttl_ms: u32) -> Self {
        Self { queue: create_rw_signal(NotificationQueue::new()), ttl_ms }
    }

    /// Append a notification and schedule its removal after the TTL.
    pub fn add(&self, draft: NotificationDraft) -> NotificationId {
        let id = NotificationId::new(Uuid::new_v4().to_string());
        let timestamp = get_time_provider().current_timestamp();
        self.queue.update(|queue| {
            queue.push(id.clone(), draft, timestamp);
        });
        log_trace!(LogComponent::Application("Notifications"), "🔔 added {}", id);

        let queue = self.queue;
        let expired = id.clone();
        Timeout::new(self.ttl_ms, move || {
            // the owning scope may already be gone
            queue.try_update(|queue| queue.remove(&expired));
        })
        .forget();

        id
    }

    /// Unknown ids are ignored.
    pub fn remove(&self, id: &NotificationId) {
        self.queue.update(|queue| {
            queue.remove(id);
        });
    }

    pub fn clear(&self) {
        self.queue.update(NotificationQueue::clear);
    }

    pub fn items(&self) -> Vec<Notification> {
        self.queue.with(|queue| queue.items().to_vec())
    }

    pub fn len(&self) -> usize {
        self.queue.with(NotificationQueue::len)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.with(NotificationQueue::is_empty)
    }

    pub fn contains(&self, id: &NotificationId) -> bool {
        self.queue.with(|queue| queue.contains(id))
    }
}
