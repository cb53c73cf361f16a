//! Toast notifications: what they carry and the ordered queue holding them.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// What raised the notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Price,
    Technical,
    News,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct NotificationId(String);

impl NotificationId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Everything the caller supplies; id and timestamp are assigned on add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationDraft {
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl NotificationDraft {
    pub fn new(
        category: NotificationCategory,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self { category, title: title.into(), message: message.into(), severity }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    /// Creation time, ms since epoch.
    pub timestamp: u64,
}

/// Insertion-ordered notifications. No priorities, no capacity limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: NotificationId, draft: NotificationDraft, timestamp: u64) -> &Notification {
        self.items.push(Notification {
            id,
            category: draft.category,
            title: draft.title,
            message: draft.message,
            severity: draft.severity,
            timestamp,
        });
        &self.items[self.items.len() - 1]
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, id: &NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| &n.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, id: &NotificationId) -> bool {
        self.items.iter().any(|n| &n.id == id)
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
