//! Transient notifications shown to the shopper.
//!
//! The list keeps insertion order for display. Removal by ID is idempotent so
//! a manual dismissal and an expiring timer can race safely.

use chrono::{DateTime, Utc};
use jewelcraft_core::NotificationId;
use serde::{Deserialize, Serialize};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

const fn default_auto_dismiss() -> bool {
    true
}

/// A request to show a notification. The store assigns the ID and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    #[serde(default)]
    pub kind: NotificationKind,
    #[serde(default)]
    pub title: Option<String>,
    pub message: String,
    #[serde(default = "default_auto_dismiss")]
    pub auto_dismiss: bool,
}

impl NotificationRequest {
    #[must_use]
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: None,
            message: message.into(),
            auto_dismiss: true,
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }

    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message).with_title(title)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Keep the notification until it is dismissed explicitly.
    #[must_use]
    pub const fn persistent(mut self) -> Self {
        self.auto_dismiss = false;
        self
    }
}

/// A notification currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub auto_dismiss: bool,
}

/// Notifications in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: NotificationId,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: NotificationId::new(1),
        }
    }
}

impl Notifications {
    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// ID the next pushed notification will receive.
    #[must_use]
    pub const fn next_id(&self) -> NotificationId {
        self.next_id
    }

    /// Append a notification and return its newly assigned ID.
    pub fn push(&mut self, request: NotificationRequest, now: DateTime<Utc>) -> NotificationId {
        let id = self.next_id;
        self.next_id = id.next();
        self.items.push(Notification {
            id,
            kind: request.kind,
            title: request.title,
            message: request.message,
            created_at: now,
            auto_dismiss: request.auto_dismiss,
        });
        id
    }

    /// Remove a notification. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}
