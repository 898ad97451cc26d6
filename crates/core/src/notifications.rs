//! Queue of user-facing notifications
//!
//! Failed requests push an entry here so a front end can surface them,
//! independently of the error returned to the caller.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Color attached to error notifications
pub const ERROR_COLOR: &str = "error-container";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Notification {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Some(ERROR_COLOR.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.color.as_deref() == Some(ERROR_COLOR)
    }
}

/// Shared FIFO of notifications. Clones refer to the same queue.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    queue: Arc<Mutex<VecDeque<Notification>>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, notification: Notification) {
        self.lock().push_back(notification);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.add(Notification::info(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(Notification::error(message));
    }

    /// Remove and return everything queued so far, oldest first
    pub fn drain(&self) -> Vec<Notification> {
        self.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Poisoning is ignored; entries are plain data
    fn lock(&self) -> MutexGuard<'_, VecDeque<Notification>> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
