//! Transient toast notifications.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};

/// How long a toast stays up.
pub const NOTIFICATION_TTL_SECS: i64 = 5;

/// Oldest toasts are dropped beyond this many.
const MAX_NOTIFICATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

impl NotificationLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "toast toast-info",
            NotificationLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at >= Duration::seconds(NOTIFICATION_TTL_SECS)
    }
}

/// Queue of visible toasts, newest last.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    items: VecDeque<Notification>,
    next_id: u64,
}

impl Notifications {
    pub fn push(
        &mut self,
        level: NotificationLevel,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> u64 {
        self.next_id += 1;
        self.items.push_back(Notification {
            id: self.next_id,
            level,
            message: message.into(),
            created_at: now,
        });
        while self.items.len() > MAX_NOTIFICATIONS {
            self.items.pop_front();
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    /// Drops expired toasts, returning how many went.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.items.len();
        self.items.retain(|n| !n.is_expired(now));
        before - self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.items.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_after_ttl() {
        let start = Utc::now();
        let mut toasts = Notifications::default();
        toasts.push(NotificationLevel::Error, "offline", start);
        toasts.push(NotificationLevel::Info, "later", start + Duration::seconds(3));

        assert_eq!(toasts.expire(start + Duration::seconds(4)), 0);
        assert_eq!(toasts.expire(start + Duration::seconds(5)), 1);
        assert_eq!(toasts.last().unwrap().message, "later");
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let now = Utc::now();
        let mut toasts = Notifications::default();
        for i in 0..7 {
            toasts.push(NotificationLevel::Info, format!("n{}", i), now);
        }
        assert_eq!(toasts.len(), MAX_NOTIFICATIONS);
        assert_eq!(toasts.iter().next().unwrap().message, "n2");
    }

    #[test]
    fn test_dismiss() {
        let mut toasts = Notifications::default();
        let id = toasts.push(NotificationLevel::Info, "hi", Utc::now());
        toasts.dismiss(id);
        assert!(toasts.is_empty());
    }
}
