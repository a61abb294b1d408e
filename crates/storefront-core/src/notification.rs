//! # Notification Slot
//!
//! A single-slot, last-write-wins holder for the transient message shown
//! after a cart mutation.
//!
//! ```text
//! show("A added")      show("B removed")      hide()
//!   ┌───────────┐        ┌───────────┐        ┌───────────┐
//!   │ A added   │ ─────► │ B removed │ ─────► │ B removed │
//!   │ visible   │        │ visible   │        │ hidden    │
//!   └───────────┘        └───────────┘        └───────────┘
//! ```
//!
//! There is no queue and no timer. Whoever renders the slot decides when to
//! call [`Notifier::hide`] (a close button, a UI timeout). Hiding keeps the
//! text so a fade-out can still draw it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Visual intent of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum NotificationKind {
    #[default]
    Success,
    Info,
    Error,
}

/// The message currently held by the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub visible: bool,

    /// When the message was last shown; `None` until the first `show`.
    #[ts(as = "Option<String>")]
    pub shown_at: Option<DateTime<Utc>>,
}

impl Default for Notification {
    fn default() -> Self {
        Notification {
            message: String::new(),
            kind: NotificationKind::Success,
            visible: false,
            shown_at: None,
        }
    }
}

/// Owner of the notification slot.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    slot: Notification,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the slot and makes it visible, whatever it held before.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.slot = Notification {
            message: message.into(),
            kind,
            visible: true,
            shown_at: Some(Utc::now()),
        };
    }

    /// Hides the slot but keeps its message and kind.
    pub fn hide(&mut self) {
        self.slot.visible = false;
    }

    pub fn current(&self) -> &Notification {
        &self.slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden_and_empty() {
        let notifier = Notifier::new();
        let slot = notifier.current();
        assert!(!slot.visible);
        assert!(slot.message.is_empty());
        assert_eq!(slot.kind, NotificationKind::Success);
        assert!(slot.shown_at.is_none());
    }

    #[test]
    fn test_show_sets_visible() {
        let mut notifier = Notifier::new();
        notifier.show("Lamp added to your cart!", NotificationKind::Success);

        let slot = notifier.current();
        assert!(slot.visible);
        assert_eq!(slot.message, "Lamp added to your cart!");
        assert!(slot.shown_at.is_some());
    }

    #[test]
    fn test_last_write_wins() {
        let mut notifier = Notifier::new();
        notifier.show("first", NotificationKind::Success);
        notifier.show("second", NotificationKind::Info);

        assert_eq!(notifier.current().message, "second");
        assert_eq!(notifier.current().kind, NotificationKind::Info);
    }

    #[test]
    fn test_show_overwrites_hidden_slot() {
        let mut notifier = Notifier::new();
        notifier.show("first", NotificationKind::Info);
        notifier.hide();
        notifier.show("second", NotificationKind::Error);

        assert!(notifier.current().visible);
        assert_eq!(notifier.current().message, "second");
    }

    #[test]
    fn test_hide_retains_message() {
        let mut notifier = Notifier::new();
        notifier.show("Your cart has been cleared", NotificationKind::Info);
        notifier.hide();

        let slot = notifier.current();
        assert!(!slot.visible);
        assert_eq!(slot.message, "Your cart has been cleared");
        assert_eq!(slot.kind, NotificationKind::Info);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&NotificationKind::Info).unwrap();
        assert_eq!(json, "\"info\"");
    }
}
