//! Notifications emitted by the history manager.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the history did with a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryAction {
    /// A new command was performed.
    Done,

    /// The most recent command was reverted.
    Undone,

    /// The most recently undone command was executed again.
    Redone,
}

impl HistoryAction {
    /// Returns the lowercase label used for metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryAction::Done => "do",
            HistoryAction::Undone => "undo",
            HistoryAction::Redone => "redo",
        }
    }
}

impl std::fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryAction::Done => write!(f, "Do"),
            HistoryAction::Undone => write!(f, "Undo"),
            HistoryAction::Redone => write!(f, "Redo"),
        }
    }
}

/// One notification, fired once per successful state-changing history call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEvent {
    /// What happened.
    pub action: HistoryAction,

    /// Label of the command involved.
    pub command: String,

    /// When it happened.
    pub occurred_at: DateTime<Utc>,
}

impl HistoryEvent {
    /// Creates an event stamped with the current time.
    pub fn new(action: HistoryAction, command: impl Into<String>) -> Self {
        Self {
            action,
            command: command.into(),
            occurred_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for HistoryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.action, self.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_log_line() {
        let event = HistoryEvent::new(HistoryAction::Undone, "ApplyCoupon(10%)");
        assert_eq!(event.to_string(), "[Undo] ApplyCoupon(10%)");
    }

    #[test]
    fn test_metric_labels() {
        assert_eq!(HistoryAction::Done.as_str(), "do");
        assert_eq!(HistoryAction::Undone.as_str(), "undo");
        assert_eq!(HistoryAction::Redone.as_str(), "redo");
    }

    #[test]
    fn test_serialization() {
        let event = HistoryEvent::new(HistoryAction::Redone, "AddItem(BK-001 ×2)");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["action"], "redone");
        assert_eq!(json["command"], "AddItem(BK-001 ×2)");

        let deserialized: HistoryEvent = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, event);
    }
}
