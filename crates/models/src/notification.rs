use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::category::NotificationCategory;
use crate::error::ModelError;

/// A single social notification as handed over by the activity feed.
///
/// `occurred_at` keeps the timestamp exactly as received; it is parsed at
/// query time so a malformed value can still be displayed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub id: String,
    pub category: NotificationCategory,
    pub actor: Actor,
    pub summary: String,
    #[serde(default)]
    pub occurred_at: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub actionable: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<NotificationAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_entity_id: Option<String>,
}

/// Snapshot of the user who triggered a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    #[serde(default)]
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    pub label: String,
    pub kind: ActionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Accept,
    Reject,
    View,
    Reply,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Accept => "accept",
            ActionKind::Reject => "reject",
            ActionKind::View => "view",
            ActionKind::Reply => "reply",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accept" => Ok(ActionKind::Accept),
            "reject" => Ok(ActionKind::Reject),
            "view" => Ok(ActionKind::View),
            "reply" => Ok(ActionKind::Reply),
            other => Err(ModelError::UnknownActionKind(other.to_string())),
        }
    }
}

impl NotificationAction {
    pub fn new(label: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }
}

impl NotificationEvent {
    pub fn new(
        id: impl Into<String>,
        category: NotificationCategory,
        actor: Actor,
        summary: impl Into<String>,
        occurred_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            actor,
            summary: summary.into(),
            occurred_at: occurred_at.into(),
            read: false,
            actionable: false,
            actions: Vec::new(),
            related_entity_id: None,
        }
    }

    pub fn with_actions(mut self, actions: Vec<NotificationAction>) -> Self {
        self.actionable = !actions.is_empty();
        self.actions = actions;
        self
    }

    pub fn with_related_entity(mut self, entity_id: impl Into<String>) -> Self {
        self.related_entity_id = Some(entity_id.into());
        self
    }

    pub fn is_unread(&self) -> bool {
        !self.read
    }

    /// Ingestion-boundary check. The aggregator itself never rejects events.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.id.trim().is_empty() {
            return Err(ModelError::Validation("id must not be empty".to_string()));
        }
        if self.actor.id.trim().is_empty() {
            return Err(ModelError::Validation(format!(
                "notification {} has an actor without id",
                self.id
            )));
        }
        if self.actionable && self.actions.is_empty() {
            return Err(ModelError::Validation(format!(
                "notification {} is actionable but has no actions",
                self.id
            )));
        }
        Ok(())
    }
}

impl Actor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: None,
            verified: false,
        }
    }
}
