use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    Like,
    Comment,
    Follow,
    Mention,
    Event,
    Connection,
    Message,
    Rsvp,
    Community,
}

impl NotificationCategory {
    pub const ALL: [NotificationCategory; 9] = [
        NotificationCategory::Like,
        NotificationCategory::Comment,
        NotificationCategory::Follow,
        NotificationCategory::Mention,
        NotificationCategory::Event,
        NotificationCategory::Connection,
        NotificationCategory::Message,
        NotificationCategory::Rsvp,
        NotificationCategory::Community,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationCategory::Like => "like",
            NotificationCategory::Comment => "comment",
            NotificationCategory::Follow => "follow",
            NotificationCategory::Mention => "mention",
            NotificationCategory::Event => "event",
            NotificationCategory::Connection => "connection",
            NotificationCategory::Message => "message",
            NotificationCategory::Rsvp => "rsvp",
            NotificationCategory::Community => "community",
        }
    }
}

impl fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NotificationCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

/// Tab filters shown on the notifications screen.
///
/// A filter groups one or more underlying categories; a category may belong to
/// more than one filter (`connection` shows up under both `follows` and
/// `connections`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayFilter {
    #[default]
    All,
    Likes,
    Comments,
    Follows,
    Events,
    Connections,
    Messages,
}

impl DisplayFilter {
    pub const ALL: [DisplayFilter; 7] = [
        DisplayFilter::All,
        DisplayFilter::Likes,
        DisplayFilter::Comments,
        DisplayFilter::Follows,
        DisplayFilter::Events,
        DisplayFilter::Connections,
        DisplayFilter::Messages,
    ];

    /// Underlying categories for this filter. `None` means no filtering.
    pub fn categories(&self) -> Option<&'static [NotificationCategory]> {
        use NotificationCategory::*;

        match self {
            DisplayFilter::All => None,
            DisplayFilter::Likes => Some(&[Like]),
            DisplayFilter::Comments => Some(&[Comment, Mention]),
            DisplayFilter::Follows => Some(&[Follow, Connection]),
            DisplayFilter::Events => Some(&[Event, Rsvp]),
            DisplayFilter::Connections => Some(&[Connection, Community]),
            DisplayFilter::Messages => Some(&[Message]),
        }
    }

    pub fn matches(&self, category: NotificationCategory) -> bool {
        self.categories()
            .is_none_or(|categories| categories.contains(&category))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayFilter::All => "all",
            DisplayFilter::Likes => "likes",
            DisplayFilter::Comments => "comments",
            DisplayFilter::Follows => "follows",
            DisplayFilter::Events => "events",
            DisplayFilter::Connections => "connections",
            DisplayFilter::Messages => "messages",
        }
    }
}

impl fmt::Display for DisplayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisplayFilter::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ModelError::UnknownFilter(s.to_string()))
    }
}
