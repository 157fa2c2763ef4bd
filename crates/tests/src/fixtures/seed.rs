use chrono::TimeDelta;
use linsta_models::{ActionKind, Actor, NotificationAction, NotificationCategory, NotificationEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::test_app::TestApp;

impl TestApp {
    /// Build one notification with a unique id.
    pub fn notification(&self, category: NotificationCategory, occurred_at: &str) -> NotificationEvent {
        let id = format!("ntf_{}", uuid::Uuid::new_v4().simple());
        NotificationEvent::new(
            id,
            category,
            Actor::new("user_sarah", "Sarah Johnson"),
            format!("{category} notification"),
            occurred_at,
        )
    }

    /// The mixed feed the notification screen is usually exercised with.
    ///
    /// Unread: like x2, comment, mention, event, rsvp, connection, community,
    /// message. Read: like, follow, event.
    pub fn seed_feed(&self) -> Vec<NotificationEvent> {
        use NotificationCategory::*;

        let unread = [
            (Like, TimeDelta::minutes(5)),
            (Like, TimeDelta::hours(3)),
            (Comment, TimeDelta::minutes(45)),
            (Mention, TimeDelta::days(1)),
            (Event, TimeDelta::days(2)),
            (Rsvp, TimeDelta::days(3)),
            (Connection, TimeDelta::days(4)),
            (Community, TimeDelta::days(10)),
            (Message, TimeDelta::seconds(20)),
        ];
        let read = [
            (Like, TimeDelta::days(40)),
            (Follow, TimeDelta::hours(6)),
            (Event, TimeDelta::days(5)),
        ];

        let mut feed: Vec<NotificationEvent> = unread
            .into_iter()
            .map(|(category, delta)| self.notification(category, &self.ago(delta)))
            .collect();

        feed.extend(read.into_iter().map(|(category, delta)| {
            let mut event = self.notification(category, &self.ago(delta));
            event.read = true;
            event
        }));

        if let Some(connection) = feed.iter_mut().find(|e| e.category == Connection) {
            connection.actionable = true;
            connection.actions = vec![
                NotificationAction::new("Accept", ActionKind::Accept),
                NotificationAction::new("Ignore", ActionKind::Reject),
            ];
        }

        feed
    }

    /// Deterministic pseudo-random feed spanning roughly two months, with a
    /// sprinkling of missing and malformed timestamps.
    pub fn seed_random_feed(&self, seed: u64, len: usize) -> Vec<NotificationEvent> {
        let mut rng = StdRng::seed_from_u64(seed);

        (0..len)
            .map(|_| {
                let category = NotificationCategory::ALL[rng.random_range(0..NotificationCategory::ALL.len())];
                let occurred_at = match rng.random_range(0..20) {
                    0 => String::new(),
                    1 => "soon".to_string(),
                    _ => self.ago(TimeDelta::minutes(rng.random_range(-120..60 * 24 * 60))),
                };
                let mut event = self.notification(category, &occurred_at);
                event.read = rng.random_bool(0.4);
                event
            })
            .collect()
    }
}

/// A snapshot in the shape the mobile client's data source hands over.
pub const SNAPSHOT_JSON: &str = r#"[
  {
    "id": "1",
    "category": "like",
    "actor": { "id": "user_1", "name": "Sarah Johnson", "avatar": "avatars/sarah.png", "verified": true },
    "summary": "liked your post about React Native development",
    "occurred_at": "2024-06-15T11:58:00Z",
    "read": false,
    "related_entity_id": "post_42"
  },
  {
    "id": "2",
    "category": "connection",
    "actor": { "id": "user_2", "name": "Michael Chen", "avatar": null },
    "summary": "wants to connect with you",
    "occurred_at": "2024-06-14T09:15:00Z",
    "actionable": true,
    "actions": [
      { "label": "Accept", "kind": "accept" },
      { "label": "Ignore", "kind": "reject" }
    ]
  },
  {
    "id": "3",
    "category": "rsvp",
    "actor": { "id": "user_3", "name": "Emily Davis", "avatar": null },
    "summary": "is attending Tech Meetup 2024",
    "occurred_at": "2024-06-11T18:00:00Z",
    "read": true,
    "related_entity_id": "event_7"
  },
  {
    "id": "4",
    "category": "message",
    "actor": { "id": "user_4", "name": "Alex Rivera", "avatar": null },
    "summary": "sent you a message",
    "occurred_at": "2 hours ago",
    "actionable": true,
    "actions": [ { "label": "Reply", "kind": "reply" } ]
  },
  {
    "id": "5",
    "category": "community",
    "actor": { "id": "user_5", "name": "Rust Berlin", "avatar": null },
    "summary": "posted a new event in your community",
    "occurred_at": "2024-04-02T10:00:00"
  }
]"#;
