use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use linsta_models::NotificationEvent;
use serde::{Deserialize, Serialize};

/// Calendar-relative section a notification is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBucket {
    Today,
    Yesterday,
    ThisWeek,
    Older,
}

impl TimeBucket {
    /// Display order, most recent first.
    pub const ORDER: [TimeBucket; 4] = [
        TimeBucket::Today,
        TimeBucket::Yesterday,
        TimeBucket::ThisWeek,
        TimeBucket::Older,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeBucket::Today => "Today",
            TimeBucket::Yesterday => "Yesterday",
            TimeBucket::ThisWeek => "This Week",
            TimeBucket::Older => "Older",
        }
    }

    /// Classifies by calendar date in `zone`, not by rolling 24h windows.
    pub fn classify(
        occurred_at: &DateTime<FixedOffset>,
        now: &DateTime<FixedOffset>,
        zone: &FixedOffset,
    ) -> Self {
        let days = calendar_days_between(occurred_at, now, zone);
        match days {
            0 => TimeBucket::Today,
            1 => TimeBucket::Yesterday,
            2..=7 => TimeBucket::ThisWeek,
            _ => TimeBucket::Older,
        }
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of calendar dates from `earlier` to `later` as seen in `zone`.
/// Negative when `earlier` falls on a later date.
pub fn calendar_days_between(
    earlier: &DateTime<FixedOffset>,
    later: &DateTime<FixedOffset>,
    zone: &FixedOffset,
) -> i64 {
    let from = earlier.with_timezone(zone).date_naive();
    let to = later.with_timezone(zone).date_naive();
    to.signed_duration_since(from).num_days()
}

/// Parses the timestamp shapes the activity feed produces.
///
/// Values without an offset are read as wall-clock time in `zone`.
pub fn parse_timestamp(raw: &str, zone: &FixedOffset) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return zone.from_local_datetime(&naive).single();
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    zone.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).single()
}

/// Notifications partitioned by [`TimeBucket`], newest first in each bucket.
///
/// All four buckets are always present, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedView {
    pub today: Vec<NotificationEvent>,
    pub yesterday: Vec<NotificationEvent>,
    pub this_week: Vec<NotificationEvent>,
    pub older: Vec<NotificationEvent>,
}

/// One non-empty section ready for a list renderer.
#[derive(Debug, Clone, Serialize)]
pub struct Section<'a> {
    pub bucket: TimeBucket,
    pub title: &'static str,
    pub items: &'a [NotificationEvent],
}

impl GroupedView {
    pub fn bucket(&self, bucket: TimeBucket) -> &[NotificationEvent] {
        match bucket {
            TimeBucket::Today => &self.today,
            TimeBucket::Yesterday => &self.yesterday,
            TimeBucket::ThisWeek => &self.this_week,
            TimeBucket::Older => &self.older,
        }
    }

    pub(crate) fn bucket_mut(&mut self, bucket: TimeBucket) -> &mut Vec<NotificationEvent> {
        match bucket {
            TimeBucket::Today => &mut self.today,
            TimeBucket::Yesterday => &mut self.yesterday,
            TimeBucket::ThisWeek => &mut self.this_week,
            TimeBucket::Older => &mut self.older,
        }
    }

    /// Every bucket in display order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (TimeBucket, &[NotificationEvent])> {
        TimeBucket::ORDER
            .into_iter()
            .map(move |bucket| (bucket, self.bucket(bucket)))
    }

    /// Non-empty buckets only, labelled for display.
    pub fn sections(&self) -> Vec<Section<'_>> {
        self.iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(bucket, items)| Section {
                bucket,
                title: bucket.label(),
                items,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.iter().map(|(_, items)| items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
