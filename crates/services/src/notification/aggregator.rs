use std::collections::{HashMap, HashSet};

use chrono::{DateTime, FixedOffset, Offset, Utc};
use linsta_config::NotificationSettings;
use linsta_models::{DisplayFilter, NotificationEvent};
use serde::Serialize;
use tracing::{debug, trace, warn};

use super::bucket::{GroupedView, TimeBucket, parse_timestamp};
use super::relative_time::format_relative_time;

/// Unread badge count per display filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnreadCounts(HashMap<DisplayFilter, usize>);

impl UnreadCounts {
    pub fn get(&self, filter: DisplayFilter) -> usize {
        self.0.get(&filter).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.get(DisplayFilter::All)
    }
}

/// Builds the notification screen views from a snapshot of events.
///
/// Every operation is pure: inputs are borrowed, results are new values, and
/// nothing reads the clock except [`NotificationAggregator::now`].
#[derive(Debug, Clone)]
pub struct NotificationAggregator {
    zone: FixedOffset,
}

impl NotificationAggregator {
    pub fn new(settings: &NotificationSettings) -> Self {
        let zone = settings
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                warn!(
                    utc_offset_minutes = settings.utc_offset_minutes,
                    "UTC offset out of range, using UTC"
                );
                Utc.fix()
            });
        Self { zone }
    }

    pub fn with_zone(zone: FixedOffset) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> FixedOffset {
        self.zone
    }

    /// Reads the clock once; pass the result through a whole render pass.
    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.zone)
    }

    pub fn time_bucket(&self, occurred_at: &str, now: &DateTime<FixedOffset>) -> TimeBucket {
        self.classify(occurred_at, now).0
    }

    /// Unparseable or missing timestamps fall back to `Older`.
    fn classify(
        &self,
        occurred_at: &str,
        now: &DateTime<FixedOffset>,
    ) -> (TimeBucket, Option<DateTime<FixedOffset>>) {
        match parse_timestamp(occurred_at, &self.zone) {
            Some(ts) => (TimeBucket::classify(&ts, now, &self.zone), Some(ts)),
            None => {
                trace!(occurred_at, "No usable timestamp, filing under older");
                (TimeBucket::Older, None)
            }
        }
    }

    pub fn group_by_time(
        &self,
        events: &[NotificationEvent],
        now: &DateTime<FixedOffset>,
    ) -> GroupedView {
        let mut keyed: Vec<(TimeBucket, Option<DateTime<FixedOffset>>, &NotificationEvent)> =
            Vec::with_capacity(events.len());

        for event in events {
            let (bucket, occurred) = self.classify(&event.occurred_at, now);
            keyed.push((bucket, occurred, event));
        }

        // Undated events compare as None and end up last.
        keyed.sort_by(|a, b| b.1.cmp(&a.1));

        let mut view = GroupedView::default();
        for (bucket, _, event) in keyed {
            view.bucket_mut(bucket).push(event.clone());
        }

        debug!(
            total = events.len(),
            today = view.today.len(),
            yesterday = view.yesterday.len(),
            this_week = view.this_week.len(),
            older = view.older.len(),
            "Grouped notifications"
        );
        view
    }

    /// `None` and `Some(DisplayFilter::All)` both count every unread event.
    pub fn count_unread(&self, events: &[NotificationEvent], filter: Option<DisplayFilter>) -> usize {
        let filter = filter.unwrap_or_default();
        events
            .iter()
            .filter(|e| e.is_unread() && filter.matches(e.category))
            .count()
    }

    pub fn unread_counts(&self, events: &[NotificationEvent]) -> UnreadCounts {
        let mut counts: HashMap<DisplayFilter, usize> =
            DisplayFilter::ALL.into_iter().map(|f| (f, 0)).collect();

        for event in events.iter().filter(|e| e.is_unread()) {
            for filter in DisplayFilter::ALL {
                if filter.matches(event.category) {
                    *counts.entry(filter).or_default() += 1;
                }
            }
        }

        UnreadCounts(counts)
    }

    pub fn filter_events(
        &self,
        events: &[NotificationEvent],
        filter: DisplayFilter,
    ) -> Vec<NotificationEvent> {
        events
            .iter()
            .filter(|e| filter.matches(e.category))
            .cloned()
            .collect()
    }

    /// Unknown ids leave the snapshot as is.
    pub fn mark_as_read(&self, events: &[NotificationEvent], id: &str) -> Vec<NotificationEvent> {
        let mut found = false;
        let updated: Vec<NotificationEvent> = events
            .iter()
            .map(|e| {
                let mut e = e.clone();
                if e.id == id {
                    found = true;
                    e.read = true;
                }
                e
            })
            .collect();

        if !found {
            debug!(id, "mark_as_read: no such notification");
        }
        updated
    }

    pub fn mark_all_as_read(&self, events: &[NotificationEvent]) -> Vec<NotificationEvent> {
        events
            .iter()
            .map(|e| NotificationEvent {
                read: true,
                ..e.clone()
            })
            .collect()
    }

    /// Folds a freshly fetched snapshot into the one on screen.
    ///
    /// Incoming events win on content and keep their order; events only known
    /// locally follow. An event read on either side stays read.
    pub fn merge_snapshot(
        &self,
        existing: &[NotificationEvent],
        incoming: &[NotificationEvent],
    ) -> Vec<NotificationEvent> {
        let read_locally: HashSet<&str> = existing
            .iter()
            .filter(|e| e.read)
            .map(|e| e.id.as_str())
            .collect();

        let mut seen: HashSet<&str> = HashSet::with_capacity(existing.len() + incoming.len());
        let mut merged = Vec::with_capacity(existing.len() + incoming.len());

        for event in incoming {
            if !seen.insert(event.id.as_str()) {
                trace!(id = %event.id, "Dropping duplicate notification");
                continue;
            }
            let mut event = event.clone();
            event.read |= read_locally.contains(event.id.as_str());
            merged.push(event);
        }

        for event in existing {
            if seen.insert(event.id.as_str()) {
                merged.push(event.clone());
            }
        }

        merged
    }

    pub fn format_relative_time(&self, timestamp: &str, now: &DateTime<FixedOffset>) -> String {
        format_relative_time(timestamp, now, &self.zone)
    }
}
