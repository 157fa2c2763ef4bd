use chrono::{DateTime, Datelike, FixedOffset, TimeDelta};
use tracing::trace;

use super::bucket::{calendar_days_between, parse_timestamp};

/// Short "time ago" label for a notification timestamp.
///
/// `now` is supplied by the caller. Timestamps that cannot be parsed are
/// returned unchanged. Day-level tiers count calendar dates in `zone`, so an
/// item labelled "yesterday" is also listed under the Yesterday bucket.
pub fn format_relative_time(timestamp: &str, now: &DateTime<FixedOffset>, zone: &FixedOffset) -> String {
    let Some(then) = parse_timestamp(timestamp, zone) else {
        trace!(timestamp, "Unparseable timestamp, rendering verbatim");
        return timestamp.to_string();
    };

    let elapsed = now.signed_duration_since(then);
    if elapsed < TimeDelta::minutes(1) {
        return "just now".to_string();
    }
    if elapsed < TimeDelta::hours(1) {
        return format!("{}m ago", elapsed.num_minutes());
    }
    if elapsed < TimeDelta::days(1) {
        return format!("{}h ago", elapsed.num_hours());
    }

    let days = calendar_days_between(&then, now, zone);
    match days {
        1 => "yesterday".to_string(),
        d if d < 7 => format!("{d}d ago"),
        d if d < 30 => format!("{}w ago", d / 7),
        _ => format_short_date(&then, now, zone),
    }
}

fn format_short_date(then: &DateTime<FixedOffset>, now: &DateTime<FixedOffset>, zone: &FixedOffset) -> String {
    let local = then.with_timezone(zone);
    if local.year() == now.with_timezone(zone).year() {
        local.format("%b %-d").to_string()
    } else {
        local.format("%b %-d, %Y").to_string()
    }
}
