//! Relative "time ago" labels for feed rows.

use chrono::{DateTime, Utc};

/// Format the elapsed time between `timestamp` and `now` as a short label.
///
/// First match wins: under a minute reads "just now", then whole minutes,
/// hours, and days. Anything a day or older renders only in days, with no
/// upper bound. Pure function; callers that want a live label re-invoke this
/// on their own tick.
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(timestamp).num_seconds();

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{}h ago", seconds / 3600)
    } else {
        format!("{}d ago", seconds / 86400)
    }
}
