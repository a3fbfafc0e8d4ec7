//! Display Formatting
//!
//! Pure helpers that turn API fields into card text. Everything that depends
//! on the clock takes `now` explicitly so renders stay deterministic.

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Server timestamps come in several shapes depending on the endpoint
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d-%m-%Y"];

pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(raw, f).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Time left until a challenge closes.
///
/// A day or more rounds to whole days, an hour or more is `H:MM hrs`,
/// anything shorter is whole minutes. Expired challenges read `0 minutes`.
pub fn countdown(end: NaiveDateTime, now: NaiveDateTime) -> String {
    let remaining = (end - now).max(Duration::zero());
    let days = remaining.num_seconds() as f64 / 86_400.0;
    let hours = remaining.num_hours();
    let minutes = remaining.num_minutes();

    if days >= 1.0 {
        format!("{} days", days.round() as i64)
    } else if hours >= 1 {
        format!("{}:{:02} hrs", hours, minutes % 60)
    } else {
        format!("{} minutes", minutes)
    }
}

/// [`countdown`] from a raw `end_date`; unparseable dates show nothing
pub fn countdown_from(end_date: &str, now: NaiveDateTime) -> String {
    parse_timestamp(end_date)
        .map(|end| countdown(end, now))
        .unwrap_or_default()
}

/// "3 hours ago" / "in 2 days", bucketed like moment.js `fromNow`
pub fn relative_time(then: NaiveDateTime, now: NaiveDateTime) -> String {
    let future = then > now;
    let span = if future { then - now } else { now - then };
    let secs = span.num_seconds() as f64;

    let seconds = secs.round() as i64;
    let minutes = (secs / 60.0).round() as i64;
    let hours = (secs / 3_600.0).round() as i64;
    let days_f = secs / 86_400.0;
    let days = days_f.round() as i64;
    let months_f = days_f * 4_800.0 / 146_097.0;
    let months = months_f.round() as i64;
    let years = (months_f / 12.0).round() as i64;

    let phrase = if seconds <= 44 {
        "a few seconds".to_string()
    } else if minutes <= 1 {
        "a minute".to_string()
    } else if minutes < 45 {
        format!("{} minutes", minutes)
    } else if hours <= 1 {
        "an hour".to_string()
    } else if hours < 22 {
        format!("{} hours", hours)
    } else if days <= 1 {
        "a day".to_string()
    } else if days < 26 {
        format!("{} days", days)
    } else if months <= 1 {
        "a month".to_string()
    } else if months < 11 {
        format!("{} months", months)
    } else if years <= 1 {
        "a year".to_string()
    } else {
        format!("{} years", years)
    };

    if future {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

/// [`relative_time`] from a raw timestamp; unparseable input is shown as-is
pub fn relative_from(raw: &str, now: NaiveDateTime) -> String {
    match parse_timestamp(raw) {
        Some(then) => relative_time(then, now),
        None => raw.to_string(),
    }
}

/// `May 01, 10:00`
pub fn short_datetime(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|t| t.format("%b %d, %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `May 01, 2024`
pub fn long_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|t| t.format("%b %d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Cut `text` to `limit` characters, trimmed, with a trailing `...`
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let prefix: String = text.chars().take(limit).collect();
    format!("{}...", prefix.trim())
}

/// Entry cost: `Free` or `N Points`
pub fn entry_label(points: i64) -> String {
    if points == 0 { "Free".to_string() } else { format!("{} Points", points) }
}

/// Reward: `None` or `N Points`
pub fn reward_label(points: i64) -> String {
    if points == 0 { "None".to_string() } else { format!("{} Points", points) }
}

/// Compact variant used on task cards
pub fn points_short(points: i64, zero: &str) -> String {
    if points == 0 { zero.to_string() } else { format!("{} pts", points) }
}

/// `Likes`, `1 Like`, `12 Likes`
pub fn like_label(count: i64) -> String {
    counted(count, "Like", "Likes")
}

/// `Comments`, `1 Comment`, `4 Comments`
pub fn comment_label(count: i64) -> String {
    counted(count, "Comment", "Comments")
}

fn counted(count: i64, one: &str, many: &str) -> String {
    let noun = if count == 1 { one } else { many };
    if count > 0 {
        format!("{} {}", count, noun)
    } else {
        noun.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> NaiveDateTime {
        parse_timestamp(raw).unwrap()
    }

    #[test]
    fn test_countdown_buckets() {
        let now = at("2024-03-01 12:00:00");
        assert_eq!(countdown(now + Duration::minutes(90), now), "1:30 hrs");
        assert_eq!(countdown(now + Duration::days(3), now), "3 days");
        assert_eq!(countdown(now + Duration::minutes(30), now), "30 minutes");
        assert_eq!(countdown(now + Duration::minutes(65), now), "1:05 hrs");
        assert_eq!(countdown(now + Duration::hours(36), now), "2 days");
        assert_eq!(countdown(now + Duration::hours(23) + Duration::minutes(59), now), "23:59 hrs");
    }

    #[test]
    fn test_countdown_expired_clamps() {
        let now = at("2024-03-01 12:00:00");
        assert_eq!(countdown(now - Duration::hours(5), now), "0 minutes");
    }

    #[test]
    fn test_countdown_from_raw() {
        let now = at("2024-03-01 12:00:00");
        assert_eq!(countdown_from("2024-03-04 12:00:00", now), "3 days");
        assert_eq!(countdown_from("not a date", now), "");
    }

    #[test]
    fn test_parse_timestamp_shapes() {
        assert_eq!(at("01-03-2024 08:15:00"), at("2024-03-01 08:15:00"));
        assert_eq!(at("2024-03-01"), at("2024-03-01 00:00:00"));
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_relative_time() {
        let now = at("2024-03-01 12:00:00");
        assert_eq!(relative_time(now - Duration::seconds(10), now), "a few seconds ago");
        assert_eq!(relative_time(now - Duration::seconds(70), now), "a minute ago");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(relative_time(now - Duration::minutes(50), now), "an hour ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(relative_time(now - Duration::hours(30), now), "a day ago");
        assert_eq!(relative_time(now - Duration::days(4), now), "4 days ago");
        assert_eq!(relative_time(now - Duration::days(60), now), "2 months ago");
        assert_eq!(relative_time(now - Duration::days(400), now), "a year ago");
        assert_eq!(relative_time(now - Duration::days(1000), now), "3 years ago");
        assert_eq!(relative_time(now + Duration::hours(2), now), "in 2 hours");
    }

    #[test]
    fn test_relative_from_keeps_unparseable() {
        let now = at("2024-03-01 12:00:00");
        assert_eq!(relative_from("yesterday", now), "yesterday");
        assert_eq!(relative_from("29-02-2024 12:00:00", now), "a day ago");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello world", 5), "hello...");
        assert_eq!(truncate("hi", 5), "hi");
        assert_eq!(truncate("", 5), "");
        assert_eq!(truncate("hello", 5), "hello");
        // Prefix is trimmed before the marker
        assert_eq!(truncate("ab cd", 3), "ab...");
        // Counted in characters, not bytes
        assert_eq!(truncate("héllo wörld", 7), "héllo w...");
    }

    #[test]
    fn test_labels() {
        assert_eq!(entry_label(0), "Free");
        assert_eq!(entry_label(50), "50 Points");
        assert_eq!(reward_label(0), "None");
        assert_eq!(points_short(20, "Free"), "20 pts");
        assert_eq!(like_label(0), "Likes");
        assert_eq!(like_label(1), "1 Like");
        assert_eq!(like_label(12), "12 Likes");
        assert_eq!(comment_label(1), "1 Comment");
    }

    #[test]
    fn test_calendar_formats() {
        assert_eq!(short_datetime("2024-05-01 10:00:00"), "May 01, 10:00");
        assert_eq!(long_date("2024-05-01 10:00:00"), "May 01, 2024");
        assert_eq!(long_date("soon"), "soon");
    }
}
