mod id;
mod text;
mod validation;

pub use id::generate_record_id;
pub use text::truncate_string;
pub use validation::is_valid_email;

use jiff::Timestamp;

/// Get current ISO date string (without milliseconds)
pub fn iso_date(ts: Timestamp) -> String {
    ts.strftime("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Format a timestamp relative to now ("5m ago", "2h ago", "3d ago").
pub fn format_relative(ts: Timestamp) -> String {
    format_relative_to(ts, Timestamp::now())
}

/// Format a timestamp relative to an explicit reference point.
pub fn format_relative_to(ts: Timestamp, now: Timestamp) -> String {
    let secs = now.as_second().saturating_sub(ts.as_second());
    if secs < 60 {
        return "just now".to_string();
    }
    let minutes = secs / 60;
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    let days = hours / 24;
    format!("{days}d ago")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_relative_minutes() {
        let now = ts("2024-01-15T12:00:00Z");
        assert_eq!(format_relative_to(ts("2024-01-15T11:55:00Z"), now), "5m ago");
    }

    #[test]
    fn test_format_relative_hours() {
        let now = ts("2024-01-15T12:00:00Z");
        assert_eq!(format_relative_to(ts("2024-01-15T09:00:00Z"), now), "3h ago");
    }

    #[test]
    fn test_format_relative_days() {
        let now = ts("2024-01-15T12:00:00Z");
        assert_eq!(format_relative_to(ts("2024-01-12T12:00:00Z"), now), "3d ago");
    }

    #[test]
    fn test_format_relative_just_now() {
        let now = ts("2024-01-15T12:00:00Z");
        assert_eq!(format_relative_to(now, now), "just now");
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(ts("2024-01-15T12:00:00Z").strftime("%Y").to_string(), "2024");
        assert_eq!(iso_date(ts("2024-01-15T12:00:00Z")), "2024-01-15T12:00:00Z");
    }
}
