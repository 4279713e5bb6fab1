//! Display helpers for film fields.

use chrono::{DateTime, NaiveDate};

/// `1977-05-25` (or a full ISO timestamp) as `May 25, 1977`. Anything
/// unparsable is shown as-is.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));
    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// First `max_chars` characters of `text`, with an ellipsis when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("1977-05-25"), "May 25, 1977");
        assert_eq!(format_date("1980-05-17T00:00:00.000Z"), "May 17, 1980");
        assert_eq!(format_date("sometime in 1983"), "sometime in 1983");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("short", 150), "short");
        assert_eq!(excerpt("It is a period of civil war.", 11), "It is a per...");
        assert_eq!(excerpt("ñandú ñandú", 5), "ñandú...");
    }
}
