//! Display formatting helpers.

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::models::Review;

/// Format an amount with the symbol for a known currency code.
///
/// Unknown codes are used as the prefix verbatim; an empty code yields the
/// bare amount.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let symbol = match currency {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "INR" => "₹",
        other => other,
    };
    format!("{symbol}{amount:.2}")
}

/// Filled stars followed by empty stars. Ratings are clamped to `0..=max`.
pub fn render_star_rating(rating: i64, max: i64) -> String {
    let max = max.max(0);
    let filled = rating.clamp(0, max) as usize;
    let empty = max as usize - filled;
    format!("{}{}", "⭐".repeat(filled), "☆".repeat(empty))
}

/// Render an ISO 8601 timestamp as e.g. "December 04, 2025 at 01:54 AM".
///
/// Input that cannot be parsed is returned unchanged.
pub fn format_date(date: &str) -> String {
    match parse_timestamp(date) {
        Some(dt) => dt.format("%B %d, %Y at %I:%M %p").to_string(),
        None => date.to_string(),
    }
}

fn parse_timestamp(date: &str) -> Option<NaiveDateTime> {
    let date = date.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.naive_local());
    }
    // Java's default Date serialization uses "+0000" offsets
    if let Ok(dt) = DateTime::<FixedOffset>::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Mean rating, or `None` when there are no reviews.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: i64 = reviews.iter().map(|r| r.rating).sum();
    Some(total as f64 / reviews.len() as f64)
}

/// Cut `text` to at most `max` characters, appending "..." when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_review;
    use serde_json::json;

    #[test]
    fn test_currency_symbols() {
        assert_eq!(format_currency(12.5, "GBP"), "£12.50");
        assert_eq!(format_currency(3.0, "USD"), "$3.00");
        assert_eq!(format_currency(3.0, "CHF"), "CHF3.00");
        assert_eq!(format_currency(3.0, ""), "3.00");
    }

    #[test]
    fn test_star_rating() {
        assert_eq!(render_star_rating(3, 5), "⭐⭐⭐☆☆");
        assert_eq!(render_star_rating(0, 5), "☆☆☆☆☆");
        assert_eq!(render_star_rating(9, 5), "⭐⭐⭐⭐⭐");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(
            format_date("2025-12-04T01:54:13.256+00:00"),
            "December 04, 2025 at 01:54 AM"
        );
        assert_eq!(
            format_date("2025-12-04T13:05:00Z"),
            "December 04, 2025 at 01:05 PM"
        );
        assert_eq!(
            format_date("2025-12-04T01:54:13.256+0000"),
            "December 04, 2025 at 01:54 AM"
        );
        assert_eq!(format_date("yesterday"), "yesterday");
    }

    #[test]
    fn test_average_rating() {
        let reviews = vec![
            normalize_review(&json!({"rating": 4})),
            normalize_review(&json!({"rating": 5})),
        ];
        assert_eq!(average_rating(&reviews), Some(4.5));
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 5), "abcde...");
    }
}
