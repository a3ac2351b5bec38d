//! Presentation helpers shared by the course card, review card and star
//! rating renderers.

use chrono::NaiveDate;

/// Number of stars in a rating display
pub const MAX_STARS: u8 = 5;

/// Full / half / empty star counts for a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarFill {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

/// Split a 0-5 rating into star glyph counts
///
/// A fractional part of one half or more renders as a half star. The
/// three counts always add up to [`MAX_STARS`].
pub fn star_fill(rating: f64) -> StarFill {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, MAX_STARS as f64)
    } else {
        0.0
    };

    let full = rating.floor() as u8;
    let half = u8::from(full < MAX_STARS && rating - rating.floor() >= 0.5);

    StarFill {
        full,
        half,
        empty: MAX_STARS - full - half,
    }
}

/// One-decimal rating text, e.g. "4.5"
pub fn format_rating(value: f64) -> String {
    format!("{:.1}", value)
}

/// Render a `YYYY-MM-DD` review date as "September 15, 2024"
///
/// Empty input renders as "N/A"; anything unparseable is shown unchanged.
pub fn format_review_date(date: &str) -> String {
    if date.trim().is_empty() {
        return "N/A".to_string();
    }
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
