//! Course Detail State
//!
//! The view-model rendered by the course detail page. It is always built
//! wholesale from one of three constructors and never patched in place:
//!
//! - [`CourseDetailState::loading`] while the first fetch is in flight
//! - [`CourseDetailState::not_found`] after a 404 or an unusable identifier
//! - [`CourseDetailState::from_response`] after a successful fetch

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::api::dto::{CourseDetailsResponse, ReviewDto};
use crate::display::MAX_STARS;

/// Marker shown for any value the backend did not provide
pub const NOT_AVAILABLE: &str = "N/A";

/// Review counts per star value (index 0 holds 1-star reviews)
///
/// On the wire this is a JSON object keyed by the star value as a string,
/// e.g. `{"5": 10, "4": 3, "3": 0, "2": 0, "1": 1}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, u32>", into = "BTreeMap<String, u32>")]
pub struct RatingDistribution([u32; MAX_STARS as usize]);

impl RatingDistribution {
    pub fn new(counts: [u32; MAX_STARS as usize]) -> Self {
        Self(counts)
    }

    /// Count for a star value; out-of-range values count zero
    pub fn count(&self, stars: u8) -> u32 {
        match stars {
            1..=MAX_STARS => self.0[stars as usize - 1],
            _ => 0,
        }
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Bars from five stars down to one
    ///
    /// Percentages are of the distribution total, treated as 1 when empty.
    pub fn bars(&self) -> Vec<RatingBar> {
        let total = self.total().max(1) as f64;
        (1..=MAX_STARS)
            .rev()
            .map(|stars| {
                let count = self.count(stars);
                RatingBar {
                    stars,
                    count,
                    percentage: count as f64 / total * 100.0,
                }
            })
            .collect()
    }
}

impl From<BTreeMap<String, u32>> for RatingDistribution {
    fn from(map: BTreeMap<String, u32>) -> Self {
        let mut counts = [0; MAX_STARS as usize];
        for (key, count) in map {
            if let Ok(stars @ 1..=MAX_STARS) = key.trim().parse::<u8>() {
                counts[stars as usize - 1] = count;
            }
        }
        Self(counts)
    }
}

impl From<RatingDistribution> for BTreeMap<String, u32> {
    fn from(dist: RatingDistribution) -> Self {
        (1..=MAX_STARS)
            .map(|stars| (stars.to_string(), dist.count(stars)))
            .collect()
    }
}

/// One horizontal bar of the distribution chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBar {
    pub stars: u8,
    pub count: u32,
    pub percentage: f64,
}

impl RatingBar {
    /// "5 stars"
    pub fn stars_label(&self) -> String {
        format!("{} stars", self.stars)
    }

    /// "12 reviews (40.0%)"
    pub fn count_label(&self) -> String {
        format!("{} reviews ({:.1}%)", self.count, self.percentage)
    }

    /// CSS width for the filled part of the bar
    pub fn width_style(&self) -> String {
        format!("width: {:.1}%", self.percentage)
    }
}

/// A backend review in display form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewView {
    pub id: String,
    pub author: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub rating: u8,
    pub difficulty: u8,
    pub workload: u8,
    pub usefulness: u8,
    pub fun: u8,
    pub grade: String,
    pub passed: String,
    pub would_take_again: String,
    pub extra_cost: String,
    pub require_attendance: String,
    pub require_participation: String,
    pub text: String,
}

fn or_not_available(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

impl ReviewView {
    pub fn from_dto(dto: ReviewDto) -> Self {
        let date = dto
            .timestamp
            .split('T')
            .next()
            .unwrap_or_default()
            .to_string();

        Self {
            id: dto.id.to_string(),
            author: dto
                .professor_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| "Anonymous".to_string()),
            date,
            rating: dto.rating,
            difficulty: dto.difficulty,
            workload: dto.workload,
            usefulness: dto.usefulness,
            fun: dto.fun,
            grade: or_not_available(dto.grade),
            passed: or_not_available(dto.passed),
            would_take_again: or_not_available(dto.would_take_again),
            extra_cost: or_not_available(dto.extra_cost),
            require_attendance: or_not_available(dto.require_attendance),
            require_participation: or_not_available(dto.require_participation),
            text: dto.review_text.unwrap_or_default(),
        }
    }

    /// (label, value) pairs for the optional answers worth showing
    pub fn extras(&self) -> Vec<(&'static str, &str)> {
        [
            ("Attendance", self.require_attendance.as_str()),
            ("Participation", self.require_participation.as_str()),
            ("Extra Cost", self.extra_cost.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| *value != NOT_AVAILABLE)
        .collect()
    }
}

/// Which of the three constructors produced a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailStatus {
    Loading,
    NotFound,
    Loaded,
}

/// Everything the course detail page renders for one course
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetailState {
    pub status: DetailStatus,
    pub title: String,
    /// "SUBJECT NUMBER", or a placeholder while loading
    pub code: String,
    pub description: String,
    /// Rating metrics, rounded to one decimal
    pub overall_rating: f64,
    pub difficulty: f64,
    pub workload: f64,
    pub usefulness: f64,
    pub fun: f64,
    pub total_reviews: u32,
    pub distribution: RatingDistribution,
    pub avg_grade: String,
    /// Rates formatted as "87.5%" or "N/A"
    pub pass_rate: String,
    pub would_take_again_rate: String,
    pub attendance_rate: String,
    pub participation_rate: String,
    pub reviews: Vec<ReviewView>,
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn percentage(value: Option<f64>) -> String {
    match value {
        Some(rate) if rate.is_finite() => format!("{:.1}%", rate),
        _ => NOT_AVAILABLE.to_string(),
    }
}

impl CourseDetailState {
    fn empty(status: DetailStatus, title: String, code: String, description: String) -> Self {
        Self {
            status,
            title,
            code,
            description,
            overall_rating: 0.0,
            difficulty: 0.0,
            workload: 0.0,
            usefulness: 0.0,
            fun: 0.0,
            total_reviews: 0,
            distribution: RatingDistribution::default(),
            avg_grade: NOT_AVAILABLE.to_string(),
            pass_rate: NOT_AVAILABLE.to_string(),
            would_take_again_rate: NOT_AVAILABLE.to_string(),
            attendance_rate: NOT_AVAILABLE.to_string(),
            participation_rate: NOT_AVAILABLE.to_string(),
            reviews: Vec::new(),
        }
    }

    /// Placeholder shown while the course is being fetched
    pub fn loading(code: impl Into<String>) -> Self {
        Self::empty(
            DetailStatus::Loading,
            code.into(),
            "Loading...".to_string(),
            "Fetching course details from the server...".to_string(),
        )
    }

    /// Placeholder for a course the backend does not know
    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::empty(
            DetailStatus::NotFound,
            "Course Not Found".to_string(),
            code.into(),
            message.into(),
        )
    }

    /// Build the full state from a course details response
    pub fn from_response(response: CourseDetailsResponse) -> Self {
        let stats = response.stats;
        Self {
            status: DetailStatus::Loaded,
            code: format!("{} {}", response.subject, response.course_number),
            title: response.title,
            description: response.description,
            overall_rating: round_one(stats.overall_rating),
            difficulty: round_one(stats.difficulty),
            workload: round_one(stats.workload),
            usefulness: round_one(stats.usefulness),
            fun: round_one(stats.fun),
            total_reviews: stats.total_reviews,
            distribution: stats.rating_distribution,
            avg_grade: or_not_available(stats.avg_grade),
            pass_rate: percentage(stats.pass_rate),
            would_take_again_rate: percentage(stats.would_take_again_rate),
            attendance_rate: percentage(stats.attendance_rate),
            participation_rate: percentage(stats.participation_rate),
            reviews: response.reviews.into_iter().map(ReviewView::from_dto).collect(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.status == DetailStatus::Loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "title": "Introduction to Programming",
        "description": "Fundamentals of programming.",
        "subject": "COMP",
        "courseNumber": "110",
        "stats": {
            "overallRating": 4.26,
            "totalReviews": 3,
            "difficulty": 3.04,
            "workload": 2.96,
            "usefulness": 4.0,
            "fun": 3.56,
            "ratingDistribution": {"5": 2, "4": 0, "3": 1, "2": 0, "1": 0},
            "avgGrade": "A-",
            "passRate": 100,
            "wouldTakeAgainRate": 66.666,
            "attendanceRate": 33.3333,
            "participationRate": null
        },
        "reviews": [
            {
                "id": 7,
                "professorName": null,
                "timestamp": "2024-09-15T10:30:00Z",
                "rating": 5,
                "difficulty": 3,
                "workload": 3,
                "usefulness": 4,
                "fun": 4,
                "reviewText": "Great intro.",
                "grade": "A",
                "passed": "yes",
                "wouldTakeAgain": "yes",
                "extraCost": null,
                "requireAttendance": "yes",
                "requireParticipation": ""
            }
        ]
    }"#;

    #[test]
    fn test_from_response() {
        let response: CourseDetailsResponse = serde_json::from_str(RESPONSE).unwrap();
        let state = CourseDetailState::from_response(response);

        assert!(state.is_loaded());
        assert_eq!(state.code, "COMP 110");
        assert_eq!(state.title, "Introduction to Programming");
        assert_eq!(state.overall_rating, 4.3);
        assert_eq!(state.difficulty, 3.0);
        assert_eq!(state.workload, 3.0);
        assert_eq!(state.fun, 3.6);
        assert_eq!(state.pass_rate, "100.0%");
        assert_eq!(state.would_take_again_rate, "66.7%");
        assert_eq!(state.attendance_rate, "33.3%");
        assert_eq!(state.participation_rate, "N/A");
        assert_eq!(state.avg_grade, "A-");
        assert_eq!(state.distribution.total(), 3);
    }

    #[test]
    fn test_review_view_defaults() {
        let response: CourseDetailsResponse = serde_json::from_str(RESPONSE).unwrap();
        let state = CourseDetailState::from_response(response);
        let review = &state.reviews[0];

        assert_eq!(review.id, "7");
        assert_eq!(review.author, "Anonymous");
        assert_eq!(review.date, "2024-09-15");
        assert_eq!(review.extra_cost, NOT_AVAILABLE);
        assert_eq!(review.require_participation, NOT_AVAILABLE);
        assert_eq!(review.extras(), vec![("Attendance", "yes")]);
    }

    #[test]
    fn test_not_found_replaces_loading_text() {
        let state = CourseDetailState::not_found("COMP 999", "Course COMP 999 was not found.");
        assert_eq!(state.status, DetailStatus::NotFound);
        assert_eq!(state.title, "Course Not Found");
        assert_eq!(state.code, "COMP 999");
        assert!(!state.description.contains("Loading"));
        assert!(state.reviews.is_empty());
    }

    #[test]
    fn test_loading_placeholder() {
        let state = CourseDetailState::loading("COMP 110");
        assert_eq!(state.status, DetailStatus::Loading);
        assert_eq!(state.title, "COMP 110");
        assert_eq!(state.code, "Loading...");
    }

    #[test]
    fn test_distribution_bars() {
        let dist = RatingDistribution::new([1, 0, 1, 0, 2]);
        let bars = dist.bars();

        assert_eq!(bars.iter().map(|b| b.stars).collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
        assert_eq!(bars[0].count, 2);
        assert_eq!(bars[0].stars_label(), "5 stars");
        assert_eq!(bars[0].count_label(), "2 reviews (50.0%)");
        assert_eq!(bars[4].count_label(), "1 reviews (25.0%)");
    }

    #[test]
    fn test_empty_distribution_has_zero_bars() {
        let bars = RatingDistribution::default().bars();
        assert!(bars.iter().all(|b| b.percentage == 0.0));
        assert_eq!(bars[2].count_label(), "0 reviews (0.0%)");
    }

    #[test]
    fn test_distribution_ignores_unknown_keys() {
        let dist: RatingDistribution =
            serde_json::from_str(r#"{"5": 4, "0": 9, "six": 1, "1": 2}"#).unwrap();
        assert_eq!(dist.count(5), 4);
        assert_eq!(dist.count(1), 2);
        assert_eq!(dist.total(), 6);

        let json = serde_json::to_value(dist).unwrap();
        assert_eq!(json["5"], 4);
        assert_eq!(json["3"], 0);
    }
}
