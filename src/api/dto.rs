//! Review API wire types
//!
//! Shapes of the JSON bodies returned by `GET /get_course_details` and
//! the `{detail}` error body used by both endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::detail::RatingDistribution;

/// Body of a successful `GET /get_course_details`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetailsResponse {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub subject: String,
    pub course_number: String,
    pub stats: CourseStats,
    #[serde(default)]
    pub reviews: Vec<ReviewDto>,
}

/// Aggregate statistics computed by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseStats {
    #[serde(default)]
    pub overall_rating: f64,
    #[serde(default)]
    pub total_reviews: u32,
    #[serde(default)]
    pub difficulty: f64,
    #[serde(default)]
    pub workload: f64,
    #[serde(default)]
    pub usefulness: f64,
    #[serde(default)]
    pub fun: f64,
    #[serde(default)]
    pub rating_distribution: RatingDistribution,
    #[serde(default)]
    pub avg_grade: Option<String>,
    #[serde(default)]
    pub pass_rate: Option<f64>,
    #[serde(default)]
    pub would_take_again_rate: Option<f64>,
    #[serde(default)]
    pub attendance_rate: Option<f64>,
    #[serde(default)]
    pub participation_rate: Option<f64>,
}

/// Review identifier; backends emit either numbers or strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewId {
    Number(i64),
    Text(String),
}

impl Default for ReviewId {
    fn default() -> Self {
        ReviewId::Text(String::new())
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewId::Number(n) => write!(f, "{}", n),
            ReviewId::Text(s) => f.write_str(s),
        }
    }
}

/// One stored review as returned by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewDto {
    pub id: ReviewId,
    pub professor_name: Option<String>,
    /// RFC 3339 timestamp
    pub timestamp: String,
    pub rating: u8,
    pub difficulty: u8,
    pub workload: u8,
    pub usefulness: u8,
    pub fun: u8,
    pub review_text: Option<String>,
    pub grade: Option<String>,
    pub passed: Option<String>,
    pub would_take_again: Option<String>,
    pub extra_cost: Option<String>,
    pub require_attendance: Option<String>,
    pub require_participation: Option<String>,
}

/// Error body: `{"detail": ...}`
///
/// `detail` is usually a string. Validation failures carry a list of
/// `{"msg": ...}` objects instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Parse an error body, tolerating anything that is not JSON
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Human-readable detail message, if the body carried one
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_string_detail() {
        let body = ErrorBody::parse(r#"{"detail": "Invalid course"}"#);
        assert_eq!(body.message().as_deref(), Some("Invalid course"));
    }

    #[test]
    fn test_error_body_validation_list() {
        let body = ErrorBody::parse(
            r#"{"detail": [{"loc": ["body", "rating"], "msg": "field required"}, {"msg": "bad grade"}]}"#,
        );
        assert_eq!(body.message().as_deref(), Some("field required; bad grade"));
    }

    #[test]
    fn test_error_body_not_json() {
        assert!(ErrorBody::parse("Internal Server Error").message().is_none());
        assert!(ErrorBody::parse(r#"{"error": "x"}"#).message().is_none());
        assert!(ErrorBody::parse(r#"{"detail": ""}"#).message().is_none());
    }

    #[test]
    fn test_review_id_forms() {
        let numeric: ReviewDto = serde_json::from_str(r#"{"id": 12, "timestamp": "2024-01-01T00:00:00"}"#).unwrap();
        assert_eq!(numeric.id.to_string(), "12");

        let text: ReviewDto = serde_json::from_str(r#"{"id": "abc", "rating": 4}"#).unwrap();
        assert_eq!(text.id.to_string(), "abc");
        assert_eq!(text.rating, 4);
        assert_eq!(text.grade, None);
    }

    #[test]
    fn test_stats_missing_rates() {
        let stats: CourseStats = serde_json::from_str(r#"{"overallRating": 4.0, "totalReviews": 1}"#).unwrap();
        assert_eq!(stats.pass_rate, None);
        assert_eq!(stats.rating_distribution.total(), 0);
    }
}
