//! Review submission payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /submit_review`
///
/// Optional attributes are `None` when the user left them blank and are
/// serialized as JSON `null`, never as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub school: String,
    pub subject: String,
    pub course_number: String,
    pub professor_name: Option<String>,
    /// Overall rating, 1-5
    pub rating: u8,
    pub review_text: Option<String>,
    pub difficulty: u8,
    pub workload: u8,
    pub usefulness: u8,
    pub fun: u8,
    pub grade: Option<String>,
    pub passed: Option<String>,
    pub would_take_again: Option<String>,
    pub extra_cost: Option<String>,
    pub require_attendance: Option<String>,
    pub require_participation: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ReviewRecord {
    /// "SUBJECT NUMBER" of the reviewed course
    pub fn course_code(&self) -> String {
        format!("{} {}", self.subject, self.course_number)
    }
}
