//! Review API Error Types
//!
//! Every failed call to the review API resolves to one of these. Callers
//! turn them into notification text with [`ApiError::user_message`].

use thiserror::Error;

use super::dto::ErrorBody;
use crate::models::CourseIdentifier;

/// Review API errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 404 for the requested course
    #[error("Course {subject} {course_number} was not found. Please check the subject and number.")]
    NotFound {
        subject: String,
        course_number: String,
        detail: Option<String>,
    },

    /// Any other non-success status
    #[error("Request failed with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// A success response whose body could not be decoded
    #[error("Invalid response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Classify a non-success response
    pub fn from_status(status: u16, body: &str, course: &CourseIdentifier) -> Self {
        let detail = ErrorBody::parse(body).message();
        if status == 404 {
            ApiError::NotFound {
                subject: course.subject.clone(),
                course_number: course.course_number.clone(),
                detail,
            }
        } else {
            ApiError::Rejected { status, detail }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Backend-provided detail message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { detail, .. } | ApiError::Rejected { detail, .. } => {
                detail.as_deref()
            }
            _ => None,
        }
    }

    /// Text to show the user
    ///
    /// A backend `detail` wins; a 404 without one uses the not-found
    /// sentence; everything else falls back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        if let Some(detail) = self.detail() {
            return detail.to_string();
        }
        match self {
            ApiError::NotFound { .. } => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}
