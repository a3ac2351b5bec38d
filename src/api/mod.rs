//! Review API
//!
//! Contract for the external course-review backend. The backend is only
//! consumed here, never implemented.
//!
//! # Endpoints
//!
//! - `GET /get_course_details?school=&subject=&courseNumber=` - course
//!   metadata, aggregate stats and all reviews; 404 for an unknown course
//! - `POST /submit_review` - JSON [`ReviewRecord`] body
//!
//! [`ReviewApi`] is implemented by [`client::ReviewClient`] (reqwest,
//! native builds) and by the browser client in the UI crate. Controllers
//! are written against the trait so they run unchanged in both places.

pub mod dto;
pub mod error;

#[cfg(feature = "native")]
pub mod client;

pub use dto::{CourseDetailsResponse, CourseStats, ErrorBody, ReviewDto, ReviewId};
pub use error::ApiError;

#[cfg(feature = "native")]
pub use client::ReviewClient;

use async_trait::async_trait;

use crate::models::{CourseIdentifier, ReviewRecord};

/// Default review API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Result type for review API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Operations the review backend offers
///
/// Futures are not `Send`: the browser client runs on the page's single
/// thread.
#[async_trait(?Send)]
pub trait ReviewApi {
    /// Fetch details, statistics and reviews for one course
    async fn course_details(&self, course: &CourseIdentifier) -> ApiResult<CourseDetailsResponse>;

    /// Store a new review
    async fn submit_review(&self, review: &ReviewRecord) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl<T: ReviewApi + ?Sized> ReviewApi for &T {
    async fn course_details(&self, course: &CourseIdentifier) -> ApiResult<CourseDetailsResponse> {
        (**self).course_details(course).await
    }

    async fn submit_review(&self, review: &ReviewRecord) -> ApiResult<()> {
        (**self).submit_review(review).await
    }
}

/// Strip trailing slashes from a configured base URL
pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

/// Full URL of the course details endpoint
pub fn course_details_url(base: &str, course: &CourseIdentifier) -> String {
    format!("{}/get_course_details?{}", normalize_base(base), course.query_string())
}

/// Full URL of the review submission endpoint
pub fn submit_review_url(base: &str) -> String {
    format!("{}/submit_review", normalize_base(base))
}
