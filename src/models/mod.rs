//! Client-side data model
//!
//! - **search**: `SearchTerm` (search box state) and `CourseIdentifier`
//! - **review**: `ReviewRecord`, the JSON payload posted to the review API
//! - **form**: `ReviewForm` / `HomeReviewForm`, the controlled form state
//!   both views share, plus the optional-field accordion set

pub mod form;
pub mod review;
pub mod search;

pub use form::{
    DetailedRatings, ExpandedFields, HomeReviewForm, OptionalField, RatingMetric, ReviewForm,
    SLIDER_DEFAULT,
};
pub use review::ReviewRecord;
pub use search::{CourseIdentifier, SearchTerm};

use thiserror::Error;

/// Client-side validation failures
///
/// These are raised before any network request is issued. The display
/// text is shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter both subject and catalog number.")]
    MissingSearchFields,

    #[error("Please fill in school, subject, and catalog number!")]
    MissingCourseFields,

    #[error("Please select an overall rating before submitting your review!")]
    MissingRating,
}
