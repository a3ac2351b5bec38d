//! Controllers
//!
//! Sequencing of review API calls for the two views. Controllers are
//! generic over the [`ReviewApi`](crate::api::ReviewApi) and over small view
//! traits, so the browser UI, the CLI and the tests drive the same code.
//!
//! - [`DetailController`]: fetch a course, submit a review then refetch
//! - [`HomeController`]: course existence check before navigation, and
//!   the homepage upload form

pub mod detail;
pub mod home;

#[cfg(test)]
pub(crate) mod testing;

pub use detail::{DetailController, FetchOutcome};
pub use home::{HomeController, SearchOutcome};

use crate::detail::{CourseDetailState, DetailStatus};
use crate::models::{CourseIdentifier, ValidationError};
use crate::notification::Notification;

/// Generic course-detail fetch failure
pub const FETCH_FAILED: &str = "Failed to fetch course data from the server.";

/// Generic existence-check failure
pub const LOOKUP_FAILED: &str = "Failed to find course.";

/// Generic review submission failure
pub const SUBMIT_FAILED: &str =
    "Failed to submit review. Please ensure the backend is running and the course is valid.";

pub const SUBMIT_SUCCESS: &str = "Review submitted successfully! Thank you for your contribution.";

/// Anything that can show a notification
pub trait Feedback {
    fn notify(&self, notification: Notification);
}

/// A view hosting a review form
pub trait ReviewFormView: Feedback {
    /// Clear every field and collapse optional sections
    fn reset_form(&self);
}

/// The course detail view
pub trait DetailView: ReviewFormView {
    /// Course the view currently shows, if any
    fn current_course(&self) -> Option<CourseIdentifier>;

    /// Status of the state currently rendered
    fn state_status(&self) -> DetailStatus;

    /// Replace the rendered state
    fn show_state(&self, state: CourseDetailState);

    /// Collapse the "Write a Review" form
    fn hide_form(&self);
}

/// The home view
pub trait HomeView: ReviewFormView {
    /// Leave the page for `href`
    fn navigate(&self, href: &str);
}

/// Result of a review submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Stored by the backend
    Submitted,
    /// Rejected before any request was made
    Invalid(ValidationError),
    /// The backend or the transport failed; the form is left intact
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}
