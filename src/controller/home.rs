//! Home view controller

use chrono::{DateTime, Utc};

use super::{HomeView, SubmitOutcome, LOOKUP_FAILED};
use crate::api::ReviewApi;
use crate::models::{CourseIdentifier, HomeReviewForm, SearchTerm};
use crate::notification::Notification;
use crate::router::course_href;

/// Fallback when the homepage submission fails without a backend message
pub const HOME_SUBMIT_FAILED: &str = "Failed to submit review. Please check the server.";

/// Result of a course search from a search box
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The course exists; the view navigated to this href
    Navigated(String),
    /// A search field was empty; nothing was requested
    Invalid,
    /// The lookup failed; the message was shown
    Rejected(String),
}

pub struct HomeController<A, V> {
    api: A,
    view: V,
}

impl<A: ReviewApi, V: HomeView> HomeController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    /// Confirm the course exists, then navigate to its detail view
    pub async fn search(&self, school: &str, term: &SearchTerm) -> SearchOutcome {
        let course = match CourseIdentifier::from_search(school, term) {
            Ok(course) => course,
            Err(e) => {
                self.view.notify(Notification::error(e.to_string()));
                return SearchOutcome::Invalid;
            }
        };

        match self.api.course_details(&course).await {
            Ok(_) => {
                let href = course_href(&course);
                tracing::info!(course = %course, %href, "Opening course");
                self.view.navigate(&href);
                SearchOutcome::Navigated(href)
            }
            Err(e) => {
                tracing::warn!(course = %course, error = %e, "Course lookup failed");
                let message = e.user_message(LOOKUP_FAILED);
                self.view.notify(Notification::error(message.clone()));
                SearchOutcome::Rejected(message)
            }
        }
    }

    /// Validate and post the homepage review form
    pub async fn submit(&self, form: &HomeReviewForm, now: DateTime<Utc>) -> SubmitOutcome {
        let record = match form.build(now) {
            Ok(record) => record,
            Err(e) => {
                self.view.notify(Notification::error(e.to_string()));
                return SubmitOutcome::Invalid(e);
            }
        };

        match self.api.submit_review(&record).await {
            Ok(()) => {
                tracing::info!(course = %record.course_code(), rating = record.rating, "Review submitted");
                self.view.notify(Notification::success(super::SUBMIT_SUCCESS));
                self.view.reset_form();
                SubmitOutcome::Submitted
            }
            Err(e) => {
                tracing::warn!(course = %record.course_code(), error = %e, "Review submission failed");
                let message = e.user_message(HOME_SUBMIT_FAILED);
                self.view.notify(Notification::error(message.clone()));
                SubmitOutcome::Failed(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::catalog::DEFAULT_SCHOOL;
    use crate::controller::testing::{details_for, MockApi, RecordingView};
    use crate::controller::SUBMIT_SUCCESS;
    use crate::models::ValidationError;
    use crate::notification::NotificationKind;

    fn filled_form() -> HomeReviewForm {
        let mut form = HomeReviewForm {
            school: DEFAULT_SCHOOL.to_string(),
            subject: "comp".to_string(),
            course_number: "110".to_string(),
            ..HomeReviewForm::default()
        };
        form.review.set_rating(4);
        form
    }

    #[tokio::test]
    async fn test_search_requires_both_fields() {
        let api = MockApi::new();
        let view = RecordingView::default();
        let controller = HomeController::new(&api, view.clone());

        let outcome = controller.search(DEFAULT_SCHOOL, &SearchTerm::new("COMP", "")).await;

        assert_eq!(outcome, SearchOutcome::Invalid);
        assert_eq!(api.details_calls(), 0);
        assert_eq!(
            view.notifications()[0].message,
            ValidationError::MissingSearchFields.to_string()
        );
    }

    #[tokio::test]
    async fn test_search_navigates_to_existing_course() {
        let api = MockApi::new().with_details(Ok(details_for("COMP", "110")));
        let view = RecordingView::default();
        let controller = HomeController::new(&api, view.clone());

        let outcome = controller.search(DEFAULT_SCHOOL, &SearchTerm::new("comp", " 110")).await;

        assert_eq!(outcome, SearchOutcome::Navigated("?course=COMP%20110".to_string()));
        assert_eq!(view.navigations(), vec!["?course=COMP%20110".to_string()]);
        assert!(view.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_search_unknown_course_does_not_navigate() {
        let missing = CourseIdentifier::at_default_school("COMP", "999");
        let api = MockApi::new().with_details(Err(ApiError::from_status(404, "", &missing)));
        let view = RecordingView::default();
        let controller = HomeController::new(&api, view.clone());

        let outcome = controller.search(DEFAULT_SCHOOL, &SearchTerm::new("COMP", "999")).await;

        assert_eq!(
            outcome,
            SearchOutcome::Rejected(
                "Course COMP 999 was not found. Please check the subject and number.".to_string()
            )
        );
        assert!(view.navigations().is_empty());
        assert_eq!(view.notifications()[0].kind, NotificationKind::Error);
    }

    #[tokio::test]
    async fn test_search_server_error_uses_generic_message() {
        let api = MockApi::new().with_details(Err(ApiError::Rejected {
            status: 500,
            detail: None,
        }));
        let view = RecordingView::default();
        let controller = HomeController::new(&api, view.clone());

        let outcome = controller.search(DEFAULT_SCHOOL, &SearchTerm::new("COMP", "110")).await;
        assert_eq!(outcome, SearchOutcome::Rejected(LOOKUP_FAILED.to_string()));
    }

    #[tokio::test]
    async fn test_submit_requires_course_fields() {
        let api = MockApi::new();
        let view = RecordingView::default();
        let controller = HomeController::new(&api, view.clone());

        let mut form = filled_form();
        form.course_number.clear();
        let outcome = controller.submit(&form, Utc::now()).await;

        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::MissingCourseFields));
        assert_eq!(api.submit_calls(), 0);
    }

    #[tokio::test]
    async fn test_submit_success_resets_form() {
        let api = MockApi::new();
        let view = RecordingView::default();
        let controller = HomeController::new(&api, view.clone());

        let outcome = controller.submit(&filled_form(), Utc::now()).await;

        assert!(outcome.is_submitted());
        assert_eq!(api.submit_calls(), 1);
        assert_eq!(api.details_calls(), 0);
        assert_eq!(view.resets(), 1);
        assert_eq!(view.notifications()[0].message, SUBMIT_SUCCESS);
        assert_eq!(api.submitted()[0].subject, "COMP");
    }

    #[tokio::test]
    async fn test_submit_failure_shows_backend_detail() {
        let api = MockApi::new().with_submit(Err(ApiError::Rejected {
            status: 400,
            detail: Some("Invalid course".to_string()),
        }));
        let view = RecordingView::default();
        let controller = HomeController::new(&api, view.clone());

        let outcome = controller.submit(&filled_form(), Utc::now()).await;

        assert_eq!(outcome, SubmitOutcome::Failed("Invalid course".to_string()));
        assert_eq!(view.resets(), 0);
    }
}
