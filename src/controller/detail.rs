//! Course detail controller

use chrono::{DateTime, Utc};

use super::{DetailView, SubmitOutcome, FETCH_FAILED, SUBMIT_FAILED, SUBMIT_SUCCESS};
use crate::api::ReviewApi;
use crate::detail::{CourseDetailState, DetailStatus};
use crate::models::{CourseIdentifier, ReviewForm};
use crate::notification::Notification;

/// What a course fetch did to the view
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Loaded,
    NotFound(String),
    Failed(String),
    /// The view moved on to another course before the response arrived
    Stale,
}

pub struct DetailController<A, V> {
    api: A,
    view: V,
}

impl<A: ReviewApi, V: DetailView> DetailController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self { api, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn is_current(&self, course: &CourseIdentifier) -> bool {
        self.view.current_course().as_ref() == Some(course)
    }

    /// Fetch `course` and rebuild the detail state from the response
    ///
    /// The result is applied only while `course` is still the view's
    /// current course.
    pub async fn load(&self, course: &CourseIdentifier) -> FetchOutcome {
        tracing::debug!(course = %course, "Loading course details");
        let result = self.api.course_details(course).await;

        if !self.is_current(course) {
            tracing::debug!(course = %course, "Discarding stale course response");
            return FetchOutcome::Stale;
        }

        match result {
            Ok(response) => {
                self.view.show_state(CourseDetailState::from_response(response));
                FetchOutcome::Loaded
            }
            Err(e) if e.is_not_found() => {
                let message = e.to_string();
                tracing::info!(course = %course, "Course not found");
                self.view.notify(Notification::error(message.clone()));
                self.view
                    .show_state(CourseDetailState::not_found(course.code(), message.clone()));
                FetchOutcome::NotFound(message)
            }
            Err(e) => {
                tracing::warn!(course = %course, error = %e, "Course fetch failed");
                self.view.notify(Notification::error(FETCH_FAILED));
                // Keep a loaded course on screen; only replace the placeholder.
                if self.view.state_status() == DetailStatus::Loading {
                    self.view
                        .show_state(CourseDetailState::not_found(course.code(), FETCH_FAILED));
                }
                FetchOutcome::Failed(e.to_string())
            }
        }
    }

    /// Validate and post a review for the current course, then refetch
    pub async fn submit(&self, form: &ReviewForm, now: DateTime<Utc>) -> SubmitOutcome {
        let Some(course) = self.view.current_course() else {
            self.view.notify(Notification::error(SUBMIT_FAILED));
            return SubmitOutcome::Failed(SUBMIT_FAILED.to_string());
        };

        let record = match form.build(&course, now) {
            Ok(record) => record,
            Err(e) => {
                self.view.notify(Notification::error(e.to_string()));
                return SubmitOutcome::Invalid(e);
            }
        };

        match self.api.submit_review(&record).await {
            Ok(()) => {
                tracing::info!(course = %course, rating = record.rating, "Review submitted");
                self.load(&course).await;
                self.view.reset_form();
                self.view.hide_form();
                self.view.notify(Notification::success(SUBMIT_SUCCESS));
                SubmitOutcome::Submitted
            }
            Err(e) => {
                tracing::warn!(course = %course, error = %e, "Review submission failed");
                let message = e.user_message(SUBMIT_FAILED);
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
    use crate::controller::testing::{details_for, MockApi, RecordingView};
    use crate::models::{OptionalField, ValidationError};
    use crate::notification::NotificationKind;

    fn comp110() -> CourseIdentifier {
        CourseIdentifier::at_default_school("COMP", "110")
    }

    fn rated_form() -> ReviewForm {
        let mut form = ReviewForm::new();
        form.set_rating(5);
        form
    }

    #[tokio::test]
    async fn test_load_success() {
        let api = MockApi::new().with_details(Ok(details_for("COMP", "110")));
        let view = RecordingView::showing(comp110());
        let controller = DetailController::new(&api, view.clone());

        assert_eq!(controller.load(&comp110()).await, FetchOutcome::Loaded);

        let state = view.last_state().unwrap();
        assert!(state.is_loaded());
        assert_eq!(state.code, "COMP 110");
        assert!(view.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_load_not_found_replaces_loading() {
        let api = MockApi::new().with_details(Err(ApiError::from_status(404, "", &comp110())));
        let view = RecordingView::showing(comp110());
        let controller = DetailController::new(&api, view.clone());

        let outcome = controller.load(&comp110()).await;
        assert!(matches!(outcome, FetchOutcome::NotFound(_)));

        let state = view.last_state().unwrap();
        assert_eq!(state.status, DetailStatus::NotFound);
        assert_eq!(state.title, "Course Not Found");
        assert_eq!(state.code, "COMP 110");
        assert!(!state.title.contains("Loading") && !state.code.contains("Loading"));

        let notes = view.notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NotificationKind::Error);
        assert_eq!(notes[0].message, state.description);
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_loaded_state() {
        let api = MockApi::new()
            .with_details(Ok(details_for("COMP", "110")))
            .with_details(Err(ApiError::Transport("refused".to_string())));
        let view = RecordingView::showing(comp110());
        let controller = DetailController::new(&api, view.clone());

        controller.load(&comp110()).await;
        let outcome = controller.load(&comp110()).await;

        assert!(matches!(outcome, FetchOutcome::Failed(_)));
        assert_eq!(view.states().len(), 1);
        assert!(view.last_state().unwrap().is_loaded());
        assert_eq!(view.notifications()[0].message, FETCH_FAILED);
    }

    #[tokio::test]
    async fn test_transport_failure_replaces_placeholder() {
        let api = MockApi::new().with_details(Err(ApiError::Parse("eof".to_string())));
        let view = RecordingView::showing(comp110());
        let controller = DetailController::new(&api, view.clone());

        controller.load(&comp110()).await;
        let state = view.last_state().unwrap();
        assert_eq!(state.status, DetailStatus::NotFound);
        assert_eq!(state.description, FETCH_FAILED);
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let api = MockApi::new().with_details(Ok(details_for("COMP", "110")));
        let view = RecordingView::showing(CourseIdentifier::at_default_school("MATH", "231"));
        let controller = DetailController::new(&api, view.clone());

        assert_eq!(controller.load(&comp110()).await, FetchOutcome::Stale);
        assert!(view.states().is_empty());
        assert!(view.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_submit_without_rating_makes_no_request() {
        let api = MockApi::new();
        let view = RecordingView::showing(comp110());
        let controller = DetailController::new(&api, view.clone());

        let outcome = controller.submit(&ReviewForm::new(), Utc::now()).await;

        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::MissingRating));
        assert_eq!(api.submit_calls(), 0);
        assert_eq!(api.details_calls(), 0);
        assert_eq!(view.resets(), 0);
        assert_eq!(view.notifications()[0].kind, NotificationKind::Error);
    }

    #[tokio::test]
    async fn test_successful_submit_refetches_once() {
        let api = MockApi::new().with_details(Ok(details_for("COMP", "110")));
        let view = RecordingView::showing(comp110());
        let controller = DetailController::new(&api, view.clone());

        let mut form = rated_form();
        form.set_optional(OptionalField::Grade, "A");
        let outcome = controller.submit(&form, Utc::now()).await;

        assert!(outcome.is_submitted());
        assert_eq!(api.submit_calls(), 1);
        assert_eq!(api.details_calls(), 1);
        assert_eq!(view.resets(), 1);
        assert_eq!(view.hides(), 1);

        let successes: Vec<_> = view
            .notifications()
            .into_iter()
            .filter(|n| n.kind == NotificationKind::Success)
            .collect();
        assert_eq!(successes.len(), 1);
        assert_eq!(successes[0].message, SUBMIT_SUCCESS);

        let posted = api.submitted();
        assert_eq!(posted[0].grade.as_deref(), Some("A"));
        assert_eq!(posted[0].subject, "COMP");
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form() {
        let api = MockApi::new().with_submit(Err(ApiError::Rejected {
            status: 422,
            detail: Some("rating out of range".to_string()),
        }));
        let view = RecordingView::showing(comp110());
        let controller = DetailController::new(&api, view.clone());

        let outcome = controller.submit(&rated_form(), Utc::now()).await;

        assert_eq!(outcome, SubmitOutcome::Failed("rating out of range".to_string()));
        assert_eq!(api.details_calls(), 0);
        assert_eq!(view.resets(), 0);
        assert_eq!(view.notifications()[0].message, "rating out of range");
    }

    #[tokio::test]
    async fn test_failed_submit_generic_message() {
        let api = MockApi::new().with_submit(Err(ApiError::Transport("down".to_string())));
        let view = RecordingView::showing(comp110());
        let controller = DetailController::new(&api, view.clone());

        let outcome = controller.submit(&rated_form(), Utc::now()).await;
        assert_eq!(outcome, SubmitOutcome::Failed(SUBMIT_FAILED.to_string()));
    }
}
