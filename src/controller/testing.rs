//! In-memory doubles for controller tests

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use super::{DetailView, Feedback, HomeView, ReviewFormView};
use crate::api::{ApiResult, CourseDetailsResponse, CourseStats, ReviewApi};
use crate::detail::{CourseDetailState, DetailStatus};
use crate::models::{CourseIdentifier, ReviewRecord};
use crate::notification::Notification;

/// A minimal successful details response
pub fn details_for(subject: &str, number: &str) -> CourseDetailsResponse {
    CourseDetailsResponse {
        title: format!("{} {}", subject, number),
        description: "Test course".to_string(),
        subject: subject.to_string(),
        course_number: number.to_string(),
        stats: CourseStats {
            overall_rating: 4.0,
            total_reviews: 1,
            ..CourseStats::default()
        },
        reviews: Vec::new(),
    }
}

/// Scripted review API; details responses are consumed in order
#[derive(Default)]
pub struct MockApi {
    details: RefCell<VecDeque<ApiResult<CourseDetailsResponse>>>,
    submit: RefCell<Option<ApiResult<()>>>,
    details_calls: Cell<usize>,
    submitted: RefCell<Vec<ReviewRecord>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_details(self, result: ApiResult<CourseDetailsResponse>) -> Self {
        self.details.borrow_mut().push_back(result);
        self
    }

    pub fn with_submit(self, result: ApiResult<()>) -> Self {
        *self.submit.borrow_mut() = Some(result);
        self
    }

    pub fn details_calls(&self) -> usize {
        self.details_calls.get()
    }

    pub fn submit_calls(&self) -> usize {
        self.submitted.borrow().len()
    }

    pub fn submitted(&self) -> Vec<ReviewRecord> {
        self.submitted.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ReviewApi for MockApi {
    async fn course_details(&self, course: &CourseIdentifier) -> ApiResult<CourseDetailsResponse> {
        self.details_calls.set(self.details_calls.get() + 1);
        self.details
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(details_for(&course.subject, &course.course_number)))
    }

    async fn submit_review(&self, review: &ReviewRecord) -> ApiResult<()> {
        self.submitted.borrow_mut().push(review.clone());
        self.submit.borrow().clone().unwrap_or(Ok(()))
    }
}

#[derive(Default)]
struct Recorded {
    course: Option<CourseIdentifier>,
    states: Vec<CourseDetailState>,
    notifications: Vec<Notification>,
    navigations: Vec<String>,
    resets: usize,
    hides: usize,
}

/// View double recording every call; clones share the recording
#[derive(Clone, Default)]
pub struct RecordingView(Rc<RefCell<Recorded>>);

impl RecordingView {
    pub fn showing(course: CourseIdentifier) -> Self {
        let view = Self::default();
        view.0.borrow_mut().course = Some(course);
        view
    }

    pub fn states(&self) -> Vec<CourseDetailState> {
        self.0.borrow().states.clone()
    }

    pub fn last_state(&self) -> Option<CourseDetailState> {
        self.0.borrow().states.last().cloned()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.0.borrow().notifications.clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.0.borrow().navigations.clone()
    }

    pub fn resets(&self) -> usize {
        self.0.borrow().resets
    }

    pub fn hides(&self) -> usize {
        self.0.borrow().hides
    }
}

impl Feedback for RecordingView {
    fn notify(&self, notification: Notification) {
        self.0.borrow_mut().notifications.push(notification);
    }
}

impl ReviewFormView for RecordingView {
    fn reset_form(&self) {
        self.0.borrow_mut().resets += 1;
    }
}

impl DetailView for RecordingView {
    fn current_course(&self) -> Option<CourseIdentifier> {
        self.0.borrow().course.clone()
    }

    fn state_status(&self) -> DetailStatus {
        self.0
            .borrow()
            .states
            .last()
            .map(|s| s.status)
            .unwrap_or(DetailStatus::Loading)
    }

    fn show_state(&self, state: CourseDetailState) {
        self.0.borrow_mut().states.push(state);
    }

    fn hide_form(&self) {
        self.0.borrow_mut().hides += 1;
    }
}

impl HomeView for RecordingView {
    fn navigate(&self, href: &str) {
        self.0.borrow_mut().navigations.push(href.to_string());
    }
}
