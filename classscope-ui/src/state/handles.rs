//! View handles
//!
//! Signal-backed implementations of the controller view traits. Each
//! handle is `Copy`, so it moves freely into event handlers and
//! `spawn_local` futures.

use leptos::*;
use wasm_bindgen::JsValue;

use classscope::controller::{DetailView, Feedback, HomeView, ReviewFormView};
use classscope::detail::{CourseDetailState, DetailStatus};
use classscope::models::{CourseIdentifier, HomeReviewForm, ReviewForm, SearchTerm};
use classscope::notification::Notification;

use super::console_error;
use super::global::GlobalState;

/// Full page navigation; there is no client-side history
pub fn navigate_to(href: &str) {
    let result: Result<(), JsValue> = window().location().set_href(href);
    if let Err(e) = result {
        console_error(&format!("Navigation to {} failed: {:?}", href, e));
    }
}

/// The course page
#[derive(Clone, Copy)]
pub struct DetailHandle {
    pub global: GlobalState,
    pub course: RwSignal<Option<CourseIdentifier>>,
    pub state: RwSignal<CourseDetailState>,
    pub form: RwSignal<ReviewForm>,
    pub form_visible: RwSignal<bool>,
}

impl DetailHandle {
    pub fn new(global: GlobalState, course: Option<CourseIdentifier>, state: CourseDetailState) -> Self {
        Self {
            global,
            course: create_rw_signal(course),
            state: create_rw_signal(state),
            form: create_rw_signal(ReviewForm::new()),
            form_visible: create_rw_signal(false),
        }
    }
}

impl Feedback for DetailHandle {
    fn notify(&self, notification: Notification) {
        self.global.notify(notification);
    }
}

impl ReviewFormView for DetailHandle {
    fn reset_form(&self) {
        self.form.update(ReviewForm::reset);
    }
}

impl DetailView for DetailHandle {
    fn current_course(&self) -> Option<CourseIdentifier> {
        self.course.get_untracked()
    }

    fn state_status(&self) -> DetailStatus {
        self.state.with_untracked(|s| s.status)
    }

    fn show_state(&self, state: CourseDetailState) {
        self.state.set(state);
    }

    fn hide_form(&self) {
        self.form_visible.set(false);
    }
}

/// The homepage: search box plus the upload form
#[derive(Clone, Copy)]
pub struct HomeHandle {
    pub global: GlobalState,
    /// School, subject and number of the upload form
    pub upload: RwSignal<HomeReviewForm>,
    /// Rating fields of the upload form
    pub review: RwSignal<ReviewForm>,
}

impl HomeHandle {
    pub fn new(global: GlobalState) -> Self {
        Self {
            global,
            upload: create_rw_signal(HomeReviewForm::default()),
            review: create_rw_signal(ReviewForm::new()),
        }
    }

    /// The complete upload form as the controller sees it
    pub fn snapshot(&self) -> HomeReviewForm {
        let mut form = self.upload.get_untracked();
        form.review = self.review.get_untracked();
        form
    }
}

impl Feedback for HomeHandle {
    fn notify(&self, notification: Notification) {
        self.global.notify(notification);
    }
}

impl ReviewFormView for HomeHandle {
    fn reset_form(&self) {
        self.upload.update(HomeReviewForm::reset);
        self.review.update(ReviewForm::reset);
    }
}

impl HomeView for HomeHandle {
    fn navigate(&self, href: &str) {
        navigate_to(href);
    }
}

/// The search box in the course page header
#[derive(Clone, Copy)]
pub struct NavSearchHandle {
    pub global: GlobalState,
    pub term: RwSignal<SearchTerm>,
}

impl Feedback for NavSearchHandle {
    fn notify(&self, notification: Notification) {
        self.global.notify(notification);
    }
}

impl ReviewFormView for NavSearchHandle {
    fn reset_form(&self) {
        self.term.update(SearchTerm::clear);
    }
}

impl HomeView for NavSearchHandle {
    fn navigate(&self, href: &str) {
        navigate_to(href);
    }
}
