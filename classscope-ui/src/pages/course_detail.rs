//! Course Page
//!
//! Statistics, rating distribution and reviews for the course named in the
//! `course` query parameter, plus the "Write a Review" form.

use chrono::Utc;
use leptos::*;

use classscope::controller::{DetailController, HomeController, ReviewFormView};
use classscope::detail::{CourseDetailState, DetailStatus, RatingDistribution};
use classscope::display::format_rating;
use classscope::models::{CourseIdentifier, SearchTerm};

use crate::components::{
    InlineLoading, Loading, Nav, ReviewCard, ReviewFields, SearchBar, StarRating,
};
use crate::state::{navigate_to, DetailHandle, GlobalState, NavSearchHandle};

/// Shown when the query parameter is not "SUBJECT NUMBER"
pub const INVALID_COURSE_CODE: &str =
    "Course codes look like \"COMP 110\": a subject followed by a catalog number.";

/// Course to fetch and the state to render before the fetch completes
pub fn initial_detail(code: &str, school: &str) -> (Option<CourseIdentifier>, CourseDetailState) {
    match CourseIdentifier::from_code(school, code) {
        Some(course) => {
            let state = CourseDetailState::loading(course.code());
            (Some(course), state)
        }
        None => (None, CourseDetailState::not_found(code.trim(), INVALID_COURSE_CODE)),
    }
}

/// Course page component
#[component]
pub fn CourseDetail(code: String) -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let school = state.school.get_untracked();

    let (course, initial) = initial_detail(&code, &school);
    let handle = DetailHandle::new(state, course.clone(), initial);

    match course {
        Some(course) => spawn_local(async move {
            DetailController::new(state.api(), handle).load(&course).await;
        }),
        None => state.show_error(INVALID_COURSE_CODE),
    }

    let nav_term = create_rw_signal(SearchTerm::default());
    let nav = NavSearchHandle {
        global: state,
        term: nav_term,
    };
    let institution = Signal::derive(move || state.institution.get());

    let nav_search = move |_: ()| {
        let school = state.school.get_untracked();
        let term = nav_term.get_untracked();
        spawn_local(async move {
            HomeController::new(state.api(), nav).search(&school, &term).await;
        });
    };

    let detail = handle.state;

    view! {
        <Nav>
            <div class="hidden md:block">
                <SearchBar
                    term=nav_term
                    institution=institution
                    on_search=nav_search
                    id_prefix="nav"
                    compact=true
                />
            </div>
            <button
                type="button"
                class="back-btn px-4 py-2 rounded-lg text-gray-600 hover:text-primary-700 hover:bg-gray-100 transition-colors"
                on:click=move |_| navigate_to("/")
            >
                <i class="fas fa-arrow-left mr-2" />
                "Back to Home"
            </button>
        </Nav>

        <main class="flex-1">
            <section class="course-header bg-gradient-to-br from-primary-700 to-primary-500 text-white">
                <div class="container mx-auto px-4 py-12 flex flex-col md:flex-row md:items-center md:justify-between gap-8">
                    <div>
                        <h1 class="text-4xl font-bold">{move || detail.with(|s| s.code.clone())}</h1>
                        <p class="text-xl text-primary-100 mt-2">{move || detail.with(|s| s.title.clone())}</p>
                        <div class="mt-3 text-primary-100">
                            <span class="mr-2">"•"</span>
                            <span>{school}</span>
                        </div>
                    </div>
                    <div class="rating-summary bg-white/10 rounded-xl px-8 py-6 text-center">
                        <StarRating rating=Signal::derive(move || detail.with(|s| s.overall_rating)) large=true />
                        <div class="text-4xl font-bold mt-2">
                            {move || detail.with(|s| format_rating(s.overall_rating))}
                        </div>
                        <p class="text-primary-100 mt-1">
                            {move || detail.with(|s| format!("Based on {} reviews", s.total_reviews))}
                        </p>
                    </div>
                </div>
            </section>

            <section class="main-content py-10">
                <div class="container mx-auto px-4 max-w-5xl space-y-6">
                    <Card title="Course Description">
                        <p class="description text-gray-700">{move || detail.with(|s| s.description.clone())}</p>
                        {move || (detail.with(|s| s.status) == DetailStatus::Loading).then(|| view! { <Loading caption="Fetching course details..." /> })}
                    </Card>

                    <Card title="Quick Stats">
                        <QuickStats detail=detail />
                    </Card>

                    <Card title="Detailed Ratings">
                        <DetailedRatings detail=detail />
                        <h3 class="text-lg font-semibold mt-8 mb-4">"Rating Distribution"</h3>
                        {move || view! { <RatingBars distribution=detail.with(|s| s.distribution) /> }}
                    </Card>

                    <Card title="Student Reviews">
                        <ReviewSection handle=handle />
                    </Card>
                </div>
            </section>
        </main>
    }
}

#[component]
fn Card(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="card bg-white rounded-xl shadow-sm border border-gray-200 p-6">
            <h2 class="text-2xl font-semibold mb-4">{title}</h2>
            {children()}
        </div>
    }
}

#[component]
fn QuickStats(detail: RwSignal<CourseDetailState>) -> impl IntoView {
    let stat = move |label: &'static str, value: fn(&CourseDetailState) -> String| {
        view! {
            <div class="stat-item bg-gray-50 rounded-lg p-4 flex flex-col">
                <span class="stat-label text-sm text-gray-500">{label}</span>
                <span class="stat-value text-xl font-semibold">{move || detail.with(value)}</span>
            </div>
        }
    };

    view! {
        <div class="stats-grid grid grid-cols-2 md:grid-cols-3 gap-4">
            {stat("Average Grade", |s| s.avg_grade.clone())}
            {stat("Pass Rate", |s| s.pass_rate.clone())}
            {stat("Would Take Again", |s| s.would_take_again_rate.clone())}
            {stat("Attendance Required", |s| s.attendance_rate.clone())}
            {stat("Participation Required", |s| s.participation_rate.clone())}
        </div>
    }
}

#[component]
fn DetailedRatings(detail: RwSignal<CourseDetailState>) -> impl IntoView {
    let metric = move |label: &'static str, value: fn(&CourseDetailState) -> f64| {
        view! {
            <div class="metric-card bg-gray-50 rounded-lg p-4 text-center">
                <div class="metric-label text-sm text-gray-500">{label}</div>
                <div class="metric-value text-2xl font-bold">
                    {move || detail.with(|s| format_rating(value(s)))}
                    <span class="metric-max text-sm text-gray-400">"/5"</span>
                </div>
            </div>
        }
    };

    view! {
        <div class="metrics-grid grid grid-cols-2 md:grid-cols-4 gap-4">
            {metric("Difficulty", |s| s.difficulty)}
            {metric("Workload", |s| s.workload)}
            {metric("Usefulness", |s| s.usefulness)}
            {metric("Engagement/Interesting", |s| s.fun)}
        </div>
    }
}

#[component]
fn RatingBars(distribution: RatingDistribution) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {distribution
                .bars()
                .into_iter()
                .map(|bar| view! {
                    <div class="rating-bar-container flex items-center gap-3 text-sm">
                        <span class="rating-bar-label w-16 text-gray-600">{bar.stars_label()}</span>
                        <div class="rating-bar flex-1 h-3 bg-gray-100 rounded-full overflow-hidden">
                            <div class="rating-bar-fill h-full bg-amber-400" style=bar.width_style() />
                        </div>
                        <span class="w-40 text-right text-gray-500">{bar.count_label()}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

/// "Write a Review" toggle, the form, and the review list
#[component]
fn ReviewSection(handle: DetailHandle) -> impl IntoView {
    let state = handle.global;
    let detail = handle.state;
    let visible = handle.form_visible;
    let submitting = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let form = handle.form.get_untracked();
        submitting.set(true);
        spawn_local(async move {
            DetailController::new(state.api(), handle)
                .submit(&form, Utc::now())
                .await;
            submitting.set(false);
        });
    };

    let cancel = move |_| {
        handle.reset_form();
        visible.set(false);
    };

    view! {
        {move || detail.with(CourseDetailState::is_loaded).then(|| view! {
            <button
                type="button"
                class="add-review-btn mb-6 px-5 py-2 bg-primary-600 hover:bg-primary-700 text-white rounded-lg font-medium transition-colors"
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                <i class="fas fa-plus mr-2" />
                "Write a Review"
            </button>
        })}

        <div class="review-form mb-8" class:hidden=move || !visible.get()>
            <h3 class="text-xl font-semibold mb-4">"Share Your Experience"</h3>
            <form on:submit=on_submit class="space-y-6">
                <ReviewFields form=handle.form id_prefix="detail" />

                <div class="form-actions flex gap-3">
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="submit-btn flex-1 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-400
                               text-white rounded-lg py-3 font-semibold transition-colors
                               flex items-center justify-center space-x-2"
                    >
                        {move || if submitting.get() {
                            view! { <InlineLoading /> <span>"Submitting..."</span> }.into_view()
                        } else {
                            view! { <span>"Submit Review"</span> }.into_view()
                        }}
                    </button>
                    <button
                        type="button"
                        class="cancel-btn px-6 py-3 rounded-lg border border-gray-300 hover:bg-gray-100 transition-colors"
                        on:click=cancel
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>

        <div id="reviewsList">
            {move || {
                let reviews = detail.with(|s| s.reviews.clone());
                if reviews.is_empty() {
                    view! {
                        <p class="text-gray-500 text-center py-8">
                            "No reviews yet. Be the first to share your experience!"
                        </p>
                    }
                    .into_view()
                } else {
                    reviews
                        .into_iter()
                        .map(|review| view! { <ReviewCard review=review /> })
                        .collect_view()
                }
            }}
        </div>
    }
}
