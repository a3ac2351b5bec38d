//! Home Page
//!
//! Hero with the school picker, popular courses with search, and the
//! review upload form.

use chrono::Utc;
use leptos::*;

use classscope::catalog::{CourseRecord, DEFAULT_SCHOOL};
use classscope::controller::{HomeController, ReviewFormView};
use classscope::filter::filter_courses;
use classscope::models::SearchTerm;

use crate::components::{
    scroll_to, CatalogOptions, CourseCard, InlineLoading, Nav, ReviewFields, SearchBar,
    SectionLink, SubjectOptions,
};
use crate::state::{GlobalState, HomeHandle};

const SELECT_SCHOOL: &str = "Please select a university first!";

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = expect_context::<GlobalState>();
    let handle = HomeHandle::new(state);

    let home_ref = create_node_ref::<html::Section>();
    let about_ref = create_node_ref::<html::Section>();
    let courses_ref = create_node_ref::<html::Section>();
    let upload_ref = create_node_ref::<html::Section>();

    let university = create_rw_signal(state.school.get_untracked());
    let term = create_rw_signal(SearchTerm::default());
    let institution = Signal::derive(move || state.institution_for(&university.get()));

    let courses = create_memo(move |_| {
        let key = institution.get();
        term.with(|term| {
            state.catalog.with(|catalog| {
                filter_courses(catalog, &key, term)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<CourseRecord>>()
            })
        })
    });

    let browse = move |_| {
        if university.with(|u| u.trim().is_empty()) {
            state.show_error(SELECT_SCHOOL);
            return;
        }
        term.update(SearchTerm::clear);
        scroll_to(courses_ref);
    };

    let search = move |_: ()| {
        let school = university.get_untracked();
        let term = term.get_untracked();
        spawn_local(async move {
            HomeController::new(state.api(), handle).search(&school, &term).await;
        });
    };

    view! {
        <Nav>
            <SectionLink label="Home" anchor="home" target=home_ref />
            <SectionLink label="Browse Courses" anchor="courses" target=courses_ref />
            <SectionLink label="Upload Review" anchor="upload" target=upload_ref />
            <SectionLink label="About" anchor="about" target=about_ref />
        </Nav>

        <main class="flex-1">
            <section id="home" node_ref=home_ref class="hero bg-gradient-to-br from-primary-700 to-primary-500 text-white">
                <div class="container mx-auto px-4 py-20 max-w-4xl">
                    <h1 class="text-4xl md:text-5xl font-bold mb-6">
                        "Find the Perfect Course with "
                        <span class="text-amber-300">"Student Reviews"</span>
                    </h1>
                    <p class="text-lg text-primary-100 mb-8">
                        "Discover honest reviews, ratings, and insights from fellow students who have \
                         actually taken the courses. Make informed decisions about your academic journey."
                    </p>

                    <div class="university-selector flex flex-col md:flex-row gap-3">
                        <div class="flex-1 flex items-center gap-3 bg-white text-gray-900 rounded-lg px-4">
                            <i class="fas fa-university text-gray-400" />
                            <input
                                class="flex-1 py-3 focus:outline-none"
                                placeholder="Select or search your school"
                                list="universityOptions"
                                autocomplete="off"
                                prop:value=move || university.get()
                                on:input=move |ev| university.set(event_target_value(&ev))
                            />
                            <UniversityOptions />
                        </div>
                        <button
                            type="button"
                            class="browse-btn px-6 py-3 bg-amber-400 hover:bg-amber-300 text-gray-900 rounded-lg font-semibold transition-colors"
                            on:click=browse
                        >
                            <i class="fas fa-search mr-2" />
                            "Browse Courses"
                        </button>
                    </div>
                </div>
            </section>

            <section id="about" node_ref=about_ref class="features py-16 bg-white">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-center mb-10">"Why Choose ClassScope?"</h2>
                    <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                        <Feature icon="fas fa-star" title="Real Student Reviews"
                            text="Get authentic feedback from students who have actually taken the courses" />
                        <Feature icon="fas fa-chart-line" title="Detailed Ratings"
                            text="Comprehensive ratings for difficulty, workload, usefulness, and more" />
                        <Feature icon="fas fa-upload" title="Easy Upload"
                            text="Share your own course experiences quickly and easily" />
                        <Feature icon="fas fa-search" title="Smart Search"
                            text="Find courses by keywords and subjects" />
                    </div>
                </div>
            </section>

            <section id="courses" node_ref=courses_ref class="course-browse py-16">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-center mb-8">"Popular Courses"</h2>
                    <div class="max-w-3xl mx-auto mb-10">
                        <SearchBar term=term institution=institution on_search=search id_prefix="browse" />
                    </div>

                    {move || {
                        let courses = courses.get();
                        if courses.is_empty() {
                            view! {
                                <div class="no-courses text-center text-gray-500 py-12">
                                    "No courses found matching your criteria."
                                </div>
                            }
                            .into_view()
                        } else {
                            view! {
                                <div class="course-grid grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                    {courses
                                        .into_iter()
                                        .map(|course| view! { <CourseCard course=course /> })
                                        .collect_view()}
                                </div>
                            }
                            .into_view()
                        }
                    }}
                </div>
            </section>

            <section id="upload" node_ref=upload_ref class="upload-section py-16 bg-white">
                <div class="container mx-auto px-4 max-w-2xl">
                    <h2 class="text-3xl font-bold text-center mb-2">"Help Other Students Choose"</h2>
                    <h3 class="text-center text-gray-500 mb-8">"Your review could save someone's GPA"</h3>
                    <UploadForm handle=handle />
                </div>
            </section>
        </main>
    }
}

#[component]
fn UniversityOptions() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <datalist id="universityOptions">
            <option value=DEFAULT_SCHOOL />
            {move || {
                let school = state.school.get();
                (school != DEFAULT_SCHOOL).then(|| view! { <option value=school /> })
            }}
        </datalist>
    }
}

#[component]
fn Feature(icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card text-center p-6 rounded-xl bg-gray-50">
            <div class="w-14 h-14 mx-auto mb-4 rounded-full bg-primary-100 text-primary-700 flex items-center justify-center text-2xl">
                <i class=icon />
            </div>
            <h3 class="font-semibold text-lg mb-2">{title}</h3>
            <p class="text-gray-600 text-sm">{text}</p>
        </div>
    }
}

/// Homepage review upload form
#[component]
fn UploadForm(handle: HomeHandle) -> impl IntoView {
    let state = handle.global;
    let upload = handle.upload;
    let submitting = create_rw_signal(false);

    let institution = Signal::derive(move || upload.with(|f| state.institution_for(&f.school)));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let form = handle.snapshot();
        submitting.set(true);
        spawn_local(async move {
            HomeController::new(state.api(), handle)
                .submit(&form, Utc::now())
                .await;
            submitting.set(false);
        });
    };

    let input_class = "w-full rounded-lg border border-gray-300 px-4 py-3 focus:border-primary-500 focus:outline-none";

    view! {
        <form on:submit=on_submit class="upload-form space-y-6 bg-gray-50 rounded-xl p-6 shadow-sm">
            <div>
                <label for="schoolSelect" class="block text-sm font-medium text-gray-700 mb-2">"School"</label>
                <input
                    id="schoolSelect"
                    class=input_class
                    placeholder="Select or search your school..."
                    list="universityOptions"
                    autocomplete="off"
                    prop:value=move || upload.with(|f| f.school.clone())
                    on:input=move |ev| upload.update(|f| f.school = event_target_value(&ev))
                />
            </div>

            <div>
                <label for="subjectInput" class="block text-sm font-medium text-gray-700 mb-2">"Subject"</label>
                <input
                    id="subjectInput"
                    class=input_class
                    placeholder="Select or search subject..."
                    list="uploadSubjectOptions"
                    autocomplete="off"
                    prop:value=move || upload.with(|f| f.subject.clone())
                    on:input=move |ev| upload.update(|f| f.subject = event_target_value(&ev))
                />
                <SubjectOptions id="uploadSubjectOptions" />
            </div>

            <div>
                <label for="courseNumber" class="block text-sm font-medium text-gray-700 mb-2">"Catalog Number"</label>
                <input
                    id="courseNumber"
                    class=input_class
                    placeholder="e.g., 101, 210, 320, etc."
                    list="uploadCatalogNumberList"
                    autocomplete="off"
                    prop:value=move || upload.with(|f| f.course_number.clone())
                    on:input=move |ev| upload.update(|f| f.course_number = event_target_value(&ev))
                />
                <CatalogOptions
                    id="uploadCatalogNumberList"
                    institution=institution
                    subject=Signal::derive(move || upload.with(|f| f.subject.clone()))
                />
            </div>

            <ReviewFields form=handle.review id_prefix="upload" />

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
                        view! { <i class="fas fa-upload" /> <span>"Submit Review"</span> }.into_view()
                    }}
                </button>
                <button
                    type="button"
                    class="cancel-btn px-6 py-3 rounded-lg border border-gray-300 hover:bg-gray-100 transition-colors"
                    on:click=move |_| handle.reset_form()
                >
                    "Clear Form"
                </button>
            </div>
        </form>
    }
}
