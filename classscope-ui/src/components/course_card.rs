//! Course Card Component
//!
//! Summary of one catalog course; clicking opens its course page.

use leptos::*;

use classscope::catalog::CourseRecord;
use classscope::display::format_rating;
use classscope::router::Route;

use super::StarRating;
use crate::state::navigate_to;

#[component]
pub fn CourseCard(course: CourseRecord) -> impl IntoView {
    let href = Route::Course(course.title.clone()).href();

    view! {
        <div
            class="course-card bg-white rounded-xl shadow-sm hover:shadow-md border border-gray-200
                   p-5 cursor-pointer transition-shadow flex flex-col gap-3"
            on:click=move |_| navigate_to(&href)
        >
            <div class="flex items-start justify-between gap-4">
                <div>
                    <div class="text-lg font-bold text-gray-900">{course.title}</div>
                    <div class="text-sm text-gray-500">{course.code}</div>
                </div>
                <div class="flex flex-col items-end">
                    <StarRating rating=course.rating />
                    <div class="text-sm text-gray-600 mt-1">
                        {format!("{}/5", format_rating(course.rating))}
                    </div>
                </div>
            </div>

            <div class="text-sm text-gray-500">
                <i class="fas fa-comments mr-1" />
                {format!("{} reviews", course.review_count)}
            </div>

            <p class="text-sm text-gray-700 flex-1">{course.description}</p>

            <div class="flex justify-between text-sm text-gray-600 border-t border-gray-100 pt-3">
                <span>{format!("Difficulty: {}/5", format_rating(course.difficulty))}</span>
                <span>{format!("Workload: {}/5", format_rating(course.workload))}</span>
            </div>
        </div>
    }
}
