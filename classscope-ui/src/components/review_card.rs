//! Review Card Component

use leptos::*;

use classscope::detail::ReviewView;
use classscope::display::format_review_date;

use super::StarRating;

#[component]
pub fn ReviewCard(review: ReviewView) -> impl IntoView {
    let extras = review
        .extras()
        .into_iter()
        .map(|(label, value)| format!("{}: {}", label, value))
        .collect::<Vec<_>>();

    view! {
        <div class="review-item border-b border-gray-100 py-5 last:border-0">
            <div class="flex items-center justify-between mb-3">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-full bg-primary-100 text-primary-700 flex items-center justify-center">
                        <i class="fas fa-user" />
                    </div>
                    <div>
                        <h4 class="font-semibold">{review.author}</h4>
                        <span class="text-sm text-gray-500">{format_review_date(&review.date)}</span>
                    </div>
                </div>
                <StarRating rating=f64::from(review.rating) />
            </div>

            <p class="text-gray-700 mb-3">{review.text}</p>

            <div class="flex flex-wrap gap-x-5 gap-y-2 text-sm text-gray-600">
                <Metric icon="fas fa-chart-line" text=format!("Difficulty: {}/5", review.difficulty) />
                <Metric icon="fas fa-briefcase" text=format!("Workload: {}/5", review.workload) />
                <Metric icon="fas fa-user-tie" text=format!("Usefulness: {}/5", review.usefulness) />
                <Metric icon="fas fa-smile" text=format!("Fun: {}/5", review.fun) />
                <Metric icon="fas fa-graduation-cap" text=format!("Grade: {}", review.grade) />
                {extras
                    .into_iter()
                    .map(|text| view! { <Metric icon="fas fa-info-circle" text=text /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Metric(icon: &'static str, text: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-1.5">
            <i class=icon />
            <span>{text}</span>
        </div>
    }
}
