//! Review Form Fields
//!
//! The rating, slider, optional-answer and text fields shared by the
//! homepage upload form and the course page's "Write a Review" form.
//! Submission and the surrounding `<form>` belong to the page.

use leptos::*;

use classscope::display::MAX_STARS;
use classscope::models::form::{SLIDER_MAX, SLIDER_MIN};
use classscope::models::{OptionalField, RatingMetric, ReviewForm};

/// All review fields bound to one [`ReviewForm`]
#[component]
pub fn ReviewFields(
    form: RwSignal<ReviewForm>,
    /// Prefix for element ids, unique per page
    id_prefix: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-2">"Overall Rating"</label>
                <OverallRating form=form />
            </div>

            <div class="rating-section bg-gray-50 rounded-lg p-4 space-y-4">
                <h4 class="font-semibold">"Detailed Ratings"</h4>
                {RatingMetric::ALL
                    .into_iter()
                    .map(|metric| view! {
                        <RatingSlider
                            form=form
                            metric=metric
                            id=format!("{}-{}", id_prefix, metric.key())
                        />
                    })
                    .collect_view()}
            </div>

            <div class="space-y-2">
                {OptionalField::ALL
                    .into_iter()
                    .map(|field| view! {
                        <OptionalSection
                            form=form
                            field=field
                            id=format!("{}-{}", id_prefix, field.key())
                        />
                    })
                    .collect_view()}
            </div>

            <div>
                <label
                    for=format!("{}-reviewText", id_prefix)
                    class="block text-sm font-medium text-gray-700 mb-2"
                >
                    "Your Review"
                </label>
                <textarea
                    id=format!("{}-reviewText", id_prefix)
                    rows="4"
                    placeholder="Share your thoughts about this course..."
                    class="w-full rounded-lg border border-gray-300 px-4 py-3 focus:border-primary-500 focus:outline-none"
                    prop:value=move || form.with(|f| f.review_text.clone())
                    on:input=move |ev| form.update(|f| f.review_text = event_target_value(&ev))
                />
            </div>
        </div>
    }
}

#[component]
fn OverallRating(form: RwSignal<ReviewForm>) -> impl IntoView {
    let selected = move || form.with(|f| f.rating.unwrap_or(0));

    view! {
        <div class="rating-input flex gap-1 text-3xl" role="radiogroup" aria-label="Overall Rating">
            {(1..=MAX_STARS)
                .map(|stars| view! {
                    <button
                        type="button"
                        role="radio"
                        aria-label=format!("{} stars", stars)
                        aria-checked=move || (selected() == stars).to_string()
                        class=move || {
                            if selected() >= stars {
                                "text-amber-400 transition-colors"
                            } else {
                                "text-gray-300 hover:text-amber-300 transition-colors"
                            }
                        }
                        on:click=move |_| form.update(|f| f.set_rating(stars))
                    >
                        <i class="fas fa-star" />
                    </button>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn RatingSlider(form: RwSignal<ReviewForm>, metric: RatingMetric, id: String) -> impl IntoView {
    let value = move || form.with(|f| f.ratings.get(metric));

    view! {
        <div class="form-group">
            <label for=id.clone() class="block text-sm text-gray-600 mb-1">{metric.label()}</label>
            <div class="range-container flex items-center gap-3">
                <input
                    type="range"
                    id=id
                    min=SLIDER_MIN
                    max=SLIDER_MAX
                    step="1"
                    class="flex-1"
                    prop:value=move || value().to_string()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<u8>() {
                            form.update(|f| f.ratings.set(metric, v));
                        }
                    }
                />
                <span class="range-value w-6 text-center font-semibold">{value}</span>
            </div>
        </div>
    }
}

/// Collapsible section holding one optional answer
#[component]
fn OptionalSection(form: RwSignal<ReviewForm>, field: OptionalField, id: String) -> impl IntoView {
    let expanded = move || form.with(|f| f.expanded.is_expanded(field));

    view! {
        <div class=move || {
            if expanded() {
                "optional-form-section expanded-section border border-primary-200 rounded-lg"
            } else {
                "optional-form-section border border-gray-200 rounded-lg"
            }
        }>
            <button
                type="button"
                class="w-full flex items-center justify-between px-4 py-3 text-sm font-medium text-gray-700"
                aria-expanded=move || expanded().to_string()
                on:click=move |_| form.update(|f| f.expanded.toggle(field))
            >
                <span>{field.label()}</span>
                <i class=move || if expanded() { "fas fa-minus" } else { "fas fa-plus" } />
            </button>

            <div class="optional-content px-4 pb-4" class:hidden=move || !expanded()>
                <select
                    id=id
                    class="w-full rounded-lg border border-gray-300 px-3 py-2"
                    on:change=move |ev| form.update(|f| f.set_optional(field, event_target_value(&ev)))
                >
                    <option
                        value=""
                        prop:selected=move || form.with(|f| f.optional(field).is_none())
                    >
                        {field.placeholder()}
                    </option>
                    {field
                        .choices()
                        .iter()
                        .map(|(value, label)| {
                            let value = *value;
                            view! {
                                <option
                                    value=value
                                    prop:selected=move || form.with(|f| f.optional(field) == Some(value))
                                >
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
