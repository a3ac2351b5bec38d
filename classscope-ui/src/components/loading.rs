//! Loading Component

use leptos::*;

/// Spinner with an optional caption underneath
#[component]
pub fn Loading(#[prop(optional)] caption: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-3 py-12 text-gray-500" aria-busy="true">
            <div class="loading-spinner w-8 h-8" />
            {caption.map(|text| view! { <p class="text-sm">{text}</p> })}
        </div>
    }
}

/// Spinner sized for a button label
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! { <span class="inline-block loading-spinner w-4 h-4 mr-2" aria-hidden="true" /> }
}
