//! App Root Component
//!
//! Provides global state and picks the page from the query string.

use leptos::*;

use classscope::router::Route;

use crate::components::{Loading, Toast};
use crate::pages::{CourseDetail, Home};
use crate::state::provide_global_state;

/// Route for this page load; read once, there is no client-side history
fn current_route() -> Route {
    let search = window().location().search().unwrap_or_default();
    Route::from_query(&search)
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();
    state.load_server_settings();

    let route = current_route();

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
            {move || {
                if !state.ready.get() {
                    return view! { <Loading caption="Loading ClassScope..." /> }.into_view();
                }
                match route.clone() {
                    Route::Home => view! { <Home /> }.into_view(),
                    Route::Course(code) => view! { <CourseDetail code=code /> }.into_view(),
                }
            }}

            <Footer />

            // Toast notifications
            <Toast />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer bg-gray-900 text-gray-300 mt-auto">
            <div class="container mx-auto px-4 py-10 grid md:grid-cols-2 gap-6">
                <div>
                    <h3 class="text-white text-lg font-semibold mb-2">"ClassScope"</h3>
                    <p class="text-sm">"Empowering students with honest course reviews and ratings."</p>
                </div>
                <div class="md:text-right text-sm self-end">
                    "© 2025 ClassScope. All rights reserved."
                </div>
            </div>
        </footer>
    }
}
