//! Toast Notification Component
//!
//! Shows the current success or error notification.

use leptos::*;

use classscope::notification::{Notification, NotificationKind};

use crate::state::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="fixed top-20 right-4 z-50" aria-live="polite">
            {move || {
                state
                    .notifications
                    .with(|center| center.current().cloned())
                    .map(|notification| view! { <ToastMessage notification=notification /> })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(notification: Notification) -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let bg_class = match notification.kind {
        NotificationKind::Success => "bg-emerald-500",
        NotificationKind::Error => "bg-red-500",
    };

    view! {
        <div
            role="status"
            class=format!(
                "toast-{} flex items-center space-x-3 {} text-white px-5 py-4 rounded-lg shadow-lg \
                 max-w-md animate-slide-in",
                notification.kind.as_str(),
                bg_class
            )
        >
            <i class=notification.kind.icon() />
            <span class="text-sm font-medium flex-1">{notification.message}</span>
            <button
                type="button"
                aria-label="Dismiss"
                class="text-white/80 hover:text-white"
                on:click=move |_| state.dismiss()
            >
                <i class="fas fa-times" />
            </button>
        </div>
    }
}
