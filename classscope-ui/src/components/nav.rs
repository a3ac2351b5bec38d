//! Navigation Component
//!
//! Header bar with the logo; each page supplies the right-hand side.

use leptos::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Navigation header component
#[component]
pub fn Nav(children: Children) -> impl IntoView {
    view! {
        <nav class="sticky top-0 z-40 bg-white border-b border-gray-200 shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16 gap-4">
                    <a href="/" class="flex items-center space-x-3 text-primary-700">
                        <i class="fas fa-graduation-cap text-2xl" />
                        <span class="text-xl font-bold">"ClassScope"</span>
                    </a>

                    <div class="flex items-center gap-2">
                        {children()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Smoothly scroll a page section to the top of the viewport
pub fn scroll_to(target: NodeRef<html::Section>) {
    if let Some(section) = target.get_untracked() {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Navigation link to a section of the current page
#[component]
pub fn SectionLink(
    label: &'static str,
    anchor: &'static str,
    target: NodeRef<html::Section>,
) -> impl IntoView {
    view! {
        <a
            href=format!("#{}", anchor)
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-primary-700 hover:bg-gray-100 transition-colors"
            on:click=move |ev| {
                ev.prevent_default();
                scroll_to(target);
            }
        >
            {label}
        </a>
    }
}
