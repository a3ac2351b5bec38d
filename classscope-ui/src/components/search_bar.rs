//! Search Bar Component
//!
//! Subject / catalog-number inputs with autocomplete lists.

use leptos::*;

use classscope::catalog::SUBJECT_DIRECTORY;
use classscope::models::SearchTerm;

use crate::state::GlobalState;

/// Autocomplete list of every known subject code
#[component]
pub fn SubjectOptions(#[prop(into)] id: String) -> impl IntoView {
    view! {
        <datalist id=id>
            {SUBJECT_DIRECTORY
                .iter()
                .map(|(code, name)| view! { <option value=*code>{*name}</option> })
                .collect_view()}
        </datalist>
    }
}

/// Autocomplete list of the catalog numbers of one subject
#[component]
pub fn CatalogOptions(
    #[prop(into)]
    id: String,
    #[prop(into)]
    institution: Signal<String>,
    #[prop(into)]
    subject: Signal<String>,
) -> impl IntoView {
    let state = expect_context::<GlobalState>();

    let options = move || {
        let key = institution.get();
        let subject = subject.get();
        state.catalog.with(|catalog| {
            catalog
                .institution(&key)
                .map(|inst| {
                    inst.catalog_options(&subject)
                        .into_iter()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    };

    view! {
        <datalist id=id>
            {move || {
                options()
                    .into_iter()
                    .map(|number| view! { <option value=number /> })
                    .collect_view()
            }}
        </datalist>
    }
}

/// Search inputs bound to a [`SearchTerm`]
///
/// Enter in either input, or the button, fires `on_search`.
#[component]
pub fn SearchBar(
    term: RwSignal<SearchTerm>,
    #[prop(into)]
    institution: Signal<String>,
    #[prop(into)]
    on_search: Callback<()>,
    /// Prefix for the datalist ids, unique per page
    id_prefix: &'static str,
    /// Icon-only button for the header
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let subject_list = format!("{}SubjectList", id_prefix);
    let catalog_list = format!("{}CatalogNumberList", id_prefix);

    let on_enter = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            on_search.call(());
        }
    };

    let input_class = if compact {
        "w-28 md:w-36 bg-gray-100 rounded-lg px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-primary-500"
    } else {
        "flex-1 min-w-0 bg-white rounded-lg px-4 py-3 border border-gray-300 focus:border-primary-500 focus:outline-none"
    };

    view! {
        <div class=if compact { "flex items-center gap-2" } else { "search-bar flex flex-wrap items-center gap-3" }>
            <i class="fas fa-search text-gray-400" />

            <input
                type="text"
                class=input_class
                placeholder=if compact { "Subject" } else { "Subject (e.g., COMP, MATH)" }
                list=subject_list.clone()
                autocomplete="off"
                prop:value=move || term.with(|t| t.subject.clone())
                on:input=move |ev| term.update(|t| t.set_subject(event_target_value(&ev)))
                on:keydown=on_enter
            />
            <SubjectOptions id=subject_list />

            <input
                type="text"
                class=input_class
                placeholder="Number (e.g., 110, 231)"
                list=catalog_list.clone()
                autocomplete="off"
                prop:value=move || term.with(|t| t.catalog.clone())
                on:input=move |ev| term.update(|t| t.set_catalog(event_target_value(&ev)))
                on:keydown=on_enter
            />
            <CatalogOptions
                id=catalog_list
                institution=institution
                subject=Signal::derive(move || term.with(|t| t.subject.clone()))
            />

            <button
                type="button"
                aria-label="Search"
                class=if compact {
                    "px-3 py-2 bg-primary-600 hover:bg-primary-700 text-white rounded-lg transition-colors"
                } else {
                    "px-6 py-3 bg-primary-600 hover:bg-primary-700 text-white rounded-lg font-semibold transition-colors"
                }
                on:click=move |_| on_search.call(())
            >
                {if compact {
                    view! { <i class="fas fa-search" /> }.into_view()
                } else {
                    view! { <span>"Search"</span> }.into_view()
                }}
            </button>
        </div>
    }
}
