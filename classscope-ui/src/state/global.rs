//! Global Application State
//!
//! Reactive state shared by both pages, using Leptos signals.

use gloo_timers::callback::Timeout;
use leptos::*;

use classscope::catalog::{institution_key, Catalog, DEFAULT_INSTITUTION, DEFAULT_SCHOOL};
use classscope::notification::{Notification, NotificationCenter, NOTIFICATION_DURATION_MS};

use super::console_warn;
use crate::api::{self, BrowserClient};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// The single notification slot
    pub notifications: RwSignal<NotificationCenter>,
    /// Review API base URL
    pub api_base: RwSignal<String>,
    /// School used for searches and the course page
    pub school: RwSignal<String>,
    /// Catalog key of [`GlobalState::school`]
    pub institution: RwSignal<String>,
    /// Courses for browsing and autocomplete
    pub catalog: RwSignal<Catalog>,
    /// Server settings have been fetched (or given up on)
    pub ready: RwSignal<bool>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let stored = api::stored_api_base();

    let state = GlobalState {
        notifications: create_rw_signal(NotificationCenter::new()),
        api_base: create_rw_signal(api::resolve_api_base(stored.as_deref(), None)),
        school: create_rw_signal(DEFAULT_SCHOOL.to_string()),
        institution: create_rw_signal(DEFAULT_INSTITUTION.to_string()),
        catalog: create_rw_signal(Catalog::builtin()),
        ready: create_rw_signal(false),
    };

    provide_context(state);
    state
}

impl GlobalState {
    /// Fetch `/app-config.json` and `/catalog.json`, then mark the state ready
    ///
    /// Either file may be missing (e.g. under `trunk serve`); the built-in
    /// defaults stay in place.
    pub fn load_server_settings(&self) {
        let state = *self;
        spawn_local(async move {
            match api::fetch_app_config().await {
                Ok(config) => {
                    let stored = api::stored_api_base();
                    state
                        .api_base
                        .set(api::resolve_api_base(stored.as_deref(), Some(&config)));
                    state.school.set(config.school);
                    state.institution.set(config.institution);
                }
                Err(e) => console_warn(&format!("Using default settings: {}", e)),
            }

            match api::fetch_catalog().await {
                Ok(institution) => state.catalog.set(Catalog::from(institution)),
                Err(e) => console_warn(&format!("Using built-in catalog: {}", e)),
            }

            state.ready.set(true);
        });
    }

    /// Review API client for the current base URL
    pub fn api(&self) -> BrowserClient {
        BrowserClient::new(&self.api_base.get_untracked())
    }

    /// Catalog key for a school typed by the user
    pub fn institution_for(&self, school: &str) -> String {
        if school.trim() == self.school.get_untracked() {
            self.institution.get_untracked()
        } else {
            institution_key(school.trim())
        }
    }

    /// Show a notification and clear it after [`NOTIFICATION_DURATION_MS`]
    ///
    /// A newer notification invalidates the pending timer of an older one.
    pub fn notify(&self, notification: Notification) {
        let center = self.notifications;
        let ticket = center.try_update(|c| c.show(notification)).flatten();

        if let Some(ticket) = ticket {
            Timeout::new(NOTIFICATION_DURATION_MS, move || {
                center.update(|c| {
                    c.expire(ticket);
                });
            })
            .forget();
        }
    }

    pub fn show_success(&self, message: &str) {
        self.notify(Notification::success(message));
    }

    pub fn show_error(&self, message: &str) {
        self.notify(Notification::error(message));
    }

    pub fn dismiss(&self) {
        self.notifications.update(NotificationCenter::dismiss);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GlobalState {
        GlobalState {
            notifications: create_rw_signal(NotificationCenter::new()),
            api_base: create_rw_signal("http://127.0.0.1:8000".to_string()),
            school: create_rw_signal("Duke University".to_string()),
            institution: create_rw_signal("duke".to_string()),
            catalog: create_rw_signal(Catalog::builtin()),
            ready: create_rw_signal(true),
        }
    }

    #[test]
    fn test_institution_for_configured_school() {
        let runtime = create_runtime();
        let state = state();

        assert_eq!(state.institution_for(" Duke University "), "duke");
        assert_eq!(state.institution_for(DEFAULT_SCHOOL), DEFAULT_INSTITUTION);
        assert_eq!(state.institution_for("State College"), "state college");

        runtime.dispose();
    }

    #[test]
    fn test_dismiss_clears_slot() {
        let runtime = create_runtime();
        let state = state();

        state.notifications.update(|c| {
            c.error("boom");
        });
        state.dismiss();
        assert!(state.notifications.with_untracked(NotificationCenter::is_empty));

        runtime.dispose();
    }
}
