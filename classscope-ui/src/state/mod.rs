//! State Management
//!
//! Global application state and the signal-backed view handles the core
//! controllers drive.

pub mod global;
pub mod handles;

pub use global::{provide_global_state, GlobalState};
pub use handles::{navigate_to, DetailHandle, HomeHandle, NavSearchHandle};

use wasm_bindgen::JsValue;

pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from_str(message));
}

pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
