//! ClassScope
//!
//! Course search and student reviews, built with Leptos (WASM).
//!
//! # Features
//!
//! - Popular courses with subject / catalog-number filtering
//! - Course existence check before opening a course
//! - Course statistics, rating distribution and reviews
//! - Review upload from the homepage or a course page
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The `course` query parameter picks the page once at load
//! time; all fetch and submit sequencing lives in the `classscope` core
//! controllers, which talk to the review API through [`api::BrowserClient`].

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
