//! # ClassScope
//!
//! Course search, aggregate course statistics and student reviews.
//!
//! This crate is the shared core of the ClassScope site. It compiles for
//! the browser (with `default-features = false`) and natively; the native
//! feature adds the HTTP client, configuration, logging, the CLI and the
//! static UI server.
//!
//! ## Modules
//!
//! - [`catalog`]: static course catalog used for browsing and autocomplete
//! - [`filter`]: bounded subject / catalog-number course filter
//! - [`models`]: search state, course identifiers, review forms and payloads
//! - [`detail`]: the course detail view-model
//! - [`display`]: star and date formatting
//! - [`notification`]: single-slot auto-dismissing notifications
//! - [`router`]: home / course detail selection from the query string
//! - [`api`]: review backend contract, wire types and errors
//! - [`controller`]: fetch and submit sequencing for both views
//!
//! ## Quick Start
//!
//! ```rust
//! use classscope::catalog::{Catalog, DEFAULT_INSTITUTION};
//! use classscope::filter::filter_courses;
//! use classscope::models::SearchTerm;
//!
//! let catalog = Catalog::builtin();
//! let term = SearchTerm::new("comp", "");
//!
//! let titles: Vec<_> = filter_courses(&catalog, DEFAULT_INSTITUTION, &term)
//!     .iter()
//!     .map(|c| c.title.as_str())
//!     .collect();
//!
//! assert_eq!(titles, ["COMP 110", "COMP 301", "COMP 401"]);
//! ```

pub mod api;
pub mod catalog;
pub mod controller;
pub mod detail;
pub mod display;
pub mod filter;
pub mod models;
pub mod notification;
pub mod router;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod server;

pub use catalog::{Catalog, CourseRecord};
pub use models::{CourseIdentifier, ReviewRecord, SearchTerm};
