//! Server Routes
//!
//! Route handlers organized by functionality.

pub mod app;
pub mod health;
