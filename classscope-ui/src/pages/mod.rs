//! Pages
//!
//! One component per top-level view.

pub mod course_detail;
pub mod home;

pub use course_detail::CourseDetail;
pub use home::Home;
