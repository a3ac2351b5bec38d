//! UI Components
//!
//! Reusable Leptos components shared by the two pages.

pub mod course_card;
pub mod loading;
pub mod nav;
pub mod review_card;
pub mod review_form;
pub mod search_bar;
pub mod star_rating;
pub mod toast;

pub use course_card::CourseCard;
pub use loading::{InlineLoading, Loading};
pub use nav::{scroll_to, Nav, SectionLink};
pub use review_card::ReviewCard;
pub use review_form::ReviewFields;
pub use search_bar::{CatalogOptions, SearchBar, SubjectOptions};
pub use star_rating::StarRating;
pub use toast::Toast;
