//! Course List Filter
//!
//! Derives the bounded list of catalog entries shown under a search box.
//! Matching is case-insensitive substring matching, results keep catalog
//! insertion order and are truncated to [`POPULAR_WINDOW`].

use crate::catalog::{Catalog, CourseRecord, Institution};
use crate::models::SearchTerm;

/// Maximum number of course cards shown at once
pub const POPULAR_WINDOW: usize = 6;

/// Filter an institution's courses by subject and catalog fragments
///
/// An unknown institution yields an empty result.
pub fn filter_courses<'a>(
    catalog: &'a Catalog,
    institution: &str,
    term: &SearchTerm,
) -> Vec<&'a CourseRecord> {
    match catalog.institution(institution) {
        Some(inst) => filter_institution(inst, term),
        None => Vec::new(),
    }
}

/// Filter within a single institution
pub fn filter_institution<'a>(inst: &'a Institution, term: &SearchTerm) -> Vec<&'a CourseRecord> {
    let subject = term.subject_key();
    let fragment = term.catalog_key();

    let candidates: Box<dyn Iterator<Item = &'a CourseRecord> + 'a> = match inst.subject(&subject) {
        Some(courses) => Box::new(courses.iter()),
        None => Box::new(inst.all_courses()),
    };

    candidates
        .filter(|course| matches(course, &subject, &fragment))
        .take(POPULAR_WINDOW)
        .collect()
}

/// The first courses of an institution, unfiltered ("Browse Courses")
pub fn popular_courses<'a>(catalog: &'a Catalog, institution: &str) -> Vec<&'a CourseRecord> {
    catalog
        .institution(institution)
        .map(|inst| inst.all_courses().take(POPULAR_WINDOW).collect())
        .unwrap_or_default()
}

/// Match predicate; both keys are expected upper-cased and trimmed
pub fn matches(course: &CourseRecord, subject: &str, fragment: &str) -> bool {
    let title = course.title.to_uppercase();

    let subject_ok = subject.is_empty() || title.starts_with(subject);
    let fragment_ok = fragment.is_empty()
        || title.contains(fragment)
        || course.code.to_uppercase().contains(fragment);

    subject_ok && fragment_ok
}
