//! Search box state and course identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;
use crate::catalog::DEFAULT_SCHOOL;

/// Subject / catalog-number fragments typed into a search box
///
/// Mutated on every keystroke, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm {
    pub subject: String,
    pub catalog: String,
}

impl SearchTerm {
    pub fn new(subject: impl Into<String>, catalog: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            catalog: catalog.into(),
        }
    }

    /// Replace the subject fragment. The catalog fragment belongs to the
    /// previous subject, so it is cleared.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
        self.catalog.clear();
    }

    pub fn set_catalog(&mut self, catalog: impl Into<String>) {
        self.catalog = catalog.into();
    }

    /// Upper-cased, trimmed subject fragment
    pub fn subject_key(&self) -> String {
        self.subject.trim().to_uppercase()
    }

    /// Upper-cased, trimmed catalog fragment
    pub fn catalog_key(&self) -> String {
        self.catalog.trim().to_uppercase()
    }

    pub fn is_empty(&self) -> bool {
        self.subject.trim().is_empty() && self.catalog.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.subject.clear();
        self.catalog.clear();
    }
}

/// Which remote course to fetch: (school, subject, course number)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseIdentifier {
    pub school: String,
    pub subject: String,
    pub course_number: String,
}

impl CourseIdentifier {
    /// Create an identifier; subject is upper-cased, all parts trimmed
    pub fn new(
        school: impl Into<String>,
        subject: impl AsRef<str>,
        course_number: impl AsRef<str>,
    ) -> Self {
        Self {
            school: school.into().trim().to_string(),
            subject: subject.as_ref().trim().to_uppercase(),
            course_number: course_number.as_ref().trim().to_string(),
        }
    }

    /// Identifier at the default school
    pub fn at_default_school(subject: impl AsRef<str>, course_number: impl AsRef<str>) -> Self {
        Self::new(DEFAULT_SCHOOL, subject, course_number)
    }

    /// Parse a "SUBJECT NUMBER" course code, e.g. "COMP 110"
    pub fn from_code(school: impl Into<String>, code: &str) -> Option<Self> {
        let mut parts = code.split_whitespace();
        let subject = parts.next()?;
        let number = parts.next()?;
        Some(Self::new(school, subject, number))
    }

    /// Build an identifier from a search box, requiring both fragments
    pub fn from_search(school: impl Into<String>, term: &SearchTerm) -> Result<Self, ValidationError> {
        let subject = term.subject.trim();
        let number = term.catalog.trim();
        if subject.is_empty() || number.is_empty() {
            return Err(ValidationError::MissingSearchFields);
        }
        Ok(Self::new(school, subject, number))
    }

    /// "SUBJECT NUMBER"
    pub fn code(&self) -> String {
        format!("{} {}", self.subject, self.course_number)
    }

    /// Percent-encoded query string for the course details endpoint
    pub fn query_string(&self) -> String {
        format!(
            "school={}&subject={}&courseNumber={}",
            urlencoding::encode(&self.school),
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.course_number),
        )
    }
}

impl fmt::Display for CourseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.subject, self.course_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_subject_clears_catalog() {
        let mut term = SearchTerm::new("COMP", "110");
        term.set_subject("MATH");
        assert_eq!(term, SearchTerm::new("MATH", ""));
    }

    #[test]
    fn test_search_keys_normalize() {
        let term = SearchTerm::new("  comp ", " intro ");
        assert_eq!(term.subject_key(), "COMP");
        assert_eq!(term.catalog_key(), "INTRO");
        assert!(SearchTerm::new(" ", "").is_empty());
    }

    #[test]
    fn test_from_code() {
        let id = CourseIdentifier::from_code(DEFAULT_SCHOOL, "comp  110").unwrap();
        assert_eq!(id.subject, "COMP");
        assert_eq!(id.course_number, "110");
        assert_eq!(id.code(), "COMP 110");

        assert!(CourseIdentifier::from_code(DEFAULT_SCHOOL, "COMP").is_none());
        assert!(CourseIdentifier::from_code(DEFAULT_SCHOOL, "").is_none());
    }

    #[test]
    fn test_from_search_requires_both_fields() {
        let missing = SearchTerm::new("COMP", "  ");
        assert_eq!(
            CourseIdentifier::from_search(DEFAULT_SCHOOL, &missing),
            Err(ValidationError::MissingSearchFields)
        );

        let ok = SearchTerm::new("comp", "301");
        let id = CourseIdentifier::from_search(DEFAULT_SCHOOL, &ok).unwrap();
        assert_eq!(id.to_string(), "COMP 301");
    }

    #[test]
    fn test_query_string_is_encoded() {
        let id = CourseIdentifier::at_default_school("COMP", "110");
        assert_eq!(
            id.query_string(),
            "school=University%20of%20North%20Carolina%20at%20Chapel%20Hill&subject=COMP&courseNumber=110"
        );
    }
}
