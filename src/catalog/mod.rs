//! Course Catalog
//!
//! The static, in-memory catalog used for course browsing and autocomplete:
//!
//! - **CourseRecord**: one course summary (title, description, headline ratings)
//! - **Institution**: ordered subject code → course list mapping for one school
//! - **Catalog**: every known institution, keyed by a short institution key
//!
//! Insertion order is preserved everywhere. The course filter and the
//! "popular courses" window both depend on it.
//!
//! # Example
//!
//! ```rust
//! use classscope::catalog::{Catalog, DEFAULT_INSTITUTION};
//!
//! let catalog = Catalog::builtin();
//! let unc = catalog.institution(DEFAULT_INSTITUTION).unwrap();
//!
//! assert_eq!(unc.catalog_options("comp"), vec!["110", "301", "401"]);
//! ```

mod data;

#[cfg(feature = "native")]
pub mod csv_import;

pub use data::SUBJECT_DIRECTORY;

#[cfg(feature = "native")]
pub use csv_import::{CatalogCsvImporter, CatalogError, CsvImportResult};

use serde::{Deserialize, Serialize};

/// School name the sample catalog is published for
pub const DEFAULT_SCHOOL: &str = "University of North Carolina at Chapel Hill";

/// Catalog key for [`DEFAULT_SCHOOL`]
pub const DEFAULT_INSTITUTION: &str = "uncch";

/// A single course summary from the static catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub id: u32,
    /// Subject and catalog number, e.g. "COMP 110"
    pub title: String,
    /// Short course name, e.g. "Introduction to Programming"
    pub code: String,
    #[serde(default)]
    pub professor: Option<String>,
    pub rating: f64,
    pub difficulty: f64,
    pub workload: f64,
    #[serde(default)]
    pub usefulness: Option<f64>,
    #[serde(default)]
    pub fun: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "reviews")]
    pub review_count: u32,
}

impl CourseRecord {
    /// Subject code, the first word of the title
    pub fn subject(&self) -> &str {
        self.title.split_whitespace().next().unwrap_or("")
    }

    /// Catalog number, the second word of the title
    pub fn catalog_number(&self) -> Option<&str> {
        self.title.split_whitespace().nth(1)
    }
}

/// Courses for one subject code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectCourses {
    pub code: String,
    pub courses: Vec<CourseRecord>,
}

/// One institution's courses, grouped by subject in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub key: String,
    pub subjects: Vec<SubjectCourses>,
}

impl Institution {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            subjects: Vec::new(),
        }
    }

    /// Courses for an exact subject code
    pub fn subject(&self, code: &str) -> Option<&[CourseRecord]> {
        self.subjects
            .iter()
            .find(|s| s.code == code)
            .map(|s| s.courses.as_slice())
    }

    /// Subject codes in insertion order
    pub fn subject_codes(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(|s| s.code.as_str())
    }

    /// All courses of all subjects, concatenated in insertion order
    pub fn all_courses(&self) -> impl Iterator<Item = &CourseRecord> {
        self.subjects.iter().flat_map(|s| s.courses.iter())
    }

    /// Catalog numbers known for a subject (for number autocomplete)
    ///
    /// The subject is case-normalized; an unknown subject yields nothing.
    pub fn catalog_options(&self, subject: &str) -> Vec<&str> {
        let code = subject.trim().to_uppercase();
        self.subject(&code)
            .map(|courses| {
                courses
                    .iter()
                    .filter_map(CourseRecord::catalog_number)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of courses across all subjects
    pub fn course_count(&self) -> usize {
        self.subjects.iter().map(|s| s.courses.len()).sum()
    }

    fn push(&mut self, subject: &str, course: CourseRecord) {
        match self.subjects.iter_mut().find(|s| s.code == subject) {
            Some(existing) => existing.courses.push(course),
            None => self.subjects.push(SubjectCourses {
                code: subject.to_string(),
                courses: vec![course],
            }),
        }
    }
}

/// Every institution known to the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    institutions: Vec<Institution>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample catalog shipped with the application
    pub fn builtin() -> Self {
        data::builtin_catalog()
    }

    /// Look up an institution by key
    pub fn institution(&self, key: &str) -> Option<&Institution> {
        self.institutions.iter().find(|i| i.key == key)
    }

    /// Look up an institution by the school name a user typed
    pub fn for_school(&self, school: &str) -> Option<&Institution> {
        self.institution(&institution_key(school))
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    /// Append a course, creating the institution and subject on first use.
    /// The subject is taken from the course title.
    pub fn insert(&mut self, institution: &str, course: CourseRecord) {
        let subject = course.subject().to_uppercase();
        let entry = match self.institutions.iter().position(|i| i.key == institution) {
            Some(idx) => &mut self.institutions[idx],
            None => {
                self.institutions.push(Institution::new(institution));
                let last = self.institutions.len() - 1;
                &mut self.institutions[last]
            }
        };
        entry.push(&subject, course);
    }

    /// Total number of courses
    pub fn len(&self) -> usize {
        self.institutions.iter().map(Institution::course_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Institution> for Catalog {
    fn from(institution: Institution) -> Self {
        Self {
            institutions: vec![institution],
        }
    }
}

/// Map a school name to its catalog key
///
/// The default school maps to [`DEFAULT_INSTITUTION`]; anything else is
/// used lower-cased as typed.
pub fn institution_key(school: &str) -> String {
    if school == DEFAULT_SCHOOL {
        DEFAULT_INSTITUTION.to_string()
    } else {
        school.to_lowercase()
    }
}

/// Human-readable subject name for a subject code
pub fn subject_name(code: &str) -> Option<&'static str> {
    SUBJECT_DIRECTORY
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, title: &str) -> CourseRecord {
        CourseRecord {
            id,
            title: title.to_string(),
            code: format!("Course {}", id),
            professor: None,
            rating: 4.0,
            difficulty: 3.0,
            workload: 3.0,
            usefulness: None,
            fun: None,
            description: String::new(),
            review_count: 0,
        }
    }

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        let unc = catalog.institution(DEFAULT_INSTITUTION).unwrap();

        let codes: Vec<_> = unc.subject_codes().collect();
        assert_eq!(codes, vec!["AAAD", "COMP", "MATH", "HIST", "CHEM", "PSYC"]);
        assert_eq!(unc.subject("COMP").unwrap().len(), 3);
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut catalog = Catalog::new();
        catalog.insert("test", record(1, "MATH 231"));
        catalog.insert("test", record(2, "COMP 110"));
        catalog.insert("test", record(3, "MATH 233"));

        let inst = catalog.institution("test").unwrap();
        let codes: Vec<_> = inst.subject_codes().collect();
        assert_eq!(codes, vec!["MATH", "COMP"]);

        let ids: Vec<_> = inst.all_courses().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_catalog_options_unknown_subject() {
        let catalog = Catalog::builtin();
        let unc = catalog.institution(DEFAULT_INSTITUTION).unwrap();
        assert!(unc.catalog_options("ZZZZ").is_empty());
        assert_eq!(unc.catalog_options(" math "), vec!["231", "233"]);
    }

    #[test]
    fn test_catalog_from_single_institution() {
        let unc = Catalog::builtin()
            .institution(DEFAULT_INSTITUTION)
            .cloned()
            .unwrap();
        let catalog = Catalog::from(unc);
        assert_eq!(catalog.institutions().len(), 1);
        assert_eq!(catalog.len(), 12);
        assert!(catalog.for_school(DEFAULT_SCHOOL).is_some());
    }

    #[test]
    fn test_institution_key() {
        assert_eq!(institution_key(DEFAULT_SCHOOL), "uncch");
        assert_eq!(institution_key("Duke University"), "duke university");
    }

    #[test]
    fn test_course_title_parts() {
        let course = record(1, "COMP 110");
        assert_eq!(course.subject(), "COMP");
        assert_eq!(course.catalog_number(), Some("110"));

        let odd = record(2, "SEMINAR");
        assert_eq!(odd.catalog_number(), None);
    }

    #[test]
    fn test_subject_name_lookup() {
        assert_eq!(subject_name("COMP"), Some("Computer Science"));
        assert_eq!(subject_name("NOPE"), None);
    }
}
