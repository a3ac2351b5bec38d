//! Review form state
//!
//! Both the homepage upload form and the course-detail "Write a Review"
//! form are backed by [`ReviewForm`]. The homepage adds the course fields
//! through [`HomeReviewForm`].

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet};

use super::{CourseIdentifier, ReviewRecord, ValidationError};

/// Initial position of every detailed-rating slider
pub const SLIDER_DEFAULT: u8 = 3;
pub const SLIDER_MIN: u8 = 1;
pub const SLIDER_MAX: u8 = 5;

/// The four mandatory slider ratings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingMetric {
    Difficulty,
    Workload,
    Usefulness,
    Fun,
}

impl RatingMetric {
    pub const ALL: [RatingMetric; 4] = [
        RatingMetric::Difficulty,
        RatingMetric::Workload,
        RatingMetric::Usefulness,
        RatingMetric::Fun,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            RatingMetric::Difficulty => "difficulty",
            RatingMetric::Workload => "workload",
            RatingMetric::Usefulness => "usefulness",
            RatingMetric::Fun => "fun",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingMetric::Difficulty => "Difficulty (1-5)",
            RatingMetric::Workload => "Workload (1-5)",
            RatingMetric::Usefulness => "Usefulness (1-5)",
            RatingMetric::Fun => "Engagement/Interesting (1-5)",
        }
    }
}

/// Slider values, each clamped to 1-5
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailedRatings {
    pub difficulty: u8,
    pub workload: u8,
    pub usefulness: u8,
    pub fun: u8,
}

impl Default for DetailedRatings {
    fn default() -> Self {
        Self {
            difficulty: SLIDER_DEFAULT,
            workload: SLIDER_DEFAULT,
            usefulness: SLIDER_DEFAULT,
            fun: SLIDER_DEFAULT,
        }
    }
}

impl DetailedRatings {
    pub fn get(&self, metric: RatingMetric) -> u8 {
        match metric {
            RatingMetric::Difficulty => self.difficulty,
            RatingMetric::Workload => self.workload,
            RatingMetric::Usefulness => self.usefulness,
            RatingMetric::Fun => self.fun,
        }
    }

    pub fn set(&mut self, metric: RatingMetric, value: u8) {
        let value = value.clamp(SLIDER_MIN, SLIDER_MAX);
        match metric {
            RatingMetric::Difficulty => self.difficulty = value,
            RatingMetric::Workload => self.workload = value,
            RatingMetric::Usefulness => self.usefulness = value,
            RatingMetric::Fun => self.fun = value,
        }
    }
}

/// A non-required review attribute, shown as a collapsible section
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionalField {
    Grade,
    Passed,
    WouldTakeAgain,
    ExtraCost,
    RequireAttendance,
    RequireParticipation,
}

const YES_NO: &[(&str, &str)] = &[("yes", "Yes"), ("no", "No")];

const GRADES: &[(&str, &str)] = &[
    ("A+", "A+"),
    ("A", "A"),
    ("A-", "A-"),
    ("B+", "B+"),
    ("B", "B"),
    ("B-", "B-"),
    ("C+", "C+"),
    ("C", "C"),
    ("C-", "C-"),
    ("D+", "D+"),
    ("D", "D"),
    ("F", "F"),
    ("P", "Pass"),
    ("NC", "No Credit"),
];

impl OptionalField {
    pub const ALL: [OptionalField; 6] = [
        OptionalField::Grade,
        OptionalField::Passed,
        OptionalField::WouldTakeAgain,
        OptionalField::ExtraCost,
        OptionalField::RequireAttendance,
        OptionalField::RequireParticipation,
    ];

    /// Stable key, used for element ids
    pub fn key(&self) -> &'static str {
        match self {
            OptionalField::Grade => "grade",
            OptionalField::Passed => "passed",
            OptionalField::WouldTakeAgain => "wouldTakeAgain",
            OptionalField::ExtraCost => "extraCost",
            OptionalField::RequireAttendance => "requireAttendance",
            OptionalField::RequireParticipation => "requireParticipation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OptionalField::Grade => "Grade Received (Optional)",
            OptionalField::Passed => "Did you pass? (Optional)",
            OptionalField::WouldTakeAgain => "Would take again? (Optional)",
            OptionalField::ExtraCost => "Extra Cost? (Optional)",
            OptionalField::RequireAttendance => "Required Attendance? (Optional)",
            OptionalField::RequireParticipation => "Required Participation? (Optional)",
        }
    }

    /// Placeholder option shown before a choice is made
    pub fn placeholder(&self) -> &'static str {
        match self {
            OptionalField::Grade => "Select grade",
            _ => "Select",
        }
    }

    /// Selectable (value, label) pairs
    pub fn choices(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            OptionalField::Grade => GRADES,
            _ => YES_NO,
        }
    }
}

/// Named boolean set: which optional-field sections are expanded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedFields(BTreeSet<OptionalField>);

impl ExpandedFields {
    pub fn toggle(&mut self, field: OptionalField) {
        if !self.0.remove(&field) {
            self.0.insert(field);
        }
    }

    pub fn is_expanded(&self, field: OptionalField) -> bool {
        self.0.contains(&field)
    }

    pub fn collapse_all(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Controlled state of a review form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewForm {
    /// Overall star rating; no default, the user must pick one
    pub rating: Option<u8>,
    pub ratings: DetailedRatings,
    pub review_text: String,
    optional: BTreeMap<OptionalField, String>,
    pub expanded: ExpandedFields,
}

impl ReviewForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rating(&mut self, stars: u8) {
        self.rating = Some(stars.clamp(SLIDER_MIN, SLIDER_MAX));
    }

    /// Set an optional attribute; a blank value clears it
    pub fn set_optional(&mut self, field: OptionalField, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.optional.remove(&field);
        } else {
            self.optional.insert(field, value.trim().to_string());
        }
    }

    pub fn optional(&self, field: OptionalField) -> Option<&str> {
        self.optional.get(&field).map(String::as_str)
    }

    /// Build the submission payload for a course
    ///
    /// Fails without touching the network when no overall rating was chosen.
    pub fn build(
        &self,
        course: &CourseIdentifier,
        now: DateTime<Utc>,
    ) -> Result<ReviewRecord, ValidationError> {
        let rating = self.rating.ok_or(ValidationError::MissingRating)?;
        let owned = |field| self.optional(field).map(str::to_string);
        let text = self.review_text.trim();

        Ok(ReviewRecord {
            school: course.school.clone(),
            subject: course.subject.clone(),
            course_number: course.course_number.clone(),
            professor_name: None,
            rating,
            review_text: (!text.is_empty()).then(|| text.to_string()),
            difficulty: self.ratings.difficulty,
            workload: self.ratings.workload,
            usefulness: self.ratings.usefulness,
            fun: self.ratings.fun,
            grade: owned(OptionalField::Grade),
            passed: owned(OptionalField::Passed),
            would_take_again: owned(OptionalField::WouldTakeAgain),
            extra_cost: owned(OptionalField::ExtraCost),
            require_attendance: owned(OptionalField::RequireAttendance),
            require_participation: owned(OptionalField::RequireParticipation),
            timestamp: now,
        })
    }

    /// Clear every field and collapse all sections
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Homepage upload form: the course is typed in rather than implied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeReviewForm {
    pub school: String,
    pub subject: String,
    pub course_number: String,
    pub review: ReviewForm,
}

impl HomeReviewForm {
    /// Validate the course fields, then the rating, then build the payload
    pub fn build(&self, now: DateTime<Utc>) -> Result<ReviewRecord, ValidationError> {
        if [&self.school, &self.subject, &self.course_number]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            return Err(ValidationError::MissingCourseFields);
        }
        let course = CourseIdentifier::new(self.school.as_str(), &self.subject, &self.course_number);
        self.review.build(&course, now)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
