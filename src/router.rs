//! Top-level view selection
//!
//! The page is either the home view or the detail view of one course,
//! chosen once at load time from the `course` query parameter
//! (`?course=COMP%20110`).

use crate::models::CourseIdentifier;

/// Query parameter selecting the course detail view
pub const COURSE_PARAM: &str = "course";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Decoded course code, e.g. "COMP 110"
    Course(String),
}

impl Route {
    /// Decide the route from a query string, with or without leading `?`
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        query
            .split('&')
            .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
            .find(|(key, _)| *key == COURSE_PARAM)
            .map(|(_, value)| Route::Course(decode(value)))
            .unwrap_or(Route::Home)
    }

    /// Link to this route, relative to the current page
    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Course(code) => format!("?{}={}", COURSE_PARAM, urlencoding::encode(code)),
        }
    }

    /// Course identifier at `school`, if the code splits into subject and number
    pub fn course(&self, school: &str) -> Option<CourseIdentifier> {
        match self {
            Route::Course(code) => CourseIdentifier::from_code(school, code),
            Route::Home => None,
        }
    }
}

/// Link to the detail view of a course
pub fn course_href(course: &CourseIdentifier) -> String {
    Route::Course(course.code()).href()
}

fn decode(value: &str) -> String {
    let value = value.replace('+', " ");
    urlencoding::decode(&value)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_SCHOOL;

    #[test]
    fn test_home_without_param() {
        assert_eq!(Route::from_query(""), Route::Home);
        assert_eq!(Route::from_query("?school=x"), Route::Home);
        assert_eq!(Route::from_query("?courses=COMP"), Route::Home);
    }

    #[test]
    fn test_course_param() {
        assert_eq!(
            Route::from_query("?course=COMP%20110"),
            Route::Course("COMP 110".to_string())
        );
        assert_eq!(
            Route::from_query("ref=nav&course=MATH+231"),
            Route::Course("MATH 231".to_string())
        );
    }

    #[test]
    fn test_malformed_course_still_selects_detail() {
        let route = Route::from_query("?course=COMP");
        assert_eq!(route, Route::Course("COMP".to_string()));
        assert!(route.course(DEFAULT_SCHOOL).is_none());

        assert_eq!(Route::from_query("?course"), Route::Course(String::new()));
    }

    #[test]
    fn test_href_round_trip() {
        let course = CourseIdentifier::at_default_school("COMP", "110");
        let href = course_href(&course);
        assert_eq!(href, "?course=COMP%20110");
        assert_eq!(Route::from_query(&href).course(DEFAULT_SCHOOL), Some(course));
    }
}
