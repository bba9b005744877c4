//! Static course and cohort catalog.
//!
//! No backing records exist; these descriptors only feed page copy and the
//! navigation menu.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// A course shown on the home page and in the navigation menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Course {
    pub id: u8,
    pub title: &'static str,
}

/// A cohort option offered by every course.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cohort {
    pub id: u8,
    pub label: &'static str,
}

/// The three courses offered, in display order.
pub static COURSES: [Course; 3] = [
    Course { id: 1, title: "Criminal Law" },
    Course { id: 2, title: "Stroke Analysis" },
    Course { id: 3, title: "Environment CBA" },
];

/// The three cohorts offered by each course, in display order.
pub static COHORTS: [Cohort; 3] = [
    Cohort { id: 1, label: "Teacher Led" },
    Cohort { id: 2, label: "Teacher + AI Led" },
    Cohort { id: 3, label: "AI Led" },
];
