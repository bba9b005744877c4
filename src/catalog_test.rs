use std::collections::HashSet;

use super::*;

#[test]
fn courses_use_sequential_one_based_ids() {
    for (idx, course) in COURSES.iter().enumerate() {
        assert_eq!(usize::from(course.id), idx + 1);
    }
}

#[test]
fn cohorts_use_sequential_one_based_ids() {
    for (idx, cohort) in COHORTS.iter().enumerate() {
        assert_eq!(usize::from(cohort.id), idx + 1);
    }
}

#[test]
fn course_titles_are_unique_and_non_empty() {
    let titles: HashSet<&str> = COURSES.iter().map(|c| c.title).collect();
    assert_eq!(titles.len(), COURSES.len());
    assert!(titles.iter().all(|t| !t.is_empty()));
}

#[test]
fn cohort_labels_are_unique_and_non_empty() {
    let labels: HashSet<&str> = COHORTS.iter().map(|c| c.label).collect();
    assert_eq!(labels.len(), COHORTS.len());
    assert!(labels.iter().all(|l| !l.is_empty()));
}
