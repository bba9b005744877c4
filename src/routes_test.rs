use std::collections::HashSet;

use super::*;

// =============================================================
// Route table invariants
// =============================================================

#[test]
fn route_table_paths_are_unique() {
    let paths: HashSet<&str> = ROUTE_TABLE.iter().map(|r| r.path).collect();
    assert_eq!(paths.len(), ROUTE_TABLE.len());
}

#[test]
fn route_table_names_are_unique() {
    let names: HashSet<RouteName> = ROUTE_TABLE.iter().map(|r| r.name).collect();
    assert_eq!(names.len(), ROUTE_TABLE.len());
}

#[test]
fn route_table_covers_home_login_and_every_course_and_cohort() {
    assert_eq!(resolve(HOME), Some(RouteName::Home));
    assert_eq!(resolve(LOGIN), Some(RouteName::Login));
    for course in 1..=3 {
        assert_eq!(
            resolve(&format!("/courses/{course}")),
            Some(RouteName::Course(course))
        );
        for cohort in 1..=3 {
            assert_eq!(
                resolve(&format!("/courses/{course}/cohorts/{cohort}")),
                Some(RouteName::Cohort { course, cohort })
            );
        }
    }
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolve_finds_every_table_entry() {
    for route in &ROUTE_TABLE {
        assert_eq!(resolve(route.path), Some(route.name), "path {}", route.path);
    }
}

#[test]
fn resolve_unknown_path_is_none() {
    assert_eq!(resolve("/courses/4"), None);
    assert_eq!(resolve("/courses"), None);
    assert_eq!(resolve("/nope"), None);
}

#[test]
fn referenced_but_unimplemented_paths_have_no_route() {
    assert_eq!(resolve(FORGOT_PASSWORD), None);
    assert_eq!(resolve(REGISTER), None);
}

// =============================================================
// Lookup tables
// =============================================================

#[test]
fn course_path_matches_for_all_ids() {
    for course in 1..=3u8 {
        assert_eq!(
            course_path(course),
            Some(format!("/courses/{course}")).as_deref()
        );
    }
}

#[test]
fn course_path_rejects_out_of_range_ids() {
    assert_eq!(course_path(0), None);
    assert_eq!(course_path(4), None);
}

#[test]
fn cohort_path_matches_for_all_pairs() {
    for course in 1..=3u8 {
        for cohort in 1..=3u8 {
            assert_eq!(
                cohort_path(course, cohort),
                Some(format!("/courses/{course}/cohorts/{cohort}")).as_deref()
            );
        }
    }
}

#[test]
fn cohort_path_rejects_out_of_range_ids() {
    assert_eq!(cohort_path(0, 1), None);
    assert_eq!(cohort_path(1, 0), None);
    assert_eq!(cohort_path(4, 1), None);
    assert_eq!(cohort_path(1, 4), None);
}

#[test]
fn every_lookup_destination_is_in_the_route_table() {
    for course in 1..=3u8 {
        let path = course_path(course).unwrap_or("");
        assert_eq!(resolve(path), Some(RouteName::Course(course)));
        for cohort in 1..=3u8 {
            let path = cohort_path(course, cohort).unwrap_or("");
            assert_eq!(resolve(path), Some(RouteName::Cohort { course, cohort }));
        }
    }
}
