//! Static route table and path lookup tables.
//!
//! DESIGN
//! ======
//! Every route is a fixed path with no parameterized segments. Course and
//! cohort destinations come from direct lookup tables keyed by the 1-based
//! identifier, so click handlers never branch on ids. The table is defined
//! once and immutable; `app.rs` mirrors it in the router declarations.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Stable name for a routed view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Login,
    Course(u8),
    Cohort { course: u8, cohort: u8 },
}

/// One entry in the route table.
#[derive(Clone, Copy, Debug)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: RouteName,
}

/// Path of the home route.
pub const HOME: &str = "/";
/// Path of the login route.
pub const LOGIN: &str = "/login";
/// Linked from the login page; no route entry exists for it yet.
pub const FORGOT_PASSWORD: &str = "/forgot-password";
/// Linked from the login page; no route entry exists for it yet.
pub const REGISTER: &str = "/register";

const COURSE_PATHS: [&str; 3] = ["/courses/1", "/courses/2", "/courses/3"];

const COHORT_PATHS: [[&str; 3]; 3] = [
    [
        "/courses/1/cohorts/1",
        "/courses/1/cohorts/2",
        "/courses/1/cohorts/3",
    ],
    [
        "/courses/2/cohorts/1",
        "/courses/2/cohorts/2",
        "/courses/2/cohorts/3",
    ],
    [
        "/courses/3/cohorts/1",
        "/courses/3/cohorts/2",
        "/courses/3/cohorts/3",
    ],
];

/// The full route table. Paths and names are unique; unmatched paths have
/// no entry and render nothing.
pub const ROUTE_TABLE: [RouteDef; 14] = [
    RouteDef { path: HOME, name: RouteName::Home },
    RouteDef { path: LOGIN, name: RouteName::Login },
    RouteDef { path: "/courses/1", name: RouteName::Course(1) },
    RouteDef { path: "/courses/2", name: RouteName::Course(2) },
    RouteDef { path: "/courses/3", name: RouteName::Course(3) },
    RouteDef { path: "/courses/1/cohorts/1", name: RouteName::Cohort { course: 1, cohort: 1 } },
    RouteDef { path: "/courses/1/cohorts/2", name: RouteName::Cohort { course: 1, cohort: 2 } },
    RouteDef { path: "/courses/1/cohorts/3", name: RouteName::Cohort { course: 1, cohort: 3 } },
    RouteDef { path: "/courses/2/cohorts/1", name: RouteName::Cohort { course: 2, cohort: 1 } },
    RouteDef { path: "/courses/2/cohorts/2", name: RouteName::Cohort { course: 2, cohort: 2 } },
    RouteDef { path: "/courses/2/cohorts/3", name: RouteName::Cohort { course: 2, cohort: 3 } },
    RouteDef { path: "/courses/3/cohorts/1", name: RouteName::Cohort { course: 3, cohort: 1 } },
    RouteDef { path: "/courses/3/cohorts/2", name: RouteName::Cohort { course: 3, cohort: 2 } },
    RouteDef { path: "/courses/3/cohorts/3", name: RouteName::Cohort { course: 3, cohort: 3 } },
];

/// Destination for a 1-based course id.
pub fn course_path(course: u8) -> Option<&'static str> {
    COURSE_PATHS.get(slot(course)?).copied()
}

/// Destination for a 1-based course/cohort pair.
pub fn cohort_path(course: u8, cohort: u8) -> Option<&'static str> {
    COHORT_PATHS.get(slot(course)?)?.get(slot(cohort)?).copied()
}

/// Resolve a path against the route table.
pub fn resolve(path: &str) -> Option<RouteName> {
    ROUTE_TABLE.iter().find(|r| r.path == path).map(|r| r.name)
}

/// 0-based table slot for a 1-based id; `None` for id 0.
fn slot(id: u8) -> Option<usize> {
    usize::from(id).checked_sub(1)
}
