//! Root application component with routing and context providers.

use std::borrow::Cow;
use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::catalog;
use crate::pages::{cohort::CohortPage, course::CoursePage, home::HomePage, login::LoginPage};
use crate::state::auth::{AuthHandle, FixedCredentialAuthenticator};
use crate::state::session::SessionState;

/// Base path the app is served under, fixed at build time.
const BASE_PATH: &str = match option_env!("EDUNOVA_BASE_PATH") {
    Some(base) => base,
    None => "",
};

/// Root application component.
///
/// Provides the authenticator and session contexts and sets up client-side
/// routing. The route declarations mirror `routes::ROUTE_TABLE` entry for
/// entry; there is no catch-all route, so unmatched paths render nothing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(SessionState::default()));
    provide_context::<AuthHandle>(Arc::new(FixedCredentialAuthenticator::demo()));

    view! {
        <Title text="EduNova"/>

        <Router base=Cow::Borrowed(BASE_PATH)>
            <Routes fallback=|| ()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>

                <Route
                    path=(StaticSegment("courses"), StaticSegment("1"))
                    view=|| view! { <CoursePage course={&catalog::COURSES[0]}/> }
                />
                <Route
                    path=(StaticSegment("courses"), StaticSegment("2"))
                    view=|| view! { <CoursePage course={&catalog::COURSES[1]}/> }
                />
                <Route
                    path=(StaticSegment("courses"), StaticSegment("3"))
                    view=|| view! { <CoursePage course={&catalog::COURSES[2]}/> }
                />

                <Route
                    path=(StaticSegment("courses"), StaticSegment("1"), StaticSegment("cohorts"), StaticSegment("1"))
                    view=|| view! { <CohortPage course={&catalog::COURSES[0]} cohort={&catalog::COHORTS[0]}/> }
                />
                <Route
                    path=(StaticSegment("courses"), StaticSegment("1"), StaticSegment("cohorts"), StaticSegment("2"))
                    view=|| view! { <CohortPage course={&catalog::COURSES[0]} cohort={&catalog::COHORTS[1]}/> }
                />
                <Route
                    path=(StaticSegment("courses"), StaticSegment("1"), StaticSegment("cohorts"), StaticSegment("3"))
                    view=|| view! { <CohortPage course={&catalog::COURSES[0]} cohort={&catalog::COHORTS[2]}/> }
                />
                <Route
                    path=(StaticSegment("courses"), StaticSegment("2"), StaticSegment("cohorts"), StaticSegment("1"))
                    view=|| view! { <CohortPage course={&catalog::COURSES[1]} cohort={&catalog::COHORTS[0]}/> }
                />
                <Route
                    path=(StaticSegment("courses"), StaticSegment("2"), StaticSegment("cohorts"), StaticSegment("2"))
                    view=|| view! { <CohortPage course={&catalog::COURSES[1]} cohort={&catalog::COHORTS[1]}/> }
                />
                <Route
                    path=(StaticSegment("courses"), StaticSegment("2"), StaticSegment("cohorts"), StaticSegment("3"))
                    view=|| view! { <CohortPage course={&catalog::COURSES[1]} cohort={&catalog::COHORTS[2]}/> }
                />
                <Route
                    path=(StaticSegment("courses"), StaticSegment("3"), StaticSegment("cohorts"), StaticSegment("1"))
                    view=|| view! { <CohortPage course={&catalog::COURSES[2]} cohort={&catalog::COHORTS[0]}/> }
                />
                <Route
                    path=(StaticSegment("courses"), StaticSegment("3"), StaticSegment("cohorts"), StaticSegment("2"))
                    view=|| view! { <CohortPage course={&catalog::COURSES[2]} cohort={&catalog::COHORTS[1]}/> }
                />
                <Route
                    path=(StaticSegment("courses"), StaticSegment("3"), StaticSegment("cohorts"), StaticSegment("3"))
                    view=|| view! { <CohortPage course={&catalog::COURSES[2]} cohort={&catalog::COHORTS[2]}/> }
                />
            </Routes>
        </Router>
    }
}
