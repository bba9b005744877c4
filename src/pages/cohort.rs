//! Static cohort placeholder pages.

use leptos::prelude::*;

use crate::catalog::{Cohort, Course};
use crate::components::site_header::SiteHeader;

/// Cohort landing page. Placeholder until cohort content ships.
#[component]
pub fn CohortPage(course: &'static Course, cohort: &'static Cohort) -> impl IntoView {
    view! {
        <div class="cohort-page">
            <SiteHeader/>
            <main class="cohort-page__content">
                <h1>{format!("{}: Cohort {}", course.title, cohort.id)}</h1>
                <p class="cohort-page__label">{cohort.label}</p>
                <p class="cohort-page__notice">"Coming soon!"</p>
            </main>
        </div>
    }
}
