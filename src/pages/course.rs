//! Course overview page with the cohort picker.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::catalog::{self, Course};
use crate::components::site_header::SiteHeader;
use crate::routes;

/// Course overview: one button per cohort.
#[component]
pub fn CoursePage(course: &'static Course) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="course-page">
            <SiteHeader/>
            <main class="course-page__content">
                <h1>{course.title}</h1>
                <p>
                    {format!(
                        "Welcome to the {} course. Please choose which Cohort you are enrolled in to get started.",
                        course.title
                    )}
                </p>
                <div class="course-grid">
                    {catalog::COHORTS
                        .iter()
                        .map(|cohort| {
                            let navigate = navigate.clone();
                            view! {
                                <button
                                    class="course-grid__button"
                                    on:click=move |_| {
                                        if let Some(path) = routes::cohort_path(course.id, cohort.id) {
                                            navigate(path, NavigateOptions::default());
                                        }
                                    }
                                >
                                    {format!("Cohort {} - {}", cohort.id, cohort.label)}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </main>
        </div>
    }
}
