//! Home page with the course picker.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::catalog;
use crate::components::site_header::SiteHeader;
use crate::routes;

/// Home page: one button per course, plus the shared header.
#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="home-page">
            <SiteHeader/>
            <main class="home-page__content">
                <h1>"Welcome to EduNova"</h1>
                <p>"Please choose your course from below to get started."</p>
                <div class="course-grid">
                    {catalog::COURSES
                        .iter()
                        .map(|course| {
                            let navigate = navigate.clone();
                            view! {
                                <button
                                    class="course-grid__button"
                                    on:click=move |_| {
                                        if let Some(path) = routes::course_path(course.id) {
                                            navigate(path, NavigateOptions::default());
                                        }
                                    }
                                >
                                    {course.title}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </main>
        </div>
    }
}
