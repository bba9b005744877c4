//! Shared site header: brand link, dropdown navigation, account actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::catalog;
use crate::components::nav_menu::{
    NavMenu, NavMenuContent, NavMenuItem, NavMenuLink, NavMenuList, NavMenuTrigger,
};
use crate::routes;
use crate::state::session::SessionState;
use crate::util::dark_mode;

/// Header rendered by every page.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let dark = RwSignal::new(dark_mode::read_preference());

    let on_sign_out = move |_| {
        session.update(SessionState::sign_out);
        navigate(routes::LOGIN, NavigateOptions::default());
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href=routes::HOME>
                "EduNova"
            </a>
            <NavMenu>
                <NavMenuItem index=0>
                    <NavMenuTrigger label="Courses"/>
                    <NavMenuContent>
                        <NavMenuList>
                            {catalog::COURSES
                                .iter()
                                .map(|course| {
                                    let href = routes::course_path(course.id).unwrap_or(routes::HOME);
                                    view! { <NavMenuLink href=href label=course.title/> }
                                })
                                .collect::<Vec<_>>()}
                        </NavMenuList>
                    </NavMenuContent>
                </NavMenuItem>
                <NavMenuItem index=1>
                    <NavMenuTrigger label="Account"/>
                    <NavMenuContent>
                        <NavMenuList>
                            <NavMenuLink href=routes::LOGIN label="Sign in"/>
                            <NavMenuLink href=routes::REGISTER label="Register"/>
                            <NavMenuLink href=routes::FORGOT_PASSWORD label="Forgot password"/>
                        </NavMenuList>
                    </NavMenuContent>
                </NavMenuItem>
            </NavMenu>
            <div class="site-header__actions">
                <button
                    class="site-header__sign-out"
                    class=("site-header__sign-out--hidden", move || !session.get().signed_in)
                    on:click=on_sign_out
                >
                    "Sign out"
                </button>
                <button
                    class="site-header__theme"
                    on:click=move |_| dark.set(dark_mode::toggle(dark.get()))
                >
                    {move || if dark.get() { "Light" } else { "Dark" }}
                </button>
            </div>
        </header>
    }
}
