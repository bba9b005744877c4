//! Login page performing client-side-only credential checks.
//!
//! The form never talks to a network; it validates its fields and hands
//! the pair to the injected authenticator. Failures stay on the page as
//! inline text.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::site_header::SiteHeader;
use crate::routes;
use crate::state::auth::{AuthError, AuthHandle, Authenticate, Credentials};
use crate::state::session::SessionState;

/// Shown when either field is empty.
pub(crate) const MSG_REQUIRED: &str = "Email and password are required";
/// Shown when the pair does not match.
pub(crate) const MSG_INCORRECT: &str = "Incorrect credentials";
/// Shown when authentication fails for any unexpected reason.
pub(crate) const MSG_FAILED: &str = "Something went wrong";

/// What the submit handler should do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SubmitOutcome {
    /// Credentials matched; push the home route once.
    NavigateHome,
    /// Stay on the page and show the message.
    ShowError(&'static str),
}

/// Validate both fields are present, then run the injected authenticator.
pub(crate) fn submit_login<A>(auth: &A, email: &str, password: &str) -> SubmitOutcome
where
    A: Authenticate + ?Sized,
{
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return SubmitOutcome::ShowError(MSG_REQUIRED);
    }
    let credentials = Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    match auth.authenticate(&credentials) {
        Ok(()) => SubmitOutcome::NavigateHome,
        Err(AuthError::InvalidCredentials) => SubmitOutcome::ShowError(MSG_INCORRECT),
        Err(err) => {
            log::warn!("login failed unexpectedly: {err}");
            SubmitOutcome::ShowError(MSG_FAILED)
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let auth = expect_context::<AuthHandle>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match submit_login(auth.as_ref(), &email.get(), &password.get()) {
            SubmitOutcome::NavigateHome => {
                error.set(String::new());
                session.update(SessionState::sign_in);
                navigate(routes::HOME, NavigateOptions::default());
            }
            SubmitOutcome::ShowError(msg) => error.set(msg.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <SiteHeader/>
            <div class="login-card">
                <h1>"Sign in to your account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Email"
                        <input
                            class="login-form__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-form__input"
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="login-form__submit" type="submit">
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-form__error">{move || error.get()}</p>
                </Show>
                <div class="login-card__links">
                    <a href=routes::FORGOT_PASSWORD>"Forgot password?"</a>
                    <a href=routes::REGISTER>"Create an account"</a>
                </div>
            </div>
        </div>
    }
}
