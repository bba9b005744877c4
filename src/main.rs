//! Browser entry point: install logging and mount the root component.

use leptos::prelude::*;

use edunova::app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("mounting edunova client");
    leptos::mount::mount_to_body(|| view! { <App/> });
}
