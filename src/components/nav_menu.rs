//! Composable dropdown navigation-menu primitives.
//!
//! DESIGN
//! ======
//! `NavMenu` owns one `MenuState` and provides it via context; each
//! `NavMenuItem` binds an index so its trigger and content share the same
//! open slot. Opening a trigger closes any open sibling at the same level.

use leptos::prelude::*;

use crate::state::menu::MenuState;

/// Index binding a trigger/content pair inside one `NavMenu`.
#[derive(Clone, Copy)]
struct ItemIndex(usize);

/// Menu root; owns the open/close state for its items.
#[component]
pub fn NavMenu(children: Children) -> impl IntoView {
    let state = RwSignal::new(MenuState::default());
    provide_context(state);

    view! {
        <nav class="nav-menu">
            <ul class="nav-menu__items">{children()}</ul>
        </nav>
    }
}

/// One dropdown entry: pairs a trigger with its content panel.
#[component]
pub fn NavMenuItem(index: usize, children: Children) -> impl IntoView {
    provide_context(ItemIndex(index));

    view! { <li class="nav-menu__item">{children()}</li> }
}

/// Button toggling the visibility of the sibling `NavMenuContent`.
#[component]
pub fn NavMenuTrigger(#[prop(into)] label: String) -> impl IntoView {
    let state = expect_context::<RwSignal<MenuState>>();
    let ItemIndex(index) = expect_context::<ItemIndex>();

    view! {
        <button
            class="nav-menu__trigger"
            aria-expanded=move || state.get().is_open(index).to_string()
            on:click=move |_| state.update(|s| s.toggle(index))
        >
            {label}
            <span class="nav-menu__caret" aria-hidden="true"></span>
        </button>
    }
}

/// Content panel anchored to the item's trigger; visible only while open.
#[component]
pub fn NavMenuContent(children: Children) -> impl IntoView {
    let state = expect_context::<RwSignal<MenuState>>();
    let ItemIndex(index) = expect_context::<ItemIndex>();

    view! {
        <div
            class="nav-menu__content"
            class=("nav-menu__content--open", move || state.get().is_open(index))
        >
            {children()}
        </div>
    }
}

/// Vertical list of links inside a content panel.
#[component]
pub fn NavMenuList(children: Children) -> impl IntoView {
    view! { <ul class="nav-menu__list">{children()}</ul> }
}

/// Single link row; closes the menu when followed.
#[component]
pub fn NavMenuLink(#[prop(into)] href: String, #[prop(into)] label: String) -> impl IntoView {
    let state = expect_context::<RwSignal<MenuState>>();

    view! {
        <li class="nav-menu__link">
            <a href=href on:click=move |_| state.update(MenuState::close)>
                {label}
            </a>
        </li>
    }
}
