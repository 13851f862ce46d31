//! Top bar with the hamburger button that drives the sidebar

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <header class="top-header">
            <button
                id="hamburgerBtn"
                class="hamburger"
                class:active=move || ctx.left_open.get()
                aria-label="Toggle navigation"
                on:click=move |_| ctx.toggle_left()
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <span class="top-header__title">"Clothing Rental"</span>
        </header>
    }
}
