//! Navigation menu inside the sidebar

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::api;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// (href, label, icon)
const MENU_ITEMS: &[(&str, &str, &str)] = &[
    ("/", "Home", "home"),
    ("/categories/new", "New Category", "category"),
    ("/categories-sub/new", "New Subcategory", "subcategory"),
    ("/customers/new", "New Customer", "customer"),
    ("/rentals/new", "New Rental", "rental"),
    ("/rentals/return", "Process Return", "return"),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let navigate = use_navigate();

    // Whatever the server says, the user ends up on the login page
    let logout = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::logout().await {
                Ok(response) if response.success => {}
                Ok(response) => log::error!("Logout failed: {}", response.message),
                Err(e) => log::error!("Logout error: {}", e),
            }
            ctx.close_left();
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <div class="app-sidebar__content">
            {MENU_ITEMS
                .iter()
                .map(|(href, label, icon_name)| {
                    view! {
                        <a class="nav-link" href=*href on:click=move |_| ctx.close_left()>
                            {icon(icon_name)}
                            <span>{*label}</span>
                        </a>
                    }
                })
                .collect_view()}
            <a id="logoutBtn" class="nav-link" href="/login" on:click=logout>
                {icon("logout")}
                <span>"Logout"</span>
            </a>
        </div>
    }
}
