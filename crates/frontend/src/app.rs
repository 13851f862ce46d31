use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Sidebar state is shared by the shell of every page
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
