use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let is_open = move || ctx.left_open.get();

    view! {
        <nav id="sidebar" data-zone="left" class="sidebar" class:open=is_open>
            {children()}
        </nav>
    }
}
