pub mod global_context;
pub mod left;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::ev;
use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell around every signed-in page.
///
/// ```text
/// +------------------------------------------+
/// |  TopHeader (hamburger)                    |
/// +------------------------------------------+
/// |  Sidebar (overlay)  |      Content        |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    let escape = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            ctx.close_left();
        }
    });
    let resize = window_event_listener(ev::resize, move |_| ctx.viewport_resized());
    on_cleanup(move || {
        escape.remove();
        resize.remove();
    });

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>
                <div
                    id="sidebarOverlay"
                    class="sidebar-overlay"
                    class:active=move || ctx.left_open.get()
                    on:click=move |_| ctx.close_left()
                ></div>
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
