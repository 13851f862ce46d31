use contracts::shared::form_settings::{RESIZE_DEBOUNCE_MS, SIDEBAR_BREAKPOINT_PX};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use web_sys::window;

/// Application-wide UI state shared through context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Navigation sidebar; closed on every page load
    pub left_open: RwSignal<bool>,
    resize_generation: RwSignal<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(false),
            resize_generation: RwSignal::new(0),
        }
    }

    pub fn open_left(&self) {
        self.left_open.set(true);
        set_body_scroll_locked(true);
    }

    pub fn close_left(&self) {
        if self.left_open.get_untracked() {
            self.left_open.set(false);
            set_body_scroll_locked(false);
        }
    }

    pub fn toggle_left(&self) {
        if self.left_open.get_untracked() {
            self.close_left();
        } else {
            self.open_left();
        }
    }

    /// Close the sidebar once the viewport has stayed wide for a moment
    pub fn viewport_resized(&self) {
        self.resize_generation.update(|g| *g += 1);
        let scheduled = self.resize_generation.get_untracked();
        let ctx = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(RESIZE_DEBOUNCE_MS).await;
            if ctx.resize_generation.get_untracked() != scheduled {
                return;
            }
            let width = window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|w| w.as_f64())
                .unwrap_or_default();
            if width >= SIDEBAR_BREAKPOINT_PX {
                ctx.close_left();
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Stop the page behind the open sidebar from scrolling
fn set_body_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    let _ = body.style().set_property("overflow", value);
}
