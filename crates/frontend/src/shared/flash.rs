//! Page-level message area.

use contracts::shared::messages::FlashMessage;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Current message of a page plus a counter of how many were shown, so a
/// dismiss timer only clears the message it was started for.
#[derive(Clone, Copy)]
pub struct Flash {
    pub message: RwSignal<Option<FlashMessage>>,
    generation: RwSignal<u64>,
}

impl Flash {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    pub fn show(&self, message: FlashMessage) {
        self.generation.update(|g| *g += 1);
        let shown = self.generation.get_untracked();
        let dismiss_after = message.kind.auto_dismiss_ms();
        self.message.set(Some(message));

        if let Some(ms) = dismiss_after {
            let flash = *self;
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(ms).await;
                if flash.generation.get_untracked() == shown {
                    flash.message.set(None);
                }
            });
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(FlashMessage::success(text));
    }

    pub fn error(&self, text: impl Into<String>) {
        let text = text.into();
        log::warn!("{}", text);
        self.show(FlashMessage::error(text));
    }

    pub fn clear(&self) {
        self.generation.update(|g| *g += 1);
        self.message.set(None);
    }
}

impl Default for Flash {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn FlashBanner(flash: Flash) -> impl IntoView {
    move || {
        flash.message.get().map(|m| {
            view! { <div class=m.kind.css_class() role="alert">{m.text}</div> }
        })
    }
}
