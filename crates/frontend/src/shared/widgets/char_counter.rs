use contracts::shared::form_settings::{counter_level, counter_text};
use leptos::prelude::*;

/// "{len} / {max}" under a text field, coloured as the limit approaches
#[component]
pub fn CharCounter(
    #[prop(into)] len: Signal<usize>,
    max: usize,
    warning_ratio: f64,
) -> impl IntoView {
    view! {
        <div class=move || counter_level(len.get(), max, warning_ratio).css_class()>
            {move || counter_text(len.get(), max)}
        </div>
    }
}
