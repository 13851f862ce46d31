use contracts::domain::common::SelectOption;
use leptos::prelude::*;

/// `<option>` children of a `<select>`, rebuilt whenever `options` changes
#[component]
pub fn SelectOptions(
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] selected: Signal<String>,
) -> impl IntoView {
    move || {
        let current = selected.get();
        options
            .get()
            .into_iter()
            .map(|o| {
                let is_selected = o.value == current;
                view! { <option value=o.value selected=is_selected>{o.label}</option> }
            })
            .collect_view()
    }
}
