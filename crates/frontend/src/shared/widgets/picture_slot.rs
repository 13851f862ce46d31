//! One picture of a subcategory, kept as a data URI.

use contracts::shared::picture::{data_url, validate_picture};
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

/// Read `file` completely and return it as a `data:` URI
async fn read_as_data_url(file: &File) -> Result<String, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;

    let array = js_sys::Uint8Array::new(&buffer);
    let mut bytes = vec![0; array.length() as usize];
    array.copy_to(&mut bytes);

    Ok(data_url(&file.type_(), &bytes))
}

#[component]
pub fn PictureSlot(
    field_key: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    on_error: Callback<String>,
) -> impl IntoView {
    let input_id = format!("{}-input", field_key);
    let input_ref = NodeRef::<Input>::new();

    // Emptied slot resets the file input
    Effect::new(move |_| {
        if value.get().is_empty() {
            if let Some(input) = input_ref.get_untracked() {
                input.set_value("");
            }
        }
    });

    let on_file = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if let Err(e) = validate_picture(&file.type_(), file.size() as u64) {
            input.set_value("");
            on_error.run(e.message().to_string());
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match read_as_data_url(&file).await {
                Ok(data) => on_change.run(data),
                Err(e) => {
                    log::warn!("picture {}: {}", field_key, e);
                    on_error.run(format!("Error reading image: {}", e));
                }
            }
        });
    };

    view! {
        <div class="picture-slot">
            <label class="form__label" for=input_id.clone()>{label}</label>
            <input type="file" accept="image/*" id=input_id node_ref=input_ref on:change=on_file />
            {move || {
                let data = value.get();
                (!data.is_empty())
                    .then(|| {
                        view! {
                            <div class="picture-preview">
                                <img src=data alt=label />
                                <button
                                    type="button"
                                    class="button button--secondary"
                                    on:click=move |_| on_change.run(String::new())
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
