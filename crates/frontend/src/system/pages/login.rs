use contracts::shared::api_error::ApiError;
use contracts::shared::form_settings::{PIN_LEN, USERNAME_MAX_LEN};
use contracts::system::auth::{sanitize_pin, validate_pin, validate_username, LoginRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::system::auth::api;

fn field_error<T>(result: Result<T, contracts::shared::validation::ValidationError>) -> Option<String> {
    result.err().map(|e| e.message().to_string())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (pin, set_pin) = signal(String::new());
    let (username_error, set_username_error) = signal(Option::<String>::None);
    let (pin_error, set_pin_error) = signal(Option::<String>::None);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let navigate = use_navigate();

    let on_username = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        set_username_error.set(field_error(validate_username(&value)));
        set_username.set(value);
    };

    // Non-digits are dropped as they are typed or pasted
    let on_pin = move |ev: leptos::ev::Event| {
        let value = sanitize_pin(&event_target_value(&ev));
        set_pin_error.set(field_error(validate_pin(&value)));
        set_pin.set(value);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        let username_val = username.get_untracked();
        let pin_val = pin.get_untracked();
        set_username_error.set(field_error(validate_username(&username_val)));
        set_pin_error.set(field_error(validate_pin(&pin_val)));

        let request = match LoginRequest::validated(&username_val, &pin_val) {
            Ok(request) => request,
            Err(_) => return,
        };

        set_is_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&request).await {
                Ok(response) => {
                    log::info!("logged in as user {:?}", response.user_id);
                    navigate("/", NavigateOptions::default());
                }
                Err(ApiError::Transport(detail)) => {
                    log::error!("Login error: {}", detail);
                    set_error_message.set(Some("An error occurred. Please try again.".to_string()));
                    set_is_loading.set(false);
                }
                Err(e) => {
                    let message = match e {
                        ApiError::Rejected {
                            message: Some(message),
                            ..
                        } => message,
                        _ => "Failed to authenticate".to_string(),
                    };
                    set_error_message.set(Some(message));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Clothing Rental"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            maxlength=USERNAME_MAX_LEN.to_string()
                            class:error=move || username_error.get().is_some()
                            prop:value=move || username.get()
                            on:input=on_username
                            disabled=move || is_loading.get()
                        />
                        <span class="field-error">{move || username_error.get().unwrap_or_default()}</span>
                    </div>

                    <div class="form-group">
                        <label for="pin">"PIN"</label>
                        <input
                            type="password"
                            id="pin"
                            inputmode="numeric"
                            maxlength=PIN_LEN.to_string()
                            class:error=move || pin_error.get().is_some()
                            prop:value=move || pin.get()
                            on:input=on_pin
                            disabled=move || is_loading.get()
                        />
                        <span class="field-error">{move || pin_error.get().unwrap_or_default()}</span>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
