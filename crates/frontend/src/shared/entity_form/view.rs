use super::view_model::EntityFormViewModel;
use crate::shared::flash::FlashBanner;
use crate::shared::widgets::{CharCounter, PictureSlot, SelectOptions};
use contracts::domain::common::SelectOption;
use contracts::shared::date_format::format_optional;
use contracts::shared::entity_form::EntityForm;
use contracts::shared::form_settings::{FieldKind, FieldSpec, FormMode, CANCEL_CONFIRMATION};
use chrono::Local;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

/// Full create or edit page for `F`; edit mode reads the record id from `?id=`
pub fn entity_form_page<F: EntityForm>(mode: FormMode) -> impl IntoView {
    let vm = EntityFormViewModel::<F>::new(mode);
    let query = use_query_map();
    let navigate = use_navigate();

    let id = query.with_untracked(|q| q.get("id"));
    vm.load_command(id);

    let go_home = {
        let navigate = navigate.clone();
        Callback::new(move |_: ()| navigate("/", NavigateOptions::default()))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(go_home);
    };

    let on_cancel = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(CANCEL_CONFIRMATION).ok())
            .unwrap_or(false);
        if confirmed {
            go_home.run(());
        }
    };

    let config = F::CONFIG;
    let fields = config
        .fields
        .iter()
        .map(|spec| render_field(vm, spec))
        .collect_view();

    view! {
        <div class="form-page">
            <h1>{config.heading(mode)}</h1>
            <FlashBanner flash=vm.flash />

            {move || {
                vm.metadata.get().map(|meta| {
                    view! {
                        <div class="record-metadata">
                            <span>"Created: " {format_optional(meta.created_at, &Local)}</span>
                            <span>"Updated: " {format_optional(meta.updated_at, &Local)}</span>
                        </div>
                    }
                })
            }}

            <form class="detail-form" on:submit=on_submit>
                {fields}
                <div class="form-actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=on_cancel
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.is_submitting.get() || vm.is_loading.get()
                    >
                        {move || {
                            match (vm.is_submitting.get(), mode) {
                                (true, _) => "Saving...".to_string(),
                                (false, FormMode::Create) => format!("Create {}", config.title),
                                (false, FormMode::Edit) => format!("Update {}", config.title),
                            }
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

fn render_field<F: EntityForm>(vm: EntityFormViewModel<F>, spec: &'static FieldSpec) -> AnyView {
    let key = spec.key;
    let input_id = key.replace('_', "-");

    match spec.kind {
        FieldKind::Text => view! {
            <div class="form__group">
                <label class="form__label" for=input_id.clone()>{field_label(spec)}</label>
                <input
                    class="form__input"
                    type="text"
                    id=input_id
                    maxlength=spec.max_len.map(|m| m.to_string())
                    placeholder=spec.placeholder
                    prop:value=move || vm.value(key)
                    on:input=move |ev| vm.set_value(key, event_target_value(&ev))
                />
                {counter(vm, spec)}
            </div>
        }
        .into_any(),
        FieldKind::Multiline => view! {
            <div class="form__group">
                <label class="form__label" for=input_id.clone()>{field_label(spec)}</label>
                <textarea
                    class="form__textarea"
                    id=input_id
                    maxlength=spec.max_len.map(|m| m.to_string())
                    placeholder=spec.placeholder
                    prop:value=move || vm.value(key)
                    on:input=move |ev| vm.set_value(key, event_target_value(&ev))
                ></textarea>
                {counter(vm, spec)}
            </div>
        }
        .into_any(),
        FieldKind::Select(_) => view! {
            <div class="form__group">
                <label class="form__label" for=input_id.clone()>{field_label(spec)}</label>
                <select
                    class="form__select"
                    id=input_id
                    prop:value=move || vm.value(key)
                    on:change=move |ev| vm.set_value(key, event_target_value(&ev))
                >
                    <SelectOptions
                        options=Signal::derive(move || {
                            let mut all = vec![SelectOption::placeholder(spec.placeholder)];
                            all.extend(vm.field_options(key));
                            all
                        })
                        selected=Signal::derive(move || vm.value(key))
                    />
                </select>
            </div>
        }
        .into_any(),
        FieldKind::Picture => {
            let on_change = Callback::new(move |data: String| vm.set_value(key, data));
            let on_error = Callback::new(move |message: String| vm.flash.error(message));
            view! {
                <PictureSlot
                    field_key=key
                    label=spec.label
                    value=Signal::derive(move || vm.value(key))
                    on_change=on_change
                    on_error=on_error
                />
            }
            .into_any()
        }
    }
}

fn field_label(spec: &FieldSpec) -> String {
    if spec.required {
        format!("{} *", spec.label)
    } else {
        spec.label.to_string()
    }
}

fn counter<F: EntityForm>(vm: EntityFormViewModel<F>, spec: &'static FieldSpec) -> Option<AnyView> {
    let key = spec.key;
    spec.max_len.map(|max| {
        view! {
            <CharCounter
                len=Signal::derive(move || vm.value_len(key))
                max=max
                warning_ratio=F::CONFIG.warning_ratio
            />
        }
        .into_any()
    })
}
