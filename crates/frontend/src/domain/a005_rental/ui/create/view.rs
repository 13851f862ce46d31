use super::view_model::{RentalCreateViewModel, SIZE_LEVEL, SUBCATEGORY_LEVEL};
use crate::shared::flash::FlashBanner;
use crate::shared::widgets::SelectOptions;
use contracts::domain::common::SelectOption;
use contracts::shared::form_settings::CANCEL_CONFIRMATION;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

#[component]
pub fn RentalCreatePage() -> impl IntoView {
    let vm = RentalCreateViewModel::new();
    vm.load_command();

    let navigate = use_navigate();
    let go_home = Callback::new(move |_: ()| navigate("/", NavigateOptions::default()));

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

    view! {
        <div class="form-page">
            <h1>"Create Rental"</h1>
            <FlashBanner flash=vm.flash />

            <form class="detail-form" on:submit=on_submit>
                <div class="form__group">
                    <label class="form__label" for="customer">"Customer *"</label>
                    <select
                        class="form__select"
                        id="customer"
                        prop:value=move || vm.customer.get()
                        on:change=move |ev| vm.customer.set(event_target_value(&ev))
                    >
                        <SelectOptions
                            options=Signal::derive(move || {
                                let mut all = vec![SelectOption::placeholder("Select a customer...")];
                                all.extend(vm.customer_options());
                                all
                            })
                            selected=vm.customer
                        />
                    </select>
                </div>

                <div class="form__group">
                    <label class="form__label" for="category">"Category *"</label>
                    <select
                        class="form__select"
                        id="category"
                        prop:value=move || vm.category.get()
                        on:change=move |ev| vm.category_changed(event_target_value(&ev))
                    >
                        <SelectOptions
                            options=Signal::derive(move || {
                                let mut all = vec![SelectOption::placeholder("Select a category...")];
                                all.extend(vm.category_options());
                                all
                            })
                            selected=vm.category
                        />
                    </select>
                </div>

                <div class="form__group">
                    <label class="form__label" for="subcategory">"Subcategory *"</label>
                    <select
                        class="form__select"
                        id="subcategory"
                        disabled=move || !vm.cascade.with(|c| c.is_enabled(SUBCATEGORY_LEVEL))
                        on:change=move |ev| vm.subcategory_changed(event_target_value(&ev))
                    >
                        <SelectOptions
                            options=Signal::derive(move || vm.cascade.with(|c| c.options(SUBCATEGORY_LEVEL)))
                            selected=Signal::derive(move || {
                                vm.cascade.with(|c| c.selected(SUBCATEGORY_LEVEL).to_string())
                            })
                        />
                    </select>
                </div>

                <div class="form__group">
                    <label class="form__label" for="size">"Size *"</label>
                    <select
                        class="form__select"
                        id="size"
                        disabled=move || !vm.cascade.with(|c| c.is_enabled(SIZE_LEVEL))
                        on:change=move |ev| vm.size_changed(event_target_value(&ev))
                    >
                        <SelectOptions
                            options=Signal::derive(move || vm.cascade.with(|c| c.options(SIZE_LEVEL)))
                            selected=Signal::derive(move || {
                                vm.cascade.with(|c| c.selected(SIZE_LEVEL).to_string())
                            })
                        />
                    </select>
                </div>

                <div class="form__group">
                    <label class="form__label" for="quantity">"Quantity *"</label>
                    <input
                        class="form__input"
                        type="number"
                        id="quantity"
                        min="1"
                        prop:value=move || vm.quantity.get()
                        on:input=move |ev| vm.quantity.set(event_target_value(&ev))
                    />
                </div>

                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label" for="rent-date-begin">"Rental Start *"</label>
                        <input
                            class="form__input"
                            type="datetime-local"
                            id="rent-date-begin"
                            min=move || vm.min_date.get()
                            prop:value=move || vm.begin.get()
                            on:change=move |ev| vm.begin.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="rent-date-end">"Rental End *"</label>
                        <input
                            class="form__input"
                            type="datetime-local"
                            id="rent-date-end"
                            min=move || vm.min_date.get()
                            prop:value=move || vm.end.get()
                            on:change=move |ev| vm.end.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                {move || {
                    vm.info().map(|info| {
                        view! {
                            <div class="info-box">
                                <h3>"Rental Summary"</h3>
                                <p><strong>"Customer: "</strong>{info.customer}</p>
                                <p><strong>"Item: "</strong>{info.item}</p>
                                <p><strong>"Size: "</strong>{info.size}</p>
                                <p><strong>"Quantity: "</strong>{info.quantity}</p>
                                <p><strong>"Period: "</strong>{info.period}</p>
                                <p><strong>"Duration: "</strong>{info.duration}</p>
                            </div>
                        }
                    })
                }}

                <Show when=move || vm.is_submitting.get()>
                    <div class="loading show">"Processing..."</div>
                </Show>

                <div class="form-actions">
                    <button type="button" class="button button--secondary" on:click=on_cancel>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.is_submitting.get()
                    >
                        "Create Rental"
                    </button>
                </div>
            </form>
        </div>
    }
}
