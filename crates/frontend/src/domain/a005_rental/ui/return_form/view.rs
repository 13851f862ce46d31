use super::view_model::{RentalReturnViewModel, RENTAL_LEVEL};
use crate::shared::flash::FlashBanner;
use crate::shared::widgets::SelectOptions;
use contracts::domain::common::SelectOption;
use contracts::shared::form_settings::CANCEL_CONFIRMATION;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

#[component]
pub fn RentalReturnPage() -> impl IntoView {
    let vm = RentalReturnViewModel::new();
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

    let has_rental = move || vm.selected_rental().is_some();
    let max_quantity = move || {
        vm.selected_rental()
            .map(|r| r.remaining().to_string())
            .unwrap_or_default()
    };

    view! {
        <div class="form-page">
            <h1>"Process Return"</h1>
            <FlashBanner flash=vm.flash />

            <form class="detail-form" on:submit=on_submit>
                <div class="form__group">
                    <label class="form__label" for="customer">"Customer *"</label>
                    <select
                        class="form__select"
                        id="customer"
                        prop:value=move || vm.customer.get()
                        on:change=move |ev| vm.customer_changed(event_target_value(&ev))
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
                    <label class="form__label" for="rental">"Rental *"</label>
                    <select
                        class="form__select"
                        id="rental"
                        disabled=move || !vm.cascade.with(|c| c.is_enabled(RENTAL_LEVEL))
                        on:change=move |ev| vm.rental_changed(event_target_value(&ev))
                    >
                        <SelectOptions
                            options=Signal::derive(move || vm.cascade.with(|c| c.options(RENTAL_LEVEL)))
                            selected=Signal::derive(move || {
                                vm.cascade.with(|c| c.selected(RENTAL_LEVEL).to_string())
                            })
                        />
                    </select>
                </div>

                {move || {
                    vm.details().map(|d| {
                        view! {
                            <div class="rental-details">
                                <h3>"Rental Details"</h3>
                                <p><strong>"Item: "</strong>{d.item}</p>
                                <p><strong>"Size: "</strong>{d.size}</p>
                                <p><strong>"Quantity Rented: "</strong>{d.qty_rent}</p>
                                <p><strong>"Already Returned: "</strong>{d.qty_returned}</p>
                                <p><strong>"Remaining: "</strong>{d.qty_remaining}</p>
                                <p><strong>"Rental Start: "</strong>{d.date_begin}</p>
                                <p><strong>"Rental End: "</strong>{d.date_end}</p>
                                <p><strong>"Status: "</strong>{d.status}</p>
                            </div>
                        }
                    })
                }}

                <div class="form__group">
                    <label class="form__label" for="quantity-return">
                        "Quantity to Return * (max: " {max_quantity} ")"
                    </label>
                    <input
                        class="form__input"
                        type="number"
                        id="quantity-return"
                        min="1"
                        max=max_quantity
                        disabled=move || !has_rental()
                        prop:value=move || vm.quantity.get()
                        on:input=move |ev| vm.quantity_changed(event_target_value(&ev))
                    />
                </div>

                <div class="form__group">
                    <label class="form__label" for="return-date">"Return Date *"</label>
                    <input
                        class="form__input"
                        type="datetime-local"
                        id="return-date"
                        disabled=move || !has_rental()
                        prop:value=move || vm.return_date.get()
                        on:change=move |ev| vm.return_date.set(event_target_value(&ev))
                    />
                </div>

                {move || {
                    vm.summary().map(|s| {
                        view! {
                            <div class="return-summary">
                                <h3>"Return Summary"</h3>
                                <p><strong>"Customer: "</strong>{s.customer}</p>
                                <p><strong>"Quantity: "</strong>{s.quantity}</p>
                                <p><strong>"Return Date: "</strong>{s.return_date}</p>
                                <p><strong>"Days Rented: "</strong>{s.days_rented}</p>
                                {s.late.map(|late| view! {
                                    <div class="late-warning">
                                        <strong>"Late return: "</strong>{late}
                                    </div>
                                })}
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
                        disabled=move || vm.is_submitting.get() || vm.summary().is_none()
                    >
                        "Process Return"
                    </button>
                </div>
            </form>
        </div>
    }
}
