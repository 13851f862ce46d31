use crate::domain::a005_rental::api;
use crate::shared::date_utils::now_local_input;
use crate::shared::flash::Flash;
use contracts::domain::a004_customer::Customer;
use contracts::domain::a005_rental::{
    returnable_for_customer, Rental, RentalDetails, ReturnFormInput,
};
use contracts::domain::common::SelectOption;
use contracts::shared::date_format::parse_local_input;
use contracts::shared::form_settings::REDIRECT_DELAY_MS;
use contracts::shared::selection::{
    find_selected, options_for, LoadOutcome, LoadTicket, SelectionCascade, SelectorLabels,
};
use contracts::shared::summary::{
    clamp_return_quantity, default_return_quantity, return_summary, ReturnSummary,
    ReturnSummaryInput,
};
use gloo_timers::future::TimeoutFuture;
use chrono::Local;
use leptos::prelude::*;

pub const RENTAL_LEVEL: usize = 0;

const SELECTORS: [SelectorLabels; 1] = [SelectorLabels {
    no_parent: "Select a customer first...",
    loading: "Loading...",
    prompt: "Select a rental...",
    empty: "No active rentals found",
}];

/// ViewModel of the return page
#[derive(Clone, Copy)]
pub struct RentalReturnViewModel {
    pub customers: RwSignal<Vec<Customer>>,
    /// Returnable rentals of the selected customer
    pub rentals: RwSignal<Vec<Rental>>,
    pub cascade: RwSignal<SelectionCascade>,
    pub customer: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub return_date: RwSignal<String>,
    pub is_submitting: RwSignal<bool>,
    pub flash: Flash,
}

impl RentalReturnViewModel {
    pub fn new() -> Self {
        Self {
            customers: RwSignal::new(Vec::new()),
            rentals: RwSignal::new(Vec::new()),
            cascade: RwSignal::new(SelectionCascade::new(&SELECTORS)),
            customer: RwSignal::new(String::new()),
            quantity: RwSignal::new(String::new()),
            return_date: RwSignal::new(now_local_input()),
            is_submitting: RwSignal::new(false),
            flash: Flash::new(),
        }
    }

    pub fn customer_options(&self) -> Vec<SelectOption> {
        self.customers.with(|c| options_for(c))
    }

    pub fn load_command(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_customers().await {
                Ok(list) => vm.customers.set(list),
                Err(e) => vm.flash.error(e.load_message("customers")),
            }
        });
    }

    pub fn customer_changed(&self, value: String) {
        self.customer.set(value.clone());
        self.rentals.set(Vec::new());
        self.quantity.set(String::new());
        let ticket = self
            .cascade
            .try_update(|c| c.parent_changed(RENTAL_LEVEL, &value))
            .flatten();
        if let Some(ticket) = ticket {
            self.load_rentals(ticket, value);
        }
    }

    fn load_rentals(&self, ticket: LoadTicket, customer: String) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_rentals().await {
                Ok(all) => {
                    let rentals = returnable_for_customer(&all, &customer);
                    let options = options_for(&rentals);
                    let outcome = vm
                        .cascade
                        .try_update(|c| c.apply(ticket, options))
                        .unwrap_or(LoadOutcome::Stale);
                    if outcome == LoadOutcome::Stale {
                        log::debug!("dropped rentals of customer {}", customer);
                    } else {
                        vm.rentals.set(rentals);
                    }
                }
                Err(e) => {
                    if vm.cascade.try_update(|c| c.fail(ticket)).unwrap_or(false) {
                        vm.flash.error(e.load_message("rentals"));
                    }
                }
            }
        });
    }

    pub fn selected_rental(&self) -> Option<Rental> {
        let value = self.cascade.with(|c| c.selected(RENTAL_LEVEL).to_string());
        self.rentals
            .with(|all| find_selected(all, &value).cloned())
    }

    pub fn rental_changed(&self, value: String) {
        self.cascade.update(|c| {
            c.select(RENTAL_LEVEL, &value);
        });
        let quantity = self
            .selected_rental()
            .map(|r| default_return_quantity(r.remaining()).to_string())
            .unwrap_or_default();
        self.quantity.set(quantity);
    }

    /// Quantities above what is still out are lowered to the remaining count
    pub fn quantity_changed(&self, raw: String) {
        let remaining = self.selected_rental().map(|r| r.remaining());
        let value = match (raw.trim().parse::<i64>(), remaining) {
            (Ok(requested), Some(remaining)) if requested > remaining => {
                clamp_return_quantity(requested, remaining).to_string()
            }
            _ => raw,
        };
        self.quantity.set(value);
    }

    pub fn details(&self) -> Option<RentalDetails> {
        self.selected_rental()
            .map(|r| RentalDetails::from_rental(&r, &Local))
    }

    /// Summary box content; `None` hides it and disables submission
    pub fn summary(&self) -> Option<ReturnSummary> {
        let rental = self.selected_rental()?;
        let customer_name = self.customers.with(|all| {
            all.iter()
                .find(|c| c.id == rental.id_clothing_customer)
                .map(|c| c.cust_name.clone())
        });

        let input = ReturnSummaryInput {
            customer_name,
            quantity: self.quantity.get(),
            return_date: parse_local_input(&self.return_date.get(), &Local),
            rental_begin: rental.clothes_rent_date_begin,
            rental_end: rental.clothes_rent_date_end,
        };
        return_summary(&input, &Local)
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.is_submitting.get_untracked() {
            return;
        }
        let input = ReturnFormInput {
            customer: self.customer.get_untracked(),
            rental: self
                .cascade
                .with_untracked(|c| c.selected(RENTAL_LEVEL).to_string()),
            quantity: self.quantity.get_untracked(),
            return_date: self.return_date.get_untracked(),
        };
        let rental = untrack(|| self.selected_rental());
        let request = match input.validate(rental.as_ref(), &Local) {
            Ok(request) => request,
            Err(e) => {
                self.flash.error(e.message());
                return;
            }
        };

        let vm = *self;
        vm.flash.clear();
        vm.is_submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::process_return(&request).await {
                Ok(()) => {
                    vm.flash.success("Return processed successfully!");
                    vm.reset_form();
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    on_saved.run(());
                }
                Err(e) => {
                    vm.flash.error(e.user_message("Failed to process return"));
                    vm.is_submitting.set(false);
                }
            }
        });
    }

    fn reset_form(&self) {
        self.customer.set(String::new());
        self.rentals.set(Vec::new());
        self.cascade.update(SelectionCascade::reset_all);
        self.quantity.set(String::new());
        self.return_date.set(now_local_input());
    }
}

impl Default for RentalReturnViewModel {
    fn default() -> Self {
        Self::new()
    }
}
