use crate::domain::a005_rental::api;
use crate::shared::date_utils::now_local_input;
use crate::shared::flash::Flash;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_category_sub::CategorySub;
use contracts::domain::a003_size::Size;
use contracts::domain::a004_customer::Customer;
use contracts::domain::a005_rental::RentalFormInput;
use contracts::domain::common::{parse_id, SelectOption};
use contracts::shared::date_format::parse_local_input;
use contracts::shared::form_settings::REDIRECT_DELAY_MS;
use contracts::shared::selection::{
    children_of, find_selected, options_for, LoadOutcome, LoadTicket, SelectionCascade,
    SelectorLabels,
};
use contracts::shared::summary::{rental_info, RentalInfo, RentalInfoInput};
use gloo_timers::future::TimeoutFuture;
use chrono::Local;
use leptos::prelude::*;

pub const SUBCATEGORY_LEVEL: usize = 0;
pub const SIZE_LEVEL: usize = 1;

const SELECTORS: [SelectorLabels; 2] = [
    SelectorLabels {
        no_parent: "Select a category first...",
        loading: "Loading subcategories...",
        prompt: "Select a subcategory...",
        empty: "No subcategories available",
    },
    SelectorLabels {
        no_parent: "Select a subcategory first...",
        loading: "Loading sizes...",
        prompt: "Select a size...",
        empty: "No sizes available",
    },
];

const NO_SIZES_WARNING: &str = "No sizes available for this subcategory. Please create sizes first.";

/// ViewModel of the create-rental page
///
/// Reference collections are immutable snapshots replaced wholesale;
/// `subcategories`/`sizes` always hold the children of the current
/// selection in the cascade.
#[derive(Clone, Copy)]
pub struct RentalCreateViewModel {
    pub customers: RwSignal<Vec<Customer>>,
    pub categories: RwSignal<Vec<Category>>,
    pub subcategories: RwSignal<Vec<CategorySub>>,
    pub sizes: RwSignal<Vec<Size>>,
    pub cascade: RwSignal<SelectionCascade>,
    pub customer: RwSignal<String>,
    pub category: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub begin: RwSignal<String>,
    pub end: RwSignal<String>,
    pub min_date: RwSignal<String>,
    pub is_submitting: RwSignal<bool>,
    pub flash: Flash,
}

impl RentalCreateViewModel {
    pub fn new() -> Self {
        Self {
            customers: RwSignal::new(Vec::new()),
            categories: RwSignal::new(Vec::new()),
            subcategories: RwSignal::new(Vec::new()),
            sizes: RwSignal::new(Vec::new()),
            cascade: RwSignal::new(SelectionCascade::new(&SELECTORS)),
            customer: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            quantity: RwSignal::new("1".to_string()),
            begin: RwSignal::new(String::new()),
            end: RwSignal::new(String::new()),
            min_date: RwSignal::new(now_local_input()),
            is_submitting: RwSignal::new(false),
            flash: Flash::new(),
        }
    }

    pub fn customer_options(&self) -> Vec<SelectOption> {
        self.customers.with(|c| options_for(c))
    }

    pub fn category_options(&self) -> Vec<SelectOption> {
        self.categories.with(|c| options_for(c))
    }

    /// Customers and categories are loaded once, independently
    pub fn load_command(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_customers().await {
                Ok(list) => vm.customers.set(list),
                Err(e) => vm.flash.error(e.load_message("customers")),
            }
        });
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_categories().await {
                Ok(list) => vm.categories.set(list),
                Err(e) => vm.flash.error(e.load_message("categories")),
            }
        });
    }

    pub fn category_changed(&self, value: String) {
        self.category.set(value.clone());
        self.subcategories.set(Vec::new());
        self.sizes.set(Vec::new());
        let ticket = self
            .cascade
            .try_update(|c| c.parent_changed(SUBCATEGORY_LEVEL, &value))
            .flatten();
        if let Some(ticket) = ticket {
            self.load_subcategories(ticket, value);
        }
    }

    fn load_subcategories(&self, ticket: LoadTicket, category: String) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_subcategories().await {
                Ok(all) => {
                    let children = children_of(&all, &category);
                    let options = options_for(&children);
                    let outcome = vm
                        .cascade
                        .try_update(|c| c.apply(ticket, options))
                        .unwrap_or(LoadOutcome::Stale);
                    if outcome == LoadOutcome::Stale {
                        log::debug!("dropped subcategories of category {}", category);
                    } else {
                        vm.subcategories.set(children);
                    }
                }
                Err(e) => {
                    if vm.cascade.try_update(|c| c.fail(ticket)).unwrap_or(false) {
                        vm.flash.error(e.load_message("subcategories"));
                    }
                }
            }
        });
    }

    pub fn subcategory_changed(&self, value: String) {
        self.sizes.set(Vec::new());
        let ticket = self
            .cascade
            .try_update(|c| c.select(SUBCATEGORY_LEVEL, &value))
            .flatten();
        if let (Some(ticket), Some(subcategory_id)) = (ticket, parse_id(&value)) {
            self.load_sizes(ticket, subcategory_id);
        }
    }

    fn load_sizes(&self, ticket: LoadTicket, subcategory_id: i64) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_sizes(subcategory_id).await {
                Ok(sizes) => {
                    let options = options_for(&sizes);
                    let outcome = vm
                        .cascade
                        .try_update(|c| c.apply(ticket, options))
                        .unwrap_or(LoadOutcome::Stale);
                    match outcome {
                        LoadOutcome::Stale => {
                            log::debug!("dropped sizes of subcategory {}", subcategory_id)
                        }
                        LoadOutcome::Empty => vm.flash.error(NO_SIZES_WARNING),
                        LoadOutcome::Populated(_) => vm.sizes.set(sizes),
                    }
                }
                Err(e) => {
                    if vm.cascade.try_update(|c| c.fail(ticket)).unwrap_or(false) {
                        vm.flash.error(e.load_message("sizes"));
                    }
                }
            }
        });
    }

    pub fn size_changed(&self, value: String) {
        self.cascade.update(|c| {
            c.select(SIZE_LEVEL, &value);
        });
    }

    fn form_input(&self) -> RentalFormInput {
        self.cascade.with_untracked(|c| RentalFormInput {
            customer: self.customer.get_untracked(),
            subcategory: c.selected(SUBCATEGORY_LEVEL).to_string(),
            size: c.selected(SIZE_LEVEL).to_string(),
            quantity: self.quantity.get_untracked(),
            begin: self.begin.get_untracked(),
            end: self.end.get_untracked(),
        })
    }

    /// Info box content, `None` while it is hidden
    pub fn info(&self) -> Option<RentalInfo> {
        let (subcategory, size) = self.cascade.with(|c| {
            (
                c.selected(SUBCATEGORY_LEVEL).to_string(),
                c.selected(SIZE_LEVEL).to_string(),
            )
        });
        let customer = self.customer.get();

        let input = RentalInfoInput {
            customer_name: self
                .customers
                .with(|all| find_selected(all, &customer).map(|c| c.cust_name.clone())),
            item_name: self.subcategories.with(|all| {
                find_selected(all, &subcategory).map(|s| s.clothes_cat_name_sub.clone())
            }),
            size_label: self
                .sizes
                .with(|all| find_selected(all, &size).map(|s| s.clothes_size_name.clone())),
            customer_selected: !customer.is_empty(),
            subcategory_selected: !subcategory.is_empty(),
            size_selected: !size.is_empty(),
            quantity: self.quantity.get(),
            begin: parse_local_input(&self.begin.get(), &Local),
            end: parse_local_input(&self.end.get(), &Local),
        };
        rental_info(&input, &Local)
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.is_submitting.get_untracked() {
            return;
        }
        let request = match self.form_input().validate(&Local) {
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
            match api::create_rental(&request).await {
                Ok(()) => {
                    vm.flash.success("Rental created successfully!");
                    vm.reset_form();
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    on_saved.run(());
                }
                Err(e) => {
                    vm.flash.error(e.user_message("Failed to create rental"));
                    vm.is_submitting.set(false);
                }
            }
        });
    }

    fn reset_form(&self) {
        self.customer.set(String::new());
        self.category.set(String::new());
        self.subcategories.set(Vec::new());
        self.sizes.set(Vec::new());
        self.cascade.update(SelectionCascade::reset_all);
        self.quantity.set("1".to_string());
        self.begin.set(String::new());
        self.end.set(String::new());
        self.min_date.set(now_local_input());
    }
}

impl Default for RentalCreateViewModel {
    fn default() -> Self {
        Self::new()
    }
}
