use crate::shared::entity_form::entity_form_page;
use contracts::domain::a004_customer::CustomerForm;
use contracts::shared::form_settings::FormMode;
use leptos::prelude::*;

#[component]
pub fn CustomerDetails() -> impl IntoView {
    entity_form_page::<CustomerForm>(FormMode::Create)
}
