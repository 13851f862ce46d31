use crate::shared::entity_form::entity_form_page;
use contracts::domain::a001_category::CategoryForm;
use contracts::shared::form_settings::FormMode;
use leptos::prelude::*;

/// `/categories/new` and `/categories/edit?id=`
#[component]
pub fn CategoryDetails(mode: FormMode) -> impl IntoView {
    entity_form_page::<CategoryForm>(mode)
}
