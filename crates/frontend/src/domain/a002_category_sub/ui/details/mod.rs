use crate::shared::entity_form::entity_form_page;
use contracts::domain::a002_category_sub::CategorySubForm;
use contracts::shared::form_settings::FormMode;
use leptos::prelude::*;

/// Subcategory page; the parent category list is loaded before the record
#[component]
pub fn CategorySubDetails(mode: FormMode) -> impl IntoView {
    entity_form_page::<CategorySubForm>(mode)
}
