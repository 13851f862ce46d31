use contracts::domain::a001_category::Category;
use contracts::domain::common::SelectOption;
use contracts::shared::api_error::ApiError;
use contracts::shared::entity_form::EntityForm;
use contracts::shared::form_settings::{FormMode, ReferenceSource};
use contracts::shared::selection::options_for;

use crate::shared::api_client::{get_collection, get_json, send_json, Method};

/// Options of a select field
pub async fn fetch_options(source: ReferenceSource) -> Result<Vec<SelectOption>, ApiError> {
    match source {
        ReferenceSource::Categories => {
            let categories = get_collection::<Category>(source.endpoint()).await?;
            Ok(options_for(&categories))
        }
    }
}

pub async fn fetch_record<F: EntityForm>(id: &str) -> Result<F::Record, ApiError> {
    get_json::<F::Record>(&F::CONFIG.item_path(id)).await
}

/// POST a new record or PUT over `id`
pub async fn save<F: EntityForm>(
    mode: FormMode,
    id: Option<String>,
    payload: &F::Payload,
) -> Result<(), ApiError> {
    match (mode, id) {
        (FormMode::Edit, Some(id)) => {
            send_json(Method::Put, &F::CONFIG.item_path(&id), payload).await
        }
        _ => send_json(Method::Post, F::CONFIG.collection, payload).await,
    }
}
