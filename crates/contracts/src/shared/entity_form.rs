//! Contract of the generic create/edit form controller.
//!
//! An entity describes its fields once (`FormConfig`), how a stored record
//! maps onto those fields, and how the field values become a request
//! payload. The frontend renders and submits any `EntityForm` the same way.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::form_settings::FormConfig;
use super::validation::ValidationError;
use crate::domain::common::{EntityId, EntityMetadata};

/// Current raw value of every field, keyed by `FieldSpec::key`
pub type FieldValues = BTreeMap<&'static str, String>;

pub trait EntityForm: 'static {
    /// Record returned by `GET {collection}/{id}`
    type Record: DeserializeOwned + Clone + Send + Sync + 'static;
    /// Body of `POST {collection}` / `PUT {collection}/{id}`
    type Payload: Serialize + Send + 'static;

    const CONFIG: FormConfig;

    fn record_id(record: &Self::Record) -> EntityId;

    fn metadata(record: &Self::Record) -> &EntityMetadata;

    /// Field values shown when editing `record`
    fn field_values(record: &Self::Record) -> FieldValues;

    /// Run the validation gate and assemble the payload
    fn build_payload(values: &FieldValues) -> Result<Self::Payload, ValidationError>;

    /// Every configured field with an empty value
    fn empty_values() -> FieldValues {
        Self::CONFIG
            .fields
            .iter()
            .map(|f| (f.key, String::new()))
            .collect()
    }
}

/// Value of `key`, empty when absent
pub fn field<'a>(values: &'a FieldValues, key: &str) -> &'a str {
    values.get(key).map(String::as_str).unwrap_or_default()
}

/// Truncate to the field's maximum length, as `maxlength` does in the browser
pub fn clip_to_max(value: &str, max_len: Option<usize>) -> String {
    match max_len {
        Some(max) => value.chars().take(max).collect(),
        None => value.to_string(),
    }
}
