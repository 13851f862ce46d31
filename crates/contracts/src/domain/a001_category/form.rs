use super::aggregate::{Category, CategoryDto};
use crate::domain::common::{EntityId, EntityMetadata};
use crate::shared::entity_form::{field, EntityForm, FieldValues};
use crate::shared::form_settings::{FieldSpec, FormConfig, DEFAULT_WARNING_RATIO};
use crate::shared::validation::{required_text, ValidationError};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("clothes_cat_name", "Category Name", 32).with_placeholder("e.g. Kebaya"),
    FieldSpec::notes("clothes_notes", "Notes", 256),
];

pub struct CategoryForm;

impl EntityForm for CategoryForm {
    type Record = Category;
    type Payload = CategoryDto;

    const CONFIG: FormConfig = FormConfig {
        entity: "category",
        title: "Category",
        collection: "/api/categories",
        fields: FIELDS,
        warning_ratio: DEFAULT_WARNING_RATIO,
    };

    fn record_id(record: &Category) -> EntityId {
        record.id
    }

    fn metadata(record: &Category) -> &EntityMetadata {
        &record.metadata
    }

    fn field_values(record: &Category) -> FieldValues {
        FieldValues::from([
            ("clothes_cat_name", record.clothes_cat_name.clone()),
            ("clothes_notes", record.clothes_notes.clone()),
        ])
    }

    fn build_payload(values: &FieldValues) -> Result<CategoryDto, ValidationError> {
        let name = required_text(field(values, "clothes_cat_name"), "Category name is required")?;
        Ok(CategoryDto {
            clothes_cat_name: name,
            clothes_notes: field(values, "clothes_notes").trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_is_trimmed() {
        let mut values = CategoryForm::empty_values();
        values.insert("clothes_cat_name", "  Kebaya ".into());
        values.insert("clothes_notes", " traditional ".into());
        let dto = CategoryForm::build_payload(&values).unwrap();
        assert_eq!(dto.clothes_cat_name, "Kebaya");
        assert_eq!(dto.clothes_notes, "traditional");
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({"clothes_cat_name": "Kebaya", "clothes_notes": "traditional"})
        );
    }

    #[test]
    fn test_name_required() {
        let values = CategoryForm::empty_values();
        assert_eq!(
            CategoryForm::build_payload(&values).unwrap_err().message(),
            "Category name is required"
        );
    }
}
