use super::aggregate::{CategorySub, CategorySubDto};
use crate::domain::common::{parse_id, EntityId, EntityMetadata};
use crate::shared::entity_form::{field, EntityForm, FieldValues};
use crate::shared::form_settings::{FieldSpec, FormConfig, ReferenceSource};
use crate::shared::validation::{required_text, ValidationError};

pub const PICTURE_KEYS: [&str; 5] = [
    "clothes_picture_1",
    "clothes_picture_2",
    "clothes_picture_3",
    "clothes_picture_4",
    "clothes_picture_5",
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::select(
        "id_clothing_category",
        "Parent Category",
        ReferenceSource::Categories,
    )
    .with_placeholder("Select a parent category..."),
    FieldSpec::text("clothes_cat_name_sub", "Subcategory Name", 32)
        .with_placeholder("e.g. Kebaya Bali Merah"),
    FieldSpec::text("clothes_cat_location_sub", "Location", 64)
        .with_placeholder("e.g. Rack A3"),
    FieldSpec::picture("clothes_picture_1", "Picture 1"),
    FieldSpec::picture("clothes_picture_2", "Picture 2"),
    FieldSpec::picture("clothes_picture_3", "Picture 3"),
    FieldSpec::picture("clothes_picture_4", "Picture 4"),
    FieldSpec::picture("clothes_picture_5", "Picture 5"),
];

pub struct CategorySubForm;

impl EntityForm for CategorySubForm {
    type Record = CategorySub;
    type Payload = CategorySubDto;

    const CONFIG: FormConfig = FormConfig {
        entity: "subcategory",
        title: "Subcategory",
        collection: "/api/categories-sub",
        fields: FIELDS,
        warning_ratio: 0.85,
    };

    fn record_id(record: &CategorySub) -> EntityId {
        record.id
    }

    fn metadata(record: &CategorySub) -> &EntityMetadata {
        &record.metadata
    }

    fn field_values(record: &CategorySub) -> FieldValues {
        let mut values = FieldValues::from([
            (
                "id_clothing_category",
                record.id_clothing_category.to_string(),
            ),
            ("clothes_cat_name_sub", record.clothes_cat_name_sub.clone()),
            (
                "clothes_cat_location_sub",
                record.clothes_cat_location_sub.clone(),
            ),
        ]);
        for (key, data) in PICTURE_KEYS.into_iter().zip(record.pictures()) {
            values.insert(key, data.to_string());
        }
        values
    }

    fn build_payload(values: &FieldValues) -> Result<CategorySubDto, ValidationError> {
        let parent = parse_id(field(values, "id_clothing_category"))
            .ok_or_else(|| ValidationError::new("Please select a parent category"))?;
        let name = required_text(
            field(values, "clothes_cat_name_sub"),
            "Subcategory name is required",
        )?;
        let location = required_text(
            field(values, "clothes_cat_location_sub"),
            "Location is required",
        )?;

        Ok(CategorySubDto {
            id_clothing_category: parent,
            clothes_cat_name_sub: name,
            clothes_cat_location_sub: location,
            clothes_picture_1: field(values, PICTURE_KEYS[0]).to_string(),
            clothes_picture_2: field(values, PICTURE_KEYS[1]).to_string(),
            clothes_picture_3: field(values, PICTURE_KEYS[2]).to_string(),
            clothes_picture_4: field(values, PICTURE_KEYS[3]).to_string(),
            clothes_picture_5: field(values, PICTURE_KEYS[4]).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ReferenceRecord;

    fn filled() -> FieldValues {
        let mut values = CategorySubForm::empty_values();
        values.insert("id_clothing_category", "4".into());
        values.insert("clothes_cat_name_sub", " Kebaya Bali ".into());
        values.insert("clothes_cat_location_sub", "Rack A3".into());
        values.insert("clothes_picture_2", "data:image/png;base64,AAAA".into());
        values
    }

    #[test]
    fn test_payload_with_pictures() {
        let dto = CategorySubForm::build_payload(&filled()).unwrap();
        assert_eq!(dto.id_clothing_category, 4);
        assert_eq!(dto.clothes_cat_name_sub, "Kebaya Bali");
        assert_eq!(dto.clothes_picture_1, "");
        assert_eq!(dto.clothes_picture_2, "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_validation_order() {
        let mut values = filled();
        values.insert("id_clothing_category", String::new());
        values.insert("clothes_cat_name_sub", String::new());
        assert_eq!(
            CategorySubForm::build_payload(&values).unwrap_err().message(),
            "Please select a parent category"
        );

        let mut values = filled();
        values.insert("clothes_cat_name_sub", "  ".into());
        values.insert("clothes_cat_location_sub", String::new());
        assert_eq!(
            CategorySubForm::build_payload(&values).unwrap_err().message(),
            "Subcategory name is required"
        );

        let mut values = filled();
        values.insert("clothes_cat_location_sub", String::new());
        assert_eq!(
            CategorySubForm::build_payload(&values).unwrap_err().message(),
            "Location is required"
        );
    }

    #[test]
    fn test_field_values_round_trip_record() {
        let json = r#"{
            "id": 9,
            "id_clothing_category": 4,
            "clothes_cat_name_sub": "Kebaya Bali",
            "clothes_cat_location_sub": "Rack A3",
            "clothes_picture_1": "data:image/png;base64,AAAA",
            "clothes_picture_2": "",
            "clothes_picture_3": "",
            "clothes_picture_4": "",
            "clothes_picture_5": "",
            "clothes_cat_status_sub": 1
        }"#;
        let record: CategorySub = serde_json::from_str(json).unwrap();
        let values = CategorySubForm::field_values(&record);
        assert_eq!(field(&values, "id_clothing_category"), "4");
        assert_eq!(field(&values, "clothes_picture_1"), "data:image/png;base64,AAAA");
        let dto = CategorySubForm::build_payload(&values).unwrap();
        assert_eq!(dto.clothes_cat_location_sub, "Rack A3");
        assert_eq!(record.option_label(), "Kebaya Bali - Rack A3");
    }
}
