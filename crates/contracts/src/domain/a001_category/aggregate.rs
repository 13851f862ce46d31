use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, EntityMetadata, ReferenceRecord};

/// Top level of the clothing catalogue (e.g. "Kebaya", "Jas")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub clothes_cat_name: String,
    #[serde(default)]
    pub clothes_notes: String,
    #[serde(default)]
    pub clothes_cat_status: i32,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ReferenceRecord for Category {
    fn id(&self) -> EntityId {
        self.id
    }

    fn option_label(&self) -> String {
        self.clothes_cat_name.clone()
    }
}

/// Body of `POST /api/categories` and `PUT /api/categories/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub clothes_cat_name: String,
    pub clothes_notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_record() {
        let json = r#"{
            "id": 3,
            "clothes_cat_name": "Kebaya",
            "clothes_notes": "",
            "clothes_cat_status": 1,
            "created_at": "2024-01-01T08:00:00Z",
            "updated_at": "2024-01-02T08:00:00Z"
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.to_option().value, "3");
        assert_eq!(category.to_option().label, "Kebaya");
        assert!(category.metadata.created_at.is_some());
    }
}
