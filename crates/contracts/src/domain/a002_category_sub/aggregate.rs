use serde::{Deserialize, Serialize};

use crate::domain::common::{ChildRecord, EntityId, EntityMetadata, ReferenceRecord};

/// Concrete rentable item inside a category, stored at a shelf location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySub {
    pub id: EntityId,
    pub id_clothing_category: EntityId,
    pub clothes_cat_name_sub: String,
    #[serde(default)]
    pub clothes_cat_location_sub: String,
    #[serde(default)]
    pub clothes_picture_1: String,
    #[serde(default)]
    pub clothes_picture_2: String,
    #[serde(default)]
    pub clothes_picture_3: String,
    #[serde(default)]
    pub clothes_picture_4: String,
    #[serde(default)]
    pub clothes_picture_5: String,
    #[serde(default)]
    pub clothes_cat_status_sub: i32,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl CategorySub {
    pub fn pictures(&self) -> [&str; 5] {
        [
            &self.clothes_picture_1,
            &self.clothes_picture_2,
            &self.clothes_picture_3,
            &self.clothes_picture_4,
            &self.clothes_picture_5,
        ]
    }
}

impl ReferenceRecord for CategorySub {
    fn id(&self) -> EntityId {
        self.id
    }

    fn option_label(&self) -> String {
        format!(
            "{} - {}",
            self.clothes_cat_name_sub, self.clothes_cat_location_sub
        )
    }
}

impl ChildRecord for CategorySub {
    fn parent_id(&self) -> EntityId {
        self.id_clothing_category
    }
}

/// Body of `POST /api/categories-sub` and `PUT /api/categories-sub/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySubDto {
    pub id_clothing_category: EntityId,
    pub clothes_cat_name_sub: String,
    pub clothes_cat_location_sub: String,
    pub clothes_picture_1: String,
    pub clothes_picture_2: String,
    pub clothes_picture_3: String,
    pub clothes_picture_4: String,
    pub clothes_picture_5: String,
}
