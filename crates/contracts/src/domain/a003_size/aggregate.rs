use serde::{Deserialize, Serialize};

use crate::domain::common::{ChildRecord, EntityId, EntityMetadata, ReferenceRecord};

/// Size available for one subcategory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub id: EntityId,
    pub id_clothing_category_sub: EntityId,
    pub clothes_size_name: String,
    #[serde(default)]
    pub clothes_size_notes: String,
    #[serde(default)]
    pub clothes_size_status: i32,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ReferenceRecord for Size {
    fn id(&self) -> EntityId {
        self.id
    }

    fn option_label(&self) -> String {
        self.clothes_size_name.clone()
    }
}

impl ChildRecord for Size {
    fn parent_id(&self) -> EntityId {
        self.id_clothing_category_sub
    }
}

/// Query of `GET /api/sizes?subcategory_id={id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeQuery {
    pub subcategory_id: EntityId,
}
