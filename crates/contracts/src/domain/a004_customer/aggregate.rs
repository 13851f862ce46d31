use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, EntityMetadata, ReferenceRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: EntityId,
    pub cust_name: String,
    #[serde(default)]
    pub cust_address: String,
    #[serde(default)]
    pub cust_city: String,
    #[serde(default)]
    pub cust_phone: String,
    #[serde(default)]
    pub cust_email: String,
    #[serde(default)]
    pub cust_notes: String,
    #[serde(default)]
    pub cust_status: i32,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl ReferenceRecord for Customer {
    fn id(&self) -> EntityId {
        self.id
    }

    fn option_label(&self) -> String {
        format!("{} - {}", self.cust_name, self.cust_phone)
    }
}

/// Body of `POST /api/customers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub cust_name: String,
    pub cust_phone: String,
    pub cust_email: String,
    pub cust_address: String,
    pub cust_city: String,
    pub cust_notes: String,
}
