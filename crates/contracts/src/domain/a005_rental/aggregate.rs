use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{ChildRecord, EntityId, EntityMetadata, ReferenceRecord};
use crate::enums::RentalStatus;
use crate::shared::selection::children_of;
use crate::shared::summary::remaining;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rental {
    pub id: EntityId,
    pub id_clothing_category_sub: EntityId,
    pub id_clothing_size: EntityId,
    pub id_clothing_customer: EntityId,
    pub clothes_qty_rent: i64,
    #[serde(default)]
    pub clothes_qty_return: i64,
    pub clothes_rent_date_begin: DateTime<Utc>,
    pub clothes_rent_date_end: DateTime<Utc>,
    #[serde(default)]
    pub clothes_rent_date_actual_pickup: Option<DateTime<Utc>>,
    #[serde(default)]
    pub clothes_rent_date_actual_return: Option<DateTime<Utc>>,
    pub clothes_rent_status: RentalStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Rental {
    /// Items still out with the customer
    pub fn remaining(&self) -> i64 {
        remaining(self.clothes_qty_rent, self.clothes_qty_return)
    }

    /// Active and with something left to bring back
    pub fn is_returnable(&self) -> bool {
        self.clothes_rent_status == RentalStatus::Active && self.remaining() > 0
    }
}

impl ReferenceRecord for Rental {
    fn id(&self) -> EntityId {
        self.id
    }

    fn option_label(&self) -> String {
        format!("Rental #{} - Qty: {} remaining", self.id, self.remaining())
    }
}

/// Rentals hang off the customer in the return form
impl ChildRecord for Rental {
    fn parent_id(&self) -> EntityId {
        self.id_clothing_customer
    }
}

/// Rentals of the selected customer that can still be returned
pub fn returnable_for_customer(all: &[Rental], customer_value: &str) -> Vec<Rental> {
    let mut rentals = children_of(all, customer_value);
    rentals.retain(Rental::is_returnable);
    rentals
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    pub fn rental(id: EntityId, customer: EntityId, rented: i64, returned: i64, status: i32) -> Rental {
        Rental {
            id,
            id_clothing_category_sub: 9,
            id_clothing_size: 21,
            id_clothing_customer: customer,
            clothes_qty_rent: rented,
            clothes_qty_return: returned,
            clothes_rent_date_begin: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            clothes_rent_date_end: Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap(),
            clothes_rent_date_actual_pickup: None,
            clothes_rent_date_actual_return: None,
            clothes_rent_status: RentalStatus::from(status),
            metadata: EntityMetadata::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::rental;
    use super::*;

    #[test]
    fn test_returnable_filter() {
        let all = vec![
            rental(1, 7, 3, 0, 1),
            rental(2, 7, 2, 2, 1),
            rental(3, 7, 2, 0, 2),
            rental(4, 8, 1, 0, 1),
            rental(5, 7, 4, 1, 1),
        ];
        let ids: Vec<_> = returnable_for_customer(&all, "7").iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 5]);
        assert!(returnable_for_customer(&all, "").is_empty());
    }

    #[test]
    fn test_option_label() {
        assert_eq!(
            rental(5, 7, 4, 1, 1).option_label(),
            "Rental #5 - Qty: 3 remaining"
        );
    }

    #[test]
    fn test_deserialize_api_record() {
        let json = r#"{
            "id": 12,
            "id_clothing_category_sub": 3,
            "id_clothing_size": 8,
            "id_clothing_customer": 2,
            "clothes_qty_rent": 2,
            "clothes_qty_return": 0,
            "clothes_rent_date_begin": "2024-01-01T09:00:00Z",
            "clothes_rent_date_end": "2024-01-03T09:00:00Z",
            "clothes_rent_date_actual_pickup": "0001-01-01T00:00:00Z",
            "clothes_rent_date_actual_return": "0001-01-01T00:00:00Z",
            "clothes_rent_status": 1,
            "created_at": "2024-01-01T09:00:00Z",
            "updated_at": "2024-01-01T09:00:00Z"
        }"#;
        let rental: Rental = serde_json::from_str(json).unwrap();
        assert_eq!(rental.clothes_rent_status, RentalStatus::Active);
        assert!(rental.is_returnable());
    }
}
