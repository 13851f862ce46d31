use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

/// Body of `POST /api/rentals`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRequest {
    pub id_clothing_category_sub: EntityId,
    pub id_clothing_size: EntityId,
    pub id_clothing_customer: EntityId,
    pub clothes_qty_rent: i64,
    pub rent_date_begin: DateTime<Utc>,
    pub rent_date_end: DateTime<Utc>,
}

/// Body of `POST /api/rentals/return`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnRequest {
    pub rental_id: EntityId,
    pub clothes_qty_return: i64,
    pub actual_return_date: DateTime<Utc>,
}
