//! Reference data and submissions of the rental pages.

use contracts::domain::a001_category::Category;
use contracts::domain::a002_category_sub::CategorySub;
use contracts::domain::a003_size::{Size, SizeQuery};
use contracts::domain::a004_customer::Customer;
use contracts::domain::a005_rental::{Rental, RentalRequest, ReturnRequest};
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;

use crate::shared::api_client::{get_collection, send_json, Method};

pub async fn fetch_customers() -> Result<Vec<Customer>, ApiError> {
    get_collection("/api/customers").await
}

pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    get_collection("/api/categories").await
}

/// Every subcategory; callers narrow them to one category
pub async fn fetch_subcategories() -> Result<Vec<CategorySub>, ApiError> {
    get_collection("/api/categories-sub").await
}

pub async fn fetch_sizes(subcategory_id: EntityId) -> Result<Vec<Size>, ApiError> {
    let query = serde_qs::to_string(&SizeQuery { subcategory_id })
        .map_err(|e| ApiError::transport(format!("Failed to encode query: {}", e)))?;
    get_collection(&format!("/api/sizes?{}", query)).await
}

pub async fn fetch_rentals() -> Result<Vec<Rental>, ApiError> {
    get_collection("/api/rentals").await
}

pub async fn create_rental(request: &RentalRequest) -> Result<(), ApiError> {
    send_json(Method::Post, "/api/rentals", request).await
}

pub async fn process_return(request: &ReturnRequest) -> Result<(), ApiError> {
    send_json(Method::Post, "/api/rentals/return", request).await
}
