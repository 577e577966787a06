use contracts::api;
use contracts::domain::a001_product::aggregate::{Product, ProductDto};

use crate::shared::api_utils::{self, ApiError};

/// All products, admin view
pub async fn fetch_all() -> Result<Vec<Product>, ApiError> {
    api_utils::get_json(api::ADMIN_PRODUCTS).await
}

pub async fn fetch_by_id(id: &str) -> Result<Product, ApiError> {
    api_utils::get_json(&api::admin_product(id)).await
}

pub async fn create(dto: &ProductDto) -> Result<Product, ApiError> {
    api_utils::post_json(api::ADMIN_PRODUCTS, dto).await
}

pub async fn update(id: &str, dto: &ProductDto) -> Result<Product, ApiError> {
    api_utils::put_json(&api::admin_product(id), dto).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    api_utils::delete(&api::admin_product(id)).await
}
