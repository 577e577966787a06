use contracts::api;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_purchase::request::PurchaseRequest;

use crate::shared::api_utils::{self, ApiError};

/// Products with stock, client view
pub async fn fetch_available() -> Result<Vec<Product>, ApiError> {
    api_utils::get_json(api::CLIENT_PRODUCTS).await
}

/// Submit a purchase; the backend answers with the product after the stock change
pub async fn purchase(request: &PurchaseRequest) -> Result<Product, ApiError> {
    api_utils::post_json(api::CLIENT_PURCHASE, request).await
}
