use crate::domain::a001_product::repository;
use crate::shared::error::ServiceError;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_purchase::request::PurchaseRequest;
use sea_orm::DatabaseConnection;

/// Take the requested units out of stock and return the product as it is afterwards.
///
/// The decrement is conditional on the stock covering the quantity, so a failed
/// purchase leaves the product untouched.
pub async fn purchase(
    db: &DatabaseConnection,
    request: PurchaseRequest,
) -> Result<Product, ServiceError> {
    request.validate().map_err(ServiceError::Validation)?;

    let id = request.product_id.as_str();
    if !repository::decrement_stock(db, id, request.quantity).await? {
        return match repository::get_by_id(db, id).await? {
            Some(_) => {
                tracing::warn!("Insufficient stock for product {}", id);
                Err(ServiceError::InsufficientStock)
            }
            None => {
                tracing::warn!("Product {} not found for purchase", id);
                Err(ServiceError::NotFound)
            }
        };
    }

    let product = repository::get_by_id(db, id)
        .await?
        .ok_or(ServiceError::NotFound)?;
    tracing::info!(
        "Purchase of {} unit(s) completed for product {}",
        request.quantity,
        id
    );
    Ok(product)
}
