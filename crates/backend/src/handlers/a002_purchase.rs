use axum::extract::State;
use axum::Json;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_purchase::request::PurchaseRequest;

use crate::domain::a002_purchase::service;
use crate::shared::error::ServiceError;
use crate::shared::extract::ApiJson;
use crate::state::AppState;

/// POST /cliente/comprar/
pub async fn purchase(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<PurchaseRequest>,
) -> Result<Json<Product>, ServiceError> {
    service::purchase(&state.db, request).await.map(Json)
}
