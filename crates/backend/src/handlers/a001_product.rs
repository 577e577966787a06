use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::a001_product::aggregate::{Product, ProductDto};
use contracts::shared::error::ErrorDetail;

use crate::domain::a001_product::service;
use crate::shared::error::ServiceError;
use crate::shared::extract::ApiJson;
use crate::state::AppState;

/// GET /admin/productos/
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ServiceError> {
    service::list_all(&state.db).await.map(Json)
}

/// GET /admin/productos/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ServiceError> {
    service::get_by_id(&state.db, &id).await.map(Json)
}

/// POST /admin/productos/
pub async fn create(
    State(state): State<AppState>,
    ApiJson(dto): ApiJson<ProductDto>,
) -> Result<Json<Product>, ServiceError> {
    service::create(&state.db, dto).await.map(Json)
}

/// PUT /admin/productos/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(dto): ApiJson<ProductDto>,
) -> Result<Json<Product>, ServiceError> {
    service::update(&state.db, &id, dto).await.map(Json)
}

/// DELETE /admin/productos/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ErrorDetail>, ServiceError> {
    service::delete(&state.db, &id).await?;
    Ok(Json(ErrorDetail::new("Producto eliminado exitosamente")))
}

/// GET /cliente/productos/
pub async fn list_available(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ServiceError> {
    service::list_available(&state.db).await.map(Json)
}
