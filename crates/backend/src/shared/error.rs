use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::error::ErrorDetail;

/// Failure of a catalog operation, rendered as `{"detail": ...}`
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Producto no encontrado")]
    NotFound,

    #[error("Stock insuficiente")]
    InsufficientStock,

    #[error("{0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::InsufficientStock => StatusCode::BAD_REQUEST,
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to the caller; storage errors stay in the log
    pub fn detail(&self) -> String {
        match self {
            ServiceError::Database(_) => "Error interno del servidor".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if let ServiceError::Database(e) = &self {
            tracing::error!("Database error: {}", e);
        }
        (self.status(), Json(ErrorDetail::new(self.detail()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ServiceError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ServiceError::InsufficientStock.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::Validation("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_database_detail_is_generic() {
        let err = ServiceError::Database(sea_orm::DbErr::Custom("disk I/O".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), "Error interno del servidor");
        assert_eq!(ServiceError::InsufficientStock.detail(), "Stock insuficiente");
    }
}
