use axum::{
    routing::{get, post},
    Router,
};
use contracts::api;

use crate::handlers;
use crate::state::AppState;

/// All API routes of the catalog
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // ADMIN
        // ========================================
        .route(
            api::ADMIN_PRODUCTS,
            get(handlers::a001_product::list_all).post(handlers::a001_product::create),
        )
        .route(
            "/admin/productos/:id",
            get(handlers::a001_product::get_by_id)
                .put(handlers::a001_product::update)
                .delete(handlers::a001_product::delete),
        )
        // ========================================
        // CLIENT
        // ========================================
        .route(
            api::CLIENT_PRODUCTS,
            get(handlers::a001_product::list_available),
        )
        .route(
            api::CLIENT_PURCHASE,
            post(handlers::a002_purchase::purchase),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use contracts::domain::a001_product::aggregate::Product;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn app() -> Router {
        configure_routes(AppState::new(test_connection().await))
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        call_raw(app, method, uri, body.map(|b| b.to_string())).await
    }

    async fn call_raw(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(b) => builder
                .header("content-type", "application/json")
                .body(Body::from(b))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn create_widget(app: &Router, stock: i64) -> Product {
        let (status, body) = call(
            app,
            Method::POST,
            "/admin/productos/",
            Some(json!({
                "nombre": "Widget",
                "descripcion": "",
                "precio": 9.99,
                "cantidad_en_stock": stock
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_value(body).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app().await;
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_admin_crud_cycle() {
        let app = app().await;
        let created = create_widget(&app, 5).await;
        assert_eq!(created.name, "Widget");

        let (status, body) = call(&app, Method::GET, "/admin/productos/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(|a| a.len()), Some(1));
        assert_eq!(body[0]["cantidad_en_stock"], json!(5));

        let item = format!("/admin/productos/{}", created.id);
        let (status, body) = call(
            &app,
            Method::PUT,
            &item,
            Some(json!({
                "nombre": "Gadget",
                "descripcion": "nuevo",
                "precio": 12.5,
                "cantidad_en_stock": 3
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["nombre"], json!("Gadget"));
        assert_eq!(body["id"], json!(created.id));

        let (status, body) = call(&app, Method::DELETE, &item, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["detail"], json!("Producto eliminado exitosamente"));

        let (status, body) = call(&app, Method::GET, &item, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], json!("Producto no encontrado"));
    }

    #[tokio::test]
    async fn test_invalid_price_is_unprocessable() {
        let app = app().await;
        let (status, body) = call(
            &app,
            Method::POST,
            "/admin/productos/",
            Some(json!({
                "nombre": "Free",
                "descripcion": "",
                "precio": 0,
                "cantidad_en_stock": 1
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_purchase_flow() {
        let app = app().await;
        let product = create_widget(&app, 5).await;

        let (status, body) = call(
            &app,
            Method::POST,
            "/cliente/comprar/",
            Some(json!({"producto_id": product.id, "cantidad": 3})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cantidad_en_stock"], json!(2));

        let (status, body) = call(
            &app,
            Method::POST,
            "/cliente/comprar/",
            Some(json!({"producto_id": product.id, "cantidad": 3})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"detail": "Stock insuficiente"}));
    }

    #[tokio::test]
    async fn test_client_list_hides_sold_out() {
        let app = app().await;
        let sold_out = create_widget(&app, 0).await;
        let available = create_widget(&app, 1).await;

        let (status, body) = call(&app, Method::GET, "/cliente/productos/", None).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|p| p["id"].as_str())
            .collect();
        assert_eq!(ids, vec![available.id.as_str()]);
        assert!(!ids.contains(&sold_out.id.as_str()));
    }

    #[tokio::test]
    async fn test_malformed_bodies_get_detail() {
        let app = app().await;
        let bodies = [
            r#"{"producto_id":"x","cantidad":1.5}"#,
            r#"{"producto_id":"x"}"#,
            "not json",
        ];
        for body in bodies {
            let (status, value) =
                call_raw(&app, Method::POST, "/cliente/comprar/", Some(body.to_string())).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body {}", body);
            assert!(value["detail"].is_string(), "body {} -> {}", body, value);
        }

        let (status, value) = call_raw(
            &app,
            Method::POST,
            "/admin/productos/",
            Some(r#"{"nombre":"A"}"#.to_string()),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(value["detail"].is_string());
        assert_eq!(value.as_object().map(|o| o.len()), Some(1));
    }
}
