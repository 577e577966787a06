use super::repository;
use crate::shared::error::ServiceError;
use contracts::domain::a001_product::aggregate::{Product, ProductDto};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Product>, ServiceError> {
    Ok(repository::list_all(db).await?)
}

/// Products the client role can buy
pub async fn list_available(db: &DatabaseConnection) -> Result<Vec<Product>, ServiceError> {
    Ok(repository::list_available(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: &str) -> Result<Product, ServiceError> {
    repository::get_by_id(db, id)
        .await?
        .ok_or(ServiceError::NotFound)
}

pub async fn create(db: &DatabaseConnection, dto: ProductDto) -> Result<Product, ServiceError> {
    dto.validate().map_err(ServiceError::Validation)?;

    let id = Uuid::new_v4().to_string();
    let product = repository::insert(db, &id, &dto).await?;
    tracing::info!("Product created with id {}", product.id);
    Ok(product)
}

pub async fn update(
    db: &DatabaseConnection,
    id: &str,
    dto: ProductDto,
) -> Result<Product, ServiceError> {
    dto.validate().map_err(ServiceError::Validation)?;

    match repository::update(db, id, &dto).await? {
        Some(product) => {
            tracing::info!("Product {} updated", id);
            Ok(product)
        }
        None => {
            tracing::warn!("Product {} not found for update", id);
            Err(ServiceError::NotFound)
        }
    }
}

pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<(), ServiceError> {
    if repository::delete(db, id).await? {
        tracing::info!("Product {} deleted", id);
        Ok(())
    } else {
        tracing::warn!("Product {} not found for delete", id);
        Err(ServiceError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_connection;

    fn dto(name: &str, price: f64, stock: i64) -> ProductDto {
        ProductDto {
            name: name.into(),
            description: format!("{} description", name),
            price,
            stock,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let db = test_connection().await;
        let created = create(&db, dto("Widget", 9.99, 5)).await.unwrap();
        assert!(!created.id.is_empty());

        let fetched = get_by_id(&db, &created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.price, 9.99);
    }

    #[tokio::test]
    async fn test_list_keeps_insert_order() {
        let db = test_connection().await;
        let a = create(&db, dto("A", 1.0, 1)).await.unwrap();
        let b = create(&db, dto("B", 2.0, 0)).await.unwrap();
        let c = create(&db, dto("C", 3.0, 7)).await.unwrap();

        let ids: Vec<String> = list_all(&db).await.unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![a.id.clone(), b.id, c.id.clone()]);

        let available: Vec<String> = list_available(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(available, vec![a.id, c.id]);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_fields() {
        let db = test_connection().await;
        let err = create(&db, dto("Free", 0.0, 1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = create(&db, dto("Neg", 1.0, -1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        assert!(list_all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update() {
        let db = test_connection().await;
        let created = create(&db, dto("Old", 1.0, 1)).await.unwrap();

        let updated = update(&db, &created.id, dto("New", 4.5, 10)).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "New");
        assert_eq!(updated.stock, 10);

        let err = update(&db, "missing", dto("X", 1.0, 1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let db = test_connection().await;
        let created = create(&db, dto("Gone", 1.0, 1)).await.unwrap();

        delete(&db, &created.id).await.unwrap();
        assert!(matches!(
            get_by_id(&db, &created.id).await.unwrap_err(),
            ServiceError::NotFound
        ));
        assert!(matches!(
            delete(&db, &created.id).await.unwrap_err(),
            ServiceError::NotFound
        ));
    }
}
