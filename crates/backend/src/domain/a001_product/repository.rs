use chrono::Utc;
use contracts::domain::a001_product::aggregate::{Product, ProductDto};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

/// Upper bound of every list query
pub const LIST_LIMIT: u64 = 100;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            stock: m.stock,
        }
    }
}

pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Product>, DbErr> {
    let items = Entity::find()
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .limit(LIST_LIMIT)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Products with at least one unit in stock
pub async fn list_available(db: &DatabaseConnection) -> Result<Vec<Product>, DbErr> {
    let items = Entity::find()
        .filter(Column::Stock.gt(0))
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .limit(LIST_LIMIT)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: &str) -> Result<Option<Product>, DbErr> {
    let result = Entity::find_by_id(id.to_string()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(db: &DatabaseConnection, id: &str, dto: &ProductDto) -> Result<Product, DbErr> {
    let now = Utc::now();
    let active = ActiveModel {
        id: Set(id.to_string()),
        name: Set(dto.name.clone()),
        description: Set(dto.description.clone()),
        price: Set(dto.price),
        stock: Set(dto.stock),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    let model = active.insert(db).await?;
    Ok(model.into())
}

/// Overwrite the editable fields; `None` when no row has this id
pub async fn update(
    db: &DatabaseConnection,
    id: &str,
    dto: &ProductDto,
) -> Result<Option<Product>, DbErr> {
    let result = Entity::update_many()
        .col_expr(Column::Name, Expr::value(dto.name.clone()))
        .col_expr(Column::Description, Expr::value(dto.description.clone()))
        .col_expr(Column::Price, Expr::value(dto.price))
        .col_expr(Column::Stock, Expr::value(dto.stock))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id))
        .exec(db)
        .await?;
    if result.rows_affected == 0 {
        return Ok(None);
    }
    get_by_id(db, id).await
}

pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id(id.to_string()).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Take `quantity` units out of stock in one statement.
/// Returns false when the row is missing or holds fewer units.
pub async fn decrement_stock(
    db: &DatabaseConnection,
    id: &str,
    quantity: i64,
) -> Result<bool, DbErr> {
    let result = Entity::update_many()
        .col_expr(Column::Stock, Expr::col(Column::Stock).sub(quantity))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id))
        .filter(Column::Stock.gte(quantity))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}
