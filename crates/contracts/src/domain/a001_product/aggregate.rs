use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog product as returned by every read endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque identifier assigned by the backend
    pub id: String,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    #[serde(rename = "precio")]
    pub price: f64,

    #[serde(rename = "cantidad_en_stock")]
    pub stock: i64,
}

// ============================================================================
// DTO
// ============================================================================

/// Write body of create and update. Any `id` sent by a caller is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    #[serde(rename = "precio")]
    pub price: f64,

    #[serde(rename = "cantidad_en_stock")]
    pub stock: i64,
}

impl ProductDto {
    /// Field rules enforced by the backend: price strictly positive, stock not negative.
    pub fn validate(&self) -> Result<(), String> {
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err("precio debe ser mayor que 0".into());
        }
        if self.stock < 0 {
            return Err("cantidad_en_stock no puede ser negativa".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dto_wire_names() {
        let dto = ProductDto {
            name: "Widget".into(),
            description: String::new(),
            price: 9.99,
            stock: 5,
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "nombre": "Widget",
                "descripcion": "",
                "precio": 9.99,
                "cantidad_en_stock": 5
            })
        );
    }

    #[test]
    fn test_dto_ignores_unknown_id() {
        let dto: ProductDto = serde_json::from_str(
            r#"{"id":"x","nombre":"A","descripcion":"B","precio":1.5,"cantidad_en_stock":2}"#,
        )
        .unwrap();
        assert_eq!(dto.name, "A");
        assert_eq!(dto.stock, 2);
    }

    #[test]
    fn test_validate() {
        let mut dto = ProductDto {
            name: "A".into(),
            description: String::new(),
            price: 1.0,
            stock: 0,
        };
        assert!(dto.validate().is_ok());

        dto.price = 0.0;
        assert!(dto.validate().is_err());

        dto.price = f64::NAN;
        assert!(dto.validate().is_err());

        dto.price = 2.0;
        dto.stock = -1;
        assert!(dto.validate().is_err());
    }
}
