use serde::{Deserialize, Serialize};

/// Purchase order submitted by the client role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    #[serde(rename = "producto_id")]
    pub product_id: String,

    #[serde(rename = "cantidad")]
    pub quantity: i64,
}

impl PurchaseRequest {
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.quantity <= 0 {
            return Err("cantidad debe ser mayor que 0".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(PurchaseRequest::new("42", 3)).unwrap();
        assert_eq!(value, serde_json::json!({"producto_id": "42", "cantidad": 3}));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(PurchaseRequest::new("42", 1).validate().is_ok());
        assert!(PurchaseRequest::new("42", 0).validate().is_err());
        assert!(PurchaseRequest::new("42", -4).validate().is_err());
    }
}
