use contracts::domain::a002_purchase::request::PurchaseRequest;

use crate::shared::api_utils::ApiError;
use crate::shared::parse::parse_int;

pub const QUANTITY_PROMPT: &str = "¿Cuántas unidades deseas comprar?";
pub const DEFAULT_QUANTITY: &str = "1";
pub const PURCHASED: &str = "Compra realizada exitosamente!";
const PURCHASE_FAILED: &str = "Error al realizar la compra";

/// Quantity from the dialog. `None` (cancelled), empty, non-numeric and
/// non-positive input all yield `None`, which means no request is sent.
pub fn parse_quantity(input: Option<&str>) -> Option<i64> {
    input.and_then(parse_int).filter(|q| *q > 0)
}

/// Request to send for a dialog answer, if any
pub fn purchase_request(product_id: &str, input: Option<&str>) -> Option<PurchaseRequest> {
    parse_quantity(input).map(|quantity| PurchaseRequest::new(product_id, quantity))
}

/// Message for a failed purchase: the server's detail when there is one
pub fn failure_message(error: &ApiError) -> String {
    match error.detail() {
        Some(detail) => format!("{}: {}", PURCHASE_FAILED, detail),
        None => PURCHASE_FAILED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_quantities() {
        assert_eq!(parse_quantity(Some("3")), Some(3));
        assert_eq!(parse_quantity(Some(DEFAULT_QUANTITY)), Some(1));
        assert_eq!(parse_quantity(Some(" 2 units")), Some(2));
    }

    #[test]
    fn test_no_request_for_bad_input() {
        for input in [None, Some(""), Some("abc"), Some("0"), Some("-2"), Some("  ")] {
            assert_eq!(purchase_request("42", input), None, "input {:?}", input);
        }
    }

    #[test]
    fn test_request_body() {
        let request = purchase_request("42", Some("3")).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"producto_id": "42", "cantidad": 3})
        );
    }

    #[test]
    fn test_failure_message_uses_server_detail() {
        let err = ApiError::from_status(400, r#"{"detail":"Stock insuficiente"}"#);
        assert_eq!(
            failure_message(&err),
            "Error al realizar la compra: Stock insuficiente"
        );
    }

    #[test]
    fn test_failure_message_on_network_error() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(failure_message(&err), "Error al realizar la compra");
    }
}
