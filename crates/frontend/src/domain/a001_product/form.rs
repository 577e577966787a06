//! Admin product form: raw field text plus the edit-mode state.

use contracts::domain::a001_product::aggregate::{Product, ProductDto};

use crate::shared::parse::{parse_float, parse_int};

pub const TITLE_CREATE: &str = "Agregar Producto";
pub const TITLE_EDIT: &str = "Editar Producto";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Precio inválido: {0:?}")]
    InvalidPrice(String),

    #[error("Cantidad en stock inválida: {0:?}")]
    InvalidStock(String),
}

/// Field values exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
        }
    }

    /// Coerce price to a float and stock to an integer; no other checks
    pub fn to_dto(&self) -> Result<ProductDto, FormError> {
        let price =
            parse_float(&self.price).ok_or_else(|| FormError::InvalidPrice(self.price.clone()))?;
        let stock =
            parse_int(&self.stock).ok_or_else(|| FormError::InvalidStock(self.stock.clone()))?;
        Ok(ProductDto {
            name: self.name.clone(),
            description: self.description.clone(),
            price,
            stock,
        })
    }
}

/// Where a submit goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Create,
    Update(String),
}

/// Form plus edit state. `editing_id` is set only while the form holds a loaded product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFormState {
    pub form: ProductForm,
    editing_id: Option<String>,
}

impl ProductFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            TITLE_EDIT
        } else {
            TITLE_CREATE
        }
    }

    /// Enter edit mode with the fields of a fetched product
    pub fn load(&mut self, product: &Product) {
        self.form = ProductForm::from_product(product);
        self.editing_id = Some(product.id.clone());
    }

    /// Empty form in create mode
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn save_target(&self) -> SaveTarget {
        match &self.editing_id {
            Some(id) => SaveTarget::Update(id.clone()),
            None => SaveTarget::Create,
        }
    }

    /// Request to send for the current form, or the coercion failure
    pub fn submission(&self) -> Result<(SaveTarget, ProductDto), FormError> {
        Ok((self.save_target(), self.form.to_dto()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: "p-7".into(),
            name: "Lamp".into(),
            description: "Desk lamp".into(),
            price: 10.0,
            stock: 4,
        }
    }

    #[test]
    fn test_create_submission_body() {
        let mut state = ProductFormState::new();
        state.form.name = "Widget".into();
        state.form.price = "9.99".into();
        state.form.stock = "5".into();

        let (target, dto) = state.submission().unwrap();
        assert_eq!(target, SaveTarget::Create);
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({
                "nombre": "Widget",
                "descripcion": "",
                "precio": 9.99,
                "cantidad_en_stock": 5
            })
        );
    }

    #[test]
    fn test_load_enters_edit_mode() {
        let mut state = ProductFormState::new();
        assert_eq!(state.title(), TITLE_CREATE);

        state.load(&product());
        assert!(state.is_editing());
        assert_eq!(state.editing_id(), Some("p-7"));
        assert_eq!(state.title(), TITLE_EDIT);
        assert_eq!(state.form.price, "10");
        assert_eq!(state.form.stock, "4");
        assert_eq!(state.save_target(), SaveTarget::Update("p-7".into()));
    }

    #[test]
    fn test_reset_clears_edit_state() {
        let mut state = ProductFormState::new();
        state.load(&product());
        state.reset();

        assert!(!state.is_editing());
        assert_eq!(state.editing_id(), None);
        assert_eq!(state.form, ProductForm::default());
        assert_eq!(state.save_target(), SaveTarget::Create);
    }

    #[test]
    fn test_coercion() {
        let form = ProductForm {
            name: "A".into(),
            description: String::new(),
            price: " 3.5 ".into(),
            stock: "7.9".into(),
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.price, 3.5);
        assert_eq!(dto.stock, 7);
    }

    #[test]
    fn test_uncoercible_fields() {
        let mut form = ProductForm {
            name: "A".into(),
            description: String::new(),
            price: String::new(),
            stock: "1".into(),
        };
        assert_eq!(form.to_dto(), Err(FormError::InvalidPrice(String::new())));

        form.price = "2".into();
        form.stock = "many".into();
        assert_eq!(form.to_dto(), Err(FormError::InvalidStock("many".into())));
    }
}
