//! HTTP paths of the catalog API.
//!
//! Both sides build their URLs from these so the router and the client cannot drift.

/// Admin collection: list (GET) and create (POST)
pub const ADMIN_PRODUCTS: &str = "/admin/productos/";

/// Products with stock, as seen by the client role
pub const CLIENT_PRODUCTS: &str = "/cliente/productos/";

/// Purchase submission
pub const CLIENT_PURCHASE: &str = "/cliente/comprar/";

/// Admin item path: GET, PUT and DELETE by id
pub fn admin_product(id: &str) -> String {
    format!("/admin/productos/{}", id)
}
