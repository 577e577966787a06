//! Product Details UI Module
//!
//! - view_model.rs: commands (load, save, new) over the shared form state
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
