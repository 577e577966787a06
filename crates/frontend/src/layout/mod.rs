pub mod global_context;
pub mod main_menu;
pub mod view_controller;

pub use global_context::{use_app_context, AppGlobalContext};
