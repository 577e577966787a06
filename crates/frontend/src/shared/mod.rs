pub mod api_utils;
pub mod format;
pub mod modal;
pub mod notice;
pub mod parse;
