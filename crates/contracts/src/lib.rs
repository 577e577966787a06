//! Wire types shared by the catalog backend and the browser frontend.

pub mod api;
pub mod domain;
pub mod shared;
