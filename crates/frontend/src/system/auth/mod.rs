pub mod gate;
pub mod guard;

pub use gate::{AdminSession, AuthError, AuthGate, StaticCredentialGate};
