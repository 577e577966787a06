//! Admin session gate.
//!
//! The shipped gate compares against a fixed credential pair held in the client.
//! It decides which panel is shown and protects nothing on the server.

/// Username accepted by [`StaticCredentialGate::default`]
pub const ADMIN_USERNAME: &str = "admin";
/// Password accepted by [`StaticCredentialGate::default`]
pub const ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Usuario o contraseña incorrectos")]
    InvalidCredentials,
}

/// Proof of a successful admin login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub username: String,
}

/// Capability that turns credentials into an admin session
pub trait AuthGate {
    fn login(&self, username: &str, password: &str) -> Result<AdminSession, AuthError>;
}

#[derive(Debug, Clone)]
pub struct StaticCredentialGate {
    username: String,
    password: String,
}

impl StaticCredentialGate {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentialGate {
    fn default() -> Self {
        Self::new(ADMIN_USERNAME, ADMIN_PASSWORD)
    }
}

impl AuthGate for StaticCredentialGate {
    fn login(&self, username: &str, password: &str) -> Result<AdminSession, AuthError> {
        if username == self.username && password == self.password {
            Ok(AdminSession {
                username: username.to_string(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
