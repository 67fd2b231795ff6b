//! Credential verification backends

use async_trait::async_trait;

use super::models::{Role, SessionRecord};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// Checks an email/password pair and returns who it belongs to
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, email: &str, password: &str) -> Result<SessionRecord, AuthError>;
}

#[derive(Debug, Clone)]
pub struct FixtureAccount {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl FixtureAccount {
    pub fn new(email: &str, password: &str, role: Role) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            role,
        }
    }
}

/// Hard-coded demo accounts. Not a security boundary.
#[derive(Debug, Clone)]
pub struct FixtureVerifier {
    accounts: Vec<FixtureAccount>,
}

impl FixtureVerifier {
    pub fn new(accounts: Vec<FixtureAccount>) -> Self {
        Self { accounts }
    }

    /// The three demo accounts the portal ships with
    pub fn demo() -> Self {
        Self::new(vec![
            FixtureAccount::new("talent@example.com", "1234", Role::Talent),
            FixtureAccount::new("brand@example.com", "1234", Role::Brand),
            FixtureAccount::new("admin@example.com", "1234", Role::Admin),
        ])
    }
}

#[async_trait]
impl CredentialVerifier for FixtureVerifier {
    async fn verify(&self, email: &str, password: &str) -> Result<SessionRecord, AuthError> {
        // Email compares case-insensitively, password exactly
        self.accounts
            .iter()
            .find(|a| a.email.to_lowercase() == email.to_lowercase() && a.password == password)
            .map(|a| SessionRecord {
                email: a.email.clone(),
                role: a.role,
            })
            .ok_or(AuthError::InvalidCredentials)
    }
}
