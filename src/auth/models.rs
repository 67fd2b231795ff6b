//! Authentication data models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role. Every account has exactly one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Talent,
    Brand,
    Admin,
}

impl Role {
    #[cfg(test)]
    pub const ALL: [Role; 3] = [Role::Talent, Role::Brand, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Talent => "talent",
            Role::Brand => "brand",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is signed in, and as what. Stored as JSON under the `auth` key of the
/// client's session slot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub email: String,
    pub role: Role,
}

/// Login form body
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `?from=` carried from a gate redirect back to the login form
#[derive(Deserialize, Debug, Default)]
pub struct FromQuery {
    pub from: Option<String>,
}

/// Signup form body
#[derive(Deserialize, Debug)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// What `GET /login` renders
#[derive(Serialize, Debug)]
pub struct LoginView {
    pub page: &'static str,
    pub from: Option<String>,
    pub signup: &'static str,
}

/// Role choice offered on the signup form
#[derive(Serialize, Debug)]
pub struct SignupRole {
    pub value: Role,
    pub label: &'static str,
    pub description: &'static str,
}

/// What `GET /signup` renders
#[derive(Serialize, Debug)]
pub struct SignupView {
    pub page: &'static str,
    pub roles: Vec<SignupRole>,
    pub login: &'static str,
}
