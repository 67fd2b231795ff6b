//! # Auth Module
//!
//! This module handles the signed-in session and route gating:
//! - The per-client session slot and the `{email, role}` record in it
//! - Pluggable credential verification
//! - Route access rules, role home routes and post-login redirects
//! - Gate middleware for protected and public-only routes

pub mod gate;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod session;
pub mod verifier;


pub use models::{Role, SessionRecord};
pub use session::{CurrentSession, SessionError, SessionService};
pub use verifier::{AuthError, CredentialVerifier, FixtureVerifier};
