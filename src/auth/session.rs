//! Per-client session slot and the service that reads and writes the
//! signed-in record in it.
//!
//! The slot is a plain string key-value store owned by the client's session
//! (cookie-keyed, see `tower_sessions`). Nothing is cached: every read goes
//! back to the slot and re-parses the stored JSON.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tower_sessions::Session;
use tracing::debug;

use super::models::SessionRecord;
use crate::common::ApiError;

/// Slot key holding the `{email, role}` record
pub const AUTH_KEY: &str = "auth";

/// Slot key holding the editable profile blob
pub const APP_USER_KEY: &str = "appUser";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session backend error: {0}")]
    Backend(#[from] tower_sessions::session::Error),

    #[error("failed to serialize session value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Raw string storage keyed by name
#[async_trait]
pub trait SessionSlot: Send + Sync {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, SessionError>;
    async fn set_raw(&self, key: &str, value: String) -> Result<(), SessionError>;
    async fn remove_raw(&self, key: &str) -> Result<(), SessionError>;
}

#[async_trait]
impl SessionSlot for Session {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, SessionError> {
        // Anything that is not a string is handed back as its JSON text so the
        // caller's parse decides whether it is usable.
        Ok(self.get_value(key).await?.map(|value| match value {
            Value::String(raw) => raw,
            other => other.to_string(),
        }))
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<(), SessionError> {
        self.insert(key, value).await?;
        Ok(())
    }

    async fn remove_raw(&self, key: &str) -> Result<(), SessionError> {
        self.remove_value(key).await?;
        Ok(())
    }
}

/// In-memory slot standing in for a client during tests
#[cfg(test)]
#[derive(Default)]
pub struct MemorySlot {
    values: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
#[async_trait]
impl SessionSlot for MemorySlot {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<(), SessionError> {
        self.values.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_raw(&self, key: &str) -> Result<(), SessionError> {
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Single owner of session parsing for gates, handlers and navigation
pub struct SessionService<S> {
    slot: S,
}

impl<S: SessionSlot> SessionService<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Current record, or `None` when the slot is empty or holds malformed data
    pub async fn read_session(&self) -> Result<Option<SessionRecord>, SessionError> {
        self.read_json(AUTH_KEY).await
    }

    /// Overwrites whatever record was stored before
    pub async fn write_session(&self, record: &SessionRecord) -> Result<(), SessionError> {
        self.write_json(AUTH_KEY, record).await
    }

    pub async fn clear_session(&self) -> Result<(), SessionError> {
        self.slot.remove_raw(AUTH_KEY).await
    }

    /// Parses the JSON stored under `key`. Parse failures read as absent.
    pub async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SessionError> {
        let Some(raw) = self.slot.get_raw(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                debug!(key = key, error = %e, "Ignoring malformed session slot value");
                Ok(None)
            }
        }
    }

    pub async fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SessionError> {
        let raw = serde_json::to_string(value)?;
        self.slot.set_raw(key, raw).await
    }

    #[cfg(test)]
    pub fn slot(&self) -> &S {
        &self.slot
    }
}

/// Session service bound to the requesting client's slot
pub type CurrentSession = SessionService<Session>;

#[async_trait]
impl<St> FromRequestParts<St> for SessionService<Session>
where
    St: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &St) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| ApiError::InternalServer(msg.to_string()))?;

        Ok(SessionService::new(session))
    }
}
