use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

/// Store key under which the external auth flow persists the opaque token.
pub const TOKEN_KEY: &str = "token";
/// Store key under which the external auth flow persists the role classification.
pub const ROLE_KEY: &str = "userRole";

/// Role classification asserted by the client and never verified here.
/// It only decides which controls are offered; the server stays the sole
/// authority on what is permitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    /// A patient browsing without a login.
    Patient,
    /// A patient with a stored token.
    LoggedPatient,
}

impl Role {
    /// Parses the persisted classification. The set is closed: anything
    /// outside the three known values is rejected rather than defaulted.
    pub fn from_store_value(value: &str) -> Result<Self, SessionError> {
        match value {
            "admin" => Ok(Role::Admin),
            "patient" => Ok(Role::Patient),
            "loggedPatient" => Ok(Role::LoggedPatient),
            other => Err(SessionError::UnrecognizedRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no role classification in session store")]
    RoleMissing,

    #[error("unrecognized role classification: {0}")]
    UnrecognizedRole(String),
}

/// Process-wide key-value state persisted by the external auth flow.
/// This layer only ever reads it.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// The stored token, with a blank value treated as absent.
    fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY).filter(|token| !token.trim().is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub token: Option<String>,
    pub role: Role,
}

impl Session {
    /// Reads and validates the persisted session once, at the boundary.
    pub fn read(store: &dyn SessionStore) -> Result<Self, SessionError> {
        let raw_role = store.get(ROLE_KEY).ok_or(SessionError::RoleMissing)?;
        Ok(Session {
            token: store.token(),
            role: Role::from_store_value(&raw_role)?,
        })
    }
}

/// In-memory store standing in for the host environment's persisted state.
/// The auth flow (outside this layer) seeds and clears it.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn clear(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }
}
