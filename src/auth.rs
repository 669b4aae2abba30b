//! Operator login and the per-browser "logged in" flag.

use std::collections::HashMap;

use axum::http::{header, HeaderMap, HeaderValue};
use parking_lot::Mutex;
use tracing::debug;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "reportcard_session";

/// Decides whether a username/password pair belongs to the operator.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// A single literal credential pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct SessionState {
    logged_in: bool,
}

/// Server-side session table keyed by the session cookie. Entries live for
/// the life of the process.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the session logged in, reusing `existing` when it is known.
    pub fn login(&self, existing: Option<Uuid>) -> Uuid {
        let mut sessions = self.sessions.lock();
        let id = existing
            .filter(|id| sessions.contains_key(id))
            .unwrap_or_else(Uuid::new_v4);
        sessions.entry(id).or_default().logged_in = true;
        debug!(session = %id, "session logged in");
        id
    }

    pub fn is_logged_in(&self, id: Option<Uuid>) -> bool {
        let Some(id) = id else {
            return false;
        };
        self.sessions
            .lock()
            .get(&id)
            .map(|s| s.logged_in)
            .unwrap_or(false)
    }
}

pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == SESSION_COOKIE)
        .and_then(|(_, v)| Uuid::parse_str(v.trim()).ok())
}

pub fn session_cookie(id: Uuid) -> HeaderValue {
    // Hyphenated uuids are always valid header bytes.
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax"
    ))
    .unwrap_or_else(|_| HeaderValue::from_static(""))
}
