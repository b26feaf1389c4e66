//! Conversation sessions.
//!
//! A session is keyed by `(app name, user id, session id)` and holds a JSON
//! state map plus the ordered event history the runner rebuilds model context
//! from.

mod memory;

pub use memory::InMemorySessionService;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FinderError;
use crate::runner::Event;

/// State key holding the public base URL of the agent.
pub const BASE_URL_KEY: &str = "base_url";

/// Session state: string keys to JSON values.
pub type SessionState = serde_json::Map<String, serde_json::Value>;

/// Composite lookup key for a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub app_name: String,
    pub user_id: String,
    pub session_id: String,
}

impl SessionKey {
    pub fn new(
        app_name: impl Into<String>,
        user_id: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            user_id: user_id.into(),
            session_id: session_id.into(),
        }
    }
}

/// A conversation session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub id: String,
    pub app_name: String,
    pub user_id: String,
    #[serde(default)]
    pub state: SessionState,
    #[serde(default)]
    pub events: Vec<Event>,
    pub last_update_time: DateTime<Utc>,
}

impl Session {
    pub fn new(key: SessionKey, state: SessionState) -> Self {
        Self {
            id: key.session_id,
            app_name: key.app_name,
            user_id: key.user_id,
            state,
            events: Vec::new(),
            last_update_time: Utc::now(),
        }
    }

    pub fn key(&self) -> SessionKey {
        SessionKey::new(&self.app_name, &self.user_id, &self.id)
    }
}

/// Storage for sessions.
///
/// Reads return snapshots; mutations go through the service so concurrent
/// callers never hold a session across an await.
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Create a session. Generates an id when `session_id` is `None`.
    async fn create_session(
        &self,
        app_name: &str,
        user_id: &str,
        state: SessionState,
        session_id: Option<&str>,
    ) -> Result<Session, FinderError>;

    /// Fetch a session snapshot, or `None` if it does not exist.
    async fn get_session(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
    ) -> Result<Option<Session>, FinderError>;

    /// List a user's sessions (without event history).
    async fn list_sessions(&self, app_name: &str, user_id: &str)
        -> Result<Vec<Session>, FinderError>;

    /// Delete a session. Deleting a missing session is not an error.
    async fn delete_session(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
    ) -> Result<(), FinderError>;

    /// Merge `delta` into the session state, leaving other keys untouched.
    async fn update_state(
        &self,
        key: &SessionKey,
        delta: SessionState,
    ) -> Result<(), FinderError>;

    /// Append an event and apply its state delta.
    async fn append_event(&self, key: &SessionKey, event: Event) -> Result<(), FinderError>;
}
