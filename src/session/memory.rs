//! In-memory session service.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use super::{Session, SessionKey, SessionService, SessionState};
use crate::error::FinderError;
use crate::runner::Event;

/// Session service backed by a process-local map. Sessions live until deleted
/// or until the service is dropped.
#[derive(Debug, Default)]
pub struct InMemorySessionService {
    sessions: RwLock<HashMap<SessionKey, Session>>,
}

impl InMemorySessionService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions across all apps and users.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionService for InMemorySessionService {
    async fn create_session(
        &self,
        app_name: &str,
        user_id: &str,
        state: SessionState,
        session_id: Option<&str>,
    ) -> Result<Session, FinderError> {
        let session_id = session_id
            .map(str::to_string)
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let key = SessionKey::new(app_name, user_id, &session_id);

        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&key) {
            return Err(FinderError::SessionExists(session_id));
        }
        let session = Session::new(key.clone(), state);
        sessions.insert(key, session.clone());
        debug!(app_name, user_id, session_id = %session.id, "session created");
        Ok(session)
    }

    async fn get_session(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
    ) -> Result<Option<Session>, FinderError> {
        let key = SessionKey::new(app_name, user_id, session_id);
        Ok(self.sessions.read().await.get(&key).cloned())
    }

    async fn list_sessions(
        &self,
        app_name: &str,
        user_id: &str,
    ) -> Result<Vec<Session>, FinderError> {
        let sessions = self.sessions.read().await;
        let mut listed: Vec<Session> = sessions
            .values()
            .filter(|s| s.app_name == app_name && s.user_id == user_id)
            .map(|s| Session {
                events: Vec::new(),
                ..s.clone()
            })
            .collect();
        listed.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(listed)
    }

    async fn delete_session(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &str,
    ) -> Result<(), FinderError> {
        let key = SessionKey::new(app_name, user_id, session_id);
        self.sessions.write().await.remove(&key);
        Ok(())
    }

    async fn update_state(
        &self,
        key: &SessionKey,
        delta: SessionState,
    ) -> Result<(), FinderError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(key)
            .ok_or_else(|| FinderError::SessionNotFound(key.session_id.clone()))?;
        session.state.extend(delta);
        session.last_update_time = Utc::now();
        Ok(())
    }

    async fn append_event(&self, key: &SessionKey, event: Event) -> Result<(), FinderError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(key)
            .ok_or_else(|| FinderError::SessionNotFound(key.session_id.clone()))?;
        session
            .state
            .extend(event.state_delta.iter().map(|(k, v)| (k.clone(), v.clone())));
        session.last_update_time = event.timestamp;
        session.events.push(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ModelMessage;
    use serde_json::json;

    fn state(pairs: &[(&str, serde_json::Value)]) -> SessionState {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[tokio::test]
    async fn create_then_get_returns_snapshot() {
        let service = InMemorySessionService::new();
        let created = service
            .create_session("app", "user", state(&[("base_url", json!("http://x"))]), Some("s1"))
            .await
            .unwrap();
        assert_eq!(created.id, "s1");

        let fetched = service.get_session("app", "user", "s1").await.unwrap().unwrap();
        assert_eq!(fetched.state["base_url"], "http://x");
        assert!(service.get_session("app", "other", "s1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected() {
        let service = InMemorySessionService::new();
        service
            .create_session("app", "user", SessionState::new(), Some("s1"))
            .await
            .unwrap();
        let err = service
            .create_session("app", "user", SessionState::new(), Some("s1"))
            .await
            .unwrap_err();
        assert!(matches!(err, FinderError::SessionExists(id) if id == "s1"));
    }

    #[tokio::test]
    async fn generated_ids_are_unique() {
        let service = InMemorySessionService::new();
        let a = service.create_session("app", "u", SessionState::new(), None).await.unwrap();
        let b = service.create_session("app", "u", SessionState::new(), None).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(service.len().await, 2);
    }

    #[tokio::test]
    async fn update_state_merges_without_dropping_keys() {
        let service = InMemorySessionService::new();
        let session = service
            .create_session("app", "u", state(&[("theme", json!("dark"))]), Some("s1"))
            .await
            .unwrap();

        service
            .update_state(&session.key(), state(&[("base_url", json!("http://x"))]))
            .await
            .unwrap();

        let fetched = service.get_session("app", "u", "s1").await.unwrap().unwrap();
        assert_eq!(fetched.state["theme"], "dark");
        assert_eq!(fetched.state["base_url"], "http://x");
    }

    #[tokio::test]
    async fn append_event_applies_state_delta() {
        let service = InMemorySessionService::new();
        let session = service
            .create_session("app", "u", SessionState::new(), Some("s1"))
            .await
            .unwrap();

        let mut event = Event::new("inv-1", "user", ModelMessage::user("hi"));
        event.state_delta.insert("last_query".into(), json!("hi"));
        service.append_event(&session.key(), event).await.unwrap();

        let fetched = service.get_session("app", "u", "s1").await.unwrap().unwrap();
        assert_eq!(fetched.events.len(), 1);
        assert_eq!(fetched.state["last_query"], "hi");
    }

    #[tokio::test]
    async fn mutations_on_missing_session_fail() {
        let service = InMemorySessionService::new();
        let key = SessionKey::new("app", "u", "ghost");
        let err = service.update_state(&key, SessionState::new()).await.unwrap_err();
        assert!(matches!(err, FinderError::SessionNotFound(_)));
        let err = service
            .append_event(&key, Event::new("inv", "user", ModelMessage::user("x")))
            .await
            .unwrap_err();
        assert!(matches!(err, FinderError::SessionNotFound(_)));
    }

    #[tokio::test]
    async fn list_and_delete_are_scoped_to_user() {
        let service = InMemorySessionService::new();
        for id in ["b", "a"] {
            service.create_session("app", "u1", SessionState::new(), Some(id)).await.unwrap();
        }
        service.create_session("app", "u2", SessionState::new(), Some("c")).await.unwrap();

        let ids: Vec<_> = service
            .list_sessions("app", "u1")
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["a", "b"]);

        service.delete_session("app", "u1", "a").await.unwrap();
        service.delete_session("app", "u1", "missing").await.unwrap();
        assert_eq!(service.list_sessions("app", "u1").await.unwrap().len(), 1);
        assert!(!service.is_empty().await);
    }
}
