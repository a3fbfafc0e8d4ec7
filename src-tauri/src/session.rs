//! Session Store
//!
//! Device-persisted sign-in state: the user object written by the sign-in
//! screens and whether the Buzz Wall instructions were walked through.
//! Kept as one JSON document, `session.json`, in the app data dir.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tokio::sync::Mutex;

pub const SESSION_FILE: &str = "session.json";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file: {0}")]
    Io(#[from] std::io::Error),
    #[error("session encoding: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid session user: {0}")]
    InvalidUser(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceSession {
    /// Opaque user object; the frontend reads `id`, `steps`, `name`, `image`
    #[serde(default)]
    pub user: Option<Value>,
    #[serde(default, rename = "buzzwallSeen")]
    pub buzzwall_seen: bool,
}

/// A user must be an object carrying a non-empty `id`
fn validate_user(user: &Value) -> Result<(), SessionError> {
    let object = user.as_object().ok_or(SessionError::InvalidUser("not an object"))?;
    match object.get("id") {
        Some(Value::String(id)) if !id.trim().is_empty() => Ok(()),
        Some(Value::Number(_)) => Ok(()),
        _ => Err(SessionError::InvalidUser("missing id")),
    }
}

pub struct SessionStore {
    path: PathBuf,
    state: Mutex<DeviceSession>,
}

impl SessionStore {
    /// Load `session.json` from `dir`. A missing file is an empty session;
    /// an unreadable one is logged and replaced on the next write.
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, SessionError> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(SESSION_FILE);

        let state = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(session) => session,
                Err(e) => {
                    log::warn!("Discarding unreadable session file {}: {}", path.display(), e);
                    DeviceSession::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => DeviceSession::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn snapshot(&self) -> DeviceSession {
        self.state.lock().await.clone()
    }

    pub async fn save_user(&self, user: Value) -> Result<(), SessionError> {
        validate_user(&user)?;
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        next.user = Some(user);
        self.persist(&next).await?;
        *state = next;
        Ok(())
    }

    /// Signs out; the instructions flag stays with the device
    pub async fn clear_user(&self) -> Result<(), SessionError> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        next.user = None;
        self.persist(&next).await?;
        *state = next;
        Ok(())
    }

    pub async fn mark_buzzwall_seen(&self) -> Result<(), SessionError> {
        let mut state = self.state.lock().await;
        if state.buzzwall_seen {
            return Ok(());
        }
        let mut next = state.clone();
        next.buzzwall_seen = true;
        self.persist(&next).await?;
        *state = next;
        Ok(())
    }

    /// Write to a sibling temp file, then rename over the old one
    async fn persist(&self, session: &DeviceSession) -> Result<(), SessionError> {
        let bytes = serde_json::to_vec_pretty(session)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_file_is_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path()).await.unwrap();
        assert_eq!(store.snapshot().await, DeviceSession::default());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = SessionStore::open(dir.path()).await.unwrap();
            store.save_user(json!({"id": 42, "steps": "2", "name": "Asha"})).await.unwrap();
            store.mark_buzzwall_seen().await.unwrap();
        }

        let reopened = SessionStore::open(dir.path()).await.unwrap();
        let session = reopened.snapshot().await;
        assert_eq!(session.user, Some(json!({"id": 42, "steps": "2", "name": "Asha"})));
        assert!(session.buzzwall_seen);

        let raw: Value = serde_json::from_slice(&std::fs::read(reopened.path()).unwrap()).unwrap();
        assert_eq!(raw["buzzwallSeen"], json!(true));
    }

    #[tokio::test]
    async fn test_clear_keeps_instructions_flag() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path()).await.unwrap();
        store.save_user(json!({"id": "7"})).await.unwrap();
        store.mark_buzzwall_seen().await.unwrap();
        store.clear_user().await.unwrap();

        let session = SessionStore::open(dir.path()).await.unwrap().snapshot().await;
        assert_eq!(session.user, None);
        assert!(session.buzzwall_seen);
    }

    #[tokio::test]
    async fn test_rejects_user_without_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path()).await.unwrap();
        assert!(matches!(
            store.save_user(json!({"name": "Asha"})).await,
            Err(SessionError::InvalidUser(_))
        ));
        assert!(matches!(
            store.save_user(json!("42")).await,
            Err(SessionError::InvalidUser(_))
        ));
        assert_eq!(store.snapshot().await.user, None);
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SESSION_FILE), b"{not json").unwrap();
        let store = SessionStore::open(dir.path()).await.unwrap();
        assert_eq!(store.snapshot().await, DeviceSession::default());
    }
}
