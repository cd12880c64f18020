// mtc-client/src/session.rs
// Session storage - bearer token persisted as JSON

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use thiserror::Error;

/// File name of the persisted login data
pub const SESSION_FILE_NAME: &str = "userData.json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Session expired")]
    Expired,

    #[error("Stored session is unreadable: {0}")]
    Corrupt(String),
}

/// Source of the admin bearer token
///
/// Consulted on every request so a re-login is picked up without rebuilding
/// the client.
pub trait SessionProvider: Send + Sync {
    fn token(&self) -> Result<String, SessionError>;
}

/// Persisted login data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// Unix seconds
    #[serde(default)]
    pub expires_at: Option<u64>,
}

impl StoredSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            name: None,
            role: None,
            expires_at: None,
        }
    }

    pub fn is_expired(&self) -> bool {
        if let Some(expires_at) = self.expires_at {
            let now = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            return now > expires_at;
        }
        false
    }

    fn usable_token(&self) -> Result<String, SessionError> {
        if self.token.trim().is_empty() {
            return Err(SessionError::NotLoggedIn);
        }
        if self.is_expired() {
            return Err(SessionError::Expired);
        }
        Ok(self.token.clone())
    }
}

/// Session persisted as `userData.json` in a directory
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(SESSION_FILE_NAME),
        }
    }

    /// Save the session, creating the directory if needed
    pub fn save(&self, session: &StoredSession) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)
    }

    /// Load the session; `Ok(None)` when nothing is stored
    pub fn load(&self) -> Result<Option<StoredSession>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json =
            fs::read_to_string(&self.path).map_err(|e| SessionError::Corrupt(e.to_string()))?;
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| SessionError::Corrupt(e.to_string()))
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionProvider for FileSessionStore {
    fn token(&self) -> Result<String, SessionError> {
        match self.load()? {
            Some(session) => session.usable_token(),
            None => Err(SessionError::NotLoggedIn),
        }
    }
}

/// In-memory session, replaceable at runtime
#[derive(Debug, Default)]
pub struct MemorySession {
    session: RwLock<Option<StoredSession>>,
}

impl MemorySession {
    pub fn new(token: Option<String>) -> Self {
        Self {
            session: RwLock::new(token.map(StoredSession::new)),
        }
    }

    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut guard) = self.session.write() {
            *guard = Some(StoredSession::new(token));
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.session.write() {
            *guard = None;
        }
    }
}

impl SessionProvider for MemorySession {
    fn token(&self) -> Result<String, SessionError> {
        let guard = self
            .session
            .read()
            .map_err(|e| SessionError::Corrupt(e.to_string()))?;
        match guard.as_ref() {
            Some(session) => session.usable_token(),
            None => Err(SessionError::NotLoggedIn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_session_replace() {
        let session = MemorySession::new(None);
        assert_eq!(session.token(), Err(SessionError::NotLoggedIn));

        session.set_token("abc");
        assert_eq!(session.token().unwrap(), "abc");

        session.clear();
        assert_eq!(session.token(), Err(SessionError::NotLoggedIn));
    }

    #[test]
    fn test_blank_token_is_not_logged_in() {
        let session = MemorySession::new(Some("   ".into()));
        assert_eq!(session.token(), Err(SessionError::NotLoggedIn));
    }

    #[test]
    fn test_expired_session() {
        let mut stored = StoredSession::new("tok");
        assert!(!stored.is_expired());
        stored.expires_at = Some(1);
        assert!(stored.is_expired());
        assert_eq!(stored.usable_token(), Err(SessionError::Expired));
    }
}
