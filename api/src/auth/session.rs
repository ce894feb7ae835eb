//! Typed access to the persisted session.
//!
//! The session lives in the key-value store under the same two fixed keys
//! the dashboard used in browser storage. A stored user value that no
//! longer parses clears both keys, the same way the original discarded
//! corrupt entries on startup.

use crate::auth::client::SessionUser;
use util::session::{ACCESS_TOKEN_KEY, SessionStore, USER_KEY};

/// A restored session: the stored user plus the opaque access token.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: SessionUser,
    pub access_token: String,
}

/// Persists the session under the fixed keys.
pub fn save(sessions: &SessionStore, user: &SessionUser, access_token: &str) {
    match serde_json::to_string(user) {
        Ok(serialized) => {
            sessions.set(USER_KEY, serialized);
            sessions.set(ACCESS_TOKEN_KEY, access_token);
        }
        Err(e) => {
            tracing::error!("Failed to serialize session user: {e}");
        }
    }
}

/// Restores the session, if both keys are present and the user parses.
pub fn load(sessions: &SessionStore) -> Option<Session> {
    let stored_user = sessions.get(USER_KEY)?;
    let access_token = sessions.get(ACCESS_TOKEN_KEY)?;

    match serde_json::from_str::<SessionUser>(&stored_user) {
        Ok(user) => Some(Session { user, access_token }),
        Err(e) => {
            tracing::warn!("Clearing unreadable stored session user: {e}");
            sessions.clear_session();
            None
        }
    }
}

/// Drops the session entirely.
pub fn clear(sessions: &SessionStore) {
    sessions.clear_session();
}
