//! Session Entity
//!
//! Server-side session binding an opaque token to a user identifier.
//! Stored in the database; the cookie only carries the signed session id.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::value_object::user_id::UserId;

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    /// Bound user
    pub user_id: UserId,
    /// Absolute expiration (Unix timestamp ms); no sliding extension
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session expiring `ttl` from now
    ///
    /// TTL comes from the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
        }
    }

    /// Check if session has expired
    ///
    /// Expired sessions behave exactly like absent ones.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_not_expired() {
        let session = Session::new(UserId::new(), Duration::hours(24));
        assert!(!session.is_expired());
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let session = Session::new(UserId::new(), Duration::seconds(-1));
        assert!(session.is_expired());
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let user_id = UserId::new();
        let a = Session::new(user_id, Duration::hours(24));
        let b = Session::new(user_id, Duration::hours(24));
        assert_ne!(a.session_id, b.session_id);
    }
}
