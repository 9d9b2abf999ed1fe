/// JWT Claims structure
///
/// The payload carried inside a session token: the authenticated username
/// and the expiry instant. Expiry is always computed server-side at
/// issuance; nothing here is taken from client input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create new claims for a user, expiring `ttl_seconds` after `now`.
    pub fn new(username: &str, ttl_seconds: i64, now: DateTime<Utc>) -> Self {
        let issued_at = now.timestamp();
        Self {
            sub: username.to_string(),
            exp: issued_at + ttl_seconds,
            iat: issued_at,
        }
    }

    /// Seconds until expiry at `now`. Negative once the token has expired.
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> i64 {
        self.exp - now.timestamp()
    }

    /// A token is live only while `now` is strictly before the expiry instant.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.remaining_seconds(now) <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn instant(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn new_claims_expire_ttl_after_now() {
        let now = instant(1_700_000_000);
        let claims = Claims::new("user1", 300, now);

        assert_eq!(claims.sub, "user1");
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_000_300);
    }

    #[test]
    fn remaining_seconds_counts_down() {
        let issued = instant(1_700_000_000);
        let claims = Claims::new("user1", 300, issued);

        assert_eq!(claims.remaining_seconds(issued), 300);
        assert_eq!(claims.remaining_seconds(issued + Duration::seconds(290)), 10);
        assert_eq!(claims.remaining_seconds(issued + Duration::seconds(400)), -100);
    }

    #[test]
    fn expiry_boundary_is_exclusive() {
        let issued = instant(1_700_000_000);
        let claims = Claims::new("user1", 300, issued);

        assert!(!claims.is_expired(issued + Duration::seconds(299)));
        assert!(claims.is_expired(issued + Duration::seconds(300)));
        assert!(claims.is_expired(issued + Duration::seconds(301)));
    }
}
