/// Credential Store
///
/// Read-only lookup from username to the stored password verifier. The
/// production store is Postgres-backed; the in-memory store serves demo
/// seeding and hermetic tests. Neither ever returns the plaintext password,
/// only the bcrypt hash the verifier was created with.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;

use crate::error::StoreError;

/// A stored password verifier for one user.
#[derive(Debug, Clone)]
pub struct StoredVerifier {
    pub username: String,
    pub password_hash: String,
}

/// Lookup interface the session core depends on.
///
/// Absence of a user is `Ok(None)`, not an error; callers collapse it into
/// the same response as a wrong password. `Err` is reserved for store
/// faults, which surface as 500 and are never retried here.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_verifier(&self, username: &str) -> Result<Option<StoredVerifier>, StoreError>;
}

/// Postgres-backed store over the `users` table.
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn find_verifier(&self, username: &str) -> Result<Option<StoredVerifier>, StoreError> {
        let row = sqlx::query_as::<_, (String, String)>(
            "SELECT username, password_hash FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Lookup(e.to_string()))?;

        Ok(row.map(|(username, password_hash)| StoredVerifier {
            username,
            password_hash,
        }))
    }
}

/// In-memory store seeded from (username, password hash) pairs.
pub struct InMemoryCredentialStore {
    verifiers: HashMap<String, String>,
}

impl InMemoryCredentialStore {
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            verifiers: entries.into_iter().collect(),
        }
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_verifier(&self, username: &str) -> Result<Option<StoredVerifier>, StoreError> {
        Ok(self
            .verifiers
            .get(username)
            .map(|password_hash| StoredVerifier {
                username: username.to_string(),
                password_hash: password_hash.clone(),
            }))
    }
}
