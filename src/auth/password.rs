/// Password Verification
///
/// Thin wrapper over bcrypt. Verification never fails loudly: a mismatch
/// and a malformed stored hash both come back as `false`, and the plaintext
/// is never logged or stored.

use bcrypt::{hash, DEFAULT_COST};

use crate::error::AppError;

/// Verify a plaintext password against a stored bcrypt hash.
///
/// Constant-time, salted comparison performed by bcrypt itself. A stored
/// hash that bcrypt cannot parse counts as a failed verification.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    bcrypt::verify(password, stored_hash).unwrap_or(false)
}

/// Hash a password for storage, used when seeding credential stores.
///
/// # Errors
/// Returns an internal error if bcrypt hashing fails.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Low cost keeps the suite fast; production hashing uses DEFAULT_COST.
    fn quick_hash(password: &str) -> String {
        bcrypt::hash(password, 4).expect("Failed to hash password")
    }

    #[test]
    fn correct_password_verifies() {
        let hash = quick_hash("correct horse battery staple");
        assert!(verify_password("correct horse battery staple", &hash));
    }

    #[test]
    fn wrong_password_fails() {
        let hash = quick_hash("correct horse battery staple");
        assert!(!verify_password("incorrect horse", &hash));
    }

    #[test]
    fn malformed_hash_fails_instead_of_erroring() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
        assert!(!verify_password("anything", ""));
    }

    #[test]
    fn hash_password_produces_bcrypt_output() {
        let hash = hash_password("some password").expect("Failed to hash password");

        assert_ne!(hash, "some password");
        assert!(hash.starts_with("$2"));
        assert!(verify_password("some password", &hash));
    }
}
