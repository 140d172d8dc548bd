//! # Password hashing and verification — Argon2id
//!
//! [`hash_password`] generates a random salt via [`OsRng`], hashes the
//! plaintext with the default Argon2id parameters, and returns a PHC-format
//! string (e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`) that is stored in the
//! `password_hash` column of the `users` table. [`verify_password`] parses a
//! stored PHC string and checks a login attempt against it: `Ok(true)` on
//! match, `Ok(false)` on mismatch, `Err` if the stored hash is malformed.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::AuthError;

/// Hash a password using Argon2id. Returns a PHC-format string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

/// Verify a password against a PHC-format hash string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|e| AuthError::InvalidHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let hash = hash_password("hunter22hunter22").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("hunter22hunter22", &hash).unwrap());
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hash = hash_password("hunter22hunter22").unwrap();
        assert!(!verify_password("not-the-password", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }

    #[test]
    fn same_password_hashes_differently() {
        // Fresh salt per call.
        let a = hash_password("hunter22hunter22").unwrap();
        let b = hash_password("hunter22hunter22").unwrap();
        assert_ne!(a, b);
    }
}
