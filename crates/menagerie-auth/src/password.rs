//! Argon2id password verification for sign-in.
//!
//! Hashing happens at sign-up inside the user repository; this module
//! only checks a presented password against the stored PHC string. The
//! optional pepper must be the same value the repository hashed with,
//! otherwise every sign-in fails.

use argon2::{Argon2, PasswordVerifier};

use crate::error::AuthError;

fn peppered(password: &str, pepper: Option<&str>) -> Vec<u8> {
    match pepper {
        Some(p) => format!("{p}{password}").into_bytes(),
        None => password.as_bytes().to_vec(),
    }
}

/// Check a plaintext password against a stored Argon2id PHC hash.
///
/// Mismatch is `Ok(false)`; `Err` is reserved for an unparseable hash
/// or a verifier failure, which indicate corrupt stored data rather
/// than bad credentials.
pub fn verify_password(
    password: &str,
    hash: &str,
    pepper: Option<&str>,
) -> Result<bool, AuthError> {
    let parsed = argon2::PasswordHash::new(hash)
        .map_err(|e| AuthError::Crypto(format!("stored hash is malformed: {e}")))?;

    match Argon2::default().verify_password(&peppered(password, pepper), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Crypto(format!("verification failed: {e}"))),
    }
}
