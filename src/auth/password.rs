//! Argon2 hashing for the registration password. Both operations run on the
//! blocking pool.

use anyhow::{anyhow, Context};
use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tokio::task;

/// Hashes `plain` into a PHC string with a fresh random salt.
pub async fn hash_password(plain: String) -> anyhow::Result<String> {
    task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| anyhow!("hashing password: {e}"))
    })
    .await
    .context("password hashing task panicked")?
}

/// `Ok(false)` on a mismatch; `Err` only when the stored hash is unusable.
pub async fn verify_password(plain: String, stored_hash: String) -> anyhow::Result<bool> {
    task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&stored_hash)
            .map_err(|e| anyhow!("stored password hash is unreadable: {e}"))?;
        match Argon2::default().verify_password(plain.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(anyhow!("verifying password: {e}")),
        }
    })
    .await
    .context("password verification task panicked")?
}
