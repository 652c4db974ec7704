//! Bcrypt hashing. Both operations run on the blocking pool so a login or
//! signup never stalls the async workers.

use crate::domain::errors::DomainError;
use tokio::task;

/// One-way bcrypt hash of `password` (`$2b$` format).
pub async fn hash_password(password: &str, cost: u32) -> Result<String, DomainError> {
    let password = password.to_owned();
    task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::InfrastructureError(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| DomainError::InfrastructureError(format!("Password hashing failed: {}", e)))
}

/// Checks `password` against a stored hash. A malformed hash counts as a mismatch.
pub async fn verify_password(password: &str, hashed: &str) -> bool {
    let password = password.to_owned();
    let hashed = hashed.to_owned();
    match task::spawn_blocking(move || bcrypt::verify(password, &hashed)).await {
        Ok(Ok(valid)) => valid,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "stored password hash could not be verified");
            false
        }
        Err(e) => {
            tracing::error!(error = %e, "password verification task failed");
            false
        }
    }
}
