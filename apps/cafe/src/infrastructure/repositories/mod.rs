pub mod sqlx_cafe_repository;
pub mod sqlx_city_repository;
pub mod sqlx_like_repository;
pub mod sqlx_user_repository;

use crate::domain::errors::DomainError;

const UNIQUE_VIOLATION: &str = "23505";
const INTEGRITY_VIOLATIONS: [&str; 3] = ["23503", "23502", "23514"];

/// Translates a driver error into the domain's error categories, keeping
/// constraint failures distinguishable from infrastructure faults.
pub(crate) fn map_db_error(err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        let constraint = db_err
            .constraint()
            .map(str::to_string)
            .unwrap_or_else(|| db_err.message().to_string());
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => return DomainError::UniqueViolation(constraint),
            Some(code) if INTEGRITY_VIOLATIONS.contains(&code) => {
                return DomainError::IntegrityViolation(constraint);
            }
            _ => {}
        }
    }
    tracing::error!(database_error = %err);
    DomainError::InfrastructureError(err.to_string())
}
