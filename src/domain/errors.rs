//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use sea_orm::{DbErr, SqlErr};

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Lookup by identifier found no row
    #[error("Resource not found")]
    NotFound,
    /// A foreign-key or uniqueness rule rejected the write
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    /// Any other persistence failure
    #[error("Database error: {0}")]
    Database(String),
}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg))
            | Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::ConstraintViolation(msg),
            _ => DomainError::Database(e.to_string()),
        }
    }
}
