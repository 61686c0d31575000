//! Error types returned by the repository layer.
//!
//! `AppError` is the single error type surfaced to callers. Every repository
//! function returns one of three kinds: `NotFound` for natural-key and
//! primary-key lookups that match nothing, `Validation` for batch inputs that must
//! not be empty, and `Persistence` for any failure raised by the database driver,
//! wrapped with the operation that triggered it.

pub mod config;

use sea_orm::DbErr;
use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Lookup by id or natural key found no matching row.
    ///
    /// # Fields
    /// - Message naming the operation and the id, name or key that was looked up
    #[error("{0}")]
    NotFound(String),

    /// Input rejected before reaching the database.
    ///
    /// # Fields
    /// - Message describing what was invalid about the input
    #[error("{0}")]
    Validation(String),

    /// Underlying database failure: connection, constraint violation outside the
    /// declared conflict policy, serialization failure.
    #[error("{context}: {source}")]
    Persistence {
        /// Operation that failed, including the entity id or name where relevant
        context: String,
        /// The error returned by SeaORM
        #[source]
        source: DbErr,
    },
}

impl AppError {
    /// Returns true for the `NotFound` variant.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true for the `Validation` variant.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Wraps SeaORM results with the operation context.
pub trait DbResultExt<T> {
    /// Converts a `DbErr` into `AppError::Persistence` carrying `context`.
    fn context(self, context: impl Into<String>) -> Result<T, AppError>;

    /// Lazy variant of [`DbResultExt::context`] for messages that need formatting.
    fn with_context<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> String;
}

impl<T> DbResultExt<T> for Result<T, DbErr> {
    fn context(self, context: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|source| AppError::Persistence {
            context: context.into(),
            source,
        })
    }

    fn with_context<F>(self, f: F) -> Result<T, AppError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|source| AppError::Persistence {
            context: f(),
            source,
        })
    }
}
