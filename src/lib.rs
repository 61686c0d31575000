//! Persistence layer for labels, permissions, roles and detector results.
//!
//! # Architecture
//!
//! - **Data Layer** (`data/`) - Repositories issuing SeaORM queries and converting
//!   entities to domain models
//! - **Model Layer** (`model/`) - Domain models, parameter types and filters
//! - **Error Layer** (`error/`) - `AppError` and configuration errors
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Startup** (`startup`) - Database connection and migrations
//!
//! Repositories borrow any `sea_orm::ConnectionTrait` handle. Pass a
//! `DatabaseConnection` for standalone calls or a `DatabaseTransaction` to group
//! several calls into one transaction; the layer itself never opens or commits one.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod startup;
