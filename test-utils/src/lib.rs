//! Admin Store Test Utils
//!
//! Shared testing utilities for the admin store repositories. Tests build an
//! in-memory SQLite database whose tables are generated from the SeaORM entities,
//! then populate it through factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder selecting which tables and indexes to create
//! - **TestContext**: Test environment owning the database connection
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Insert entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_label_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_label_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let label = factory::label::create_label(db).await?;
//!     // Perform repository operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
