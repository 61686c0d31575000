use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables (and any extra indexes), then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Resource, Permission};
///
/// let test = TestBuilder::new()
///     .with_table(Resource)
///     .with_table(Permission)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entity models, executed in insertion order.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,

    /// Run the production migrations before any entity tables.
    migrations: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
            migrations: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after their
    /// referenced tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index created after all tables.
    ///
    /// # Arguments
    /// - `index` - CREATE INDEX statement to execute
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Builds the schema from the production migrations instead of the entities.
    ///
    /// Use this to exercise database-level constraints that entity-generated
    /// tables do not carry. Do not combine with the `with_*_tables` helpers, as
    /// the migrated tables already exist.
    pub fn with_migrations(mut self) -> Self {
        self.migrations = true;
        self
    }

    /// Adds the labels table together with its `(label_key, label_value)` unique index.
    ///
    /// The index carries the same name as the production migration so conflict
    /// handling behaves identically.
    pub fn with_label_tables(self) -> Self {
        self.with_table(Label).with_index(
            Index::create()
                .name(migration::LABEL_KEY_VALUE_INDEX)
                .table(Label)
                .col(entity::label::Column::LabelKey)
                .col(entity::label::Column::LabelValue)
                .unique()
                .to_owned(),
        )
    }

    /// Adds all tables required for permission and role operations.
    ///
    /// Tables are added in dependency order:
    /// - Resource
    /// - Permission
    /// - Role
    /// - RolePermission
    pub fn with_permission_tables(self) -> Self {
        self.with_table(Resource)
            .with_table(Permission)
            .with_table(Role)
            .with_table(RolePermission)
    }

    /// Adds the detector results table.
    pub fn with_detector_tables(self) -> Self {
        self.with_table(Detector)
    }

    /// Builds and initializes the test context with configured tables and indexes.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if self.migrations {
            setup.with_migrations().await?;
        }
        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
