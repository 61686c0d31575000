//! Label factory for creating test label entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{LabelCategory, Status};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test labels with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::label::LabelFactory;
///
/// let label = LabelFactory::new(&db)
///     .key("env")
///     .value("prod")
///     .category(LabelCategory::Environment)
///     .build()
///     .await?;
/// ```
pub struct LabelFactory<'a> {
    db: &'a DatabaseConnection,
    key: String,
    value: String,
    description: String,
    category: LabelCategory,
    is_system: bool,
    usage_count: i64,
    status: Status,
    created_at: DateTime<Utc>,
}

impl<'a> LabelFactory<'a> {
    /// Creates a new LabelFactory with default values.
    ///
    /// Defaults:
    /// - key: `"key_{id}"`, value: `"value_{id}"` where id is auto-incremented
    /// - description: empty
    /// - category: `LabelCategory::Custom`
    /// - is_system: `false`
    /// - usage_count: `0`
    /// - status: `Status::Enabled`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            key: format!("key_{}", id),
            value: format!("value_{}", id),
            description: String::new(),
            category: LabelCategory::Custom,
            is_system: false,
            usage_count: 0,
            status: Status::Enabled,
            created_at: Utc::now(),
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, category: LabelCategory) -> Self {
        self.category = category;
        self
    }

    pub fn is_system(mut self, is_system: bool) -> Self {
        self.is_system = is_system;
        self
    }

    pub fn usage_count(mut self, usage_count: i64) -> Self {
        self.usage_count = usage_count;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp, used to pin the secondary sort order.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the label entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::label::Model)` - Created label entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::label::Model, DbErr> {
        entity::label::ActiveModel {
            id: ActiveValue::NotSet,
            label_key: ActiveValue::Set(self.key),
            label_value: ActiveValue::Set(self.value),
            description: ActiveValue::Set(self.description),
            category: ActiveValue::Set(self.category),
            is_system: ActiveValue::Set(self.is_system),
            usage_count: ActiveValue::Set(self.usage_count),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a label with default values.
///
/// Shorthand for `LabelFactory::new(db).build().await`.
pub async fn create_label(db: &DatabaseConnection) -> Result<entity::label::Model, DbErr> {
    LabelFactory::new(db).build().await
}
