//! Permission factory for creating test permission entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ActionName, Status};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test permissions bound to an existing resource.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::permission::PermissionFactory;
///
/// let permission = PermissionFactory::new(&db, resource.id)
///     .name("labels:write")
///     .action(ActionName::Update)
///     .status(Status::Disabled)
///     .build()
///     .await?;
/// ```
pub struct PermissionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    action: ActionName,
    resource_id: i32,
    is_system: bool,
    status: Status,
    updated_at: DateTime<Utc>,
}

impl<'a> PermissionFactory<'a> {
    /// Creates a new PermissionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"permission_{id}"`
    /// - action: `ActionName::Read`
    /// - is_system: `false`
    /// - status: `Status::Enabled`
    /// - updated_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `resource_id` - ID of the resource the permission applies to
    pub fn new(db: &'a DatabaseConnection, resource_id: i32) -> Self {
        Self {
            db,
            name: format!("permission_{}", next_id()),
            description: String::new(),
            action: ActionName::Read,
            resource_id,
            is_system: false,
            status: Status::Enabled,
            updated_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn action(mut self, action: ActionName) -> Self {
        self.action = action;
        self
    }

    pub fn is_system(mut self, is_system: bool) -> Self {
        self.is_system = is_system;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the last-modified timestamp, used to pin list ordering.
    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Builds and inserts the permission entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::permission::Model)` - Created permission entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::permission::Model, DbErr> {
        entity::permission::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            action: ActiveValue::Set(self.action),
            resource_id: ActiveValue::Set(self.resource_id),
            is_system: ActiveValue::Set(self.is_system),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.updated_at),
            updated_at: ActiveValue::Set(self.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an enabled permission with default values for the given resource.
pub async fn create_permission(
    db: &DatabaseConnection,
    resource_id: i32,
) -> Result<entity::permission::Model, DbErr> {
    PermissionFactory::new(db, resource_id).build().await
}
