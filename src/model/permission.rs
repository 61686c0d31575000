//! Permission domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{ActionName, Status};

/// Resource a permission applies to.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl Resource {
    pub fn from_entity(entity: entity::resource::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }
}

/// Named permission granting one action on one resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Permission {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub action: ActionName,
    pub resource_id: i32,
    /// Immutable after creation by convention.
    pub is_system: bool,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Present only when the query preloads the resource.
    pub resource: Option<Resource>,
}

impl Permission {
    /// Converts an entity model without its resource.
    pub fn from_entity(entity: entity::permission::Model) -> Self {
        Self::from_entity_with_resource(entity, None)
    }

    /// Converts an entity model together with an eagerly loaded resource.
    pub fn from_entity_with_resource(
        entity: entity::permission::Model,
        resource: Option<entity::resource::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            action: entity.action,
            resource_id: entity.resource_id,
            is_system: entity.is_system,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            resource: resource.map(Resource::from_entity),
        }
    }
}

/// Parameters for inserting a permission.
#[derive(Debug, Clone)]
pub struct CreatePermissionParam {
    pub name: String,
    pub description: String,
    pub action: ActionName,
    pub resource_id: i32,
    pub is_system: bool,
    pub status: Status,
}

impl CreatePermissionParam {
    /// Creates an enabled, non-system permission.
    pub fn new(name: impl Into<String>, action: ActionName, resource_id: i32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            action,
            resource_id,
            is_system: false,
            status: Status::Enabled,
        }
    }
}

/// Filter for listing permissions. `None` leaves the column unconstrained.
#[derive(Debug, Clone, Default)]
pub struct PermissionFilter {
    pub action: Option<ActionName>,
    pub is_system: Option<bool>,
    pub status: Option<Status>,
}
