//! Resource factory for creating test resource entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test resources.
pub struct ResourceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
}

impl<'a> ResourceFactory<'a> {
    /// Creates a new ResourceFactory named `"resource_{id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("resource_{}", next_id()),
            description: String::new(),
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

    /// Builds and inserts the resource entity into the database.
    pub async fn build(self) -> Result<entity::resource::Model, DbErr> {
        let now = Utc::now();
        entity::resource::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a resource with default values.
pub async fn create_resource(db: &DatabaseConnection) -> Result<entity::resource::Model, DbErr> {
    ResourceFactory::new(db).build().await
}
