//! Detector result factory for creating test detector rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating detector results attached to an execution.
pub struct DetectorResultFactory<'a> {
    db: &'a DatabaseConnection,
    execution_id: i32,
    name: String,
    passed: bool,
    message: Option<String>,
}

impl<'a> DetectorResultFactory<'a> {
    /// Creates a new passing DetectorResultFactory named `"detector_{id}"`.
    pub fn new(db: &'a DatabaseConnection, execution_id: i32) -> Self {
        Self {
            db,
            execution_id,
            name: format!("detector_{}", next_id()),
            passed: true,
            message: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn passed(mut self, passed: bool) -> Self {
        self.passed = passed;
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Builds and inserts the detector entity into the database.
    pub async fn build(self) -> Result<entity::detector::Model, DbErr> {
        entity::detector::ActiveModel {
            id: ActiveValue::NotSet,
            execution_id: ActiveValue::Set(self.execution_id),
            name: ActiveValue::Set(self.name),
            passed: ActiveValue::Set(self.passed),
            message: ActiveValue::Set(self.message),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a passing detector result for the given execution.
pub async fn create_detector_result(
    db: &DatabaseConnection,
    execution_id: i32,
) -> Result<entity::detector::Model, DbErr> {
    DetectorResultFactory::new(db, execution_id).build().await
}
