use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::{
    error::{AppError, DbResultExt},
    model::detector::{CreateDetectorResultParam, DetectorResult},
};

/// Repository for detector findings.
pub struct DetectorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DetectorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records one detector finding, stamped with the current time.
    pub async fn create_detector_result(
        &self,
        param: CreateDetectorResultParam,
    ) -> Result<DetectorResult, AppError> {
        let execution_id = param.execution_id;

        let entity = entity::detector::ActiveModel {
            id: ActiveValue::NotSet,
            execution_id: ActiveValue::Set(param.execution_id),
            name: ActiveValue::Set(param.name),
            passed: ActiveValue::Set(param.passed),
            message: ActiveValue::Set(param.message),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
        .with_context(|| format!("failed to create detector result for execution {}", execution_id))?;

        Ok(DetectorResult::from_entity(entity))
    }

    /// Gets every detector finding for an execution.
    ///
    /// No status filter and no ordering guarantee. An execution without findings
    /// returns an empty vector.
    pub async fn list_detector_results_by_execution_id(
        &self,
        execution_id: i32,
    ) -> Result<Vec<DetectorResult>, AppError> {
        let entities = entity::prelude::Detector::find()
            .filter(entity::detector::Column::ExecutionId.eq(execution_id))
            .all(self.db)
            .await
            .with_context(|| {
                format!("failed to list detector results for execution {}", execution_id)
            })?;

        Ok(entities.into_iter().map(DetectorResult::from_entity).collect())
    }
}
