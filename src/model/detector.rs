use chrono::{DateTime, Utc};

/// Detector finding recorded for an execution.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorResult {
    pub id: i32,
    pub execution_id: i32,
    pub name: String,
    pub passed: bool,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DetectorResult {
    pub fn from_entity(entity: entity::detector::Model) -> Self {
        Self {
            id: entity.id,
            execution_id: entity.execution_id,
            name: entity.name,
            passed: entity.passed,
            message: entity.message,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for recording a detector finding.
#[derive(Debug, Clone)]
pub struct CreateDetectorResultParam {
    pub execution_id: i32,
    pub name: String,
    pub passed: bool,
    pub message: Option<String>,
}
