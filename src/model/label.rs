//! Label domain models and parameters.
//!
//! Labels are `(key, value)` pairs grouped by category and ranked by how often
//! they are used. The pair is the natural key of a label.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{LabelCategory, Status};

/// Label definition with its usage counter.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub id: i32,
    pub key: String,
    pub value: String,
    pub description: String,
    pub category: LabelCategory,
    /// Seeded by the platform. Not enforced by this layer.
    pub is_system: bool,
    /// Never negative.
    pub usage_count: i64,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Label {
    /// Converts an entity model to a label domain model at the repository boundary.
    pub fn from_entity(entity: entity::label::Model) -> Self {
        Self {
            id: entity.id,
            key: entity.label_key,
            value: entity.label_value,
            description: entity.description,
            category: entity.category,
            is_system: entity.is_system,
            usage_count: entity.usage_count,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for inserting a label.
///
/// Used by single creation and by batch upsert. Timestamps are stamped by the
/// repository.
#[derive(Debug, Clone, Default)]
pub struct CreateLabelParam {
    pub key: String,
    pub value: String,
    pub description: String,
    pub category: LabelCategory,
    pub is_system: bool,
    pub usage_count: i64,
    pub status: Status,
}

impl CreateLabelParam {
    /// Creates an enabled, non-system label with zero usage.
    pub fn new(key: impl Into<String>, value: impl Into<String>, category: LabelCategory) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            category,
            ..Default::default()
        }
    }
}

/// Parameters for a save addressed by primary key.
///
/// `id: Some(_)` overwrites every column of that row. `id: None` inserts a new row.
#[derive(Debug, Clone, Default)]
pub struct SaveLabelParam {
    pub id: Option<i32>,
    pub key: String,
    pub value: String,
    pub description: String,
    pub category: LabelCategory,
    pub is_system: bool,
    pub usage_count: i64,
    pub status: Status,
}

impl From<Label> for SaveLabelParam {
    fn from(label: Label) -> Self {
        Self {
            id: Some(label.id),
            key: label.key,
            value: label.value,
            description: label.description,
            category: label.category,
            is_system: label.is_system,
            usage_count: label.usage_count,
            status: label.status,
        }
    }
}

impl From<CreateLabelParam> for SaveLabelParam {
    fn from(param: CreateLabelParam) -> Self {
        Self {
            id: None,
            key: param.key,
            value: param.value,
            description: param.description,
            category: param.category,
            is_system: param.is_system,
            usage_count: param.usage_count,
            status: param.status,
        }
    }
}

/// Filter for listing labels.
///
/// Empty strings and `None` leave the corresponding column unconstrained.
#[derive(Debug, Clone, Default)]
pub struct LabelFilter {
    pub key: String,
    pub value: String,
    pub category: Option<LabelCategory>,
    pub is_system: Option<bool>,
    pub status: Option<Status>,
}
