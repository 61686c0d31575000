use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{LabelCategory, Status};

/// Label definition keyed by the `(label_key, label_value)` pair.
///
/// The pair is unique through the `idx_key_value_unique` index created by the
/// migration; the entity itself cannot express a composite unique key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "labels")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub label_key: String,
    pub label_value: String,
    pub description: String,
    pub category: LabelCategory,
    pub is_system: bool,
    pub usage_count: i64,
    pub status: Status,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
