//! Label data repository for database operations.
//!
//! This module provides the `LabelRepository` for label definitions: creation, full-row
//! saves, soft deletion, batch upsert against the `(label_key, label_value)` unique index,
//! usage counter arithmetic, and the filtered listing and search queries.
//!
//! Listing and search results are ordered by `usage_count DESC, created_at DESC`.
//! Counter updates are issued as single `UPDATE` statements so the arithmetic happens
//! row-locally in the database.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{LabelCategory, Status};
use migration::OnConflict;
use sea_orm::{
    sea_query::{BinOper, Expr, Func, SimpleExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, TryInsertResult,
};
use std::collections::BTreeMap;

use crate::{
    error::{AppError, DbResultExt},
    model::{
        label::{CreateLabelParam, Label, LabelFilter, SaveLabelParam},
        status::StatusSelector,
    },
};

use entity::label::Column;

/// Repository providing database operations for labels.
///
/// Generic over the connection so callers can pass either a pooled
/// `DatabaseConnection` or a `DatabaseTransaction` they manage themselves.
pub struct LabelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LabelRepository<'a, C> {
    /// Creates a new LabelRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new label.
    ///
    /// # Arguments
    /// - `param` - Label fields; timestamps are set to the current time
    ///
    /// # Returns
    /// - `Ok(Label)` - The created label including its assigned id
    /// - `Err(AppError::Validation)` - `usage_count` is negative
    /// - `Err(AppError::Persistence)` - Driver failure or `(key, value)` already taken
    pub async fn create_label(&self, param: CreateLabelParam) -> Result<Label, AppError> {
        check_usage_count(&param.key, &param.value, param.usage_count)?;

        let context = format!("failed to create label {}={}", param.key, param.value);

        let entity = new_active_model(param, Utc::now())
            .insert(self.db)
            .await
            .context(context)?;

        Ok(Label::from_entity(entity))
    }

    /// Saves every column of an existing label addressed by its id.
    ///
    /// `updated_at` is refreshed; all other columns take the values in `label`.
    ///
    /// # Returns
    /// - `Ok(Label)` - The label as stored after the update
    /// - `Err(AppError::Validation)` - `usage_count` is negative
    /// - `Err(AppError::Persistence)` - No row with that id, or driver failure
    pub async fn update_label(&self, label: Label) -> Result<Label, AppError> {
        check_usage_count(&label.key, &label.value, label.usage_count)?;

        let id = label.id;

        let entity = entity::label::ActiveModel {
            id: ActiveValue::Unchanged(label.id),
            label_key: ActiveValue::Set(label.key),
            label_value: ActiveValue::Set(label.value),
            description: ActiveValue::Set(label.description),
            category: ActiveValue::Set(label.category),
            is_system: ActiveValue::Set(label.is_system),
            usage_count: ActiveValue::Set(label.usage_count),
            status: ActiveValue::Set(label.status),
            created_at: ActiveValue::Set(label.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await
        .with_context(|| format!("failed to update label {}", id))?;

        Ok(Label::from_entity(entity))
    }

    /// Soft-deletes a label by setting its status to `Deleted`.
    ///
    /// Rows that are already deleted are left untouched.
    ///
    /// # Returns
    /// - `Ok(1)` - Label marked deleted
    /// - `Ok(0)` - Label absent or already deleted
    /// - `Err(AppError::Persistence)` - Driver failure
    pub async fn delete_label(&self, id: i32) -> Result<u64, AppError> {
        let result = soft_delete()
            .filter(Column::Id.eq(id))
            .filter(Column::Status.ne(Status::Deleted))
            .exec(self.db)
            .await
            .with_context(|| format!("failed to delete label {}", id))?;

        Ok(result.rows_affected)
    }

    /// Soft-deletes every listed label that is not already deleted.
    ///
    /// Idempotent. An empty slice returns without touching the database.
    pub async fn batch_delete_labels(&self, ids: &[i32]) -> Result<(), AppError> {
        if ids.is_empty() {
            return Ok(());
        }

        let result = soft_delete()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .filter(Column::Status.ne(Status::Deleted))
            .exec(self.db)
            .await
            .with_context(|| format!("failed to batch delete labels {:?}", ids))?;

        tracing::debug!("Soft-deleted {} of {} labels", result.rows_affected, ids.len());

        Ok(())
    }

    /// Inserts labels in one statement, skipping pairs that already exist.
    ///
    /// Conflicts on the `(label_key, label_value)` unique index resolve to DO NOTHING:
    /// existing rows keep every column, including their id and usage count.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows actually inserted
    /// - `Err(AppError::Validation)` - `labels` is empty or a usage count is negative;
    ///   nothing is written
    /// - `Err(AppError::Persistence)` - Driver failure
    pub async fn batch_upsert_labels(&self, labels: Vec<CreateLabelParam>) -> Result<u64, AppError> {
        if labels.is_empty() {
            return Err(AppError::Validation(
                "batch upsert labels requires at least one label".to_string(),
            ));
        }
        for label in &labels {
            check_usage_count(&label.key, &label.value, label.usage_count)?;
        }

        let requested = labels.len() as u64;
        let now = Utc::now();

        let result = entity::prelude::Label::insert_many(
            labels.into_iter().map(|param| new_active_model(param, now)),
        )
        .on_conflict(
            OnConflict::columns([Column::LabelKey, Column::LabelValue])
                .do_nothing()
                .to_owned(),
        )
        .do_nothing()
        .exec_without_returning(self.db)
        .await
        .context("failed to batch upsert labels")?;

        let inserted = match result {
            TryInsertResult::Inserted(rows) => rows,
            TryInsertResult::Conflicted | TryInsertResult::Empty => 0,
        };

        if inserted < requested {
            tracing::warn!(
                "Batch upsert skipped {} of {} labels that already exist",
                requested - inserted,
                requested
            );
        }

        Ok(inserted)
    }

    /// Saves each label by primary key.
    ///
    /// Rows with `id: Some(_)` are overwritten in full (except `created_at`); rows
    /// with `id: None` are inserted. Each row is its own statement, so callers that
    /// need all-or-nothing behaviour should pass a transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<Label>)` - Saved labels in input order
    /// - `Err(AppError::Validation)` - `labels` is empty or a usage count is negative;
    ///   nothing is written
    /// - `Err(AppError::Persistence)` - A referenced id does not exist, or driver failure
    pub async fn batch_update_labels(
        &self,
        labels: Vec<SaveLabelParam>,
    ) -> Result<Vec<Label>, AppError> {
        if labels.is_empty() {
            return Err(AppError::Validation(
                "batch update labels requires at least one label".to_string(),
            ));
        }
        for label in &labels {
            check_usage_count(&label.key, &label.value, label.usage_count)?;
        }

        let now = Utc::now();
        let mut saved = Vec::with_capacity(labels.len());

        for label in labels {
            let entity = match label.id {
                Some(id) => entity::label::ActiveModel {
                    id: ActiveValue::Unchanged(id),
                    label_key: ActiveValue::Set(label.key),
                    label_value: ActiveValue::Set(label.value),
                    description: ActiveValue::Set(label.description),
                    category: ActiveValue::Set(label.category),
                    is_system: ActiveValue::Set(label.is_system),
                    usage_count: ActiveValue::Set(label.usage_count),
                    status: ActiveValue::Set(label.status),
                    created_at: ActiveValue::NotSet,
                    updated_at: ActiveValue::Set(now),
                }
                .update(self.db)
                .await
                .with_context(|| format!("failed to save label {}", id))?,
                None => {
                    let context = format!("failed to save label {}={}", label.key, label.value);
                    new_active_model(
                        CreateLabelParam {
                            key: label.key,
                            value: label.value,
                            description: label.description,
                            category: label.category,
                            is_system: label.is_system,
                            usage_count: label.usage_count,
                            status: label.status,
                        },
                        now,
                    )
                    .insert(self.db)
                    .await
                    .context(context)?
                }
            };

            saved.push(Label::from_entity(entity));
        }

        tracing::debug!("Saved {} labels", saved.len());

        Ok(saved)
    }

    /// Adds `n` to the usage count of every listed label in one statement.
    ///
    /// An empty slice returns without touching the database.
    pub async fn batch_increase_label_usages(&self, ids: &[i32], n: u32) -> Result<(), AppError> {
        if ids.is_empty() {
            return Ok(());
        }

        entity::prelude::Label::update_many()
            .col_expr(
                Column::UsageCount,
                Expr::col(Column::UsageCount).add(i64::from(n)),
            )
            .filter(Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await
            .with_context(|| format!("failed to increase usage of labels {:?}", ids))?;

        Ok(())
    }

    /// Subtracts `n` from the usage count of every listed label, flooring at zero.
    ///
    /// The floor is evaluated per row inside the single `UPDATE`, so concurrent
    /// increments can never drive a count negative. An empty slice returns without
    /// touching the database.
    pub async fn batch_decrease_label_usages(&self, ids: &[i32], n: u32) -> Result<(), AppError> {
        if ids.is_empty() {
            return Ok(());
        }

        let n = i64::from(n);
        let floored: SimpleExpr = Expr::case(
            Expr::col(Column::UsageCount).gt(n),
            Expr::col(Column::UsageCount).sub(n),
        )
        .finally(Expr::value(0i64))
        .into();

        entity::prelude::Label::update_many()
            .col_expr(Column::UsageCount, floored)
            .filter(Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await
            .with_context(|| format!("failed to decrease usage of labels {:?}", ids))?;

        Ok(())
    }

    /// Gets a label by id regardless of its status.
    ///
    /// # Returns
    /// - `Ok(Label)` - Label found (possibly deleted)
    /// - `Err(AppError::NotFound)` - No label with that id
    /// - `Err(AppError::Persistence)` - Driver failure
    pub async fn get_label_by_id(&self, id: i32) -> Result<Label, AppError> {
        entity::prelude::Label::find_by_id(id)
            .one(self.db)
            .await
            .with_context(|| format!("failed to get label {}", id))?
            .map(Label::from_entity)
            .ok_or_else(|| AppError::NotFound(format!("label {} not found", id)))
    }

    /// Gets a label by its natural key.
    ///
    /// # Arguments
    /// - `key` - Label key
    /// - `value` - Label value
    /// - `status` - `Default` excludes deleted labels, `Exact` and `AnyOf` match
    ///   the given statuses
    ///
    /// # Returns
    /// - `Ok(Label)` - Matching label
    /// - `Err(AppError::NotFound)` - No label matches the pair and status
    /// - `Err(AppError::Persistence)` - Driver failure
    pub async fn get_label_by_key_and_value(
        &self,
        key: &str,
        value: &str,
        status: StatusSelector,
    ) -> Result<Label, AppError> {
        let status_condition = match status {
            StatusSelector::Exact(status) => Column::Status.eq(status),
            StatusSelector::AnyOf(statuses) if !statuses.is_empty() => {
                Column::Status.is_in(statuses)
            }
            StatusSelector::Default | StatusSelector::AnyOf(_) => {
                Column::Status.ne(Status::Deleted)
            }
        };

        entity::prelude::Label::find()
            .filter(Column::LabelKey.eq(key))
            .filter(Column::LabelValue.eq(value))
            .filter(status_condition)
            .one(self.db)
            .await
            .with_context(|| format!("failed to get label {}={}", key, value))?
            .map(Label::from_entity)
            .ok_or_else(|| AppError::NotFound(format!("label {}={} not found", key, value)))
    }

    /// Lists one page of labels matching the filter.
    ///
    /// # Arguments
    /// - `limit` - Page size; `0` returns every matching row and ignores `offset`
    /// - `offset` - Number of rows to skip
    /// - `filter` - Column constraints; empty or `None` fields are ignored
    ///
    /// # Returns
    /// - `Ok((labels, total))` - Page of labels and the unpaged count for the same filter
    /// - `Err(AppError::Persistence)` - Driver failure
    pub async fn list_labels(
        &self,
        limit: u64,
        offset: u64,
        filter: &LabelFilter,
    ) -> Result<(Vec<Label>, u64), AppError> {
        let condition = filter_condition(filter);

        let total = entity::prelude::Label::find()
            .filter(condition.clone())
            .count(self.db)
            .await
            .context("failed to count labels")?;

        let mut query = by_usage(entity::prelude::Label::find().filter(condition));
        if limit > 0 {
            query = query.limit(limit).offset(offset);
        }

        let entities = query.all(self.db).await.context("failed to list labels")?;

        Ok((entities.into_iter().map(Label::from_entity).collect(), total))
    }

    /// Counts labels matching the filter without fetching them.
    pub async fn count_labels(&self, filter: &LabelFilter) -> Result<u64, AppError> {
        entity::prelude::Label::find()
            .filter(filter_condition(filter))
            .count(self.db)
            .await
            .context("failed to count labels")
    }

    /// Gets every non-deleted label whose id is in `ids`.
    ///
    /// An empty slice returns an empty vector without querying.
    pub async fn list_labels_by_id(&self, ids: &[i32]) -> Result<Vec<Label>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Label::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .filter(Column::Status.ne(Status::Deleted))
            .all(self.db)
            .await
            .with_context(|| format!("failed to list labels {:?}", ids))?;

        Ok(entities.into_iter().map(Label::from_entity).collect())
    }

    /// Groups every non-deleted label by category.
    ///
    /// Each group keeps the canonical usage ordering. Categories without labels
    /// are absent from the map.
    pub async fn list_labels_group_by_category(
        &self,
    ) -> Result<BTreeMap<LabelCategory, Vec<Label>>, AppError> {
        let entities = by_usage(
            entity::prelude::Label::find().filter(Column::Status.ne(Status::Deleted)),
        )
        .all(self.db)
        .await
        .context("failed to list labels by category")?;

        let mut groups: BTreeMap<LabelCategory, Vec<Label>> = BTreeMap::new();
        for entity in entities {
            groups
                .entry(entity.category)
                .or_default()
                .push(Label::from_entity(entity));
        }

        Ok(groups)
    }

    /// Searches labels by keyword and category.
    ///
    /// Does not filter on status, so deleted and disabled labels are included.
    ///
    /// # Arguments
    /// - `keyword` - Case-insensitive literal substring matched against key, value or
    ///   description; `%` and `_` match themselves, empty matches everything
    /// - `category` - Exact category, or `None` for any
    /// - `limit` - Maximum rows returned; `0` means no cap
    pub async fn search_labels(
        &self,
        keyword: &str,
        category: Option<LabelCategory>,
        limit: u64,
    ) -> Result<Vec<Label>, AppError> {
        let mut query = entity::prelude::Label::find();

        if !keyword.is_empty() {
            let pattern = format!("%{}%", escape_like(keyword));
            query = query.filter(
                Condition::any()
                    .add(lower_contains(Column::LabelKey, &pattern))
                    .add(lower_contains(Column::LabelValue, &pattern))
                    .add(lower_contains(Column::Description, &pattern)),
            );
        }

        if let Some(category) = category {
            query = query.filter(Column::Category.eq(category));
        }

        let mut query = by_usage(query);
        if limit > 0 {
            query = query.limit(limit);
        }

        let entities = query
            .all(self.db)
            .await
            .with_context(|| format!("failed to search labels for '{}'", keyword))?;

        Ok(entities.into_iter().map(Label::from_entity).collect())
    }
}

fn new_active_model(param: CreateLabelParam, now: DateTime<Utc>) -> entity::label::ActiveModel {
    entity::label::ActiveModel {
        id: ActiveValue::NotSet,
        label_key: ActiveValue::Set(param.key),
        label_value: ActiveValue::Set(param.value),
        description: ActiveValue::Set(param.description),
        category: ActiveValue::Set(param.category),
        is_system: ActiveValue::Set(param.is_system),
        usage_count: ActiveValue::Set(param.usage_count),
        status: ActiveValue::Set(param.status),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}

fn soft_delete() -> sea_orm::UpdateMany<entity::label::Entity> {
    entity::prelude::Label::update_many()
        .col_expr(Column::Status, Expr::value(Status::Deleted))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
}

fn by_usage(query: Select<entity::label::Entity>) -> Select<entity::label::Entity> {
    query
        .order_by_desc(Column::UsageCount)
        .order_by_desc(Column::CreatedAt)
}

fn filter_condition(filter: &LabelFilter) -> Condition {
    let mut condition = Condition::all();

    if !filter.key.is_empty() {
        condition = condition.add(Column::LabelKey.eq(filter.key.as_str()));
    }
    if !filter.value.is_empty() {
        condition = condition.add(Column::LabelValue.eq(filter.value.as_str()));
    }
    if let Some(category) = filter.category {
        condition = condition.add(Column::Category.eq(category));
    }
    if let Some(is_system) = filter.is_system {
        condition = condition.add(Column::IsSystem.eq(is_system));
    }
    if let Some(status) = filter.status {
        condition = condition.add(Column::Status.eq(status));
    }

    condition
}

fn check_usage_count(key: &str, value: &str, usage_count: i64) -> Result<(), AppError> {
    if usage_count < 0 {
        return Err(AppError::Validation(format!(
            "label {}={} has negative usage count {}",
            key, value, usage_count
        )));
    }

    Ok(())
}

const LIKE_ESCAPE: char = '!';

/// Escapes LIKE wildcards so the keyword matches literally.
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// `LOWER(column) LIKE LOWER(pattern) ESCAPE '!'`
///
/// Both sides are folded by the database so the comparison uses one set of
/// case rules. SQLite folds ASCII only; Postgres folds Unicode.
fn lower_contains(column: Column, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col((entity::prelude::Label, column)))).binary(
        BinOper::Like,
        Expr::expr(Func::lower(Expr::val(pattern))).binary(
            BinOper::Escape,
            SimpleExpr::Constant(LIKE_ESCAPE.into()),
        ),
    )
}
