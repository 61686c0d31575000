//! Permission data repository for database operations.
//!
//! Permissions are addressed by id or by their unique name. Single-row lookups and
//! the action and system queries eagerly load the owning resource; list queries
//! return bare permissions.

use chrono::Utc;
use entity::sea_orm_active_enums::{ActionName, Status};
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TryInsertResult,
};

use crate::{
    error::{AppError, DbResultExt},
    model::permission::{CreatePermissionParam, Permission, PermissionFilter},
};

use entity::permission::Column;

/// Repository providing database operations for permissions.
pub struct PermissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PermissionRepository<'a, C> {
    /// Creates a new PermissionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts permissions in one statement, skipping names that already exist.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows actually inserted
    /// - `Err(AppError::Validation)` - `permissions` is empty
    /// - `Err(AppError::Persistence)` - Driver failure or unknown resource id
    pub async fn batch_upsert_permissions(
        &self,
        permissions: Vec<CreatePermissionParam>,
    ) -> Result<u64, AppError> {
        if permissions.is_empty() {
            return Err(AppError::Validation(
                "batch upsert permissions requires at least one permission".to_string(),
            ));
        }

        let requested = permissions.len() as u64;

        let result = entity::prelude::Permission::insert_many(
            permissions.into_iter().map(new_active_model),
        )
        .on_conflict(OnConflict::column(Column::Name).do_nothing().to_owned())
        .do_nothing()
        .exec_without_returning(self.db)
        .await
        .context("failed to batch upsert permissions")?;

        let inserted = match result {
            TryInsertResult::Inserted(rows) => rows,
            TryInsertResult::Conflicted | TryInsertResult::Empty => 0,
        };

        if inserted < requested {
            tracing::warn!(
                "Batch upsert skipped {} of {} permissions that already exist",
                requested - inserted,
                requested
            );
        }

        Ok(inserted)
    }

    /// Inserts a single permission.
    ///
    /// # Returns
    /// - `Ok(Permission)` - Created permission without its resource loaded
    /// - `Err(AppError::Persistence)` - Name already taken, unknown resource, or driver failure
    pub async fn create_permission(
        &self,
        param: CreatePermissionParam,
    ) -> Result<Permission, AppError> {
        let context = format!("failed to create permission {}", param.name);

        let entity = new_active_model(param)
            .insert(self.db)
            .await
            .context(context)?;

        Ok(Permission::from_entity(entity))
    }

    /// Saves every column of an existing permission except `created_at`.
    ///
    /// The `resource` association on `permission` is ignored; `resource_id` is
    /// what gets persisted.
    pub async fn update_permission(&self, permission: Permission) -> Result<Permission, AppError> {
        let id = permission.id;

        let entity = entity::permission::ActiveModel {
            id: ActiveValue::Unchanged(permission.id),
            name: ActiveValue::Set(permission.name),
            description: ActiveValue::Set(permission.description),
            action: ActiveValue::Set(permission.action),
            resource_id: ActiveValue::Set(permission.resource_id),
            is_system: ActiveValue::Set(permission.is_system),
            status: ActiveValue::Set(permission.status),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .update(self.db)
        .await
        .with_context(|| format!("failed to update permission {}", id))?;

        Ok(Permission::from_entity(entity))
    }

    /// Soft-deletes a permission.
    ///
    /// # Returns
    /// - `Ok(1)` - Permission marked deleted
    /// - `Ok(0)` - Permission absent or already deleted
    pub async fn delete_permission(&self, id: i32) -> Result<u64, AppError> {
        let result = soft_delete()
            .filter(Column::Id.eq(id))
            .filter(Column::Status.ne(Status::Deleted))
            .exec(self.db)
            .await
            .with_context(|| format!("failed to delete permission {}", id))?;

        Ok(result.rows_affected)
    }

    /// Soft-deletes every listed permission. An empty slice is a no-op.
    pub async fn batch_delete_permissions(&self, ids: &[i32]) -> Result<(), AppError> {
        if ids.is_empty() {
            return Ok(());
        }

        let result = soft_delete()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .filter(Column::Status.ne(Status::Deleted))
            .exec(self.db)
            .await
            .with_context(|| format!("failed to batch delete permissions {:?}", ids))?;

        tracing::debug!(
            "Soft-deleted {} of {} permissions",
            result.rows_affected,
            ids.len()
        );

        Ok(())
    }

    /// Gets a non-deleted permission by id with its resource loaded.
    ///
    /// # Returns
    /// - `Ok(Permission)` - Permission with `resource` populated
    /// - `Err(AppError::NotFound)` - Absent or deleted
    /// - `Err(AppError::Persistence)` - Driver failure
    pub async fn get_permission_by_id(&self, id: i32) -> Result<Permission, AppError> {
        entity::prelude::Permission::find_by_id(id)
            .filter(Column::Status.ne(Status::Deleted))
            .find_also_related(entity::prelude::Resource)
            .one(self.db)
            .await
            .with_context(|| format!("failed to get permission {}", id))?
            .map(|(permission, resource)| Permission::from_entity_with_resource(permission, resource))
            .ok_or_else(|| AppError::NotFound(format!("permission {} not found", id)))
    }

    /// Gets a non-deleted permission by name with its resource loaded.
    pub async fn get_permission_by_name(&self, name: &str) -> Result<Permission, AppError> {
        entity::prelude::Permission::find()
            .filter(Column::Name.eq(name))
            .filter(Column::Status.ne(Status::Deleted))
            .find_also_related(entity::prelude::Resource)
            .one(self.db)
            .await
            .with_context(|| format!("failed to get permission '{}'", name))?
            .map(|(permission, resource)| Permission::from_entity_with_resource(permission, resource))
            .ok_or_else(|| AppError::NotFound(format!("permission '{}' not found", name)))
    }

    /// Gets enabled permissions for an action, resources loaded, ordered by name.
    pub async fn get_permissions_by_action(
        &self,
        action: ActionName,
    ) -> Result<Vec<Permission>, AppError> {
        let rows = entity::prelude::Permission::find()
            .filter(Column::Action.eq(action))
            .filter(Column::Status.eq(Status::Enabled))
            .order_by_asc(Column::Name)
            .find_also_related(entity::prelude::Resource)
            .all(self.db)
            .await
            .with_context(|| format!("failed to get permissions for action {:?}", action))?;

        Ok(rows
            .into_iter()
            .map(|(permission, resource)| Permission::from_entity_with_resource(permission, resource))
            .collect())
    }

    /// Gets enabled permissions on a resource, ordered by action.
    ///
    /// The resource itself is not loaded; callers already know it.
    pub async fn get_permissions_by_resource(
        &self,
        resource_id: i32,
    ) -> Result<Vec<Permission>, AppError> {
        let entities = entity::prelude::Permission::find()
            .filter(Column::ResourceId.eq(resource_id))
            .filter(Column::Status.eq(Status::Enabled))
            .order_by_asc(Column::Action)
            .all(self.db)
            .await
            .with_context(|| format!("failed to get permissions for resource {}", resource_id))?;

        Ok(entities.into_iter().map(Permission::from_entity).collect())
    }

    /// Gets enabled system permissions with resources loaded, ordered by
    /// `(resource_id, action)`.
    pub async fn get_system_permissions(&self) -> Result<Vec<Permission>, AppError> {
        let rows = entity::prelude::Permission::find()
            .filter(system_enabled())
            .order_by_asc(Column::ResourceId)
            .order_by_asc(Column::Action)
            .find_also_related(entity::prelude::Resource)
            .all(self.db)
            .await
            .context("failed to get system permissions")?;

        Ok(rows
            .into_iter()
            .map(|(permission, resource)| Permission::from_entity_with_resource(permission, resource))
            .collect())
    }

    /// Lists one page of permissions matching the filter, newest update first.
    ///
    /// # Arguments
    /// - `limit` - Page size; `0` returns every matching row and ignores `offset`
    /// - `offset` - Number of rows to skip
    /// - `filter` - `None` fields leave the column unconstrained
    ///
    /// # Returns
    /// - `Ok((permissions, total))` - Page and the unpaged count for the same filter
    pub async fn list_permissions(
        &self,
        limit: u64,
        offset: u64,
        filter: &PermissionFilter,
    ) -> Result<(Vec<Permission>, u64), AppError> {
        let mut condition = Condition::all();
        if let Some(action) = filter.action {
            condition = condition.add(Column::Action.eq(action));
        }
        if let Some(is_system) = filter.is_system {
            condition = condition.add(Column::IsSystem.eq(is_system));
        }
        if let Some(status) = filter.status {
            condition = condition.add(Column::Status.eq(status));
        }

        let total = entity::prelude::Permission::find()
            .filter(condition.clone())
            .count(self.db)
            .await
            .context("failed to count permissions")?;

        let mut query = entity::prelude::Permission::find()
            .filter(condition)
            .order_by_desc(Column::UpdatedAt);
        if limit > 0 {
            query = query.limit(limit).offset(offset);
        }

        let entities = query
            .all(self.db)
            .await
            .context("failed to list permissions")?;

        Ok((
            entities.into_iter().map(Permission::from_entity).collect(),
            total,
        ))
    }

    /// Gets enabled permissions whose id is in `ids`. Empty input returns empty.
    pub async fn list_permissions_by_id(&self, ids: &[i32]) -> Result<Vec<Permission>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Permission::find()
            .filter(Column::Id.is_in(ids.iter().copied()))
            .filter(Column::Status.eq(Status::Enabled))
            .all(self.db)
            .await
            .with_context(|| format!("failed to list permissions {:?}", ids))?;

        Ok(entities.into_iter().map(Permission::from_entity).collect())
    }

    /// Gets enabled permissions whose name is in `names`. Empty input returns empty.
    pub async fn list_permissions_by_names(
        &self,
        names: &[String],
    ) -> Result<Vec<Permission>, AppError> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Permission::find()
            .filter(Column::Name.is_in(names.iter().map(String::as_str)))
            .filter(Column::Status.eq(Status::Enabled))
            .all(self.db)
            .await
            .with_context(|| format!("failed to list permissions named {:?}", names))?;

        Ok(entities.into_iter().map(Permission::from_entity).collect())
    }

    /// Gets enabled system permissions without resources, in storage order.
    pub async fn list_system_permissions(&self) -> Result<Vec<Permission>, AppError> {
        let entities = entity::prelude::Permission::find()
            .filter(system_enabled())
            .all(self.db)
            .await
            .context("failed to list system permissions")?;

        Ok(entities.into_iter().map(Permission::from_entity).collect())
    }
}

fn new_active_model(param: CreatePermissionParam) -> entity::permission::ActiveModel {
    let now = Utc::now();

    entity::permission::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(param.name),
        description: ActiveValue::Set(param.description),
        action: ActiveValue::Set(param.action),
        resource_id: ActiveValue::Set(param.resource_id),
        is_system: ActiveValue::Set(param.is_system),
        status: ActiveValue::Set(param.status),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}

fn soft_delete() -> sea_orm::UpdateMany<entity::permission::Entity> {
    entity::prelude::Permission::update_many()
        .col_expr(Column::Status, Expr::value(Status::Deleted))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
}

fn system_enabled() -> Condition {
    Condition::all()
        .add(Column::IsSystem.eq(true))
        .add(Column::Status.eq(Status::Enabled))
}
