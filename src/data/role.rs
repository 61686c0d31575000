use entity::sea_orm_active_enums::Status;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QuerySelect,
    RelationTrait, TryInsertResult,
};

use crate::{
    error::{AppError, DbResultExt},
    model::role::Role,
};

/// Repository for roles and their permission grants.
pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every non-deleted role that has been granted a permission.
    ///
    /// Runs as one join over `role_permissions`. The permission row itself is not
    /// checked, so an unknown or deleted permission simply yields its remaining grants.
    ///
    /// # Arguments
    /// - `permission_id` - Permission to look up grants for
    ///
    /// # Returns
    /// - `Ok(Vec<Role>)` - Roles holding the permission; empty when none
    /// - `Err(AppError::Persistence)` - Driver failure
    pub async fn list_roles_by_permission_id(
        &self,
        permission_id: i32,
    ) -> Result<Vec<Role>, AppError> {
        let entities = entity::prelude::Role::find()
            .join(
                JoinType::InnerJoin,
                entity::role::Relation::RolePermission.def(),
            )
            .filter(entity::role_permission::Column::PermissionId.eq(permission_id))
            .filter(entity::role::Column::Status.ne(Status::Deleted))
            .all(self.db)
            .await
            .with_context(|| format!("failed to list roles for permission {}", permission_id))?;

        Ok(entities.into_iter().map(Role::from_entity).collect())
    }

    /// Grants permissions to a role, ignoring grants that already exist.
    ///
    /// An empty slice is a no-op.
    pub async fn assign_permissions(
        &self,
        role_id: i32,
        permission_ids: &[i32],
    ) -> Result<(), AppError> {
        if permission_ids.is_empty() {
            return Ok(());
        }

        let result = entity::prelude::RolePermission::insert_many(permission_ids.iter().map(
            |permission_id| entity::role_permission::ActiveModel {
                role_id: ActiveValue::Set(role_id),
                permission_id: ActiveValue::Set(*permission_id),
            },
        ))
        .on_conflict(
            OnConflict::columns([
                entity::role_permission::Column::RoleId,
                entity::role_permission::Column::PermissionId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .do_nothing()
        .exec_without_returning(self.db)
        .await
        .with_context(|| format!("failed to assign permissions to role {}", role_id))?;

        if let TryInsertResult::Inserted(rows) = result {
            tracing::debug!("Granted {} permissions to role {}", rows, role_id);
        }

        Ok(())
    }
}
