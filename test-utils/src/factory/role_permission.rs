//! Factory for role-permission join rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Grants a permission to a role.
///
/// # Arguments
/// - `db` - Database connection
/// - `role_id` - ID of an existing role
/// - `permission_id` - ID of an existing permission
///
/// # Returns
/// - `Ok(entity::role_permission::Model)` - Created join row
/// - `Err(DbErr)` - Database error during insert (including a duplicate grant)
pub async fn create_role_permission(
    db: &DatabaseConnection,
    role_id: i32,
    permission_id: i32,
) -> Result<entity::role_permission::Model, DbErr> {
    entity::role_permission::ActiveModel {
        role_id: ActiveValue::Set(role_id),
        permission_id: ActiveValue::Set(permission_id),
    }
    .insert(db)
    .await
}
