//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a resource and an enabled permission bound to it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((resource, permission))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_permission_with_resource(
    db: &DatabaseConnection,
) -> Result<(entity::resource::Model, entity::permission::Model), DbErr> {
    let resource = crate::factory::resource::create_resource(db).await?;
    let permission = crate::factory::permission::create_permission(db, resource.id).await?;

    Ok((resource, permission))
}
