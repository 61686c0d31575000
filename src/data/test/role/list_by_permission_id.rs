use super::*;

/// Tests listing roles granted a permission.
///
/// Attaches one permission to an enabled role and a deleted role.
///
/// Expected: Ok with only the enabled role
#[tokio::test]
async fn excludes_deleted_roles() -> TestResult {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, permission) = factory::helpers::create_permission_with_resource(db).await?;
    let active = factory::create_role(db).await?;
    let deleted = RoleFactory::new(db).status(Status::Deleted).build().await?;
    factory::create_role_permission(db, active.id, permission.id).await?;
    factory::create_role_permission(db, deleted.id, permission.id).await?;

    let repo = RoleRepository::new(db);
    let roles = repo.list_roles_by_permission_id(permission.id).await?;

    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].id, active.id);

    Ok(())
}

/// Tests that disabled roles are still returned and unrelated roles are not.
///
/// Expected: Ok with both roles holding the permission
#[tokio::test]
async fn returns_only_roles_holding_permission() -> TestResult {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let resource = factory::create_resource(db).await?;
    let permission = factory::create_permission(db, resource.id).await?;
    let other_permission = factory::create_permission(db, resource.id).await?;

    let enabled = factory::create_role(db).await?;
    let disabled = RoleFactory::new(db).status(Status::Disabled).build().await?;
    let unrelated = factory::create_role(db).await?;
    factory::create_role_permission(db, enabled.id, permission.id).await?;
    factory::create_role_permission(db, disabled.id, permission.id).await?;
    factory::create_role_permission(db, unrelated.id, other_permission.id).await?;

    let repo = RoleRepository::new(db);
    let mut ids: Vec<i32> = repo
        .list_roles_by_permission_id(permission.id)
        .await?
        .into_iter()
        .map(|role| role.id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec![enabled.id, disabled.id]);

    Ok(())
}

/// Tests a permission id with no grants.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_ungranted_permission() -> TestResult {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_role(db).await?;

    let repo = RoleRepository::new(db);
    let roles = repo.list_roles_by_permission_id(12345).await?;

    assert!(roles.is_empty());

    Ok(())
}
