use super::*;

/// Tests listing system permissions without preloading.
///
/// Expected: Ok with the enabled system permissions and no resources attached
#[tokio::test]
async fn lists_enabled_system_permissions() -> TestResult {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let resource = factory::create_resource(db).await?;
    let system = PermissionFactory::new(db, resource.id)
        .is_system(true)
        .build()
        .await?;
    PermissionFactory::new(db, resource.id)
        .is_system(true)
        .status(Status::Disabled)
        .build()
        .await?;
    factory::create_permission(db, resource.id).await?;

    let repo = PermissionRepository::new(db);
    let permissions = repo.list_system_permissions().await?;

    assert_eq!(permissions.len(), 1);
    assert_eq!(permissions[0].id, system.id);
    assert!(permissions[0].resource.is_none());

    Ok(())
}
