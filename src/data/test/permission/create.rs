use super::*;

/// Tests creating a permission.
///
/// Expected: Ok with the permission persisted and no resource preloaded
#[tokio::test]
async fn creates_permission() -> TestResult {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let resource = factory::create_resource(db).await?;

    let repo = PermissionRepository::new(db);
    let permission = repo
        .create_permission(CreatePermissionParam {
            description: "Delete labels".to_string(),
            is_system: true,
            ..CreatePermissionParam::new("labels:delete", ActionName::Delete, resource.id)
        })
        .await?;

    assert!(permission.id > 0);
    assert_eq!(permission.name, "labels:delete");
    assert_eq!(permission.action, ActionName::Delete);
    assert_eq!(permission.resource_id, resource.id);
    assert!(permission.is_system);
    assert_eq!(permission.status, Status::Enabled);
    assert!(permission.resource.is_none());

    Ok(())
}

/// Tests creating a permission with a taken name.
///
/// Expected: Err(Persistence)
#[tokio::test]
async fn fails_for_duplicate_name() -> TestResult {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let resource = factory::create_resource(db).await?;
    PermissionFactory::new(db, resource.id)
        .name("labels:read")
        .build()
        .await?;

    let repo = PermissionRepository::new(db);
    let result = repo
        .create_permission(CreatePermissionParam::new(
            "labels:read",
            ActionName::Read,
            resource.id,
        ))
        .await;

    assert!(result.is_err());

    Ok(())
}
