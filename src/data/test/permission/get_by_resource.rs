use super::*;

/// Tests getting enabled permissions on a resource.
///
/// Verifies action ordering and that other resources and disabled rows are
/// excluded.
///
/// Expected: Ok with permissions sorted by action
#[tokio::test]
async fn gets_enabled_permissions_sorted_by_action() -> TestResult {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let resource = factory::create_resource(db).await?;
    let other = factory::create_resource(db).await?;

    PermissionFactory::new(db, resource.id)
        .action(ActionName::Update)
        .build()
        .await?;
    PermissionFactory::new(db, resource.id)
        .action(ActionName::Create)
        .build()
        .await?;
    PermissionFactory::new(db, resource.id)
        .action(ActionName::Delete)
        .status(Status::Disabled)
        .build()
        .await?;
    PermissionFactory::new(db, other.id)
        .action(ActionName::Read)
        .build()
        .await?;

    let repo = PermissionRepository::new(db);
    let permissions = repo.get_permissions_by_resource(resource.id).await?;

    let actions: Vec<ActionName> = permissions.iter().map(|p| p.action).collect();
    assert_eq!(actions, vec![ActionName::Create, ActionName::Update]);
    assert!(permissions.iter().all(|p| p.resource.is_none()));

    Ok(())
}

/// Tests a resource without permissions.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_unused_resource() -> TestResult {
    let test = TestBuilder::new()
        .with_permission_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let resource = factory::create_resource(db).await?;

    let repo = PermissionRepository::new(db);
    let permissions = repo.get_permissions_by_resource(resource.id).await?;

    assert!(permissions.is_empty());

    Ok(())
}
