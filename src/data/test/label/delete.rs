use super::*;

/// Tests soft-deleting a label.
///
/// Verifies that the row remains in storage with status `Deleted`.
///
/// Expected: Ok(1)
#[tokio::test]
async fn soft_deletes_label() -> TestResult {
    let test = TestBuilder::new().with_label_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = LabelFactory::new(db).build().await?;

    let repo = LabelRepository::new(db);
    let affected = repo.delete_label(entity.id).await?;

    assert_eq!(affected, 1);
    let label = repo.get_label_by_id(entity.id).await?;
    assert_eq!(label.status, Status::Deleted);

    Ok(())
}

/// Tests deleting a label twice.
///
/// Verifies that the second delete does not touch the already-deleted row.
///
/// Expected: Ok(0) on the second call
#[tokio::test]
async fn second_delete_affects_nothing() -> TestResult {
    let test = TestBuilder::new().with_label_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = LabelFactory::new(db).build().await?;

    let repo = LabelRepository::new(db);
    assert_eq!(repo.delete_label(entity.id).await?, 1);
    assert_eq!(repo.delete_label(entity.id).await?, 0);

    Ok(())
}

/// Tests deleting a label id that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_missing_label() -> TestResult {
    let test = TestBuilder::new().with_label_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LabelRepository::new(db);
    let affected = repo.delete_label(999).await?;

    assert_eq!(affected, 0);

    Ok(())
}

/// Tests natural-key lookup after deletion.
///
/// Verifies that the default selector hides the deleted label while an
/// explicit `Deleted` selector still finds it.
///
/// Expected: NotFound by default, Ok with `Exact(Deleted)`
#[tokio::test]
async fn deleted_label_only_visible_with_deleted_selector() -> TestResult {
    let test = TestBuilder::new().with_label_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = LabelFactory::new(db).key("env").value("prod").build().await?;

    let repo = LabelRepository::new(db);
    repo.delete_label(entity.id).await?;

    let hidden = repo
        .get_label_by_key_and_value("env", "prod", StatusSelector::Default)
        .await;
    assert!(hidden.unwrap_err().is_not_found());

    let found = repo
        .get_label_by_key_and_value("env", "prod", StatusSelector::Exact(Status::Deleted))
        .await?;
    assert_eq!(found.id, entity.id);
    assert_eq!(found.status, Status::Deleted);

    Ok(())
}
