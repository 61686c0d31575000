use super::*;

/// Tests saving a mix of existing and new labels.
///
/// Verifies that rows with an id are overwritten and rows without one are
/// inserted, with results returned in input order.
///
/// Expected: Ok with two saved labels
#[tokio::test]
async fn updates_existing_and_inserts_new() -> TestResult {
    let test = TestBuilder::new().with_label_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created_at = Utc::now() - Duration::days(1);
    let entity = LabelFactory::new(db)
        .key("env")
        .value("prod")
        .created_at(created_at)
        .build()
        .await?;

    let repo = LabelRepository::new(db);
    let mut existing = SaveLabelParam::from(repo.get_label_by_id(entity.id).await?);
    existing.description = "production".to_string();
    existing.usage_count = 7;

    let fresh = SaveLabelParam::from(CreateLabelParam::new("team", "core", LabelCategory::Team));

    let saved = repo.batch_update_labels(vec![existing, fresh]).await?;

    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].id, entity.id);
    assert_eq!(saved[0].description, "production");
    assert_eq!(saved[0].usage_count, 7);
    assert_eq!(saved[0].created_at, entity.created_at);
    assert!(saved[0].updated_at > created_at);
    assert_ne!(saved[1].id, entity.id);
    assert_eq!(saved[1].key, "team");

    assert_eq!(repo.count_labels(&LabelFilter::default()).await?, 2);

    Ok(())
}

/// Tests saving a label id that does not exist.
///
/// Expected: Err(Persistence)
#[tokio::test]
async fn fails_for_missing_id() -> TestResult {
    let test = TestBuilder::new().with_label_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut param = SaveLabelParam::from(CreateLabelParam::new("env", "prod", LabelCategory::Environment));
    param.id = Some(404);

    let repo = LabelRepository::new(db);
    let result = repo.batch_update_labels(vec![param]).await;

    let err = result.unwrap_err();
    assert!(!err.is_validation());
    assert!(!err.is_not_found());

    Ok(())
}

/// Tests saving an empty batch.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_empty_batch() -> TestResult {
    let test = TestBuilder::new().with_label_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LabelRepository::new(db);
    let result = repo.batch_update_labels(Vec::new()).await;

    assert!(result.unwrap_err().is_validation());

    Ok(())
}

/// Tests a batch where one row carries a negative usage count.
///
/// Verifies that neither the update nor the insert in the batch is applied.
///
/// Expected: Err(Validation) with storage unchanged
#[tokio::test]
async fn rejects_negative_usage_count() -> TestResult {
    let test = TestBuilder::new().with_label_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = LabelFactory::new(db).usage_count(5).build().await?;

    let repo = LabelRepository::new(db);
    let mut existing = SaveLabelParam::from(repo.get_label_by_id(entity.id).await?);
    existing.usage_count = 6;
    let mut fresh = SaveLabelParam::from(CreateLabelParam::new("team", "core", LabelCategory::Team));
    fresh.usage_count = -2;

    let result = repo.batch_update_labels(vec![existing, fresh]).await;

    assert!(result.unwrap_err().is_validation());
    assert_eq!(repo.get_label_by_id(entity.id).await?.usage_count, 5);
    assert_eq!(repo.count_labels(&LabelFilter::default()).await?, 1);

    Ok(())
}
