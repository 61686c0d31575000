use super::*;

/// Tests the usage count CHECK constraint of the migrated schema.
///
/// Writes a negative count directly through the factory, bypassing the
/// repository, so only the database can refuse it.
///
/// Expected: Err from the insert
#[tokio::test]
async fn rejects_negative_usage_count_at_database_level() -> TestResult {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LabelFactory::new(db).usage_count(-1).build().await;

    assert!(result.is_err());
    assert!(entity::prelude::Label::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests conflict handling against the migrated `idx_key_value_unique` index.
///
/// Expected: second upsert inserts nothing and the decrement floors at 0
#[tokio::test]
async fn upsert_and_counters_work_on_migrated_schema() -> TestResult {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let batch = vec![
        CreateLabelParam::new("env", "prod", LabelCategory::Environment),
        CreateLabelParam::new("env", "dev", LabelCategory::Environment),
    ];

    let repo = LabelRepository::new(db);
    assert_eq!(repo.batch_upsert_labels(batch.clone()).await?, 2);
    assert_eq!(repo.batch_upsert_labels(batch).await?, 0);

    let prod = repo
        .get_label_by_key_and_value("env", "prod", StatusSelector::Default)
        .await?;
    repo.batch_increase_label_usages(&[prod.id], 2).await?;
    repo.batch_decrease_label_usages(&[prod.id], 5).await?;

    assert_eq!(repo.get_label_by_id(prod.id).await?.usage_count, 0);
    assert_eq!(repo.count_labels(&LabelFilter::default()).await?, 2);

    Ok(())
}

/// Tests that a single create hits the migrated unique index.
///
/// Expected: Err(Persistence) on the duplicate pair
#[tokio::test]
async fn create_conflicts_on_migrated_unique_index() -> TestResult {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LabelRepository::new(db);
    repo.create_label(CreateLabelParam::new("env", "prod", LabelCategory::Environment))
        .await?;
    let duplicate = repo
        .create_label(CreateLabelParam::new("env", "prod", LabelCategory::Environment))
        .await;

    let err = duplicate.unwrap_err();
    assert!(!err.is_validation());
    assert!(!err.is_not_found());

    Ok(())
}
