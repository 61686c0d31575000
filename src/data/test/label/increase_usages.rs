use super::*;

/// Tests incrementing usage counts of several labels.
///
/// Expected: Ok with listed labels incremented and others unchanged
#[tokio::test]
async fn increments_listed_labels() -> TestResult {
    let test = TestBuilder::new().with_label_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = LabelFactory::new(db).usage_count(1).build().await?;
    let second = LabelFactory::new(db).usage_count(10).build().await?;
    let other = LabelFactory::new(db).usage_count(3).build().await?;

    let repo = LabelRepository::new(db);
    repo.batch_increase_label_usages(&[first.id, second.id], 2).await?;

    assert_eq!(repo.get_label_by_id(first.id).await?.usage_count, 3);
    assert_eq!(repo.get_label_by_id(second.id).await?.usage_count, 12);
    assert_eq!(repo.get_label_by_id(other.id).await?.usage_count, 3);

    Ok(())
}

/// Tests incrementing by zero.
///
/// Expected: Ok with the count unchanged
#[tokio::test]
async fn zero_increment_keeps_count() -> TestResult {
    let test = TestBuilder::new().with_label_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = LabelFactory::new(db).usage_count(4).build().await?;

    let repo = LabelRepository::new(db);
    repo.batch_increase_label_usages(&[entity.id], 0).await?;

    assert_eq!(repo.get_label_by_id(entity.id).await?.usage_count, 4);

    Ok(())
}

/// Tests incrementing with no ids.
///
/// Expected: Ok with nothing changed
#[tokio::test]
async fn empty_ids_is_noop() -> TestResult {
    let test = TestBuilder::new().with_label_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = LabelFactory::new(db).usage_count(4).build().await?;

    let repo = LabelRepository::new(db);
    repo.batch_increase_label_usages(&[], 9).await?;

    assert_eq!(repo.get_label_by_id(entity.id).await?.usage_count, 4);

    Ok(())
}

/// Tests that an increase followed by an equal decrease restores every count.
///
/// Expected: Ok with the original counts
#[tokio::test]
async fn increase_then_decrease_restores_counts() -> TestResult {
    let test = TestBuilder::new().with_label_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for usage in [9, 4, 2, 0] {
        ids.push(LabelFactory::new(db).usage_count(usage).build().await?.id);
    }

    let repo = LabelRepository::new(db);
    repo.batch_increase_label_usages(&ids, 3).await?;
    repo.batch_decrease_label_usages(&ids, 3).await?;

    let mut counts = Vec::new();
    for id in &ids {
        counts.push(repo.get_label_by_id(*id).await?.usage_count);
    }

    assert_eq!(counts, vec![9, 4, 2, 0]);

    Ok(())
}
