use super::*;

/// Tests decrementing below zero.
///
/// Verifies that a label with usage 2 decremented by 5 floors at 0 instead of
/// going negative.
///
/// Expected: Ok with usage_count 0
#[tokio::test]
async fn floors_at_zero() -> TestResult {
    let test = TestBuilder::new().with_label_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = LabelFactory::new(db).usage_count(2).build().await?;

    let repo = LabelRepository::new(db);
    repo.batch_decrease_label_usages(&[entity.id], 5).await?;

    assert_eq!(repo.get_label_by_id(entity.id).await?.usage_count, 0);

    Ok(())
}

/// Tests decrementing rows that end up on both sides of the floor.
///
/// Expected: Ok with 10 -> 7 and 1 -> 0
#[tokio::test]
async fn decrements_each_row_independently() -> TestResult {
    let test = TestBuilder::new().with_label_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let high = LabelFactory::new(db).usage_count(10).build().await?;
    let low = LabelFactory::new(db).usage_count(1).build().await?;

    let repo = LabelRepository::new(db);
    repo.batch_decrease_label_usages(&[high.id, low.id], 3).await?;

    assert_eq!(repo.get_label_by_id(high.id).await?.usage_count, 7);
    assert_eq!(repo.get_label_by_id(low.id).await?.usage_count, 0);

    Ok(())
}

/// Tests decrementing to exactly zero.
///
/// Expected: Ok with usage_count 0
#[tokio::test]
async fn decrements_to_exactly_zero() -> TestResult {
    let test = TestBuilder::new().with_label_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = LabelFactory::new(db).usage_count(3).build().await?;

    let repo = LabelRepository::new(db);
    repo.batch_decrease_label_usages(&[entity.id], 3).await?;

    assert_eq!(repo.get_label_by_id(entity.id).await?.usage_count, 0);

    Ok(())
}

/// Tests decrementing with no ids.
///
/// Expected: Ok with nothing changed
#[tokio::test]
async fn empty_ids_is_noop() -> TestResult {
    let test = TestBuilder::new().with_label_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = LabelFactory::new(db).usage_count(4).build().await?;

    let repo = LabelRepository::new(db);
    repo.batch_decrease_label_usages(&[], 9).await?;

    assert_eq!(repo.get_label_by_id(entity.id).await?.usage_count, 4);

    Ok(())
}
