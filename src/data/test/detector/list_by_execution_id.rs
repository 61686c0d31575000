use super::*;

/// Tests listing findings of one execution.
///
/// Expected: Ok with only that execution's findings
#[tokio::test]
async fn lists_results_for_execution() -> TestResult {
    let test = TestBuilder::new().with_detector_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    DetectorResultFactory::new(db, 1)
        .name("cpu")
        .passed(true)
        .build()
        .await?;
    DetectorResultFactory::new(db, 1)
        .name("memory")
        .passed(false)
        .message("oom risk")
        .build()
        .await?;
    factory::create_detector_result(db, 2).await?;

    let repo = DetectorRepository::new(db);
    let mut results = repo.list_detector_results_by_execution_id(1).await?;
    results.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.execution_id == 1));
    assert_eq!(results[0].name, "cpu");
    assert_eq!(results[1].message.as_deref(), Some("oom risk"));

    Ok(())
}

/// Tests an execution without findings.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_for_unknown_execution() -> TestResult {
    let test = TestBuilder::new().with_detector_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_detector_result(db, 3).await?;

    let repo = DetectorRepository::new(db);
    let results = repo.list_detector_results_by_execution_id(4).await?;

    assert!(results.is_empty());

    Ok(())
}
