use super::*;

/// Tests recording a detector finding.
///
/// Expected: Ok with the finding persisted and readable by execution
#[tokio::test]
async fn creates_detector_result() -> TestResult {
    let test = TestBuilder::new().with_detector_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DetectorRepository::new(db);
    let result = repo
        .create_detector_result(CreateDetectorResultParam {
            execution_id: 11,
            name: "disk-pressure".to_string(),
            passed: false,
            message: Some("usage above 90%".to_string()),
        })
        .await?;

    assert!(result.id > 0);
    assert_eq!(result.execution_id, 11);
    assert!(!result.passed);
    assert_eq!(result.message.as_deref(), Some("usage above 90%"));

    let listed = repo.list_detector_results_by_execution_id(11).await?;
    assert_eq!(listed, vec![result]);

    Ok(())
}
