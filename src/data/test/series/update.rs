use super::*;

/// Tests replacing a series definition.
///
/// Verifies that rule, timezone, seed window and bounds are all replaced
/// and the update timestamp moves forward.
///
/// Expected: Ok with the new definition stored
#[tokio::test]
async fn updates_definition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let series = factory::training_series::create_series(db).await?;

    let new_start = series.start_time + Duration::days(1);
    let repo = TrainingSeriesRepository::new(db);
    let updated = repo
        .update(
            series.id,
            UpdateSeriesParam {
                rule: "FREQ=DAILY".to_string(),
                timezone: "America/New_York".to_string(),
                start_time: new_start,
                end_time: new_start + Duration::minutes(45),
                until: None,
                count: Some(10),
            },
        )
        .await?;

    assert_eq!(updated.rule, "FREQ=DAILY");
    assert_eq!(updated.timezone, "America/New_York");
    assert_eq!(updated.start_time, new_start);
    assert_eq!(updated.count, Some(10));
    assert!(updated.until.is_none());
    assert!(updated.updated_at >= series.updated_at);

    Ok(())
}

/// Tests updating a series that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start_time = Utc::now();
    let repo = TrainingSeriesRepository::new(db);
    let result = repo
        .update(
            999999,
            UpdateSeriesParam {
                rule: "FREQ=DAILY".to_string(),
                timezone: "UTC".to_string(),
                start_time,
                end_time: start_time + Duration::hours(1),
                until: None,
                count: None,
            },
        )
        .await;

    match result {
        Err(DbErr::RecordNotFound(_)) => (),
        _ => panic!("Expected RecordNotFound error"),
    }

    Ok(())
}
