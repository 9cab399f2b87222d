use super::*;

/// Tests creating a count-bounded series.
///
/// Verifies that the repository persists the rule, timezone, seed window
/// and count bound.
///
/// Expected: Ok with series created
#[tokio::test]
async fn creates_series_with_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start_time = Utc::now() + Duration::hours(1);
    let repo = TrainingSeriesRepository::new(db);
    let result = repo
        .create(CreateSeriesParam {
            rule: "FREQ=WEEKLY;BYDAY=MO,WE".to_string(),
            timezone: "Europe/Berlin".to_string(),
            start_time,
            end_time: start_time + Duration::hours(2),
            until: None,
            count: Some(8),
        })
        .await;

    assert!(result.is_ok());
    let series = result.unwrap();
    assert_eq!(series.rule, "FREQ=WEEKLY;BYDAY=MO,WE");
    assert_eq!(series.timezone, "Europe/Berlin");
    assert_eq!(series.start_time, start_time);
    assert_eq!(series.count, Some(8));
    assert!(series.until.is_none());

    Ok(())
}

/// Tests creating an until-bounded series.
///
/// Expected: Ok with the until bound stored and no count
#[tokio::test]
async fn creates_series_with_until() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start_time = Utc::now() + Duration::hours(1);
    let until = start_time + Duration::weeks(6);
    let repo = TrainingSeriesRepository::new(db);
    let series = repo
        .create(CreateSeriesParam {
            rule: "FREQ=WEEKLY".to_string(),
            timezone: "UTC".to_string(),
            start_time,
            end_time: start_time + Duration::hours(1),
            until: Some(until),
            count: None,
        })
        .await?;

    assert_eq!(series.until, Some(until));
    assert!(series.count.is_none());

    Ok(())
}
