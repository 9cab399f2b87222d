use super::*;

/// Tests fetching a series by ID.
///
/// Expected: Ok(Some) with the stored series
#[tokio::test]
async fn returns_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let series = factory::training_series::create_series(db).await?;

    let repo = TrainingSeriesRepository::new(db);
    let found = repo.get_by_id(series.id).await?;

    assert_eq!(found, Some(series));

    Ok(())
}

/// Tests fetching a series that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TrainingSeriesRepository::new(db);
    let found = repo.get_by_id(999999).await?;

    assert!(found.is_none());

    Ok(())
}
