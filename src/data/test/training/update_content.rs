use super::*;

/// Tests editing an occurrence's content fields.
///
/// Verifies that the repository updates title, description and times and
/// raises the detached flag in the same write.
///
/// Expected: Ok with content updated and detached set
#[tokio::test]
async fn updates_content_and_sets_detached() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (series, trainings) = factory::helpers::create_series_with_occurrences(db, 2).await?;
    let occurrence = &trainings[1];
    assert!(!occurrence.detached);

    let new_start = series.start_time + Duration::days(1);
    let repo = TrainingRepository::new(db);
    let updated = repo
        .update_content(
            occurrence.id,
            UpdateTrainingParam {
                title: "Moved session".to_string(),
                description: None,
                start_time: new_start,
                end_time: new_start + Duration::hours(2),
            },
        )
        .await?;

    assert_eq!(updated.title, "Moved session");
    assert!(updated.description.is_none());
    assert_eq!(updated.start_time, new_start);
    assert!(updated.detached);
    assert!(!updated.group_detached);
    assert_eq!(updated.series_id, Some(series.id));
    assert_eq!(updated.sequence, occurrence.sequence);

    Ok(())
}

/// Tests editing a training that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_training() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start_time = Utc::now() + Duration::hours(1);
    let repo = TrainingRepository::new(db);
    let result = repo
        .update_content(
            999999,
            UpdateTrainingParam {
                title: "Missing".to_string(),
                description: None,
                start_time,
                end_time: start_time + Duration::hours(1),
            },
        )
        .await;

    match result {
        Err(DbErr::RecordNotFound(_)) => (),
        _ => panic!("Expected RecordNotFound error"),
    }

    Ok(())
}
