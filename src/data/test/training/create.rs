use super::*;

/// Tests creating a standalone training.
///
/// Verifies that the repository creates a training with the given content
/// and times, no series linkage, and both detachment flags cleared.
///
/// Expected: Ok with standalone training created
#[tokio::test]
async fn creates_standalone_training() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start_time = Utc::now() + Duration::hours(1);
    let end_time = start_time + Duration::minutes(90);

    let repo = TrainingRepository::new(db);
    let result = repo
        .create(
            "Endurance block".to_string(),
            Some("Long intervals".to_string()),
            start_time,
            end_time,
        )
        .await;

    assert!(result.is_ok());
    let training = result.unwrap();
    assert_eq!(training.title, "Endurance block");
    assert_eq!(training.description, Some("Long intervals".to_string()));
    assert_eq!(training.start_time, start_time);
    assert_eq!(training.end_time, end_time);
    assert!(training.series_id.is_none());
    assert!(training.sequence.is_none());
    assert!(!training.detached);
    assert!(!training.group_detached);

    Ok(())
}

/// Tests inserting a prepared row without timestamps.
///
/// Verifies that the repository stamps created_at and updated_at on insert
/// so callers can hand over rows that only carry domain fields.
///
/// Expected: Ok with timestamps stamped
#[tokio::test]
async fn insert_stamps_timestamps() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start_time = Utc::now() + Duration::hours(2);
    let row = entity::training::ActiveModel {
        title: ActiveValue::Set("Sprint drills".to_string()),
        description: ActiveValue::Set(None),
        start_time: ActiveValue::Set(start_time),
        end_time: ActiveValue::Set(start_time + Duration::hours(1)),
        detached: ActiveValue::Set(false),
        group_detached: ActiveValue::Set(false),
        ..Default::default()
    };

    let repo = TrainingRepository::new(db);
    let inserted = repo.insert(row).await?;

    assert_eq!(inserted.title, "Sprint drills");
    assert!(inserted.created_at <= Utc::now());
    assert_eq!(inserted.created_at, inserted.updated_at);

    Ok(())
}

/// Tests batch-inserting occurrence rows for a series.
///
/// Verifies that all rows are persisted and come back in sequence order
/// through get_by_series_id.
///
/// Expected: Ok with both occurrences stored in order
#[tokio::test]
async fn insert_many_persists_series_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let series = factory::training_series::create_series(db).await?;

    let rows = (1..=2)
        .map(|sequence| {
            let start_time = series.start_time + Duration::weeks(sequence as i64 - 1);
            entity::training::ActiveModel {
                series_id: ActiveValue::Set(Some(series.id)),
                sequence: ActiveValue::Set(Some(sequence)),
                title: ActiveValue::Set("Weekly session".to_string()),
                description: ActiveValue::Set(None),
                start_time: ActiveValue::Set(start_time),
                end_time: ActiveValue::Set(start_time + Duration::hours(1)),
                detached: ActiveValue::Set(false),
                group_detached: ActiveValue::Set(false),
                ..Default::default()
            }
        })
        .collect::<Vec<_>>();

    let repo = TrainingRepository::new(db);
    repo.insert_many(rows).await?;

    let occurrences = repo.get_by_series_id(series.id).await?;
    assert_eq!(occurrences.len(), 2);
    assert_eq!(occurrences[0].sequence, Some(1));
    assert_eq!(occurrences[1].sequence, Some(2));
    assert!(occurrences[0].start_time < occurrences[1].start_time);

    Ok(())
}
