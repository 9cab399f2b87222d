use super::*;

/// Tests fetching trainings inside a time window.
///
/// Verifies that only trainings starting inside the inclusive window come
/// back, earliest first.
///
/// Expected: Ok with the two in-window trainings in start order
#[tokio::test]
async fn returns_only_window_rows_ordered() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let in_window_late = factory::training::TrainingFactory::new(db)
        .start_time(now + Duration::minutes(45))
        .end_time(now + Duration::minutes(105))
        .build()
        .await?;
    let in_window_early = factory::training::TrainingFactory::new(db)
        .start_time(now + Duration::minutes(10))
        .end_time(now + Duration::minutes(70))
        .build()
        .await?;
    factory::training::TrainingFactory::new(db)
        .start_time(now + Duration::hours(3))
        .end_time(now + Duration::hours(4))
        .build()
        .await?;

    let repo = TrainingRepository::new(db);
    let due = repo
        .get_starting_between(now, now + Duration::hours(1))
        .await?;

    assert_eq!(due.len(), 2);
    assert_eq!(due[0].id, in_window_early.id);
    assert_eq!(due[1].id, in_window_late.id);

    Ok(())
}

/// Tests that the window bounds are inclusive.
///
/// Expected: Ok with a training starting exactly at the upper bound included
#[tokio::test]
async fn includes_boundary_start() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let boundary = now + Duration::hours(1);
    let training = factory::training::TrainingFactory::new(db)
        .start_time(boundary)
        .end_time(boundary + Duration::hours(1))
        .build()
        .await?;

    let repo = TrainingRepository::new(db);
    let due = repo.get_starting_between(now, boundary).await?;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, training.id);

    Ok(())
}
