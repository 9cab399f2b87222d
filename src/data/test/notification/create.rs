use super::*;

/// Tests recording a dispatched notification batch.
///
/// Verifies that the log row stores the counts and makes the training show
/// up as already notified for that kind, but not for other kinds.
///
/// Expected: Ok with the batch recorded and existence scoped by kind
#[tokio::test]
async fn records_batch_and_scopes_existence_by_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let training = factory::training::create_training(db).await?;

    let repo = TrainingNotificationRepository::new(db);
    let record = repo
        .create(training.id, "reminder".to_string(), 5, 1)
        .await?;

    assert_eq!(record.training_id, training.id);
    assert_eq!(record.kind, "reminder");
    assert_eq!(record.delivered, 5);
    assert_eq!(record.failed, 1);

    assert!(repo.exists_for_training(training.id, "reminder").await?);
    assert!(!repo.exists_for_training(training.id, "cancellation").await?);

    Ok(())
}

/// Tests existence for a training that was never notified.
///
/// Expected: Ok(false)
#[tokio::test]
async fn exists_false_without_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let training = factory::training::create_training(db).await?;

    let repo = TrainingNotificationRepository::new(db);
    assert!(!repo.exists_for_training(training.id, "reminder").await?);

    Ok(())
}
