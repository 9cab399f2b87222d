use super::*;

/// Tests attaching a standalone training to a series.
///
/// Verifies that the training receives the series linkage and sequence and
/// that both detachment flags are cleared.
///
/// Expected: Ok with linkage set and flags cleared
#[tokio::test]
async fn attaches_and_clears_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let series = factory::training_series::create_series(db).await?;
    let training = factory::training::TrainingFactory::new(db)
        .detached(true)
        .group_detached(true)
        .build()
        .await?;

    let repo = TrainingRepository::new(db);
    let attached = repo.attach_to_series(training.id, series.id, 1).await?;

    assert_eq!(attached.series_id, Some(series.id));
    assert_eq!(attached.sequence, Some(1));
    assert!(!attached.detached);
    assert!(!attached.group_detached);

    Ok(())
}
