use super::*;

/// Tests re-timing an occurrence without touching its flags.
///
/// Verifies that update_times changes only the window, leaving the
/// detached flag and content exactly as they were.
///
/// Expected: Ok with new times and detached still set
#[tokio::test]
async fn updates_times_and_preserves_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let training = factory::training::TrainingFactory::new(db)
        .title("Customized session")
        .detached(true)
        .build()
        .await?;

    let new_start = training.start_time + Duration::days(3);
    let repo = TrainingRepository::new(db);
    let updated = repo
        .update_times(training.id, new_start, new_start + Duration::hours(1))
        .await?;

    assert_eq!(updated.start_time, new_start);
    assert_eq!(updated.end_time, new_start + Duration::hours(1));
    assert!(updated.detached);
    assert_eq!(updated.title, "Customized session");

    Ok(())
}
