use super::*;

/// Tests deleting a series tail from a sequence position.
///
/// Verifies that every occurrence at or past the given sequence is removed
/// and the earlier ones stay.
///
/// Expected: Ok(3) with occurrences 1 and 2 remaining
#[tokio::test]
async fn deletes_at_and_past_sequence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (series, _trainings) = factory::helpers::create_series_with_occurrences(db, 5).await?;

    let repo = TrainingRepository::new(db);
    let deleted = repo.delete_from_sequence(series.id, 3).await?;

    assert_eq!(deleted, 3);

    let remaining = repo.get_by_series_id(series.id).await?;
    assert_eq!(remaining.len(), 2);
    assert_eq!(remaining[0].sequence, Some(1));
    assert_eq!(remaining[1].sequence, Some(2));

    Ok(())
}

/// Tests that tail deletion is scoped to one series.
///
/// Expected: Ok with the other series untouched
#[tokio::test]
async fn ignores_other_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (series_a, _) = factory::helpers::create_series_with_occurrences(db, 3).await?;
    let (series_b, _) = factory::helpers::create_series_with_occurrences(db, 3).await?;

    let repo = TrainingRepository::new(db);
    let deleted = repo.delete_from_sequence(series_a.id, 1).await?;

    assert_eq!(deleted, 3);
    assert_eq!(repo.get_by_series_id(series_a.id).await?.len(), 0);
    assert_eq!(repo.get_by_series_id(series_b.id).await?.len(), 3);

    Ok(())
}
