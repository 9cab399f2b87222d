use super::*;

/// Tests paginating trainings ordered by start time.
///
/// Verifies that the first page holds the earliest trainings and the total
/// count spans all pages.
///
/// Expected: Ok with page 0 holding the two earliest trainings
#[tokio::test]
async fn returns_page_ordered_by_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let base = Utc::now() + Duration::hours(1);
    for offset in [3, 0, 4, 1, 2] {
        factory::training::TrainingFactory::new(db)
            .start_time(base + Duration::days(offset))
            .end_time(base + Duration::days(offset) + Duration::hours(1))
            .build()
            .await?;
    }

    let repo = TrainingRepository::new(db);
    let (trainings, total) = repo.get_all_paginated(0, 2).await?;

    assert_eq!(total, 5);
    assert_eq!(trainings.len(), 2);
    assert_eq!(trainings[0].start_time, base);
    assert_eq!(trainings[1].start_time, base + Duration::days(1));

    Ok(())
}

/// Tests requesting a page past the end of the data.
///
/// Expected: Ok with an empty page but the full total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::training::create_training(db).await?;

    let repo = TrainingRepository::new(db);
    let (trainings, total) = repo.get_all_paginated(5, 10).await?;

    assert_eq!(total, 1);
    assert!(trainings.is_empty());

    Ok(())
}
