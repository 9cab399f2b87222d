use super::*;

/// Tests replacing a training's group assignment.
///
/// Verifies that a second replace drops the previous assignment entirely
/// instead of accumulating rows.
///
/// Expected: Ok with only the latest group set assigned
#[tokio::test]
async fn replace_swaps_group_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::create_club(db).await?;
    let group_a = factory::group::create_group(db, club.id).await?;
    let group_b = factory::group::create_group(db, club.id).await?;
    let training = factory::training::create_training(db).await?;

    let repo = TrainingGroupRepository::new(db);
    repo.replace_for_training(training.id, &[group_a.id]).await?;
    repo.replace_for_training(training.id, &[group_b.id]).await?;

    let group_ids = repo.get_group_ids(training.id).await?;
    assert_eq!(group_ids, vec![group_b.id]);

    Ok(())
}

/// Tests replacing with an empty set.
///
/// Expected: Ok with the assignment cleared
#[tokio::test]
async fn replace_with_empty_clears_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::create_club(db).await?;
    let group = factory::group::create_group(db, club.id).await?;
    let training = factory::training::create_training(db).await?;

    let repo = TrainingGroupRepository::new(db);
    repo.replace_for_training(training.id, &[group.id]).await?;
    repo.replace_for_training(training.id, &[]).await?;

    let group_ids = repo.get_group_ids(training.id).await?;
    assert!(group_ids.is_empty());

    Ok(())
}

/// Tests that group IDs come back sorted regardless of insert order.
///
/// Expected: Ok with ascending group IDs
#[tokio::test]
async fn get_group_ids_sorted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::create_club(db).await?;
    let group_a = factory::group::create_group(db, club.id).await?;
    let group_b = factory::group::create_group(db, club.id).await?;
    let training = factory::training::create_training(db).await?;

    let repo = TrainingGroupRepository::new(db);
    repo.replace_for_training(training.id, &[group_b.id, group_a.id])
        .await?;

    let group_ids = repo.get_group_ids(training.id).await?;
    assert_eq!(group_ids, vec![group_a.id, group_b.id]);

    Ok(())
}
