use super::*;

/// Tests counting existing groups among a mixed ID set.
///
/// Expected: Ok(2) with the unknown ID not counted
#[tokio::test]
async fn counts_only_existing_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::create_club(db).await?;
    let group_a = factory::group::create_group(db, club.id).await?;
    let group_b = factory::group::create_group(db, club.id).await?;

    let repo = GroupRepository::new(db);
    let count = repo
        .count_existing(&[group_a.id, group_b.id, 999999])
        .await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests counting with an empty ID set.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_empty_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let count = repo.count_existing(&[]).await?;

    assert_eq!(count, 0);

    Ok(())
}
