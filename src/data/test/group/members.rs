use super::*;

/// Tests adding and removing a group membership.
///
/// Expected: Ok with the membership visible after add and gone after remove
#[tokio::test]
async fn adds_and_removes_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::create_club(db).await?;
    let group = factory::group::create_group(db, club.id).await?;
    let user = factory::user::create_user(db).await?;

    let repo = GroupMemberRepository::new(db);
    repo.add(group.id, user.id).await?;
    assert!(repo.exists(group.id, user.id).await?);

    let removed = repo.remove(group.id, user.id).await?;
    assert_eq!(removed, 1);
    assert!(!repo.exists(group.id, user.id).await?);

    Ok(())
}

/// Tests removing a membership that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn remove_returns_zero_when_not_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::create_club(db).await?;
    let group = factory::group::create_group(db, club.id).await?;
    let user = factory::user::create_user(db).await?;

    let repo = GroupMemberRepository::new(db);
    let removed = repo.remove(group.id, user.id).await?;

    assert_eq!(removed, 0);

    Ok(())
}

/// Tests fetching members with their user rows.
///
/// Verifies that each membership comes back paired with its user, ordered
/// by join date.
///
/// Expected: Ok with both members and their users joined
#[tokio::test]
async fn get_members_joins_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::create_club(db).await?;
    let group = factory::group::create_group(db, club.id).await?;
    let user_a = factory::user::create_user(db).await?;
    let user_b = factory::user::create_user(db).await?;

    factory::group::create_group_member(db, group.id, user_a.id).await?;
    factory::group::create_group_member(db, group.id, user_b.id).await?;

    let repo = GroupMemberRepository::new(db);
    let members = repo.get_members(group.id).await?;

    assert_eq!(members.len(), 2);
    let user_ids = members
        .iter()
        .map(|(_, user)| user.as_ref().map(|u| u.id))
        .collect::<Vec<_>>();
    assert!(user_ids.contains(&Some(user_a.id)));
    assert!(user_ids.contains(&Some(user_b.id)));

    Ok(())
}

/// Tests collecting the distinct users across several groups.
///
/// Verifies that a user in two of the groups appears once.
///
/// Expected: Ok with two distinct users
#[tokio::test]
async fn get_users_in_groups_dedups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::create_club(db).await?;
    let group_a = factory::group::create_group(db, club.id).await?;
    let group_b = factory::group::create_group(db, club.id).await?;
    let user_both = factory::user::create_user(db).await?;
    let user_single = factory::user::create_user(db).await?;

    factory::group::create_group_member(db, group_a.id, user_both.id).await?;
    factory::group::create_group_member(db, group_b.id, user_both.id).await?;
    factory::group::create_group_member(db, group_b.id, user_single.id).await?;

    let repo = GroupMemberRepository::new(db);
    let users = repo.get_users_in_groups(&[group_a.id, group_b.id]).await?;

    assert_eq!(users.len(), 2);

    Ok(())
}

/// Tests collecting users for an empty group list.
///
/// Expected: Ok with no users and no query issued against all groups
#[tokio::test]
async fn get_users_in_groups_empty_input() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::create_club(db).await?;
    let group = factory::group::create_group(db, club.id).await?;
    let user = factory::user::create_user(db).await?;
    factory::group::create_group_member(db, group.id, user.id).await?;

    let repo = GroupMemberRepository::new(db);
    let users = repo.get_users_in_groups(&[]).await?;

    assert!(users.is_empty());

    Ok(())
}
