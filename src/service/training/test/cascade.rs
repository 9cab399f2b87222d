use super::*;

/// Tests applying a group set across a series.
///
/// Verifies that every occurrence following the series assignment picks up
/// the new set, while an occurrence whose groups were edited individually
/// keeps its own.
///
/// Expected: Ok with the custom assignment left untouched
#[tokio::test]
async fn groups_cascade_skips_independent_assignments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::create_club(db).await?;
    let group_base = factory::group::create_group(db, club.id).await?;
    let group_custom = factory::group::create_group(db, club.id).await?;
    let group_new = factory::group::create_group(db, club.id).await?;
    let (_series, trainings) = factory::helpers::create_series_with_occurrences(db, 3).await?;
    for training in &trainings {
        factory::training::create_training_group(db, training.id, group_base.id).await?;
    }

    let service = TrainingService::new(db);

    // The middle occurrence gets its own assignment first.
    service
        .update_groups(
            trainings[1].id,
            UpdateTrainingGroupsDto {
                group_ids: vec![group_custom.id],
            },
        )
        .await?;

    let pivot = service
        .apply_groups_to_series(
            trainings[0].id,
            UpdateTrainingGroupsDto {
                group_ids: vec![group_new.id],
            },
        )
        .await?;

    assert_eq!(pivot.group_ids, vec![group_new.id]);

    let first = service.get(trainings[0].id).await?;
    let second = service.get(trainings[1].id).await?;
    let third = service.get(trainings[2].id).await?;
    assert_eq!(first.group_ids, vec![group_new.id]);
    assert_eq!(second.group_ids, vec![group_custom.id]);
    assert_eq!(third.group_ids, vec![group_new.id]);
    assert!(second.group_detached);
    assert!(!first.group_detached);
    assert!(!third.group_detached);

    Ok(())
}

/// Tests applying a group set through a standalone training.
///
/// Expected: Ok with the training's groups replaced and no flag raised
#[tokio::test]
async fn groups_cascade_standalone_applies_directly() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::create_club(db).await?;
    let group_old = factory::group::create_group(db, club.id).await?;
    let group_new = factory::group::create_group(db, club.id).await?;
    let training = factory::training::create_training(db).await?;
    factory::training::create_training_group(db, training.id, group_old.id).await?;

    let service = TrainingService::new(db);
    let updated = service
        .apply_groups_to_series(
            training.id,
            UpdateTrainingGroupsDto {
                group_ids: vec![group_new.id],
            },
        )
        .await?;

    assert_eq!(updated.group_ids, vec![group_new.id]);
    assert!(!updated.group_detached);

    Ok(())
}

/// Tests assigning a questionnaire pair across a series.
///
/// Verifies that a rescheduled occurrence which already carries its own
/// questionnaire keeps it, while the rest of the series gets the pair.
///
/// Expected: Ok with the customized occurrence unchanged
#[tokio::test]
async fn questionnaire_cascade_preserves_customized_detached() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::create_club(db).await?;
    let pre = factory::questionnaire::create_questionnaire(db, club.id).await?;
    let post = factory::questionnaire::create_questionnaire(db, club.id).await?;
    let custom = factory::questionnaire::create_questionnaire(db, club.id).await?;
    let series = factory::training_series::create_series(db).await?;
    let first = factory::training::TrainingFactory::new(db)
        .series(series.id, 1)
        .build()
        .await?;
    let second = factory::training::TrainingFactory::new(db)
        .series(series.id, 2)
        .detached(true)
        .pre_questionnaire(Some(custom.id))
        .build()
        .await?;
    let third = factory::training::TrainingFactory::new(db)
        .series(series.id, 3)
        .build()
        .await?;

    let service = TrainingService::new(db);
    let pivot = service
        .apply_questionnaires_to_series(
            first.id,
            SeriesQuestionnairesDto {
                pre_questionnaire_id: Some(pre.id),
                post_questionnaire_id: Some(post.id),
            },
        )
        .await?;

    assert_eq!(pivot.pre_questionnaire_id, Some(pre.id));
    assert_eq!(pivot.post_questionnaire_id, Some(post.id));

    let untouched = service.get(second.id).await?;
    assert_eq!(untouched.pre_questionnaire_id, Some(custom.id));
    assert_eq!(untouched.post_questionnaire_id, None);

    let last = service.get(third.id).await?;
    assert_eq!(last.pre_questionnaire_id, Some(pre.id));
    assert_eq!(last.post_questionnaire_id, Some(post.id));

    Ok(())
}

/// Tests the questionnaire cascade over a rescheduled occurrence that has
/// no questionnaire of its own.
///
/// Expected: Ok with the pair applied despite the content edit
#[tokio::test]
async fn questionnaire_cascade_updates_detached_without_questionnaire() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::create_club(db).await?;
    let pre = factory::questionnaire::create_questionnaire(db, club.id).await?;
    let series = factory::training_series::create_series(db).await?;
    let first = factory::training::TrainingFactory::new(db)
        .series(series.id, 1)
        .build()
        .await?;
    let second = factory::training::TrainingFactory::new(db)
        .series(series.id, 2)
        .detached(true)
        .build()
        .await?;

    let service = TrainingService::new(db);
    service
        .apply_questionnaires_to_series(
            first.id,
            SeriesQuestionnairesDto {
                pre_questionnaire_id: Some(pre.id),
                post_questionnaire_id: None,
            },
        )
        .await?;

    let rescheduled = service.get(second.id).await?;
    assert_eq!(rescheduled.pre_questionnaire_id, Some(pre.id));
    assert!(rescheduled.detached);

    Ok(())
}

/// Tests assigning the same questionnaire before and after a training.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_identical_pre_and_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::create_club(db).await?;
    let questionnaire = factory::questionnaire::create_questionnaire(db, club.id).await?;
    let training = factory::training::create_training(db).await?;

    let service = TrainingService::new(db);
    let result = service
        .apply_questionnaires_to_series(
            training.id,
            SeriesQuestionnairesDto {
                pre_questionnaire_id: Some(questionnaire.id),
                post_questionnaire_id: Some(questionnaire.id),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests assigning a questionnaire that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_questionnaire() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let training = factory::training::create_training(db).await?;

    let service = TrainingService::new(db);
    let result = service
        .apply_questionnaires_to_series(
            training.id,
            SeriesQuestionnairesDto {
                pre_questionnaire_id: Some(999999),
                post_questionnaire_id: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a series tail.
///
/// Verifies that the pivot and everything after it goes away, including a
/// rescheduled occurrence inside the range, while earlier occurrences stay.
///
/// Expected: Ok(3) with occurrences 1 and 2 remaining
#[tokio::test]
async fn delete_following_removes_tail_including_detached() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (series, trainings) = factory::helpers::create_series_with_occurrences(db, 5).await?;

    let service = TrainingService::new(db);

    // Reschedule the fourth occurrence so the range spans a detached row.
    service
        .update_content(
            trainings[3].id,
            UpdateTrainingDto {
                title: "Rescheduled".to_string(),
                description: None,
                start_time: "2025-08-01T18:00:00Z".to_string(),
                end_time: "2025-08-01T19:00:00Z".to_string(),
            },
        )
        .await?;

    let deleted = service.delete_following(trainings[2].id).await?;
    assert_eq!(deleted, 3);

    let remaining = entity::prelude::Training::find()
        .filter(entity::training::Column::SeriesId.eq(series.id))
        .all(db)
        .await?;
    let mut sequences: Vec<i32> = remaining
        .iter()
        .filter_map(|training| training.sequence)
        .collect();
    sequences.sort_unstable();
    assert_eq!(sequences, vec![1, 2]);

    Ok(())
}

/// Tests deleting "following" through a standalone training.
///
/// Expected: Ok(1) with the training removed
#[tokio::test]
async fn delete_following_standalone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_training_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let training = factory::training::create_training(db).await?;

    let service = TrainingService::new(db);
    let deleted = service.delete_following(training.id).await?;
    assert_eq!(deleted, 1);

    let stored = entity::prelude::Training::find_by_id(training.id)
        .one(db)
        .await?;
    assert!(stored.is_none());

    Ok(())
}
