//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a standalone training with its club and group dependencies.
///
/// This is a convenience method that creates:
/// 1. Club
/// 2. Group (in that club)
/// 3. Training (standalone, no series)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((club, group, training))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_training_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::club::Model,
        entity::group::Model,
        entity::training::Model,
    ),
    DbErr,
> {
    let club = crate::factory::club::create_club(db).await?;
    let group = crate::factory::group::create_group(db, club.id).await?;
    let training = crate::factory::training::create_training(db).await?;

    Ok((club, group, training))
}

/// Creates a series together with its generated occurrences.
///
/// Inserts a series row with default values and `occurrences` training rows
/// linked to it, with sequences 1..=occurrences and start times spaced one
/// week apart from the series start.
///
/// # Arguments
/// - `db` - Database connection
/// - `occurrences` - Number of training rows to generate
///
/// # Returns
/// - `Ok((series, trainings))` - The series and its occurrences in sequence order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_series_with_occurrences(
    db: &DatabaseConnection,
    occurrences: i32,
) -> Result<
    (
        entity::training_series::Model,
        Vec<entity::training::Model>,
    ),
    DbErr,
> {
    let series = crate::factory::training_series::create_series(db).await?;

    let mut trainings = Vec::new();
    for sequence in 1..=occurrences {
        let offset = chrono::Duration::weeks((sequence - 1) as i64);
        let training = crate::factory::training::TrainingFactory::new(db)
            .series(series.id, sequence)
            .start_time(series.start_time + offset)
            .end_time(series.end_time + offset)
            .build()
            .await?;
        trainings.push(training);
    }

    Ok((series, trainings))
}
