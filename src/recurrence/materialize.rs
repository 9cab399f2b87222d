//! Series materialization.
//!
//! Turns a stored series definition into the occurrence rows it implies:
//! parse the rule, expand it from the seed start time in the series'
//! timezone, then stamp one template row per expanded instant with its
//! series linkage. The rows are returned unsaved; persisting them is the
//! caller's job, normally inside the transaction that also wrote the series.

use chrono::{Duration, Utc};
use sea_orm::ActiveValue;

use crate::{
    error::recurrence::RecurrenceError,
    recurrence::{expand, resolve_zone, rule::RecurrenceRule},
};

/// Materializes a series into occurrence rows, one per expanded instant.
///
/// Each row starts from the caller-supplied template so title, description
/// and questionnaire defaults come from the caller, then gets its linkage
/// stamped: `sequence` 1..N in expansion order, `start_time` at the expanded
/// instant, `end_time` at start plus the series' template duration, both
/// detachment flags cleared. A zero or negative template duration collapses
/// every occurrence to a zero-length window ending at its start.
///
/// # Arguments
/// - `series` - The persisted series definition to expand
/// - `template_factory` - Produces one fresh template row per occurrence
///
/// # Returns
/// - `Ok(Vec<entity::training::ActiveModel>)` - Unsaved occurrence rows in
///   expansion order, possibly empty
/// - `Err(RecurrenceError)` - The stored rule or timezone failed validation
pub fn materialize<F>(
    series: &entity::training_series::Model,
    template_factory: F,
) -> Result<Vec<entity::training::ActiveModel>, RecurrenceError>
where
    F: Fn() -> entity::training::ActiveModel,
{
    let stored_count = series.count.and_then(|count| u32::try_from(count).ok());
    let rule = RecurrenceRule::parse(&series.rule, series.until, stored_count)?;
    let tz = resolve_zone(&series.timezone)?;

    let seed = series.start_time.with_timezone(&tz);
    let occurrences = expand(&rule, seed);

    let template_duration = series.end_time - series.start_time;
    let duration = if template_duration > Duration::zero() {
        template_duration
    } else {
        Duration::zero()
    };

    let rows = occurrences
        .into_iter()
        .enumerate()
        .map(|(index, instant)| {
            let start_time = instant.with_timezone(&Utc);

            let mut row = template_factory();
            row.series_id = ActiveValue::Set(Some(series.id));
            row.sequence = ActiveValue::Set(Some(index as i32 + 1));
            row.start_time = ActiveValue::Set(start_time);
            row.end_time = ActiveValue::Set(start_time + duration);
            row.detached = ActiveValue::Set(false);
            row.group_detached = ActiveValue::Set(false);
            row
        })
        .collect();

    Ok(rows)
}
