//! Recurring training generation.
//!
//! A recurrence definition is a constrained subset of the iCalendar RRULE
//! grammar (`FREQ`, `INTERVAL`, `BYDAY`, `BYMONTHDAY`, `UNTIL`, `COUNT`), with
//! the start time supplied separately by the owning series rather than
//! embedded in the rule string. [`rule::RecurrenceRule::parse`] validates a
//! rule string into a structured rule, [`expand::expand`] turns a rule plus
//! a zoned seed timestamp into the bounded, ordered list of occurrence start
//! times, and [`materialize::materialize`] stamps template rows with series
//! linkage for each expanded instant. All three are pure; persistence of the
//! generated occurrences is handled by the series service.

pub mod expand;
pub mod materialize;
pub mod rule;

pub use expand::expand;
pub use materialize::materialize;
pub use rule::{Frequency, RecurrenceRule};

use chrono_tz::Tz;

use crate::error::recurrence::RecurrenceError;

/// Hard cap on the number of occurrences a single expansion may produce,
/// regardless of COUNT, UNTIL or the safety window.
pub const OCCURRENCE_CAP: u32 = 500;

/// Resolves an IANA timezone name to a concrete zone.
///
/// # Arguments
/// - `name` - IANA zone name, e.g. `"Europe/Berlin"` or `"UTC"`
///
/// # Returns
/// - `Ok(Tz)` - The resolved zone
/// - `Err(RecurrenceError::UnknownTimezone)` - Name is not in the IANA database
pub fn resolve_zone(name: &str) -> Result<Tz, RecurrenceError> {
    name.parse::<Tz>()
        .map_err(|_| RecurrenceError::UnknownTimezone(name.to_string()))
}
