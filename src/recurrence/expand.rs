//! Occurrence expansion.
//!
//! Takes a parsed [`RecurrenceRule`] plus a seed start time in the series'
//! timezone and produces the ordered list of occurrence start times. The
//! walk happens in local wall-clock time so a weekly 19:00 training stays at
//! 19:00 across DST transitions, and each local time is resolved back to an
//! instant at the end. Expansion is bounded three ways: the rule's own
//! UNTIL/COUNT, the global occurrence cap and a rolling safety horizon.

use chrono::{DateTime, Datelike, Days, Duration, Months, NaiveDateTime, TimeZone, Weekday};
use chrono_tz::Tz;

use crate::recurrence::{
    rule::{Frequency, RecurrenceRule},
    OCCURRENCE_CAP,
};

/// Expansion never reaches past this many months after the seed, no matter
/// what the rule says.
const HORIZON_MONTHS: u32 = 36;

/// Expands a rule into the ordered occurrence start times.
///
/// The first candidate is the seed itself; it is included only if it matches
/// the rule's own filters (a Tuesday seed under `BYDAY=MO` starts on the
/// following Monday). The returned instants are strictly increasing and the
/// list is empty when no candidate fits inside the bounds.
///
/// # Arguments
/// - `rule` - The parsed recurrence rule
/// - `seed` - The series start time, already localized to the series timezone
///
/// # Returns
/// - `Vec<DateTime<Tz>>` - At most [`OCCURRENCE_CAP`] occurrence start times
pub fn expand(rule: &RecurrenceRule, seed: DateTime<Tz>) -> Vec<DateTime<Tz>> {
    let tz = seed.timezone();
    let horizon = seed.checked_add_months(Months::new(HORIZON_MONTHS));
    let seed_local = seed.naive_local();

    let mut occurrences = Vec::new();
    let mut cursor = seed_local;

    loop {
        if occurrences.len() >= OCCURRENCE_CAP as usize {
            break;
        }
        if let Some(count) = rule.count {
            if occurrences.len() >= count as usize {
                break;
            }
        }

        let Some(instant) = resolve_local(cursor, &tz) else {
            break;
        };

        if let Some(horizon) = horizon {
            if instant > horizon {
                break;
            }
        }
        if let Some(until) = rule.until {
            if instant > until {
                break;
            }
        }

        if includes(rule, cursor, seed_local) {
            occurrences.push(instant);
        }

        let Some(next) = advance(rule, cursor) else {
            break;
        };
        cursor = next;
    }

    occurrences
}

/// Whether the cursor date satisfies the rule's filters.
fn includes(rule: &RecurrenceRule, cursor: NaiveDateTime, seed: NaiveDateTime) -> bool {
    match rule.frequency {
        Frequency::Daily => true,
        Frequency::Weekly => {
            rule.by_weekday.is_empty() || rule.by_weekday.contains(&cursor.weekday())
        }
        Frequency::Monthly => cursor.day() == rule.by_month_day.unwrap_or(seed.day()),
        Frequency::Yearly => cursor.month() == seed.month() && cursor.day() == seed.day(),
    }
}

/// Steps the cursor to the next candidate wall-clock time.
///
/// Month and year steps use calendar arithmetic, which clamps day 31 to
/// shorter months. The next step then starts from the clamped day, so a rule
/// pinned to a day-of-month that hits a short month does not recover the
/// original day afterwards.
fn advance(rule: &RecurrenceRule, cursor: NaiveDateTime) -> Option<NaiveDateTime> {
    let interval = rule.interval.max(1);

    match rule.frequency {
        Frequency::Daily => cursor.checked_add_days(Days::new(interval as u64)),
        Frequency::Weekly => {
            if rule.by_weekday.is_empty() {
                cursor.checked_add_days(Days::new(interval as u64 * 7))
            } else {
                next_weekly_by_day(rule, cursor)
            }
        }
        Frequency::Monthly => cursor.checked_add_months(Months::new(interval)),
        Frequency::Yearly => {
            let months = interval.checked_mul(12)?;
            cursor.checked_add_months(Months::new(months))
        }
    }
}

/// Finds the next cursor for a weekly rule with a BYDAY list.
///
/// Walks the remaining days of the cursor's week first. Once the week is
/// exhausted it jumps `interval` weeks ahead of the week's Monday and scans
/// that week for the first listed weekday. Listed days in skipped weeks are
/// never visited, which is what makes `INTERVAL=2;BYDAY=MO,FR` biweekly
/// rather than a sliding two-week window.
fn next_weekly_by_day(rule: &RecurrenceRule, cursor: NaiveDateTime) -> Option<NaiveDateTime> {
    let interval = rule.interval.max(1) as u64;

    let mut probe = cursor.checked_add_days(Days::new(1))?;
    while probe.weekday() != Weekday::Mon {
        if rule.by_weekday.contains(&probe.weekday()) {
            return Some(probe);
        }
        probe = probe.checked_add_days(Days::new(1))?;
    }

    let monday = cursor.weekday().num_days_from_monday() as u64;
    let week_start = cursor.checked_sub_days(Days::new(monday))?;
    let mut probe = week_start.checked_add_days(Days::new(interval * 7))?;
    for _ in 0..7 {
        if rule.by_weekday.contains(&probe.weekday()) {
            return Some(probe);
        }
        probe = probe.checked_add_days(Days::new(1))?;
    }

    None
}

/// Resolves a wall-clock time to an instant in the given timezone.
///
/// An ambiguous time (clocks rolled back) resolves to the earlier instant.
/// A time inside a DST gap probes forward in half-hour steps until the
/// clocks exist again; a gap spans at most a day, even in zones that have
/// skipped across the date line.
fn resolve_local(local: NaiveDateTime, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Some(instant) = tz.from_local_datetime(&local).earliest() {
        return Some(instant);
    }

    let mut probe = local;
    for _ in 0..48 {
        probe = probe.checked_add_signed(Duration::minutes(30))?;
        if let Some(instant) = tz.from_local_datetime(&probe).earliest() {
            return Some(instant);
        }
    }

    None
}
