//! Recurrence rule parsing.
//!
//! This module turns a rule string such as `FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,WE`
//! into a structured [`RecurrenceRule`]. The grammar is a restricted subset of
//! the iCalendar RRULE format: only `FREQ`, `INTERVAL`, `BYDAY`, `BYMONTHDAY`,
//! `UNTIL` and `COUNT` are recognized, and no `DTSTART` is ever embedded — the
//! seed start time always comes from the owning series. Unknown keys are
//! ignored so rule strings written by newer clients keep loading.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc, Weekday};

use crate::{error::recurrence::RecurrenceError, recurrence::OCCURRENCE_CAP};

/// How often a series repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// A validated recurrence rule.
///
/// Parsed from a rule string plus the bounds stored on the series entity.
/// The rule is ephemeral: it is never persisted directly, only the canonical
/// rule string is. At most one of `until`/`count` is ever set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    /// Base repetition unit.
    pub frequency: Frequency,
    /// Every N frequency units, floored at 1.
    pub interval: u32,
    /// Weekdays an occurrence may fall on. Only meaningful for WEEKLY;
    /// empty means "the seed's weekday". Deduplicated, in rule order.
    pub by_weekday: Vec<Weekday>,
    /// Day-of-month an occurrence must fall on. Only meaningful for MONTHLY;
    /// `None` means "the seed's day-of-month".
    pub by_month_day: Option<u32>,
    /// Inclusive upper bound on occurrence start times.
    pub until: Option<DateTime<Utc>>,
    /// Maximum number of occurrences, at most [`OCCURRENCE_CAP`].
    pub count: Option<u32>,
}

impl RecurrenceRule {
    /// Parses a rule string together with the series' stored bounds.
    ///
    /// The string is split on `;`, each fragment on `=`. A rule string that
    /// carries its own `UNTIL` or `COUNT` wins outright; the explicit bounds
    /// passed by the caller apply only when the string names neither. Either
    /// way the resolved pair must not set both, and a resolved count must not
    /// exceed the occurrence cap.
    ///
    /// # Arguments
    /// - `rule` - The rule string, e.g. `"FREQ=DAILY;INTERVAL=2"`
    /// - `until` - Inclusive until bound stored on the series, if any
    /// - `count` - Occurrence count stored on the series, if any
    ///
    /// # Returns
    /// - `Ok(RecurrenceRule)` - The validated rule
    /// - `Err(RecurrenceError)` - Blank string, missing/unsupported FREQ,
    ///   conflicting bounds, count over cap, or an unparseable UNTIL/BYDAY token
    pub fn parse(
        rule: &str,
        until: Option<DateTime<Utc>>,
        count: Option<u32>,
    ) -> Result<Self, RecurrenceError> {
        if rule.trim().is_empty() {
            return Err(RecurrenceError::EmptyRule);
        }

        let mut frequency = None;
        let mut interval: u32 = 1;
        let mut by_weekday = Vec::new();
        let mut by_month_day = None;
        let mut rule_until = None;
        let mut rule_count = None;

        for fragment in rule.split(';') {
            let Some((key, value)) = fragment.split_once('=') else {
                continue;
            };

            match key.trim().to_ascii_uppercase().as_str() {
                "FREQ" => frequency = Some(parse_frequency(value.trim())?),
                "INTERVAL" => interval = value.trim().parse::<u32>().unwrap_or(1).max(1),
                "BYDAY" => by_weekday = parse_by_day(value)?,
                "BYMONTHDAY" => {
                    by_month_day = value
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .filter(|day| (1..=31).contains(day))
                }
                "UNTIL" => rule_until = Some(parse_until(value.trim())?),
                "COUNT" => rule_count = value.trim().parse::<u32>().ok().filter(|c| *c > 0),
                _ => {}
            }
        }

        let frequency = frequency.ok_or(RecurrenceError::MissingFrequency)?;

        let (until, count) = if rule_until.is_some() || rule_count.is_some() {
            (rule_until, rule_count)
        } else {
            (until, count)
        };

        if until.is_some() && count.is_some() {
            return Err(RecurrenceError::UntilAndCount);
        }

        if let Some(count) = count {
            if count > OCCURRENCE_CAP {
                return Err(RecurrenceError::CountExceedsCap {
                    count,
                    cap: OCCURRENCE_CAP,
                });
            }
        }

        Ok(Self {
            frequency,
            interval,
            by_weekday,
            by_month_day,
            until,
            count,
        })
    }
}

/// Parses the FREQ value into a [`Frequency`].
fn parse_frequency(value: &str) -> Result<Frequency, RecurrenceError> {
    match value.to_ascii_uppercase().as_str() {
        "DAILY" => Ok(Frequency::Daily),
        "WEEKLY" => Ok(Frequency::Weekly),
        "MONTHLY" => Ok(Frequency::Monthly),
        "YEARLY" => Ok(Frequency::Yearly),
        other => Err(RecurrenceError::UnsupportedFrequency(other.to_string())),
    }
}

/// Parses a comma-separated BYDAY list into weekdays, deduplicated.
fn parse_by_day(value: &str) -> Result<Vec<Weekday>, RecurrenceError> {
    let mut days = Vec::new();

    for token in value.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let day = match token.to_ascii_uppercase().as_str() {
            "MO" => Weekday::Mon,
            "TU" => Weekday::Tue,
            "WE" => Weekday::Wed,
            "TH" => Weekday::Thu,
            "FR" => Weekday::Fri,
            "SA" => Weekday::Sat,
            "SU" => Weekday::Sun,
            other => return Err(RecurrenceError::InvalidByDay(other.to_string())),
        };

        if !days.contains(&day) {
            days.push(day);
        }
    }

    Ok(days)
}

/// Parses an UNTIL value, trying each accepted form in order.
///
/// 1. Full ISO-8601 timestamp with offset, e.g. `2025-01-05T10:00:00Z`
/// 2. Compact RFC-5545 UTC stamp, e.g. `20250105T100000Z`
/// 3. Date-only `YYYYMMDD`, read as the end of that UTC day so occurrences
///    landing anywhere on the date stay included
fn parse_until(value: &str) -> Result<DateTime<Utc>, RecurrenceError> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%SZ") {
        return Ok(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y%m%d") {
        if let Some(end_of_day) = date.and_hms_opt(23, 59, 59) {
            return Ok(end_of_day.and_utc());
        }
    }

    Err(RecurrenceError::InvalidUntil(value.to_string()))
}
