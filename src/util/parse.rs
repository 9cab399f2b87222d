use chrono::{DateTime, Utc};

use crate::error::AppError;

/// Parses an ISO-8601 timestamp with offset into UTC
///
/// # Arguments
/// - `value` - The timestamp string to attempt to parse, e.g.
///   `2025-01-06T10:00:00Z` or `2025-01-06T11:00:00+01:00`
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Successfully parsed timestamp, normalized to UTC
/// - `Err(AppError::BadRequest)` - The string is not a valid ISO-8601
///   timestamp with offset
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, AppError> {
    let result = DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| AppError::BadRequest(format!("Invalid timestamp: {}", value)))?;

    Ok(result)
}
