use thiserror::Error;

/// Validation failures for recurrence rule strings and their companion bounds.
///
/// Every variant describes caller input, so all of them surface as 400 Bad
/// Request. Parsing aborts the whole creation flow: no series or occurrence
/// rows are persisted once any of these fire.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecurrenceError {
    /// The rule string was empty or whitespace-only.
    #[error("Recurrence rule must not be empty")]
    EmptyRule,

    /// The rule string carries no FREQ key.
    #[error("Recurrence rule is missing FREQ")]
    MissingFrequency,

    /// FREQ was present but not DAILY, WEEKLY, MONTHLY or YEARLY.
    #[error("Unsupported FREQ value '{0}'")]
    UnsupportedFrequency(String),

    /// UNTIL and COUNT both resolved to a value.
    ///
    /// The two termination conditions are mutually exclusive, whether they
    /// come from the rule string or from the stored series bounds.
    #[error("UNTIL and COUNT are mutually exclusive")]
    UntilAndCount,

    /// COUNT exceeds the hard occurrence cap.
    #[error("COUNT {count} exceeds the occurrence cap of {cap}")]
    CountExceedsCap {
        /// The requested occurrence count
        count: u32,
        /// The hard cap it collided with
        cap: u32,
    },

    /// UNTIL did not match any accepted timestamp form.
    #[error("Unparseable UNTIL value '{0}'")]
    InvalidUntil(String),

    /// A BYDAY token was not one of MO,TU,WE,TH,FR,SA,SU.
    #[error("Unrecognized BYDAY token '{0}'")]
    InvalidByDay(String),

    /// The series timezone is not a known IANA zone name.
    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),
}
