use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A training row claims series membership but carries no sequence number.
    ///
    /// Series occurrences are always created with a sequence, so hitting this
    /// means the row was corrupted outside the application. Results in a 500
    /// Internal Server Error with a generic message returned to client.
    #[error("Training {training_id} belongs to series {series_id} but has no sequence number")]
    MissingSequence {
        /// The training row missing its sequence
        training_id: i32,
        /// The series the row claims to belong to
        series_id: i32,
    },
}
