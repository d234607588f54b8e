//! Departure provider error types.

/// Errors from a departure query collaborator.
///
/// A provider failure is fatal to the traversal call that triggered it;
/// retry policy, if any, belongs to the provider implementation.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Schedule data is not available for the requested stop pair or
    /// time window.
    #[error("schedule data unavailable: {message}")]
    Unavailable { message: String },

    /// The provider returned data that violates its own contract.
    #[error("malformed schedule data: {message}")]
    Malformed { message: String },

    /// Loading fixture data failed (mock provider only).
    #[error("fixture error: {message}")]
    Fixture { message: String },
}
