//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Local precondition: submit was triggered with no file chosen. No network call is made.
    #[error("no resume file selected")]
    NoFileSelected,

    /// A prior submission has not resolved yet. No network call is made.
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// Transport-level failure: the request never reached or never completed.
    #[error("network failure: {0}")]
    Network(String),

    /// Non-2xx HTTP status. `message` comes from the payload's `error` field
    /// when present, otherwise a generic fallback.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// Body was not valid JSON, or the success envelope was missing required fields.
    #[error("malformed matcher response: {0}")]
    MalformedResponse(String),

    #[error("resume file error: {0}")]
    Resume(String),

    #[error("ui error: {0}")]
    Ui(String),

    #[error("report error: {0}")]
    Report(String),
}
