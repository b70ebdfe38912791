//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here — these are mapped from adapters.

use serde::{Deserialize, Serialize};

/// A resume file chosen by the user. Ephemeral: lives for one submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Profile fields the matcher service derives from an uploaded resume.
/// Immutable once received; displayed, not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub experience: Option<String>,
    /// Ordered as returned by the service.
    pub skills: Vec<String>,
}

/// A job listing the matcher service considers relevant to the extracted profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatch {
    pub title: String,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    pub url: String,
}

/// One successful upload/match exchange. `matches` keeps response order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub extracted: ExtractedProfile,
    pub matches: Vec<JobMatch>,
    /// Unix seconds, stamped when the response was received.
    pub received_at: i64,
}
