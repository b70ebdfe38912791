//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, MatchReport, PageModel, ResumeFile};
use std::path::Path;

/// Matcher service gateway. One upload/match exchange per call.
#[async_trait::async_trait]
pub trait MatcherPort: Send + Sync {
    /// Send the resume as multipart form data and return the parsed report.
    ///
    /// # Errors
    /// - `DomainError::Network` when the request never completes
    /// - `DomainError::Service` on a non-2xx status
    /// - `DomainError::MalformedResponse` when the success body cannot be parsed
    async fn match_resume(&self, resume: &ResumeFile) -> Result<MatchReport, DomainError>;
}

/// Source of resume files. Loads bytes for a user-chosen path.
#[async_trait::async_trait]
pub trait ResumeSourcePort: Send + Sync {
    async fn load(&self, path: &Path) -> Result<ResumeFile, DomainError>;
}

/// Render port. Draws one immutable snapshot of the page.
pub trait RenderPort: Send + Sync {
    fn render(&self, page: &PageModel) -> Result<(), DomainError>;
}
