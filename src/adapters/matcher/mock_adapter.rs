//! Mock matcher adapter for running without the remote service.
//!
//! Returns a canned report for development and testing purposes.

use crate::domain::{DomainError, ExtractedProfile, JobMatch, MatchReport, ResumeFile};
use crate::ports::MatcherPort;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::info;

/// Mock matcher adapter.
///
/// Returns predetermined matches without making network calls.
/// Simulates network latency with a configurable delay.
pub struct MockMatcherAdapter {
    delay_ms: u64,
}

impl MockMatcherAdapter {
    /// Create a new mock adapter with default delay (300ms).
    pub fn new() -> Self {
        Self { delay_ms: 300 }
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockMatcherAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MatcherPort for MockMatcherAdapter {
    async fn match_resume(&self, resume: &ResumeFile) -> Result<MatchReport, DomainError> {
        info!(
            file = %resume.file_name,
            size = resume.bytes.len(),
            "[MOCK] Simulating resume analysis"
        );

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        let received_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;

        Ok(MatchReport {
            extracted: ExtractedProfile {
                name: "Mock Candidate".to_string(),
                email: "candidate@example.com".to_string(),
                phone: Some("+1 555 0100".to_string()),
                experience: Some("2 years".to_string()),
                skills: vec![
                    "Python".to_string(),
                    "SQL".to_string(),
                    "Data Analysis".to_string(),
                ],
            },
            matches: vec![
                JobMatch {
                    title: "[MOCK] Data Analyst Intern".to_string(),
                    company_name: Some("Acme Analytics".to_string()),
                    location: Some("Remote".to_string()),
                    salary: Some("$15,000".to_string()),
                    url: "https://example.com/jobs/1".to_string(),
                },
                JobMatch {
                    title: "[MOCK] Backend Engineer Intern".to_string(),
                    company_name: None,
                    location: None,
                    salary: None,
                    url: "https://example.com/jobs/2".to_string(),
                },
            ],
            received_at,
        })
    }
}
