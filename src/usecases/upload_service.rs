//! Upload use case: one resume submission through the matcher port.
//!
//! Checks the local precondition (a file must be chosen) and holds the
//! request-in-flight flag, so overlapping submissions fail locally instead of
//! racing on the wire.

use crate::domain::{DomainError, MatchReport, ResumeFile};
use crate::ports::MatcherPort;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

/// Service for the upload/match exchange.
pub struct UploadService {
    matcher: Arc<dyn MatcherPort>,
    in_flight: AtomicBool,
}

impl UploadService {
    pub fn new(matcher: Arc<dyn MatcherPort>) -> Self {
        Self {
            matcher,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Submit the currently selected resume.
    ///
    /// Fails locally with `NoFileSelected` when `resume` is `None` and with
    /// `SubmissionInFlight` while a prior call has not resolved; neither case
    /// issues a network call.
    pub async fn submit(&self, resume: Option<&ResumeFile>) -> Result<MatchReport, DomainError> {
        let resume = resume.ok_or(DomainError::NoFileSelected)?;

        if self.in_flight.swap(true, Ordering::SeqCst) {
            warn!(file = %resume.file_name, "submission rejected: another is in flight");
            return Err(DomainError::SubmissionInFlight);
        }

        info!(file = %resume.file_name, size = resume.bytes.len(), "submitting resume");
        let result = self.matcher.match_resume(resume).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match &result {
            Ok(report) => info!(
                name = %report.extracted.name,
                matches = report.matches.len(),
                "resume processed"
            ),
            Err(e) => warn!(error = %e, "upload failed"),
        }

        result
    }

    /// Whether a submission is currently outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExtractedProfile;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    struct StubMatcher {
        calls: AtomicUsize,
        delay_ms: u64,
    }

    impl StubMatcher {
        fn new(delay_ms: u64) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay_ms,
            }
        }

        fn report() -> MatchReport {
            MatchReport {
                extracted: ExtractedProfile {
                    name: "Alice".into(),
                    email: "a@x.com".into(),
                    phone: None,
                    experience: None,
                    skills: vec!["Go".into()],
                },
                matches: vec![],
                received_at: 0,
            }
        }
    }

    #[async_trait::async_trait]
    impl MatcherPort for StubMatcher {
        async fn match_resume(&self, _resume: &ResumeFile) -> Result<MatchReport, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
            Ok(Self::report())
        }
    }

    #[tokio::test]
    async fn no_file_makes_no_network_call() {
        let matcher = Arc::new(StubMatcher::new(0));
        let service = UploadService::new(Arc::clone(&matcher) as Arc<dyn MatcherPort>);

        let err = service.submit(None).await.unwrap_err();
        assert!(matches!(err, DomainError::NoFileSelected));
        assert_eq!(matcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_submit_passes_the_report_through() {
        let matcher = Arc::new(StubMatcher::new(0));
        let service = UploadService::new(Arc::clone(&matcher) as Arc<dyn MatcherPort>);
        let file = ResumeFile::new("alice.pdf", b"%PDF".to_vec());

        let report = service.submit(Some(&file)).await.unwrap();
        assert_eq!(report.extracted.name, "Alice");
        assert_eq!(matcher.calls.load(Ordering::SeqCst), 1);
        assert!(!service.is_in_flight());
    }

    #[tokio::test]
    async fn overlapping_submit_is_rejected_without_a_second_call() {
        let matcher = Arc::new(StubMatcher::new(100));
        let service = Arc::new(UploadService::new(
            Arc::clone(&matcher) as Arc<dyn MatcherPort>
        ));
        let file = ResumeFile::new("alice.pdf", b"%PDF".to_vec());

        let first = {
            let service = Arc::clone(&service);
            let file = file.clone();
            tokio::spawn(async move { service.submit(Some(&file)).await })
        };

        // Let the first submission reach the matcher before overlapping it.
        tokio::time::sleep(Duration::from_millis(20)).await;
        let second = service.submit(Some(&file)).await;
        assert!(matches!(second, Err(DomainError::SubmissionInFlight)));

        first.await.unwrap().unwrap();
        assert_eq!(matcher.calls.load(Ordering::SeqCst), 1);
        assert!(!service.is_in_flight());
    }
}
