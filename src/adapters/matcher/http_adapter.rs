//! HTTP adapter for the resume matcher service.
//!
//! Implements `MatcherPort` with a multipart POST. Wire structs are mapped
//! into domain entities; infrastructure failures map into the `DomainError`
//! taxonomy (`Network` / `Service` / `MalformedResponse`).

use crate::domain::{DomainError, ExtractedProfile, JobMatch, MatchReport, ResumeFile};
use crate::ports::MatcherPort;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

/// Multipart field name the service expects the file under.
const RESUME_FIELD: &str = "resume";

/// Shown when a non-2xx response carries no usable `error` field.
const GENERIC_SERVICE_ERROR: &str = "Something went wrong.";

/// Matcher service adapter over HTTP.
pub struct HttpMatcherAdapter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpMatcherAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `endpoint` - absolute upload URL (e.g. "http://127.0.0.1:8000/api/upload_resume/")
    /// * `timeout_secs` - request timeout for the whole exchange
    pub fn new(endpoint: String, timeout_secs: u64) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| DomainError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    /// Content type for the upload part, guessed from the file extension.
    /// No validation: unknown extensions fall back to octet-stream.
    fn content_type(file_name: &str) -> &'static str {
        let lower = file_name.to_lowercase();
        if lower.ends_with(".pdf") {
            "application/pdf"
        } else if lower.ends_with(".docx") {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        } else if lower.ends_with(".doc") {
            "application/msword"
        } else if lower.ends_with(".txt") {
            "text/plain"
        } else {
            "application/octet-stream"
        }
    }
}

/// Response envelope. 2xx requires `extracted` and `matches`; non-2xx may
/// carry `error`. Extra service fields (`message`, per-job scores) are ignored.
#[derive(Deserialize)]
struct MatchEnvelope {
    error: Option<String>,
    extracted: Option<WireProfile>,
    matches: Option<Vec<WireJob>>,
}

#[derive(Deserialize)]
struct WireProfile {
    name: String,
    email: String,
    phone: Option<String>,
    experience: Option<String>,
    skills: Vec<String>,
}

#[derive(Deserialize)]
struct WireJob {
    title: String,
    company_name: Option<String>,
    location: Option<String>,
    salary: Option<String>,
    url: String,
}

impl From<WireProfile> for ExtractedProfile {
    fn from(wire: WireProfile) -> Self {
        Self {
            name: wire.name,
            email: wire.email,
            phone: wire.phone,
            experience: wire.experience,
            skills: wire.skills,
        }
    }
}

impl From<WireJob> for JobMatch {
    fn from(wire: WireJob) -> Self {
        Self {
            title: wire.title,
            company_name: wire.company_name,
            location: wire.location,
            salary: wire.salary,
            url: wire.url,
        }
    }
}

/// Parse a 2xx body into a report. Missing envelope fields are malformed,
/// not silently defaulted.
fn decode_success(body: &str, received_at: i64) -> Result<MatchReport, DomainError> {
    let envelope: MatchEnvelope = serde_json::from_str(body)
        .map_err(|e| DomainError::MalformedResponse(format!("invalid JSON: {}", e)))?;

    let extracted = envelope.extracted.ok_or_else(|| {
        DomainError::MalformedResponse("success envelope missing `extracted`".to_string())
    })?;
    let matches = envelope.matches.ok_or_else(|| {
        DomainError::MalformedResponse("success envelope missing `matches`".to_string())
    })?;

    Ok(MatchReport {
        extracted: extracted.into(),
        matches: matches.into_iter().map(Into::into).collect(),
        received_at,
    })
}

/// Message for a non-2xx body: the payload's `error` field when present,
/// otherwise the generic fallback. Never both.
fn error_message(body: &str) -> String {
    serde_json::from_str::<MatchEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .unwrap_or_else(|| GENERIC_SERVICE_ERROR.to_string())
}

#[async_trait::async_trait]
impl MatcherPort for HttpMatcherAdapter {
    async fn match_resume(&self, resume: &ResumeFile) -> Result<MatchReport, DomainError> {
        let part = Part::bytes(resume.bytes.clone())
            .file_name(resume.file_name.clone())
            .mime_str(Self::content_type(&resume.file_name))
            .map_err(|e| DomainError::Network(format!("failed to build multipart: {}", e)))?;
        let form = Form::new().part(RESUME_FIELD, part);

        info!(url = %self.endpoint, file = %resume.file_name, "uploading resume");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        debug!(status = %status, body_len = body.len(), "matcher responded");

        if !status.is_success() {
            let message = error_message(&body);
            warn!(status = %status, message = %message, "matcher returned error");
            return Err(DomainError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let received_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;

        decode_success(&body, received_at)
    }
}
