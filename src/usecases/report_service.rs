//! Report use case: export a match report as Markdown.
//!
//! Nothing is persisted during the upload flow itself; this writes a copy of
//! the last successful exchange on explicit request.

use crate::domain::{DomainError, MatchReport};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

/// Service that renders a `MatchReport` to a Markdown file in the reports dir.
pub struct ReportService {
    reports_dir: PathBuf,
}

impl ReportService {
    pub fn new(reports_dir: PathBuf) -> Self {
        Self { reports_dir }
    }

    /// Write the report. Returns the path of the generated file.
    pub async fn write_report(&self, report: &MatchReport) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.reports_dir)
            .await
            .map_err(|e| DomainError::Report(format!("Failed to create reports dir: {}", e)))?;

        let filename = format!("matches_{}.md", report.received_at);
        let path = self.reports_dir.join(&filename);

        fs::write(&path, render_markdown(report))
            .await
            .map_err(|e| DomainError::Report(format!("Failed to write report: {}", e)))?;

        info!(path = %path.display(), "report generated");

        Ok(path)
    }
}

fn render_markdown(report: &MatchReport) -> String {
    let timestamp = DateTime::<Utc>::from_timestamp(report.received_at, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let profile = &report.extracted;
    let mut md = String::new();

    md.push_str(&format!("# Job Matches: {}\n\n", profile.name));
    md.push_str(&format!("**Received:** {}\n\n", timestamp));
    md.push_str("---\n\n");

    md.push_str("## Profile\n\n");
    md.push_str(&format!("- **Email:** {}\n", profile.email));
    md.push_str(&format!(
        "- **Phone:** {}\n",
        profile.phone.as_deref().unwrap_or("N/A")
    ));
    md.push_str(&format!(
        "- **Experience:** {}\n",
        profile.experience.as_deref().unwrap_or("N/A")
    ));
    md.push_str(&format!("- **Skills:** {}\n\n", profile.skills.join(", ")));

    if report.matches.is_empty() {
        md.push_str("## Matches\n\nNo matching jobs found.\n");
    } else {
        md.push_str("## Matches\n\n");
        for job in &report.matches {
            md.push_str(&format!("### {}\n\n", job.title));
            md.push_str(&format!(
                "- **Company:** {}\n",
                job.company_name.as_deref().unwrap_or("Unknown")
            ));
            md.push_str(&format!(
                "- **Location:** {}\n",
                job.location.as_deref().unwrap_or("N/A")
            ));
            md.push_str(&format!(
                "- **Salary:** {}\n",
                job.salary.as_deref().unwrap_or("N/A")
            ));
            md.push_str(&format!("- [Apply Now]({})\n\n", job.url));
        }
    }

    md
}
