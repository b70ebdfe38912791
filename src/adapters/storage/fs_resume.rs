//! Implements ResumeSourcePort from the local filesystem.
//!
//! Loads the whole file into memory; a resume submission is ephemeral and the
//! bytes live only for the duration of one submit action.

use crate::domain::{DomainError, ResumeFile};
use crate::ports::ResumeSourcePort;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Filesystem resume source.
pub struct FsResumeSource;

impl FsResumeSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsResumeSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ResumeSourcePort for FsResumeSource {
    async fn load(&self, path: &Path) -> Result<ResumeFile, DomainError> {
        let bytes = fs::read(path)
            .await
            .map_err(|e| DomainError::Resume(format!("{}: {}", path.display(), e)))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| DomainError::Resume(format!("{}: not a file", path.display())))?;

        debug!(file = %file_name, size = bytes.len(), "resume loaded");

        Ok(ResumeFile::new(file_name, bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_name_and_bytes() {
        let dir = std::env::temp_dir().join("careercraft_fs_resume_test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("alice.pdf");
        tokio::fs::write(&path, b"%PDF-1.4").await.unwrap();

        let source = FsResumeSource::new();
        let resume = source.load(&path).await.unwrap();
        assert_eq!(resume.file_name, "alice.pdf");
        assert_eq!(resume.bytes, b"%PDF-1.4");

        let _ = tokio::fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn missing_file_maps_to_resume_error() {
        let source = FsResumeSource::new();
        let err = source
            .load(Path::new("/definitely/not/here.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Resume(_)));
    }
}
