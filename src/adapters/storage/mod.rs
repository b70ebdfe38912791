//! Filesystem adapters.

pub mod fs_resume;

pub use fs_resume::FsResumeSource;
