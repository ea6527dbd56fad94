//! Run artifact directory: report, diagram and digest written to disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   search_report.json    canonical JSON report
//!   explored_tree.dot     DOT source of the explored tree
//!   report_digest.txt     ASCII report digest (e.g. "sha256:...")
//! ```
//!
//! The directory path is never part of any digest.

use std::path::Path;

use crate::diagram::Diagram;
use crate::report::SearchReport;

pub const REPORT_FILENAME: &str = "search_report.json";
pub const DIAGRAM_FILENAME: &str = "explored_tree.dot";
pub const DIGEST_FILENAME: &str = "report_digest.txt";

/// Digests of the artifacts written by [`write_run_artifacts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDigests {
    pub report: String,
    pub diagram: String,
}

/// Error writing a run artifact directory.
#[derive(Debug)]
pub enum ArtifactWriteError {
    /// I/O error during write.
    Io { detail: String },
    /// Canonical JSON serialization failed.
    CanonError { detail: String },
}

impl std::fmt::Display for ArtifactWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::CanonError { detail } => write!(f, "canonical JSON error: {detail}"),
        }
    }
}

impl std::error::Error for ArtifactWriteError {}

/// Write the report, diagram and report digest into `dir`.
///
/// The directory is created if missing; existing artifact files are
/// overwritten.
///
/// # Errors
///
/// Returns [`ArtifactWriteError`] on serialization or I/O failure.
pub fn write_run_artifacts(
    dir: &Path,
    report: &SearchReport,
    diagram: &Diagram,
) -> Result<ArtifactDigests, ArtifactWriteError> {
    let report_bytes =
        report
            .to_canonical_json_bytes()
            .map_err(|e| ArtifactWriteError::CanonError {
                detail: e.to_string(),
            })?;
    let report_digest = report.digest().map_err(|e| ArtifactWriteError::CanonError {
        detail: e.to_string(),
    })?;

    std::fs::create_dir_all(dir).map_err(|e| io_error(dir, &e))?;
    write_file(dir, REPORT_FILENAME, &report_bytes)?;
    write_file(dir, DIAGRAM_FILENAME, diagram.to_dot().as_bytes())?;
    write_file(dir, DIGEST_FILENAME, report_digest.as_bytes())?;

    tracing::debug!(dir = %dir.display(), digest = %report_digest, "wrote run artifacts");

    Ok(ArtifactDigests {
        report: report_digest,
        diagram: diagram.digest(),
    })
}

fn write_file(dir: &Path, name: &str, content: &[u8]) -> Result<(), ArtifactWriteError> {
    let path = dir.join(name);
    std::fs::write(&path, content).map_err(|e| io_error(&path, &e))
}

fn io_error(path: &Path, e: &std::io::Error) -> ArtifactWriteError {
    ArtifactWriteError::Io {
        detail: format!("{}: {e}", path.display()),
    }
}
