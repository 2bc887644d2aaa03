//! Summary export (plain text and PDF).
//!
//! Both renderings are pure functions of the summary text; writing them to
//! disk is a separate step.

mod encoding;
mod pdf;

use crate::config::UnsupportedCharPolicy;
use crate::error::Result;
use crate::summary::Summary;
use std::path::{Path, PathBuf};
use tracing::info;

/// A downloadable rendering of a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportArtifact {
    Text,
    Document,
}

impl ExportArtifact {
    /// All artifacts, in the order they are offered.
    pub const ALL: [ExportArtifact; 2] = [ExportArtifact::Text, ExportArtifact::Document];

    pub fn file_name(self) -> &'static str {
        match self {
            ExportArtifact::Text => "summary.txt",
            ExportArtifact::Document => "summary.pdf",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportArtifact::Text => "text/plain",
            ExportArtifact::Document => "application/pdf",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportArtifact::Text => "TXT",
            ExportArtifact::Document => "PDF",
        }
    }

    /// Render the summary into this artifact's bytes.
    pub fn render(self, summary: &Summary, policy: UnsupportedCharPolicy) -> Result<Vec<u8>> {
        match self {
            ExportArtifact::Text => Ok(to_text_buffer(summary)),
            ExportArtifact::Document => to_document_buffer(summary, policy),
        }
    }

    /// Render and write the artifact into `dir`, returning the file path.
    pub fn write_to(
        self,
        summary: &Summary,
        dir: &Path,
        policy: UnsupportedCharPolicy,
    ) -> Result<PathBuf> {
        let bytes = self.render(summary, policy)?;
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        std::fs::write(&path, &bytes)?;
        info!("Wrote {} ({} bytes, {})", path.display(), bytes.len(), self.mime_type());
        Ok(path)
    }
}

/// Summary as UTF-8 bytes, unchanged.
pub fn to_text_buffer(summary: &Summary) -> Vec<u8> {
    summary.as_str().as_bytes().to_vec()
}

/// Summary as a paginated PDF document.
pub fn to_document_buffer(summary: &Summary, policy: UnsupportedCharPolicy) -> Result<Vec<u8>> {
    pdf::render(summary.as_str(), policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_buffer_is_identity() {
        let text = "Résumé: 日本語 ✅ — line\nnext";
        let bytes = to_text_buffer(&Summary::new(text));
        assert_eq!(String::from_utf8(bytes).unwrap(), text);
    }

    #[test]
    fn test_document_buffer_twice_is_identical() {
        let summary = Summary::new("## Key points\n- One\n- Two\n");
        let first = to_document_buffer(&summary, UnsupportedCharPolicy::Strict).unwrap();
        let second = to_document_buffer(&summary, UnsupportedCharPolicy::Strict).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_artifact_metadata() {
        assert_eq!(ExportArtifact::Text.file_name(), "summary.txt");
        assert_eq!(ExportArtifact::Text.mime_type(), "text/plain");
        assert_eq!(ExportArtifact::Document.file_name(), "summary.pdf");
        assert_eq!(ExportArtifact::Document.mime_type(), "application/pdf");
    }

    #[test]
    fn test_write_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let summary = Summary::new("notes");

        let path = ExportArtifact::Text
            .write_to(&summary, dir.path(), UnsupportedCharPolicy::Strict)
            .unwrap();
        assert_eq!(path, dir.path().join("summary.txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "notes");

        let path = ExportArtifact::Document
            .write_to(&summary, dir.path(), UnsupportedCharPolicy::Strict)
            .unwrap();
        assert!(std::fs::read(path).unwrap().starts_with(b"%PDF"));
    }
}
