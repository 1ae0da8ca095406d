use std::path::Path;

use eyre::Result;
use log::{debug, info, warn};

/// Advisory only, matching the limit advertised in the upload prompt.
const SOFT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// In-memory CV content, tagged by how it must travel to the model:
/// PDFs ship as an inline binary attachment, everything else as text.
#[derive(Debug, Clone, PartialEq)]
pub enum CvContent {
    Pdf(Vec<u8>),
    Text(String),
}

impl CvContent {
    pub fn kind(&self) -> &'static str {
        match self {
            CvContent::Pdf(_) => "pdf",
            CvContent::Text(_) => "text",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CvContent::Pdf(bytes) => bytes.len(),
            CvContent::Text(text) => text.len(),
        }
    }
}

/// A user-selected CV file. Immutable once created; re-selecting a file
/// replaces the whole value.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub content: CvContent,
}

impl UploadedFile {
    /// Reads a CV from disk in a single pass: `.pdf` as raw bytes,
    /// anything else as decoded UTF-8 text.
    pub async fn read(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let size = tokio::fs::metadata(path).await?.len();
        if size > SOFT_MAX_BYTES {
            warn!(
                "{} is {:.1} MB, above the advised 5 MB limit; sending anyway",
                name,
                size as f64 / (1024.0 * 1024.0)
            );
        }

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let content = if extension == "pdf" {
            CvContent::Pdf(tokio::fs::read(path).await?)
        } else {
            if extension != "txt" {
                warn!("unrecognized extension '.{extension}', ingesting as plain text");
            }
            CvContent::Text(tokio::fs::read_to_string(path).await?)
        };

        info!("ingested {} ({}, {} bytes)", name, content.kind(), size);
        debug!("content length in memory: {}", content.len());

        Ok(Self { name, content })
    }
}
