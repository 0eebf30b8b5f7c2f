//! Extraction dispatch: one entry point turning any [`Source`] into a
//! [`Document`].
//!
//! Web pages and video transcripts go through their own modules; PDF and
//! plain-text files are read here. All extracted text is whitespace
//! normalised before the summariser sees it.

use crate::config::Config;
use crate::scraper::{self, ScrapeError};
use crate::source::Source;
use crate::tokenize;
use crate::transcript::{self, TranscriptError};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to fetch source: {0}")]
    Fetch(reqwest::Error),
    #[error("no content found in source")]
    NoContent,
    #[error("transcript disabled or unavailable")]
    TranscriptUnavailable,
    #[error("failed to read PDF: {0}")]
    Pdf(String),
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse transcript: {0}")]
    TranscriptParse(#[from] serde_json::Error),
}

impl ExtractError {
    /// Whether this failure means the source simply has no usable text,
    /// as opposed to an operational error.
    pub fn is_no_content(&self) -> bool {
        matches!(
            self,
            ExtractError::NoContent | ExtractError::TranscriptUnavailable
        )
    }
}

impl From<ScrapeError> for ExtractError {
    fn from(err: ScrapeError) -> Self {
        match err {
            ScrapeError::Fetch(e) => ExtractError::Fetch(e),
            ScrapeError::NoContent => ExtractError::NoContent,
        }
    }
}

impl From<TranscriptError> for ExtractError {
    fn from(err: TranscriptError) -> Self {
        match err {
            TranscriptError::Fetch(e) => ExtractError::Fetch(e),
            TranscriptError::Disabled => ExtractError::TranscriptUnavailable,
            TranscriptError::Parse(e) => ExtractError::TranscriptParse(e),
        }
    }
}

/// Extracted content ready for summarisation.
///
/// Immutable once produced; discarded after the summary is printed.
#[derive(Debug, Clone)]
pub struct Document {
    /// Where the text came from.
    pub source: Source,
    /// Title, when the source carries one.
    pub title: Option<String>,
    /// Whitespace-normalised raw text.
    pub text: String,
}

/// Fetch and extract raw text from a source.
///
/// Every source type that yields no usable text fails with an error for
/// which [`ExtractError::is_no_content`] is true; the caller surfaces
/// those uniformly.
pub async fn extract(source: Source, config: &Config) -> Result<Document, ExtractError> {
    let timeout = config.http.timeout();

    let (title, raw) = match &source {
        Source::Web(url) => {
            let page = scraper::fetch_page(url, timeout).await?;
            (page.title, page.text)
        }
        Source::Video(id) => (None, transcript::fetch_transcript(id, timeout).await?),
        Source::Pdf(path) => (file_title(path), read_pdf(path)?),
        Source::Text(path) => (file_title(path), std::fs::read_to_string(path)?),
    };

    let text = tokenize::normalize_whitespace(&raw);
    if text.is_empty() {
        return Err(ExtractError::NoContent);
    }

    Ok(Document {
        source,
        title,
        text,
    })
}

/// Extract text from a PDF file.
fn read_pdf(path: &Path) -> Result<String, ExtractError> {
    pdf_extract::extract_text(path).map_err(|e| ExtractError::Pdf(e.to_string()))
}

/// Use the file stem as a title.
fn file_title(path: &Path) -> Option<String> {
    path.file_stem().map(|s| s.to_string_lossy().to_string())
}
