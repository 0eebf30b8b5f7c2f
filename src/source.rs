//! Source descriptors and detection.
//!
//! A single CLI argument becomes a tagged source: web URL, YouTube video,
//! PDF file or plain-text file. Dispatch over the tag picks the extractor.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::PathBuf;

lazy_static! {
    static ref YOUTUBE_PAT: Regex =
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([A-Za-z0-9_\-]{6,})")
            .expect("valid YouTube pattern");
}

/// A document source, tagged by type.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    /// A web page URL.
    Web(String),
    /// A YouTube video ID.
    Video(String),
    /// A local PDF file.
    Pdf(PathBuf),
    /// A local plain-text file.
    Text(PathBuf),
}

impl Source {
    /// Classify a raw CLI argument.
    ///
    /// `http(s)` URLs matching the YouTube pattern become [`Source::Video`],
    /// other URLs become [`Source::Web`]. Paths with a `.pdf` extension
    /// (case-insensitive) become [`Source::Pdf`]; anything else is treated
    /// as a plain-text file.
    pub fn detect(input: &str) -> Source {
        let input = input.trim();
        if input.starts_with("http://") || input.starts_with("https://") {
            return match youtube_id(input) {
                Some(id) => Source::Video(id),
                None => Source::Web(input.to_string()),
            };
        }

        let path = PathBuf::from(input);
        let is_pdf = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            Source::Pdf(path)
        } else {
            Source::Text(path)
        }
    }

    /// Human-readable label for console output.
    pub fn describe(&self) -> String {
        match self {
            Source::Web(url) => format!("Web: {}", url),
            Source::Video(id) => format!("YouTube: {}", id),
            Source::Pdf(path) => format!("PDF: {}", path.display()),
            Source::Text(path) => format!("Text: {}", path.display()),
        }
    }
}

/// Extract a YouTube video ID from a watch or short URL.
pub fn youtube_id(url: &str) -> Option<String> {
    YOUTUBE_PAT
        .captures(url)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_watch_url() {
        let source = Source::detect("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(source, Source::Video("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_detects_short_url() {
        let source = Source::detect("https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(source, Source::Video("dQw4w9WgXcQ".to_string()));
    }

    #[test]
    fn test_detects_web_url() {
        let source = Source::detect("https://example.com/article");
        assert_eq!(source, Source::Web("https://example.com/article".to_string()));
    }

    #[test]
    fn test_detects_pdf_case_insensitive() {
        assert!(matches!(Source::detect("report.pdf"), Source::Pdf(_)));
        assert!(matches!(Source::detect("notes/REPORT.PDF"), Source::Pdf(_)));
    }

    #[test]
    fn test_falls_back_to_text_file() {
        assert!(matches!(Source::detect("notes.txt"), Source::Text(_)));
        assert!(matches!(Source::detect("README"), Source::Text(_)));
    }

    #[test]
    fn test_youtube_id_rejects_short_ids() {
        assert!(youtube_id("https://youtu.be/abc").is_none());
        assert!(youtube_id("https://example.com/page").is_none());
    }
}
