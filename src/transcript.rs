//! YouTube transcript fetching.
//!
//! Discovers caption tracks from the watch page, prefers English tracks
//! and falls back to the first available one (requesting an English
//! translation from the timedtext API), then fetches the track in json3
//! format and joins the caption segments into plain text.

use crate::scraper;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Marker preceding the caption track list in the watch page
const CAPTION_TRACKS_KEY: &str = "\"captionTracks\":";

/// English track preference order
const PREFERRED_LANGUAGES: [&str; 3] = ["en", "en-US", "en-GB"];

#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("failed to fetch transcript: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("transcripts are disabled or unavailable for this video")]
    Disabled,
    #[error("failed to parse caption data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A caption track advertised on the watch page.
#[derive(Debug, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(rename = "languageCode", default)]
    language_code: String,
}

/// One timed event in a json3 transcript.
#[derive(Debug, Deserialize)]
struct CaptionEvent {
    #[serde(default)]
    segs: Vec<CaptionSegment>,
}

#[derive(Debug, Deserialize)]
struct CaptionSegment {
    #[serde(default)]
    utf8: String,
}

#[derive(Debug, Deserialize)]
struct CaptionDocument {
    #[serde(default)]
    events: Vec<CaptionEvent>,
}

/// Fetch the transcript text of a YouTube video.
pub async fn fetch_transcript(video_id: &str, timeout: Duration) -> Result<String, TranscriptError> {
    let client = scraper::create_client(timeout)?;

    let watch_url = format!("{}{}", WATCH_URL, video_id);
    let page = client.get(&watch_url).send().await?.text().await?;

    let tracks = parse_caption_tracks(&page)?;
    let track = select_track(&tracks).ok_or(TranscriptError::Disabled)?;

    let body = client.get(track_url(track)).send().await?.text().await?;
    let document: CaptionDocument = serde_json::from_str(&body)?;

    Ok(join_events(&document))
}

/// Locate and parse the caption track list embedded in the watch page.
fn parse_caption_tracks(page: &str) -> Result<Vec<CaptionTrack>, TranscriptError> {
    let json = caption_tracks_json(page).ok_or(TranscriptError::Disabled)?;
    let tracks: Vec<CaptionTrack> = serde_json::from_str(json)?;
    Ok(tracks)
}

/// Slice out the caption track array following [`CAPTION_TRACKS_KEY`].
///
/// Scans with a bracket-depth cursor rather than a regex: string fields
/// inside the array (track names in particular) may themselves contain
/// brackets.
fn caption_tracks_json(page: &str) -> Option<&str> {
    let start = page.find(CAPTION_TRACKS_KEY)? + CAPTION_TRACKS_KEY.len();
    let rest = &page[start..];
    let open = rest.find('[')?;
    if !rest[..open].trim().is_empty() {
        return None;
    }

    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escaped = false;
    for (i, &b) in rest.as_bytes().iter().enumerate().skip(open) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
        } else {
            match b {
                b'"' => in_string = true,
                b'[' => depth += 1,
                b']' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&rest[open..=i]);
                    }
                }
                _ => {}
            }
        }
    }
    None
}

/// Build the json3 timedtext URL for a track.
///
/// Non-English tracks are requested with an English translation
/// (`tlang=en`), so the ranker always sees English text.
fn track_url(track: &CaptionTrack) -> String {
    let mut url = format!("{}&fmt=json3", track.base_url);
    if !PREFERRED_LANGUAGES.contains(&track.language_code.as_str()) {
        url.push_str("&tlang=en");
    }
    url
}

/// Pick an English track when available, otherwise the first track.
fn select_track<'a>(tracks: &'a [CaptionTrack]) -> Option<&'a CaptionTrack> {
    for lang in PREFERRED_LANGUAGES {
        if let Some(track) = tracks.iter().find(|t| t.language_code == lang) {
            return Some(track);
        }
    }
    tracks.first()
}

/// Join caption segment texts into a single string.
fn join_events(document: &CaptionDocument) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for event in &document.events {
        for seg in &event.segs {
            let text = seg.utf8.trim();
            if !text.is_empty() {
                parts.push(text);
            }
        }
    }
    parts.join(" ")
}
