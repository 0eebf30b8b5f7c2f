//! Chunk-then-merge extractive summarisation.
//!
//! Short documents are ranked in one pass. Long documents are split into
//! sentence-aligned segments, each segment is summarised with a target
//! proportional to its share of the document, and the concatenated
//! per-segment selections are ranked a second time down to the requested
//! length. Both passes preserve original document order, so the final
//! summary reads in the order the source was written.

use crate::chunk;
use crate::rank::{RankError, Ranker};
use crate::summary::Summary;
use crate::tokenize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("no summarisable text in input")]
    NoContent,
    #[error("{name} must be a positive integer (got {value})")]
    InvalidParameter { name: &'static str, value: usize },
}

impl From<RankError> for SummarizeError {
    fn from(err: RankError) -> Self {
        match err {
            RankError::EmptyInput => SummarizeError::NoContent,
        }
    }
}

/// Summarise `text` down to at most `target_sentences` sentences.
///
/// `max_chunk_words` bounds the size (in words) of the text the ranker
/// sees in one pass; documents at or below the bound skip chunking
/// entirely. Both parameters must be positive. The result never exceeds
/// `target_sentences` sentences, and contains every sentence of the
/// document when the document is shorter than the target.
pub fn summarize(
    text: &str,
    target_sentences: usize,
    max_chunk_words: usize,
) -> Result<Summary, SummarizeError> {
    if target_sentences == 0 {
        return Err(SummarizeError::InvalidParameter {
            name: "target_sentences",
            value: target_sentences,
        });
    }
    if max_chunk_words == 0 {
        return Err(SummarizeError::InvalidParameter {
            name: "max_chunk_words",
            value: max_chunk_words,
        });
    }

    let normalized = tokenize::normalize_whitespace(text);
    if normalized.is_empty() {
        return Err(SummarizeError::NoContent);
    }

    let ranker = Ranker::new();
    let total_words = tokenize::word_count(&normalized);

    // Short document: a single ranking pass suffices.
    if total_words <= max_chunk_words {
        let ranked = ranker.rank(&normalized, target_sentences)?;
        return Ok(Summary::new(ranked.into_iter().map(|r| r.text).collect()));
    }

    let segments = chunk::chunk(&normalized, max_chunk_words);

    // First pass: summarise each segment with a proportional target.
    // The floor of one sentence per segment means the intermediate
    // selection may overshoot the target; the second pass compresses it
    // back down.
    let mut intermediate: Vec<String> = Vec::new();
    for segment in &segments {
        let share = target_sentences * segment.words;
        let per_segment = (share.div_ceil(total_words)).max(1);
        let ranked = ranker.rank(&segment.text(), per_segment)?;
        intermediate.extend(ranked.into_iter().map(|r| r.text));
    }

    // Second pass: rank the concatenated per-segment selections down to
    // the requested length. Segments were processed in document order and
    // each selection is in appearance order, so the concatenation is in
    // document order too.
    let merged = intermediate.join(" ");
    let ranked = ranker.rank(&merged, target_sentences)?;
    Ok(Summary::new(ranked.into_iter().map(|r| r.text).collect()))
}
