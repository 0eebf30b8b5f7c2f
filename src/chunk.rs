//! Sentence-aligned chunking of long documents.
//!
//! Chunk size is measured in words. Sentences are never split across
//! segments, so concatenating the segments in order reproduces the
//! document's sentence sequence exactly.

use crate::tokenize;

/// A bounded, sentence-aligned slice of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Sentences in document order.
    pub sentences: Vec<String>,
    /// Total word count across the sentences.
    pub words: usize,
}

impl Segment {
    /// Render the segment as plain text.
    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }
}

/// Split text into segments of at most `max_words` words.
///
/// `max_words` must be positive; callers validate before chunking.
/// Grouping is greedy: consecutive sentences are accumulated until adding
/// the next one would exceed the limit. A single sentence longer than
/// `max_words` becomes its own oversized segment rather than being
/// truncated. Empty or whitespace-only text produces no segments.
pub fn chunk(text: &str, max_words: usize) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_words = 0;

    for sentence in tokenize::sentences(text) {
        let words = tokenize::word_count(&sentence);
        if !current.is_empty() && current_words + words > max_words {
            segments.push(Segment {
                sentences: std::mem::take(&mut current),
                words: current_words,
            });
            current_words = 0;
        }
        current_words += words;
        current.push(sentence);
    }

    if !current.is_empty() {
        segments.push(Segment {
            sentences: current,
            words: current_words,
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_produces_no_segments() {
        assert!(chunk("", 100).is_empty());
        assert!(chunk("  \n  ", 100).is_empty());
    }

    #[test]
    fn test_short_text_is_one_segment() {
        let segments = chunk("One short sentence. Another short one.", 100);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].sentences.len(), 2);
        assert_eq!(segments[0].words, 6);
    }

    #[test]
    fn test_respects_word_limit() {
        // Four 3-word sentences, limit 6 words: two segments of two.
        let text = "Alpha beta gamma. Delta epsilon zeta. Eta theta iota. Kappa lambda mu.";
        let segments = chunk(text, 6);
        assert_eq!(segments.len(), 2);
        for segment in &segments {
            assert!(segment.words <= 6);
            assert_eq!(segment.sentences.len(), 2);
        }
    }

    #[test]
    fn test_oversized_sentence_kept_whole() {
        let text = "This single sentence has more words than the limit allows here. Tiny one.";
        let segments = chunk(text, 4);
        assert_eq!(segments.len(), 2);
        assert!(segments[0].words > 4);
        assert_eq!(segments[0].sentences.len(), 1);
    }

    #[test]
    fn test_reconstruction() {
        let text = "The first sentence is here. A second one follows. Then a third appears. \
                    Finally the fourth arrives.";
        let original = crate::tokenize::sentences(text);
        let segments = chunk(text, 5);

        let reconstructed: Vec<String> = segments
            .into_iter()
            .flat_map(|s| s.sentences)
            .collect();
        assert_eq!(reconstructed, original);
    }
}
