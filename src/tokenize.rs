//! Text tokenisation: whitespace normalisation, sentence splitting and
//! word extraction.
//!
//! Sentence boundaries are terminal punctuation (`.`, `!`, `?`, optionally
//! followed by a closing quote or bracket) followed by whitespace. Dotted
//! tokens without trailing whitespace (e.g. "3.14") are not split.

/// Collapse all runs of whitespace into single spaces and trim.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Split text into sentences.
///
/// Trailing text without terminal punctuation is kept as a final sentence;
/// content is never dropped.
pub fn sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            // Closing quotes and brackets belong to the sentence they end.
            while let Some(&next) = chars.peek() {
                if matches!(next, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}') {
                    current.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            if chars.peek().map_or(true, |next| next.is_whitespace()) {
                let sentence = current.trim();
                if !sentence.is_empty() {
                    out.push(sentence.to_string());
                }
                current.clear();
            }
        }
    }

    let sentence = current.trim();
    if !sentence.is_empty() {
        out.push(sentence.to_string());
    }
    out
}

/// Extract lowercase alphanumeric words from a sentence.
///
/// Punctuation is stripped from each token; tokens that are pure
/// punctuation disappear.
pub fn words(sentence: &str) -> Vec<String> {
    sentence
        .split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_terminal_punctuation() {
        let text = "First sentence. Second one! Third one?";
        let result = sentences(text);
        assert_eq!(
            result,
            vec!["First sentence.", "Second one!", "Third one?"]
        );
    }

    #[test]
    fn test_keeps_trailing_fragment() {
        let result = sentences("Complete sentence. Trailing fragment");
        assert_eq!(result, vec!["Complete sentence.", "Trailing fragment"]);
    }

    #[test]
    fn test_does_not_split_decimal_numbers() {
        let result = sentences("Pi is about 3.14 in value. Next sentence.");
        assert_eq!(result.len(), 2);
        assert!(result[0].contains("3.14"));
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        let result = sentences("She said \"stop.\" He left.");
        assert_eq!(result, vec!["She said \"stop.\"", "He left."]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(sentences("").is_empty());
        assert!(sentences("   \n\t  ").is_empty());
    }

    #[test]
    fn test_words_lowercases_and_strips_punctuation() {
        let result = words("The Cat, sat (quickly) on-the mat!");
        assert_eq!(result, vec!["the", "cat", "sat", "quickly", "onthe", "mat"]);
    }

    #[test]
    fn test_words_drops_pure_punctuation_tokens() {
        let result = words("hello - world --");
        assert_eq!(result, vec!["hello", "world"]);
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("  a \n\n b\t\tc  "),
            "a b c".to_string()
        );
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two  three\nfour"), 4);
        assert_eq!(word_count(""), 0);
    }
}
