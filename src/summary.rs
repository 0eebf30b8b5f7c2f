//! Summary struct - the immutable output of the summarisation pipeline.

/// An extractive summary.
///
/// Holds the selected sentences in their original appearance order; never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Selected sentences, in document order.
    pub sentences: Vec<String>,
}

impl Summary {
    /// Create a new summary.
    pub fn new(sentences: Vec<String>) -> Self {
        Self { sentences }
    }

    /// Number of sentences in the summary.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the summary has any content.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Render the summary as plain text, sentences joined by single spaces.
    pub fn to_text(&self) -> String {
        self.sentences.join(" ")
    }
}
