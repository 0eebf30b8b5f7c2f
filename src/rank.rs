//! LexRank sentence ranking.
//!
//! Sentences are embedded as tf-idf vectors over lowercase alphanumeric
//! terms with English stopwords removed, connected by cosine similarity,
//! and scored with power iteration over the resulting weighted graph.
//! Selection is fully deterministic: ties are broken by original sentence
//! order.

use crate::tokenize;
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("no extractable sentences in input")]
    EmptyInput,
}

/// A sentence selected by the ranker.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    /// The sentence text.
    pub text: String,
    /// Zero-based appearance index within the ranked text.
    pub index: usize,
    /// LexRank centrality score (scores across a ranking sum to 1).
    pub score: f64,
}

/// LexRank sentence ranker.
#[derive(Debug, Clone)]
pub struct Ranker {
    /// Damping factor for power iteration (typically 0.85).
    pub damping: f64,
    /// Maximum number of power iterations.
    pub max_iterations: usize,
    /// Convergence threshold on the L1 score delta.
    pub threshold: f64,
    stopwords: HashSet<String>,
}

impl Default for Ranker {
    fn default() -> Self {
        let stopwords = stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .collect();
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
            stopwords,
        }
    }
}

impl Ranker {
    /// Create a ranker with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Select the `count` most central sentences of `text`.
    ///
    /// `count` is clamped to the number of sentences available. The
    /// selection is returned in original appearance order, not score
    /// order. Fails with [`RankError::EmptyInput`] when the text contains
    /// no sentences.
    pub fn rank(&self, text: &str, count: usize) -> Result<Vec<Ranked>, RankError> {
        let sentences = tokenize::sentences(text);
        if sentences.is_empty() {
            return Err(RankError::EmptyInput);
        }

        let vectors = self.term_vectors(&sentences);
        let scores = self.centrality(&vectors);

        // Order candidates by score, ties broken by appearance.
        let mut by_score: Vec<usize> = (0..sentences.len()).collect();
        by_score.sort_by(|&a, &b| {
            scores[b]
                .partial_cmp(&scores[a])
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(&b))
        });

        let mut selected: Vec<usize> = by_score.into_iter().take(count.min(sentences.len())).collect();
        selected.sort_unstable();

        Ok(selected
            .into_iter()
            .map(|i| Ranked {
                text: sentences[i].clone(),
                index: i,
                score: scores[i],
            })
            .collect())
    }

    /// Build tf-idf term vectors for each sentence.
    ///
    /// Vectors are ordered maps so that every floating-point summation
    /// over them happens in a fixed term order; ranking stays
    /// byte-identical across runs.
    fn term_vectors(&self, sentences: &[String]) -> Vec<BTreeMap<String, f64>> {
        let n = sentences.len() as f64;

        // Term frequencies per sentence.
        let tf: Vec<BTreeMap<String, f64>> = sentences
            .iter()
            .map(|sentence| {
                let mut counts: BTreeMap<String, f64> = BTreeMap::new();
                for word in tokenize::words(sentence) {
                    if !self.stopwords.contains(&word) {
                        *counts.entry(word).or_insert(0.0) += 1.0;
                    }
                }
                counts
            })
            .collect();

        // Document frequencies across sentences.
        let mut df: HashMap<&str, f64> = HashMap::new();
        for counts in &tf {
            for term in counts.keys() {
                *df.entry(term.as_str()).or_insert(0.0) += 1.0;
            }
        }

        // Weight by smoothed idf so terms shared by every sentence still
        // contribute to similarity.
        tf.iter()
            .map(|counts| {
                counts
                    .iter()
                    .map(|(term, freq)| {
                        let idf = (n / df[term.as_str()]).ln() + 1.0;
                        (term.clone(), freq * idf)
                    })
                    .collect()
            })
            .collect()
    }

    /// Power iteration over the cosine-similarity graph.
    fn centrality(&self, vectors: &[BTreeMap<String, f64>]) -> Vec<f64> {
        let n = vectors.len();
        if n == 1 {
            return vec![1.0];
        }

        // Symmetric similarity matrix and per-node total edge weight.
        let mut similarity = vec![vec![0.0; n]; n];
        let mut total_weight = vec![0.0; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let sim = cosine(&vectors[i], &vectors[j]);
                similarity[i][j] = sim;
                similarity[j][i] = sim;
                total_weight[i] += sim;
                total_weight[j] += sim;
            }
        }

        let initial = 1.0 / n as f64;
        let mut scores = vec![initial; n];
        let mut new_scores = vec![0.0; n];
        let teleport = (1.0 - self.damping) / n as f64;

        let mut iterations = 0;
        let mut delta = f64::MAX;
        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            // Nodes with no edges redistribute their mass uniformly.
            let dangling_mass: f64 = (0..n)
                .filter(|&i| total_weight[i] == 0.0)
                .map(|i| scores[i])
                .sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            new_scores.fill(teleport + dangling_contribution);

            for (node, &node_score) in scores.iter().enumerate() {
                if total_weight[node] > 0.0 {
                    for neighbor in 0..n {
                        let weight = similarity[node][neighbor];
                        if weight > 0.0 {
                            new_scores[neighbor] +=
                                self.damping * node_score * weight / total_weight[node];
                        }
                    }
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Normalise for numerical stability.
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }
        scores
    }
}

/// Cosine similarity between two sparse term vectors.
fn cosine(a: &BTreeMap<String, f64>, b: &BTreeMap<String, f64>) -> f64 {
    let norm_a: f64 = a.values().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let mut dot = 0.0;
    for (term, weight) in a {
        if let Some(other) = b.get(term) {
            dot += weight * other;
        }
    }
    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "The cat sat on the mat near the door. \
                        A cat sat quietly on a mat all morning. \
                        Quantum physics describes subatomic particles. \
                        The mat was where the cat liked to sit.";

    #[test]
    fn test_empty_input_fails() {
        let ranker = Ranker::new();
        assert!(matches!(ranker.rank("", 3), Err(RankError::EmptyInput)));
        assert!(matches!(ranker.rank("   ", 3), Err(RankError::EmptyInput)));
    }

    #[test]
    fn test_count_clamped_to_available() {
        let ranker = Ranker::new();
        let result = ranker.rank("One sentence. Two sentences.", 10).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_single_sentence() {
        let ranker = Ranker::new();
        let result = ranker.rank("Just the one sentence here.", 3).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "Just the one sentence here.");
        assert!((result[0].score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_selection_in_appearance_order() {
        let ranker = Ranker::new();
        let result = ranker.rank(TEXT, 3).unwrap();
        assert_eq!(result.len(), 3);
        for pair in result.windows(2) {
            assert!(pair[0].index < pair[1].index);
        }
    }

    #[test]
    fn test_central_sentence_outranks_outlier() {
        // Three mutually similar sentences and one unrelated outlier: the
        // top pick must come from the similar cluster.
        let ranker = Ranker::new();
        let result = ranker.rank(TEXT, 1).unwrap();
        assert!(result[0].text.contains("cat"));
    }

    #[test]
    fn test_deterministic() {
        let ranker = Ranker::new();
        let first = ranker.rank(TEXT, 2).unwrap();
        let second = ranker.rank(TEXT, 2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_scores_sum_to_one() {
        let ranker = Ranker::new();
        let result = ranker.rank(TEXT, 4).unwrap();
        let sum: f64 = result.iter().map(|r| r.score).sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_higher_damping_widens_score_spread() {
        // More damping means more mass flows along similarity edges, so
        // the cluster's advantage over the outlier grows.
        fn spread(ranker: &Ranker) -> f64 {
            let ranked = ranker.rank(TEXT, 4).unwrap();
            let max = ranked.iter().map(|r| r.score).fold(f64::MIN, f64::max);
            let min = ranked.iter().map(|r| r.score).fold(f64::MAX, f64::min);
            max - min
        }

        let low = Ranker::new().with_damping(0.5);
        let high = Ranker::new().with_damping(0.95);
        assert!(spread(&high) > spread(&low));
    }

    #[test]
    fn test_iteration_budget_of_one_still_ranks() {
        // One iteration cannot converge, but selection stays valid,
        // deterministic and normalised.
        let ranker = Ranker::new().with_max_iterations(1);
        let first = ranker.rank(TEXT, 2).unwrap();
        let second = ranker.rank(TEXT, 2).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);

        let all = ranker.rank(TEXT, 4).unwrap();
        let sum: f64 = all.iter().map(|r| r.score).sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_disconnected_sentences_score_uniformly() {
        // No shared vocabulary at all: every sentence is a dangling node
        // and scores stay uniform, so ties fall back to appearance order.
        let ranker = Ranker::new();
        let text = "Apples grow. Trains run. Planets orbit.";
        let result = ranker.rank(text, 2).unwrap();
        assert_eq!(result[0].index, 0);
        assert_eq!(result[1].index, 1);
    }
}
