use std::collections::HashSet;

/// Common English function words excluded from keyword comparison
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "can", "must", "shall", "this", "that", "these",
    "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];

/// Minimum token length kept by the keyword extractor
const MIN_TOKEN_LEN: usize = 3;

/// Calculate the Jaccard similarity between two sets of strings
///
/// # Returns
/// |intersection| / |union| in [0, 1]; 0 when both sets are empty
#[inline]
pub fn jaccard_similarity(set1: &HashSet<String>, set2: &HashSet<String>) -> f64 {
    let intersection = set1.intersection(set2).count();
    let union = set1.len() + set2.len() - intersection;

    if union == 0 {
        return 0.0;
    }

    intersection as f64 / union as f64
}

/// Extract comparison keywords from free text
///
/// Lower-cases the text, replaces every non-word character with a space,
/// splits on whitespace, and keeps tokens that are at least three characters
/// long and not stop words.
pub fn extract_keywords(text: &str) -> HashSet<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();

    normalized
        .split_whitespace()
        .filter(|word| word.len() >= MIN_TOKEN_LEN && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}
