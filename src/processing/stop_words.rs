//! Stop words excluded from keyword significance

use std::collections::HashSet;
use std::sync::OnceLock;

/// General English function words plus recruiting boilerplate that shows up
/// in nearly every posting. Entries are in normalized form: contractions are
/// absent because normalization strips their apostrophes.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "before", "being", "below", "between", "both", "but", "by", "cannot", "could",
    "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he",
    "her", "here", "hers", "herself", "him", "himself", "his", "how", "i",
    "if", "in", "into", "is", "it", "its", "itself", "me", "more", "most",
    "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other", "ought", "our", "ours",
    "ourselves", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then", "there",
    "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why",
    "with", "would", "you", "your", "yours", "yourself",
    "yourselves", "will", "can", "role", "work", "job", "team", "experience", "skills", "requirements", "responsibilities",
    "proficiency", "strong", "knowledge", "familiarity", "understanding", "looking", "seeking", "years",
];

fn stop_word_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// Membership test against the canonical stop-word list
pub fn is_stop_word(word: &str) -> bool {
    stop_word_set().contains(word)
}
