//! Text normalization and frequency-ranked keyword extraction

use crate::error::Result;
use crate::processing::stop_words::is_stop_word;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub struct TextProcessor {
    min_keyword_length: usize,
    non_word_regex: Regex,
    whitespace_regex: Regex,
}

/// A keyword and how often it occurs in one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordFrequency {
    pub keyword: String,
    pub count: usize,
}

impl TextProcessor {
    pub fn new(min_keyword_length: usize) -> Result<Self> {
        Ok(Self {
            min_keyword_length,
            non_word_regex: Regex::new(r"[^\w\s]")?,
            whitespace_regex: Regex::new(r"\s+")?,
        })
    }

    /// Lowercase, drop everything that is neither a word character nor
    /// whitespace, collapse whitespace runs and trim. Total and idempotent.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = self.non_word_regex.replace_all(&lowered, "");
        self.whitespace_regex
            .replace_all(&stripped, " ")
            .trim()
            .to_string()
    }

    /// Normalized tokens in text order, short tokens and stop words removed
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split(' ')
            .filter(|word| self.is_keyword_candidate(word))
            .map(str::to_string)
            .collect()
    }

    fn is_keyword_candidate(&self, word: &str) -> bool {
        word.chars().count() >= self.min_keyword_length && !is_stop_word(word)
    }

    /// Keyword counts sorted by descending frequency.
    ///
    /// Equal counts keep first-occurrence order.
    pub fn keyword_frequencies(&self, text: &str) -> Vec<KeywordFrequency> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut ranked: Vec<KeywordFrequency> = Vec::new();

        for token in self.tokenize(text) {
            let slot = *index.entry(token).or_insert_with_key(|keyword| {
                ranked.push(KeywordFrequency {
                    keyword: keyword.clone(),
                    count: 0,
                });
                ranked.len() - 1
            });
            ranked[slot].count += 1;
        }

        // sort_by is stable, so ties stay in first-seen order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// Full ranked keyword list; callers slice to their own cap
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.keyword_frequencies(text)
            .into_iter()
            .map(|entry| entry.keyword)
            .collect()
    }

    /// Every keyword token present anywhere in the text
    pub fn membership_set(&self, text: &str) -> HashSet<String> {
        self.tokenize(text).into_iter().collect()
    }
}
