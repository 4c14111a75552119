//! Prioritized remediation suggestions

use crate::config::SuggestionConfig;
use crate::processing::ats_matcher::ScoreResult;
use crate::processing::signals::StructuralSignals;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionCategory {
    MissingKeywords,
    Contact,
    Length,
    Summary,
    Positive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: SuggestionCategory,
    pub text: String,
}

pub struct SuggestionGenerator {
    config: SuggestionConfig,
}

impl SuggestionGenerator {
    pub fn new(config: &SuggestionConfig) -> Self {
        Self { config: config.clone() }
    }

    /// Fixed rule cascade. Missing keywords always come first when present;
    /// the positive note only appears when nothing else fired.
    pub fn generate(&self, result: &ScoreResult, signals: &StructuralSignals) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        if !result.missing_keywords.is_empty() {
            let top: Vec<&str> = result
                .missing_keywords
                .iter()
                .take(self.config.keywords_named)
                .map(String::as_str)
                .collect();
            suggestions.push(Suggestion {
                category: SuggestionCategory::MissingKeywords,
                text: format!("Add high-impact keywords: {}.", top.join(", ")),
            });
        }

        if !signals.has_email {
            suggestions.push(Suggestion {
                category: SuggestionCategory::Contact,
                text: "Your contact information is incomplete. Add a professional email address.".to_string(),
            });
        }

        if signals.word_count < self.config.short_resume_words {
            suggestions.push(Suggestion {
                category: SuggestionCategory::Length,
                text: "Your resume is too short. Elaborate on your projects and responsibilities.".to_string(),
            });
        }

        if result.score < self.config.low_score_threshold {
            suggestions.push(Suggestion {
                category: SuggestionCategory::Summary,
                text: "Rewrite your 'Summary' to explicitly mention the role title found in the Job Description."
                    .to_string(),
            });
        }

        if suggestions.is_empty() {
            suggestions.push(Suggestion {
                category: SuggestionCategory::Positive,
                text: "Great job! Your resume is well-optimized. Consider a human proofread next.".to_string(),
            });
        }

        suggestions
    }
}
