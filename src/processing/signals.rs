//! Structural resume signals: contact details, profile links and length

use crate::config::SignalConfig;
use crate::error::{Result, ResuMatchError};
use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Heuristic completeness signals computed once per resume text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralSignals {
    pub has_email: bool,
    pub has_phone: bool,
    pub has_link: bool,
    pub word_count: usize,
}

/// One pass/fail row of the resume checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,
    pub passed: bool,
}

/// Word range treated as a healthy resume length in the checklist
pub const IDEAL_WORD_RANGE: std::ops::RangeInclusive<usize> = 300..=1200;

pub struct SignalDetector {
    email_regex: Regex,
    phone_regex: Regex,
    link_matcher: AhoCorasick,
}

impl SignalDetector {
    pub fn new(config: &SignalConfig) -> Result<Self> {
        let email_regex = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")?;

        // Optional country code, optional parentheses, 3-3-4 digit groups
        let phone_regex = Regex::new(r"(\+\d{1,2}\s)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}")?;

        let link_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&config.link_markers)
            .map_err(|e| ResuMatchError::Processing(format!("Failed to build link matcher: {}", e)))?;

        Ok(Self {
            email_regex,
            phone_regex,
            link_matcher,
        })
    }

    /// Inspect raw, unnormalized resume text
    pub fn detect(&self, resume_text: &str) -> StructuralSignals {
        StructuralSignals {
            has_email: self.email_regex.is_match(resume_text),
            has_phone: self.phone_regex.is_match(resume_text),
            has_link: self.link_matcher.is_match(resume_text),
            word_count: resume_text.split_whitespace().count(),
        }
    }
}

impl StructuralSignals {
    pub fn has_ideal_length(&self) -> bool {
        IDEAL_WORD_RANGE.contains(&self.word_count)
    }

    pub fn checklist(&self) -> Vec<ChecklistItem> {
        vec![
            ChecklistItem { label: "Email address".to_string(), passed: self.has_email },
            ChecklistItem { label: "Phone number".to_string(), passed: self.has_phone },
            ChecklistItem { label: "Profile link (LinkedIn, GitHub, portfolio)".to_string(), passed: self.has_link },
            ChecklistItem {
                label: format!(
                    "Length between {} and {} words",
                    IDEAL_WORD_RANGE.start(),
                    IDEAL_WORD_RANGE.end()
                ),
                passed: self.has_ideal_length(),
            },
        ]
    }
}
