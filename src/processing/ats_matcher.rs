//! ATS (Applicant Tracking System) keyword matching and scoring

use crate::config::{ScoringConfig, SignalConfig};
use crate::error::Result;
use crate::processing::signals::StructuralSignals;
use crate::processing::text_processor::TextProcessor;
use serde::{Deserialize, Serialize};

/// Three-band classification of a final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Excellent,
    Good,
    Poor,
}

/// Outcome of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Final weighted score, 0-100
    pub score: u8,
    pub verdict: Verdict,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    /// Component scores; absent when an external assessment supplied the score
    pub breakdown: Option<ScoreBreakdown>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keyword_score: f64,
    pub format_score: i32,
    pub content_weight: f64,
    pub format_weight: f64,
}

/// Score, verdict and keyword lists produced outside the local scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalAssessment {
    pub score: u8,
    pub verdict: Option<Verdict>,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub action_plan: Vec<String>,
}

/// Scores a resume against a job description by keyword overlap and
/// structural completeness
pub struct MatchScorer {
    text_processor: TextProcessor,
    scoring: ScoringConfig,
    signals: SignalConfig,
}

impl Verdict {
    /// Each tier includes its lower bound
    pub fn from_score(score: u8, scoring: &ScoringConfig) -> Self {
        if score >= scoring.excellent_threshold {
            Verdict::Excellent
        } else if score >= scoring.good_threshold {
            Verdict::Good
        } else {
            Verdict::Poor
        }
    }

    /// Parse a verdict label. Exact tier titles and badges win; otherwise a
    /// lenient keyword match, which gives up on negated phrases.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_lowercase();

        for verdict in [Verdict::Excellent, Verdict::Good, Verdict::Poor] {
            if label == verdict.title().to_lowercase() || label == verdict.badge().to_lowercase() {
                return Some(verdict);
            }
        }

        let negated = label
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| matches!(word, "not" | "no" | "lacks" | "lacking" | "without"));
        if negated {
            return None;
        }

        if label.contains("excellent") || label.contains("strong") || label.contains("high confidence") {
            Some(Verdict::Excellent)
        } else if label.contains("good") || label.contains("moderate") || label.contains("optimization") {
            Some(Verdict::Good)
        } else if label.contains("poor") || label.contains("gap") || label.contains("risk") || label.contains("weak") {
            Some(Verdict::Poor)
        } else {
            None
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Verdict::Excellent => "Excellent Match",
            Verdict::Good => "Good Potential",
            Verdict::Poor => "Significant Gaps",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            Verdict::Excellent => "Top 10% Candidate",
            Verdict::Good => "Optimization Needed",
            Verdict::Poor => "High Risk",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Verdict::Excellent => {
                "Your resume is highly optimized. You have a strong chance of passing the ATS filter."
            }
            Verdict::Good => {
                "You have the basics, but you're missing specific technical keywords the employer is scanning for."
            }
            Verdict::Poor => {
                "The ATS may reject this resume. Focus on adding the missing keywords listed below."
            }
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl MatchScorer {
    pub fn new(scoring: &ScoringConfig, signals: &SignalConfig) -> Result<Self> {
        Ok(Self {
            text_processor: TextProcessor::new(scoring.min_keyword_length)?,
            scoring: scoring.clone(),
            signals: signals.clone(),
        })
    }

    /// Local scoring: capped keyword overlap blended with the format score
    pub fn score(&self, job_text: &str, resume_text: &str, signals: &StructuralSignals) -> ScoreResult {
        let scoring_keywords: Vec<String> = self
            .text_processor
            .extract_keywords(job_text)
            .into_iter()
            .take(self.scoring.top_keyword_cap)
            .collect();

        let resume_words = self.text_processor.membership_set(resume_text);

        let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = scoring_keywords
            .iter()
            .cloned()
            .partition(|keyword| resume_words.contains(keyword));

        let keyword_score = Self::keyword_score(matched_keywords.len(), scoring_keywords.len());
        let format_score = self.format_score(signals);

        let weighted = keyword_score * self.scoring.content_weight
            + f64::from(format_score) * self.scoring.format_weight;
        let score = weighted.round().clamp(0.0, 100.0) as u8;

        log::debug!(
            "Scored {} keywords: {} matched, keyword score {:.1}, format score {}, final {}",
            scoring_keywords.len(),
            matched_keywords.len(),
            keyword_score,
            format_score,
            score
        );

        ScoreResult {
            score,
            verdict: Verdict::from_score(score, &self.scoring),
            matched_keywords,
            missing_keywords,
            breakdown: Some(ScoreBreakdown {
                keyword_score,
                format_score,
                content_weight: self.scoring.content_weight,
                format_weight: self.scoring.format_weight,
            }),
        }
    }

    /// Adopt an externally produced assessment.
    ///
    /// When it reports no missing keywords despite a score under
    /// `fallback_score_threshold`, the uncapped job keywords absent from the
    /// resume are listed instead, up to `fallback_keyword_limit`. A keyword
    /// never appears in both the matched and missing lists, and the verdict
    /// always agrees with the score band.
    pub fn score_external(
        &self,
        job_text: &str,
        resume_text: &str,
        assessment: &ExternalAssessment,
        fallback_score_threshold: u8,
        fallback_keyword_limit: usize,
    ) -> ScoreResult {
        let score = assessment.score.min(100);

        let matched_keywords = assessment.matched_keywords.clone();

        let missing_keywords: Vec<String> = if assessment.missing_keywords.is_empty() && score < fallback_score_threshold {
            log::info!("Assessment listed no missing keywords; filling from local extraction");
            let resume_words = self.text_processor.membership_set(resume_text);
            self.text_processor
                .extract_keywords(job_text)
                .into_iter()
                .filter(|keyword| !resume_words.contains(keyword) && !matched_keywords.contains(keyword))
                .take(fallback_keyword_limit)
                .collect()
        } else {
            assessment
                .missing_keywords
                .iter()
                .filter(|keyword| !matched_keywords.contains(keyword))
                .cloned()
                .collect()
        };

        let score_tier = Verdict::from_score(score, &self.scoring);
        let verdict = match assessment.verdict {
            Some(label_tier) if label_tier != score_tier => {
                log::debug!(
                    "Assessment verdict {} disagrees with score {}; using {}",
                    label_tier,
                    score,
                    score_tier
                );
                score_tier
            }
            Some(label_tier) => label_tier,
            None => score_tier,
        };

        ScoreResult {
            score,
            verdict,
            matched_keywords,
            missing_keywords,
            breakdown: None,
        }
    }

    /// Matched share of the scored keywords, 0 when there is nothing to score
    pub fn keyword_score(matched: usize, considered: usize) -> f64 {
        if considered == 0 {
            0.0
        } else {
            matched as f64 / considered as f64 * 100.0
        }
    }

    /// 100 minus independent penalties, floored at 0
    pub fn format_score(&self, signals: &StructuralSignals) -> i32 {
        let config = &self.signals;
        let mut score = 100;

        if !signals.has_email {
            score -= config.missing_email_penalty;
        }
        if !signals.has_phone {
            score -= config.missing_phone_penalty;
        }
        if signals.word_count < config.min_word_count {
            score -= config.too_short_penalty;
        }
        if signals.word_count > config.max_word_count {
            score -= config.too_long_penalty;
        }

        score.max(0)
    }
}
