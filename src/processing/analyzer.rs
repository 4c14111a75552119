//! Main analysis engine combining keyword scoring, structural signals and
//! suggestions, with an optional remote assessment in front of it

use crate::config::{AiConfig, Config};
use crate::error::{Result, ResuMatchError};
use crate::llm::analyzer::AssessmentProvider;
use crate::processing::ats_matcher::{ExternalAssessment, MatchScorer, ScoreResult};
use crate::processing::signals::{SignalDetector, StructuralSignals};
use crate::processing::suggestions::{Suggestion, SuggestionGenerator};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Where the score and keyword lists come from
#[derive(Debug, Clone, PartialEq)]
pub enum KeywordSource {
    /// Frequency-ranked extraction from the job description
    Local,
    /// An assessment supplied by an external collaborator
    External(ExternalAssessment),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisMode {
    Local,
    Ai,
    /// AI was requested but failed; the local scorer produced the result
    OfflineFallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub result: ScoreResult,
    pub signals: StructuralSignals,
    pub suggestions: Vec<Suggestion>,
    /// Steps proposed by the external assessment, if any
    pub action_plan: Vec<String>,
    pub mode: AnalysisMode,
    pub processing_time_ms: u64,
}

pub struct AnalysisEngine {
    scorer: MatchScorer,
    signal_detector: SignalDetector,
    suggestion_generator: SuggestionGenerator,
    ai: AiConfig,
}

/// Score a resume against a job description with the local algorithm
pub fn analyze(job_text: &str, resume_text: &str, config: &Config) -> Result<ScoreResult> {
    let engine = AnalysisEngine::new(config)?;
    Ok(engine.analyze(job_text, resume_text, &KeywordSource::Local)?.result)
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            scorer: MatchScorer::new(&config.scoring, &config.signals)?,
            signal_detector: SignalDetector::new(&config.signals)?,
            suggestion_generator: SuggestionGenerator::new(&config.suggestions),
            ai: config.ai.clone(),
        })
    }

    /// Run one analysis. Refuses empty inputs rather than scoring them.
    pub fn analyze(&self, job_text: &str, resume_text: &str, source: &KeywordSource) -> Result<Analysis> {
        let start_time = Instant::now();
        Self::validate_inputs(job_text, resume_text)?;

        let signals = self.signal_detector.detect(resume_text);

        let (result, action_plan, mode) = match source {
            KeywordSource::Local => (
                self.scorer.score(job_text, resume_text, &signals),
                Vec::new(),
                AnalysisMode::Local,
            ),
            KeywordSource::External(assessment) => (
                self.scorer.score_external(
                    job_text,
                    resume_text,
                    assessment,
                    self.ai.fallback_score_threshold,
                    self.ai.fallback_keyword_limit,
                ),
                assessment.action_plan.clone(),
                AnalysisMode::Ai,
            ),
        };

        let suggestions = self.suggestion_generator.generate(&result, &signals);

        log::info!(
            "Analysis complete: score {} ({}), {} matched, {} missing",
            result.score,
            result.verdict,
            result.matched_keywords.len(),
            result.missing_keywords.len()
        );

        Ok(Analysis {
            result,
            signals,
            suggestions,
            action_plan,
            mode,
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    /// Ask `provider` first; any provider failure falls back to local scoring
    pub async fn analyze_with_provider<P: AssessmentProvider>(
        &self,
        job_text: &str,
        resume_text: &str,
        provider: &P,
    ) -> Result<Analysis> {
        Self::validate_inputs(job_text, resume_text)?;

        match provider.assess(job_text, resume_text).await {
            Ok(assessment) => {
                log::info!("AI assessment completed with score {}", assessment.score);
                self.analyze(job_text, resume_text, &KeywordSource::External(assessment))
            }
            Err(e) => {
                log::warn!("AI assessment failed, using offline analysis: {}", e);
                let mut analysis = self.analyze(job_text, resume_text, &KeywordSource::Local)?;
                analysis.mode = AnalysisMode::OfflineFallback;
                Ok(analysis)
            }
        }
    }

    fn validate_inputs(job_text: &str, resume_text: &str) -> Result<()> {
        if job_text.trim().is_empty() {
            return Err(ResuMatchError::InvalidInput("Job description is empty".to_string()));
        }
        if resume_text.trim().is_empty() {
            return Err(ResuMatchError::InvalidInput("Resume is empty".to_string()));
        }
        Ok(())
    }
}
