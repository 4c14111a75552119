//! Report structure shared by every output format

use crate::processing::analyzer::{Analysis, AnalysisMode};
use crate::processing::ats_matcher::{ScoreBreakdown, Verdict};
use crate::processing::signals::{ChecklistItem, StructuralSignals};
use crate::processing::suggestions::Suggestion;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a formatter needs to present one analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub score: u8,
    pub verdict: VerdictSummary,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub breakdown: Option<ScoreBreakdown>,
    pub signals: StructuralSignals,
    pub checklist: Vec<ChecklistItem>,
    pub suggestions: Vec<Suggestion>,
    /// Steps to show under "Action Plan": the AI plan when one was
    /// returned, otherwise the local suggestion texts
    pub action_plan: Vec<String>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictSummary {
    pub tier: Verdict,
    pub title: String,
    pub badge: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub processing_time_ms: u64,
    pub mode: AnalysisMode,
    pub resume_file: String,
    pub job_file: String,
    pub version: String,
}

impl From<Verdict> for VerdictSummary {
    fn from(verdict: Verdict) -> Self {
        Self {
            tier: verdict,
            title: verdict.title().to_string(),
            badge: verdict.badge().to_string(),
            description: verdict.description().to_string(),
        }
    }
}

impl AnalysisReport {
    pub fn from_analysis(analysis: &Analysis, resume_file: &str, job_file: &str) -> Self {
        let action_plan = if analysis.action_plan.is_empty() {
            analysis.suggestions.iter().map(|s| s.text.clone()).collect()
        } else {
            analysis.action_plan.clone()
        };

        Self {
            score: analysis.result.score,
            verdict: analysis.result.verdict.into(),
            matched_keywords: analysis.result.matched_keywords.clone(),
            missing_keywords: analysis.result.missing_keywords.clone(),
            breakdown: analysis.result.breakdown,
            signals: analysis.signals,
            checklist: analysis.signals.checklist(),
            suggestions: analysis.suggestions.clone(),
            action_plan,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                processing_time_ms: analysis.processing_time_ms,
                mode: analysis.mode,
                resume_file: resume_file.to_string(),
                job_file: job_file.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn mode_label(&self) -> &'static str {
        match self.metadata.mode {
            AnalysisMode::Local => "Local keyword analysis",
            AnalysisMode::Ai => "AI assessment",
            AnalysisMode::OfflineFallback => "Offline analysis (AI unavailable)",
        }
    }
}
