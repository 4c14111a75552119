//! Remote AI assessment: prompt, call, and validate the structured reply

use crate::config::AiConfig;
use crate::error::AiError;
use crate::llm::client::{ChatClient, RetryPolicy};
use crate::llm::prompts::{PromptParams, PromptTemplates};
use crate::processing::ats_matcher::{ExternalAssessment, Verdict};
use serde::Deserialize;
use std::future::Future;

/// Anything that can produce an external score/keyword assessment
pub trait AssessmentProvider {
    fn assess(
        &self,
        job_text: &str,
        resume_text: &str,
    ) -> impl Future<Output = Result<ExternalAssessment, AiError>> + Send;
}

/// Assessment provider backed by a chat completions model
pub struct AiAnalyzer {
    client: ChatClient,
    policy: RetryPolicy,
    prompt_templates: PromptTemplates,
    max_keywords: usize,
}

/// Reply shape as the model is asked to produce it
#[derive(Debug, Deserialize)]
struct RawAssessment {
    score: f64,
    #[serde(default)]
    verdict: Option<String>,
    #[serde(default, alias = "matchedKeywords")]
    matched_keywords: Vec<String>,
    #[serde(default, alias = "missingKeywords")]
    missing_keywords: Vec<String>,
    #[serde(default, alias = "actionPlan")]
    action_plan: Vec<String>,
}

impl AiAnalyzer {
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        Ok(Self::new(ChatClient::from_config(config)?, RetryPolicy::from_config(config))
            .with_max_keywords(config.fallback_keyword_limit))
    }

    pub fn new(client: ChatClient, policy: RetryPolicy) -> Self {
        Self {
            client,
            policy,
            prompt_templates: PromptTemplates::default(),
            max_keywords: 15,
        }
    }

    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }
}

impl AssessmentProvider for AiAnalyzer {
    async fn assess(&self, job_text: &str, resume_text: &str) -> Result<ExternalAssessment, AiError> {
        let rendered = self.prompt_templates.render_assessment(&PromptParams {
            resume_content: resume_text.to_string(),
            job_content: job_text.to_string(),
            max_keywords: self.max_keywords,
        });
        let prompt = rendered.as_str();
        let system = self.prompt_templates.system.as_str();

        self.policy
            .run(|attempt| {
                log::debug!("Requesting assessment from {} (attempt {})", self.client.model(), attempt);
                async move {
                    let reply = self.client.complete(system, prompt).await?;
                    parse_assessment(&reply)
                }
            })
            .await
    }
}

/// Parse and validate the model reply.
///
/// Non-JSON text is a malformed payload; JSON of the wrong shape or with an
/// out-of-range score is a schema violation.
pub fn parse_assessment(reply: &str) -> Result<ExternalAssessment, AiError> {
    let value: serde_json::Value = serde_json::from_str(strip_json_fences(reply))
        .map_err(|e| AiError::MalformedPayload(e.to_string()))?;

    let raw: RawAssessment =
        serde_json::from_value(value).map_err(|e| AiError::SchemaViolation(e.to_string()))?;

    if !raw.score.is_finite() || !(0.0..=100.0).contains(&raw.score) {
        return Err(AiError::SchemaViolation(format!(
            "score must be between 0 and 100, got {}",
            raw.score
        )));
    }

    Ok(ExternalAssessment {
        score: raw.score.round() as u8,
        verdict: raw.verdict.as_deref().and_then(Verdict::from_label),
        matched_keywords: clean_keywords(raw.matched_keywords),
        missing_keywords: clean_keywords(raw.missing_keywords),
        action_plan: raw
            .action_plan
            .into_iter()
            .map(|step| step.trim().to_string())
            .filter(|step| !step.is_empty())
            .collect(),
    })
}

fn clean_keywords(keywords: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() && !cleaned.contains(&keyword) {
            cleaned.push(keyword);
        }
    }
    cleaned
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped.strip_suffix("```").map(str::trim).unwrap_or(stripped)
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_assessment() {
        let reply = r#"{
            "score": 67.4,
            "verdict": "Good Potential",
            "matched_keywords": ["React", "redux", "react"],
            "missing_keywords": [" TypeScript ", "tailwind"],
            "action_plan": ["Add TypeScript projects", "  "]
        }"#;

        let assessment = parse_assessment(reply).unwrap();

        assert_eq!(assessment.score, 67);
        assert_eq!(assessment.verdict, Some(Verdict::Good));
        assert_eq!(assessment.matched_keywords, vec!["react", "redux"]);
        assert_eq!(assessment.missing_keywords, vec!["typescript", "tailwind"]);
        assert_eq!(assessment.action_plan, vec!["Add TypeScript projects"]);
    }

    #[test]
    fn test_parse_camel_case_and_fences() {
        let reply = "```json\n{\"score\": 85, \"missingKeywords\": [], \"actionPlan\": [\"Proofread\"]}\n```";

        let assessment = parse_assessment(reply).unwrap();

        assert_eq!(assessment.score, 85);
        assert_eq!(assessment.verdict, None);
        assert!(assessment.missing_keywords.is_empty());
        assert_eq!(assessment.action_plan, vec!["Proofread"]);
    }

    #[test]
    fn test_non_json_is_malformed() {
        let result = parse_assessment("Sure! Here is my analysis of the resume.");
        assert!(matches!(result, Err(AiError::MalformedPayload(_))));
    }

    #[test]
    fn test_wrong_shape_is_schema_violation() {
        assert!(matches!(
            parse_assessment(r#"{"verdict": "Excellent"}"#),
            Err(AiError::SchemaViolation(_))
        ));
        assert!(matches!(
            parse_assessment(r#"{"score": "high"}"#),
            Err(AiError::SchemaViolation(_))
        ));
        assert!(matches!(
            parse_assessment(r#"{"score": 140}"#),
            Err(AiError::SchemaViolation(_))
        ));
    }

    #[test]
    fn test_strip_json_fences() {
        assert_eq!(strip_json_fences("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_json_fences("```\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_json_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }
}
