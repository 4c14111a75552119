//! Prompt templates for the remote ATS assessment

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub system: String,
    pub assessment: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            system: SYSTEM_TEMPLATE.to_string(),
            assessment: ASSESSMENT_TEMPLATE.to_string(),
        }
    }
}

/// Parameters for prompt template substitution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptParams {
    pub resume_content: String,
    pub job_content: String,
    pub max_keywords: usize,
}

impl PromptTemplates {
    pub fn render_assessment(&self, params: &PromptParams) -> String {
        log::debug!(
            "Rendering assessment prompt (resume {} chars, job {} chars)",
            params.resume_content.len(),
            params.job_content.len()
        );

        let max_keywords = params.max_keywords.to_string();
        render(
            &self.assessment,
            &[
                ("{max_keywords}", max_keywords.as_str()),
                ("{resume}", params.resume_content.as_str()),
                ("{job}", params.job_content.as_str()),
            ],
        )
    }
}

/// Substitute placeholders in one left-to-right pass. Substituted text is
/// never rescanned, so braces inside a resume or posting stay literal.
fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        rendered.push_str(&rest[..start]);
        rest = &rest[start..];

        match substitutions.iter().find(|(placeholder, _)| rest.starts_with(placeholder)) {
            Some((placeholder, value)) => {
                rendered.push_str(value);
                rest = &rest[placeholder.len()..];
            }
            None => {
                rendered.push('{');
                rest = &rest[1..];
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

const SYSTEM_TEMPLATE: &str = "You are an applicant tracking system. You compare a resume against a job posting and answer with a single JSON object and nothing else.";

const ASSESSMENT_TEMPLATE: &str = r#"TASK: Score how well the resume below matches the job posting, the way an ATS keyword screen would.

<JOB POSTING>
{job}
</JOB POSTING>

<RESUME>
{resume}
</RESUME>

Respond with JSON using exactly these fields:
{
  "score": integer from 0 to 100,
  "verdict": "Excellent Match" | "Good Potential" | "Significant Gaps",
  "matched_keywords": [lowercase keywords from the posting found in the resume],
  "missing_keywords": [at most {max_keywords} lowercase keywords from the posting absent from the resume, most important first],
  "action_plan": [3 to 5 short, specific edits to make to this resume]
}

IMPORTANT: Reference the actual resume content above, not generic advice."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_rendering() {
        let templates = PromptTemplates::default();
        let params = PromptParams {
            resume_content: "Frontend Developer with React experience.".to_string(),
            job_content: "Senior Frontend Engineer requiring TypeScript.".to_string(),
            max_keywords: 15,
        };

        let prompt = templates.render_assessment(&params);

        assert!(prompt.contains("Frontend Developer with React experience."));
        assert!(prompt.contains("Senior Frontend Engineer requiring TypeScript."));
        assert!(prompt.contains("at most 15 lowercase keywords"));
        assert!(!prompt.contains("{resume}"));
        assert!(!prompt.contains("{job}"));
    }

    #[test]
    fn test_placeholders_inside_inputs_stay_literal() {
        let templates = PromptTemplates::default();
        let params = PromptParams {
            resume_content: "Built a {job} scheduler and a {max_keywords} widget.".to_string(),
            job_content: "Backend engineer. Paste your {resume} here.".to_string(),
            max_keywords: 15,
        };

        let prompt = templates.render_assessment(&params);

        assert!(prompt.contains("Built a {job} scheduler and a {max_keywords} widget."));
        assert!(prompt.contains("Backend engineer. Paste your {resume} here."));
        assert_eq!(prompt.matches("Backend engineer.").count(), 1);
        assert!(prompt.contains("\"score\": integer from 0 to 100"));
        assert!(prompt.contains("at most 15 lowercase keywords"));
    }

    #[test]
    fn test_templates_request_json_fields() {
        let templates = PromptTemplates::default();
        for field in ["\"score\"", "\"verdict\"", "\"missing_keywords\"", "\"action_plan\""] {
            assert!(templates.assessment.contains(field), "missing {}", field);
        }
        assert!(templates.system.contains("JSON"));
    }
}
