//! Integration tests for ResuMatch

use resumatch::config::{Config, OutputFormat};
use resumatch::error::{AiError, ResuMatchError};
use resumatch::input::demo::{DEMO_JOB_DESCRIPTION, DEMO_RESUME};
use resumatch::input::InputManager;
use resumatch::llm::analyzer::AssessmentProvider;
use resumatch::output::{save_report_to_file, AnalysisReport, ReportGenerator};
use resumatch::processing::analyzer::{AnalysisEngine, AnalysisMode, KeywordSource};
use resumatch::processing::ats_matcher::{ExternalAssessment, Verdict};
use resumatch::processing::text_processor::TextProcessor;
use std::path::Path;

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(Path::new("tests/fixtures").join(name)).unwrap()
}

fn filler(words: usize) -> String {
    vec!["filler"; words].join(" ")
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(matches!(result, Err(ResuMatchError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(matches!(result, Err(ResuMatchError::InvalidInput(_))));
}

#[test]
fn test_fixture_analysis() {
    let job = read_fixture("sample_job.txt");
    let resume = read_fixture("sample_resume.txt");

    let result = resumatch::analyze(&job, &resume, &Config::default()).unwrap();

    assert_eq!(result.score, 66);
    assert_eq!(result.verdict, Verdict::Good);
    assert_eq!(result.matched_keywords.len() + result.missing_keywords.len(), 25);
    for keyword in ["react", "nodejs", "graphql", "postgresql"] {
        assert!(result.matched_keywords.contains(&keyword.to_string()), "{} should match", keyword);
    }
    assert!(result.missing_keywords.contains(&"kubernetes".to_string()));
}

#[test]
fn test_missing_keyword_scenario() {
    let job = "Senior Frontend Engineer. Leverage React.js and TypeScript with React Hooks. \
               Implement responsive designs using Tailwind CSS.";
    let resume = "Frontend developer shipping React.js and Redux apps built from React components.";

    let result = resumatch::analyze(job, resume, &Config::default()).unwrap();

    assert!(result.missing_keywords.contains(&"typescript".to_string()));
    assert!(result.missing_keywords.contains(&"tailwind".to_string()));
    assert!(result.matched_keywords.contains(&"react".to_string()));
    assert!(result.matched_keywords.contains(&"reactjs".to_string()));
}

#[test]
fn test_missing_email_costs_format_points() {
    let config = Config::default();
    let job = "Data engineer with Spark, Airflow and Snowflake";
    let with_email = "Data engineer: Spark and Airflow pipelines. dana@example.com (312) 555-0199";
    let without_email = "Data engineer: Spark and Airflow pipelines. (312) 555-0199";

    let a = resumatch::analyze(job, with_email, &config).unwrap();
    let b = resumatch::analyze(job, without_email, &config).unwrap();

    assert!(b.score < a.score);
    assert_eq!(a.score - b.score, 6);
}

#[test]
fn test_short_resume_penalty_boundary() {
    let config = Config::default();
    let job = "Platform engineer with Rust";
    let contact = "pat@example.com (206) 555-0123 Rust";

    // 4 whitespace-separated contact words, so 150 and 200 words in total
    let short = format!("{} {}", contact, filler(146));
    let long_enough = format!("{} {}", contact, filler(196));

    let short_result = resumatch::analyze(job, &short, &config).unwrap();
    let long_result = resumatch::analyze(job, &long_enough, &config).unwrap();

    assert_eq!(long_result.score - short_result.score, 6);
}

#[test]
fn test_zero_overlap() {
    let job = "Kubernetes Terraform Ansible";
    let resume = "Watercolor painting and pottery. sam@example.com (415) 555-0100";

    let result = resumatch::analyze(job, resume, &Config::default()).unwrap();

    assert!(result.matched_keywords.is_empty());
    assert_eq!(result.missing_keywords, vec!["kubernetes", "terraform", "ansible"]);
    assert_eq!(result.score, 24);
    assert_eq!(result.verdict, Verdict::Poor);
}

#[test]
fn test_empty_job_description_is_rejected() {
    let result = resumatch::analyze("  \n ", "Some resume", &Config::default());
    assert!(matches!(result, Err(ResuMatchError::InvalidInput(_))));
}

#[test]
fn test_normalization_is_idempotent_on_fixtures() {
    let processor = TextProcessor::new(3).unwrap();
    for text in [read_fixture("sample_job.txt"), read_fixture("sample_resume.txt"), DEMO_RESUME.to_string()] {
        let once = processor.normalize(&text);
        assert_eq!(processor.normalize(&once), once);
    }
}

#[test]
fn test_demo_analysis() {
    let engine = AnalysisEngine::new(&Config::default()).unwrap();
    let analysis = engine
        .analyze(DEMO_JOB_DESCRIPTION, DEMO_RESUME, &KeywordSource::Local)
        .unwrap();

    assert_eq!(analysis.result.score, 46);
    assert_eq!(analysis.result.verdict, Verdict::Poor);
    assert!(analysis.result.missing_keywords.contains(&"typescript".to_string()));
    assert!(analysis.result.matched_keywords.contains(&"react".to_string()));
    assert!(analysis.signals.has_email && analysis.signals.has_phone && analysis.signals.has_link);
    assert!(analysis.result.score <= 100);
}

struct StubProvider(ExternalAssessment);

impl AssessmentProvider for StubProvider {
    async fn assess(&self, _job_text: &str, _resume_text: &str) -> Result<ExternalAssessment, AiError> {
        Ok(self.0.clone())
    }
}

struct OfflineProvider;

impl AssessmentProvider for OfflineProvider {
    async fn assess(&self, _job_text: &str, _resume_text: &str) -> Result<ExternalAssessment, AiError> {
        Err(AiError::HttpStatus { status: 503, message: "unavailable".to_string() })
    }
}

#[tokio::test]
async fn test_external_assessment_with_empty_gaps_is_backfilled() {
    let engine = AnalysisEngine::new(&Config::default()).unwrap();
    let provider = StubProvider(ExternalAssessment {
        score: 60,
        verdict: None,
        matched_keywords: vec!["react".to_string()],
        missing_keywords: vec![],
        action_plan: vec!["Add a Kubernetes project".to_string()],
    });

    let analysis = engine
        .analyze_with_provider(&read_fixture("sample_job.txt"), &read_fixture("sample_resume.txt"), &provider)
        .await
        .unwrap();

    assert_eq!(analysis.mode, AnalysisMode::Ai);
    assert_eq!(analysis.result.score, 60);
    assert_eq!(analysis.result.verdict, Verdict::Good);
    assert_eq!(analysis.result.missing_keywords.len(), 15);
    assert!(analysis.result.missing_keywords.contains(&"kubernetes".to_string()));
    assert_eq!(analysis.action_plan, vec!["Add a Kubernetes project"]);
}

#[tokio::test]
async fn test_failed_assessment_falls_back_to_offline() {
    let engine = AnalysisEngine::new(&Config::default()).unwrap();
    let job = read_fixture("sample_job.txt");
    let resume = read_fixture("sample_resume.txt");

    let analysis = engine.analyze_with_provider(&job, &resume, &OfflineProvider).await.unwrap();

    assert_eq!(analysis.mode, AnalysisMode::OfflineFallback);
    assert_eq!(analysis.result.score, 66);
}

#[test]
fn test_report_export_to_file() {
    let engine = AnalysisEngine::new(&Config::default()).unwrap();
    let analysis = engine
        .analyze(DEMO_JOB_DESCRIPTION, DEMO_RESUME, &KeywordSource::Local)
        .unwrap();
    let report = AnalysisReport::from_analysis(&analysis, "demo_resume.txt", "demo_job.txt");

    let content = ReportGenerator::with_options(false, false, true)
        .generate_report(&report, OutputFormat::Text)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ResuMatch_Report.txt");
    save_report_to_file(&content, &path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.starts_with("ResuMatch.ai Analysis Report\n\nMatch Score: 46%\nVerdict: Significant Gaps"));
    assert!(saved.contains("- Add high-impact keywords: build, senior, engineer."));
}

#[test]
fn test_config_set_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::load_from(&path).unwrap();
    config.set_value("scoring.top_keyword_cap", "10").unwrap();
    config.set_value("output.format", "Html").unwrap();
    config.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.scoring.top_keyword_cap, 10);
    assert_eq!(reloaded.output.format, OutputFormat::Html);

    assert!(config.set_value("scoring.content_weight", "1.5").is_err());
    assert!(config.set_value("scoring.no_such_key", "1").is_err());
}
