//! Output formatters: console, JSON, Markdown, printable HTML and plain text

use crate::config::OutputFormat;
use crate::error::{Result, ResuMatchError};
use crate::output::report::AnalysisReport;
use crate::processing::ats_matcher::Verdict;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and keyword chips
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured consumers
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Standalone HTML page suitable for printing
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Plain-text download report
pub struct TextFormatter;

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
    text_formatter: TextFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ResuMatch Analysis Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #4f46e5;
            padding-bottom: 20px;
        }
        .score {
            font-size: 3em;
            font-weight: bold;
        }
        .badge {
            display: inline-block;
            padding: 6px 14px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
        }
        .verdict-excellent { background: #16a34a; }
        .verdict-good { background: #ca8a04; }
        .verdict-poor { background: #dc2626; }
        .section { margin: 25px 0; }
        .section h2 {
            color: #4f46e5;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .chip {
            display: inline-block;
            padding: 4px 10px;
            margin: 3px;
            border-radius: 12px;
            font-size: 0.9em;
        }
        .chip-matched { background: #dcfce7; color: #166534; }
        .chip-missing { background: #fee2e2; color: #991b1b; }
        .check-pass { color: #16a34a; }
        .check-fail { color: #dc2626; }
        .plan li { margin: 8px 0; }
        .metadata {
            margin-top: 30px;
            font-size: 0.85em;
            color: #6c757d;
            border-top: 1px solid #e9ecef;
            padding-top: 15px;
        }
        @media print {
            body { background: white; padding: 0; }
            .container { box-shadow: none; }
        }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>ResuMatch Analysis Report</h1>
            <div class="score">{{ score }}%</div>
            <h2>{{ verdict_title }}</h2>
            <span class="badge {{ verdict_class }}">{{ verdict_badge }}</span>
            <p>{{ verdict_description }}</p>
        </div>

        <div class="section">
            <h2>Matched Keywords</h2>
            {% if matched_keywords.is_empty() %}
            <p>None of the top job description keywords were found.</p>
            {% else %}
            {% for keyword in matched_keywords %}<span class="chip chip-matched">{{ keyword }}</span>{% endfor %}
            {% endif %}
        </div>

        <div class="section">
            <h2>Missing Keywords</h2>
            {% if missing_keywords.is_empty() %}
            <p>No missing keywords.</p>
            {% else %}
            {% for keyword in missing_keywords %}<span class="chip chip-missing">{{ keyword }}</span>{% endfor %}
            {% endif %}
        </div>

        <div class="section">
            <h2>Resume Checklist</h2>
            <ul>
            {% for item in checklist %}
                <li class="{{ item.class }}">{{ item.mark }} {{ item.label }}</li>
            {% endfor %}
            </ul>
            <p>Word count: {{ word_count }}</p>
        </div>

        <div class="section">
            <h2>Action Plan</h2>
            <ol class="plan">
            {% for step in action_plan %}
                <li>{{ step }}</li>
            {% endfor %}
            </ol>
        </div>

        <div class="metadata">
            <p><strong>Generated by ResuMatch v{{ version }}</strong> on {{ generated_at }}</p>
            <p><strong>Mode:</strong> {{ mode }} | <strong>Processing time:</strong> {{ processing_time }}ms</p>
            <p><strong>Resume:</strong> {{ resume_file }} | <strong>Job:</strong> {{ job_file }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    score: u8,
    verdict_title: String,
    verdict_badge: String,
    verdict_description: String,
    verdict_class: &'static str,
    matched_keywords: Vec<String>,
    missing_keywords: Vec<String>,
    checklist: Vec<HtmlCheck>,
    word_count: usize,
    action_plan: Vec<String>,
    version: String,
    generated_at: String,
    mode: &'static str,
    processing_time: u64,
    resume_file: String,
    job_file: String,
}

struct HtmlCheck {
    label: String,
    mark: &'static str,
    class: &'static str,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn verdict_color(verdict: Verdict) -> Color {
        match verdict {
            Verdict::Excellent => Color::Green,
            Verdict::Good => Color::Yellow,
            Verdict::Poor => Color::Red,
        }
    }

    fn format_badge(&self, report: &AnalysisReport) -> String {
        let badge = report.verdict.badge.to_uppercase();
        if self.use_colors {
            format!("[{}]", badge.color(Self::verdict_color(report.verdict.tier)).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_keywords(&self, keywords: &[String], color: Color) -> String {
        if keywords.is_empty() {
            return "  (none)\n".to_string();
        }
        let chips: Vec<String> = keywords.iter().map(|k| self.colorize(k, color)).collect();
        format!("  {}\n", chips.join("  "))
    }

    fn format_check(&self, passed: bool) -> String {
        match (passed, self.use_colors) {
            (true, true) => "✓".green().to_string(),
            (false, true) => "✗".red().to_string(),
            (true, false) => "[x]".to_string(),
            (false, false) => "[ ]".to_string(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUMATCH ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Mode: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.mode_label(),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Match Score", 2));
        output.push_str(&format!("Score: {}% {}\n", report.score, self.format_badge(report)));
        output.push_str(&format!(
            "Verdict: {}\n",
            self.colorize(&report.verdict.title, Self::verdict_color(report.verdict.tier))
        ));
        output.push_str(&format!("{}\n", report.verdict.description));

        if self.detailed {
            if let Some(breakdown) = &report.breakdown {
                output.push_str(&self.format_header("Score Breakdown", 3));
                output.push_str(&format!(
                    "🎯 Keyword score: {:.1}% (weight: {:.0}%)\n",
                    breakdown.keyword_score,
                    breakdown.content_weight * 100.0
                ));
                output.push_str(&format!(
                    "📐 Format score: {}% (weight: {:.0}%)\n",
                    breakdown.format_score,
                    breakdown.format_weight * 100.0
                ));
            }
        }

        output.push_str(&self.format_header("✅ Matched Keywords", 2));
        output.push_str(&self.format_keywords(&report.matched_keywords, Color::Green));

        output.push_str(&self.format_header("❌ Missing Keywords", 2));
        output.push_str(&self.format_keywords(&report.missing_keywords, Color::Red));

        output.push_str(&self.format_header("📋 Resume Checklist", 2));
        for item in &report.checklist {
            output.push_str(&format!("  {} {}\n", self.format_check(item.passed), item.label));
        }
        if self.detailed {
            output.push_str(&format!("  Word count: {}\n", report.signals.word_count));
        }

        output.push_str(&self.format_header("🚀 Action Plan", 2));
        for (i, step) in report.action_plan.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, step));
        }

        if self.detailed {
            output.push_str(&format!(
                "\nResume: {} | Job: {}\n",
                report.metadata.resume_file, report.metadata.job_file
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn keyword_list(keywords: &[String]) -> String {
        if keywords.is_empty() {
            "_None_\n".to_string()
        } else {
            let chips: Vec<String> = keywords.iter().map(|k| format!("`{}`", k)).collect();
            format!("{}\n", chips.join(" "))
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut md = String::new();

        md.push_str("# ResuMatch Analysis Report\n\n");
        md.push_str(&format!("## Match Score: {}%\n\n", report.score));
        md.push_str(&format!(
            "**{}** ({})\n\n> {}\n\n",
            report.verdict.title, report.verdict.badge, report.verdict.description
        ));

        if let Some(breakdown) = &report.breakdown {
            md.push_str("| Component | Score | Weight |\n|---|---|---|\n");
            md.push_str(&format!(
                "| Keywords | {:.1}% | {:.0}% |\n",
                breakdown.keyword_score,
                breakdown.content_weight * 100.0
            ));
            md.push_str(&format!(
                "| Format | {}% | {:.0}% |\n\n",
                breakdown.format_score,
                breakdown.format_weight * 100.0
            ));
        }

        md.push_str("## Matched Keywords\n\n");
        md.push_str(&Self::keyword_list(&report.matched_keywords));
        md.push_str("\n## Missing Keywords\n\n");
        md.push_str(&Self::keyword_list(&report.missing_keywords));

        md.push_str("\n## Resume Checklist\n\n");
        for item in &report.checklist {
            md.push_str(&format!("- [{}] {}\n", if item.passed { "x" } else { " " }, item.label));
        }

        md.push_str("\n## Action Plan\n\n");
        for (i, step) in report.action_plan.iter().enumerate() {
            md.push_str(&format!("{}. {}\n", i + 1, step));
        }

        if self.include_metadata {
            md.push_str("\n---\n\n");
            md.push_str(&format!(
                "*Generated by ResuMatch v{} on {} ({}, {}ms)*\n",
                report.metadata.version,
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.mode_label(),
                report.metadata.processing_time_ms
            ));
        }

        Ok(md)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        let verdict_class = match report.verdict.tier {
            Verdict::Excellent => "verdict-excellent",
            Verdict::Good => "verdict-good",
            Verdict::Poor => "verdict-poor",
        };

        let checklist = report
            .checklist
            .iter()
            .map(|item| HtmlCheck {
                label: item.label.clone(),
                mark: if item.passed { "✓" } else { "✗" },
                class: if item.passed { "check-pass" } else { "check-fail" },
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            score: report.score,
            verdict_title: report.verdict.title.clone(),
            verdict_badge: report.verdict.badge.clone(),
            verdict_description: report.verdict.description.clone(),
            verdict_class,
            matched_keywords: report.matched_keywords.clone(),
            missing_keywords: report.missing_keywords.clone(),
            checklist,
            word_count: report.signals.word_count,
            action_plan: report.action_plan.clone(),
            version: report.metadata.version.clone(),
            generated_at: report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            mode: report.mode_label(),
            processing_time: report.metadata.processing_time_ms,
            resume_file: report.metadata.resume_file.clone(),
            job_file: report.metadata.job_file.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ResuMatchError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl OutputFormatter for TextFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let action_plan: Vec<String> = report.action_plan.iter().map(|step| format!("- {}", step)).collect();

        Ok(format!(
            "ResuMatch.ai Analysis Report\n\nMatch Score: {}%\nVerdict: {}\n\nAction Plan:\n{}\n\nGenerated on: {}",
            report.score,
            report.verdict.title,
            action_plan.join("\n"),
            report.metadata.generated_at.format("%Y-%m-%d")
        ))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(true),
            text_formatter: TextFormatter,
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        self.formatter_for(format).format_report(report)
    }

    fn formatter_for(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
            OutputFormat::Text => &self.text_formatter,
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::processing::analyzer::{AnalysisEngine, KeywordSource};

    fn report() -> AnalysisReport {
        let engine = AnalysisEngine::new(&Config::default()).unwrap();
        let analysis = engine
            .analyze(
                "Frontend developer: React, TypeScript, Tailwind",
                "Frontend developer with React. jane@example.com (555) 123-4567",
                &KeywordSource::Local,
            )
            .unwrap();
        AnalysisReport::from_analysis(&analysis, "resume.txt", "job.txt")
    }

    #[test]
    fn test_text_report_layout() {
        let report = report();
        let text = TextFormatter.format_report(&report).unwrap();

        assert!(text.starts_with("ResuMatch.ai Analysis Report\n\nMatch Score: "));
        assert!(text.contains(&format!("Verdict: {}\n\nAction Plan:\n- ", report.verdict.title)));
        assert!(text.contains("Add high-impact keywords: typescript, tailwind."));
        assert!(text.contains("\n\nGenerated on: "));
    }

    #[test]
    fn test_json_report_parses_back() {
        let report = report();
        let json = JsonFormatter::new(false).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["score"], report.score);
        assert_eq!(value["missing_keywords"][0], "typescript");
        assert_eq!(value["metadata"]["mode"], "Local");
    }

    #[test]
    fn test_html_report_escapes_and_lists_keywords() {
        let mut report = report();
        report.action_plan = vec!["Use <strong> verbs".to_string()];

        let html = HtmlFormatter::new(true).format_report(&report).unwrap();

        assert!(html.contains("<title>ResuMatch Analysis Report</title>"));
        assert!(html.contains("chip-missing\">typescript</span>"));
        assert!(html.contains("Use &lt;strong&gt; verbs"));
        assert!(html.contains("@media print"));
    }

    #[test]
    fn test_console_without_colors() {
        let report = report();
        let output = ConsoleFormatter::new(false, true).format_report(&report).unwrap();

        assert!(output.contains("RESUMATCH ANALYSIS"));
        assert!(output.contains("[x] Email address"));
        assert!(output.contains("[ ] Profile link"));
        assert!(output.contains("Keyword score:"));
    }

    #[test]
    fn test_markdown_checklist() {
        let report = report();
        let md = MarkdownFormatter::new(false).format_report(&report).unwrap();

        assert!(md.contains("## Missing Keywords\n\n`typescript` `tailwind`"));
        assert!(md.contains("- [x] Phone number"));
        assert!(!md.contains("Generated by"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, true);
        for format in [
            OutputFormat::Console,
            OutputFormat::Json,
            OutputFormat::Markdown,
            OutputFormat::Html,
            OutputFormat::Text,
        ] {
            assert_eq!(generator.formatter_for(format).supports_format(), format);
        }
    }

    #[test]
    fn test_save_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("out.txt");

        save_report_to_file("content", &path).unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "content");
    }
}
