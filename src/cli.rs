//! CLI interface for ResuMatch

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resumatch")]
#[command(about = "ATS-style resume and job description match scoring")]
#[command(long_about = "Score how well a resume matches a job description the way an applicant tracking system would, with keyword gaps, structural checks and an action plan")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        #[command(flatten)]
        options: ReportOptions,
    },

    /// Run the analysis on the bundled sample job description and resume
    Demo {
        #[command(flatten)]
        options: ReportOptions,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ReportOptions {
    /// Ask the configured AI model for the assessment (falls back to offline analysis)
    #[arg(long)]
    pub ai: bool,

    /// Output format: console, json, markdown, html, text
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save the report to a file
    #[arg(short, long)]
    pub save: Option<PathBuf>,

    /// Output detailed analysis
    #[arg(short, long)]
    pub detailed: bool,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "scoring.top_keyword_cap")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        "text" | "txt" => Ok(OutputFormat::Text),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html, text",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
