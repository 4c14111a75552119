//! ResuMatch: ATS-style resume and job description match scoring

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use resumatch::cli::{self, Cli, Commands, ConfigAction, ReportOptions};
use resumatch::config::{Config, OutputFormat};
use resumatch::input::{demo, InputManager};
use resumatch::llm::analyzer::AiAnalyzer;
use resumatch::output::{save_report_to_file, AnalysisReport, ReportGenerator};
use resumatch::processing::analyzer::{Analysis, AnalysisEngine, AnalysisMode, KeywordSource};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt", "text", "md", "markdown"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration from {}: {}", config_path.display(), e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Analyze { resume, job, options } => {
            info!("Starting resume analysis");

            cli::validate_file_extension(&resume, SUPPORTED_EXTENSIONS)
                .map_err(|e| anyhow::anyhow!("Resume file: {}", e))?;
            cli::validate_file_extension(&job, SUPPORTED_EXTENSIONS)
                .map_err(|e| anyhow::anyhow!("Job description file: {}", e))?;

            println!("🚀 ResuMatch analysis");
            println!("📄 Resume: {}", resume.display());
            println!("💼 Job Description: {}", job.display());

            let mut input_manager = InputManager::new();
            let resume_text = input_manager
                .extract_text(&resume)
                .await
                .with_context(|| format!("Failed to read resume {}", resume.display()))?;
            let job_text = input_manager
                .extract_text(&job)
                .await
                .with_context(|| format!("Failed to read job description {}", job.display()))?;

            let resume_name = resume.to_string_lossy().to_string();
            let job_name = job.to_string_lossy().to_string();
            run_analysis(&config, &job_text, &resume_text, &resume_name, &job_name, &options).await?;
        }

        Commands::Demo { options } => {
            println!("🧪 Running the bundled demo (Senior Frontend Engineer vs. Alex Developer)");
            run_analysis(
                &config,
                demo::DEMO_JOB_DESCRIPTION,
                demo::DEMO_RESUME,
                "demo_resume.txt",
                "demo_job.txt",
                &options,
            )
            .await?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;
                println!("{}", rendered);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default()
                    .save_to(&config_path)
                    .context("Failed to write default configuration")?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut config = config;
                config
                    .set_value(&key, &value)
                    .with_context(|| format!("Failed to set {}", key))?;
                config.save_to(&config_path).context("Failed to save configuration")?;
                println!("✅ Set {} = {}", key, value);
            }
        },
    }

    Ok(())
}

async fn run_analysis(
    config: &Config,
    job_text: &str,
    resume_text: &str,
    resume_name: &str,
    job_name: &str,
    options: &ReportOptions,
) -> Result<()> {
    let output_format = match &options.output {
        Some(format) => cli::parse_output_format(format).map_err(anyhow::Error::msg)?,
        None => config.output.format,
    };
    let detailed = options.detailed || config.output.detailed;
    let use_ai = options.ai || config.ai.enabled;

    let engine = AnalysisEngine::new(config).context("Failed to initialize analysis engine")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));

    // Each stage message is set right before the work it names
    let analysis = if use_ai {
        spinner.set_message("Extracting semantic entities...");
        analyze_with_ai(config, &engine, job_text, resume_text).await?
    } else {
        spinner.set_message("Calculating match probability...");
        engine.analyze(job_text, resume_text, &KeywordSource::Local)?
    };
    spinner.finish_and_clear();

    if analysis.mode == AnalysisMode::OfflineFallback {
        println!("⚠️  AI assessment unavailable, showing offline analysis");
    }

    let report = AnalysisReport::from_analysis(&analysis, resume_name, job_name);

    let generator = ReportGenerator::with_options(config.output.color_output, detailed, true);
    println!("{}", generator.generate_report(&report, output_format)?);

    if let Some(save_path) = &options.save {
        save_report(&report, output_format, detailed, save_path)?;
    }

    Ok(())
}

async fn analyze_with_ai(config: &Config, engine: &AnalysisEngine, job_text: &str, resume_text: &str) -> Result<Analysis> {
    match AiAnalyzer::from_config(&config.ai) {
        Ok(provider) => {
            info!("Requesting AI assessment from {}", provider.model());
            Ok(engine.analyze_with_provider(job_text, resume_text, &provider).await?)
        }
        Err(e) => {
            warn!("AI assessment unavailable, using offline analysis: {}", e);
            let mut analysis = engine.analyze(job_text, resume_text, &KeywordSource::Local)?;
            analysis.mode = AnalysisMode::OfflineFallback;
            Ok(analysis)
        }
    }
}

fn save_report(report: &AnalysisReport, format: OutputFormat, detailed: bool, path: &Path) -> Result<()> {
    // Files never get ANSI color codes
    let generator = ReportGenerator::with_options(false, detailed, true);
    let content = generator.generate_report(report, format)?;
    save_report_to_file(&content, path).with_context(|| format!("Failed to save report to {}", path.display()))?;
    println!("💾 Report saved to {}", path.display());
    Ok(())
}
