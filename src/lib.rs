//! ResuMatch library: ATS-style resume and job description match scoring

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod llm;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{AiError, Result, ResuMatchError};
pub use processing::analyzer::analyze;
