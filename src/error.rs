//! Error handling for the resumatch application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResuMatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Pattern compilation error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("AI assessment error: {0}")]
    Ai(#[from] AiError),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResuMatchError>;

/// Failures of the remote assessment collaborator.
///
/// Every variant is recoverable: the analysis engine falls back to the local
/// scorer when one of these surfaces.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("payload violates schema: {0}")]
    SchemaViolation(String),

    #[error("assessment returned empty content")]
    EmptyContent,

    #[error("API key not found in environment variable {0}")]
    MissingApiKey(String),
}

impl AiError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            AiError::Timeout { .. }
            | AiError::Network(_)
            | AiError::MalformedPayload(_)
            | AiError::SchemaViolation(_)
            | AiError::EmptyContent => true,
            AiError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            AiError::MissingApiKey(_) => false,
        }
    }
}
