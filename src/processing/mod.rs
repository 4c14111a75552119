//! Keyword extraction, structural signals, scoring and suggestions

pub mod analyzer;
pub mod ats_matcher;
pub mod signals;
pub mod stop_words;
pub mod suggestions;
pub mod text_processor;
