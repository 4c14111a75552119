//! Remote AI assessment integration

pub mod analyzer;
pub mod client;
pub mod prompts;
