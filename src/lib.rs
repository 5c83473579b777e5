//! ATS compatibility scoring for resumes against job descriptions

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{AtsScanError, Result};
pub use processing::{AtsAnalysis, AtsAnalyzer, ScoreBreakdown, SemanticMatch};
