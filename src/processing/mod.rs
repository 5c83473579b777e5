//! Text processing and analysis module

pub mod analyzer;
pub mod document;
pub mod patterns;
pub mod text_processor;

pub use analyzer::{AtsAnalysis, AtsAnalyzer, ScoreBreakdown, ScoringWeights, SemanticMatch};
pub use text_processor::TextProcessor;
