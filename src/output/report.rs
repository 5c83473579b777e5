//! Report model wrapping an analysis with its provenance.

use crate::processing::analyzer::AtsAnalysis;
use crate::processing::document::{JobRequirement, ResumeSection};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An [`AtsAnalysis`] plus everything a formatter needs to present it:
/// where the texts came from, when the analysis ran, and the optional
/// detailed views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis: AtsAnalysis,
    pub resume_path: String,
    pub job_path: String,
    pub generated_at: DateTime<Utc>,
    pub resume_sections: Option<Vec<ResumeSection>>,
    pub job_requirements: Option<Vec<JobRequirement>>,
}

impl AnalysisReport {
    pub fn new(analysis: AtsAnalysis, resume_path: String, job_path: String) -> Self {
        Self {
            analysis,
            resume_path,
            job_path,
            generated_at: Utc::now(),
            resume_sections: None,
            job_requirements: None,
        }
    }

    /// Attach the detailed views shown by `--detailed`.
    pub fn with_details(
        mut self,
        sections: Vec<ResumeSection>,
        requirements: Vec<JobRequirement>,
    ) -> Self {
        self.resume_sections = Some(sections);
        self.job_requirements = Some(requirements);
        self
    }

    /// One-line reading of the overall score.
    pub fn verdict(&self) -> &'static str {
        match self.analysis.score.overall_score {
            80..=100 => "Strong match - this resume should pass ATS screening",
            60..=79 => "Good match - a few targeted edits would help",
            40..=59 => "Fair match - significant tailoring recommended",
            _ => "Weak match - rework the resume for this role",
        }
    }
}
