//! The ATS analyzer: weighted compatibility scoring of a resume against a
//! job description.
//!
//! An [`AtsAnalyzer`] is built once from two raw texts and queried once via
//! [`AtsAnalyzer::analyze`]. The whole pipeline is synchronous, CPU-bound,
//! and total over its inputs: empty or malformed text produces a well-formed
//! [`AtsAnalysis`], never an error. Instances share no state, so independent
//! analyses can run concurrently without coordination.

use crate::processing::document::{
    derive_job_requirements, detect_resume_sections, JobRequirement, ResumeSection,
};
use crate::processing::patterns::{
    BULLET_MARKERS, HEADER_FOOTER_MARKERS, IMAGE_MARKERS, SECTION_KEYWORDS, TABLE_MARKERS,
};
use crate::processing::text_processor::{EducationEntry, ExperienceEntry, TextProcessor};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sentence pairs below this Jaccard similarity are not reported.
const SEMANTIC_THRESHOLD: f32 = 0.3;
/// At most this many sentence pairs are reported.
const MAX_SEMANTIC_MATCHES: usize = 5;
/// Missing keywords quoted in the suggestion message.
const SUGGESTED_KEYWORD_COUNT: usize = 5;

/// Relative weight of each sub-score in the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f32,
    pub experience: f32,
    pub education: f32,
    pub formatting: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.40,
            experience: 0.30,
            education: 0.15,
            formatting: 0.15,
        }
    }
}

impl ScoringWeights {
    /// Weights with negatives clamped to zero and the vector scaled to sum
    /// to 1.0. An all-zero vector falls back to the defaults.
    pub fn normalized(&self) -> Self {
        let skills = self.skills.max(0.0);
        let experience = self.experience.max(0.0);
        let education = self.education.max(0.0);
        let formatting = self.formatting.max(0.0);
        let sum = skills + experience + education + formatting;

        if sum <= f32::EPSILON {
            return Self::default();
        }

        Self {
            skills: skills / sum,
            experience: experience / sum,
            education: education / sum,
            formatting: formatting / sum,
        }
    }
}

/// The four sub-scores and their weighted combination, all integers in
/// [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills_match: u8,
    pub experience_match: u8,
    pub education_match: u8,
    pub formatting_score: u8,
    pub overall_score: u8,
}

/// A resume/job sentence pair with notable keyword overlap. `similarity` is
/// an integer percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticMatch {
    pub resume_text: String,
    pub job_text: String,
    pub similarity: u8,
}

/// The complete analysis result. Immutable once returned; owned by the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsAnalysis {
    pub score: ScoreBreakdown,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub formatting_issues: Vec<String>,
    pub semantic_matches: Vec<SemanticMatch>,
}

/// Marker scans over the raw resume text. Markup checks have to run before
/// cleaning, which strips every non-word character.
struct MarkupScan {
    has_bullets: bool,
    has_tables: bool,
    has_images: bool,
    has_header_footer: bool,
}

impl MarkupScan {
    fn new(raw_resume: &str) -> Self {
        Self {
            has_bullets: Self::any_marker(raw_resume, BULLET_MARKERS),
            has_tables: Self::any_marker(raw_resume, TABLE_MARKERS),
            has_images: Self::any_marker(raw_resume, IMAGE_MARKERS),
            has_header_footer: Self::any_marker(raw_resume, HEADER_FOOTER_MARKERS),
        }
    }

    fn any_marker(text: &str, markers: &[&str]) -> bool {
        AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(markers)
            .expect("invalid marker set")
            .is_match(text)
    }
}

/// Single-use analyzer over one resume / job description pair.
pub struct AtsAnalyzer {
    resume_raw: String,
    job_raw: String,
    resume_clean: String,
    job_clean: String,
    processor: TextProcessor,
    weights: ScoringWeights,
    markup: MarkupScan,
}

impl AtsAnalyzer {
    pub fn new(resume_text: &str, job_description: &str) -> Self {
        Self::with_options(resume_text, job_description, &[], ScoringWeights::default())
    }

    /// Build an analyzer with extra skill patterns and custom weights (both
    /// typically sourced from configuration).
    pub fn with_options(
        resume_text: &str,
        job_description: &str,
        extra_skills: &[String],
        weights: ScoringWeights,
    ) -> Self {
        let processor = TextProcessor::with_extra_skills(extra_skills);
        let resume_clean = processor.clean_text(resume_text);
        let job_clean = processor.clean_text(job_description);
        let markup = MarkupScan::new(resume_text);

        Self {
            resume_raw: resume_text.to_string(),
            job_raw: job_description.to_string(),
            resume_clean,
            job_clean,
            processor,
            weights,
            markup,
        }
    }

    /// Run the full pipeline and return the analysis.
    pub fn analyze(&self) -> AtsAnalysis {
        let resume_keywords = self.processor.extract_keywords(&self.resume_clean);
        let job_keywords = self.processor.extract_keywords(&self.job_clean);
        let resume_skills = self.processor.extract_skills(&self.resume_clean);
        let job_skills = self.processor.extract_skills(&self.job_clean);
        let experience = self.processor.extract_experience(&self.resume_clean);
        let education = self.processor.extract_education(&self.resume_clean);

        let skills_match = self.score_skills(&resume_skills, &job_skills);
        let experience_match = self.score_experience(&experience, &job_skills);
        let education_match = self.score_education(&education, &job_skills);
        let formatting_score = self.score_formatting();

        let score = ScoreBreakdown {
            skills_match,
            experience_match,
            education_match,
            formatting_score,
            overall_score: self.combine(
                skills_match,
                experience_match,
                education_match,
                formatting_score,
            ),
        };

        let missing_keywords = Self::missing_keywords(&resume_keywords, &job_keywords);
        let suggestions = Self::suggestions(&score, &missing_keywords);
        let strengths = Self::strengths(&score);
        let formatting_issues = self.formatting_issues();
        let semantic_matches = self.semantic_matches();

        AtsAnalysis {
            score,
            missing_keywords,
            suggestions,
            strengths,
            formatting_issues,
            semantic_matches,
        }
    }

    /// Sections detected in the resume, for the detailed report view.
    pub fn resume_sections(&self) -> Vec<ResumeSection> {
        detect_resume_sections(&self.processor, &self.resume_raw)
    }

    /// Requirements derived from the job description, for the detailed view.
    pub fn job_requirements(&self) -> Vec<JobRequirement> {
        derive_job_requirements(&self.processor, &self.job_raw)
    }

    /// Share of job skills covered by the resume. A job with no extractable
    /// skills scores 100: an under-specified posting is not a penalty.
    /// Matching is bidirectional substring containment, so "react" covers
    /// "react js" and vice versa.
    fn score_skills(&self, resume_skills: &[String], job_skills: &[String]) -> u8 {
        if job_skills.is_empty() {
            return 100;
        }

        let matched = job_skills
            .iter()
            .filter(|job_skill| {
                resume_skills
                    .iter()
                    .any(|rs| job_skill.contains(rs.as_str()) || rs.contains(job_skill.as_str()))
            })
            .count();

        (100.0 * matched as f32 / job_skills.len() as f32).round() as u8
    }

    /// 20 points per extracted experience entry, capped at 100, plus a 10
    /// point bonus per entry whose role or company mentions a job skill.
    fn score_experience(&self, entries: &[ExperienceEntry], job_skills: &[String]) -> u8 {
        if entries.is_empty() {
            return 0;
        }

        let base = (entries.len() as u32 * 20).min(100);
        let bonus = entries
            .iter()
            .filter(|entry| {
                job_skills
                    .iter()
                    .any(|skill| entry.role.contains(skill.as_str()) || entry.company.contains(skill.as_str()))
            })
            .count() as u32
            * 10;

        (base + bonus).min(100) as u8
    }

    /// 25 points per extracted education entry, capped at 100, plus a 15
    /// point bonus per entry whose degree or institution mentions a job
    /// skill.
    fn score_education(&self, entries: &[EducationEntry], job_skills: &[String]) -> u8 {
        if entries.is_empty() {
            return 0;
        }

        let base = (entries.len() as u32 * 25).min(100);
        let bonus = entries
            .iter()
            .filter(|entry| {
                job_skills.iter().any(|skill| {
                    entry.degree.contains(skill.as_str())
                        || entry.institution.contains(skill.as_str())
                })
            })
            .count() as u32
            * 15;

        (base + bonus).min(100) as u8
    }

    /// Fixed penalties against a 100-point baseline. Section keywords are
    /// checked in the cleaned text; bullets and markup in the raw text,
    /// since cleaning strips the characters those checks look for.
    fn score_formatting(&self) -> u8 {
        let mut score: i32 = 100;

        let has_sections = SECTION_KEYWORDS
            .iter()
            .any(|keyword| self.resume_clean.contains(keyword));
        if !has_sections {
            score -= 20;
        }
        if !self.markup.has_bullets {
            score -= 15;
        }
        if self.markup.has_tables {
            score -= 25;
        }
        if self.markup.has_images {
            score -= 20;
        }
        if self.markup.has_header_footer {
            score -= 15;
        }

        score.max(0) as u8
    }

    fn combine(&self, skills: u8, experience: u8, education: u8, formatting: u8) -> u8 {
        let w = self.weights.normalized();
        let overall = w.skills * skills as f32
            + w.experience * experience as f32
            + w.education * education as f32
            + w.formatting * formatting as f32;
        overall.round().clamp(0.0, 100.0) as u8
    }

    /// Job keywords absent from the resume, in job-text order. The keyword
    /// list upstream keeps duplicates; here each missing keyword is reported
    /// once, at its first occurrence, since repeats add nothing for the
    /// reader.
    fn missing_keywords(resume_keywords: &[String], job_keywords: &[String]) -> Vec<String> {
        let resume_set: HashSet<&str> = resume_keywords.iter().map(|s| s.as_str()).collect();
        let mut seen = HashSet::new();
        job_keywords
            .iter()
            .filter(|keyword| !resume_set.contains(keyword.as_str()))
            .filter(|keyword| seen.insert(keyword.as_str()))
            .cloned()
            .collect()
    }

    /// Independent threshold rules, fired in fixed order.
    fn suggestions(score: &ScoreBreakdown, missing_keywords: &[String]) -> Vec<String> {
        let mut suggestions = Vec::new();

        if score.skills_match < 70 {
            suggestions.push(
                "Add more skills from the job description to strengthen your match".to_string(),
            );
        }
        if score.experience_match < 60 {
            suggestions
                .push("Highlight work experience that is relevant to this role".to_string());
        }
        if score.education_match < 50 {
            suggestions
                .push("Include your education background and relevant certifications".to_string());
        }
        if score.formatting_score < 80 {
            suggestions
                .push("Improve the resume formatting so ATS software can parse it".to_string());
        }
        if !missing_keywords.is_empty() {
            let preview: Vec<&str> = missing_keywords
                .iter()
                .take(SUGGESTED_KEYWORD_COUNT)
                .map(|s| s.as_str())
                .collect();
            suggestions.push(format!(
                "Consider including these keywords: {}",
                preview.join(", ")
            ));
        }

        suggestions
    }

    /// Independent threshold rules, fired in fixed order.
    fn strengths(score: &ScoreBreakdown) -> Vec<String> {
        let mut strengths = Vec::new();

        if score.skills_match >= 80 {
            strengths.push("Strong skills alignment with the job requirements".to_string());
        }
        if score.experience_match >= 70 {
            strengths.push("Relevant work experience for this position".to_string());
        }
        if score.education_match >= 60 {
            strengths.push("Education background fits the role".to_string());
        }
        if score.formatting_score >= 90 {
            strengths.push("ATS-friendly formatting".to_string());
        }

        strengths
    }

    /// Raw-text structural checks, independent of the score thresholds.
    fn formatting_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.markup.has_tables {
            issues.push("Avoid tables; many ATS parsers cannot read them".to_string());
        }
        if self.markup.has_images {
            issues.push("Remove images; ATS parsers skip them entirely".to_string());
        }
        if self.markup.has_header_footer {
            issues.push("Avoid headers and footers; content there is often lost".to_string());
        }
        if !self.markup.has_bullets {
            issues.push("Use bullet points to structure your accomplishments".to_string());
        }

        issues
    }

    /// Pairwise Jaccard similarity between resume and job sentences.
    /// Quadratic in the sentence counts, which is fine for documents of
    /// typical length.
    fn semantic_matches(&self) -> Vec<SemanticMatch> {
        let resume_sentences = self.processor.split_sentences(&self.resume_raw);
        let job_sentences = self.processor.split_sentences(&self.job_raw);

        let mut scored: Vec<(f32, SemanticMatch)> = Vec::new();
        for resume_sentence in &resume_sentences {
            for job_sentence in &job_sentences {
                let similarity = self
                    .processor
                    .semantic_similarity(resume_sentence, job_sentence);
                if similarity > SEMANTIC_THRESHOLD {
                    scored.push((
                        similarity,
                        SemanticMatch {
                            resume_text: resume_sentence.clone(),
                            job_text: job_sentence.clone(),
                            similarity: (similarity * 100.0).round() as u8,
                        },
                    ));
                }
            }
        }

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(MAX_SEMANTIC_MATCHES)
            .map(|(_, m)| m)
            .collect()
    }
}
