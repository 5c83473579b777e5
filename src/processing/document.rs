//! Resume section detection and job requirement derivation.
//!
//! Sections and requirements are value objects recomputed on every analysis;
//! nothing here is persisted. They feed the detailed output views and carry
//! the importance weights shown alongside them.

use crate::processing::text_processor::TextProcessor;
use serde::{Deserialize, Serialize};

/// Resume section categories recognized by the heading scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Certifications,
    Projects,
    Achievements,
}

impl SectionKind {
    /// Heading keywords that open a section of this kind.
    fn heading_keywords(self) -> &'static [&'static str] {
        match self {
            Self::Contact => &["contact", "contact information"],
            Self::Summary => &["summary", "profile", "objective", "about"],
            Self::Experience => &["experience", "work experience", "employment", "work history"],
            Self::Education => &["education", "academic background", "qualifications"],
            Self::Skills => &["skills", "technical skills", "core competencies"],
            Self::Certifications => &["certifications", "certificates", "licenses"],
            Self::Projects => &["projects", "portfolio"],
            Self::Achievements => &["achievements", "awards", "accomplishments"],
        }
    }

    /// Relative weight of the section for ranking in the detailed view.
    pub fn importance(self) -> f32 {
        match self {
            Self::Experience => 0.30,
            Self::Skills => 0.25,
            Self::Education => 0.15,
            Self::Summary => 0.10,
            Self::Projects => 0.08,
            Self::Certifications => 0.06,
            Self::Achievements => 0.04,
            Self::Contact => 0.02,
        }
    }

    fn all() -> &'static [SectionKind] {
        &[
            Self::Contact,
            Self::Summary,
            Self::Experience,
            Self::Education,
            Self::Skills,
            Self::Certifications,
            Self::Projects,
            Self::Achievements,
        ]
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Contact => "Contact",
            Self::Summary => "Summary",
            Self::Experience => "Experience",
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Certifications => "Certifications",
            Self::Projects => "Projects",
            Self::Achievements => "Achievements",
        };
        write!(f, "{}", name)
    }
}

/// A labeled span of resume text with its keywords (discovery order,
/// duplicates removed) and importance weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSection {
    pub kind: SectionKind,
    pub content: String,
    pub keywords: Vec<String>,
    pub importance: f32,
}

/// Requirement categories derived from a job description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    Skill,
    Experience,
    Education,
    Certification,
    SoftSkill,
}

/// A single requirement parsed from a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub kind: RequirementKind,
    pub text: String,
    pub importance: f32,
    pub required: bool,
}

/// Scan the raw resume line by line for section headings and slice the text
/// into labeled sections. A heading is a short line that starts with one of
/// the kind's keywords, optionally ending with a colon.
pub fn detect_resume_sections(processor: &TextProcessor, resume_text: &str) -> Vec<ResumeSection> {
    let lines: Vec<&str> = resume_text.lines().collect();
    let mut headings: Vec<(usize, SectionKind)> = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim().trim_end_matches(':').trim();
        if trimmed.is_empty() || trimmed.len() > 40 {
            continue;
        }
        let lowered = trimmed.to_lowercase();
        if let Some(kind) = SectionKind::all()
            .iter()
            .find(|kind| kind.heading_keywords().iter().any(|kw| lowered.starts_with(kw)))
        {
            headings.push((idx, *kind));
        }
    }

    let mut sections = Vec::new();
    for (pos, (line_idx, kind)) in headings.iter().enumerate() {
        let end_line = headings
            .get(pos + 1)
            .map(|(next_idx, _)| *next_idx)
            .unwrap_or(lines.len());
        let content = lines[line_idx + 1..end_line].join("\n").trim().to_string();

        let mut keywords = Vec::new();
        for keyword in processor.extract_keywords(&processor.clean_text(&content)) {
            if !keywords.contains(&keyword) {
                keywords.push(keyword);
            }
        }

        sections.push(ResumeSection {
            kind: *kind,
            content,
            keywords,
            importance: kind.importance(),
        });
    }

    sections
}

/// Derive requirements from a job description: one per extracted skill, plus
/// experience/education/certification demands spotted in the cleaned text.
/// Requirements are marked preferred rather than required when the job text
/// hedges with "preferred" or "nice to have" around the phrase.
pub fn derive_job_requirements(processor: &TextProcessor, job_text: &str) -> Vec<JobRequirement> {
    let cleaned = processor.clean_text(job_text);
    let mut requirements = Vec::new();

    let soft_skill_markers = [
        "leadership",
        "communication",
        "teamwork",
        "collaboration",
        "mentoring",
        "problem solving",
        "critical thinking",
    ];

    for skill in processor.extract_skills(&cleaned) {
        let soft = soft_skill_markers.contains(&skill.as_str());
        requirements.push(JobRequirement {
            kind: if soft {
                RequirementKind::SoftSkill
            } else {
                RequirementKind::Skill
            },
            importance: if soft { 0.5 } else { 0.8 },
            required: !is_hedged(&cleaned, &skill),
            text: skill,
        });
    }

    if cleaned.contains("years of experience") || cleaned.contains("years experience") {
        requirements.push(JobRequirement {
            kind: RequirementKind::Experience,
            text: "prior professional experience".to_string(),
            importance: 0.7,
            required: true,
        });
    }

    for credential in ["bachelor", "master", "phd", "doctorate", "degree", "diploma"] {
        if cleaned.contains(credential) {
            requirements.push(JobRequirement {
                kind: RequirementKind::Education,
                required: !is_hedged(&cleaned, credential),
                text: format!("{} level education", credential),
                importance: 0.6,
            });
            break;
        }
    }

    if cleaned.contains("certification") || cleaned.contains("certified") {
        requirements.push(JobRequirement {
            kind: RequirementKind::Certification,
            text: "relevant certification".to_string(),
            importance: 0.4,
            required: false,
        });
    }

    requirements
}

/// True when the phrase appears within a few words of a hedge like
/// "preferred" or "nice to have". The byte window is snapped outward to
/// char boundaries so multibyte text never splits a character.
fn is_hedged(cleaned_text: &str, phrase: &str) -> bool {
    const WINDOW: usize = 60;
    for (pos, _) in cleaned_text.match_indices(phrase) {
        let mut start = pos.saturating_sub(WINDOW);
        while !cleaned_text.is_char_boundary(start) {
            start -= 1;
        }
        let mut end = (pos + phrase.len() + WINDOW).min(cleaned_text.len());
        while !cleaned_text.is_char_boundary(end) {
            end += 1;
        }
        let context = &cleaned_text[start..end];
        if context.contains("preferred")
            || context.contains("nice to have")
            || context.contains("plus")
            || context.contains("bonus")
        {
            return true;
        }
    }
    false
}
