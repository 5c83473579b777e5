//! Text normalization, keyword extraction, and heuristic entity extraction.

use crate::processing::patterns::{
    EDUCATION_PATTERN, EXPERIENCE_PATTERN, SKILL_PATTERN_GROUPS, STOP_WORDS,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A work-history phrase pulled out of resume text. Durations are not parsed
/// by the heuristic and stay empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub duration: String,
}

/// An education phrase pulled out of resume text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: Option<u16>,
}

/// Stateless text utilities with the pattern batteries compiled once.
///
/// Every method is deterministic and total: empty or malformed input yields
/// empty results, never an error.
pub struct TextProcessor {
    stop_words: HashSet<&'static str>,
    non_word: Regex,
    whitespace: Regex,
    skill_groups: Vec<Regex>,
    experience: Regex,
    education: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        Self::with_extra_skills(&[])
    }

    /// Build a processor whose skill battery is extended with additional
    /// regex fragments (from configuration).
    pub fn with_extra_skills(extra: &[String]) -> Self {
        let mut skill_groups: Vec<Regex> = SKILL_PATTERN_GROUPS
            .iter()
            .map(|(_, fragments)| Self::compile_group(fragments.iter().copied()))
            .collect();

        if !extra.is_empty() {
            skill_groups.push(Self::compile_group(extra.iter().map(|s| s.as_str())));
        }

        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            non_word: Regex::new(r"[^\w\s]").expect("invalid non-word regex"),
            whitespace: Regex::new(r"\s+").expect("invalid whitespace regex"),
            skill_groups,
            experience: Regex::new(EXPERIENCE_PATTERN).expect("invalid experience regex"),
            education: Regex::new(EDUCATION_PATTERN).expect("invalid education regex"),
        }
    }

    fn compile_group<'a>(fragments: impl Iterator<Item = &'a str>) -> Regex {
        let alternation = fragments.collect::<Vec<_>>().join("|");
        Regex::new(&format!(r"(?i)\b(?:{})\b", alternation)).expect("invalid skill pattern group")
    }

    /// Lowercase, replace every non-word character with a space, collapse
    /// whitespace runs, trim. Idempotent: cleaning cleaned text is a no-op.
    pub fn clean_text(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let despecialed = self.non_word.replace_all(&lowered, " ");
        self.whitespace
            .replace_all(&despecialed, " ")
            .trim()
            .to_string()
    }

    /// Split on whitespace and keep tokens longer than two characters that
    /// are not stop words, stripping any leftover non-word characters.
    /// Left-to-right order is preserved and duplicates are kept; callers that
    /// need uniqueness collect into a set.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter(|token| {
                token.chars().count() > 2
                    && !self.stop_words.contains(&token.to_lowercase().as_str())
            })
            .map(|token| {
                token
                    .chars()
                    .filter(|c| c.is_alphanumeric() || *c == '_')
                    .collect::<String>()
                    .to_lowercase()
            })
            .filter(|token| !token.is_empty())
            .collect()
    }

    /// Jaccard similarity between the unique keyword sets of two texts.
    /// Returns 0.0 when the union is empty (both texts keyword-free), since
    /// 0/0 is otherwise undefined.
    pub fn semantic_similarity(&self, text1: &str, text2: &str) -> f32 {
        let keywords1 = self.extract_keywords(&self.clean_text(text1));
        let keywords2 = self.extract_keywords(&self.clean_text(text2));

        let set1: HashSet<&str> = keywords1.iter().map(|s| s.as_str()).collect();
        let set2: HashSet<&str> = keywords2.iter().map(|s| s.as_str()).collect();

        let union = set1.union(&set2).count();
        if union == 0 {
            return 0.0;
        }
        let intersection = set1.intersection(&set2).count();
        intersection as f32 / union as f32
    }

    /// Run the skill pattern battery and collect distinct lowercased matches.
    /// Order is deterministic: group order, then match order within a group.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut skills = Vec::new();

        for group in &self.skill_groups {
            for found in group.find_iter(text) {
                let skill = found.as_str().to_lowercase();
                if seen.insert(skill.clone()) {
                    skills.push(skill);
                }
            }
        }

        skills
    }

    /// Single-pass heuristic over cleaned text for phrases like
    /// "worked as a backend engineer at acme" or "experience as a java
    /// developer with google". The role group also matches empty, so
    /// "worked at acme" yields an entry with the role blank.
    pub fn extract_experience(&self, text: &str) -> Vec<ExperienceEntry> {
        self.experience
            .captures_iter(text)
            .map(|caps| ExperienceEntry {
                role: caps[1].trim().to_string(),
                company: caps[2].trim().to_string(),
                duration: String::new(),
            })
            .collect()
    }

    /// Single-pass heuristic over cleaned text for phrases like "bachelor
    /// degree in computer science from mit". When the captured tail carries a
    /// "from <school>" segment the school becomes the institution; a direct
    /// "from" connector makes the whole tail the institution.
    pub fn extract_education(&self, text: &str) -> Vec<EducationEntry> {
        self.education
            .captures_iter(text)
            .map(|caps| {
                let credential = caps[1].to_string();
                let connector = &caps[2];
                let tail = caps[3].trim();

                let (field, institution) = if connector == "from" {
                    (None, tail.to_string())
                } else if let Some((field, school)) = tail.split_once(" from ") {
                    (Some(field.trim().to_string()), school.trim().to_string())
                } else {
                    (Some(tail.to_string()), String::new())
                };

                let degree = match field {
                    Some(field) if !field.is_empty() => format!("{} in {}", credential, field),
                    _ => credential,
                };

                EducationEntry {
                    degree,
                    institution,
                    year: None,
                }
            })
            .collect()
    }

    /// Split raw text into sentences on `.`, `!`, and `?`, dropping trimmed
    /// fragments shorter than ten characters.
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        text.split(['.', '!', '?'])
            .map(|s| s.trim())
            .filter(|s| s.chars().count() >= 10)
            .map(|s| s.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_punctuation() {
        let processor = TextProcessor::new();
        let cleaned = processor.clean_text("Hello, World!   This -- is (a) test.");
        assert_eq!(cleaned, "hello world this is a test");
    }

    #[test]
    fn test_clean_text_idempotent() {
        let processor = TextProcessor::new();
        for text in [
            "Senior Engineer @ Acme, Inc. (2019-2023)",
            "",
            "  already   clean  ",
            "C++ & C# developer!!!",
        ] {
            let once = processor.clean_text(text);
            assert_eq!(processor.clean_text(&once), once);
        }
    }

    #[test]
    fn test_keyword_extraction_filters_stop_words() {
        let processor = TextProcessor::new();
        let keywords = processor.extract_keywords("the quick brown fox and the lazy dog");
        assert_eq!(keywords, vec!["quick", "brown", "fox", "lazy", "dog"]);
    }

    #[test]
    fn test_keyword_length_counts_chars_not_bytes() {
        let processor = TextProcessor::new();
        // "né" is two chars (three bytes) and must be dropped like any
        // other two-char token.
        let keywords = processor.extract_keywords("né café résumé");
        assert_eq!(keywords, vec!["café", "résumé"]);
    }

    #[test]
    fn test_keyword_extraction_keeps_order_and_duplicates() {
        let processor = TextProcessor::new();
        let keywords = processor.extract_keywords("python developer python scripts");
        assert_eq!(keywords, vec!["python", "developer", "python", "scripts"]);
    }

    #[test]
    fn test_semantic_similarity_identical_texts() {
        let processor = TextProcessor::new();
        let similarity =
            processor.semantic_similarity("rust systems programming", "rust systems programming");
        assert!((similarity - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_semantic_similarity_empty_union_is_zero() {
        let processor = TextProcessor::new();
        assert_eq!(processor.semantic_similarity("", ""), 0.0);
        assert_eq!(processor.semantic_similarity("a an of", "to in at"), 0.0);
    }

    #[test]
    fn test_skill_extraction_dedupes() {
        let processor = TextProcessor::new();
        let skills = processor.extract_skills("python and docker, more Python, some AWS");
        assert_eq!(skills.iter().filter(|s| s.as_str() == "python").count(), 1);
        assert!(skills.contains(&"docker".to_string()));
        assert!(skills.contains(&"aws".to_string()));
    }

    #[test]
    fn test_skill_extraction_word_boundaries() {
        let processor = TextProcessor::new();
        // "javascript" must not also report "java"
        let skills = processor.extract_skills("javascript specialist");
        assert!(skills.contains(&"javascript".to_string()));
        assert!(!skills.contains(&"java".to_string()));
    }

    #[test]
    fn test_extra_skills_extend_battery() {
        let processor = TextProcessor::with_extra_skills(&["cobol".to_string()]);
        let skills = processor.extract_skills("legacy cobol maintenance");
        assert!(skills.contains(&"cobol".to_string()));
    }

    #[test]
    fn test_experience_extraction() {
        let processor = TextProcessor::new();
        let cleaned =
            processor.clean_text("I have 5 years of experience as a Java developer at Google.");
        let entries = processor.extract_experience(&cleaned);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].role, "java developer");
        assert_eq!(entries[0].company, "google");
        assert_eq!(entries[0].duration, "");
    }

    #[test]
    fn test_experience_extraction_without_role() {
        let processor = TextProcessor::new();
        let entries = processor.extract_experience("worked at google");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].role, "");
        assert_eq!(entries[0].company, "google");
    }

    #[test]
    fn test_education_extraction() {
        let processor = TextProcessor::new();
        let cleaned = processor.clean_text("Bachelor degree in Computer Science from MIT.");
        let entries = processor.extract_education(&cleaned);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "bachelor in computer science");
        assert_eq!(entries[0].institution, "mit");
        assert_eq!(entries[0].year, None);
    }

    #[test]
    fn test_education_extraction_from_only() {
        let processor = TextProcessor::new();
        let entries = processor.extract_education("diploma from stanford university");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "diploma");
        assert_eq!(entries[0].institution, "stanford university");
    }

    #[test]
    fn test_empty_text_yields_empty_extractions() {
        let processor = TextProcessor::new();
        assert!(processor.extract_keywords("").is_empty());
        assert!(processor.extract_skills("").is_empty());
        assert!(processor.extract_experience("").is_empty());
        assert!(processor.extract_education("").is_empty());
    }

    #[test]
    fn test_sentence_split_drops_short_fragments() {
        let processor = TextProcessor::new();
        let sentences = processor.split_sentences(
            "Short. This one is long enough to keep! Tiny? Another sentence that survives.",
        );
        assert_eq!(
            sentences,
            vec![
                "This one is long enough to keep".to_string(),
                "Another sentence that survives".to_string(),
            ]
        );
    }

    #[test]
    fn test_sentence_length_counts_chars_not_bytes() {
        let processor = TextProcessor::new();
        // Nine chars but seventeen bytes; still below the cutoff.
        let sentences =
            processor.split_sentences("ééééé ééé. Une phrase assez longue pour rester.");
        assert_eq!(
            sentences,
            vec!["Une phrase assez longue pour rester".to_string()]
        );
    }
}
