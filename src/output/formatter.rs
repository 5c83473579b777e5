//! Console, JSON, and markdown renderings of an analysis report.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Renders a report into one output format.
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
}

/// Colored terminal output with score-graded badges.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// Pretty-printed JSON of the whole report, for scripting.
pub struct JsonFormatter;

/// Markdown suitable for sharing or archiving.
pub struct MarkdownFormatter;

/// Dispatches to the formatter for the configured format and handles saving
/// to disk.
pub struct ReportGenerator {
    console: ConsoleFormatter,
    json: JsonFormatter,
    markdown: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn score_color(score: u8) -> Color {
        match score {
            80..=100 => Color::Green,
            60..=79 => Color::Cyan,
            40..=59 => Color::Yellow,
            _ => Color::Red,
        }
    }

    fn score_line(&self, label: &str, score: u8) -> String {
        format!(
            "  {:<22} {}\n",
            label,
            self.colorize(&format!("{:>3}%", score), Self::score_color(score))
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut out = String::new();

        out.push_str(&format!(
            "\n{}\n",
            self.colorize("ATS COMPATIBILITY REPORT", Color::Cyan)
        ));
        out.push_str(&format!(
            "Resume: {} | Job: {}\nGenerated: {}\n\n",
            report.resume_path,
            report.job_path,
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        let overall = analysis.score.overall_score;
        out.push_str(&format!(
            "Overall Score: {}\n",
            self.colorize(&format!("{}%", overall), Self::score_color(overall))
        ));
        out.push_str(&format!("{}\n\n", self.colorize(report.verdict(), Color::Cyan)));

        out.push_str("Score Breakdown:\n");
        out.push_str(&self.score_line("Skills Match", analysis.score.skills_match));
        out.push_str(&self.score_line("Experience Match", analysis.score.experience_match));
        out.push_str(&self.score_line("Education Match", analysis.score.education_match));
        out.push_str(&self.score_line("Formatting", analysis.score.formatting_score));
        out.push('\n');

        if !analysis.strengths.is_empty() {
            out.push_str("Strengths:\n");
            for strength in &analysis.strengths {
                out.push_str(&format!("  + {}\n", self.colorize(strength, Color::Green)));
            }
            out.push('\n');
        }

        if !analysis.suggestions.is_empty() {
            out.push_str("Suggestions:\n");
            for suggestion in &analysis.suggestions {
                out.push_str(&format!(
                    "  > {}\n",
                    self.colorize(suggestion, Color::Yellow)
                ));
            }
            out.push('\n');
        }

        if !analysis.formatting_issues.is_empty() {
            out.push_str("Formatting Issues:\n");
            for issue in &analysis.formatting_issues {
                out.push_str(&format!("  ! {}\n", self.colorize(issue, Color::Red)));
            }
            out.push('\n');
        }

        if !analysis.missing_keywords.is_empty() {
            out.push_str(&format!(
                "Missing Keywords ({}):\n  {}\n\n",
                analysis.missing_keywords.len(),
                analysis
                    .missing_keywords
                    .iter()
                    .take(15)
                    .map(|s| s.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }

        if !analysis.semantic_matches.is_empty() {
            out.push_str("Top Content Matches:\n");
            for m in &analysis.semantic_matches {
                out.push_str(&format!(
                    "  {}% | \"{}\" ~ \"{}\"\n",
                    m.similarity, m.resume_text, m.job_text
                ));
            }
            out.push('\n');
        }

        if self.detailed {
            if let Some(sections) = &report.resume_sections {
                out.push_str("Detected Resume Sections:\n");
                for section in sections {
                    out.push_str(&format!(
                        "  {} (importance {:.2}): {} keywords\n",
                        section.kind,
                        section.importance,
                        section.keywords.len()
                    ));
                }
                out.push('\n');
            }
            if let Some(requirements) = &report.job_requirements {
                out.push_str("Job Requirements:\n");
                for req in requirements {
                    out.push_str(&format!(
                        "  [{}] {} ({})\n",
                        format!("{:?}", req.kind).to_lowercase(),
                        req.text,
                        if req.required { "required" } else { "preferred" }
                    ));
                }
                out.push('\n');
            }
        }

        Ok(out)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let analysis = &report.analysis;
        let mut out = String::new();

        out.push_str("# ATS Compatibility Report\n\n");
        out.push_str(&format!(
            "Generated {} for `{}` against `{}`.\n\n",
            report.generated_at.format("%Y-%m-%d %H:%M UTC"),
            report.resume_path,
            report.job_path
        ));
        out.push_str(&format!(
            "**Overall score: {}%** — {}\n\n",
            analysis.score.overall_score,
            report.verdict()
        ));

        out.push_str("## Score Breakdown\n\n");
        out.push_str("| Component | Score |\n|---|---|\n");
        out.push_str(&format!("| Skills match | {}% |\n", analysis.score.skills_match));
        out.push_str(&format!(
            "| Experience match | {}% |\n",
            analysis.score.experience_match
        ));
        out.push_str(&format!(
            "| Education match | {}% |\n",
            analysis.score.education_match
        ));
        out.push_str(&format!(
            "| Formatting | {}% |\n\n",
            analysis.score.formatting_score
        ));

        let list = |title: &str, items: &[String]| {
            if items.is_empty() {
                return String::new();
            }
            let mut s = format!("## {}\n\n", title);
            for item in items {
                s.push_str(&format!("- {}\n", item));
            }
            s.push('\n');
            s
        };

        out.push_str(&list("Strengths", &analysis.strengths));
        out.push_str(&list("Suggestions", &analysis.suggestions));
        out.push_str(&list("Formatting Issues", &analysis.formatting_issues));

        if !analysis.missing_keywords.is_empty() {
            out.push_str("## Missing Keywords\n\n");
            out.push_str(&analysis.missing_keywords.join(", "));
            out.push_str("\n\n");
        }

        if !analysis.semantic_matches.is_empty() {
            out.push_str("## Top Content Matches\n\n");
            out.push_str("| Similarity | Resume | Job Description |\n|---|---|---|\n");
            for m in &analysis.semantic_matches {
                out.push_str(&format!(
                    "| {}% | {} | {} |\n",
                    m.similarity, m.resume_text, m.job_text
                ));
            }
            out.push('\n');
        }

        Ok(out)
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console: ConsoleFormatter::new(use_colors, detailed),
            json: JsonFormatter,
            markdown: MarkdownFormatter,
        }
    }

    pub fn format(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console.format_report(report),
            OutputFormat::Json => self.json.format_report(report),
            OutputFormat::Markdown => self.markdown.format_report(report),
        }
    }

    pub fn save(&self, report: &AnalysisReport, format: OutputFormat, path: &Path) -> Result<()> {
        // Never write ANSI codes to a file.
        let rendered = match format {
            OutputFormat::Console => {
                ConsoleFormatter::new(false, self.console.detailed).format_report(report)?
            }
            other => self.format(report, other)?,
        };
        std::fs::write(path, rendered)?;
        Ok(())
    }
}
