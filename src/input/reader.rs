//! Text extraction from resume and job description files.

use crate::error::{AtsScanError, Result};
use log::info;
use pulldown_cmark::{html, Parser};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// Supported source file formats, detected by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Pdf,
    Text,
    Markdown,
}

impl SourceFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::Text),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }
}

/// Reads resume/job files into plain text, caching by path so the same file
/// is only extracted once per run.
pub struct DocumentReader {
    cache: HashMap<String, String>,
}

impl Default for DocumentReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub async fn read_text(&mut self, path: &Path) -> Result<String> {
        let key = path.to_string_lossy().to_string();
        if let Some(cached) = self.cache.get(&key) {
            info!("Using cached text for: {}", path.display());
            return Ok(cached.clone());
        }

        if !path.exists() {
            return Err(AtsScanError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(SourceFormat::from_extension)
            .ok_or_else(|| {
                AtsScanError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                ))
            })?;

        let text = match format {
            SourceFormat::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                let bytes = fs::read(path).await?;
                pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
                    AtsScanError::PdfExtraction(format!(
                        "Failed to extract text from '{}': {}",
                        path.display(),
                        e
                    ))
                })?
            }
            SourceFormat::Text => {
                info!("Reading plain text file: {}", path.display());
                fs::read_to_string(path).await?
            }
            SourceFormat::Markdown => {
                info!("Stripping markdown from: {}", path.display());
                let markdown = fs::read_to_string(path).await?;
                strip_markdown(&markdown)
            }
        };

        self.cache.insert(key, text.clone());
        Ok(text)
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

/// Render markdown to HTML, then drop the tags and decode the common
/// entities. Good enough for resume prose; markdown structure is not needed
/// downstream.
fn strip_markdown(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut rendered = String::new();
    html::push_html(&mut rendered, parser);

    let decoded = rendered
        .replace("<br>", "\n")
        .replace("</p>", "\n\n")
        .replace("</li>", "\n")
        .replace("<li>", "- ")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    let tag = regex::Regex::new(r"<[^>]*>").expect("invalid tag regex");
    let stripped = tag.replace_all(&decoded, "");

    stripped
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(SourceFormat::from_extension("PDF"), Some(SourceFormat::Pdf));
        assert_eq!(SourceFormat::from_extension("txt"), Some(SourceFormat::Text));
        assert_eq!(
            SourceFormat::from_extension("markdown"),
            Some(SourceFormat::Markdown)
        );
        assert_eq!(SourceFormat::from_extension("docx"), None);
    }

    #[test]
    fn test_strip_markdown_keeps_bullets() {
        let text = strip_markdown("## Skills\n\n* Rust\n* Python\n\n**bold** text");
        assert!(text.contains("Skills"));
        assert!(text.contains("- Rust"));
        assert!(!text.contains("**"));
        assert!(!text.contains("##"));
    }
}
