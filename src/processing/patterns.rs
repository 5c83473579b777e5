//! Static pattern tables used by the text processor and analyzer.
//!
//! Kept as plain constant tables so the extraction batteries can be reviewed
//! and extended without touching the scoring logic. Never mutated at runtime;
//! the `TextProcessor` compiles them once at construction.

/// Common English function words excluded from keyword extraction.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had",
    "her", "was", "one", "our", "out", "day", "get", "has", "him", "his",
    "how", "man", "new", "now", "old", "see", "two", "way", "who", "its",
    "did", "yes", "your", "with", "this", "that", "from", "they", "will",
    "have", "been", "were", "than", "then", "them",
];

/// Skill regex fragments, grouped by category. Each group is compiled into a
/// single case-insensitive alternation; group order fixes the extraction
/// order. Fragments are written against cleaned text (lowercase, punctuation
/// collapsed to spaces) but also tolerate common raw spellings.
pub const SKILL_PATTERN_GROUPS: &[(&str, &[&str])] = &[
    (
        "programming languages",
        &[
            "javascript", "typescript", "python", "java", "golang", "ruby",
            "php", "swift", "kotlin", "scala", "rust", "perl", "haskell",
        ],
    ),
    (
        "frameworks",
        &[
            r"react(?:[.\s]?js)?", r"vue(?:[.\s]?js)?", "angular", "svelte",
            r"node[.\s]?js", r"next[.\s]?js", "express", "django", "flask",
            "spring", "rails", "laravel", "flutter", "graphql",
        ],
    ),
    (
        "databases",
        &[
            "postgresql", "postgres", "mysql", "mongodb", "cassandra",
            "dynamodb", "sqlite", "redis", "elasticsearch", "oracle", "sql",
        ],
    ),
    (
        "cloud and devops",
        &[
            "aws", "azure", "gcp", "docker", "kubernetes", "terraform",
            "ansible", "jenkins", "linux", "git", "devops", "microservices",
            r"ci\s?cd",
        ],
    ),
    (
        "design and productivity tools",
        &[
            "figma", "sketch", "photoshop", "illustrator", "jira",
            "confluence", "excel", "tableau", "salesforce",
        ],
    ),
    (
        "soft skills",
        &[
            "leadership", "communication", "teamwork", "problem solving",
            "critical thinking", "collaboration", "mentoring", "agile",
            "scrum", "project management", "time management",
        ],
    ),
];

/// Experience phrases: "worked as <role> at <company>", "experience as a
/// <role> with <company>" and the like, matched against cleaned text.
pub const EXPERIENCE_PATTERN: &str = r"\b(?:worked|working|work|experience)\b\s+(?:as\s+)?(?:an?\s+)?((?:\w+\s+){0,4}?)(?:at|in|for|with)\s+(\w+(?:\s+\w+){0,2}?)\b";

/// Education phrases: "<credential> [degree] in/of/from <subject or school>",
/// matched against cleaned text.
pub const EDUCATION_PATTERN: &str = r"\b(bachelors?|masters?|phd|doctorate|associates?|mba|degree|diploma)\b(?:\s+degree)?\s+(in|of|from)\s+(\w+(?:\s+\w+){0,3})";

/// Section keywords whose total absence from a cleaned resume draws a
/// formatting penalty.
pub const SECTION_KEYWORDS: &[&str] = &["summary", "experience", "education", "skills", "contact"];

/// Bullet markers searched in raw text (ATS parsers handle these fine; their
/// absence suggests dense paragraphs).
pub const BULLET_MARKERS: &[&str] = &["\u{2022}", "- ", "* "];

/// Markup markers searched in raw text. Tables, images, and running
/// headers/footers routinely break ATS parsing.
pub const TABLE_MARKERS: &[&str] = &["<table", "<tr", "<td"];
pub const IMAGE_MARKERS: &[&str] = &["<img", ".jpg", ".jpeg", ".png", ".gif", ".bmp"];
pub const HEADER_FOOTER_MARKERS: &[&str] = &["<header", "<footer"];
