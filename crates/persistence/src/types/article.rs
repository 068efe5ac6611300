//! Article types.
//!
//! This module defines the [`Article`] record, a multilingual piece of content
//! with a stable external id, together with its content blocks and the
//! [`ArticleSummary`] projection returned by listing and search.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum excerpt length, in characters.
pub const EXCERPT_MAX_CHARS: usize = 150;

/// A language an article is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Tamil.
    Tamil,
    /// English.
    English,
}

impl Language {
    /// All recognized languages, in display order.
    pub const ALL: [Language; 2] = [Language::Tamil, Language::English];

    /// Returns the language code used as a key in titles and content.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Tamil => "tamil",
            Language::English => "english",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tamil" => Ok(Language::Tamil),
            "english" => Ok(Language::English),
            other => Err(ValidationError::InvalidParameter {
                parameter: "language".to_string(),
                message: format!("'{}' is not one of: tamil, english", other),
            }),
        }
    }
}

/// The kind of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    /// Body text.
    #[serde(rename = "mainText")]
    MainText,
    /// A quoted passage.
    #[serde(rename = "scripture")]
    Scripture,
    /// A closing reflection.
    #[serde(rename = "reflection")]
    Reflection,
}

/// A typed fragment of an article's body in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// The block kind.
    #[serde(rename = "type")]
    pub block_type: ContentType,

    /// The block text.
    pub value: String,
}

impl ContentBlock {
    /// Creates a new content block.
    pub fn new(block_type: ContentType, value: impl Into<String>) -> Self {
        Self {
            block_type,
            value: value.into(),
        }
    }
}

/// A multilingual article.
///
/// `title` maps a language code to the display title and `content` maps a
/// language code to the ordered body blocks. Both are keyed by the codes of
/// [`Language`] in practice, but the maps do not reject other keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// The external, immutable article id.
    pub id: String,

    /// Titles by language code.
    pub title: BTreeMap<String, String>,

    /// Free-form category tag.
    pub theme: String,

    /// Body blocks by language code.
    pub content: BTreeMap<String, Vec<ContentBlock>>,

    /// When the article was stored.
    pub created_at: DateTime<Utc>,

    /// When the article was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Creates an article stamped with the given time.
    pub fn new(
        id: impl Into<String>,
        title: BTreeMap<String, String>,
        theme: impl Into<String>,
        content: BTreeMap<String, Vec<ContentBlock>>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title,
            theme: theme.into(),
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the title in the given language.
    pub fn title_in(&self, language: Language) -> Option<&str> {
        self.title.get(language.as_str()).map(String::as_str)
    }

    /// Returns the content blocks in the given language.
    pub fn blocks_in(&self, language: Language) -> &[ContentBlock] {
        self.content
            .get(language.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Lists the language keys present in `title` but not in `content`, and
    /// the reverse. An empty result means the article is consistent.
    pub fn language_parity_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        for key in self.title.keys() {
            if !self.content.contains_key(key) {
                issues.push(format!(
                    "article '{}' has a {} title but no {} content",
                    self.id, key, key
                ));
            }
        }
        for key in self.content.keys() {
            if !self.title.contains_key(key) {
                issues.push(format!(
                    "article '{}' has {} content but no {} title",
                    self.id, key, key
                ));
            }
        }
        issues
    }

    /// Builds the listing projection of this article.
    pub fn summary(&self) -> ArticleSummary {
        let excerpt = Language::ALL
            .iter()
            .map(|lang| (lang.as_str().to_string(), excerpt(self.blocks_in(*lang))))
            .collect();

        ArticleSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            theme: self.theme.clone(),
            excerpt,
            created_at: self.created_at,
        }
    }
}

/// The listing projection of an [`Article`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// The article id.
    pub id: String,
    /// Titles by language code.
    pub title: BTreeMap<String, String>,
    /// The article theme.
    pub theme: String,
    /// A short opening passage per language.
    pub excerpt: BTreeMap<String, String>,
    /// When the article was stored.
    pub created_at: DateTime<Utc>,
}

/// Extracts an excerpt from a language's blocks.
///
/// Prefers the first `mainText` or `reflection` block and falls back to the
/// first block of any kind.
pub fn excerpt(blocks: &[ContentBlock]) -> String {
    let chosen = blocks
        .iter()
        .find(|b| matches!(b.block_type, ContentType::MainText | ContentType::Reflection))
        .or_else(|| blocks.first());

    match chosen {
        Some(block) => truncate_at_word(&block.value, EXCERPT_MAX_CHARS),
        None => String::new(),
    }
}

fn truncate_at_word(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let head: String = text.chars().take(max_chars).collect();
    let mut words: Vec<&str> = head.split_whitespace().collect();
    // The last word may have been cut in half.
    if words.len() > 1 {
        words.pop();
    }
    format!("{}...", words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Article {
        let mut title = BTreeMap::new();
        title.insert("tamil".to_string(), "பலவீனம்".to_string());
        title.insert("english".to_string(), "Weakness".to_string());

        let mut content = BTreeMap::new();
        content.insert(
            "tamil".to_string(),
            vec![ContentBlock::new(ContentType::MainText, "தேவன் பெலன்")],
        );
        content.insert(
            "english".to_string(),
            vec![
                ContentBlock::new(ContentType::Scripture, "My grace is sufficient"),
                ContentBlock::new(ContentType::Reflection, "Strength in weakness"),
            ],
        );

        Article::new("weakness", title, "gray", content, Utc::now())
    }

    #[test]
    fn test_language_round_trip() {
        assert_eq!("tamil".parse::<Language>().unwrap(), Language::Tamil);
        assert_eq!("english".parse::<Language>().unwrap(), Language::English);
        assert_eq!(Language::Tamil.to_string(), "tamil");
    }

    #[test]
    fn test_language_rejects_unknown_code() {
        let err = "french".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("language"));
        assert!("Tamil".parse::<Language>().is_err());
    }

    #[test]
    fn test_content_block_wire_names() {
        let block = ContentBlock::new(ContentType::MainText, "text");
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "mainText");

        let parsed: ContentBlock =
            serde_json::from_value(serde_json::json!({"type": "reflection", "value": "v"}))
                .unwrap();
        assert_eq!(parsed.block_type, ContentType::Reflection);
    }

    #[test]
    fn test_accessors() {
        let article = sample();
        assert_eq!(article.title_in(Language::English), Some("Weakness"));
        assert_eq!(article.blocks_in(Language::English).len(), 2);
        assert_eq!(article.created_at, article.updated_at);
    }

    #[test]
    fn test_parity_consistent() {
        assert!(sample().language_parity_issues().is_empty());
    }

    #[test]
    fn test_parity_reports_missing_content() {
        let mut article = sample();
        article.content.remove("english");
        let issues = article.language_parity_issues();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("english title but no english content"));
    }

    #[test]
    fn test_excerpt_prefers_main_text_or_reflection() {
        let article = sample();
        let summary = article.summary();
        assert_eq!(summary.excerpt["english"], "Strength in weakness");
        assert_eq!(summary.excerpt["tamil"], "தேவன் பெலன்");
    }

    #[test]
    fn test_excerpt_falls_back_to_first_block() {
        let blocks = vec![ContentBlock::new(ContentType::Scripture, "Only scripture")];
        assert_eq!(excerpt(&blocks), "Only scripture");
        assert_eq!(excerpt(&[]), "");
    }

    #[test]
    fn test_excerpt_truncates_at_word_boundary() {
        let long = "word ".repeat(40);
        let blocks = vec![ContentBlock::new(ContentType::MainText, long)];
        let result = excerpt(&blocks);
        assert!(result.ends_with("..."));
        assert!(result.chars().count() <= EXCERPT_MAX_CHARS + 3);
        assert!(!result.contains("  "));
        // 150 chars of "word " hold 30 words, the last one is dropped
        assert_eq!(result.trim_end_matches("...").split(' ').count(), 29);
    }

    #[test]
    fn test_summary_serialization() {
        let json = serde_json::to_value(sample().summary()).unwrap();
        assert_eq!(json["id"], "weakness");
        assert_eq!(json["theme"], "gray");
        assert!(json.get("content").is_none());
        assert!(json["excerpt"].is_object());
    }
}
