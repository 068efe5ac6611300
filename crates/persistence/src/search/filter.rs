//! Store-level predicates for listing queries.
//!
//! [`ArticleFilter`] and [`ItemFilter`] describe a conjunction of optional
//! conditions. Every backend evaluates the same filter value: the memory
//! backend calls `matches` directly, the MongoDB backend translates the
//! filter into a BSON query document.

use crate::error::ValidationError;
use crate::types::{Article, Item, ItemCategory, Language};

/// Longest accepted search term, in characters.
pub const MAX_SEARCH_LENGTH: usize = 100;

/// A case-insensitive substring condition over article text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    term: String,
    lowered: String,
    languages: Vec<Language>,
}

impl TextQuery {
    /// Creates a query scanning the given language, or every language.
    pub fn new(term: impl Into<String>, language: Option<Language>) -> Self {
        let term = term.into();
        let lowered = term.to_lowercase();
        let languages = match language {
            Some(lang) => vec![lang],
            None => Language::ALL.to_vec(),
        };
        Self {
            term,
            lowered,
            languages,
        }
    }

    /// The term as given by the caller.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The languages whose title and content are scanned.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Returns true if the term occurs in a scanned title or content block.
    pub fn matches(&self, article: &Article) -> bool {
        self.languages.iter().any(|&lang| {
            article
                .title_in(lang)
                .is_some_and(|title| contains_ignore_case(title, &self.lowered))
                || article
                    .blocks_in(lang)
                    .iter()
                    .any(|block| contains_ignore_case(&block.value, &self.lowered))
        })
    }
}

/// Filter applied to article listings and searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    /// Exact theme to match.
    pub theme: Option<String>,
    /// Text condition.
    pub text: Option<TextQuery>,
}

impl ArticleFilter {
    /// Creates a filter that matches every article.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the filter to one theme. An empty theme is ignored.
    pub fn with_theme(mut self, theme: Option<&str>) -> Self {
        self.theme = non_empty(theme).map(str::to_string);
        self
    }

    /// Adds a text condition. An empty term is ignored.
    pub fn with_search(mut self, term: Option<&str>, language: Option<Language>) -> Self {
        self.text = non_empty(term).map(|t| TextQuery::new(t, language));
        self
    }

    /// Checks the search term length.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.text {
            Some(text) => check_search_length("search", text.term()),
            None => Ok(()),
        }
    }

    /// Returns true when the filter matches every article.
    pub fn is_empty(&self) -> bool {
        self.theme.is_none() && self.text.is_none()
    }

    /// Evaluates the filter against one article.
    pub fn matches(&self, article: &Article) -> bool {
        if let Some(theme) = &self.theme {
            if &article.theme != theme {
                return false;
            }
        }
        match &self.text {
            Some(text) => text.matches(article),
            None => true,
        }
    }
}

/// Filter applied to item listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    /// Exact category.
    pub category: Option<ItemCategory>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    /// Active flag.
    pub is_active: Option<bool>,
    /// Case-insensitive substring of name or description.
    pub search: Option<String>,
    /// Items carrying any of these tags.
    pub tags: Vec<String>,
}

impl ItemFilter {
    /// Checks the filter bounds.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, bound) in [("min_price", self.min_price), ("max_price", self.max_price)] {
            if let Some(value) = bound {
                if !value.is_finite() || value < 0.0 {
                    return Err(ValidationError::InvalidParameter {
                        parameter: name.to_string(),
                        message: "must be a non-negative number".to_string(),
                    });
                }
            }
        }
        match &self.search {
            Some(search) => check_search_length("search", search),
            None => Ok(()),
        }
    }

    /// Evaluates the filter against one item.
    pub fn matches(&self, item: &Item) -> bool {
        if self.category.is_some_and(|c| c != item.category) {
            return false;
        }
        if self.min_price.is_some_and(|min| item.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| item.price > max) {
            return false;
        }
        if self.is_active.is_some_and(|active| active != item.is_active) {
            return false;
        }
        if !self.tags.is_empty() && !item.tags.iter().any(|t| self.tags.contains(t)) {
            return false;
        }
        if let Some(search) = &self.search {
            let lowered = search.to_lowercase();
            let in_name = contains_ignore_case(&item.name, &lowered);
            let in_description = item
                .description
                .as_deref()
                .is_some_and(|d| contains_ignore_case(d, &lowered));
            if !in_name && !in_description {
                return false;
            }
        }
        true
    }
}

/// Splits a comma-separated tag list, dropping blanks.
pub fn parse_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Rejects search terms longer than [`MAX_SEARCH_LENGTH`] characters.
pub(crate) fn check_search_length(parameter: &str, term: &str) -> Result<(), ValidationError> {
    if term.chars().count() > MAX_SEARCH_LENGTH {
        return Err(ValidationError::InvalidParameter {
            parameter: parameter.to_string(),
            message: format!("must be at most {} characters", MAX_SEARCH_LENGTH),
        });
    }
    Ok(())
}

/// Treats an empty string as absent.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Case-insensitive containment; `lowered_needle` must already be lowercase.
fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
