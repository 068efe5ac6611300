//! Aggregate statistics over the stored collections.

use serde::{Deserialize, Serialize};

use super::article::Language;
use super::item::{Item, ItemCategory};

/// Number of articles carrying one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCount {
    /// The theme tag.
    pub theme: String,
    /// Articles with that tag.
    pub count: u64,
}

/// Article statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleStats {
    /// Total stored articles.
    pub total_articles: u64,
    /// Per-theme counts, sorted by theme.
    pub by_theme: Vec<ThemeCount>,
    /// Languages articles are written in.
    pub available_languages: Vec<Language>,
}

impl ArticleStats {
    /// Builds the statistics from per-theme counts.
    ///
    /// The total is the sum of the per-theme counts, so the two can never
    /// disagree within one response.
    pub fn from_theme_counts(mut by_theme: Vec<ThemeCount>) -> Self {
        by_theme.sort_by(|a, b| a.theme.cmp(&b.theme));
        Self {
            total_articles: by_theme.iter().map(|t| t.count).sum(),
            by_theme,
            available_languages: Language::ALL.to_vec(),
        }
    }
}

/// Item statistics for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    /// The category.
    pub category: ItemCategory,
    /// Items in the category.
    pub count: u64,
    /// Sum of `price * quantity`, rounded to cents.
    pub total_value: f64,
    /// Average price, rounded to cents.
    pub avg_price: f64,
}

/// Item statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStats {
    /// Total stored items.
    pub total_items: u64,
    /// Items flagged active.
    pub active_items: u64,
    /// Items flagged inactive.
    pub inactive_items: u64,
    /// Per-category figures, sorted by category.
    pub by_category: Vec<CategoryStats>,
}

impl ItemStats {
    /// Computes the statistics of a set of items.
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        use std::collections::BTreeMap;

        let mut total = 0u64;
        let mut active = 0u64;
        // category -> (count, value, price sum)
        let mut groups: BTreeMap<ItemCategory, (u64, f64, f64)> = BTreeMap::new();

        for item in items {
            total += 1;
            if item.is_active {
                active += 1;
            }
            let entry = groups.entry(item.category).or_insert((0, 0.0, 0.0));
            entry.0 += 1;
            entry.1 += item.value();
            entry.2 += item.price;
        }

        let by_category = groups
            .into_iter()
            .map(|(category, (count, value, price_sum))| CategoryStats {
                category,
                count,
                total_value: round_cents(value),
                avg_price: round_cents(price_sum / count as f64),
            })
            .collect();

        Self {
            total_items: total,
            active_items: active,
            inactive_items: total - active,
            by_category,
        }
    }
}

/// Rounds a monetary amount to two decimals.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
