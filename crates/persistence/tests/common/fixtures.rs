//! Test data fixtures.

use std::collections::BTreeMap;

use chrono::Utc;
use logos_persistence::types::{Article, ContentBlock, ContentType, ItemCategory, NewItem};

/// Builds an article with an English and a Tamil title and one body block each.
pub fn article(id: &str, theme: &str, english: &str, tamil: &str) -> Article {
    let title = BTreeMap::from([
        ("english".to_string(), english.to_string()),
        ("tamil".to_string(), tamil.to_string()),
    ]);
    let content = BTreeMap::from([
        (
            "english".to_string(),
            vec![ContentBlock::new(
                ContentType::MainText,
                format!("{} in a sentence.", english),
            )],
        ),
        (
            "tamil".to_string(),
            vec![ContentBlock::new(ContentType::Scripture, tamil)],
        ),
    ]);
    Article::new(id, title, theme, content, Utc::now())
}

/// Five articles: three blue, one gray, one warm.
pub fn articles() -> Vec<Article> {
    vec![
        article("grace", "blue", "Grace", "கிருபை"),
        article("hope", "gray", "Hope", "நம்பிக்கை"),
        article("peace", "blue", "Peace", "சமாதானம்"),
        article("joy", "warm", "Joy", "சந்தோஷம்"),
        article("weakness", "blue", "Strength in Weakness", "பலவீனத்தில் பலம்"),
    ]
}

/// A new item.
pub fn new_item(name: &str, price: f64, quantity: i64, category: ItemCategory) -> NewItem {
    NewItem {
        name: name.to_string(),
        description: Some(format!("{} description", name)),
        price,
        quantity,
        category,
        tags: vec!["sample".to_string()],
        is_active: true,
    }
}
