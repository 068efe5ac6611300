//! Test data fixtures.

use std::collections::BTreeMap;

use chrono::Utc;
use logos_persistence::types::{Article, ContentBlock, ContentType};
use serde_json::{Value, json};

/// Number of articles in [`articles`].
pub const ARTICLE_COUNT: usize = 19;

/// Builds an article with one title and one body block per language.
pub fn article(id: &str, theme: &str, english: (&str, &str), tamil: (&str, &str)) -> Article {
    let mut title = BTreeMap::new();
    title.insert("english".to_string(), english.0.to_string());
    title.insert("tamil".to_string(), tamil.0.to_string());

    let mut content = BTreeMap::new();
    content.insert(
        "english".to_string(),
        vec![ContentBlock::new(ContentType::MainText, english.1)],
    );
    content.insert(
        "tamil".to_string(),
        vec![ContentBlock::new(ContentType::MainText, tamil.1)],
    );

    Article::new(id, title, theme, content, Utc::now())
}

/// The standard article set: `weakness` first, then `day-01` to `day-18`.
///
/// Themes: blue 7, gray 6, warm 6.
pub fn articles() -> Vec<Article> {
    const THEMES: [&str; 3] = ["blue", "gray", "warm"];

    let mut all = vec![article(
        "weakness",
        "blue",
        ("Strength in Weakness", "My grace is sufficient for you."),
        ("பலவீனத்தில் பலம்", "என் கிருபை உனக்குப் போதும்."),
    )];

    for n in 1..=18 {
        let english_title = format!("Daily Word {}", n);
        let english_text = format!("Meditation number {} on faithfulness.", n);
        let tamil_title = format!("தினசரி வார்த்தை {}", n);
        let tamil_text = format!("தியானம் {}", n);
        all.push(article(
            &format!("day-{:02}", n),
            THEMES[n % 3],
            (&english_title, &english_text),
            (&tamil_title, &tamil_text),
        ));
    }

    all
}

/// A valid item creation body.
pub fn item_body(name: &str, price: f64, quantity: i64, category: &str) -> Value {
    json!({
        "name": name,
        "description": format!("{} for testing", name),
        "price": price,
        "quantity": quantity,
        "category": category,
        "tags": ["test"],
    })
}
