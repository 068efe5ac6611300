//! Translation of filters into MongoDB query documents.

use mongodb::bson::{Bson, Document, doc};

use crate::search::{ArticleFilter, ItemFilter, TextQuery};

/// Builds a case-insensitive regex condition matching `term` literally.
fn literal_regex(term: &str) -> Document {
    doc! { "$regex": regex::escape(term), "$options": "i" }
}

fn text_conditions(text: &TextQuery) -> Vec<Bson> {
    let pattern = literal_regex(text.term());
    text.languages()
        .iter()
        .flat_map(|lang| {
            let mut title = Document::new();
            title.insert(format!("title.{}", lang), pattern.clone());
            let mut content = Document::new();
            content.insert(format!("content.{}.value", lang), pattern.clone());
            [title, content]
        })
        .map(Bson::Document)
        .collect()
}

/// Translates an article filter.
pub(super) fn article_query(filter: &ArticleFilter) -> Document {
    let mut query = Document::new();
    if let Some(theme) = &filter.theme {
        query.insert("theme", theme.as_str());
    }
    if let Some(text) = &filter.text {
        query.insert("$or", text_conditions(text));
    }
    query
}

/// Translates an item filter.
pub(super) fn item_query(filter: &ItemFilter) -> Document {
    let mut query = Document::new();
    if let Some(category) = filter.category {
        query.insert("category", category.as_str());
    }
    if let Some(active) = filter.is_active {
        query.insert("is_active", active);
    }
    if filter.min_price.is_some() || filter.max_price.is_some() {
        let mut range = Document::new();
        if let Some(min) = filter.min_price {
            range.insert("$gte", min);
        }
        if let Some(max) = filter.max_price {
            range.insert("$lte", max);
        }
        query.insert("price", range);
    }
    if !filter.tags.is_empty() {
        query.insert("tags", doc! { "$in": filter.tags.clone() });
    }
    if let Some(search) = &filter.search {
        let pattern = literal_regex(search);
        query.insert(
            "$or",
            vec![
                doc! { "name": pattern.clone() },
                doc! { "description": pattern },
            ],
        );
    }
    query
}

/// Reads a numeric aggregation result as `f64`.
pub(super) fn number(value: Option<&Bson>) -> f64 {
    match value {
        Some(Bson::Int32(n)) => f64::from(*n),
        Some(Bson::Int64(n)) => *n as f64,
        Some(Bson::Double(n)) => *n,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ItemCategory, Language};

    #[test]
    fn test_empty_article_filter_is_empty_document() {
        assert!(article_query(&ArticleFilter::new()).is_empty());
    }

    #[test]
    fn test_article_filter_with_language() {
        let filter = ArticleFilter::new()
            .with_theme(Some("gray"))
            .with_search(Some("a.b"), Some(Language::Tamil));
        let query = article_query(&filter);

        assert_eq!(query.get_str("theme").unwrap(), "gray");
        let ors = query.get_array("$or").unwrap();
        assert_eq!(ors.len(), 2);
        let first = ors[0].as_document().unwrap();
        let regex = first.get_document("title.tamil").unwrap();
        assert_eq!(regex.get_str("$regex").unwrap(), r"a\.b");
        assert_eq!(regex.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_article_search_all_languages() {
        let filter = ArticleFilter::new().with_search(Some("grace"), None);
        let query = article_query(&filter);
        assert_eq!(query.get_array("$or").unwrap().len(), 4);
    }

    #[test]
    fn test_item_filter() {
        let filter = ItemFilter {
            category: Some(ItemCategory::Books),
            min_price: Some(1.0),
            is_active: Some(true),
            tags: vec!["new".to_string()],
            search: Some("atlas".to_string()),
            ..Default::default()
        };
        let query = item_query(&filter);
        assert_eq!(query.get_str("category").unwrap(), "books");
        assert!(query.get_bool("is_active").unwrap());
        let price = query.get_document("price").unwrap();
        assert_eq!(price.get_f64("$gte").unwrap(), 1.0);
        assert!(price.get("$lte").is_none());
        assert_eq!(query.get_array("$or").unwrap().len(), 2);
    }

    #[test]
    fn test_number() {
        assert_eq!(number(Some(&Bson::Int32(3))), 3.0);
        assert_eq!(number(Some(&Bson::Double(2.5))), 2.5);
        assert_eq!(number(None), 0.0);
    }
}
