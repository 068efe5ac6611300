//! Backend-independent storage checks.

use logos_persistence::core::{ArticleStorage, ItemStorage};
use logos_persistence::error::{ResourceError, StorageError};
use logos_persistence::search::{
    self, ArticleFilter, ItemFilter, SearchRequest, list_articles, list_items,
};
use logos_persistence::types::{
    ItemCategory, ItemUpdate, Language, PageBounds, PageRequest,
};

use super::fixtures::{articles, new_item};

/// Loads the article fixtures, asserting every one is new.
pub async fn seed_articles<S: ArticleStorage>(storage: &S) {
    for article in articles() {
        assert!(
            storage.insert_article_if_absent(article).await.unwrap(),
            "fixture already stored"
        );
    }
}

pub async fn article_reads<S: ArticleStorage>(storage: &S) {
    seed_articles(storage).await;

    let all = ArticleFilter::new();
    assert_eq!(storage.count_articles(&all).await.unwrap(), 5);

    let article = storage.read_article("weakness").await.unwrap().unwrap();
    assert_eq!(article.title_in(Language::Tamil), Some("பலவீனத்தில் பலம்"));
    assert!(storage.read_article("missing").await.unwrap().is_none());

    let duplicate = articles().remove(0);
    assert!(!storage.insert_article_if_absent(duplicate).await.unwrap());
    assert_eq!(storage.count_articles(&all).await.unwrap(), 5);
}

pub async fn article_listing<S: ArticleStorage>(storage: &S) {
    seed_articles(storage).await;

    let page = list_articles(
        storage,
        &ArticleFilter::new(),
        PageRequest::clamped(Some(1), Some(2), PageBounds::ARTICLES),
    )
    .await
    .unwrap();
    let ids: Vec<_> = page.items.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["hope", "peace"]);
    assert_eq!(page.total, 5);
    assert!(page.has_next);
    assert!(page.has_previous);

    let blue = ArticleFilter::new().with_theme(Some("blue"));
    let page = list_articles(storage, &blue, PageRequest::default())
        .await
        .unwrap();
    let ids: Vec<_> = page.items.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["grace", "peace", "weakness"]);

    let past_end = list_articles(
        storage,
        &ArticleFilter::new(),
        PageRequest::clamped(Some(50), None, PageBounds::ARTICLES),
    )
    .await
    .unwrap();
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total, 5);
}

pub async fn article_search<S: ArticleStorage>(storage: &S) {
    seed_articles(storage).await;

    let request = SearchRequest::parse(Some("WEAK"), None, None).unwrap();
    let outcome = search::search_articles(storage, &request).await.unwrap();
    assert_eq!(outcome.total_matches, 1);
    assert_eq!(outcome.articles[0].id, "weakness");

    let request = SearchRequest::parse(Some("sentence"), None, Some(2)).unwrap();
    let outcome = search::search_articles(storage, &request).await.unwrap();
    assert_eq!(outcome.total_matches, 5);
    assert_eq!(outcome.articles.len(), 2);

    let request = SearchRequest::parse(Some("கிருபை"), Some("english"), None).unwrap();
    let outcome = search::search_articles(storage, &request).await.unwrap();
    assert_eq!(outcome.total_matches, 0);

    let request = SearchRequest::parse(Some("கிருபை"), Some("tamil"), None).unwrap();
    let outcome = search::search_articles(storage, &request).await.unwrap();
    assert_eq!(outcome.total_matches, 1);

    let special = SearchRequest::parse(Some(".*"), None, None).unwrap();
    let outcome = search::search_articles(storage, &special).await.unwrap();
    assert_eq!(outcome.total_matches, 0);
}

pub async fn article_themes<S: ArticleStorage>(storage: &S) {
    assert!(storage.distinct_themes().await.unwrap().is_empty());
    seed_articles(storage).await;

    assert_eq!(
        storage.distinct_themes().await.unwrap(),
        vec!["blue", "gray", "warm"]
    );

    let mut counts = storage.theme_counts().await.unwrap();
    counts.sort_by(|a, b| a.theme.cmp(&b.theme));
    let pairs: Vec<_> = counts.iter().map(|c| (c.theme.as_str(), c.count)).collect();
    assert_eq!(pairs, vec![("blue", 3), ("gray", 1), ("warm", 1)]);
}

pub async fn item_crud<S: ItemStorage>(storage: &S) {
    let created = storage
        .create_item(new_item("Lamp", 20.0, 2, ItemCategory::Home))
        .await
        .unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.created_at, created.updated_at);

    let read = storage.read_item(&created.id).await.unwrap().unwrap();
    assert_eq!(read.name, "Lamp");

    let update = ItemUpdate {
        price: Some(25.5),
        is_active: Some(false),
        ..Default::default()
    };
    let updated = storage.update_item(&created.id, update).await.unwrap();
    assert_eq!(updated.price, 25.5);
    assert!(!updated.is_active);
    assert_eq!(updated.name, "Lamp");
    assert!(updated.updated_at >= created.updated_at);

    let missing = storage
        .update_item(
            "missing",
            ItemUpdate {
                quantity: Some(1),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        missing,
        Err(StorageError::Resource(ResourceError::NotFound { .. }))
    ));

    storage.delete_item(&created.id).await.unwrap();
    assert!(storage.read_item(&created.id).await.unwrap().is_none());
    assert!(matches!(
        storage.delete_item(&created.id).await,
        Err(StorageError::Resource(ResourceError::NotFound { .. }))
    ));
}

pub async fn item_listing<S: ItemStorage>(storage: &S) {
    for (name, price, category) in [
        ("Laptop", 900.0, ItemCategory::Electronics),
        ("Novel", 15.0, ItemCategory::Books),
        ("Radio", 45.0, ItemCategory::Electronics),
    ] {
        storage
            .create_item(new_item(name, price, 1, category))
            .await
            .unwrap();
    }

    let page = list_items(storage, &ItemFilter::default(), PageRequest::default())
        .await
        .unwrap();
    let names: Vec<_> = page.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Laptop", "Novel", "Radio"]);

    let filter = ItemFilter {
        category: Some(ItemCategory::Electronics),
        max_price: Some(100.0),
        ..Default::default()
    };
    let page = list_items(storage, &filter, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Radio");

    let filter = ItemFilter {
        search: Some("NOV".to_string()),
        ..Default::default()
    };
    assert_eq!(storage.count_items(&filter).await.unwrap(), 1);

    let invalid = ItemFilter {
        min_price: Some(-1.0),
        ..Default::default()
    };
    assert!(list_items(storage, &invalid, PageRequest::default()).await.is_err());
}

pub async fn item_statistics<S: ItemStorage>(storage: &S) {
    let empty = storage.item_stats().await.unwrap();
    assert_eq!(empty.total_items, 0);
    assert!(empty.by_category.is_empty());

    storage
        .create_item(new_item("Pen", 2.5, 4, ItemCategory::Other))
        .await
        .unwrap();
    storage
        .create_item(new_item("Pencil", 1.5, 2, ItemCategory::Other))
        .await
        .unwrap();
    let mut book = new_item("Atlas", 30.0, 1, ItemCategory::Books);
    book.is_active = false;
    storage.create_item(book).await.unwrap();

    let stats = storage.item_stats().await.unwrap();
    assert_eq!(stats.total_items, 3);
    assert_eq!(stats.active_items, 2);
    assert_eq!(stats.inactive_items, 1);

    let other = stats
        .by_category
        .iter()
        .find(|c| c.category == ItemCategory::Other)
        .unwrap();
    assert_eq!(other.count, 2);
    assert_eq!(other.total_value, 13.0);
    assert_eq!(other.avg_price, 2.0);
}
