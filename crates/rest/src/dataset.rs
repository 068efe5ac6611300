//! Loading the article dataset file and uploading it into storage.
//!
//! The dataset is a JSON document of the shape `{"pages": [ ... ]}` where
//! each page carries `id`, `title`, `theme` and `content`. Upload is
//! idempotent: pages whose id is already stored are skipped.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use chrono::Utc;
use logos_persistence::core::ArticleStorage;
use logos_persistence::error::StorageResult;
use logos_persistence::types::{Article, ContentBlock, Language};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::error::RestError;

/// Theme given to pages that carry none.
pub const DEFAULT_THEME: &str = "gray";

/// Errors reading the dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file does not exist.
    #[error("dataset file not found: {}", path.display())]
    NotFound {
        /// The configured path.
        path: PathBuf,
    },

    /// The file could not be read.
    #[error("failed to read dataset file {}: {source}", path.display())]
    Io {
        /// The configured path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid dataset JSON.
    #[error("invalid JSON format in dataset file: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The file holds no pages.
    #[error("no articles found in dataset file")]
    NoPages,
}

impl From<DatasetError> for RestError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::NotFound { path } => RestError::NotFound {
                resource: "dataset file".to_string(),
                id: path.display().to_string(),
            },
            DatasetError::Io { .. } => RestError::InternalError {
                message: err.to_string(),
            },
            DatasetError::Malformed(_) | DatasetError::NoPages => RestError::BadRequest {
                message: err.to_string(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct DatasetFile {
    #[serde(default)]
    pages: Vec<PageRecord>,
}

/// One page of the dataset file, with defaults applied.
///
/// A key holding `null` gets the same default as a missing key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageRecord {
    /// External article id; empty when missing.
    #[serde(default, deserialize_with = "id_or_empty")]
    pub id: String,
    /// Titles by language code.
    #[serde(default = "empty_title", deserialize_with = "title_or_empty")]
    pub title: BTreeMap<String, String>,
    /// Theme tag.
    #[serde(default = "default_theme", deserialize_with = "theme_or_default")]
    pub theme: String,
    /// Body blocks by language code.
    #[serde(default = "empty_content", deserialize_with = "content_or_empty")]
    pub content: BTreeMap<String, Vec<ContentBlock>>,
}

fn id_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn title_or_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    Ok(Option::<BTreeMap<String, String>>::deserialize(deserializer)?.unwrap_or_else(empty_title))
}

fn theme_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_theme))
}

fn content_or_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, Vec<ContentBlock>>, D::Error> {
    Ok(Option::<BTreeMap<String, Vec<ContentBlock>>>::deserialize(deserializer)?
        .unwrap_or_else(empty_content))
}

fn empty_title() -> BTreeMap<String, String> {
    Language::ALL
        .iter()
        .map(|lang| (lang.as_str().to_string(), String::new()))
        .collect()
}

fn empty_content() -> BTreeMap<String, Vec<ContentBlock>> {
    Language::ALL
        .iter()
        .map(|lang| (lang.as_str().to_string(), Vec::new()))
        .collect()
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

/// Parses dataset JSON text.
pub fn parse_dataset(text: &str) -> Result<Vec<PageRecord>, DatasetError> {
    let file: DatasetFile = serde_json::from_str(text)?;
    if file.pages.is_empty() {
        return Err(DatasetError::NoPages);
    }
    Ok(file.pages)
}

/// Reads and parses the dataset file at `path`.
pub async fn load_dataset(path: &Path) -> Result<Vec<PageRecord>, DatasetError> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DatasetError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DatasetError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    parse_dataset(&text)
}

/// Outcome of an upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UploadReport {
    /// Human-readable summary.
    pub message: String,
    /// Number of articles inserted.
    pub inserted_count: usize,
    /// Number of pages skipped because the id was already present.
    pub skipped_count: usize,
    /// Number of pages without an id.
    pub invalid_count: usize,
    /// Ids inserted by this upload.
    pub inserted: Vec<String>,
    /// Ids skipped by this upload.
    pub skipped: Vec<String>,
    /// Language parity problems and other non-fatal findings.
    pub warnings: Vec<String>,
}

/// Inserts every page whose id is not yet stored.
///
/// Within one dataset the first page of an id wins; later pages with the
/// same id are reported as skipped.
pub async fn upload_pages<S>(storage: &S, pages: Vec<PageRecord>) -> StorageResult<UploadReport>
where
    S: ArticleStorage + ?Sized,
{
    let now = Utc::now();
    let mut report = UploadReport::default();
    let mut seen = HashSet::new();

    for (index, page) in pages.into_iter().enumerate() {
        let id = page.id.trim().to_string();
        if id.is_empty() {
            warn!(index, "Skipping page without id");
            report.invalid_count += 1;
            report
                .warnings
                .push(format!("page at index {} has no id and was not inserted", index));
            continue;
        }
        if !seen.insert(id.clone()) {
            warn!(%id, "Skipping duplicate page in dataset");
            report.skipped.push(id);
            continue;
        }

        let article = Article::new(id.clone(), page.title, page.theme, page.content, now);
        for issue in article.language_parity_issues() {
            warn!(%id, "{}", issue);
            report.warnings.push(issue);
        }

        if storage.insert_article_if_absent(article).await? {
            report.inserted.push(id);
        } else {
            report.skipped.push(id);
        }
    }

    report.inserted_count = report.inserted.len();
    report.skipped_count = report.skipped.len();
    report.message = format!(
        "Uploaded {} new articles, skipped {} already present",
        report.inserted_count, report.skipped_count
    );

    info!(
        inserted = report.inserted_count,
        skipped = report.skipped_count,
        invalid = report.invalid_count,
        warnings = report.warnings.len(),
        "Dataset upload finished"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use logos_persistence::backends::memory::MemoryBackend;
    use logos_persistence::search::ArticleFilter;

    #[test]
    fn test_defaults_applied() {
        let pages = parse_dataset(r#"{"pages": [{"id": "a"}]}"#).unwrap();
        let page = &pages[0];
        assert_eq!(page.theme, "gray");
        assert_eq!(page.title["tamil"], "");
        assert!(page.content["english"].is_empty());
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let pages = parse_dataset(
            r#"{"pages": [{"id": "a", "title": null, "theme": null, "content": null}]}"#,
        )
        .unwrap();
        let page = &pages[0];
        assert_eq!(page.id, "a");
        assert_eq!(page.theme, "gray");
        assert_eq!(page.title["english"], "");
        assert!(page.content["tamil"].is_empty());
    }

    #[test]
    fn test_no_pages() {
        assert!(matches!(
            parse_dataset(r#"{"pages": []}"#),
            Err(DatasetError::NoPages)
        ));
        assert!(matches!(parse_dataset("{}"), Err(DatasetError::NoPages)));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            parse_dataset("{not json"),
            Err(DatasetError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = load_dataset(Path::new("/nonexistent/logos/content.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, DatasetError::NotFound { .. }));
        let rest: RestError = err.into();
        assert_eq!(rest.status(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_upload_is_idempotent() {
        let storage = MemoryBackend::new();
        let text = r#"{"pages": [
            {"id": "a", "theme": "blue"},
            {"id": "b"},
            {"id": "a", "theme": "warm"},
            {"id": ""}
        ]}"#;

        let report = upload_pages(&storage, parse_dataset(text).unwrap())
            .await
            .unwrap();
        assert_eq!(report.inserted, vec!["a", "b"]);
        assert_eq!(report.skipped, vec!["a"]);
        assert_eq!(report.invalid_count, 1);

        let again = upload_pages(&storage, parse_dataset(text).unwrap())
            .await
            .unwrap();
        assert_eq!(again.inserted_count, 0);
        assert_eq!(again.skipped_count, 3);
        assert_eq!(
            storage.count_articles(&ArticleFilter::new()).await.unwrap(),
            2
        );
        let a = storage.read_article("a").await.unwrap().unwrap();
        assert_eq!(a.theme, "blue");
    }

    #[tokio::test]
    async fn test_parity_warnings() {
        let storage = MemoryBackend::new();
        let text = r#"{"pages": [{
            "id": "half",
            "title": {"english": "Half"},
            "content": {"english": [], "tamil": []}
        }]}"#;
        let report = upload_pages(&storage, parse_dataset(text).unwrap())
            .await
            .unwrap();
        assert_eq!(report.inserted_count, 1);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("tamil content but no tamil title"));
    }
}
