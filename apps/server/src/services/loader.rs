//! Fetches quiz files and assembles the catalog.

use std::future::Future;
use std::path::PathBuf;

use quiz_core::{parse, parse_index, Catalog};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {name}: {source}")]
    Http {
        name: String,
        #[source]
        source: reqwest::Error,
    },
}

/// How the catalog is laid out across files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStrategy {
    /// One file holding every topic.
    Single { file: String },
    /// An index file listing one quiz file per line.
    Indexed { index: String },
}

/// Something that can return the text of a named quiz file.
pub trait QuizSource {
    fn fetch(&self, name: &str) -> impl Future<Output = Result<String, LoadError>> + Send;
}

/// Reads quiz files from a local directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl QuizSource for DirSource {
    async fn fetch(&self, name: &str) -> Result<String, LoadError> {
        let path = self.root.join(name);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| LoadError::Io {
                name: path.display().to_string(),
                source,
            })
    }
}

/// Fetches quiz files relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), name.trim_start_matches('/'))
    }
}

impl QuizSource for HttpSource {
    async fn fetch(&self, name: &str) -> Result<String, LoadError> {
        let url = self.url_for(name);
        let to_error = |source| LoadError::Http {
            name: url.clone(),
            source,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(to_error)?;

        response.text().await.map_err(to_error)
    }
}

/// Load the full catalog. Any failed fetch aborts the whole load.
pub async fn load_catalog<S: QuizSource>(
    source: &S,
    strategy: &LoadStrategy,
) -> Result<Catalog, LoadError> {
    match strategy {
        LoadStrategy::Single { file } => {
            let text = source.fetch(file).await?;
            let catalog = parse(&text);
            tracing::debug!("Parsed {}: {} topics", file, catalog.len());
            Ok(catalog)
        }
        LoadStrategy::Indexed { index } => {
            let files = parse_index(&source.fetch(index).await?);
            tracing::info!("Index {} lists {} quiz files", index, files.len());

            // Sequential so later files deterministically win.
            let mut catalog = Catalog::new();
            for file in &files {
                let parsed = parse(&source.fetch(file).await?);
                tracing::debug!("Parsed {}: {} topics", file, parsed.len());
                catalog.merge(parsed);
            }
            Ok(catalog)
        }
    }
}
