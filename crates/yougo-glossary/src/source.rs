use std::path::{Path, PathBuf};

use async_trait::async_trait;
use yougo_core::types::TermRecord;

use crate::error::LoadError;

/// Where the glossary comes from. Loaded exactly once per process; there is
/// no retry and no partial load.
#[async_trait]
pub trait GlossarySource: Send + Sync {
    async fn load(&self) -> Result<Vec<TermRecord>, LoadError>;

    /// Human-readable origin for logs and the load-failure message.
    fn describe(&self) -> String;
}

/// Parse a JSON array of term records.
pub fn parse_records(json: &str) -> Result<Vec<TermRecord>, LoadError> {
    let records: Vec<TermRecord> = serde_json::from_str(json)?;
    Ok(records)
}

/// Dataset compiled into the binary, used when no file or URL is configured.
pub struct EmbeddedSource;

#[async_trait]
impl GlossarySource for EmbeddedSource {
    async fn load(&self) -> Result<Vec<TermRecord>, LoadError> {
        tracing::info!("Loading embedded glossary...");
        parse_records(include_str!("../data/glossary.json"))
    }

    fn describe(&self) -> String {
        "embedded dataset".to_string()
    }
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GlossarySource for FileSource {
    async fn load(&self) -> Result<Vec<TermRecord>, LoadError> {
        tracing::info!("Loading glossary from file: {}", self.path.display());
        let json = tokio::fs::read_to_string(&self.path).await?;
        parse_records(&json)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl GlossarySource for HttpSource {
    async fn load(&self) -> Result<Vec<TermRecord>, LoadError> {
        tracing::info!("Fetching glossary from {}", self.url);
        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_records(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
