//! Lender directory sources.
//!
//! A lender directory returns a static list of `{name, url}` records. It can
//! be served over HTTP ([`HttpLenderDirectory`]) or read from a local JSON
//! file ([`FileLenderDirectory`]). [`LenderSource`] is the configured choice
//! between them.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Lender, LenderQuery};

/// An asynchronous source of affiliated lenders.
pub trait LenderDirectory: Send + Sync + 'static {
    /// Fetches the lenders relevant to `query`.
    fn fetch(&self, query: &LenderQuery) -> impl Future<Output = EngineResult<Vec<Lender>>> + Send;
}

/// Fetches the lender list with an HTTP GET.
///
/// The query is appended as `amount`, `apr`, `years` and `zipcode`
/// parameters. A static file server ignores them.
#[derive(Debug, Clone)]
pub struct HttpLenderDirectory {
    client: reqwest::Client,
    url: String,
}

impl HttpLenderDirectory {
    /// Creates a directory for `url` whose requests give up after `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> EngineResult<Self> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EngineError::LenderLookupFailed {
                location: url.clone(),
                message: format!("failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client, url })
    }

    /// Creates a directory for `url` using an existing client.
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Returns the URL the lenders are fetched from.
    pub fn url(&self) -> &str {
        &self.url
    }

    fn failure(&self, message: String) -> EngineError {
        EngineError::LenderLookupFailed {
            location: self.url.clone(),
            message,
        }
    }
}

impl LenderDirectory for HttpLenderDirectory {
    async fn fetch(&self, query: &LenderQuery) -> EngineResult<Vec<Lender>> {
        let response = self
            .client
            .get(&self.url)
            .query(&query.as_params())
            .send()
            .await
            .map_err(|e| self.failure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.failure(format!("unexpected status {}", status)));
        }

        let lenders: Vec<Lender> = response
            .json()
            .await
            .map_err(|e| self.failure(format!("invalid lender list: {}", e)))?;

        debug!(url = %self.url, count = lenders.len(), "Fetched lenders");
        Ok(lenders)
    }
}

/// Reads the lender list from a local JSON file.
#[derive(Debug, Clone)]
pub struct FileLenderDirectory {
    path: PathBuf,
}

impl FileLenderDirectory {
    /// Creates a directory backed by the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn failure(&self, message: String) -> EngineError {
        EngineError::LenderLookupFailed {
            location: self.path.display().to_string(),
            message,
        }
    }
}

impl LenderDirectory for FileLenderDirectory {
    async fn fetch(&self, _query: &LenderQuery) -> EngineResult<Vec<Lender>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.failure(e.to_string()))?;

        let lenders: Vec<Lender> = serde_json::from_str(&content)
            .map_err(|e| self.failure(format!("invalid lender list: {}", e)))?;

        debug!(path = %self.path.display(), count = lenders.len(), "Read lenders");
        Ok(lenders)
    }
}

/// The configured lender directory.
#[derive(Debug, Clone)]
pub enum LenderSource {
    /// Lenders fetched over HTTP.
    Http(HttpLenderDirectory),
    /// Lenders read from a local file.
    File(FileLenderDirectory),
    /// No directory; no lender list is ever shown.
    Disabled,
}

impl LenderSource {
    /// Returns false for [`LenderSource::Disabled`].
    pub fn is_enabled(&self) -> bool {
        !matches!(self, LenderSource::Disabled)
    }

    /// Returns a short description of where lenders come from.
    pub fn location(&self) -> String {
        match self {
            LenderSource::Http(dir) => dir.url().to_string(),
            LenderSource::File(dir) => dir.path.display().to_string(),
            LenderSource::Disabled => "disabled".to_string(),
        }
    }
}

impl LenderDirectory for LenderSource {
    async fn fetch(&self, query: &LenderQuery) -> EngineResult<Vec<Lender>> {
        match self {
            LenderSource::Http(dir) => dir.fetch(query).await,
            LenderSource::File(dir) => dir.fetch(query).await,
            LenderSource::Disabled => Ok(Vec::new()),
        }
    }
}
