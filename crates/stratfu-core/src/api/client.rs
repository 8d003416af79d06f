//! Client for obtaining the dungeon document.
//!
//! The document is small and immutable per version, so the client is a
//! single GET (or file read) with no retry machinery.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use super::DocumentError;
use crate::models::DungeonDocument;

/// HTTP request timeout in seconds.
/// The document is a few hundred kilobytes at most; anything slower than
/// this indicates a dead connection.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Path of the document relative to the site base URL.
const DOCUMENT_PATH: &str = "data/dungeons.json";

/// Where the document comes from, depending on build target.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// Fetch `<base>/data/dungeons.json` over HTTP.
    Remote(String),
    /// Read a bundled JSON file from disk.
    Bundled(PathBuf),
}

/// Document client.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct DocumentClient {
    client: Client,
    source: DocumentSource,
}

impl DocumentClient {
    pub fn new(source: DocumentSource) -> Result<Self, DocumentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client, source })
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    /// Obtain and parse the document from the configured source.
    pub async fn fetch_document(&self) -> Result<DungeonDocument, DocumentError> {
        match &self.source {
            DocumentSource::Remote(base) => self.fetch_remote(base).await,
            DocumentSource::Bundled(path) => Self::read_bundled(path).await,
        }
    }

    async fn fetch_remote(&self, base: &str) -> Result<DungeonDocument, DocumentError> {
        let url = format!("{}/{}", base.trim_end_matches('/'), DOCUMENT_PATH);
        debug!(%url, "Fetching dungeon document");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DocumentError::from_status(status, &body));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn read_bundled(path: &Path) -> Result<DungeonDocument, DocumentError> {
        debug!(path = %path.display(), "Reading bundled dungeon document");
        let contents = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LevelRangeGroup;

    #[tokio::test]
    async fn test_bundled_source_reads_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dungeons.json");
        let document = vec![LevelRangeGroup::from_sheet_name("1 - 7")];
        std::fs::write(&path, serde_json::to_string(&document).unwrap()).unwrap();

        let client = DocumentClient::new(DocumentSource::Bundled(path)).unwrap();
        let loaded = client.fetch_document().await.unwrap();
        assert_eq!(loaded, document);
    }

    #[tokio::test]
    async fn test_bundled_source_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let client =
            DocumentClient::new(DocumentSource::Bundled(dir.path().join("missing.json"))).unwrap();
        let err = client.fetch_document().await.unwrap_err();
        assert!(matches!(err, DocumentError::Io(_)));
    }

    #[tokio::test]
    async fn test_bundled_source_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dungeons.json");
        std::fs::write(&path, "{ not json").unwrap();

        let client = DocumentClient::new(DocumentSource::Bundled(path)).unwrap();
        let err = client.fetch_document().await.unwrap_err();
        assert!(matches!(err, DocumentError::Malformed(_)));
    }
}
