//! Docs API client
//!
//! Fetches the Markdown architecture document and the generated JSON
//! metadata. One attempt per call, transport-default timeouts, no retries.

use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

use crate::error::{DocsError, DocsResult, FetchError};
use crate::models::{ArchitectureDoc, GeneratedDoc};

/// Markdown architecture document
pub const ARCHITECTURE_PATH: &str = "/api/docs/architecture";

/// JSON metadata generated from the server's source tree
pub const GENERATE_PATH: &str = "/api/docs/generate";

pub struct DocsClient {
    base_url: String,
    client: Client,
}

impl DocsClient {
    /// `base_url` is scheme + authority, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the architecture Markdown verbatim.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch_architecture_doc(&self) -> DocsResult<ArchitectureDoc> {
        let url = self.url(ARCHITECTURE_PATH);
        let text = self.get_text(&url).await?;
        let doc = ArchitectureDoc::new(text);

        info!(
            bytes = doc.size_bytes(),
            lines = doc.line_count(),
            "Fetched architecture document"
        );

        Ok(doc)
    }

    /// Fetch and decode the generated documentation metadata.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch_generated_doc(&self) -> DocsResult<GeneratedDoc> {
        let url = self.url(GENERATE_PATH);
        let text = self.get_text(&url).await?;

        let generated: GeneratedDoc =
            serde_json::from_str(&text).map_err(|source| DocsError::Parse {
                url: url.clone(),
                source,
            })?;

        info!(
            endpoints = generated.endpoints.len(),
            utilities = generated.utilities.len(),
            interfaces = generated.types.interfaces.len(),
            "Fetched generated documentation"
        );

        Ok(generated)
    }

    async fn get_text(&self, url: &str) -> DocsResult<String> {
        debug!(url = url, "GET");

        let fetch_err = |source: FetchError| DocsError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_err(e.into()))?;

        let response = ensure_success(response).map_err(fetch_err)?;

        response.text().await.map_err(|e| fetch_err(e.into()))
    }
}

fn ensure_success(response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    warn!(status = %status, url = %response.url(), "Docs API returned non-success status");

    Err(FetchError::Status { status })
}
