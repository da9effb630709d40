//! Dataset endpoint client.
//!
//! # Responsibilities
//! - Post the caller identity to the dataset endpoint
//! - Decode the response and check the required fields
//! - Fail fast: nothing here is retried

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::config::IdentityConfig;
use crate::http::{read_body_lossy, snippet};
use crate::source::types::{Assignment, InitialRequest, InitialResponse, SourceError, SourceResult};

/// Fetches the graph, webhook and token for one run.
#[derive(Debug, Clone)]
pub struct SourceClient {
    http: Client,
    url: String,
}

impl SourceClient {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Post `identity` and return the validated assignment.
    pub async fn fetch(&self, identity: &IdentityConfig) -> SourceResult<Assignment> {
        let body = serde_json::to_vec(&InitialRequest::from(identity)).map_err(SourceError::Serialize)?;

        tracing::info!(url = %self.url, "Requesting dataset");
        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = read_body_lossy(response).await;

        if !status.is_success() {
            tracing::error!(status = %status, body = %snippet(&text), "Dataset request rejected");
            return Err(SourceError::Status {
                status: status.as_u16(),
                body: snippet(&text).to_string(),
            });
        }

        let decoded: InitialResponse = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(body = %snippet(&text), "Dataset response is not valid JSON");
            SourceError::Decode(e)
        })?;
        let assignment = decoded.into_assignment()?;

        tracing::info!(
            status = %status,
            webhook = %assignment.webhook,
            users = assignment.users.len(),
            find_id = ?assignment.find_id,
            n = ?assignment.n,
            "Dataset received"
        );

        Ok(assignment)
    }
}
