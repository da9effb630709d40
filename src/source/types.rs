//! Wire types for the dataset endpoint and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::config::IdentityConfig;
use crate::graph::User;

/// Body posted to the dataset endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InitialRequest {
    pub name: String,
    pub reg_no: String,
    pub email: String,
}

impl From<&IdentityConfig> for InitialRequest {
    fn from(identity: &IdentityConfig) -> Self {
        Self {
            name: identity.name.clone(),
            reg_no: identity.reg_no.clone(),
            email: identity.email.clone(),
        }
    }
}

/// Raw response from the dataset endpoint.
///
/// Every field is optional at this stage; [`InitialResponse::into_assignment`]
/// decides which absences are fatal.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InitialResponse {
    pub webhook: Option<String>,
    pub access_token: Option<String>,
    pub data: Option<ResponseData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseData {
    pub users: Option<UserData>,
    pub find_id: Option<i64>,
    pub n: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserData {
    pub users: Option<Vec<User>>,
}

/// Validated fetch result.
#[derive(Clone)]
pub struct Assignment {
    pub webhook: Url,
    pub access_token: String,
    pub users: Vec<User>,
    pub find_id: Option<i64>,
    pub n: Option<i64>,
}

impl std::fmt::Debug for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assignment")
            .field("webhook", &self.webhook.as_str())
            .field("access_token", &"<redacted>")
            .field("users", &self.users.len())
            .field("find_id", &self.find_id)
            .field("n", &self.n)
            .finish()
    }
}

impl InitialResponse {
    /// Check required fields and produce an [`Assignment`].
    pub fn into_assignment(self) -> SourceResult<Assignment> {
        let webhook = self
            .webhook
            .filter(|w| !w.trim().is_empty())
            .ok_or(SourceError::MissingField("webhook"))?;
        let access_token = self
            .access_token
            .filter(|t| !t.trim().is_empty())
            .ok_or(SourceError::MissingField("accessToken"))?;

        let webhook = Url::parse(&webhook).map_err(|e| SourceError::InvalidWebhook {
            url: webhook.clone(),
            reason: e.to_string(),
        })?;

        let data = self.data.unwrap_or_default();
        let users = data
            .users
            .and_then(|u| u.users)
            .ok_or(SourceError::MissingField("data.users.users"))?;

        Ok(Assignment {
            webhook,
            access_token,
            users,
            find_id: data.find_id,
            n: data.n,
        })
    }
}

/// Errors from the dataset fetch. All of them are fatal.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to serialize request: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to execute request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("response is missing {0}")]
    MissingField(&'static str),

    #[error("webhook '{url}' is not a valid URL: {reason}")]
    InvalidWebhook { url: String, reason: String },
}

/// Result type for dataset operations.
pub type SourceResult<T> = Result<T, SourceError>;
