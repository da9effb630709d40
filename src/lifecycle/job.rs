//! One-shot job driver.
//!
//! Sequences the run: fetch the assignment, detect mutual pairs, deliver.
//! Any error ends the run; only delivery attempts are retried.

use thiserror::Error;

use crate::config::RelayConfig;
use crate::delivery::{DeliveryError, DeliveryReceipt, ResultPayload, WebhookClient};
use crate::graph::FollowGraph;
use crate::http::build_client;
use crate::source::{SourceClient, SourceError};

/// Errors that abort the job.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to get data: {0}")]
    Source(#[from] SourceError),

    #[error("failed to send result to webhook: {0}")]
    Delivery(#[from] DeliveryError),
}

/// Summary of a successful run.
#[derive(Debug, Clone)]
pub struct JobReport {
    pub users: usize,
    pub pairs: usize,
    pub receipt: DeliveryReceipt,
}

/// Run the whole job once against `config`.
///
/// `config` is expected to be validated already.
pub async fn run_job(config: &RelayConfig) -> Result<JobReport, JobError> {
    let http = build_client(config.request_timeout()).map_err(JobError::Client)?;

    let source = SourceClient::new(http.clone(), config.source.url.clone());
    let assignment = source.fetch(&config.identity).await?;
    tracing::info!(users = assignment.users.len(), "Received users in data");

    let graph = FollowGraph::from_users(&assignment.users);
    let pairs = graph.mutual_pairs();
    tracing::info!(pairs = pairs.len(), "Mutual followers identified");
    tracing::debug!(outcome = ?pairs, "Mutual pair set");

    let payload = ResultPayload::new(config.identity.reg_no.clone(), pairs);
    let webhook = WebhookClient::new(http, config.retry_policy());
    let receipt = webhook
        .deliver(&assignment.webhook, &assignment.access_token, &payload)
        .await?;

    Ok(JobReport {
        users: graph.len(),
        pairs: payload.outcome().len(),
        receipt,
    })
}
