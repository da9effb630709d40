//! Webhook delivery with bounded retries.
//!
//! # Responsibilities
//! - Serialize the payload once; a broken payload is fatal
//! - Post it with the raw access token in `Authorization`
//! - Retry transport errors and non-2xx answers with linear backoff
//! - Capture the response body for the receipt or the failure record

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use url::Url;

use crate::delivery::payload::ResultPayload;
use crate::delivery::types::{AttemptFailure, DeliveryError, DeliveryReceipt, DeliveryResult};
use crate::http::{read_body_lossy, snippet};
use crate::resilience::{DeliveryState, Pause, RetryPolicy, TokioPause, Transition};

/// Posts results to a webhook.
#[derive(Debug, Clone)]
pub struct WebhookClient<P = TokioPause> {
    http: Client,
    policy: RetryPolicy,
    pause: P,
}

impl WebhookClient<TokioPause> {
    pub fn new(http: Client, policy: RetryPolicy) -> Self {
        Self {
            http,
            policy,
            pause: TokioPause,
        }
    }
}

impl<P: Pause> WebhookClient<P> {
    /// Replace the backoff sleeper.
    pub fn with_pause<Q: Pause>(self, pause: Q) -> WebhookClient<Q> {
        WebhookClient {
            http: self.http,
            policy: self.policy,
            pause,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Deliver `payload` to `endpoint`, retrying per the policy.
    ///
    /// Returns on the first 2xx. After the last failed attempt the error
    /// carries the attempt count and the final failure.
    pub async fn deliver(
        &self,
        endpoint: &Url,
        token: &str,
        payload: &ResultPayload,
    ) -> DeliveryResult<DeliveryReceipt> {
        let body = serde_json::to_vec(payload).map_err(DeliveryError::Serialize)?;
        let mut auth = HeaderValue::from_str(token).map_err(|_| DeliveryError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut state = DeliveryState::start();
        loop {
            let attempt = state.attempt();
            tracing::info!(
                attempt,
                max_attempts = self.policy.max_attempts,
                url = %endpoint,
                pairs = payload.outcome().len(),
                "Delivering result"
            );

            let failure = match self.send_once(endpoint, &auth, &body, attempt).await {
                Ok((status, response_body)) => {
                    let attempts = state.on_success().attempt();
                    tracing::info!(
                        attempt = attempts,
                        status,
                        response = %snippet(&response_body),
                        "Result delivered"
                    );
                    return Ok(DeliveryReceipt {
                        attempts,
                        status,
                        body: response_body,
                    });
                }
                Err(failure) => failure,
            };

            tracing::warn!(attempt, error = %failure, "Delivery attempt failed");

            match state.on_failure(&self.policy, failure) {
                Transition::Retry { delay, next } => {
                    tracing::info!(attempt, delay = ?delay, "Backing off before retry");
                    self.pause.pause(delay).await;
                    state = next;
                }
                Transition::Failed { attempts, last } => {
                    tracing::error!(attempts, error = %last, "Delivery attempts exhausted");
                    return Err(DeliveryError::Exhausted { attempts, last });
                }
            }
        }
    }

    async fn send_once(
        &self,
        endpoint: &Url,
        auth: &HeaderValue,
        body: &[u8],
        attempt: u32,
    ) -> Result<(u16, String), AttemptFailure> {
        let response = self
            .http
            .post(endpoint.clone())
            .header(AUTHORIZATION, auth.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_vec())
            .send()
            .await
            .map_err(|e| AttemptFailure::Transport {
                attempt,
                message: e.to_string(),
            })?;

        let status = response.status();
        let response_body = read_body_lossy(response).await;

        if status.is_success() {
            Ok((status.as_u16(), response_body))
        } else {
            Err(AttemptFailure::Status {
                attempt,
                status: status.as_u16(),
                body: snippet(&response_body).to_string(),
            })
        }
    }
}
