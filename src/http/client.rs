//! Shared outbound HTTP client.

use std::time::Duration;

use reqwest::Client;

/// User agent sent on every outbound request.
pub const USER_AGENT: &str = concat!("mutual-relay/", env!("CARGO_PKG_VERSION"));

/// Build the single client used for both the fetch and the delivery calls.
///
/// `request_timeout` bounds each request individually, so a retry sequence
/// can take up to `max_attempts * request_timeout` plus backoff.
pub fn build_client(request_timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(request_timeout)
        .user_agent(USER_AGENT)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client() {
        assert!(build_client(Duration::from_secs(30)).is_ok());
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("mutual-relay/"));
    }
}
