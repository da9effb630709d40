//! Response body capture for logging and error reports.

use reqwest::Response;

/// Maximum number of characters of a body kept in log lines.
pub const SNIPPET_CHARS: usize = 512;

/// Read the whole body as text.
///
/// A read failure is logged and yields an empty body, so it never hides the
/// status the caller is about to report.
pub async fn read_body_lossy(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(status = %status, error = %e, "Failed to read response body");
            String::new()
        }
    }
}

/// Truncate `body` to at most `SNIPPET_CHARS` characters for logging.
pub fn snippet(body: &str) -> &str {
    match body.char_indices().nth(SNIPPET_CHARS) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
