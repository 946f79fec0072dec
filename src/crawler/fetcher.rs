//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the configured user agent and timeout
//! - GET requests for page content
//! - Error classification
//!
//! Each URL gets exactly one attempt. Redirects follow reqwest's default
//! policy.

use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - Value of the `User-Agent` header sent with every request
/// * `timeout_secs` - Whole-request timeout in seconds
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use doc_mirror::config::default_user_agent;
/// use doc_mirror::crawler::build_http_client;
///
/// let client = build_http_client(&default_user_agent(), 30).unwrap();
/// ```
pub fn build_http_client(user_agent: &str, timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body as text
///
/// # Errors
///
/// | Condition | Error |
/// |-----------|-------|
/// | Request timed out | `FetchError::Timeout` |
/// | Connection refused / DNS / TLS | `FetchError::Connect` |
/// | Any other transport failure | `FetchError::Request` |
/// | Non-2xx status | `FetchError::Status` |
/// | Body could not be read or decoded | `FetchError::Body` |
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Body {
                url: url.to_string(),
                source,
            }
        }
    })
}

fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();
    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_connect() {
        FetchError::Connect { url, source: error }
    } else {
        FetchError::Request { url, source: error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_http_client() {
        let client = build_http_client("Mozilla/5.0 (test)", 5);
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_success_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/docs/index.html"))
            .and(header("user-agent", "Mozilla/5.0 (test)"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hi</p>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = build_http_client("Mozilla/5.0 (test)", 5).unwrap();
        let body = fetch_page(&client, &format!("{}/docs/index.html", server.uri()))
            .await
            .unwrap();

        assert_eq!(body, "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client("Mozilla/5.0 (test)", 5).unwrap();
        let url = format!("{}/missing.html", server.uri());
        let err = fetch_page(&client, &url).await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 404, .. }));
        assert_eq!(err.url(), url);
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = build_http_client("Mozilla/5.0 (test)", 1).unwrap();
        let err = fetch_page(&client, &format!("{}/slow.html", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let client = build_http_client("Mozilla/5.0 (test)", 2).unwrap();
        let err = fetch_page(&client, "http://127.0.0.1:9/index.html")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            FetchError::Connect { .. } | FetchError::Request { .. }
        ));
    }
}
