//! HTTP implementation of [`SearchBackend`] using reqwest.

use crate::client::backend::SearchBackend;
use crate::client::messages::{RawResponse, SearchOutcome, SearchRequest};
use crate::domain::error::{Result, SamLookupError};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Url};
use std::time::Duration;

/// Search backend that sends GET requests to a configured origin.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Builds a backend for `base_url`.
    ///
    /// A `timeout` of `None` leaves requests unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`SamLookupError::Config`] if `base_url` does not parse, or
    /// [`SamLookupError::Request`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SamLookupError::Config(format!("invalid base url {base_url:?}: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("samlookup/", env!("CARGO_PKG_VERSION"))),
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SamLookupError::Request(format!("failed to build http client: {e}")))?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn send(&self, request: &SearchRequest) -> std::result::Result<RawResponse, String> {
        let url = request.url(&self.base_url).map_err(|e| e.to_string())?;
        tracing::debug!(request_id = %request.id, url = %url, "sending search request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        let body = response.text().await.map_err(|e| e.to_string())?;

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

impl SearchBackend for HttpBackend {
    async fn fetch(&self, request: &SearchRequest) -> SearchOutcome {
        match self.send(request).await {
            Ok(raw) => {
                tracing::debug!(
                    request_id = %request.id,
                    status = raw.status,
                    bytes = raw.body.len(),
                    "search response received"
                );
                SearchOutcome::classify(&raw)
            }
            Err(detail) => {
                tracing::warn!(request_id = %request.id, error = %detail, "search request failed");
                SearchOutcome::transport(detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_base_url() {
        let err = HttpBackend::new("not a url", None).unwrap_err();
        assert!(matches!(err, SamLookupError::Config(_)));
    }

    #[test]
    fn keeps_base_url() {
        let backend =
            HttpBackend::new("http://localhost:5000", Some(Duration::from_secs(5))).unwrap();
        assert_eq!(backend.base_url().as_str(), "http://localhost:5000/");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_outcome() {
        use crate::client::RequestId;
        use crate::domain::SearchQuery;

        // Port 9 (discard) on loopback is closed on test machines.
        let backend = HttpBackend::new("http://127.0.0.1:9", Some(Duration::from_secs(2))).unwrap();
        let request = SearchRequest {
            id: RequestId(7),
            query: SearchQuery::sanitize("acme"),
            page: None,
        };
        let outcome = backend.fetch(&request).await;
        assert_eq!(outcome.kind(), "transport");
    }
}
