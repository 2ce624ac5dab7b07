//! HTTP transport seam for the MusicBrainz client.
//!
//! The client builds fully-formed requests (URL and headers) and hands
//! them to a [`Transport`]. Production uses [`ReqwestTransport`]; tests
//! substitute a recording mock so requests can be inspected without a
//! network.

use async_trait::async_trait;

use crate::catalog::error::MetadataError;

/// A GET request as the client wants it sent
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header value (case-insensitive name)
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Look up a query parameter's raw (still encoded) value
    pub fn query_param(&self, name: &str) -> Option<&str> {
        let (_, query) = self.url.split_once('?')?;
        query.split('&').find_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k == name).then_some(v)
        })
    }
}

/// Raw response: status code and body bytes
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes requests. Implement this to mock the network in tests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a GET request.
    ///
    /// Only transport-level failures are errors here; non-2xx statuses
    /// come back as an [`ApiResponse`].
    async fn get(&self, request: ApiRequest) -> Result<ApiResponse, MetadataError>;
}

/// Transport backed by `reqwest`
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client that accepts gzip-compressed responses
    pub fn new() -> Result<Self, MetadataError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .build()
            .map_err(|e| MetadataError::Client(e.to_string()))?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, request: ApiRequest) -> Result<ApiResponse, MetadataError> {
        let mut builder = self.http_client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| MetadataError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| MetadataError::Network(e.to_string()))?;

        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = ApiRequest::new("https://example.com/ws/2/artist?fmt=json&limit=5")
            .header("User-Agent", "Test/1.0 ( me )")
            .header("Accept", "application/json");

        assert_eq!(request.header_value("user-agent"), Some("Test/1.0 ( me )"));
        assert_eq!(request.query_param("fmt"), Some("json"));
        assert_eq!(request.query_param("limit"), Some("5"));
        assert_eq!(request.query_param("offset"), None);
    }

    #[test]
    fn test_response_success_range() {
        let ok = ApiResponse { status: 204, body: vec![] };
        let not_found = ApiResponse { status: 404, body: vec![] };
        assert!(ok.is_success());
        assert!(!not_found.is_success());
    }

    #[test]
    fn test_reqwest_transport_builds() {
        assert!(ReqwestTransport::new().is_ok());
    }
}
