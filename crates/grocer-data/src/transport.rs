//! The seam between the service adapter and the network.

use crate::{Request, Response, ServiceError};
use async_trait::async_trait;

/// Sends a fully built request and returns the raw response.
///
/// Non-2xx responses are returned as responses, not errors; status mapping
/// is the caller's job.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<Response, ServiceError>;
}

#[cfg(feature = "http-client")]
pub use reqwest_transport::ReqwestTransport;

#[cfg(feature = "http-client")]
mod reqwest_transport {
    use super::*;
    use crate::Method;
    use std::collections::HashMap;
    use std::time::Duration;

    /// Transport backed by a pooled `reqwest` client.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        /// Create a transport whose requests give up after `timeout`.
        pub fn new(timeout: Duration) -> Result<Self, ServiceError> {
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| ServiceError::RequestError(e.to_string()))?;
            Ok(Self { client })
        }
    }

    #[async_trait]
    impl Transport for ReqwestTransport {
        async fn send(&self, request: Request) -> Result<Response, ServiceError> {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Patch => reqwest::Method::PATCH,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.client.request(method, &request.url);
            for (key, value) in &request.headers {
                builder = builder.header(key.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await.map_err(|e| {
                if e.is_timeout() {
                    ServiceError::Timeout
                } else if e.is_builder() {
                    ServiceError::InvalidUrl(request.url.clone())
                } else {
                    ServiceError::RequestError(e.to_string())
                }
            })?;

            let status = response.status().as_u16();
            let headers: HashMap<String, String> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
                .collect();
            let body = response
                .bytes()
                .await
                .map_err(|e| ServiceError::RequestError(e.to_string()))?
                .to_vec();

            Ok(Response::new(status, headers, body))
        }
    }
}
