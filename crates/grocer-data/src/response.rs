//! HTTP response handling.

use crate::ServiceError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// A 200 response with a JSON body.
    pub fn ok_json(body: impl Into<Vec<u8>>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self::new(200, headers, body.into())
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, ServiceError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| ServiceError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ServiceError> {
        serde_json::from_slice(&self.body).map_err(|e| ServiceError::ParseError(e.to_string()))
    }

    /// Get a header value.
    pub fn header(&self, key: &str) -> Option<&str> {
        // Case-insensitive header lookup
        let key_lower = key.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == key_lower)
            .map(|(_, v)| v.as_str())
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, ServiceError> {
        if self.is_success() {
            return Ok(self);
        }
        let message = self.text().unwrap_or_else(|_| "Unknown error".to_string());
        Err(match self.status {
            401 | 403 => ServiceError::Unauthorized,
            404 => ServiceError::NotFound(message),
            status => ServiceError::HttpError { status, message },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(300, b"").is_success());
    }

    #[test]
    fn test_response_json() {
        let resp = Response::ok_json(br#"[1, 2, 3]"#.to_vec());
        let data: Vec<u8> = resp.json().unwrap();
        assert_eq!(data, vec![1, 2, 3]);
        assert!(make_response(200, b"not json").json::<Vec<u8>>().is_err());
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let resp = Response::ok_json(Vec::new());
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("X-Missing"), None);
    }

    #[test]
    fn test_error_for_status_mapping() {
        assert!(make_response(200, b"OK").error_for_status().is_ok());
        assert_eq!(
            make_response(401, b"").error_for_status().unwrap_err(),
            ServiceError::Unauthorized
        );
        assert_eq!(
            make_response(404, b"no such product").error_for_status().unwrap_err(),
            ServiceError::NotFound("no such product".to_string())
        );
        assert_eq!(
            make_response(500, b"boom").error_for_status().unwrap_err(),
            ServiceError::HttpError {
                status: 500,
                message: "boom".to_string()
            }
        );
    }
}
