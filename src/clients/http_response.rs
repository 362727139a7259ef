//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type and the parsed Resource
//! Manager error envelope.

use std::collections::HashMap;

use serde::Deserialize;

/// The `error` object of a Resource Manager error response.
///
/// ```json
/// {"error": {"code": "ResourceNotFound", "message": "The Resource ... was not found."}}
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ArmErrorDetail {
    /// Machine-readable error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable error message.
    #[serde(default)]
    pub message: Option<String>,
}

/// An HTTP response from Resource Manager.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Retry-After` header.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `x-ms-request-id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-ms-request-id")
    }

    /// Returns the `x-ms-correlation-request-id` header value, if present.
    #[must_use]
    pub fn correlation_id(&self) -> Option<&str> {
        self.header("x-ms-correlation-request-id")
    }

    /// Returns the parsed error envelope, if the body carries one.
    #[must_use]
    pub fn arm_error(&self) -> Option<ArmErrorDetail> {
        self.body
            .get("error")
            .and_then(|error| serde_json::from_value(error.clone()).ok())
    }

    /// Renders the error body the way the Azure SDKs print it.
    ///
    /// The raw body is used when it has no error envelope.
    #[must_use]
    pub fn serialized_error(&self) -> String {
        let mut message = format!("Status={}", self.code);

        match self.arm_error() {
            Some(detail) => {
                if let Some(code) = detail.code {
                    message.push_str(&format!(" Code={code:?}"));
                }
                if let Some(text) = detail.message {
                    message.push_str(&format!(" Message={text:?}"));
                }
            }
            None => {
                if let Some(raw) = self.body.get("raw_body").and_then(|v| v.as_str()) {
                    message.push_str(&format!(" Body={raw:?}"));
                }
            }
        }

        message
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
