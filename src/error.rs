use crate::JsonMap;

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum RocketReachError {
    /// Non-retryable client error, or a server error that outlived every retry.
    #[error("api error {status}: {message}")]
    Api {
        /// Upstream `message` field, or a description of the failed status.
        message: String,
        status: u16,
        /// Decoded error body; empty when the body was not a JSON object.
        body: JsonMap,
    },
    /// HTTP 429 returned on the final attempt.
    #[error("{message} (status {status}, retry after {retry_after_secs}s)")]
    RateLimited {
        message: String,
        status: u16,
        /// Wait time announced by the server via `Retry-After`.
        retry_after_secs: u64,
        body: JsonMap,
    },
    /// No response was received from the API.
    #[error("{message}: {source}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// Rejected before any request was made.
    #[error("invalid credentials: {message}")]
    InvalidCredentials { message: String },
}

impl RocketReachError {
    pub(crate) fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            message: message.into(),
        }
    }

    /// Human-readable message without status decoration.
    pub fn message(&self) -> &str {
        match self {
            Self::Api { message, .. }
            | Self::RateLimited { message, .. }
            | Self::Network { message, .. }
            | Self::InvalidCredentials { message } => message,
        }
    }

    /// HTTP status associated with the error.
    ///
    /// Credential errors report `401` even though they never reach the network.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::RateLimited { status, .. } => Some(*status),
            Self::InvalidCredentials { .. } => Some(401),
            Self::Network { .. } => None,
        }
    }

    /// Decoded error response body, if the error came from a response.
    pub fn body(&self) -> Option<&JsonMap> {
        match self {
            Self::Api { body, .. } | Self::RateLimited { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Seconds the server asked to wait before retrying.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimited {
                retry_after_secs, ..
            } => Some(*retry_after_secs),
            _ => None,
        }
    }

    /// Status in the 4xx range, credential errors included.
    pub fn is_client_error(&self) -> bool {
        self.status()
            .is_some_and(|status| (400..500).contains(&status))
    }

    /// Status in the 5xx range.
    pub fn is_server_error(&self) -> bool {
        self.status()
            .is_some_and(|status| (500..600).contains(&status))
    }

    /// Whether issuing the same request later could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimited { .. } | Self::Network { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            Self::InvalidCredentials { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::RocketReachError;
    use crate::JsonMap;

    fn body(value: serde_json::Value) -> JsonMap {
        match value {
            serde_json::Value::Object(map) => map,
            _ => JsonMap::new(),
        }
    }

    #[test]
    fn credential_error_reports_unauthorized() {
        let err = RocketReachError::invalid_credentials("API key cannot be empty");
        assert_eq!(err.status(), Some(401));
        assert!(err.is_client_error());
        assert!(!err.is_retryable());
        assert_eq!(err.message(), "API key cannot be empty");
    }

    #[test]
    fn rate_limited_exposes_retry_after_and_body() {
        let err = RocketReachError::RateLimited {
            message: "Rate limit exceeded".to_owned(),
            status: 429,
            retry_after_secs: 30,
            body: body(json!({"message": "slow down"})),
        };
        assert_eq!(err.retry_after(), Some(30));
        assert_eq!(
            err.body().and_then(|b| b.get("message")),
            Some(&json!("slow down"))
        );
        assert!(err.is_retryable());
        assert!(err.to_string().contains("retry after 30s"));
    }

    #[test]
    fn api_error_classifies_by_status() {
        let client = RocketReachError::Api {
            message: "Not found".to_owned(),
            status: 404,
            body: JsonMap::new(),
        };
        let server = RocketReachError::Api {
            message: "boom".to_owned(),
            status: 503,
            body: JsonMap::new(),
        };
        assert!(client.is_client_error());
        assert!(!client.is_server_error());
        assert!(!client.is_retryable());
        assert!(server.is_server_error());
        assert!(server.is_retryable());
        assert_eq!(client.retry_after(), None);
        assert_eq!(client.to_string(), "api error 404: Not found");
    }
}
