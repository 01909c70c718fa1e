use std::{fmt, sync::Arc, time::Duration};

use reqwest::{header, Method, StatusCode};

use crate::{
    retry::{parse_retry_after, RetryPolicy, Sleeper, TokioSleeper},
    wire::{decode_object, error_message, join_url, plain_text, query_pairs},
    ClientOptions, JsonMap, Result, RocketReachError,
};

/// Header carrying the API credential.
pub const API_KEY_HEADER: &str = "Api-Key";

/// Message of the error raised once every attempt failed without a response.
pub const NETWORK_FAILURE_MESSAGE: &str = "Network request failed after all retries";

const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded";
const USER_AGENT: &str = concat!("rocketreach-http/", env!("CARGO_PKG_VERSION"));

/// Executes API calls with retry, backoff and error classification.
///
/// Holds only immutable configuration, so one instance can be cloned or
/// shared across tasks freely.
#[derive(Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
    policy: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("policy", &self.policy)
            .field("sleeper", &self.sleeper)
            .finish()
    }
}

enum Payload<'a> {
    Query(&'a JsonMap),
    Json(&'a JsonMap),
}

/// Result of a single HTTP exchange, before any retry decision.
#[derive(Debug)]
enum Attempt {
    Success(JsonMap),
    ClientError {
        status: StatusCode,
        body: JsonMap,
        text: Option<String>,
    },
    RateLimited {
        status: StatusCode,
        retry_after_secs: u64,
        body: JsonMap,
    },
    ServerError {
        status: StatusCode,
        body: JsonMap,
        text: Option<String>,
    },
    TransportFailure(reqwest::Error),
}

impl Transport {
    /// Creates a transport for `options.base_url` authenticating with `api_key`.
    pub fn new(api_key: impl Into<String>, options: &ClientOptions) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: options.base_url.clone(),
            api_key: api_key.into(),
            timeout: Duration::from_millis(options.timeout_ms),
            policy: RetryPolicy::from(options),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    /// Re-applies endpoint, timeout and retry settings.
    ///
    /// The HTTP client, credential and sleeper are kept.
    pub fn with_options(mut self, options: &ClientOptions) -> Self {
        self.base_url = options.base_url.clone();
        self.timeout = Duration::from_millis(options.timeout_ms);
        self.policy = RetryPolicy::from(options);
        self
    }

    /// Replaces the component that performs the waits between attempts.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Uses a preconfigured `reqwest` client (proxies, custom TLS, ...).
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// API root that request paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Attempt budget and backoff applied to every call.
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Issues a GET with `params` encoded into the query string.
    pub async fn get(&self, path: &str, params: &JsonMap) -> Result<JsonMap> {
        self.send_with_retry(Method::GET, path, Payload::Query(params))
            .await
    }

    /// Issues a POST with `body` encoded as JSON.
    pub async fn post(&self, path: &str, body: &JsonMap) -> Result<JsonMap> {
        self.send_with_retry(Method::POST, path, Payload::Json(body))
            .await
    }

    async fn send_with_retry(
        &self,
        method: Method,
        path: &str,
        payload: Payload<'_>,
    ) -> Result<JsonMap> {
        let url = join_url(&self.base_url, path);
        let mut attempt = 1u32;
        loop {
            match self.execute_once(method.clone(), &url, &payload).await {
                Attempt::Success(body) => return Ok(body),
                Attempt::ClientError { status, body, text } => {
                    return Err(api_error(status, body, text));
                }
                Attempt::RateLimited {
                    status,
                    retry_after_secs,
                    body,
                } => {
                    if self.policy.has_attempts_left(attempt) {
                        self.wait(attempt, Duration::from_secs(retry_after_secs), "rate limited")
                            .await;
                        attempt += 1;
                        continue;
                    }

                    #[cfg(feature = "tracing")]
                    tracing::warn!(%url, attempt, "rate limit persisted through all attempts");

                    return Err(RocketReachError::RateLimited {
                        message: RATE_LIMIT_MESSAGE.to_owned(),
                        status: status.as_u16(),
                        retry_after_secs,
                        body,
                    });
                }
                Attempt::ServerError { status, body, text } => {
                    if self.policy.has_attempts_left(attempt) {
                        self.wait(attempt, self.policy.backoff(attempt), "server error")
                            .await;
                        attempt += 1;
                        continue;
                    }

                    #[cfg(feature = "tracing")]
                    tracing::warn!(%url, attempt, %status, "server error persisted through all attempts");

                    return Err(api_error(status, body, text));
                }
                Attempt::TransportFailure(err) => {
                    if err.is_builder() {
                        return Err(RocketReachError::Network {
                            message: format!("invalid request: {err}"),
                            source: err,
                        });
                    }
                    if self.policy.has_attempts_left(attempt) {
                        self.wait(attempt, self.policy.backoff(attempt), "network failure")
                            .await;
                        attempt += 1;
                        continue;
                    }

                    #[cfg(feature = "tracing")]
                    tracing::warn!(%url, attempt, error = %err, "network failure persisted through all attempts");

                    return Err(RocketReachError::Network {
                        message: NETWORK_FAILURE_MESSAGE.to_owned(),
                        source: err,
                    });
                }
            }
        }
    }

    async fn execute_once(&self, method: Method, url: &str, payload: &Payload<'_>) -> Attempt {
        let request = self
            .http
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .timeout(self.timeout);
        let request = match payload {
            Payload::Query(params) => request.query(&query_pairs(params)),
            Payload::Json(body) => request.json(body),
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return Attempt::TransportFailure(err),
        };

        let status = response.status();
        let retry_after = response
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        // The body is read and decoded exactly once per attempt.
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return Attempt::TransportFailure(err),
        };

        classify(status, retry_after.as_deref(), &body)
    }

    /// Waits before the next attempt.
    ///
    /// `attempt` is the 1-based attempt that just failed.
    async fn wait(&self, attempt: u32, delay: Duration, reason: &str) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            attempt,
            max_attempts = self.policy.max_attempts,
            delay_ms = delay.as_millis() as u64,
            reason,
            "retrying request"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = (attempt, reason);

        self.sleeper.sleep(delay).await;
    }
}

fn classify(status: StatusCode, retry_after: Option<&str>, raw: &str) -> Attempt {
    let body = decode_object(raw);
    if status.as_u16() < 400 {
        return Attempt::Success(body);
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Attempt::RateLimited {
            status,
            retry_after_secs: parse_retry_after(retry_after),
            body,
        };
    }
    let text = plain_text(raw);
    if status.is_client_error() {
        return Attempt::ClientError { status, body, text };
    }
    Attempt::ServerError { status, body, text }
}

/// `text` is the raw body when it was not JSON, e.g. a proxy's HTML page.
fn api_error(status: StatusCode, body: JsonMap, text: Option<String>) -> RocketReachError {
    let message = error_message(&body, || {
        text.unwrap_or_else(|| format!("request failed with status {status}"))
    });
    RocketReachError::Api {
        message,
        status: status.as_u16(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde_json::json;

    use super::{api_error, classify, Attempt, Transport};
    use crate::{ClientOptions, JsonMap, RocketReachError};

    #[test]
    fn success_with_json_body_is_decoded() {
        match classify(StatusCode::OK, None, r#"{"id": 1}"#) {
            Attempt::Success(body) => assert_eq!(body.get("id"), Some(&json!(1))),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn success_with_malformed_body_is_empty() {
        match classify(StatusCode::CREATED, None, "<html>") {
            Attempt::Success(body) => assert!(body.is_empty()),
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn client_errors_are_not_rate_limits() {
        for code in [400, 401, 403, 404, 422] {
            let status = StatusCode::from_u16(code).expect("valid status");
            assert!(matches!(
                classify(status, None, "{}"),
                Attempt::ClientError { .. }
            ));
        }
    }

    #[test]
    fn too_many_requests_reads_retry_after() {
        match classify(StatusCode::TOO_MANY_REQUESTS, Some("7"), "") {
            Attempt::RateLimited {
                retry_after_secs, ..
            } => assert_eq!(retry_after_secs, 7),
            other => panic!("expected rate limit, got {other:?}"),
        }
        match classify(StatusCode::TOO_MANY_REQUESTS, None, "") {
            Attempt::RateLimited {
                retry_after_secs, ..
            } => assert_eq!(retry_after_secs, 60),
            other => panic!("expected rate limit, got {other:?}"),
        }
    }

    #[test]
    fn five_hundreds_are_server_errors() {
        assert!(matches!(
            classify(StatusCode::BAD_GATEWAY, None, ""),
            Attempt::ServerError { .. }
        ));
    }

    #[test]
    fn api_error_falls_back_to_status_text() {
        match api_error(StatusCode::INTERNAL_SERVER_ERROR, JsonMap::new(), None) {
            RocketReachError::Api {
                message, status, ..
            } => {
                assert_eq!(status, 500);
                assert_eq!(
                    message,
                    "request failed with status 500 Internal Server Error"
                );
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn non_json_error_body_becomes_message() {
        let attempt = classify(StatusCode::BAD_GATEWAY, None, "<h1>Bad Gateway</h1>\n");
        match attempt {
            Attempt::ServerError { status, body, text } => {
                assert!(body.is_empty());
                match api_error(status, body, text) {
                    RocketReachError::Api { message, .. } => {
                        assert_eq!(message, "<h1>Bad Gateway</h1>");
                    }
                    other => panic!("expected api error, got {other:?}"),
                }
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn json_error_body_without_message_uses_status_text() {
        match classify(StatusCode::NOT_FOUND, None, r#"{"detail": "gone"}"#) {
            Attempt::ClientError { status, body, text } => {
                assert_eq!(text, None);
                assert_eq!(
                    api_error(status, body, text).message(),
                    "request failed with status 404 Not Found"
                );
            }
            other => panic!("expected client error, got {other:?}"),
        }
    }

    #[test]
    fn with_options_keeps_credentials_and_swaps_policy() {
        let transport = Transport::new("secret-key", &ClientOptions::default()).with_options(
            &ClientOptions {
                base_url: "http://localhost:1/api".to_owned(),
                timeout_ms: 250,
                retry_attempts: 7,
                retry_delay_ms: 5,
            },
        );
        assert_eq!(transport.base_url(), "http://localhost:1/api");
        assert_eq!(transport.timeout(), std::time::Duration::from_millis(250));
        assert_eq!(transport.policy().max_attempts, 7);
        assert_eq!(transport.api_key, "secret-key");
    }

    #[test]
    fn debug_redacts_api_key() {
        let transport = Transport::new("secret-key", &ClientOptions::default());
        let debug = format!("{transport:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret-key"));
    }
}
