/// Default API root used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.rocketreach.co/api/v2";

/// Configures endpoint, timeout and retry behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// API root that request paths are appended to.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Total attempts per logical request, including the first one.
    pub retry_attempts: u32,
    /// Base backoff in milliseconds, doubled after every failed attempt.
    pub retry_delay_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_ms: 30_000,
            retry_attempts: 3,
            retry_delay_ms: 1_000,
        }
    }
}
