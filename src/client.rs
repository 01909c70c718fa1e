use std::{fmt, sync::Arc};

use crate::{
    retry::Sleeper, ClientOptions, JsonMap, PeopleSearch, PersonEnrich, PersonLookup, Result,
    RocketReachError, Transport,
};

const API_KEY_ENV: &str = "ROCKETREACH_API_KEY";
const BASE_URL_ENV: &str = "ROCKETREACH_BASE_URL";

#[derive(Clone)]
/// Entry point for the RocketReach API.
///
/// Owns a single [`Transport`]; every endpoint builder borrows it.
pub struct RocketReachClient {
    api_key: String,
    options: ClientOptions,
    transport: Transport,
}

impl fmt::Debug for RocketReachClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RocketReachClient")
            .field("api_key", &redact(&self.api_key))
            .field("options", &self.options)
            .finish()
    }
}

impl RocketReachClient {
    /// Creates a client with default options.
    ///
    /// Fails with [`RocketReachError::InvalidCredentials`] when the key is
    /// empty or whitespace; no request is made in that case.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rocketreach_http::RocketReachClient;
    ///
    /// let client = RocketReachClient::new("my-api-key")?;
    /// # Ok::<(), rocketreach_http::RocketReachError>(())
    /// ```
    pub fn new(api_key: impl AsRef<str>) -> Result<Self> {
        Self::with_config(api_key, ClientOptions::default())
    }

    /// Creates a client with explicit options.
    pub fn with_config(api_key: impl AsRef<str>, options: ClientOptions) -> Result<Self> {
        let api_key = api_key.as_ref().trim();
        if api_key.is_empty() {
            return Err(RocketReachError::invalid_credentials(
                "API key cannot be empty",
            ));
        }

        Ok(Self {
            api_key: api_key.to_owned(),
            transport: Transport::new(api_key, &options),
            options,
        })
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `ROCKETREACH_API_KEY` — required
    /// - `ROCKETREACH_BASE_URL` — optional override of the API root
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            RocketReachError::invalid_credentials(format!(
                "missing {API_KEY_ENV} environment variable"
            ))
        })?;

        let mut options = ClientOptions::default();
        if let Some(base_url) = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
        {
            options.base_url = base_url.trim().to_owned();
        }
        Self::with_config(api_key, options)
    }

    /// Applies new options.
    ///
    /// A sleeper or HTTP client installed earlier stays in place.
    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.transport = self.transport.with_options(&options);
        self.options = options;
        self
    }

    /// Replaces how the transport waits between retries.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.transport = self.transport.with_sleeper(sleeper);
        self
    }

    /// Trimmed API key sent in the `Api-Key` header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// API root every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.options.base_url
    }

    /// Options the transport was configured with.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Underlying transport, for endpoints without a dedicated builder.
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Starts a new people search. Each call returns an independent builder.
    pub fn people_search(&self) -> PeopleSearch<'_> {
        PeopleSearch::new(&self.transport)
    }

    /// Starts a new single-person lookup.
    pub fn person_lookup(&self) -> PersonLookup<'_> {
        PersonLookup::new(&self.transport)
    }

    /// Starts a new person and company enrichment.
    pub fn person_enrich(&self) -> PersonEnrich<'_> {
        PersonEnrich::new(&self.transport)
    }

    /// Account details such as remaining credits.
    pub async fn account_info(&self) -> Result<JsonMap> {
        self.transport.get("/account", &JsonMap::new()).await
    }

    /// API availability as reported by `/health`.
    pub async fn health_status(&self) -> Result<JsonMap> {
        self.transport.get("/health", &JsonMap::new()).await
    }
}

fn redact(api_key: &str) -> String {
    let visible: String = api_key.chars().take(4).collect();
    format!("{visible}...<redacted>")
}

#[cfg(test)]
mod tests {
    use super::RocketReachClient;
    use crate::{ClientOptions, RocketReachError};

    #[test]
    fn empty_api_key_is_rejected() {
        for key in ["", "   "] {
            match RocketReachClient::new(key) {
                Err(RocketReachError::InvalidCredentials { message }) => {
                    assert_eq!(message, "API key cannot be empty");
                }
                other => panic!("expected credential error, got {other:?}"),
            }
        }
    }

    #[test]
    fn api_key_is_trimmed() {
        let client = RocketReachClient::new("  abc123  ").expect("valid key");
        assert_eq!(client.api_key(), "abc123");
    }

    #[test]
    fn options_apply_to_transport() {
        let options = ClientOptions {
            base_url: "http://localhost:9999/api".to_owned(),
            retry_attempts: 5,
            ..ClientOptions::default()
        };
        let client = RocketReachClient::new("abc123")
            .expect("valid key")
            .with_options(options);

        assert_eq!(client.base_url(), "http://localhost:9999/api");
        assert_eq!(client.transport().base_url(), "http://localhost:9999/api");
        assert_eq!(client.transport().policy().max_attempts, 5);
    }

    #[test]
    fn debug_redacts_api_key() {
        let client = RocketReachClient::new("secret-token-value").expect("valid key");
        let debug = format!("{client:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("secret-token-value"));
    }
}
