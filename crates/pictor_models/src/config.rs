//! Configuration for the model API connection.

use derive_builder::Builder;
use derive_getters::Getters;
use pictor_error::ConfigError;
use std::time::Duration;

/// Endpoint used when `OPENAI_BASE_URL` is unset or empty.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Model used when `OPENAI_MODEL` is unset or empty.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Process-wide model API settings.
///
/// Read once at startup and shared read-only by every invocation.
///
/// # Examples
///
/// ```
/// use pictor_models::{DescriberConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
///
/// let config = DescriberConfig::builder()
///     .api_key("sk-test")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url(), DEFAULT_BASE_URL);
/// assert_eq!(config.model(), DEFAULT_MODEL);
/// assert!(config.timeout().is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Builder, Getters)]
#[builder(setter(into))]
pub struct DescriberConfig {
    /// Bearer credential for the model API
    api_key: String,
    /// Base URL, e.g. "https://api.openai.com/v1"
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Model identifier used for every request
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Optional bound on a whole API round trip; `None` waits indefinitely
    #[builder(default, setter(into, strip_option))]
    timeout: Option<Duration>,
}

impl DescriberConfig {
    /// Creates a new builder for `DescriberConfig`.
    pub fn builder() -> DescriberConfigBuilder {
        DescriberConfigBuilder::default()
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `OPENAI_API_KEY` (required)
    /// - `OPENAI_BASE_URL` (default: "https://api.openai.com/v1")
    /// - `OPENAI_MODEL` (default: "gpt-4o-mini")
    /// - `OPENAI_TIMEOUT_SECS` (optional, no timeout when unset)
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the timeout is not a
    /// whole number of seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    ///
    /// Empty values count as unset for every optional key.
    ///
    /// # Errors
    ///
    /// Same as [`DescriberConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let api_key = lookup("OPENAI_API_KEY")
            .ok_or_else(|| ConfigError::new("OPENAI_API_KEY not set"))?;
        let base_url = non_empty("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let timeout = non_empty("OPENAI_TIMEOUT_SECS")
            .map(|raw| {
                raw.trim().parse::<u64>().map(Duration::from_secs).map_err(|e| {
                    ConfigError::new(format!("Invalid OPENAI_TIMEOUT_SECS '{}': {}", raw, e))
                })
            })
            .transpose()?;

        Ok(Self {
            api_key,
            base_url,
            model,
            timeout,
        })
    }

    /// Full chat completions endpoint derived from the base URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

impl std::fmt::Debug for DescriberConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriberConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = DescriberConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.message.contains("OPENAI_API_KEY"));
    }

    #[test]
    fn defaults_apply_when_optional_keys_are_unset_or_empty() {
        let config = DescriberConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", ""),
        ]))
        .unwrap();

        assert_eq!(config.api_key(), "sk-test");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(*config.timeout(), None);
    }

    #[test]
    fn overrides_are_read() {
        let config = DescriberConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1/"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("OPENAI_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.model(), "gpt-4o");
        assert_eq!(*config.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(
            config.chat_completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let result = DescriberConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_TIMEOUT_SECS", "soon"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let config = DescriberConfig::builder()
            .api_key("sk-very-secret")
            .build()
            .unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-very-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
