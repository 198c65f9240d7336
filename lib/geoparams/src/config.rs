//! Client configuration types.

use std::env;

use crate::Credentials;

/// Environment variable read by [`ClientConfig::from_env`] for the API key.
pub const KEY_ENV: &str = "GEOPARAMS_API_KEY";

/// Environment variable read by [`ClientConfig::from_env`] for the channel.
pub const CHANNEL_ENV: &str = "GEOPARAMS_CHANNEL";

/// Settings shared by every request a client builds.
///
/// Nothing is validated here: a missing key is reported when a request
/// carrying these credentials is serialized.
///
/// # Example
///
/// ```
/// use geoparams::ClientConfig;
///
/// let config = ClientConfig::builder().key("my-key").channel("web").build();
/// let credentials = config.credentials();
/// assert_eq!(credentials.key(), Some("my-key"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    credentials: Credentials,
}

impl ClientConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Read the key and channel from `GEOPARAMS_API_KEY` and `GEOPARAMS_CHANNEL`.
    ///
    /// Unset or non-UTF-8 variables are treated as absent.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut builder = Self::builder();
        if let Some(key) = lookup(KEY_ENV) {
            builder = builder.key(key);
        }
        if let Some(channel) = lookup(CHANNEL_ENV) {
            builder = builder.channel(channel);
        }
        builder.build()
    }

    /// Credentials to embed in a request.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        self.credentials.clone()
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    key: Option<String>,
    channel: Option<String>,
}

impl ClientConfigBuilder {
    /// Set the API key.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the channel tag.
    #[must_use]
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        ClientConfig {
            credentials: Credentials {
                key: self.key,
                channel: self.channel,
            },
        }
    }
}
