//! Fields and validation shared by every request.

use derive_more::Debug;
use serde::{Deserialize, Serialize};

use crate::{Error, QueryParams, Result, ToQueryParams};

/// API credential and optional channel tag.
///
/// Every request embeds one of these and runs its [`ToQueryParams`] step
/// before emitting anything of its own, so `key` always comes first.
///
/// The key is left out of the `Debug` output.
///
/// # Example
///
/// ```
/// use geoparams_core::{Credentials, ToQueryParams};
///
/// let params = Credentials::new("secret")
///     .with_channel("web")
///     .to_query_params()
///     .expect("valid credentials");
///
/// assert_eq!(params.names(), vec!["key", "channel"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// API key. Required and non-empty.
    #[debug(skip)]
    pub key: Option<String>,
    /// Channel tag used to break usage reports down.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

impl Credentials {
    /// Create credentials holding `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            channel: None,
        }
    }

    /// Set the channel tag.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// The key, if present and non-empty.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref().filter(|key| !key.is_empty())
    }
}

impl ToQueryParams for Credentials {
    fn to_query_params(&self) -> Result<QueryParams> {
        let key = self.key().ok_or(Error::required("Key"))?;

        let mut params = QueryParams::new();
        params.push("key", key);
        params.push_opt(
            "channel",
            self.channel.as_deref().filter(|channel| !channel.is_empty()),
        );
        Ok(params)
    }
}
