//! Translation API supported-languages request.

use serde::{Deserialize, Serialize};

use super::Language;
use crate::logging::traced;
use crate::{Credentials, Endpoint, EndpointPath, QueryParams, Result, ToQueryParams, WireName};

/// Translation model whose language list is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireName)]
pub enum TranslationModel {
    /// Phrase-based model.
    Base,
    /// Neural machine translation model.
    Nmt,
}

/// Lists the languages the translation service supports.
///
/// With a `target`, the service also returns each language's name in that
/// language.
///
/// # Example
///
/// ```
/// use geoparams::prelude::*;
/// use geoparams::translate::{Language, LanguagesRequest};
///
/// let request = LanguagesRequest::new(Credentials::new("key")).with_target(Language::Afrikaans);
/// let params = request.to_query_params()?;
/// assert_eq!(params.get("target"), Some("af"));
/// # Ok::<(), geoparams::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguagesRequest {
    /// API key.
    #[serde(flatten)]
    pub credentials: Credentials,
    /// Language to name the supported languages in.
    pub target: Option<Language>,
    /// Restrict the list to one translation model.
    pub model: Option<TranslationModel>,
}

impl LanguagesRequest {
    /// Create a request listing every language.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Self::default()
        }
    }

    /// Set the target language.
    #[must_use]
    pub fn with_target(mut self, target: Language) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the translation model.
    #[must_use]
    pub fn with_model(mut self, model: TranslationModel) -> Self {
        self.model = Some(model);
        self
    }

    fn build(&self) -> Result<QueryParams> {
        let mut params = self.credentials.to_query_params()?;
        params
            .push_opt("target", self.target.map(|target| target.code()))
            .push_opt("model", self.model.map(|model| model.wire_name()));
        Ok(params)
    }
}

impl ToQueryParams for LanguagesRequest {
    fn to_query_params(&self) -> Result<QueryParams> {
        traced::<Self>(self.build())
    }
}

impl Endpoint for LanguagesRequest {
    const PATH: EndpointPath = EndpointPath::new("languages");
}
