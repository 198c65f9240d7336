//! Elevation API request.

use serde::{Deserialize, Serialize};

use crate::logging::traced;
use crate::{
    Coordinate, Credentials, Endpoint, EndpointPath, Error, QueryParams, Result, ToQueryParams,
    join_pipe,
};

/// Elevation lookup, either at discrete locations or sampled along a path.
///
/// `path` and `locations` are alternatives: exactly one of them must be
/// non-empty when the request is serialized. A path needs at least two
/// vertices and a `samples` count.
///
/// # Example
///
/// ```
/// use geoparams::prelude::*;
/// use geoparams::maps::ElevationRequest;
///
/// let request = ElevationRequest::with_path(
///     Credentials::new("key"),
///     [Coordinate::new(36.578581, -118.291994), Coordinate::new(36.23998, -116.83171)],
///     3,
/// );
///
/// let params = request.to_query_params()?;
/// assert_eq!(params.names(), vec!["key", "path", "samples"]);
/// # Ok::<(), geoparams::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevationRequest {
    /// API key and channel.
    #[serde(flatten)]
    pub credentials: Credentials,
    /// Ordered path vertices to sample along.
    pub path: Vec<Coordinate>,
    /// Points to return elevation data for.
    pub locations: Vec<Coordinate>,
    /// Number of equidistant samples along `path`, endpoints included.
    pub samples: Option<u32>,
}

impl ElevationRequest {
    /// Create an empty request.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Self::default()
        }
    }

    /// Create a positional request.
    #[must_use]
    pub fn with_locations(
        credentials: Credentials,
        locations: impl IntoIterator<Item = Coordinate>,
    ) -> Self {
        Self {
            locations: locations.into_iter().collect(),
            ..Self::new(credentials)
        }
    }

    /// Create a sampled path request.
    #[must_use]
    pub fn with_path(
        credentials: Credentials,
        path: impl IntoIterator<Item = Coordinate>,
        samples: u32,
    ) -> Self {
        Self {
            path: path.into_iter().collect(),
            samples: Some(samples),
            ..Self::new(credentials)
        }
    }

    fn build(&self) -> Result<QueryParams> {
        let mut params = self.credentials.to_query_params()?;

        match (self.path.is_empty(), self.locations.is_empty()) {
            (true, true) => return Err(Error::required_one_of("Locations", "Path")),
            (false, false) => return Err(Error::mutually_exclusive("Path", "Locations")),
            (false, true) => {
                if self.path.len() < 2 {
                    return Err(Error::too_few("Path", 2, self.path.len()));
                }
                let samples = self
                    .samples
                    .ok_or(Error::required_when("Samples", "Path"))?;

                params
                    .push("path", join_pipe(&self.path))
                    .push("samples", samples);
            }
            (true, false) => {
                params.push("locations", join_pipe(&self.locations));
            }
        }

        Ok(params)
    }
}

impl ToQueryParams for ElevationRequest {
    fn to_query_params(&self) -> Result<QueryParams> {
        traced::<Self>(self.build())
    }
}

impl Endpoint for ElevationRequest {
    const PATH: EndpointPath = EndpointPath::new("elevation/json");
}
