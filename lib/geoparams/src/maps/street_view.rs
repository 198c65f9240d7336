//! Street View Static API request.

use serde::{Deserialize, Serialize};

use crate::logging::traced;
use crate::{
    Credentials, Endpoint, EndpointPath, Error, Location, MapSize, QueryParams, Result,
    ToQueryParams, WireName,
};

/// Imagery sources a panorama search can be limited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, WireName)]
pub enum Source {
    /// Any source.
    #[default]
    Default,
    /// Outdoor imagery only.
    Outdoor,
}

/// Street View image request.
///
/// The camera is placed either by panorama id or by location; when both are
/// given, the panorama id wins and the location is not sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreetViewRequest {
    /// API key and channel.
    #[serde(flatten)]
    pub credentials: Credentials,
    /// Place to snap to the nearest panorama.
    pub location: Option<Location>,
    /// Specific panorama id.
    pub panorama_id: Option<String>,
    /// Output size in pixels.
    pub size: MapSize,
    /// Camera up/down angle in degrees, in `-90..=90`.
    pub pitch: i16,
    /// Compass heading in degrees, in `0..=360`. Computed by the service when absent.
    pub heading: Option<i16>,
    /// Horizontal field of view in degrees, in `0..=120`.
    pub field_of_view: i16,
    /// Panorama search radius in meters.
    pub radius: u32,
    /// Ask for an HTTP error instead of a placeholder image when nothing is found.
    pub return_error_code: bool,
    /// Imagery sources to search.
    pub source: Source,
}

impl Default for StreetViewRequest {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            location: None,
            panorama_id: None,
            size: MapSize::new(600, 400),
            pitch: 0,
            heading: None,
            field_of_view: 90,
            radius: 50,
            return_error_code: false,
            source: Source::Default,
        }
    }
}

impl StreetViewRequest {
    /// Create a request with the service defaults.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Self::default()
        }
    }

    /// Create a request looking at `location`.
    #[must_use]
    pub fn at(credentials: Credentials, location: impl Into<Location>) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::new(credentials)
        }
    }

    /// Create a request for a known panorama.
    #[must_use]
    pub fn panorama(credentials: Credentials, panorama_id: impl Into<String>) -> Self {
        Self {
            panorama_id: Some(panorama_id.into()),
            ..Self::new(credentials)
        }
    }

    fn build(&self) -> Result<QueryParams> {
        let mut params = self.credentials.to_query_params()?;

        let panorama_id = self.panorama_id.as_deref().filter(|id| !id.trim().is_empty());
        let location = self.location.as_ref().filter(|location| !location.is_empty());
        match (panorama_id, location) {
            (Some(panorama_id), _) => params.push("pano", panorama_id),
            (None, Some(location)) => params.push("location", location),
            (None, None) => return Err(Error::required_one_of("Location", "PanoramaId")),
        };

        params.push("size", self.size);

        Error::check_range("Pitch", self.pitch, -90, 90)?;
        params.push("pitch", self.pitch);

        Error::check_range("FieldOfView", self.field_of_view, 0, 120)?;
        params.push("fov", self.field_of_view);

        if let Some(heading) = self.heading {
            Error::check_range("Heading", heading, 0, 360)?;
            params.push("heading", heading);
        }

        params
            .push("radius", self.radius)
            .push("return_error_code", self.return_error_code)
            .push("source", self.source.wire_name());

        Ok(params)
    }
}

impl ToQueryParams for StreetViewRequest {
    fn to_query_params(&self) -> Result<QueryParams> {
        traced::<Self>(self.build())
    }
}

impl Endpoint for StreetViewRequest {
    const PATH: EndpointPath = EndpointPath::new("streetview");
}
