//! Maps Static API request.

use serde::{Deserialize, Serialize};

use super::style::MapStyle;
use crate::logging::traced;
use crate::{
    Credentials, Endpoint, EndpointPath, Error, Location, MapSize, QueryParams, Result,
    ToQueryParams, WireName,
};

/// Pixel density multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireName)]
pub enum MapScale {
    /// Standard density.
    #[wire(rename = "1")]
    One,
    /// Double density.
    #[wire(rename = "2")]
    Two,
    /// Quadruple density.
    #[wire(rename = "4")]
    Four,
}

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireName)]
#[wire(rename_all = "kebab-case")]
pub enum ImageFormat {
    /// 8-bit PNG.
    Png,
    /// 8-bit PNG.
    Png8,
    /// 32-bit PNG.
    Png32,
    /// GIF.
    Gif,
    /// Progressive JPEG.
    Jpg,
    /// Non-progressive JPEG.
    JpgBaseline,
}

/// Base map type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireName)]
#[wire(rename_all = "lowercase")]
pub enum MapType {
    /// Standard road map.
    Roadmap,
    /// Satellite imagery.
    Satellite,
    /// Physical relief.
    Terrain,
    /// Satellite imagery with roads and labels.
    Hybrid,
}

/// Static map image request.
///
/// Styles that encode to nothing are left out; every other style becomes
/// its own `style` parameter, in order.
///
/// # Example
///
/// ```
/// use geoparams::prelude::*;
/// use geoparams::maps::StaticMapsRequest;
/// use geoparams::maps::style::{MapStyle, StyleFeature, StyleRule, StyleVisibility};
///
/// let mut request = StaticMapsRequest::centered(Credentials::new("key"), Location::address("Brooklyn Bridge"), 13);
/// request.styles.push(MapStyle {
///     feature: Some(StyleFeature::Poi),
///     style: Some(StyleRule { visibility: Some(StyleVisibility::Off), ..StyleRule::default() }),
///     ..MapStyle::default()
/// });
///
/// let params = request.to_query_params()?;
/// assert_eq!(params.get("style"), Some("feature:poi|visibility:off"));
/// # Ok::<(), geoparams::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticMapsRequest {
    /// API key and channel.
    #[serde(flatten)]
    pub credentials: Credentials,
    /// Map center.
    pub center: Option<Location>,
    /// Zoom level, `0..=21`.
    pub zoom: Option<u8>,
    /// Image size in pixels.
    pub size: MapSize,
    /// Pixel density.
    pub scale: Option<MapScale>,
    /// Image format.
    pub format: Option<ImageFormat>,
    /// Base map type.
    pub map_type: Option<MapType>,
    /// Label language.
    pub language: Option<String>,
    /// Region used for border and label choices.
    pub region: Option<String>,
    /// Custom styles.
    pub styles: Vec<MapStyle>,
}

impl Default for StaticMapsRequest {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            center: None,
            zoom: None,
            size: MapSize::new(640, 640),
            scale: None,
            format: None,
            map_type: None,
            language: None,
            region: None,
            styles: Vec::new(),
        }
    }
}

impl StaticMapsRequest {
    /// Highest zoom level accepted.
    pub const MAX_ZOOM: u8 = 21;

    /// Create a request with the service defaults.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Self::default()
        }
    }

    /// Create a request centered on `center` at `zoom`.
    #[must_use]
    pub fn centered(credentials: Credentials, center: impl Into<Location>, zoom: u8) -> Self {
        Self {
            center: Some(center.into()),
            zoom: Some(zoom),
            ..Self::new(credentials)
        }
    }

    fn build(&self) -> Result<QueryParams> {
        let mut params = self.credentials.to_query_params()?;

        let center = self
            .center
            .as_ref()
            .filter(|center| !center.is_empty())
            .ok_or(Error::required("Center"))?;
        let zoom = self.zoom.ok_or(Error::required("Zoom"))?;
        Error::check_range("Zoom", zoom, 0, Self::MAX_ZOOM)?;

        params
            .push("center", center)
            .push("zoom", zoom)
            .push("size", self.size)
            .push_opt("scale", self.scale.map(|scale| scale.wire_name()))
            .push_opt("format", self.format.map(|format| format.wire_name()))
            .push_opt("maptype", self.map_type.map(|map_type| map_type.wire_name()))
            .push_opt("language", self.language.as_deref())
            .push_opt("region", self.region.as_deref());

        for style in self.styles.iter().filter_map(MapStyle::encode) {
            params.push("style", style);
        }

        Ok(params)
    }
}

impl ToQueryParams for StaticMapsRequest {
    fn to_query_params(&self) -> Result<QueryParams> {
        traced::<Self>(self.build())
    }
}

impl Endpoint for StaticMapsRequest {
    const PATH: EndpointPath = EndpointPath::new("staticmap");
}
