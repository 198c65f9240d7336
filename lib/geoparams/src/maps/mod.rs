//! Maps platform requests.
//!
//! - [`ElevationRequest`] - Elevation at locations or along a path
//! - [`StreetViewRequest`] - Street View imagery
//! - [`StaticMapsRequest`] - Static map images, with [`style`] rules

mod elevation;
mod static_maps;
mod street_view;
pub mod style;

pub use elevation::ElevationRequest;
pub use static_maps::{ImageFormat, MapScale, MapType, StaticMapsRequest};
pub use street_view::{Source, StreetViewRequest};
