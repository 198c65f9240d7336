//! Typed, validated query parameters for maps and translate web APIs.
//!
//! Each API operation has a request type. Fill it in, then call
//! [`ToQueryParams::to_query_params`]: the request is validated and turned
//! into an ordered list of `(name, value)` pairs for a transport layer to
//! put in a URL. Nothing here performs I/O.
//!
//! # Example
//!
//! ```
//! use geoparams::prelude::*;
//! use geoparams::maps::ElevationRequest;
//!
//! let request = ElevationRequest::with_locations(
//!     Credentials::new("my-key"),
//!     [Coordinate::new(39.7391536, -104.9847034)],
//! );
//!
//! let params = request.to_query_params()?;
//! assert_eq!(params.get("locations"), Some("39.7391536,-104.9847034"));
//! # Ok::<(), geoparams::Error>(())
//! ```

extern crate self as geoparams;

mod config;
mod logging;
pub mod maps;
pub mod prelude;
pub mod translate;

pub use config::{CHANNEL_ENV, ClientConfig, ClientConfigBuilder, KEY_ENV};

// Re-export core types
pub use geoparams_core::{
    Coordinate, Credentials, Endpoint, EndpointPath, Error, Location, MapSize, QueryParams,
    Result, ToQueryParams, WireName, join_pipe,
};

// Re-export crates for macro-generated code
pub use serde;

// Re-export macros
pub use geoparams_macro::WireName;
