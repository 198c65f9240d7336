//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits
//! for easy glob importing:
//!
//! ```ignore
//! use geoparams_core::prelude::*;
//! ```

pub use crate::{
    Coordinate, Credentials, Endpoint, EndpointPath, Error, Location, MapSize, QueryParams,
    Result, ToQueryParams, WireName, join_pipe,
};
