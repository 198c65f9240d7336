//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types, traits and macros
//! for easy glob importing:
//!
//! ```ignore
//! use geoparams::prelude::*;
//! ```

pub use crate::{
    ClientConfig, Coordinate, Credentials, Endpoint, Error, Location, MapSize, QueryParams,
    Result, ToQueryParams, WireName,
};
