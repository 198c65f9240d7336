//! Core types and traits for geoparams typed request serialization.
//!
//! This crate provides the foundational types used by geoparams:
//! - [`QueryParams`] - Ordered query parameter pairs produced by a request
//! - [`ToQueryParams`] - Trait for validating a request and serializing it
//! - [`Endpoint`] - A request type bound to a service path
//! - [`Error`] and [`Result`] - Validation errors
//! - [`WireName`] - Enum to wire token mapping
//! - [`Credentials`] - Key and channel shared by every request
//! - [`Coordinate`], [`Location`], [`MapSize`] - Composite values

mod credentials;
mod error;
mod params;
pub mod prelude;
mod value;
mod wire_name;

pub use credentials::Credentials;
pub use error::{Error, Result};
pub use params::{EndpointPath, QueryParams, join_pipe};
pub use value::{Coordinate, Location, MapSize};
pub use wire_name::WireName;

/// Trait for requests that validate and serialize into query parameters.
///
/// Validation runs when this is called, not when the request is built, so a
/// request may hold an invalid combination while it is being filled in. On
/// error nothing is returned; the parameters collected so far are dropped.
///
/// # Example
///
/// ```
/// use geoparams_core::{Credentials, QueryParams, Result, ToQueryParams};
///
/// struct PingRequest {
///     credentials: Credentials,
///     echo: Option<String>,
/// }
///
/// impl ToQueryParams for PingRequest {
///     fn to_query_params(&self) -> Result<QueryParams> {
///         let mut params = self.credentials.to_query_params()?;
///         params.push_opt("echo", self.echo.as_deref());
///         Ok(params)
///     }
/// }
///
/// let request = PingRequest {
///     credentials: Credentials::new("key"),
///     echo: Some("hello".to_string()),
/// };
/// let params = request.to_query_params().expect("valid");
/// assert_eq!(params.names(), vec!["key", "echo"]);
/// ```
pub trait ToQueryParams {
    /// Validate this request and convert it to ordered query parameters.
    fn to_query_params(&self) -> Result<QueryParams>;
}

/// A request type served at a known path.
pub trait Endpoint: ToQueryParams {
    /// Service path, relative to the API root.
    const PATH: EndpointPath;
}
