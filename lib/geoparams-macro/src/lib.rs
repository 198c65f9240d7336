//! Procedural macros for geoparams.
//!
//! This crate provides `#[derive(WireName)]`, which turns a fieldless enum
//! into an explicit, compile-time table of the tokens an upstream API
//! expects for it.
//!
//! # Example
//!
//! ```ignore
//! use geoparams::WireName;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, WireName)]
//! pub enum StyleFeature {
//!     Administrative,
//!     #[wire(rename = "administrative.land_parcel")]
//!     AdministrativeLandParcel,
//! }
//! ```

mod wire_name_derive;

use proc_macro::TokenStream;

/// Derive `WireName` for a fieldless enum.
///
/// Besides the `WireName` impl, this generates `Display` (the wire token)
/// and serde `Serialize`/`Deserialize` impls that read and write the token.
///
/// # Attributes
///
/// Variant-level:
/// - `#[wire(rename = "token")]` - Use `token` as the wire name
///
/// Enum-level:
/// - `#[wire(rename_all = "...")]` - Rule applied to variants without a
///   `rename`: `lowercase`, `UPPERCASE`, `snake_case` (default),
///   `SCREAMING_SNAKE_CASE` or `kebab-case`
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, WireName)]
/// #[wire(rename_all = "lowercase")]
/// pub enum MapType {
///     Roadmap,
///     Satellite,
/// }
///
/// assert_eq!(MapType::Roadmap.wire_name(), "roadmap");
/// assert_eq!(MapType::from_wire_name("satellite"), Some(MapType::Satellite));
/// ```
#[proc_macro_derive(WireName, attributes(wire))]
pub fn derive_wire_name(input: TokenStream) -> TokenStream {
    wire_name_derive::expand_wire_name_derive(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
