//! Enum to wire token mapping.

/// Maps the variants of a fieldless enum to the tokens an upstream API expects.
///
/// This is implemented by `#[derive(WireName)]`, which generates an explicit
/// `match` for each direction. A variant's token is either declared with
/// `#[wire(rename = "...")]` or derived from its identifier (by default
/// lowercased, with `_` at each internal word boundary, so `LandParcel` maps
/// to `land_parcel`).
///
/// # Example
///
/// ```ignore
/// use geoparams::WireName;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, WireName)]
/// pub enum StyleElement {
///     Geometry,
///     #[wire(rename = "labels.text.stroke")]
///     LabelsTextStroke,
/// }
///
/// assert_eq!(StyleElement::Geometry.wire_name(), "geometry");
/// assert_eq!(StyleElement::LabelsTextStroke.wire_name(), "labels.text.stroke");
/// ```
pub trait WireName: Sized + Copy + 'static {
    /// Every token, in variant declaration order.
    const WIRE_NAMES: &'static [&'static str];

    /// The wire token of this variant.
    fn wire_name(&self) -> &'static str;

    /// The variant whose token is `token`, if any.
    fn from_wire_name(token: &str) -> Option<Self>;
}
