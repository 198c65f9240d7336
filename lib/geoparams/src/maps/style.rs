//! Static map styling.
//!
//! A [`MapStyle`] selects map features and elements and applies a
//! [`StyleRule`] to them. Styles encode to the `style` parameter value of a
//! static maps request, for example
//! `feature:road.local|element:geometry|color:0x00ff00|weight:1`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::WireName;

/// Map features a style applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireName)]
pub enum StyleFeature {
    /// All features.
    All,
    /// Administrative areas.
    Administrative,
    /// Countries.
    #[wire(rename = "administrative.country")]
    AdministrativeCountry,
    /// Land parcels.
    #[wire(rename = "administrative.land_parcel")]
    AdministrativeLandParcel,
    /// Localities.
    #[wire(rename = "administrative.locality")]
    AdministrativeLocality,
    /// Neighborhoods.
    #[wire(rename = "administrative.neighborhood")]
    AdministrativeNeighborhood,
    /// Provinces.
    #[wire(rename = "administrative.province")]
    AdministrativeProvince,
    /// Landscapes.
    Landscape,
    /// Man-made structures.
    #[wire(rename = "landscape.man_made")]
    LandscapeManMade,
    /// Natural features.
    #[wire(rename = "landscape.natural")]
    LandscapeNatural,
    /// Land cover.
    #[wire(rename = "landscape.natural.landcover")]
    LandscapeNaturalLandcover,
    /// Terrain.
    #[wire(rename = "landscape.natural.terrain")]
    LandscapeNaturalTerrain,
    /// Points of interest.
    Poi,
    /// Tourist attractions.
    #[wire(rename = "poi.attraction")]
    PoiAttraction,
    /// Businesses.
    #[wire(rename = "poi.business")]
    PoiBusiness,
    /// Government buildings.
    #[wire(rename = "poi.government")]
    PoiGovernment,
    /// Medical facilities.
    #[wire(rename = "poi.medical")]
    PoiMedical,
    /// Parks.
    #[wire(rename = "poi.park")]
    PoiPark,
    /// Places of worship.
    #[wire(rename = "poi.place_of_worship")]
    PoiPlaceOfWorship,
    /// Schools.
    #[wire(rename = "poi.school")]
    PoiSchool,
    /// Sports complexes.
    #[wire(rename = "poi.sports_complex")]
    PoiSportsComplex,
    /// Roads.
    Road,
    /// Arterial roads.
    #[wire(rename = "road.arterial")]
    RoadArterial,
    /// Highways.
    #[wire(rename = "road.highway")]
    RoadHighway,
    /// Controlled-access highways.
    #[wire(rename = "road.highway.controlled_access")]
    RoadHighwayControlledAccess,
    /// Local roads.
    #[wire(rename = "road.local")]
    RoadLocal,
    /// Transit.
    Transit,
    /// Transit lines.
    #[wire(rename = "transit.line")]
    TransitLine,
    /// Transit stations.
    #[wire(rename = "transit.station")]
    TransitStation,
    /// Airports.
    #[wire(rename = "transit.station.airport")]
    TransitStationAirport,
    /// Bus stops.
    #[wire(rename = "transit.station.bus")]
    TransitStationBus,
    /// Rail stations.
    #[wire(rename = "transit.station.rail")]
    TransitStationRail,
    /// Bodies of water.
    Water,
}

/// Parts of a feature a style applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireName)]
pub enum StyleElement {
    /// All elements.
    All,
    /// Geometry.
    Geometry,
    /// Geometry fill.
    #[wire(rename = "geometry.fill")]
    GeometryFill,
    /// Geometry stroke.
    #[wire(rename = "geometry.stroke")]
    GeometryStroke,
    /// Labels.
    Labels,
    /// Label icons.
    #[wire(rename = "labels.icon")]
    LabelsIcon,
    /// Label text.
    #[wire(rename = "labels.text")]
    LabelsText,
    /// Label text fill.
    #[wire(rename = "labels.text.fill")]
    LabelsTextFill,
    /// Label text stroke.
    #[wire(rename = "labels.text.stroke")]
    LabelsTextStroke,
}

/// Whether and how styled elements are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, WireName)]
pub enum StyleVisibility {
    /// Shown.
    On,
    /// Hidden.
    Off,
    /// Shown with fewer details.
    Simplified,
}

/// Styling operations applied to the selected features and elements.
///
/// Every set field contributes one `name:value` fragment. Fragments always
/// come out in declaration order, whatever order the fields were set in.
///
/// ```
/// use geoparams::maps::style::{StyleRule, StyleVisibility};
///
/// let rule = StyleRule {
///     visibility: Some(StyleVisibility::Simplified),
///     lightness: Some(-20),
///     ..StyleRule::default()
/// };
/// assert_eq!(rule.encode().as_deref(), Some("lightness:-20|visibility:simplified"));
/// assert_eq!(StyleRule::default().encode(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleRule {
    /// Base hue as an RGB hex string, such as `0xff0000`.
    pub hue: Option<String>,
    /// Brightness shift, `-100..=100`.
    pub lightness: Option<i32>,
    /// Intensity shift, `-100..=100`.
    pub saturation: Option<i32>,
    /// Gamma correction, `0.01..=10.0`.
    pub gamma: Option<f64>,
    /// Invert lightness.
    pub invert_lightness: Option<bool>,
    /// Visibility.
    pub visibility: Option<StyleVisibility>,
    /// Solid color as an RGB hex string.
    pub color: Option<String>,
    /// Line weight in pixels.
    pub weight: Option<u32>,
}

impl StyleRule {
    /// Encode as `|`-joined fragments, or `None` when no field is set.
    #[must_use]
    pub fn encode(&self) -> Option<String> {
        let mut fragments = Vec::new();

        if let Some(hue) = &self.hue {
            fragments.push(format!("hue:{hue}"));
        }
        if let Some(lightness) = self.lightness {
            fragments.push(format!("lightness:{lightness}"));
        }
        if let Some(saturation) = self.saturation {
            fragments.push(format!("saturation:{saturation}"));
        }
        if let Some(gamma) = self.gamma {
            fragments.push(format!("gamma:{gamma}"));
        }
        if let Some(invert_lightness) = self.invert_lightness {
            fragments.push(format!("invert_lightness:{invert_lightness}"));
        }
        if let Some(visibility) = self.visibility {
            fragments.push(format!("visibility:{}", visibility.wire_name()));
        }
        if let Some(color) = &self.color {
            fragments.push(format!("color:{color}"));
        }
        if let Some(weight) = self.weight {
            fragments.push(format!("weight:{weight}"));
        }

        (!fragments.is_empty()).then(|| fragments.join("|"))
    }
}

impl fmt::Display for StyleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encode().as_deref().unwrap_or_default())
    }
}

/// One static map style: a feature/element selector plus a rule.
///
/// No validation happens here. A style with nothing set encodes to `None`;
/// the static maps request leaves such styles out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapStyle {
    /// Features to style. All features when absent.
    pub feature: Option<StyleFeature>,
    /// Elements to style. All elements when absent.
    pub element: Option<StyleElement>,
    /// Styling to apply.
    pub style: Option<StyleRule>,
}

impl MapStyle {
    /// Encode as `feature:..|element:..|<rule>`, skipping absent parts.
    ///
    /// Returns `None` when all three parts are absent.
    #[must_use]
    pub fn encode(&self) -> Option<String> {
        let segments: Vec<String> = [
            self.feature
                .map(|feature| format!("feature:{}", feature.wire_name())),
            self.element
                .map(|element| format!("element:{}", element.wire_name())),
            self.style.as_ref().and_then(StyleRule::encode),
        ]
        .into_iter()
        .flatten()
        .collect();

        (!segments.is_empty()).then(|| segments.join("|"))
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encode().as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn empty_style_encodes_to_none() {
        check!(MapStyle::default().encode().is_none());
        check!(MapStyle::default().to_string().is_empty());
    }

    #[test]
    fn empty_rule_counts_as_absent() {
        let style = MapStyle {
            style: Some(StyleRule::default()),
            ..MapStyle::default()
        };
        check!(style.encode().is_none());
    }

    #[test]
    fn feature_element_and_color() {
        let style = MapStyle {
            feature: Some(StyleFeature::Administrative),
            element: Some(StyleElement::Geometry),
            style: Some(StyleRule {
                color: Some("color".to_string()),
                ..StyleRule::default()
            }),
        };

        insta::assert_snapshot!(style, @"feature:administrative|element:geometry|color:color");
    }

    #[test]
    fn every_rule_field_in_declaration_order() {
        let style = MapStyle {
            feature: Some(StyleFeature::AdministrativeLandParcel),
            element: Some(StyleElement::LabelsTextStroke),
            style: Some(StyleRule {
                weight: Some(1),
                color: Some("color".to_string()),
                visibility: Some(StyleVisibility::Simplified),
                invert_lightness: Some(true),
                gamma: Some(1.0),
                saturation: Some(10),
                lightness: Some(10),
                hue: Some("hue".to_string()),
            }),
        };

        insta::assert_snapshot!(
            style,
            @"feature:administrative.land_parcel|element:labels.text.stroke|hue:hue|lightness:10|saturation:10|gamma:1|invert_lightness:true|visibility:simplified|color:color|weight:1"
        );
    }

    #[test]
    fn partial_segments() {
        let element_only = MapStyle {
            element: Some(StyleElement::Labels),
            ..MapStyle::default()
        };
        check!(element_only.encode().as_deref() == Some("element:labels"));

        let rule_only = MapStyle {
            style: Some(StyleRule {
                visibility: Some(StyleVisibility::Off),
                ..StyleRule::default()
            }),
            ..MapStyle::default()
        };
        check!(rule_only.encode().as_deref() == Some("visibility:off"));
    }

    #[test]
    fn fractional_gamma() {
        let rule = StyleRule {
            gamma: Some(0.5),
            invert_lightness: Some(false),
            ..StyleRule::default()
        };
        check!(rule.to_string() == "gamma:0.5|invert_lightness:false");
    }

    #[test]
    fn fallback_wire_names() {
        check!(StyleFeature::All.wire_name() == "all");
        check!(StyleFeature::Water.wire_name() == "water");
        check!(StyleElement::Geometry.wire_name() == "geometry");
        check!(StyleVisibility::Simplified.wire_name() == "simplified");
    }

    #[test]
    fn wire_names_round_trip() {
        for token in StyleFeature::WIRE_NAMES {
            let feature = StyleFeature::from_wire_name(token);
            check!(feature.map(|f| f.wire_name()) == Some(*token));
        }
        for token in StyleElement::WIRE_NAMES {
            let element = StyleElement::from_wire_name(token);
            check!(element.map(|e| e.wire_name()) == Some(*token));
        }
    }

    #[test]
    fn style_from_json() {
        let style: MapStyle = serde_json::from_str(
            r#"{"feature":"road.local","element":"geometry","style":{"color":"0x00ff00","weight":1}}"#,
        )
        .expect("deserialize");

        check!(style.feature == Some(StyleFeature::RoadLocal));
        check!(style.to_string() == "feature:road.local|element:geometry|color:0x00ff00|weight:1");
    }

    #[test]
    fn unknown_feature_is_rejected() {
        let result = serde_json::from_str::<StyleFeature>(r#""road.unknown""#);
        check!(result.is_err());
    }
}
