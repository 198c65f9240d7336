//! Integration tests for request serialization.

#![allow(missing_docs)]

use assert2::{check, let_assert};
use geoparams::maps::style::{MapStyle, StyleElement, StyleFeature, StyleRule, StyleVisibility};
use geoparams::maps::{ElevationRequest, Source, StaticMapsRequest, StreetViewRequest};
use geoparams::prelude::*;
use geoparams::translate::{Language, LanguagesRequest};

fn config() -> ClientConfig {
    ClientConfig::builder().key("key").build()
}

fn render(params: &QueryParams) -> String {
    params
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Wire names
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, WireName)]
enum TravelMode {
    Driving,
    #[wire(rename = "walking")]
    OnFoot,
    PublicTransit,
}

#[test]
fn derive_outside_the_crate() {
    check!(TravelMode::Driving.wire_name() == "driving");
    check!(TravelMode::OnFoot.wire_name() == "walking");
    check!(TravelMode::PublicTransit.wire_name() == "public_transit");
    check!(TravelMode::WIRE_NAMES == ["driving", "walking", "public_transit"]);
    check!(TravelMode::from_wire_name("walking") == Some(TravelMode::OnFoot));
    check!(TravelMode::from_wire_name("on_foot").is_none());
}

#[test]
fn derived_serde_uses_tokens() {
    let json = serde_json::to_string(&[TravelMode::OnFoot, TravelMode::Driving]).expect("serialize");
    check!(json == r#"["walking","driving"]"#);

    let_assert!(Err(err) = serde_json::from_str::<TravelMode>(r#""flying""#));
    check!(err.to_string().contains("unknown variant `flying`"));
}

// ============================================================================
// Map styles
// ============================================================================

#[test]
fn map_style_with_nothing_set() {
    check!(MapStyle::default().encode().is_none());
}

#[test]
fn map_style_administrative_geometry_color() {
    let style = MapStyle {
        feature: Some(StyleFeature::Administrative),
        element: Some(StyleElement::Geometry),
        style: Some(StyleRule {
            color: Some("color".to_string()),
            ..StyleRule::default()
        }),
    };

    check!(style.encode().as_deref() == Some("feature:administrative|element:geometry|color:color"));
}

#[test]
fn style_rule_emits_only_set_fields() {
    let rule = StyleRule {
        saturation: Some(-100),
        weight: Some(2),
        hue: Some("0x00ffe6".to_string()),
        ..StyleRule::default()
    };

    check!(rule.encode().as_deref() == Some("hue:0x00ffe6|saturation:-100|weight:2"));
}

// ============================================================================
// Languages
// ============================================================================

#[test]
fn languages_key_only() {
    let params = LanguagesRequest::new(config().credentials())
        .to_query_params()
        .expect("valid");

    insta::assert_snapshot!(render(&params), @"key=key");
}

#[test]
fn languages_with_target() {
    let params = LanguagesRequest::new(config().credentials())
        .with_target(Language::Afrikaans)
        .to_query_params()
        .expect("valid");

    insta::assert_snapshot!(render(&params), @r"
    key=key
    target=af
    ");
}

#[test]
fn languages_without_key() {
    for key in [None, Some(String::new())] {
        let request = LanguagesRequest::new(Credentials { key, channel: None });
        let_assert!(Err(err) = request.to_query_params());
        check!(err.is_required());
        check!(err.to_string() == "'Key' is required");
    }
}

// ============================================================================
// Elevation
// ============================================================================

#[test]
fn elevation_validation_order() {
    let a = Coordinate::new(1.0, 2.0);
    let b = Coordinate::new(3.0, 4.0);

    let_assert!(Err(err) = ElevationRequest::new(config().credentials()).to_query_params());
    check!(err.is_required());

    let both = ElevationRequest {
        locations: vec![a],
        ..ElevationRequest::with_path(config().credentials(), [a, b], 2)
    };
    let_assert!(Err(err) = both.to_query_params());
    check!(err.is_mutual_exclusion());

    let short = ElevationRequest::with_path(config().credentials(), [a], 2);
    let_assert!(Err(err) = short.to_query_params());
    check!(err.is_range());
    check!(err.fields() == vec!["Path"]);

    let no_samples = ElevationRequest {
        samples: None,
        ..ElevationRequest::with_path(config().credentials(), [a, b], 2)
    };
    let_assert!(Err(err) = no_samples.to_query_params());
    check!(err.is_required());
    check!(err.fields().contains(&"Samples"));
}

#[test]
fn elevation_path() {
    let request = ElevationRequest::with_path(
        config().credentials(),
        [
            Coordinate::new(36.578581, -118.291994),
            Coordinate::new(36.23998, -116.83171),
        ],
        3,
    );

    insta::assert_snapshot!(render(&request.to_query_params().expect("valid")), @r"
    key=key
    path=36.578581,-118.291994|36.23998,-116.83171
    samples=3
    ");
}

// ============================================================================
// Street View
// ============================================================================

#[test]
fn street_view_requires_a_position() {
    let_assert!(Err(err) = StreetViewRequest::new(config().credentials()).to_query_params());
    check!(err.fields() == vec!["Location", "PanoramaId"]);
}

#[test]
fn street_view_ranges() {
    let base = || StreetViewRequest::panorama(config().credentials(), "pano");

    let_assert!(Err(err) = StreetViewRequest { pitch: 91, ..base() }.to_query_params());
    check!(err.is_range());

    let_assert!(Err(err) = StreetViewRequest { heading: Some(361), ..base() }.to_query_params());
    check!(err.is_range());
    check!(err.fields() == vec!["Heading"]);
}

#[test]
fn street_view_minimal() {
    let request = StreetViewRequest::panorama(
        ClientConfig::builder().key("key").channel("web").build().credentials(),
        "CAoSLEFGMVFpcE",
    );

    insta::assert_snapshot!(render(&request.to_query_params().expect("valid")), @r"
    key=key
    channel=web
    pano=CAoSLEFGMVFpcE
    size=600x400
    pitch=0
    fov=90
    radius=50
    return_error_code=false
    source=default
    ");
}

#[test]
fn street_view_from_json_fixture() {
    let request: StreetViewRequest = serde_json::from_str(
        r#"{
            "key": "key",
            "location": "Chagrin Falls, OH",
            "size": {"width": 400, "height": 400},
            "heading": 235,
            "source": "outdoor"
        }"#,
    )
    .expect("deserialize");

    check!(request.source == Source::Outdoor);
    let params = request.to_query_params().expect("valid");
    check!(params.get("location") == Some("Chagrin Falls, OH"));
    check!(params.get("size") == Some("400x400"));
    check!(params.get("heading") == Some("235"));
}

// ============================================================================
// Static maps
// ============================================================================

#[test]
fn static_map_with_styles() {
    let mut request = StaticMapsRequest::centered(
        config().credentials(),
        Location::address("Brooklyn Bridge,New York,NY"),
        13,
    );
    request.styles = vec![
        MapStyle {
            feature: Some(StyleFeature::Poi),
            style: Some(StyleRule {
                visibility: Some(StyleVisibility::Off),
                ..StyleRule::default()
            }),
            ..MapStyle::default()
        },
        MapStyle::default(),
        MapStyle {
            feature: Some(StyleFeature::Water),
            element: Some(StyleElement::GeometryFill),
            style: Some(StyleRule {
                color: Some("0x0000ff".to_string()),
                ..StyleRule::default()
            }),
        },
    ];

    insta::assert_snapshot!(render(&request.to_query_params().expect("valid")), @r"
    key=key
    center=Brooklyn Bridge,New York,NY
    zoom=13
    size=640x640
    style=feature:poi|visibility:off
    style=feature:water|element:geometry.fill|color:0x0000ff
    ");
}

// ============================================================================
// Shared behavior
// ============================================================================

#[test]
fn endpoint_paths() {
    check!(ElevationRequest::PATH.as_str() == "elevation/json");
    check!(StreetViewRequest::PATH.as_str() == "streetview");
    check!(StaticMapsRequest::PATH.as_str() == "staticmap");
    check!(LanguagesRequest::PATH.as_str() == "languages");
}

#[test]
fn requests_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<ElevationRequest>();
    assert_send_sync::<StreetViewRequest>();
    assert_send_sync::<StaticMapsRequest>();
    assert_send_sync::<LanguagesRequest>();
    assert_send_sync::<QueryParams>();
    assert_send_sync::<Error>();
}

#[test]
fn serialize_from_many_threads() {
    let request = StreetViewRequest::at(config().credentials(), Coordinate::new(1.0, 2.0));

    let outputs: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| request.to_query_params()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("thread"))
            .collect()
    });

    let expected = request.to_query_params().expect("valid");
    for output in outputs {
        check!(output.as_ref() == Ok(&expected));
    }
}
