//! Packet construction and output.

mod common;

use czml::core::{
    Cartesian3Value, IntervalCollection, IntervalValue, InterpolationAlgorithm, ReferenceFrame,
    SequentialIdGenerator, Temporal, TimeInterval,
};
use czml::geom::{
    Billboard, Color, Ellipsoid, EllipsoidRadii, Label, Point, Polygon, Polyline, Position,
    PositionList, PositionListOfLists,
};
use czml::material::{
    Material, PolylineArrow, PolylineDash, PolylineGlow, PolylineMaterial, PolylineOutline,
    SolidColorMaterial,
};
use czml::document::{Clock, CustomProperties, PacketPosition};
use czml::{Error, Packet, ToCzml};
use serde_json::json;

fn red() -> Color {
    Color::builder().rgba([255.0, 0.0, 0.0, 255.0]).build().unwrap()
}

fn line_positions() -> PositionList {
    PositionList::builder()
        .cartographic_degrees([-75.0, 43.0, 500000.0, -125.0, 43.0, 500000.0])
        .build()
        .unwrap()
}

fn polyline_packet(material: PolylineMaterial) -> Packet {
    Packet::builder()
        .id("id_00")
        .polyline(
            Polyline::builder()
                .positions(line_positions())
                .material(material)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

const LINE_PREFIX: &str = concat!(
    r#"{"id":"id_00","polyline":{"positions":{"cartographicDegrees":"#,
    r#"[-75.0,43.0,500000.0,-125.0,43.0,500000.0]},"material":"#
);

#[test]
fn test_packet_repr_id_only() {
    common::init_trace();
    let packet = Packet::builder().id("id_00").build().unwrap();
    assert_eq!(packet.to_string(), "{\n    \"id\": \"id_00\"\n}");
    assert_eq!(packet.to_json_compact().unwrap(), r#"{"id":"id_00"}"#);
}

#[test]
fn test_packet_repr_id_name() {
    let packet = Packet::builder().id("id_00").name("Test Packet").build().unwrap();
    assert_eq!(
        packet.to_string(),
        "{\n    \"id\": \"id_00\",\n    \"name\": \"Test Packet\"\n}"
    );
}

#[test]
fn test_packet_with_delete_has_nothing_else() {
    common::init_trace();
    let packet = Packet::builder()
        .id("id_00")
        .delete(true)
        .name("No Name In Packet")
        .build()
        .unwrap();
    assert_eq!(
        packet.to_string(),
        "{\n    \"id\": \"id_00\",\n    \"delete\": true\n}"
    );
}

#[test]
fn test_auto_generated_ids() {
    let a = Packet::builder().build().unwrap();
    let b = Packet::builder().build().unwrap();
    assert_ne!(a.id(), b.id());
    assert_eq!(
        uuid::Uuid::parse_str(a.id()).map(|u| u.get_version_num()).ok(),
        Some(4)
    );

    let ids = SequentialIdGenerator::new("id_");
    let c = Packet::builder().build_with(&ids).unwrap();
    let d = Packet::builder().build_with(&ids).unwrap();
    assert_eq!((c.id(), d.id()), ("id_0", "id_1"));
}

#[test]
fn test_packet_label() {
    let packet = Packet::builder()
        .id("0")
        .label(
            Label::builder()
                .font("20px sans-serif")
                .fill_color(Color::builder().rgbaf([0.2, 0.3, 0.4, 1.0]).build().unwrap())
                .outline_color(Color::builder().rgba([0.0, 233.0, 255.0, 2.0]).build().unwrap())
                .outline_width(2.0)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    let expected = r#"{
    "id": "0",
    "label": {
        "font": "20px sans-serif",
        "fillColor": {
            "rgbaf": [
                0.2,
                0.3,
                0.4,
                1.0
            ]
        },
        "outlineColor": {
            "rgba": [
                0.0,
                233.0,
                255.0,
                2.0
            ]
        },
        "outlineWidth": 2.0
    }
}"#;
    assert_eq!(packet.to_string(), expected);
    assert_eq!(Packet::from_json_str(expected).unwrap(), packet);
}

#[test]
fn test_packet_constant_cartesian_position() {
    let packet = Packet::builder()
        .id("MyObject")
        .position(Position::builder().cartesian([0.0, 0.0, 0.0]).build().unwrap())
        .build()
        .unwrap();
    assert_eq!(
        packet.to_json_compact().unwrap(),
        r#"{"id":"MyObject","position":{"cartesian":[0.0,0.0,0.0]}}"#
    );
}

#[test]
fn test_packet_dynamic_cartesian_position() {
    let packet = Packet::builder()
        .id("InternationalSpaceStation")
        .position(
            Position::builder()
                .interpolation_algorithm(InterpolationAlgorithm::Lagrange)
                .reference_frame(ReferenceFrame::Inertial)
                .cartesian(vec![
                    0.0,
                    -6668447.2211117,
                    1201886.45913705,
                    146789.427467256,
                    60.0,
                    -6711432.84684144,
                    919677.673492462,
                    -214047.552431458,
                ])
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert_eq!(
        packet.to_json_compact().unwrap(),
        concat!(
            r#"{"id":"InternationalSpaceStation","position":{"interpolationAlgorithm":"LAGRANGE","#,
            r#""referenceFrame":"INERTIAL","cartesian":[0.0,-6668447.2211117,1201886.45913705,"#,
            r#"146789.427467256,60.0,-6711432.84684144,919677.673492462,-214047.552431458]}}"#
        )
    );
}

#[test]
fn test_packet_custom_properties() {
    let ellipsoid = Ellipsoid::builder()
        .radii(
            EllipsoidRadii::builder()
                .cartesian(Cartesian3Value::new(vec![6378137.0, 6378137.0, 6356752.31414]).unwrap())
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    let properties = CustomProperties::new()
        .with("a", false)
        .and_then(|p| p.with("b", 1))
        .and_then(|p| p.with("c", "C"))
        .and_then(|p| p.with("ellipsoid", &ellipsoid))
        .unwrap();
    let packet = Packet::builder().id("id_00").properties(properties).build().unwrap();
    assert_eq!(
        packet.to_string(),
        r#"{
    "id": "id_00",
    "properties": {
        "a": false,
        "b": 1,
        "c": "C",
        "ellipsoid": {
            "radii": {
                "cartesian": [
                    6378137.0,
                    6378137.0,
                    6356752.31414
                ]
            }
        }
    }
}"#
    );
}

#[test]
fn test_packet_billboard() {
    let packet = Packet::builder()
        .id("id_00")
        .billboard(Billboard::builder().image("file://image.png").build().unwrap())
        .build()
        .unwrap();
    assert_eq!(
        packet.to_json_compact().unwrap(),
        r#"{"id":"id_00","billboard":{"image":"file://image.png"}}"#
    );
}

#[test]
fn test_packet_point() {
    let packet = Packet::builder()
        .id("id_00")
        .point(Point::builder().color(red()).build().unwrap())
        .build()
        .unwrap();
    assert_eq!(
        packet.to_string(),
        r#"{
    "id": "id_00",
    "point": {
        "color": {
            "rgba": [
                255.0,
                0.0,
                0.0,
                255.0
            ]
        }
    }
}"#
    );
}

#[test]
fn test_packet_polyline_materials() {
    let solid = PolylineMaterial::builder()
        .solid_color(SolidColorMaterial::builder().color(red()).build().unwrap())
        .build()
        .unwrap();
    assert_eq!(
        polyline_packet(solid).to_json_compact().unwrap(),
        format!(r#"{LINE_PREFIX}{{"solidColor":{{"color":{{"rgba":[255.0,0.0,0.0,255.0]}}}}}}}}}}"#)
    );

    let outline = PolylineMaterial::builder()
        .polyline_outline(
            PolylineOutline::builder()
                .color(red())
                .outline_color(red())
                .outline_width(2.0)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert_eq!(
        polyline_packet(outline).to_json_compact().unwrap(),
        format!(
            "{LINE_PREFIX}{}",
            concat!(
                r#"{"polylineOutline":{"color":{"rgba":[255.0,0.0,0.0,255.0]},"#,
                r#""outlineColor":{"rgba":[255.0,0.0,0.0,255.0]},"outlineWidth":2.0}}}}"#
            )
        )
    );

    let glow = PolylineMaterial::builder()
        .polyline_glow(
            PolylineGlow::builder()
                .color(red())
                .glow_power(0.2)
                .taper_power(0.5)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert_eq!(
        polyline_packet(glow).to_json_compact().unwrap(),
        format!(
            "{LINE_PREFIX}{}",
            r#"{"polylineGlow":{"color":{"rgba":[255.0,0.0,0.0,255.0]},"glowPower":0.2,"taperPower":0.5}}}}"#
        )
    );

    let arrow = PolylineMaterial::builder()
        .polyline_arrow(PolylineArrow::builder().color(red()).build().unwrap())
        .build()
        .unwrap();
    assert_eq!(
        polyline_packet(arrow).to_json_compact().unwrap(),
        format!(
            "{LINE_PREFIX}{}",
            r#"{"polylineArrow":{"color":{"rgba":[255.0,0.0,0.0,255.0]}}}}}"#
        )
    );

    let dash = PolylineMaterial::builder()
        .polyline_dash(PolylineDash::builder().color(red()).build().unwrap())
        .build()
        .unwrap();
    assert_eq!(
        polyline_packet(dash).to_json_compact().unwrap(),
        format!(
            "{LINE_PREFIX}{}",
            r#"{"polylineDash":{"color":{"rgba":[255.0,0.0,0.0,255.0]}}}}}"#
        )
    );
}

#[test]
fn test_packet_polygon() {
    let packet = Packet::builder()
        .id("id_00")
        .polygon(
            Polygon::builder()
                .positions(
                    PositionList::builder()
                        .cartographic_degrees([
                            -115.0, 37.0, 0.0, -115.0, 32.0, 0.0, -107.0, 33.0, 0.0, -102.0,
                            31.0, 0.0, -102.0, 35.0, 0.0,
                        ])
                        .build()
                        .unwrap(),
                )
                .granularity(1.0)
                .material(
                    Material::builder()
                        .solid_color(
                            SolidColorMaterial::builder()
                                .color(Color::rgb(255, 0, 0).unwrap())
                                .build()
                                .unwrap(),
                        )
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert_eq!(
        packet.to_json_compact().unwrap(),
        concat!(
            r#"{"id":"id_00","polygon":{"positions":{"cartographicDegrees":[-115.0,37.0,0.0,"#,
            r#"-115.0,32.0,0.0,-107.0,33.0,0.0,-102.0,31.0,0.0,-102.0,35.0,0.0]},"#,
            r#""granularity":1.0,"material":{"solidColor":{"color":{"rgba":[255.0,0.0,0.0,255.0]}}}}}"#
        )
    );
}

#[test]
fn test_different_availabilities() {
    let a = Packet::builder()
        .id("x")
        .availability("2019-03-20T12:00:00Z/2019-04-20T12:00:00Z")
        .build()
        .unwrap();
    let b = Packet::builder()
        .id("x")
        .availability(vec![TimeInterval::parse("2019-03-20T12:00:00Z/2020-04-20T12:00:00Z").unwrap()])
        .build()
        .unwrap();
    assert_ne!(a, b);
    assert_eq!(
        a.to_json_compact().unwrap(),
        r#"{"id":"x","availability":"2019-03-20T12:00:00Z/2019-04-20T12:00:00Z"}"#
    );
    assert_eq!(
        b.to_json_compact().unwrap(),
        r#"{"id":"x","availability":["2019-03-20T12:00:00Z/2020-04-20T12:00:00Z"]}"#
    );
}

#[test]
fn test_compact_round_trip_through_generic_json() {
    let packet = polyline_packet(
        PolylineMaterial::builder()
            .polyline_arrow(PolylineArrow::builder().color(red()).build().unwrap())
            .build()
            .unwrap(),
    );
    let compact = packet.to_json_compact().unwrap();
    let generic: serde_json::Value = serde_json::from_str(&compact).unwrap();
    let mut pretty = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut pretty, formatter);
    serde::Serialize::serialize(&generic, &mut ser).unwrap();
    assert_eq!(String::from_utf8(pretty).unwrap(), packet.to_string());
}

#[test]
fn test_position_interval_replaces_inner_interval() {
    let inner = Position::builder()
        .interval("2012-01-01T00:00:00Z/2012-01-02T00:00:00Z")
        .cartesian([1.0, 2.0, 3.0])
        .build()
        .unwrap();
    let outer = TimeInterval::parse("2012-01-01T00:00:00Z/2012-01-03T00:00:00Z").unwrap();
    let packet = Packet::builder()
        .id("a")
        .position(IntervalCollection::new(vec![IntervalValue::new(
            outer,
            PacketPosition::from(inner),
        )]))
        .build()
        .unwrap();

    let expected = concat!(
        r#"{"id":"a","position":[{"interval":"2012-01-01T00:00:00Z/2012-01-03T00:00:00Z","#,
        r#""cartesian":[1.0,2.0,3.0]}]}"#
    );
    let compact = packet.to_json_compact().unwrap();
    assert_eq!(compact, expected);
    assert_eq!(compact.matches("\"interval\"").count(), 1);

    let parsed = Packet::from_json_str(&compact).unwrap();
    assert_eq!(parsed.to_json_compact().unwrap(), expected);
}

#[test]
fn test_packet_position_forms() {
    let list = Packet::from_json(&json!({
        "id": "list",
        "position": {"cartographicDegrees": [1, 1, 0, 2, 2, 0], "references": ["a#p", "b#p"]},
    }))
    .unwrap();
    let value = list.position().and_then(Temporal::as_constant).unwrap();
    assert_eq!(value.as_list().and_then(PositionList::position_count), Some(2));

    let rings = Packet::from_json(&json!({
        "id": "rings",
        "position": {"cartesian": [[0, 0, 0, 1, 1, 1], [2, 2, 2]]},
    }))
    .unwrap();
    let value = rings.position().and_then(Temporal::as_constant).unwrap();
    assert_eq!(value.as_list_of_lists().and_then(PositionListOfLists::ring_positions), Some(vec![2, 1]));

    // six numbers are two positions, not one
    let pair = Packet::from_json(&json!({"id": "pair", "position": {"cartesian": [0, 0, 0, 1, 1, 1]}}))
        .unwrap();
    let value = pair.position().and_then(Temporal::as_constant).unwrap();
    assert!(value.as_list().is_some());

    let single = Packet::from_json(&json!({"id": "one", "position": {"cartesian": [0, 0, 0]}})).unwrap();
    let value = single.position().and_then(Temporal::as_constant).unwrap();
    assert!(value.as_position().is_some());

    let built = Packet::builder().id("built").position(line_positions()).build().unwrap();
    assert_eq!(
        built.to_json_compact().unwrap(),
        r#"{"id":"built","position":{"cartographicDegrees":[-75.0,43.0,500000.0,-125.0,43.0,500000.0]}}"#
    );
}

#[test]
fn test_packet_position_list_errors_surface() {
    let err = Packet::from_json(&json!({
        "id": "bad",
        "position": {"cartographicDegrees": [1, 1, 0, 2, 2, 0], "references": ["a#p"]},
    }))
    .unwrap_err();
    assert!(matches!(err, Error::ReferenceCountMismatch { expected: 2, actual: 1, .. }));

    let err = Packet::from_json(&json!({"id": "bad", "position": {"cartesian": [0, 0]}})).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[test]
fn test_non_finite_position_rejected() {
    let err = Position::builder().cartesian([f64::NAN, 0.0, 0.0]).build().unwrap_err();
    assert!(matches!(err, Error::InvalidValue(_)));
}

#[test]
fn test_packet_description_string_value() {
    let packet = Packet::from_json(&json!({
        "id": "id_00",
        "name": "Name",
        "description": {"string": "<strong>Description</strong>"},
    }))
    .unwrap();
    let plain = Packet::builder()
        .id("id_00")
        .name("Name")
        .description("<strong>Description</strong>")
        .build()
        .unwrap();
    assert_eq!(packet, plain);
    assert_eq!(
        packet.to_json_compact().unwrap(),
        r#"{"id":"id_00","name":"Name","description":"<strong>Description</strong>"}"#
    );
}

#[test]
fn test_clock_from_interval_value() {
    let clock = Clock::builder().current_time("2012-03-15T10:00:00Z").multiplier(60.0).build().unwrap();
    let interval = TimeInterval::parse("2012-03-15T10:00:00Z/2012-03-16T10:00:00Z").unwrap();
    let packet = Packet::builder()
        .id("document")
        .clock(IntervalValue::new(interval, clock))
        .build()
        .unwrap();
    assert_eq!(
        packet.to_json_compact().unwrap(),
        concat!(
            r#"{"id":"document","clock":{"interval":"2012-03-15T10:00:00Z/2012-03-16T10:00:00Z","#,
            r#""currentTime":"2012-03-15T10:00:00Z","multiplier":60.0}}"#
        )
    );
}
