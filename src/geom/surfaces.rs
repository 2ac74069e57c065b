//! Graphics defined by lists of positions: corridors, polygons, polylines
//! and walls, plus cartographic rectangles.

use crate::core::object::czml_object;
use crate::core::rules::exactly_one_of;
use crate::core::{InterpolationAlgorithm, ReferenceValue, Timestamp};
use crate::material::{Material, PolylineMaterial};

use super::appearance::{
    ArcType, ClassificationType, Color, CornerType, DistanceDisplayCondition, HeightReference,
    ShadowMode,
};
use super::position::{PositionList, PositionListOfLists};

czml_object! {
    /// A shape defined by a centerline and width.
    pub struct Corridor / CorridorBuilder {
        positions("positions", required): temporal<PositionList>,
        show("show"): temporal<bool>,
        width("width", required): temporal<f64>,
        height("height"): temporal<f64>,
        height_reference("heightReference"): temporal<HeightReference>,
        extruded_height("extrudedHeight"): temporal<f64>,
        extruded_height_reference("extrudedHeightReference"): temporal<HeightReference>,
        corner_type("cornerType"): temporal<CornerType>,
        granularity("granularity"): temporal<f64>,
        fill("fill"): temporal<bool>,
        material("material"): temporal<Material>,
        outline("outline"): temporal<bool>,
        outline_color("outlineColor"): temporal<Color>,
        outline_width("outlineWidth"): temporal<f64>,
        shadows("shadows"): temporal<ShadowMode>,
        distance_display_condition("distanceDisplayCondition"): temporal<DistanceDisplayCondition>,
        classification_type("classificationType"): temporal<ClassificationType>,
        z_index("zIndex"): temporal<i64>,
    }
}

czml_object! {
    /// A closed figure on the surface of the globe, optionally with holes.
    pub struct Polygon / PolygonBuilder {
        positions("positions", required): temporal<PositionList>,
        show("show"): temporal<bool>,
        arc_type("arcType"): temporal<ArcType>,
        granularity("granularity"): temporal<f64>,
        material("material"): temporal<Material>,
        shadows("shadows"): temporal<ShadowMode>,
        distance_display_condition("distanceDisplayCondition"): temporal<DistanceDisplayCondition>,
        classification_type("classificationType"): temporal<ClassificationType>,
        z_index("zIndex"): temporal<i64>,
        /// One position list per hole.
        holes("holes"): temporal<PositionListOfLists>,
        outline_color("outlineColor"): temporal<Color>,
        outline("outline"): temporal<bool>,
        outline_width("outlineWidth"): temporal<f64>,
        extruded_height("extrudedHeight"): temporal<f64>,
        extruded_height_reference("extrudedHeightReference"): temporal<HeightReference>,
        per_position_height("perPositionHeight"): temporal<bool>,
        height("height"): temporal<f64>,
        height_reference("heightReference"): temporal<HeightReference>,
        st_rotation("stRotation"): temporal<f64>,
        fill("fill"): temporal<bool>,
        close_top("closeTop"): temporal<bool>,
        close_bottom("closeBottom"): temporal<bool>,
    }
}

czml_object! {
    /// A line through a list of positions.
    pub struct Polyline / PolylineBuilder {
        show("show"): temporal<bool>,
        positions("positions", required): temporal<PositionList>,
        arc_type("arcType"): temporal<ArcType>,
        width("width"): temporal<f64>,
        granularity("granularity"): temporal<f64>,
        material("material"): temporal<PolylineMaterial>,
        follow_surface("followSurface"): temporal<bool>,
        shadows("shadows"): temporal<ShadowMode>,
        /// Material used where the line is hidden by terrain.
        depth_fail_material("depthFailMaterial"): temporal<PolylineMaterial>,
        distance_display_condition("distanceDisplayCondition"): temporal<DistanceDisplayCondition>,
        clamp_to_ground("clampToGround"): temporal<bool>,
        classification_type("classificationType"): temporal<ClassificationType>,
        z_index("zIndex"): temporal<i64>,
    }
}

czml_object! {
    /// West, south, east and north bounds of a cartographic rectangle.
    pub struct RectangleCoordinates / RectangleCoordinatesBuilder {
        delete("delete", deletes): value<bool>,
        epoch("epoch"): temporal<Timestamp>,
        interpolation_algorithm("interpolationAlgorithm"): temporal<InterpolationAlgorithm>,
        interpolation_degree("interpolationDegree"): temporal<i64>,
        /// Bounds in radians.
        wsen("wsen"): temporal<Vec<f64>>,
        /// Bounds in degrees.
        wsen_degrees("wsenDegrees"): temporal<Vec<f64>>,
        reference("reference"): value<ReferenceValue>,
    }
    check(r) {
        exactly_one_of(RectangleCoordinates::NAME, &[
            ("wsen", r.wsen.is_some()),
            ("wsenDegrees", r.wsen_degrees.is_some()),
            ("reference", r.reference.is_some()),
        ])
    }
}

czml_object! {
    /// A cartographic rectangle that follows the curvature of the globe.
    pub struct Rectangle / RectangleBuilder {
        show("show"): temporal<bool>,
        coordinates("coordinates"): temporal<RectangleCoordinates>,
        fill("fill"): temporal<bool>,
        material("material"): temporal<Material>,
    }
}

czml_object! {
    /// A wall draped along a list of positions.
    pub struct Wall / WallBuilder {
        show("show"): temporal<bool>,
        positions("positions", required): temporal<PositionList>,
        /// Heights of the wall bottom, one per position.
        minimum_heights("minimumHeights"): temporal<Vec<f64>>,
        /// Heights of the wall top, one per position.
        maximum_heights("maximumHeights"): temporal<Vec<f64>>,
        granularity("granularity"): temporal<f64>,
        fill("fill"): temporal<bool>,
        material("material"): temporal<Material>,
        outline("outline"): temporal<bool>,
        outline_color("outlineColor"): temporal<Color>,
        outline_width("outlineWidth"): temporal<f64>,
        shadows("shadows"): temporal<ShadowMode>,
        distance_display_condition("distanceDisplayCondition"): temporal<DistanceDisplayCondition>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArcTypes, ToCzml};
    use crate::material::SolidColorMaterial;
    use crate::util::Error;
    use serde_json::json;

    fn degrees(values: Vec<f64>) -> PositionList {
        PositionList::builder().cartographic_degrees(values).build().unwrap()
    }

    #[test]
    fn test_polyline_solid_color() {
        let material = PolylineMaterial::builder()
            .solid_color(
                SolidColorMaterial::builder()
                    .color(Color::rgb(255, 0, 0).unwrap())
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let line = Polyline::builder()
            .positions(degrees(vec![-75.0, 43.0, 500000.0, -125.0, 43.0, 500000.0]))
            .material(material)
            .arc_type(ArcTypes::Rhumb)
            .build()
            .unwrap();
        assert_eq!(
            line.to_json_compact().unwrap(),
            concat!(
                r#"{"positions":{"cartographicDegrees":[-75.0,43.0,500000.0,-125.0,43.0,500000.0]},"#,
                r#""arcType":{"arcType":"RHUMB"},"#,
                r#""material":{"solidColor":{"color":{"rgba":[255.0,0.0,0.0,255.0]}}}}"#
            )
        );
    }

    #[test]
    fn test_polyline_requires_positions() {
        let err = Polyline::builder().width(2.0).build().unwrap_err();
        assert!(matches!(err, Error::MissingField { object: "Polyline", field: "positions" }));
    }

    #[test]
    fn test_polygon_with_holes() {
        let holes = PositionListOfLists::builder()
            .cartographic_degrees(vec![vec![-110.0, 34.0, 0.0, -108.0, 34.0, 0.0, -109.0, 33.5, 0.0]])
            .build()
            .unwrap();
        let polygon = Polygon::builder()
            .positions(degrees(vec![
                -115.0, 37.0, 0.0, -115.0, 32.0, 0.0, -107.0, 33.0, 0.0, -102.0, 31.0, 0.0,
                -102.0, 35.0, 0.0,
            ]))
            .granularity(1.0)
            .holes(holes)
            .build()
            .unwrap();
        assert_eq!(
            polygon.present_fields(),
            vec!["positions", "granularity", "holes"]
        );
    }

    #[test]
    fn test_corridor_from_json() {
        let corridor = Corridor::from_json(&json!({
            "positions": {"cartographicDegrees": [0, 0, 0]},
            "width": 2,
            "cornerType": {"cornerType": "BEVELED"},
        }))
        .unwrap();
        assert_eq!(
            corridor.to_json_compact().unwrap(),
            r#"{"positions":{"cartographicDegrees":[0.0,0.0,0.0]},"width":2.0,"cornerType":{"cornerType":"BEVELED"}}"#
        );

        let err = Corridor::from_json(&json!({"positions": {"cartographicDegrees": [0, 0, 0]}}))
            .unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "width", .. }));
    }

    #[test]
    fn test_rectangle_coordinates() {
        let err = RectangleCoordinates::builder()
            .wsen([0.0, 0.0, 1.0, 1.0])
            .wsen_degrees([0.0, 0.0, 1.0, 1.0])
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "RectangleCoordinates: only one of wsen, wsenDegrees or reference must be given (2 provided)"
        );

        let rect = Rectangle::builder()
            .coordinates(RectangleCoordinates::builder().wsen_degrees([-120.0, 40.0, -119.0, 41.0]).build().unwrap())
            .fill(true)
            .build()
            .unwrap();
        assert_eq!(
            rect.to_json_compact().unwrap(),
            r#"{"coordinates":{"wsenDegrees":[-120.0,40.0,-119.0,41.0]},"fill":true}"#
        );
    }

    #[test]
    fn test_wall_heights() {
        let wall = Wall::builder()
            .positions(degrees(vec![0.0, 0.0, 0.0, 1.0, 1.0, 0.0]))
            .minimum_heights([0.0, 0.0])
            .maximum_heights([100.0, 200.0])
            .build()
            .unwrap();
        assert_eq!(
            wall.to_json_compact().unwrap(),
            r#"{"positions":{"cartographicDegrees":[0.0,0.0,0.0,1.0,1.0,0.0]},"minimumHeights":[0.0,0.0],"maximumHeights":[100.0,200.0]}"#
        );
    }
}
