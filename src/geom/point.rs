//! Points and paths.

use crate::core::object::czml_object;
use crate::material::PolylineMaterial;

use super::appearance::{Color, DistanceDisplayCondition, HeightReference, NearFarScalar};

czml_object! {
    /// A viewport-aligned circle.
    pub struct Point / PointBuilder {
        show("show"): temporal<bool>,
        /// Diameter in pixels.
        pixel_size("pixelSize"): temporal<f64>,
        height_reference("heightReference"): temporal<HeightReference>,
        color("color"): temporal<Color>,
        outline_color("outlineColor"): temporal<Color>,
        outline_width("outlineWidth"): temporal<f64>,
        scale_by_distance("scaleByDistance"): temporal<NearFarScalar>,
        translucency_by_distance("translucencyByDistance"): temporal<NearFarScalar>,
        distance_display_condition("distanceDisplayCondition"): temporal<DistanceDisplayCondition>,
        disable_depth_test_distance("disableDepthTestDistance"): temporal<f64>,
    }
}

czml_object! {
    /// A polyline traced by the motion of the packet's `position` over time.
    pub struct Path / PathBuilder {
        show("show"): temporal<bool>,
        /// Seconds ahead of the current time to draw.
        lead_time("leadTime"): temporal<f64>,
        /// Seconds behind the current time to draw.
        trail_time("trailTime"): temporal<f64>,
        width("width"): temporal<f64>,
        resolution("resolution"): temporal<f64>,
        material("material"): temporal<PolylineMaterial>,
        distance_display_condition("distanceDisplayCondition"): temporal<DistanceDisplayCondition>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ToCzml;
    use serde_json::json;

    #[test]
    fn test_point_color() {
        let p = Point::builder().color(Color::rgb(255, 0, 0).unwrap()).build().unwrap();
        assert_eq!(
            p.to_json_compact().unwrap(),
            r#"{"color":{"rgba":[255.0,0.0,0.0,255.0]}}"#
        );
    }

    #[test]
    fn test_path_from_json() {
        let path = Path::from_json(&json!({
            "leadTime": 0,
            "trailTime": 3600,
            "material": {"polylineGlow": {"glowPower": 0.2}},
        }))
        .unwrap();
        assert_eq!(
            path.to_json_compact().unwrap(),
            r#"{"leadTime":0.0,"trailTime":3600.0,"material":{"polylineGlow":{"glowPower":0.2}}}"#
        );
    }
}
