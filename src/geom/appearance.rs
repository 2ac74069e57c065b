//! Shared appearance composites: colors, distance scalars, display
//! conditions and the enumeration wrappers graphics refer to.

use crate::core::object::czml_object;
use crate::core::rules::exactly_one_of;
use crate::core::{
    ArcTypes, ClassificationTypes, ColorBlendModes, CornerTypes, DistanceDisplayConditionValue,
    HeightReferences, IntoTemporal, InterpolationAlgorithm, NearFarScalarValue, ReferenceValue,
    RgbaValue, RgbafValue, ShadowModes, Temporal, Timestamp,
};
use crate::util::Result;

czml_object! {
    /// A color, as integer `rgba` or float `rgbaf` channels.
    pub struct Color / ColorBuilder {
        delete("delete", deletes): value<bool>,
        epoch("epoch"): temporal<Timestamp>,
        interpolation_algorithm("interpolationAlgorithm"): temporal<InterpolationAlgorithm>,
        interpolation_degree("interpolationDegree"): temporal<i64>,
        /// Channels 0 to 255.
        rgba("rgba"): temporal<RgbaValue>,
        /// Channels 0 to 1.
        rgbaf("rgbaf"): temporal<RgbafValue>,
        reference("reference"): value<ReferenceValue>,
    }
    check(c) {
        exactly_one_of(Color::NAME, &[
            ("rgba", c.rgba.is_some()),
            ("rgbaf", c.rgbaf.is_some()),
            ("reference", c.reference.is_some()),
        ])
    }
}

impl Color {
    /// Opaque integer color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Result<Self> {
        Self::builder().rgba(RgbaValue::rgb(r, g, b)).build()
    }
}

czml_object! {
    /// A value that scales with distance from the camera.
    pub struct NearFarScalar / NearFarScalarBuilder {
        delete("delete", deletes): value<bool>,
        epoch("epoch"): temporal<Timestamp>,
        interpolation_algorithm("interpolationAlgorithm"): temporal<InterpolationAlgorithm>,
        interpolation_degree("interpolationDegree"): temporal<i64>,
        near_far_scalar("nearFarScalar"): temporal<NearFarScalarValue>,
        reference("reference"): value<ReferenceValue>,
    }
    check(n) {
        exactly_one_of(NearFarScalar::NAME, &[
            ("nearFarScalar", n.near_far_scalar.is_some()),
            ("reference", n.reference.is_some()),
        ])
    }
}

czml_object! {
    /// The camera distance range over which a graphic is shown.
    pub struct DistanceDisplayCondition / DistanceDisplayConditionBuilder {
        delete("delete", deletes): value<bool>,
        epoch("epoch"): temporal<Timestamp>,
        interpolation_algorithm("interpolationAlgorithm"): temporal<InterpolationAlgorithm>,
        interpolation_degree("interpolationDegree"): temporal<i64>,
        distance_display_condition("distanceDisplayCondition"): temporal<DistanceDisplayConditionValue>,
        reference("reference"): value<ReferenceValue>,
    }
    check(d) {
        exactly_one_of(DistanceDisplayCondition::NAME, &[
            ("distanceDisplayCondition", d.distance_display_condition.is_some()),
            ("reference", d.reference.is_some()),
        ])
    }
}

// Enumeration wrappers: `{"<property>": "VALUE"}` or `{"reference": ...}`.
// A bare enumeration name is accepted as shorthand on input.
macro_rules! enum_wrapper {
    ($(#[$meta:meta])* $name:ident / $builder:ident, $field:ident($wire:literal): $enum:ident) => {
        czml_object! {
            $(#[$meta])*
            pub struct $name / $builder {
                delete("delete", deletes): value<bool>,
                $field($wire): temporal<$enum>,
                reference("reference"): value<ReferenceValue>,
            }
            check(this) {
                exactly_one_of($name::NAME, &[
                    ($wire, this.$field.is_some()),
                    ("reference", this.reference.is_some()),
                ])
            }
            shorthand(field, input) {
                let value = <$enum as $crate::core::CzmlValue>::coerce(field, input)?;
                $name::builder().$field(value).build()
            }
        }

        impl From<$enum> for $name {
            fn from(value: $enum) -> Self {
                Self {
                    $field: Some(Temporal::Constant(value)),
                    ..Self::default()
                }
            }
        }

        impl IntoTemporal<$name> for $enum {
            fn into_temporal(self) -> Result<Temporal<$name>> {
                Ok(Temporal::Constant(self.into()))
            }
        }
    };
}

enum_wrapper! {
    /// How a polyline follows the globe between positions.
    ArcType / ArcTypeBuilder, arc_type("arcType"): ArcTypes
}

enum_wrapper! {
    /// Whether a graphic casts or receives shadows.
    ShadowMode / ShadowModeBuilder, shadow_mode("shadowMode"): ShadowModes
}

enum_wrapper! {
    /// Whether a ground graphic classifies terrain, 3D tiles, or both.
    ClassificationType / ClassificationTypeBuilder, classification_type("classificationType"): ClassificationTypes
}

enum_wrapper! {
    /// What a graphic's height is relative to.
    HeightReference / HeightReferenceBuilder, height_reference("heightReference"): HeightReferences
}

enum_wrapper! {
    /// How a model's color is blended with its source color.
    ColorBlendMode / ColorBlendModeBuilder, color_blend_mode("colorBlendMode"): ColorBlendModes
}

enum_wrapper! {
    /// Corner style of a corridor.
    CornerType / CornerTypeBuilder, corner_type("cornerType"): CornerTypes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CzmlValue, ToCzml};
    use crate::util::Error;
    use serde_json::json;

    #[test]
    fn test_color_rgba_serializes_floats() {
        let c = Color::builder().rgba([0.0, 233.0, 255.0, 2.0]).build().unwrap();
        assert_eq!(c.to_json_compact().unwrap(), r#"{"rgba":[0.0,233.0,255.0,2.0]}"#);
        assert_eq!(
            Color::rgb(255, 0, 0).unwrap().to_json_compact().unwrap(),
            r#"{"rgba":[255.0,0.0,0.0,255.0]}"#
        );
    }

    #[test]
    fn test_color_channel_range() {
        let err = Color::builder().rgba([0.0, 0.0, 300.0, 1.0]).build().unwrap_err();
        assert!(matches!(err, Error::InvalidValue(_)));
        let err = Color::builder().rgbaf([0.2, 0.3, 1.4, 1.0]).build().unwrap_err();
        assert!(matches!(err, Error::InvalidValue(_)));
    }

    #[test]
    fn test_color_rejects_three_channels() {
        let err = Color::builder().rgba(vec![255.0, 0.0, 0.0]).build().unwrap_err();
        assert_eq!(err.to_string(), "RgbaValue: expected 4 or N * 5 values, got 3");
    }

    #[test]
    fn test_color_exactly_one_of() {
        let err = Color::builder()
            .rgba([1.0, 2.0, 3.0, 4.0])
            .rgbaf([0.1, 0.2, 0.3, 0.4])
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Color: only one of rgba, rgbaf or reference must be given (2 provided)"
        );
    }

    #[test]
    fn test_sampled_color_intervals() {
        let c = Color::from_json(&json!({
            "rgba": [0, 255, 0, 0, 255, 10, 0, 255, 0, 255]
        }))
        .unwrap();
        let rgba = c.rgba().and_then(|t| t.as_constant()).unwrap();
        assert_eq!(rgba.samples().count(), 2);
    }

    #[test]
    fn test_enum_wrapper() {
        let h: HeightReference = HeightReferences::ClampToGround.into();
        assert_eq!(
            h.to_json_compact().unwrap(),
            r#"{"heightReference":"CLAMP_TO_GROUND"}"#
        );

        // bare name shorthand
        let h = HeightReference::coerce("heightReference", &json!("RELATIVE_TO_GROUND")).unwrap();
        assert_eq!(
            h.height_reference().and_then(|t| t.as_constant()),
            Some(&HeightReferences::RelativeToGround)
        );

        let err = ShadowMode::builder().build().unwrap_err();
        assert!(matches!(err, Error::ExactlyOneOf { provided: 0, .. }));

        let d = CornerType::builder().delete(true).build().unwrap();
        assert_eq!(d.to_json_compact().unwrap(), r#"{"delete":true}"#);
    }

    #[test]
    fn test_near_far_and_display_condition() {
        let n = NearFarScalar::builder()
            .near_far_scalar([150.0, 2.0, 15000000.0, 0.5])
            .build()
            .unwrap();
        assert_eq!(
            n.to_json_compact().unwrap(),
            r#"{"nearFarScalar":[150.0,2.0,15000000.0,0.5]}"#
        );

        let err = DistanceDisplayCondition::builder()
            .distance_display_condition(vec![1.0, 2.0, 3.0, 4.0])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { actual: 4, .. }));
    }
}
