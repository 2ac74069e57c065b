//! Text labels.

use crate::core::object::czml_object;
use crate::core::{Cartesian2Value, HorizontalOrigin, LabelStyle, VerticalOrigin};

use super::appearance::Color;
use super::billboard::EyeOffset;

czml_object! {
    /// A string of text, positioned by the packet's `position`.
    pub struct Label / LabelBuilder {
        show("show"): temporal<bool>,
        text("text"): temporal<String>,
        /// CSS font, e.g. `20px sans-serif`.
        font("font"): temporal<String>,
        style("style"): temporal<LabelStyle>,
        scale("scale"): temporal<f64>,
        show_background("showBackground"): temporal<bool>,
        background_color("backgroundColor"): temporal<Color>,
        /// Padding around the background in pixels, `[x, y]`.
        background_padding("backgroundPadding"): temporal<Cartesian2Value>,
        fill_color("fillColor"): temporal<Color>,
        outline_color("outlineColor"): temporal<Color>,
        outline_width("outlineWidth"): temporal<f64>,
        pixel_offset("pixelOffset"): temporal<Cartesian2Value>,
        eye_offset("eyeOffset"): temporal<EyeOffset>,
        horizontal_origin("horizontalOrigin"): temporal<HorizontalOrigin>,
        vertical_origin("verticalOrigin"): temporal<VerticalOrigin>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ToCzml;

    #[test]
    fn test_label_colors() {
        let label = Label::builder()
            .font("20px sans-serif")
            .fill_color(Color::builder().rgbaf([0.2, 0.3, 0.4, 1.0]).build().unwrap())
            .outline_color(Color::builder().rgba([0.0, 233.0, 255.0, 2.0]).build().unwrap())
            .outline_width(2.0)
            .build()
            .unwrap();
        assert_eq!(
            label.to_json_pretty(4).unwrap(),
            r#"{
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
}"#
        );
    }

    #[test]
    fn test_empty_label() {
        let label = Label::builder().build().unwrap();
        assert_eq!(label.to_json_compact().unwrap(), "{}");
        assert!(label.present_fields().is_empty());
    }
}
