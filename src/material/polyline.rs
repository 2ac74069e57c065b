//! Polyline materials.

use crate::core::object::czml_object;
use crate::geom::Color;

use super::surface::{CheckerboardMaterial, GridMaterial, ImageMaterial, SolidColorMaterial, StripeMaterial};

czml_object! {
    /// How a polyline is colored or shaded.
    ///
    /// Accepts the surface materials as well as the line-specific ones.
    pub struct PolylineMaterial / PolylineMaterialBuilder {
        solid_color("solidColor"): temporal<SolidColorMaterial>,
        image("image"): temporal<ImageMaterial>,
        grid("grid"): temporal<GridMaterial>,
        stripe("stripe"): temporal<StripeMaterial>,
        checkerboard("checkerboard"): temporal<CheckerboardMaterial>,
        polyline_dash("polylineDash"): temporal<PolylineDash>,
        polyline_outline("polylineOutline"): temporal<PolylineOutline>,
        polyline_arrow("polylineArrow"): temporal<PolylineArrow>,
        polyline_glow("polylineGlow"): temporal<PolylineGlow>,
    }
}

czml_object! {
    /// A line with an outline.
    pub struct PolylineOutline / PolylineOutlineBuilder {
        color("color"): temporal<Color>,
        outline_color("outlineColor"): temporal<Color>,
        /// Outline width in pixels.
        outline_width("outlineWidth"): temporal<f64>,
    }
}

czml_object! {
    /// A glowing line.
    pub struct PolylineGlow / PolylineGlowBuilder {
        color("color"): temporal<Color>,
        /// Strength of the glow, as a fraction of the total line width.
        glow_power("glowPower"): temporal<f64>,
        /// Strength of the tapering effect, 1.0 for none.
        taper_power("taperPower"): temporal<f64>,
    }
}

czml_object! {
    /// A line with an arrow head at its end.
    pub struct PolylineArrow / PolylineArrowBuilder {
        color("color"): temporal<Color>,
    }
}

czml_object! {
    /// A dashed line.
    pub struct PolylineDash / PolylineDashBuilder {
        color("color"): temporal<Color>,
        gap_color("gapColor"): temporal<Color>,
        /// Length of one dash cycle in pixels.
        dash_length("dashLength"): temporal<f64>,
        /// 16-bit mask, one bit per dash segment.
        dash_pattern("dashPattern"): temporal<i64>,
    }
}
