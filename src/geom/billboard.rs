//! Billboards: viewport-aligned images.

use crate::core::object::czml_object;
use crate::core::rules::exactly_one_of;
use crate::core::value::number_list;
use crate::core::{
    Cartesian2Value, Cartesian3Value, HorizontalOrigin, IntoTemporal, ReferenceValue, Temporal,
    Uri, VerticalOrigin,
};
use crate::util::Result;

use super::appearance::{Color, DistanceDisplayCondition, HeightReference, NearFarScalar};

czml_object! {
    /// An offset in eye coordinates: X right, Y up, Z into the screen.
    ///
    /// A bare number list is accepted in place of the object.
    pub struct EyeOffset / EyeOffsetBuilder {
        delete("delete", deletes): value<bool>,
        cartesian("cartesian"): temporal<Cartesian3Value>,
        reference("reference"): value<ReferenceValue>,
    }
    check(e) {
        exactly_one_of(EyeOffset::NAME, &[
            ("cartesian", e.cartesian.is_some()),
            ("reference", e.reference.is_some()),
        ])
    }
    shorthand(field, input) {
        EyeOffset::from_numbers(number_list(field, input)?)
    }
}

impl EyeOffset {
    fn from_numbers(values: Vec<f64>) -> Result<Self> {
        Self::builder().cartesian(values).build()
    }
}

impl IntoTemporal<EyeOffset> for Vec<f64> {
    fn into_temporal(self) -> Result<Temporal<EyeOffset>> {
        EyeOffset::from_numbers(self).map(Temporal::Constant)
    }
}

impl<const N: usize> IntoTemporal<EyeOffset> for [f64; N] {
    fn into_temporal(self) -> Result<Temporal<EyeOffset>> {
        EyeOffset::from_numbers(self.to_vec()).map(Temporal::Constant)
    }
}

czml_object! {
    /// A billboard, or viewport-aligned image, positioned by the packet's
    /// `position`.
    pub struct Billboard / BillboardBuilder {
        show("show"): temporal<bool>,
        /// Image URI or data URI.
        image("image", required): temporal<Uri>,
        scale("scale"): temporal<f64>,
        pixel_offset("pixelOffset"): temporal<Cartesian2Value>,
        eye_offset("eyeOffset"): temporal<EyeOffset>,
        horizontal_origin("horizontalOrigin"): temporal<HorizontalOrigin>,
        vertical_origin("verticalOrigin"): temporal<VerticalOrigin>,
        height_reference("heightReference"): temporal<HeightReference>,
        color("color"): temporal<Color>,
        /// Rotation in radians, counter-clockwise from the up direction.
        rotation("rotation"): temporal<f64>,
        size_in_meters("sizeInMeters"): temporal<bool>,
        width("width"): temporal<f64>,
        height("height"): temporal<f64>,
        scale_by_distance("scaleByDistance"): temporal<NearFarScalar>,
        translucency_by_distance("translucencyByDistance"): temporal<NearFarScalar>,
        pixel_offset_scale_by_distance("pixelOffsetScaleByDistance"): temporal<NearFarScalar>,
        distance_display_condition("distanceDisplayCondition"): temporal<DistanceDisplayCondition>,
        disable_depth_test_distance("disableDepthTestDistance"): temporal<f64>,
    }
}
