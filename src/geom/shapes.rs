//! Closed shapes placed at the packet's position: boxes, cylinders,
//! ellipses and ellipsoids.

use crate::core::object::czml_object;
use crate::core::rules::exactly_one_of;
use crate::core::{Cartesian3Value, InterpolationAlgorithm, ReferenceValue, Timestamp};
use crate::material::Material;

use super::appearance::{
    ClassificationType, Color, DistanceDisplayCondition, HeightReference, ShadowMode,
};

czml_object! {
    /// Width, depth and height of a box.
    pub struct BoxDimensions / BoxDimensionsBuilder {
        delete("delete", deletes): value<bool>,
        epoch("epoch"): temporal<Timestamp>,
        interpolation_algorithm("interpolationAlgorithm"): temporal<InterpolationAlgorithm>,
        interpolation_degree("interpolationDegree"): temporal<i64>,
        cartesian("cartesian"): temporal<Cartesian3Value>,
        reference("reference"): value<ReferenceValue>,
    }
    check(d) {
        exactly_one_of(BoxDimensions::NAME, &[
            ("cartesian", d.cartesian.is_some()),
            ("reference", d.reference.is_some()),
        ])
    }
}

czml_object! {
    /// A closed rectangular cuboid, the packet's `box` member.
    pub struct BoxGraphics / BoxGraphicsBuilder {
        show("show"): temporal<bool>,
        dimensions("dimensions", required): temporal<BoxDimensions>,
        height_reference("heightReference"): temporal<HeightReference>,
        fill("fill"): temporal<bool>,
        material("material"): temporal<Material>,
        outline("outline"): temporal<bool>,
        outline_color("outlineColor"): temporal<Color>,
        outline_width("outlineWidth"): temporal<f64>,
        shadows("shadows"): temporal<ShadowMode>,
        distance_display_condition("distanceDisplayCondition"): temporal<DistanceDisplayCondition>,
    }
}

czml_object! {
    /// Radii of an ellipsoid along its three axes.
    pub struct EllipsoidRadii / EllipsoidRadiiBuilder {
        delete("delete", deletes): value<bool>,
        epoch("epoch"): temporal<Timestamp>,
        interpolation_algorithm("interpolationAlgorithm"): temporal<InterpolationAlgorithm>,
        interpolation_degree("interpolationDegree"): temporal<i64>,
        cartesian("cartesian"): temporal<Cartesian3Value>,
        reference("reference"): value<ReferenceValue>,
    }
    check(r) {
        exactly_one_of(EllipsoidRadii::NAME, &[
            ("cartesian", r.cartesian.is_some()),
            ("reference", r.reference.is_some()),
        ])
    }
}

czml_object! {
    /// A closed quadric surface, optionally cut by clock and cone angles.
    pub struct Ellipsoid / EllipsoidBuilder {
        radii("radii", required): temporal<EllipsoidRadii>,
        inner_radii("innerRadii"): temporal<EllipsoidRadii>,
        minimum_clock("minimumClock"): temporal<f64>,
        maximum_clock("maximumClock"): temporal<f64>,
        minimum_cone("minimumCone"): temporal<f64>,
        maximum_cone("maximumCone"): temporal<f64>,
        show("show"): temporal<bool>,
        height_reference("heightReference"): temporal<HeightReference>,
        fill("fill"): temporal<bool>,
        material("material"): temporal<Material>,
        outline("outline"): temporal<bool>,
        outline_color("outlineColor"): temporal<Color>,
        outline_width("outlineWidth"): temporal<f64>,
        stack_partitions("stackPartitions"): temporal<i64>,
        slice_partitions("slicePartitions"): temporal<i64>,
        /// Samples per outline ring.
        subdivisions("subdivisions"): temporal<i64>,
        shadows("shadows"): temporal<ShadowMode>,
        distance_display_condition("distanceDisplayCondition"): temporal<DistanceDisplayCondition>,
    }
}

czml_object! {
    /// A cylinder, truncated cone, or cone.
    pub struct Cylinder / CylinderBuilder {
        length("length", required): temporal<f64>,
        show("show"): temporal<bool>,
        top_radius("topRadius", required): temporal<f64>,
        bottom_radius("bottomRadius", required): temporal<f64>,
        height_reference("heightReference"): temporal<HeightReference>,
        fill("fill"): temporal<bool>,
        material("material"): temporal<Material>,
        outline("outline"): temporal<bool>,
        outline_color("outlineColor"): temporal<Color>,
        outline_width("outlineWidth"): temporal<f64>,
        number_of_vertical_lines("numberOfVerticalLines"): temporal<i64>,
        slices("slices"): temporal<i64>,
        shadows("shadows"): temporal<ShadowMode>,
        distance_display_condition("distanceDisplayCondition"): temporal<DistanceDisplayCondition>,
    }
}

czml_object! {
    /// A closed curve on the surface of the globe.
    pub struct Ellipse / EllipseBuilder {
        semi_major_axis("semiMajorAxis", required): temporal<f64>,
        semi_minor_axis("semiMinorAxis", required): temporal<f64>,
        show("show"): temporal<bool>,
        height("height"): temporal<f64>,
        height_reference("heightReference"): temporal<HeightReference>,
        extruded_height("extrudedHeight"): temporal<f64>,
        extruded_height_reference("extrudedHeightReference"): temporal<HeightReference>,
        rotation("rotation"): temporal<f64>,
        st_rotation("stRotation"): temporal<f64>,
        granularity("granularity"): temporal<f64>,
        fill("fill"): temporal<bool>,
        material("material"): temporal<Material>,
        outline("outline"): temporal<bool>,
        outline_color("outlineColor"): temporal<Color>,
        outline_width("outlineWidth"): temporal<f64>,
        number_of_vertical_lines("numberOfVerticalLines"): temporal<i64>,
        shadows("shadows"): temporal<ShadowMode>,
        distance_display_condition("distanceDisplayCondition"): temporal<DistanceDisplayCondition>,
        classification_type("classificationType"): temporal<ClassificationType>,
        z_index("zIndex"): temporal<i64>,
    }
}
