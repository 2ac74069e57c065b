//! Position-like composites: where an object is, how it is oriented, and
//! where the camera should look at it from.

use crate::core::object::czml_object;
use crate::core::rules::{
    at_least_one_of, check_nested_reference_counts, check_reference_count, exactly_one_of,
};
use crate::core::{
    Cartesian3ListOfListsValue, Cartesian3ListValue, Cartesian3Value, Cartesian3VelocityValue,
    CartographicDegreesListOfListsValue, CartographicDegreesListValue, CartographicDegreesValue,
    CartographicRadiansListOfListsValue, CartographicRadiansListValue, CartographicRadiansValue,
    CoordinateList, CoordinateListOfLists, InterpolationAlgorithm, PositionKind,
    ReferenceFrame, ReferenceListOfListsValue, ReferenceListValue, ReferenceValue, Temporal,
    TimeInterval, Timestamp, UnitQuaternionValue,
};
use crate::util::Result;

czml_object! {
    /// The position of an object in the world.
    ///
    /// Exactly one of `cartesian`, `cartographicRadians`, `cartographicDegrees`,
    /// `cartesianVelocity` or `reference` must be given.
    pub struct Position / PositionBuilder {
        delete("delete", deletes): value<bool>,
        /// Epoch for sample times given as seconds.
        epoch("epoch"): temporal<Timestamp>,
        interpolation_algorithm("interpolationAlgorithm"): temporal<InterpolationAlgorithm>,
        interpolation_degree("interpolationDegree"): temporal<i64>,
        reference_frame("referenceFrame"): temporal<ReferenceFrame>,
        cartesian("cartesian"): temporal<Cartesian3Value>,
        cartographic_radians("cartographicRadians"): temporal<CartographicRadiansValue>,
        cartographic_degrees("cartographicDegrees"): temporal<CartographicDegreesValue>,
        /// Position and velocity as `[x, y, z, dx, dy, dz]`.
        cartesian_velocity("cartesianVelocity"): temporal<Cartesian3VelocityValue>,
        reference("reference"): value<ReferenceValue>,
        interval("interval"): value<TimeInterval>,
    }
    check(p) {
        exactly_one_of(Position::NAME, &[
            ("cartesian", p.cartesian.is_some()),
            ("cartographicRadians", p.cartographic_radians.is_some()),
            ("cartographicDegrees", p.cartographic_degrees.is_some()),
            ("cartesianVelocity", p.cartesian_velocity.is_some()),
            ("reference", p.reference.is_some()),
        ])
    }
}

czml_object! {
    /// A list of positions, as used by polylines, polygons, corridors and walls.
    ///
    /// When `references` is given alongside a constant coordinate list, it must
    /// hold one reference per position.
    pub struct PositionList / PositionListBuilder {
        delete("delete", deletes): value<bool>,
        reference_frame("referenceFrame"): temporal<ReferenceFrame>,
        cartesian("cartesian"): temporal<Cartesian3ListValue>,
        cartographic_radians("cartographicRadians"): temporal<CartographicRadiansListValue>,
        cartographic_degrees("cartographicDegrees"): temporal<CartographicDegreesListValue>,
        references("references"): value<ReferenceListValue>,
        interval("interval"): value<TimeInterval>,
        epoch("epoch"): temporal<Timestamp>,
    }
    check(p) {
        exactly_one_of(PositionList::NAME, &[
            ("cartesian", p.cartesian.is_some()),
            ("cartographicRadians", p.cartographic_radians.is_some()),
            ("cartographicDegrees", p.cartographic_degrees.is_some()),
        ])?;
        p.check_references()
    }
}

impl PositionList {
    /// Number of positions in the constant coordinate list, if there is one.
    pub fn position_count(&self) -> Option<usize> {
        fn count<K: PositionKind>(t: &Option<Temporal<CoordinateList<K>>>) -> Option<usize> {
            t.as_ref()?.as_constant().map(|l| l.positions())
        }
        count(&self.cartesian)
            .or_else(|| count(&self.cartographic_radians))
            .or_else(|| count(&self.cartographic_degrees))
    }

    fn check_references(&self) -> Result<()> {
        match (&self.references, self.position_count()) {
            (Some(refs), Some(positions)) => check_reference_count(Self::NAME, positions, refs.len()),
            _ => Ok(()),
        }
    }
}

czml_object! {
    /// Several position lists, one per ring, as used by polygon holes.
    ///
    /// `references` must hold one list per ring and one reference per
    /// position within each ring.
    pub struct PositionListOfLists / PositionListOfListsBuilder {
        delete("delete", deletes): value<bool>,
        reference_frame("referenceFrame"): temporal<ReferenceFrame>,
        cartesian("cartesian"): temporal<Cartesian3ListOfListsValue>,
        cartographic_radians("cartographicRadians"): temporal<CartographicRadiansListOfListsValue>,
        cartographic_degrees("cartographicDegrees"): temporal<CartographicDegreesListOfListsValue>,
        references("references"): value<ReferenceListOfListsValue>,
    }
    check(p) {
        exactly_one_of(PositionListOfLists::NAME, &[
            ("cartesian", p.cartesian.is_some()),
            ("cartographicRadians", p.cartographic_radians.is_some()),
            ("cartographicDegrees", p.cartographic_degrees.is_some()),
        ])?;
        p.check_references()
    }
}

impl PositionListOfLists {
    /// Number of positions in each ring of the constant coordinate list.
    pub fn ring_positions(&self) -> Option<Vec<usize>> {
        fn rings<K: PositionKind>(
            t: &Option<Temporal<CoordinateListOfLists<K>>>,
        ) -> Option<Vec<usize>> {
            t.as_ref()?
                .as_constant()
                .map(|l| l.ring_positions().collect())
        }
        rings(&self.cartesian)
            .or_else(|| rings(&self.cartographic_radians))
            .or_else(|| rings(&self.cartographic_degrees))
    }

    fn check_references(&self) -> Result<()> {
        let (Some(refs), Some(positions)) = (&self.references, self.ring_positions()) else {
            return Ok(());
        };
        let references: Vec<usize> = refs.iter().map(|r| r.len()).collect();
        check_nested_reference_counts(Self::NAME, &positions, &references)
    }
}

czml_object! {
    /// A suggested camera offset when viewing an object, in the East-North-Up
    /// frame of the object's position.
    ///
    /// At least one of `cartesian` or `reference` must be given.
    pub struct ViewFrom / ViewFromBuilder {
        delete("delete", deletes): value<bool>,
        epoch("epoch"): temporal<Timestamp>,
        interpolation_algorithm("interpolationAlgorithm"): temporal<InterpolationAlgorithm>,
        interpolation_degree("interpolationDegree"): temporal<i64>,
        cartesian("cartesian"): temporal<Cartesian3Value>,
        reference("reference"): value<ReferenceValue>,
    }
    check(v) {
        at_least_one_of(ViewFrom::NAME, &[
            ("cartesian", v.cartesian.is_some()),
            ("reference", v.reference.is_some()),
        ])
    }
}

czml_object! {
    /// The orientation of an object, as a unit quaternion.
    pub struct Orientation / OrientationBuilder {
        delete("delete", deletes): value<bool>,
        epoch("epoch"): temporal<Timestamp>,
        interpolation_algorithm("interpolationAlgorithm"): temporal<InterpolationAlgorithm>,
        interpolation_degree("interpolationDegree"): temporal<i64>,
        unit_quaternion("unitQuaternion"): temporal<UnitQuaternionValue>,
        reference("reference"): value<ReferenceValue>,
        /// Orientation derived from the velocity of this position reference.
        velocity_reference("velocityReference"): value<ReferenceValue>,
    }
    check(o) {
        exactly_one_of(Orientation::NAME, &[
            ("unitQuaternion", o.unit_quaternion.is_some()),
            ("reference", o.reference.is_some()),
        ])
    }
}
