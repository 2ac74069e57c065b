//! Coordinate and measurement values.
//!
//! Every coordinate value is a flat list of numbers on the wire. Whether the
//! list holds one constant tuple or a run of time-tagged samples is decided
//! by its length alone:
//!
//! - length `k` is a constant tuple of arity `k`
//! - a positive multiple of `k + 1` is a run of `[t, v1..vk]` samples
//!
//! Since `k` is never a multiple of `k + 1`, the two shapes never collide.
//!
//! Position lists hold triples: a [`CoordinateList`] is a flat list whose
//! length is a multiple of 3, a [`CoordinateListOfLists`] holds one such list
//! per ring.

use std::fmt;
use std::marker::PhantomData;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::temporal::{IntoTemporal, Temporal};
use super::value::{number_list, CzmlValue};
use crate::util::{Error, Result};

/// Shape of a coordinate value, inferred from its length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// One tuple of the type's arity.
    Constant,
    /// Time-tagged samples, each `[t, v1..vk]`.
    Sampled {
        /// Number of samples.
        samples: usize,
    },
}

impl Shape {
    /// Classify a flat list of `len` numbers for a tuple of `arity`.
    pub const fn classify(arity: usize, len: usize) -> Option<Self> {
        if len == arity {
            Some(Self::Constant)
        } else if len > 0 && len % (arity + 1) == 0 {
            Some(Self::Sampled {
                samples: len / (arity + 1),
            })
        } else {
            None
        }
    }

    /// Check if constant.
    #[inline]
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant)
    }
}

/// Static description of a coordinate type.
pub trait CoordinateKind {
    /// Type name for diagnostics.
    const NAME: &'static str;
    /// Member name used inside interval objects.
    const WIRE_NAME: &'static str;
    /// Numbers per tuple.
    const ARITY: usize;

    /// Extra check on a constant tuple.
    fn check_tuple(_values: &[f64]) -> Result<()> {
        Ok(())
    }
}

macro_rules! coordinate_kinds {
    ($( $(#[$meta:meta])* $kind:ident => $alias:ident, $wire:literal, $arity:literal; )*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $kind;

            impl CoordinateKind for $kind {
                const NAME: &'static str = stringify!($alias);
                const WIRE_NAME: &'static str = $wire;
                const ARITY: usize = $arity;
            }

            #[doc = concat!("A `", $wire, "` value.")]
            pub type $alias = CoordinateValue<$kind>;
        )*
    };
}

coordinate_kinds! {
    /// Screen-space `[x, y]`.
    Cartesian2 => Cartesian2Value, "cartesian2", 2;
    /// Cartesian `[x, y, z]` in meters.
    Cartesian3 => Cartesian3Value, "cartesian", 3;
    /// Position and velocity `[x, y, z, dx, dy, dz]`.
    Cartesian3Velocity => Cartesian3VelocityValue, "cartesianVelocity", 6;
    /// `[longitude, latitude, height]` in degrees and meters.
    CartographicDegrees => CartographicDegreesValue, "cartographicDegrees", 3;
    /// `[longitude, latitude, height]` in radians and meters.
    CartographicRadians => CartographicRadiansValue, "cartographicRadians", 3;
    /// Rotation `[x, y, z, w]`.
    UnitQuaternion => UnitQuaternionValue, "unitQuaternion", 4;
    /// `[nearDistance, nearValue, farDistance, farValue]`.
    NearFar => NearFarScalarValue, "nearFarScalar", 4;
    /// `[near, far]` display distances.
    DistanceDisplay => DistanceDisplayConditionValue, "distanceDisplayCondition", 2;
}

/// Integer color channels `[r, g, b, a]`, each 0 to 255.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba;

impl CoordinateKind for Rgba {
    const NAME: &'static str = "RgbaValue";
    const WIRE_NAME: &'static str = "rgba";
    const ARITY: usize = 4;

    fn check_tuple(values: &[f64]) -> Result<()> {
        check_channels(Self::NAME, values, 255.0)
    }
}

/// A `rgba` value.
pub type RgbaValue = CoordinateValue<Rgba>;

/// Float color channels `[r, g, b, a]`, each 0 to 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgbaf;

impl CoordinateKind for Rgbaf {
    const NAME: &'static str = "RgbafValue";
    const WIRE_NAME: &'static str = "rgbaf";
    const ARITY: usize = 4;

    fn check_tuple(values: &[f64]) -> Result<()> {
        check_channels(Self::NAME, values, 1.0)
    }
}

/// A `rgbaf` value.
pub type RgbafValue = CoordinateValue<Rgbaf>;

fn check_channels(name: &'static str, values: &[f64], max: f64) -> Result<()> {
    match values.iter().find(|v| !(0.0..=max).contains(*v)) {
        Some(v) => Err(Error::invalid(format!(
            "{name}: channel {v} outside 0..={max}"
        ))),
        None => Ok(()),
    }
}

/// Reject NaN and infinities, which have no JSON form.
fn check_finite(name: &'static str, values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(Error::invalid(format!(
            "{name}: element {i} is {}, expected a finite number",
            values[i]
        ))),
        None => Ok(()),
    }
}

// ============================================================================
// CoordinateValue
// ============================================================================

/// A constant tuple or a run of time-tagged tuples, stored flat.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateValue<K> {
    values: Vec<f64>,
    shape: Shape,
    kind: PhantomData<K>,
}

impl<K: CoordinateKind> CoordinateValue<K> {
    /// Classify and validate a flat list of numbers.
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self> {
        let values = values.into();
        let shape = Shape::classify(K::ARITY, values.len()).ok_or_else(|| {
            Error::shape(
                K::NAME,
                format!("{} or N * {}", K::ARITY, K::ARITY + 1),
                values.len(),
            )
        })?;
        check_finite(K::NAME, &values)?;

        match shape {
            Shape::Constant => K::check_tuple(&values)?,
            Shape::Sampled { .. } => {
                for sample in values.chunks(K::ARITY + 1) {
                    K::check_tuple(&sample[1..])?;
                }
            }
        }

        Ok(Self {
            values,
            shape,
            kind: PhantomData,
        })
    }

    /// Build a sampled value from `(time, tuple)` pairs.
    pub fn from_samples<'a>(samples: impl IntoIterator<Item = (f64, &'a [f64])>) -> Result<Self> {
        let mut flat = Vec::new();
        for (t, tuple) in samples {
            if tuple.len() != K::ARITY {
                return Err(Error::shape(K::NAME, K::ARITY.to_string(), tuple.len()));
            }
            flat.push(t);
            flat.extend_from_slice(tuple);
        }
        Self::new(flat)
    }

    /// Get shape.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Check if constant.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.shape.is_constant()
    }

    /// Flat wire values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over `(time, tuple)` samples. Empty for constant values.
    pub fn samples(&self) -> impl Iterator<Item = (f64, &[f64])> {
        let step = if self.is_constant() { usize::MAX } else { K::ARITY + 1 };
        let flat: &[f64] = if self.is_constant() { &[] } else { &self.values };
        flat.chunks(step).map(|c| (c[0], &c[1..]))
    }
}

impl RgbaValue {
    /// Opaque color from three channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            values: vec![r as f64, g as f64, b as f64, 255.0],
            shape: Shape::Constant,
            kind: PhantomData,
        }
    }
}

impl<K: CoordinateKind> fmt::Display for CoordinateValue<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", K::NAME, self.values)
    }
}

impl<K> Serialize for CoordinateValue<K> {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.collect_seq(&self.values)
    }
}

impl<K: CoordinateKind> CzmlValue for CoordinateValue<K> {
    const INTERVAL_KEY: Option<&'static str> = Some(K::WIRE_NAME);

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        Self::new(number_list(field, input)?)
    }
}

impl<K: CoordinateKind> IntoTemporal<CoordinateValue<K>> for CoordinateValue<K> {
    fn into_temporal(self) -> Result<Temporal<Self>> {
        Ok(Temporal::Constant(self))
    }
}

impl<K: CoordinateKind> IntoTemporal<CoordinateValue<K>> for Vec<f64> {
    fn into_temporal(self) -> Result<Temporal<CoordinateValue<K>>> {
        CoordinateValue::new(self).map(Temporal::Constant)
    }
}

impl<K: CoordinateKind> IntoTemporal<CoordinateValue<K>> for &[f64] {
    fn into_temporal(self) -> Result<Temporal<CoordinateValue<K>>> {
        CoordinateValue::new(self).map(Temporal::Constant)
    }
}

impl<K: CoordinateKind, const N: usize> IntoTemporal<CoordinateValue<K>> for [f64; N] {
    fn into_temporal(self) -> Result<Temporal<CoordinateValue<K>>> {
        CoordinateValue::new(self).map(Temporal::Constant)
    }
}

// ============================================================================
// Position lists
// ============================================================================

/// Marker for coordinate kinds that describe a point in space.
pub trait PositionKind: CoordinateKind {}

impl PositionKind for Cartesian3 {}
impl PositionKind for CartographicDegrees {}
impl PositionKind for CartographicRadians {}

const POSITION_ARITY: usize = 3;

fn check_triples(name: &'static str, len: usize) -> Result<()> {
    if len % POSITION_ARITY == 0 {
        Ok(())
    } else {
        Err(Error::shape(name, "a multiple of 3", len))
    }
}

/// A flat list of positions, three numbers each.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateList<K> {
    values: Vec<f64>,
    kind: PhantomData<K>,
}

/// A list of Cartesian positions.
pub type Cartesian3ListValue = CoordinateList<Cartesian3>;
/// A list of cartographic positions in degrees.
pub type CartographicDegreesListValue = CoordinateList<CartographicDegrees>;
/// A list of cartographic positions in radians.
pub type CartographicRadiansListValue = CoordinateList<CartographicRadians>;

impl<K: PositionKind> CoordinateList<K> {
    /// Validate a flat list of triples.
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self> {
        let values = values.into();
        check_triples(K::NAME, values.len())?;
        check_finite(K::NAME, &values)?;
        Ok(Self {
            values,
            kind: PhantomData,
        })
    }

    /// Number of positions.
    #[inline]
    pub fn positions(&self) -> usize {
        self.values.len() / POSITION_ARITY
    }

    /// Flat wire values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl<K> Serialize for CoordinateList<K> {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.collect_seq(&self.values)
    }
}

impl<K: PositionKind> CzmlValue for CoordinateList<K> {
    const INTERVAL_KEY: Option<&'static str> = Some(K::WIRE_NAME);

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        Self::new(number_list(field, input)?)
    }
}

impl<K: PositionKind> IntoTemporal<CoordinateList<K>> for CoordinateList<K> {
    fn into_temporal(self) -> Result<Temporal<Self>> {
        Ok(Temporal::Constant(self))
    }
}

impl<K: PositionKind> IntoTemporal<CoordinateList<K>> for Vec<f64> {
    fn into_temporal(self) -> Result<Temporal<CoordinateList<K>>> {
        CoordinateList::new(self).map(Temporal::Constant)
    }
}

impl<K: PositionKind, const N: usize> IntoTemporal<CoordinateList<K>> for [f64; N] {
    fn into_temporal(self) -> Result<Temporal<CoordinateList<K>>> {
        CoordinateList::new(self).map(Temporal::Constant)
    }
}

/// One flat position list per ring.
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateListOfLists<K> {
    lists: Vec<Vec<f64>>,
    kind: PhantomData<K>,
}

/// Rings of Cartesian positions.
pub type Cartesian3ListOfListsValue = CoordinateListOfLists<Cartesian3>;
/// Rings of cartographic positions in degrees.
pub type CartographicDegreesListOfListsValue = CoordinateListOfLists<CartographicDegrees>;
/// Rings of cartographic positions in radians.
pub type CartographicRadiansListOfListsValue = CoordinateListOfLists<CartographicRadians>;

impl<K: PositionKind> CoordinateListOfLists<K> {
    /// Validate every ring.
    pub fn new(lists: Vec<Vec<f64>>) -> Result<Self> {
        for list in &lists {
            check_triples(K::NAME, list.len())?;
            check_finite(K::NAME, list)?;
        }
        Ok(Self {
            lists,
            kind: PhantomData,
        })
    }

    /// Number of rings.
    #[inline]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Number of positions in each ring.
    pub fn ring_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.lists.iter().map(|l| l.len() / POSITION_ARITY)
    }

    /// Flat values of each ring.
    pub fn lists(&self) -> &[Vec<f64>] {
        &self.lists
    }
}

impl<K> Serialize for CoordinateListOfLists<K> {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.collect_seq(&self.lists)
    }
}

impl<K: PositionKind> CzmlValue for CoordinateListOfLists<K> {
    const INTERVAL_KEY: Option<&'static str> = Some(K::WIRE_NAME);

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        let rings = input
            .as_array()
            .ok_or_else(|| Error::type_coercion(field, "list of number lists", input))?;
        let lists = rings
            .iter()
            .map(|r| number_list(field, r))
            .collect::<Result<Vec<_>>>()?;
        Self::new(lists)
    }
}

impl<K: PositionKind> IntoTemporal<CoordinateListOfLists<K>> for CoordinateListOfLists<K> {
    fn into_temporal(self) -> Result<Temporal<Self>> {
        Ok(Temporal::Constant(self))
    }
}

impl<K: PositionKind> IntoTemporal<CoordinateListOfLists<K>> for Vec<Vec<f64>> {
    fn into_temporal(self) -> Result<Temporal<CoordinateListOfLists<K>>> {
        CoordinateListOfLists::new(self).map(Temporal::Constant)
    }
}

// ============================================================================
// glam interop
// ============================================================================

#[cfg(feature = "glam")]
mod glam_interop {
    use super::*;

    impl TryFrom<glam::DVec2> for Cartesian2Value {
        type Error = Error;

        fn try_from(v: glam::DVec2) -> Result<Self> {
            Self::new(v.to_array())
        }
    }

    impl TryFrom<glam::DVec3> for Cartesian3Value {
        type Error = Error;

        fn try_from(v: glam::DVec3) -> Result<Self> {
            Self::new(v.to_array())
        }
    }

    impl TryFrom<glam::DQuat> for UnitQuaternionValue {
        type Error = Error;

        fn try_from(q: glam::DQuat) -> Result<Self> {
            Self::new(q.to_array())
        }
    }

    impl IntoTemporal<Cartesian2Value> for glam::DVec2 {
        fn into_temporal(self) -> Result<Temporal<Cartesian2Value>> {
            self.try_into().map(Temporal::Constant)
        }
    }

    impl IntoTemporal<Cartesian3Value> for glam::DVec3 {
        fn into_temporal(self) -> Result<Temporal<Cartesian3Value>> {
            self.try_into().map(Temporal::Constant)
        }
    }

    impl IntoTemporal<UnitQuaternionValue> for glam::DQuat {
        fn into_temporal(self) -> Result<Temporal<UnitQuaternionValue>> {
            self.try_into().map(Temporal::Constant)
        }
    }
}
