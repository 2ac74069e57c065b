//! Values that may vary over time.
//!
//! A member declared as [`Temporal<T>`] holds exactly one of:
//! - a constant `T`
//! - a reference to another packet's property
//! - an ordered collection of `(interval, T)` pairs
//!
//! ## Wire form
//!
//! ```text
//! constant     <T>
//! reference    {"reference": "id#property"}
//! intervals    [{"interval": "start/end", ...}, ...]
//! ```
//!
//! Inside an interval object, values that serialize to objects are merged
//! into it; other values are written under [`CzmlValue::INTERVAL_KEY`]. A
//! merged value's own `interval` member is not written.

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::reference::ReferenceValue;
use super::time::{TimeInterval, Timestamp};
use super::value::CzmlValue;
use crate::util::{Error, Result};

const INTERVAL: &str = "interval";
const REFERENCE: &str = "reference";
const FALLBACK_KEY: &str = "value";

/// A constant, reference, or interval-sampled value.
#[derive(Clone, Debug, PartialEq)]
pub enum Temporal<T> {
    /// The same value at all times.
    Constant(T),
    /// The value of another packet's property.
    Reference(ReferenceValue),
    /// Different values over different intervals.
    Intervals(IntervalCollection<T>),
}

impl<T> Temporal<T> {
    /// Check if constant.
    #[inline]
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// Get the constant value, if any.
    pub fn as_constant(&self) -> Option<&T> {
        match self {
            Self::Constant(v) => Some(v),
            _ => None,
        }
    }

    /// Get the reference, if any.
    pub fn as_reference(&self) -> Option<&ReferenceValue> {
        match self {
            Self::Reference(r) => Some(r),
            _ => None,
        }
    }

    /// Get the interval collection, if any.
    pub fn as_intervals(&self) -> Option<&IntervalCollection<T>> {
        match self {
            Self::Intervals(c) => Some(c),
            _ => None,
        }
    }
}

impl<T: CzmlValue> Temporal<T> {
    /// Coerce JSON input supplied for `field`.
    pub fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        if let Some(reference) = sole_reference::<T>(input) {
            return ReferenceValue::coerce(field, reference).map(Self::Reference);
        }
        if is_interval_list(input) {
            return IntervalCollection::coerce(field, input).map(Self::Intervals);
        }
        T::coerce(field, input).map(Self::Constant)
    }
}

/// The `reference` member of `{"reference": ...}`, unless `T` declares its own.
fn sole_reference<T: CzmlValue>(input: &Value) -> Option<&Value> {
    match input {
        Value::Object(map) if map.len() == 1 && !T::declares(REFERENCE) => map.get(REFERENCE),
        _ => None,
    }
}

fn is_interval_list(input: &Value) -> bool {
    match input {
        Value::Array(items) => {
            !items.is_empty()
                && items
                    .iter()
                    .all(|i| i.as_object().is_some_and(|o| o.contains_key(INTERVAL)))
        }
        _ => false,
    }
}

impl<T: CzmlValue> Serialize for Temporal<T> {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Constant(v) => v.serialize(s),
            Self::Reference(r) => {
                let mut map = s.serialize_map(Some(1))?;
                map.serialize_entry(REFERENCE, r)?;
                map.end()
            }
            Self::Intervals(c) => c.serialize(s),
        }
    }
}

// ============================================================================
// Intervals
// ============================================================================

/// A value that holds over one time interval.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalValue<T> {
    interval: TimeInterval,
    value: T,
}

impl<T> IntervalValue<T> {
    /// Create an interval value.
    pub fn new(interval: TimeInterval, value: T) -> Self {
        Self { interval, value }
    }

    /// Create an interval value from start and end instants.
    pub fn between(start: impl Into<Timestamp>, end: impl Into<Timestamp>, value: T) -> Self {
        Self::new(TimeInterval::new(start, end), value)
    }

    /// Get interval.
    pub fn interval(&self) -> &TimeInterval {
        &self.interval
    }

    /// Get value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Split into interval and value.
    pub fn into_parts(self) -> (TimeInterval, T) {
        (self.interval, self.value)
    }
}

impl<T: CzmlValue> IntervalValue<T> {
    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        let object = input
            .as_object()
            .ok_or_else(|| Error::type_coercion(field, "interval object", input))?;
        let interval = object
            .get(INTERVAL)
            .ok_or_else(|| Error::type_coercion(field, "interval object", input))
            .and_then(|i| TimeInterval::coerce(field, i))?;

        let keyed = T::INTERVAL_KEY.and_then(|k| object.get(k));
        let value = match keyed {
            Some(v) => T::coerce(field, v)?,
            None => {
                let rest: Map<String, Value> = object
                    .iter()
                    .filter(|(k, _)| k.as_str() != INTERVAL)
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                T::coerce(field, &Value::Object(rest))?
            }
        };
        Ok(Self { interval, value })
    }
}

impl<T: CzmlValue> Serialize for IntervalValue<T> {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        let value = serde_json::to_value(&self.value).map_err(S::Error::custom)?;
        let mut map = s.serialize_map(None)?;
        map.serialize_entry(INTERVAL, &self.interval)?;
        match value {
            Value::Object(members) => {
                // the enclosing interval replaces the value's own
                for (k, v) in members.iter().filter(|(k, _)| k.as_str() != INTERVAL) {
                    map.serialize_entry(k, v)?;
                }
            }
            other => {
                map.serialize_entry(T::INTERVAL_KEY.unwrap_or(FALLBACK_KEY), &other)?;
            }
        }
        map.end()
    }
}

/// An ordered collection of interval values.
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalCollection<T>(Vec<IntervalValue<T>>);

impl<T> IntervalCollection<T> {
    /// Create a collection. Order is kept as given.
    pub fn new(values: Vec<IntervalValue<T>>) -> Self {
        Self(values)
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over interval values.
    pub fn iter(&self) -> impl Iterator<Item = &IntervalValue<T>> {
        self.0.iter()
    }
}

impl<T> FromIterator<IntervalValue<T>> for IntervalCollection<T> {
    fn from_iter<I: IntoIterator<Item = IntervalValue<T>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: CzmlValue> IntervalCollection<T> {
    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        let items = input
            .as_array()
            .ok_or_else(|| Error::type_coercion(field, "list of interval objects", input))?;
        items
            .iter()
            .map(|i| IntervalValue::coerce(field, i))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

impl<T: CzmlValue> Serialize for IntervalCollection<T> {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.collect_seq(&self.0)
    }
}

// ============================================================================
// Builder arguments
// ============================================================================

/// Conversion of a builder argument into a temporal member value.
///
/// Implemented for the canonical forms (`T`, [`Temporal<T>`],
/// [`IntervalCollection<T>`], [`ReferenceValue`]) and for shorthand such as
/// plain number lists for coordinate types.
pub trait IntoTemporal<T> {
    /// Convert, validating shorthand input.
    fn into_temporal(self) -> Result<Temporal<T>>;
}

impl<T> IntoTemporal<T> for Temporal<T> {
    fn into_temporal(self) -> Result<Temporal<T>> {
        Ok(self)
    }
}

impl<T> IntoTemporal<T> for IntervalCollection<T> {
    fn into_temporal(self) -> Result<Temporal<T>> {
        Ok(Temporal::Intervals(self))
    }
}

impl<T> IntoTemporal<T> for ReferenceValue {
    fn into_temporal(self) -> Result<Temporal<T>> {
        Ok(Temporal::Reference(self))
    }
}

macro_rules! constant_into_temporal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoTemporal<$ty> for $ty {
                fn into_temporal(self) -> Result<Temporal<$ty>> {
                    Ok(Temporal::Constant(self))
                }
            }
        )*
    };
}

constant_into_temporal!(f64, i64, bool, String, Vec<f64>, Vec<i64>, Value, Timestamp);

impl IntoTemporal<String> for &str {
    fn into_temporal(self) -> Result<Temporal<String>> {
        Ok(Temporal::Constant(self.to_string()))
    }
}

impl IntoTemporal<Timestamp> for &str {
    fn into_temporal(self) -> Result<Temporal<Timestamp>> {
        Timestamp::parse(self).map(Temporal::Constant)
    }
}

impl IntoTemporal<Timestamp> for chrono::DateTime<chrono::Utc> {
    fn into_temporal(self) -> Result<Temporal<Timestamp>> {
        Ok(Temporal::Constant(self.into()))
    }
}

impl<const N: usize> IntoTemporal<Vec<f64>> for [f64; N] {
    fn into_temporal(self) -> Result<Temporal<Vec<f64>>> {
        Ok(Temporal::Constant(self.to_vec()))
    }
}

impl<const N: usize> IntoTemporal<Vec<i64>> for [i64; N] {
    fn into_temporal(self) -> Result<Temporal<Vec<i64>>> {
        Ok(Temporal::Constant(self.to_vec()))
    }
}
