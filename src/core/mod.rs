//! Core layer - value types and the validation machinery.
//!
//! This module provides:
//! - [`Temporal`] - constant, referenced, or interval-varying member values
//! - [`CoordinateValue`] and friends - fixed-arity tuples with shape inference
//! - [`Timestamp`] / [`TimeInterval`] - ISO-8601 instants and intervals
//! - [`ReferenceValue`] - `id#property` links between packets
//! - enumerations, [`Uri`], and packet [`IdGenerator`]s
//! - [`rules`] - exactly-one-of, count checks, unknown member rejection
//! - the `czml_object!` macro every composite is declared with

mod coords;
mod enums;
mod ids;
pub(crate) mod object;
mod reference;
pub mod rules;
mod temporal;
mod time;
mod uri;
pub mod value;

pub use coords::{
    Cartesian2, Cartesian2Value, Cartesian3, Cartesian3ListOfListsValue, Cartesian3ListValue,
    Cartesian3Value, Cartesian3Velocity, Cartesian3VelocityValue, CartographicDegrees,
    CartographicDegreesListOfListsValue, CartographicDegreesListValue, CartographicDegreesValue,
    CartographicRadians, CartographicRadiansListOfListsValue, CartographicRadiansListValue,
    CartographicRadiansValue, CoordinateKind, CoordinateList, CoordinateListOfLists,
    CoordinateValue, DistanceDisplay, DistanceDisplayConditionValue, NearFar, NearFarScalarValue,
    PositionKind, Rgba, RgbaValue, Rgbaf, RgbafValue, Shape, UnitQuaternion, UnitQuaternionValue,
};
pub use enums::{
    ArcTypes, ClassificationTypes, ClockRange, ClockStep, ColorBlendModes, CornerTypes,
    HeightReferences, HorizontalOrigin, InterpolationAlgorithm, LabelStyle, ReferenceFrame,
    ShadowModes, StripeOrientation, VerticalOrigin,
};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use object::{ObjectRules, ToCzml, DEFAULT_INDENT};
pub use reference::{ReferenceListOfListsValue, ReferenceListValue, ReferenceValue};
pub use temporal::{IntervalCollection, IntervalValue, IntoTemporal, Temporal};
pub use time::{Availability, TimeInterval, Timestamp, MAX_TIME, MIN_TIME};
pub use uri::Uri;
pub use value::{CzmlValue, IntoValue};

/// CZML version written into document preambles.
pub const CZML_VERSION: &str = "1.0";
