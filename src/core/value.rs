//! Value traits shared by every CZML member type.
//!
//! - [`CzmlValue`] - coercion of JSON input into a typed value
//! - [`IntoValue`] - conversion of builder arguments into a typed value
//!
//! Implementations for plain JSON scalars and lists live here; coordinate,
//! reference and composite types implement the traits next to their
//! definitions.

use serde::Serialize;
use serde_json::{Map, Value};

use super::time::{Availability, TimeInterval, Timestamp};
use crate::util::{Error, Result};

/// A type that can appear as the value of a CZML member.
pub trait CzmlValue: Serialize + Sized {
    /// Member name used for this value inside an interval object, when the
    /// value itself does not serialize to an object.
    const INTERVAL_KEY: Option<&'static str>;

    /// Whether the type declares a member with this wire name.
    fn declares(_member: &str) -> bool {
        false
    }

    /// Coerce JSON input supplied for `field`.
    fn coerce(field: &'static str, input: &Value) -> Result<Self>;
}

/// Conversion of a builder argument into a member value.
pub trait IntoValue<T> {
    /// Convert, validating shorthand input.
    fn into_value(self) -> Result<T>;
}

impl<T> IntoValue<T> for T {
    fn into_value(self) -> Result<T> {
        Ok(self)
    }
}

impl IntoValue<String> for &str {
    fn into_value(self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl IntoValue<Timestamp> for &str {
    fn into_value(self) -> Result<Timestamp> {
        Timestamp::parse(self)
    }
}

impl IntoValue<TimeInterval> for &str {
    fn into_value(self) -> Result<TimeInterval> {
        TimeInterval::parse(self)
    }
}

impl IntoValue<Availability> for TimeInterval {
    fn into_value(self) -> Result<Availability> {
        Ok(Availability::Single(self))
    }
}

impl IntoValue<Availability> for Vec<TimeInterval> {
    fn into_value(self) -> Result<Availability> {
        Ok(Availability::Multiple(self))
    }
}

impl IntoValue<Availability> for &str {
    fn into_value(self) -> Result<Availability> {
        TimeInterval::parse(self).map(Availability::Single)
    }
}

// ============================================================================
// JSON scalars
// ============================================================================

impl CzmlValue for f64 {
    const INTERVAL_KEY: Option<&'static str> = Some("number");

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        input
            .as_f64()
            .ok_or_else(|| Error::type_coercion(field, "number", input))
    }
}

impl CzmlValue for i64 {
    const INTERVAL_KEY: Option<&'static str> = Some("number");

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        if let Some(n) = input.as_i64() {
            return Ok(n);
        }
        match input.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
            _ => Err(Error::type_coercion(field, "integer", input)),
        }
    }
}

impl CzmlValue for bool {
    const INTERVAL_KEY: Option<&'static str> = Some("boolean");

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        input
            .as_bool()
            .ok_or_else(|| Error::type_coercion(field, "boolean", input))
    }
}

/// Accepts a bare string or the `{"string": ...}` object form.
impl CzmlValue for String {
    const INTERVAL_KEY: Option<&'static str> = Some("string");

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        let text = match input {
            Value::Object(map) if map.len() == 1 => map.get("string").unwrap_or(input),
            other => other,
        };
        text.as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::type_coercion(field, "string", input))
    }
}

impl CzmlValue for Vec<f64> {
    const INTERVAL_KEY: Option<&'static str> = Some("array");

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        number_list(field, input)
    }
}

impl CzmlValue for Vec<i64> {
    const INTERVAL_KEY: Option<&'static str> = Some("array");

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        let items = input
            .as_array()
            .ok_or_else(|| Error::type_coercion(field, "list of integers", input))?;
        items.iter().map(|v| i64::coerce(field, v)).collect()
    }
}

/// Arbitrary JSON, passed through verbatim.
impl CzmlValue for Value {
    const INTERVAL_KEY: Option<&'static str> = Some("value");

    fn coerce(_field: &'static str, input: &Value) -> Result<Self> {
        Ok(input.clone())
    }
}

impl CzmlValue for Timestamp {
    const INTERVAL_KEY: Option<&'static str> = Some("date");

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        let text = input
            .as_str()
            .ok_or_else(|| Error::type_coercion(field, "ISO 8601 string", input))?;
        Timestamp::parse(text)
    }
}

impl CzmlValue for TimeInterval {
    const INTERVAL_KEY: Option<&'static str> = Some("interval");

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        let text = input
            .as_str()
            .ok_or_else(|| Error::type_coercion(field, "interval string", input))?;
        TimeInterval::parse(text)
    }
}

impl CzmlValue for Availability {
    const INTERVAL_KEY: Option<&'static str> = None;

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        match input {
            Value::String(_) => TimeInterval::coerce(field, input).map(Availability::Single),
            Value::Array(items) => items
                .iter()
                .map(|v| TimeInterval::coerce(field, v))
                .collect::<Result<Vec<_>>>()
                .map(Availability::Multiple),
            other => Err(Error::type_coercion(field, "interval string or list", other)),
        }
    }
}

/// Read a JSON array of numbers.
pub fn number_list(field: &'static str, input: &Value) -> Result<Vec<f64>> {
    let items = input
        .as_array()
        .ok_or_else(|| Error::type_coercion(field, "list of numbers", input))?;
    items
        .iter()
        .map(|v| {
            v.as_f64()
                .ok_or_else(|| Error::type_coercion(field, "list of numbers", v))
        })
        .collect()
}

/// Read a JSON object, or fail with a coercion error.
pub fn object<'a>(field: &'static str, input: &'a Value) -> Result<&'a Map<String, Value>> {
    input
        .as_object()
        .ok_or_else(|| Error::type_coercion(field, "object", input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_coercion() {
        assert_eq!(f64::coerce("width", &json!(2)).unwrap(), 2.0);
        assert_eq!(i64::coerce("zIndex", &json!(3.0)).unwrap(), 3);
        assert!(i64::coerce("zIndex", &json!(3.5)).is_err());
        assert!(bool::coerce("show", &json!("yes")).is_err());
        assert_eq!(String::coerce("text", &json!("A")).unwrap(), "A");
        assert_eq!(String::coerce("text", &json!({"string": "A"})).unwrap(), "A");
        assert!(String::coerce("text", &json!({"text": "A"})).is_err());
    }

    #[test]
    fn test_number_list() {
        assert_eq!(
            Vec::<f64>::coerce("wsen", &json!([1, 2.5])).unwrap(),
            vec![1.0, 2.5]
        );
        let err = Vec::<f64>::coerce("wsen", &json!([1, "x"])).unwrap_err();
        assert!(matches!(err, Error::TypeCoercion { field: "wsen", found: "string", .. }));
    }

    #[test]
    fn test_availability_coercion() {
        let one = Availability::coerce("availability", &json!("2012-03-15/2012-03-16")).unwrap();
        assert_eq!(one.intervals().len(), 1);
        assert!(Availability::coerce("availability", &json!(5)).is_err());
    }

    #[test]
    fn test_into_value_shorthand() {
        let s: String = "abc".into_value().unwrap();
        assert_eq!(s, "abc");
        let t: Result<Timestamp> = "nope".into_value();
        assert!(t.is_err());
    }
}
