//! References to properties of other packets.
//!
//! A reference is written `id#property.path`. Lists and lists of lists of
//! references accompany position lists whose points live on other objects.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::value::{CzmlValue, IntoValue};
use crate::util::{Error, Result};

/// A reference to another packet's property, `id#property`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReferenceValue(String);

impl ReferenceValue {
    /// Validate and wrap a reference string.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.contains('#') {
            Ok(Self(text))
        } else {
            Err(Error::InvalidReference(text))
        }
    }

    /// Get the full reference text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the referenced packet.
    pub fn id(&self) -> &str {
        self.0.split_once('#').map(|(id, _)| id).unwrap_or_default()
    }

    /// Property path inside the referenced packet.
    pub fn property(&self) -> &str {
        self.0.split_once('#').map(|(_, p)| p).unwrap_or_default()
    }
}

impl fmt::Display for ReferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ReferenceValue {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}

impl CzmlValue for ReferenceValue {
    const INTERVAL_KEY: Option<&'static str> = Some("reference");

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        let text = input
            .as_str()
            .ok_or_else(|| Error::type_coercion(field, "reference string", input))?;
        Self::new(text)
    }
}

impl IntoValue<ReferenceValue> for &str {
    fn into_value(self) -> Result<ReferenceValue> {
        ReferenceValue::new(self)
    }
}

impl IntoValue<ReferenceValue> for String {
    fn into_value(self) -> Result<ReferenceValue> {
        ReferenceValue::new(self)
    }
}

// ============================================================================
// Lists
// ============================================================================

/// A list of references, one per position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceListValue(Vec<ReferenceValue>);

impl ReferenceListValue {
    /// Validate every entry.
    pub fn new<S: AsRef<str>>(items: &[S]) -> Result<Self> {
        items
            .iter()
            .map(|s| ReferenceValue::new(s.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Number of references.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over references.
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceValue> {
        self.0.iter()
    }
}

impl Serialize for ReferenceListValue {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.collect_seq(&self.0)
    }
}

impl CzmlValue for ReferenceListValue {
    const INTERVAL_KEY: Option<&'static str> = Some("references");

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        let items = input
            .as_array()
            .ok_or_else(|| Error::type_coercion(field, "list of references", input))?;
        items
            .iter()
            .map(|v| ReferenceValue::coerce(field, v))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

impl IntoValue<ReferenceListValue> for Vec<&str> {
    fn into_value(self) -> Result<ReferenceListValue> {
        ReferenceListValue::new(&self)
    }
}

impl IntoValue<ReferenceListValue> for &[&str] {
    fn into_value(self) -> Result<ReferenceListValue> {
        ReferenceListValue::new(self)
    }
}

/// A list of reference lists, one per ring of a multi-ring geometry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceListOfListsValue(Vec<ReferenceListValue>);

impl ReferenceListOfListsValue {
    /// Validate every entry of every list.
    pub fn new<S: AsRef<str>>(lists: &[Vec<S>]) -> Result<Self> {
        lists
            .iter()
            .map(|l| ReferenceListValue::new(l))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Number of lists.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over lists.
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceListValue> {
        self.0.iter()
    }
}

impl Serialize for ReferenceListOfListsValue {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.collect_seq(&self.0)
    }
}

impl CzmlValue for ReferenceListOfListsValue {
    const INTERVAL_KEY: Option<&'static str> = Some("references");

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        let items = input
            .as_array()
            .ok_or_else(|| Error::type_coercion(field, "list of reference lists", input))?;
        items
            .iter()
            .map(|v| ReferenceListValue::coerce(field, v))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

impl IntoValue<ReferenceListOfListsValue> for Vec<Vec<&str>> {
    fn into_value(self) -> Result<ReferenceListOfListsValue> {
        ReferenceListOfListsValue::new(&self)
    }
}
