//! URI-valued members: billboard images, model assets, tileset locations.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::object::ToCzml;
use super::reference::ReferenceValue;
use super::rules;
use super::temporal::{IntoTemporal, Temporal};
use super::value::{object, CzmlValue};
use crate::util::{validate_uri, Error, Result};

const FIELDS: &[&str] = &["delete", "uri", "reference"];

/// A URI, a reference to one, or a delete marker.
///
/// Written as the bare URI string, `{"reference": ...}` or `{"delete": true}`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Uri {
    delete: Option<bool>,
    uri: Option<String>,
    reference: Option<ReferenceValue>,
}

impl Uri {
    /// Type name used in diagnostics.
    pub const NAME: &'static str = "Uri";

    /// Validate and wrap a URI or data URI.
    pub fn new(uri: impl Into<String>) -> Result<Self> {
        let uri = uri.into();
        validate_uri(&uri)?;
        Ok(Self {
            uri: Some(uri),
            ..Self::default()
        })
    }

    /// A URI taken from another packet's property.
    pub fn reference(reference: ReferenceValue) -> Self {
        Self {
            reference: Some(reference),
            ..Self::default()
        }
    }

    /// A delete marker.
    pub fn deleted() -> Self {
        Self {
            delete: Some(true),
            ..Self::default()
        }
    }

    /// Get URI text.
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Get reference.
    pub fn as_reference(&self) -> Option<&ReferenceValue> {
        self.reference.as_ref()
    }

    /// Check if this is a delete marker.
    pub fn is_deleted(&self) -> bool {
        self.delete == Some(true)
    }

    /// Construct from JSON members, rejecting unknown names.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self> {
        rules::reject_unknown_fields(Self::NAME, FIELDS, fields)?;
        let get = |k: &str| fields.get(k).filter(|v| !v.is_null());

        let mut this = Self::default();
        if let Some(v) = get("delete") {
            this.delete = Some(bool::coerce("delete", v)?);
        }
        if let Some(v) = get("uri") {
            this.uri = Some(String::coerce("uri", v)?);
        }
        if let Some(v) = get("reference") {
            this.reference = Some(ReferenceValue::coerce("reference", v)?);
        }
        this.finalize()
    }

    fn finalize(self) -> Result<Self> {
        if self.is_deleted() {
            tracing::debug!(object = Self::NAME, "delete flag set, dropping other members");
            return Ok(Self::deleted());
        }
        rules::exactly_one_of(
            Self::NAME,
            &[("uri", self.uri.is_some()), ("reference", self.reference.is_some())],
        )?;
        if let Some(uri) = &self.uri {
            validate_uri(uri)?;
        }
        Ok(self)
    }
}

impl Serialize for Uri {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_deleted() {
            let mut map = s.serialize_map(Some(1))?;
            map.serialize_entry("delete", &true)?;
            return map.end();
        }
        match (&self.uri, &self.reference) {
            (Some(uri), _) => s.serialize_str(uri),
            (None, Some(reference)) => {
                let mut map = s.serialize_map(Some(1))?;
                map.serialize_entry("reference", reference)?;
                map.end()
            }
            (None, None) => s.serialize_map(Some(0))?.end(),
        }
    }
}

impl CzmlValue for Uri {
    const INTERVAL_KEY: Option<&'static str> = Some("uri");

    fn declares(member: &str) -> bool {
        FIELDS.contains(&member)
    }

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        match input {
            Value::String(text) => Self::new(text.as_str()),
            other => Self::from_fields(object(field, other)?),
        }
    }
}

impl IntoTemporal<Uri> for Uri {
    fn into_temporal(self) -> Result<Temporal<Uri>> {
        Ok(Temporal::Constant(self))
    }
}

impl IntoTemporal<Uri> for &str {
    fn into_temporal(self) -> Result<Temporal<Uri>> {
        Uri::new(self).map(Temporal::Constant)
    }
}

impl IntoTemporal<Uri> for String {
    fn into_temporal(self) -> Result<Temporal<Uri>> {
        Uri::new(self).map(Temporal::Constant)
    }
}

impl ToCzml for Uri {}

impl TryFrom<&str> for Uri {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Self::new(text)
    }
}
