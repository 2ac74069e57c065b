//! CZML documents: an ordered list of packets led by a preamble.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::core::{IdGenerator, ToCzml, UuidGenerator, CZML_VERSION};
use crate::util::{Error, PreambleViolation, Result};

use super::packet::Packet;

/// Id every document preamble must carry.
pub const PREAMBLE_ID: &str = "document";

/// Members only object packets may carry, in check order.
pub const PREAMBLE_FORBIDDEN: &[&str] = &[
    "delete",
    "parent",
    "availability",
    "properties",
    "position",
    "orientation",
    "viewFrom",
    "billboard",
    "box",
    "corridor",
    "cylinder",
    "ellipse",
    "ellipsoid",
    "label",
    "model",
    "path",
    "point",
    "polygon",
    "polyline",
    "rectangle",
    "tileset",
    "wall",
];

/// A validated CZML document.
///
/// The first packet is the preamble: id `document`, with `version` and
/// `name`, and none of the [`PREAMBLE_FORBIDDEN`] members. Serializes as a
/// bare JSON array of packets.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    packets: Vec<Packet>,
}

impl Document {
    /// Validate the preamble and wrap the packets.
    ///
    /// All preamble violations are reported together, in check order.
    pub fn new(packets: Vec<Packet>) -> Result<Self> {
        let violations = check_preamble(&packets);
        if !violations.is_empty() {
            let err = Error::Preamble(violations);
            tracing::debug!(error = %err, "document preamble rejected");
            return Err(err);
        }
        tracing::debug!(packets = packets.len(), "document preamble accepted");
        Ok(Self { packets })
    }

    /// Build a preamble packet named `name` for the current CZML version.
    pub fn preamble(name: impl Into<String>) -> Result<Packet> {
        let name: String = name.into();
        Packet::builder()
            .id(PREAMBLE_ID)
            .name(name)
            .version(CZML_VERSION)
            .build()
    }

    /// Parse a document from a JSON array of packets.
    pub fn from_json(input: &Value) -> Result<Self> {
        Self::from_json_with(input, &UuidGenerator)
    }

    /// Parse a document, drawing missing packet ids from `ids`.
    pub fn from_json_with(input: &Value, ids: &dyn IdGenerator) -> Result<Self> {
        let items = input
            .as_array()
            .ok_or_else(|| Error::type_coercion("packets", "list of packets", input))?;
        let packets = items
            .iter()
            .map(|p| Packet::from_json_with(p, ids))
            .collect::<Result<Vec<_>>>()?;
        Self::new(packets)
    }

    /// Parse a document from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let input: Value = serde_json::from_str(text)?;
        Self::from_json(&input)
    }

    /// Get all packets, preamble first.
    pub fn packets(&self) -> &[Packet] {
        &self.packets
    }

    /// Get the preamble packet.
    pub fn preamble_packet(&self) -> Option<&Packet> {
        self.packets.first()
    }

    /// Find a packet by id.
    pub fn find(&self, id: &str) -> Option<&Packet> {
        self.packets.iter().find(|p| p.id() == id)
    }

    /// Number of packets, preamble included.
    pub fn len(&self) -> usize {
        self.packets.len()
    }

    /// Always false for a validated document.
    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    /// Take the packets back.
    pub fn into_packets(self) -> Vec<Packet> {
        self.packets
    }
}

fn check_preamble(packets: &[Packet]) -> Vec<PreambleViolation> {
    let Some(first) = packets.first() else {
        return vec![PreambleViolation::Empty];
    };

    let mut violations = Vec::new();
    if first.version().is_none() || first.name().is_none() {
        violations.push(PreambleViolation::MissingVersionOrName);
    }
    if first.id() != PREAMBLE_ID {
        violations.push(PreambleViolation::WrongId(first.id().to_string()));
    }
    violations.extend(
        PREAMBLE_FORBIDDEN
            .iter()
            .copied()
            .filter(|field| first.is_set(field))
            .map(PreambleViolation::ForbiddenField),
    );
    violations
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.collect_seq(&self.packets)
    }
}

impl ToCzml for Document {}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Packet;
    type IntoIter = std::slice::Iter<'a, Packet>;

    fn into_iter(self) -> Self::IntoIter {
        self.packets.iter()
    }
}
