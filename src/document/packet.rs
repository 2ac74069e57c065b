//! Packets: one object of a scene, keyed by id.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::core::object::czml_object;
use crate::core::value::object;
use crate::core::{
    Availability, ClockRange, ClockStep, CzmlValue, IdGenerator, IntervalValue, IntoTemporal,
    IntoValue, Temporal, TimeInterval, Timestamp, ToCzml, UuidGenerator,
};
use crate::geom::{
    Billboard, BoxGraphics, Corridor, Cylinder, Ellipse, Ellipsoid, Label, Model, Orientation,
    Path, Point, Polygon, Polyline, Position, PositionList, PositionListOfLists, Rectangle,
    Tileset, ViewFrom, Wall,
};
use crate::util::Result;

czml_object! {
    /// Initial settings for the simulated clock when a document is loaded.
    ///
    /// Only valid on the document preamble.
    pub struct Clock / ClockBuilder {
        /// Start and stop time of the clock.
        interval("interval"): value<TimeInterval>,
        current_time("currentTime"): temporal<Timestamp>,
        /// Seconds advanced per tick, or the factor applied to system time.
        multiplier("multiplier"): temporal<f64>,
        /// Behavior at the start and stop times.
        range("range"): temporal<ClockRange>,
        step("step"): temporal<ClockStep>,
    }
}

/// A clock given as an interval value: the interval becomes the clock's own.
impl IntoValue<Clock> for IntervalValue<Clock> {
    fn into_value(self) -> Result<Clock> {
        let (interval, mut clock) = self.into_parts();
        clock.interval = Some(interval);
        Ok(clock)
    }
}

// ============================================================================
// Packet position
// ============================================================================

/// The value of a packet's `position`: a single position, a list of
/// positions, or one list per ring.
#[derive(Clone, Debug, PartialEq)]
pub enum PacketPosition {
    /// One position.
    Single(Position),
    /// A flat list of positions.
    List(PositionList),
    /// One position list per ring.
    ListOfLists(PositionListOfLists),
}

impl PacketPosition {
    /// Get the single position, if that is the form held.
    pub fn as_position(&self) -> Option<&Position> {
        match self {
            Self::Single(p) => Some(p),
            _ => None,
        }
    }

    /// Get the position list, if that is the form held.
    pub fn as_list(&self) -> Option<&PositionList> {
        match self {
            Self::List(p) => Some(p),
            _ => None,
        }
    }

    /// Get the list of lists, if that is the form held.
    pub fn as_list_of_lists(&self) -> Option<&PositionListOfLists> {
        match self {
            Self::ListOfLists(p) => Some(p),
            _ => None,
        }
    }
}

const POSITION_MEMBERS: &[&str] = &["cartesian", "cartographicRadians", "cartographicDegrees"];

/// Whether any coordinate member holds nested lists.
fn has_rings(fields: &Map<String, Value>) -> bool {
    POSITION_MEMBERS.iter().any(|name| {
        fields
            .get(*name)
            .and_then(Value::as_array)
            .and_then(|items| items.first())
            .is_some_and(Value::is_array)
    })
}

impl CzmlValue for PacketPosition {
    const INTERVAL_KEY: Option<&'static str> = None;

    fn declares(member: &str) -> bool {
        <Position as CzmlValue>::declares(member)
            || <PositionList as CzmlValue>::declares(member)
            || <PositionListOfLists as CzmlValue>::declares(member)
    }

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        let fields = object(field, input)?;
        if has_rings(fields) {
            return PositionListOfLists::from_fields(fields).map(Self::ListOfLists);
        }
        // the first form that accepts the members wins
        match Position::from_fields(fields) {
            Ok(p) => Ok(Self::Single(p)),
            Err(single) => match PositionList::from_fields(fields) {
                Ok(list) => Ok(Self::List(list)),
                Err(list) if fields.contains_key("references") => Err(list),
                Err(_) => Err(single),
            },
        }
    }
}

impl Serialize for PacketPosition {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Single(p) => p.serialize(s),
            Self::List(p) => p.serialize(s),
            Self::ListOfLists(p) => p.serialize(s),
        }
    }
}

impl From<Position> for PacketPosition {
    fn from(p: Position) -> Self {
        Self::Single(p)
    }
}

impl From<PositionList> for PacketPosition {
    fn from(p: PositionList) -> Self {
        Self::List(p)
    }
}

impl From<PositionListOfLists> for PacketPosition {
    fn from(p: PositionListOfLists) -> Self {
        Self::ListOfLists(p)
    }
}

impl IntoTemporal<PacketPosition> for PacketPosition {
    fn into_temporal(self) -> Result<Temporal<PacketPosition>> {
        Ok(Temporal::Constant(self))
    }
}

impl IntoTemporal<PacketPosition> for Position {
    fn into_temporal(self) -> Result<Temporal<PacketPosition>> {
        Ok(Temporal::Constant(self.into()))
    }
}

impl IntoTemporal<PacketPosition> for PositionList {
    fn into_temporal(self) -> Result<Temporal<PacketPosition>> {
        Ok(Temporal::Constant(self.into()))
    }
}

impl IntoTemporal<PacketPosition> for PositionListOfLists {
    fn into_temporal(self) -> Result<Temporal<PacketPosition>> {
        Ok(Temporal::Constant(self.into()))
    }
}

czml_object! {
    /// Graphical and behavioral properties of a single object in a scene.
    ///
    /// A packet built without an id receives a fresh UUID v4. Use
    /// [`PacketBuilder::build_with`] or [`Packet::from_fields_with`] to draw
    /// ids from another [`IdGenerator`].
    ///
    /// When `delete` is true only `id` and `delete` are kept.
    pub struct Packet / PacketBuilder {
        /// Unique id of the object within its scope.
        id("id", kept): id<String>,
        /// Whether clients should drop all existing data for this id.
        delete("delete", deletes): value<bool>,
        name("name"): temporal<String>,
        /// Id of the parent object.
        parent("parent"): temporal<String>,
        /// HTML description. `{"string": ...}` input is accepted.
        description("description"): temporal<String>,
        /// CZML version, only valid on the preamble.
        version("version"): value<String>,
        clock("clock"): value<Clock>,
        availability("availability"): value<Availability>,
        properties("properties"): value<CustomProperties>,
        position("position"): temporal<PacketPosition>,
        orientation("orientation"): temporal<Orientation>,
        view_from("viewFrom"): temporal<ViewFrom>,
        billboard("billboard"): temporal<Billboard>,
        r#box("box"): temporal<BoxGraphics>,
        corridor("corridor"): temporal<Corridor>,
        cylinder("cylinder"): temporal<Cylinder>,
        ellipse("ellipse"): temporal<Ellipse>,
        ellipsoid("ellipsoid"): temporal<Ellipsoid>,
        label("label"): temporal<Label>,
        model("model"): temporal<Model>,
        path("path"): temporal<Path>,
        point("point"): temporal<Point>,
        polygon("polygon"): temporal<Polygon>,
        polyline("polyline"): temporal<Polyline>,
        rectangle("rectangle"): temporal<Rectangle>,
        tileset("tileset"): temporal<Tileset>,
        wall("wall"): temporal<Wall>,
    }
    prepare(p) {
        if p.id.is_none() {
            p.id = Some(UuidGenerator.next_id());
        }
    }
}

impl Packet {
    /// Construct from JSON members, drawing a missing id from `ids`.
    pub fn from_fields_with(fields: &Map<String, Value>, ids: &dyn IdGenerator) -> Result<Self> {
        let mut this = Self::coerce_fields(fields)?;
        if this.id.is_none() {
            this.id = Some(ids.next_id());
        }
        this.finalize()
    }

    /// Construct from a JSON object, drawing a missing id from `ids`.
    pub fn from_json_with(input: &Value, ids: &dyn IdGenerator) -> Result<Self> {
        Self::from_fields_with(object(Self::NAME, input)?, ids)
    }
}

impl PacketBuilder {
    /// Validate and produce the packet, drawing a missing id from `ids`.
    pub fn build_with(mut self, ids: &dyn IdGenerator) -> Result<Packet> {
        if self.inner.id.is_none() && self.error.is_none() {
            self.inner.id = Some(ids.next_id());
        }
        self.build()
    }
}

// ============================================================================
// Custom properties
// ============================================================================

/// Free-form properties attached to a packet.
///
/// Values are stored as JSON in insertion order and written back verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CustomProperties(Map<String, Value>);

impl CustomProperties {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property, serializing `value` to JSON.
    pub fn with(mut self, key: impl Into<String>, value: impl Serialize) -> Result<Self> {
        self.0.insert(key.into(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Get a property.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for CustomProperties {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl CzmlValue for CustomProperties {
    const INTERVAL_KEY: Option<&'static str> = None;

    fn coerce(field: &'static str, input: &Value) -> Result<Self> {
        object(field, input).map(|m| Self(m.clone()))
    }
}

impl ToCzml for CustomProperties {}
