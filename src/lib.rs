//! # CZML
//!
//! Typed object model for CZML, the JSON format describing time-dynamic
//! scenes for 3D globe clients such as Cesium.
//!
//! Every composite is validated when it is built: alternative
//! representations are mutually exclusive, reference lists must match their
//! coordinates, and a `delete` flag drops every other member. Serialization
//! writes members in declaration order and omits absent ones.
//!
//! ## Modules
//!
//! - [`util`] - Error types and the URI validator
//! - [`core`] - Temporal values, coordinates, time, references, enumerations
//! - [`geom`] - Positions and graphics (billboard, polyline, polygon, ...)
//! - [`material`] - Surface and polyline materials
//! - [`document`] - Packets and documents
//!
//! ## Example
//!
//! ```ignore
//! use czml::prelude::*;
//!
//! let point = Packet::builder()
//!     .id("point")
//!     .position(Position::builder().cartographic_degrees([-75.0, 40.0, 0.0]).build()?)
//!     .point(Point::builder().color(Color::rgb(255, 0, 0)?).pixel_size(10.0).build()?)
//!     .build()?;
//!
//! let doc = Document::new(vec![Document::preamble("simple")?, point])?;
//! std::fs::write("simple.czml", doc.to_json()?)?;
//! ```

pub mod util;
pub mod core;
pub mod geom;
pub mod material;
pub mod document;

// Re-export commonly used types
pub use util::{Error, PreambleViolation, Result};
pub use crate::core::{Temporal, ToCzml, CZML_VERSION};
pub use document::{Document, Packet};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{Error, PreambleViolation, Result};
    pub use crate::core::{
        Availability, IdGenerator, IntervalCollection, IntervalValue, ReferenceValue,
        SequentialIdGenerator, Temporal, TimeInterval, Timestamp, ToCzml, Uri, UuidGenerator,
        CZML_VERSION,
    };
    pub use crate::core::{
        ArcTypes, ClassificationTypes, ClockRange, ClockStep, ColorBlendModes, CornerTypes,
        HeightReferences, HorizontalOrigin, InterpolationAlgorithm, LabelStyle, ReferenceFrame,
        ShadowModes, StripeOrientation, VerticalOrigin,
    };
    pub use crate::document::*;
    pub use crate::geom::*;
    pub use crate::material::*;
}
