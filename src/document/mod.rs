//! Top-level containers.
//!
//! - [`Packet`] - one object of a scene and its graphics
//! - [`Clock`] - preamble clock settings
//! - [`PacketPosition`] - single position, position list, or list of lists
//! - [`CustomProperties`] - free-form packet properties
//! - [`Document`] - the preamble-checked packet list written to `.czml` files

mod doc;
mod packet;

pub use doc::{Document, PREAMBLE_FORBIDDEN, PREAMBLE_ID};
pub use packet::{Clock, ClockBuilder, CustomProperties, Packet, PacketBuilder, PacketPosition};
