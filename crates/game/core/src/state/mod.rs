//! Plain value types shared by every layer of the power system.
//!
//! Identifiers, map cells, player commands and disable reasons live here so
//! that the power, world and input modules can exchange them without
//! depending on each other.
pub mod types;

pub use types::{DisableFlags, EntityId, Location, Order, PlayerId};
