//! Read-only views of the host simulation.
//!
//! Oracles expose the only facts the power system consumes from the outside
//! world: whether an entity is currently disabled, and whether a cell lies
//! inside the map. Hosts implement them over their own entity storage.
mod actors;
mod map;

pub use actors::ActorOracle;
pub use map::{MapBounds, MapDimensions};
