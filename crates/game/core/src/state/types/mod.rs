pub mod common;
pub mod disable;
pub mod order;

// Re-export common types
pub use common::{EntityId, Location, PlayerId};

// Re-export disable reasons
pub use disable::DisableFlags;

// Re-export the player command
pub use order::Order;
