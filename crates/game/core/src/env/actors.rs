use crate::state::EntityId;

/// Per-entity status queried once per tick by every power instance.
pub trait ActorOracle {
    /// Returns true if the entity is disabled (jammed, unpowered, ...) or no
    /// longer exists.
    fn is_disabled(&self, id: EntityId) -> bool;

    fn is_enabled(&self, id: EntityId) -> bool {
        !self.is_disabled(id)
    }
}
