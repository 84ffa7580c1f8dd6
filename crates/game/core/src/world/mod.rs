//! Entity container that broadcasts lifecycle events to a listener.
//!
//! The world is the minimal host the power system needs: it owns entities,
//! answers the per-entity disabled query, and forwards additions, removals and
//! ticks to its listener synchronously and in call order. A listener never
//! sees a tick interleaved with a membership change.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::env::{ActorOracle, MapDimensions};
use crate::error::WorldError;
use crate::power::SupportPower;
use crate::state::{DisableFlags, EntityId, PlayerId};

/// An entity as seen by lifecycle listeners.
#[derive(Clone)]
pub struct Actor {
    pub id: EntityId,
    pub owner: PlayerId,
    pub powers: Vec<Arc<dyn SupportPower>>,
    pub disabled: DisableFlags,
}

impl Actor {
    pub fn new(id: EntityId, owner: PlayerId) -> Self {
        Self {
            id,
            owner,
            powers: Vec::new(),
            disabled: DisableFlags::empty(),
        }
    }

    #[must_use]
    pub fn with_power(mut self, power: Arc<dyn SupportPower>) -> Self {
        self.powers.push(power);
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.is_disabled()
    }
}

impl fmt::Debug for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Actor")
            .field("id", &self.id)
            .field("owner", &self.owner)
            .field(
                "powers",
                &self
                    .powers
                    .iter()
                    .map(|p| p.info().order_name.as_str())
                    .collect::<Vec<_>>(),
            )
            .field("disabled", &self.disabled)
            .finish()
    }
}

/// Receives entity lifecycle events and simulation ticks from a [`World`].
pub trait ActorListener {
    fn actor_added(&mut self, actor: &Actor);

    fn actor_removed(&mut self, actor: &Actor);

    fn tick(&mut self, _actors: &dyn ActorOracle) {}
}

/// Fans events out to every listener in registration order.
impl<L: ActorListener> ActorListener for Vec<L> {
    fn actor_added(&mut self, actor: &Actor) {
        for listener in self.iter_mut() {
            listener.actor_added(actor);
        }
    }

    fn actor_removed(&mut self, actor: &Actor) {
        for listener in self.iter_mut() {
            listener.actor_removed(actor);
        }
    }

    fn tick(&mut self, actors: &dyn ActorOracle) {
        for listener in self.iter_mut() {
            listener.tick(actors);
        }
    }
}

/// Live entities keyed by id. Unknown ids count as disabled.
#[derive(Debug, Default)]
pub struct Actors(BTreeMap<EntityId, Actor>);

impl Actors {
    pub fn get(&self, id: EntityId) -> Option<&Actor> {
        self.0.get(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> + '_ {
        self.0.values()
    }
}

impl ActorOracle for Actors {
    fn is_disabled(&self, id: EntityId) -> bool {
        self.0.get(&id).is_none_or(Actor::is_disabled)
    }
}

/// Owns entities and drives one listener.
pub struct World<L> {
    actors: Actors,
    listener: L,
    map: MapDimensions,
    frame: u64,
}

impl<L: ActorListener> World<L> {
    pub fn new(map: MapDimensions, listener: L) -> Self {
        Self {
            actors: Actors::default(),
            listener,
            map,
            frame: 0,
        }
    }

    /// Adds an entity and notifies the listener before returning.
    pub fn add_actor(&mut self, actor: Actor) -> Result<(), WorldError> {
        if self.actors.0.contains_key(&actor.id) {
            return Err(WorldError::DuplicateActor(actor.id));
        }
        debug!(target: "powers::world", id = %actor.id, owner = %actor.owner, frame = self.frame, "actor added");
        let actor = self.actors.0.entry(actor.id).or_insert(actor);
        self.listener.actor_added(actor);
        Ok(())
    }

    /// Removes an entity and notifies the listener before returning it.
    pub fn remove_actor(&mut self, id: EntityId) -> Result<Actor, WorldError> {
        let actor = self
            .actors
            .0
            .remove(&id)
            .ok_or(WorldError::UnknownActor(id))?;
        debug!(target: "powers::world", id = %id, frame = self.frame, "actor removed");
        self.listener.actor_removed(&actor);
        Ok(actor)
    }

    /// Sets disable reasons on an entity.
    pub fn disable(&mut self, id: EntityId, reasons: DisableFlags) -> Result<(), WorldError> {
        let actor = self.actor_mut(id)?;
        actor.disabled.insert(reasons);
        Ok(())
    }

    /// Clears disable reasons on an entity. Other reasons stay in effect.
    pub fn enable(&mut self, id: EntityId, reasons: DisableFlags) -> Result<(), WorldError> {
        let actor = self.actor_mut(id)?;
        actor.disabled.remove(reasons);
        Ok(())
    }

    /// Runs one simulation step.
    pub fn tick(&mut self) {
        self.frame += 1;
        self.listener.tick(&self.actors);
    }

    /// Number of completed ticks.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn map(&self) -> &MapDimensions {
        &self.map
    }

    pub fn actors(&self) -> &Actors {
        &self.actors
    }

    pub fn actor(&self, id: EntityId) -> Option<&Actor> {
        self.actors.get(id)
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    fn actor_mut(&mut self, id: EntityId) -> Result<&mut Actor, WorldError> {
        self.actors.0.get_mut(&id).ok_or(WorldError::UnknownActor(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl ActorListener for Recorder {
        fn actor_added(&mut self, actor: &Actor) {
            self.events.push(format!("added {}", actor.id));
        }

        fn actor_removed(&mut self, actor: &Actor) {
            self.events.push(format!("removed {}", actor.id));
        }

        fn tick(&mut self, actors: &dyn ActorOracle) {
            self.events
                .push(format!("tick disabled={}", actors.is_disabled(EntityId(1))));
        }
    }

    fn world() -> World<Recorder> {
        World::new(MapDimensions::new(8, 8), Recorder::default())
    }

    #[test]
    fn delivers_events_in_call_order() {
        let mut world = world();
        world.add_actor(Actor::new(EntityId(1), PlayerId(1))).unwrap();
        world.tick();
        world.disable(EntityId(1), DisableFlags::JAMMED).unwrap();
        world.tick();
        world.remove_actor(EntityId(1)).unwrap();
        world.tick();

        assert_eq!(
            world.listener().events,
            [
                "added #1",
                "tick disabled=false",
                "tick disabled=true",
                "removed #1",
                "tick disabled=true",
            ]
        );
        assert_eq!(world.frame(), 3);
    }

    #[test]
    fn rejects_duplicate_and_unknown_ids() {
        let mut world = world();
        world.add_actor(Actor::new(EntityId(1), PlayerId(1))).unwrap();

        assert_eq!(
            world.add_actor(Actor::new(EntityId(1), PlayerId(2))),
            Err(WorldError::DuplicateActor(EntityId(1)))
        );
        assert_eq!(
            world.remove_actor(EntityId(5)).unwrap_err(),
            WorldError::UnknownActor(EntityId(5))
        );
        assert_eq!(
            world.disable(EntityId(5), DisableFlags::EMP),
            Err(WorldError::UnknownActor(EntityId(5)))
        );
        assert_eq!(world.listener().events, ["added #1"]);
    }

    #[test]
    fn enable_clears_only_given_reasons() {
        let mut world = world();
        world.add_actor(Actor::new(EntityId(1), PlayerId(1))).unwrap();
        world
            .disable(EntityId(1), DisableFlags::JAMMED | DisableFlags::LOW_POWER)
            .unwrap();
        world.enable(EntityId(1), DisableFlags::JAMMED).unwrap();

        assert!(world.actors().is_disabled(EntityId(1)));
        world.enable(EntityId(1), DisableFlags::LOW_POWER).unwrap();
        assert!(world.actors().is_enabled(EntityId(1)));
    }

    #[test]
    fn vec_listener_fans_out() {
        let mut world = World::new(
            MapDimensions::new(8, 8),
            vec![Recorder::default(), Recorder::default()],
        );
        world.add_actor(Actor::new(EntityId(2), PlayerId(1))).unwrap();

        for listener in world.listener() {
            assert_eq!(listener.events, ["added #2"]);
        }
    }
}
