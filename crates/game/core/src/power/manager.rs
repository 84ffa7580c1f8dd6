//! Per-owner registry of support power instances.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::{
    ActivationOutcome, ChargeProgress, PowerKey, PowerMember, SupportPowerInstance,
    TargetingOutcome,
};
use crate::config::PowersConfig;
use crate::env::ActorOracle;
use crate::input::InputController;
use crate::state::{Order, PlayerId};
use crate::world::{Actor, ActorListener};

/// Owns every support power instance of one player.
///
/// The manager listens to entity lifecycle events and keeps exactly one
/// instance per live key: the first source for a key creates the instance,
/// the last removed source deletes it. No empty instance is ever observable.
///
/// Instances are kept in key order, which fixes the order they tick in.
#[derive(Debug)]
pub struct SupportPowerManager {
    owner: PlayerId,
    ticks_per_second: u32,
    powers: BTreeMap<PowerKey, SupportPowerInstance>,
}

impl SupportPowerManager {
    pub fn new(owner: PlayerId, config: &PowersConfig) -> Self {
        Self {
            owner,
            ticks_per_second: config.ticks_per_second,
            powers: BTreeMap::new(),
        }
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Registers every source on a newly added entity owned by this player.
    pub fn actor_added(&mut self, actor: &Actor) {
        if actor.owner != self.owner || actor.powers.is_empty() {
            return;
        }

        for power in &actor.powers {
            let key = PowerKey::derive(power.info(), actor.id);
            let member = PowerMember::new(actor.id, power.clone());

            match self.powers.get_mut(&key) {
                Some(instance) => {
                    instance.add_member(member);
                    debug!(
                        target: "powers::manager",
                        owner = %self.owner,
                        key = %key,
                        host = %actor.id,
                        members = instance.members().len(),
                        "source joined existing power"
                    );
                }
                None => {
                    let instance =
                        SupportPowerInstance::new(key.clone(), member, self.ticks_per_second);
                    debug!(
                        target: "powers::manager",
                        owner = %self.owner,
                        key = %key,
                        host = %actor.id,
                        total_ticks = instance.total_ticks(),
                        "power created"
                    );
                    self.powers.insert(key, instance);
                }
            }
        }
    }

    /// Unregisters every source on a removed entity, deleting instances that
    /// lose their last member.
    pub fn actor_removed(&mut self, actor: &Actor) {
        if actor.owner != self.owner || actor.powers.is_empty() {
            return;
        }

        for power in &actor.powers {
            let key = PowerKey::derive(power.info(), actor.id);
            let member = PowerMember::new(actor.id, power.clone());

            let Some(instance) = self.powers.get_mut(&key) else {
                trace!(
                    target: "powers::manager",
                    owner = %self.owner,
                    key = %key,
                    "removed source had no power"
                );
                continue;
            };

            instance.remove_member(&member);
            if instance.is_empty() {
                self.powers.remove(&key);
                debug!(target: "powers::manager", owner = %self.owner, key = %key, "power removed");
            }
        }
    }

    /// Advances every instance by one simulation step. Safe with no instances.
    pub fn tick(&mut self, actors: &dyn ActorOracle) {
        for instance in self.powers.values_mut() {
            instance.tick(actors);
        }
    }

    /// Activates the power named by the order's key.
    ///
    /// Orders for keys that no longer exist (the source died between issuing
    /// and delivery) are dropped silently.
    pub fn resolve_order(&mut self, order: &Order) -> ActivationOutcome {
        match self.powers.get_mut(order.key()) {
            Some(instance) => instance.activate(order),
            None => {
                trace!(
                    target: "powers::manager",
                    owner = %self.owner,
                    key = order.key(),
                    "dropping order for unknown power"
                );
                ActivationOutcome::UnknownPower
            }
        }
    }

    /// Asks a ready power to start its targeting session on `input`.
    pub fn target(&self, key: &str, input: &mut InputController) -> TargetingOutcome {
        match self.powers.get(key) {
            Some(instance) => instance.target(self.owner, input),
            None => TargetingOutcome::UnknownPower,
        }
    }

    pub fn power(&self, key: &str) -> Option<&SupportPowerInstance> {
        self.powers.get(key)
    }

    /// Iterates instances in key order.
    pub fn powers(&self) -> impl Iterator<Item = &SupportPowerInstance> + '_ {
        self.powers.values()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.powers.contains_key(key)
    }

    pub fn is_ready(&self, key: &str) -> bool {
        self.powers.get(key).is_some_and(|p| p.is_ready())
    }

    pub fn progress(&self, key: &str) -> Option<ChargeProgress> {
        self.powers.get(key).map(|p| p.progress())
    }

    pub fn len(&self) -> usize {
        self.powers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }
}

impl ActorListener for SupportPowerManager {
    fn actor_added(&mut self, actor: &Actor) {
        SupportPowerManager::actor_added(self, actor);
    }

    fn actor_removed(&mut self, actor: &Actor) {
        SupportPowerManager::actor_removed(self, actor);
    }

    fn tick(&mut self, actors: &dyn ActorOracle) {
        SupportPowerManager::tick(self, actors);
    }
}
