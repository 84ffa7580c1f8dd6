//! Charge-timer state machine for one power key.
//!
//! An instance pools every source that maps to the same key and runs a single
//! countdown for all of them. Each tick it:
//!
//! 1. recomputes `active` (not exhausted and at least one member enabled),
//! 2. while active, counts down one tick and fires `charging` once per cycle,
//! 3. fires `charged` once per cycle as soon as the countdown reads zero.
//!
//! The ready latch is checked whether or not the instance is active, so an
//! instance that reaches zero while disabled still reports `charged` once.
//! Only [`SupportPowerInstance::activate`] rearms the latches and resets the
//! countdown; disabling members merely freezes it.

use strum::{AsRefStr, Display};
use tracing::{debug, trace};

use super::{ActivationOutcome, PowerKey, PowerMember, SupportPowerInfo, TargetingOutcome};
use crate::env::ActorOracle;
use crate::input::InputController;
use crate::state::{Order, PlayerId};

/// Externally visible phase of an instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PowerState {
    /// Active and still counting down.
    Charging,
    /// Active and fully charged.
    Ready,
    /// Every member is disabled; the countdown is frozen.
    Inactive,
    /// A one-shot power that has been used.
    Exhausted,
}

/// Countdown snapshot for progress displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChargeProgress {
    pub remaining: u32,
    pub total: u32,
}

impl ChargeProgress {
    /// Charged fraction in `0.0..=1.0`. Zero-length charges count as full.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 1.0;
        }
        1.0 - self.remaining as f32 / self.total as f32
    }
}

/// All sources of one power key for one owner, charging as a unit.
#[derive(Debug)]
pub struct SupportPowerInstance {
    key: PowerKey,
    info: SupportPowerInfo,
    members: Vec<PowerMember>,
    remaining_ticks: u32,
    total_ticks: u32,
    active: bool,
    disabled_forever: bool,
    notified_charging: bool,
    notified_ready: bool,
}

impl SupportPowerInstance {
    /// Creates an instance around its first member, fully discharged.
    pub fn new(key: PowerKey, first: PowerMember, ticks_per_second: u32) -> Self {
        let info = first.power.info().clone();
        let total_ticks = info.charge_ticks(ticks_per_second);
        Self {
            key,
            info,
            members: vec![first],
            remaining_ticks: total_ticks,
            total_ticks,
            active: false,
            disabled_forever: false,
            notified_charging: false,
            notified_ready: false,
        }
    }

    pub fn key(&self) -> &PowerKey {
        &self.key
    }

    /// Definition copied from the first source at creation.
    pub fn info(&self) -> &SupportPowerInfo {
        &self.info
    }

    pub fn members(&self) -> &[PowerMember] {
        &self.members
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.remaining_ticks
    }

    pub fn total_ticks(&self) -> u32 {
        self.total_ticks
    }

    /// Value computed by the most recent tick.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_disabled_forever(&self) -> bool {
        self.disabled_forever
    }

    pub fn notified_charging(&self) -> bool {
        self.notified_charging
    }

    pub fn notified_ready(&self) -> bool {
        self.notified_ready
    }

    pub fn is_ready(&self) -> bool {
        self.active && self.remaining_ticks == 0
    }

    pub fn progress(&self) -> ChargeProgress {
        ChargeProgress {
            remaining: self.remaining_ticks,
            total: self.total_ticks,
        }
    }

    pub fn state(&self) -> PowerState {
        if self.disabled_forever {
            PowerState::Exhausted
        } else if !self.active {
            PowerState::Inactive
        } else if self.remaining_ticks == 0 {
            PowerState::Ready
        } else {
            PowerState::Charging
        }
    }

    pub(crate) fn add_member(&mut self, member: PowerMember) {
        self.members.push(member);
    }

    /// Removes one member; returns whether it was present.
    pub(crate) fn remove_member(&mut self, member: &PowerMember) -> bool {
        match self
            .members
            .iter()
            .position(|m| m.is(member.host, &member.power))
        {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn representative(&self) -> Option<&PowerMember> {
        self.members.first()
    }

    /// Advances the countdown by one simulation step.
    pub fn tick(&mut self, actors: &dyn ActorOracle) {
        self.active = !self.disabled_forever
            && self.members.iter().any(|m| actors.is_enabled(m.host));

        let Some(power) = self.members.first().cloned() else {
            return;
        };

        if self.active {
            if self.remaining_ticks > 0 {
                self.remaining_ticks -= 1;
            }
            if !self.notified_charging {
                trace!(target: "powers::instance", key = %self.key, "charging");
                power.power.charging(power.host, &self.key);
                self.notified_charging = true;
            }
        }

        if self.remaining_ticks == 0 && !self.notified_ready {
            debug!(target: "powers::instance", key = %self.key, active = self.active, "charged");
            power.power.charged(power.host, &self.key);
            self.notified_ready = true;
        }
    }

    /// Fires the power if it is ready; otherwise does nothing.
    pub fn activate(&mut self, order: &Order) -> ActivationOutcome {
        if !self.is_ready() {
            trace!(
                target: "powers::instance",
                key = %self.key,
                remaining = self.remaining_ticks,
                active = self.active,
                "ignoring activation of power that is not ready"
            );
            return ActivationOutcome::NotReady;
        }
        let Some(power) = self.representative().cloned() else {
            return ActivationOutcome::NotReady;
        };

        power.power.activate(power.host, order);
        self.remaining_ticks = self.total_ticks;
        self.notified_charging = false;
        self.notified_ready = false;

        if self.info.one_shot {
            self.disabled_forever = true;
            // Exhausted instances never count as active again.
            self.active = false;
        }

        debug!(
            target: "powers::instance",
            key = %self.key,
            host = %power.host,
            location = ?order.target_location,
            queued = order.queued,
            one_shot = self.info.one_shot,
            "activated"
        );
        ActivationOutcome::Activated
    }

    /// Installs a targeting session for this power if it is ready.
    pub fn target(&self, owner: PlayerId, input: &mut InputController) -> TargetingOutcome {
        if !self.is_ready() {
            return TargetingOutcome::NotReady;
        }
        let Some(power) = self.representative() else {
            return TargetingOutcome::NotReady;
        };
        match power.power.order_generator(&self.key, owner) {
            Some(generator) => {
                input.install(generator);
                debug!(target: "powers::instance", key = %self.key, "targeting session installed");
                TargetingOutcome::Installed
            }
            None => TargetingOutcome::Untargeted,
        }
    }
}
