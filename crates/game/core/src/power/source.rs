//! Ability sources: the concrete providers attached to entities.

use std::fmt;
use std::sync::Arc;

use super::{PowerKey, SupportPowerInfo};
use crate::input::{OrderGenerator, SelectGenericPowerTarget};
use crate::state::{EntityId, Order, PlayerId};

/// A single provider of one support power type on one entity.
///
/// The manager only drives the countdown. What the power actually does, and
/// how the host reacts to charge notifications, is up to the implementor.
/// Sources are shared as `Arc<dyn SupportPower>` between the entity that
/// carries them and the manager; state they need to mutate must use interior
/// mutability.
pub trait SupportPower: Send + Sync {
    fn info(&self) -> &SupportPowerInfo;

    /// Applies the power's effect. Called on the representative source only,
    /// and only when its instance is ready.
    fn activate(&self, host: EntityId, order: &Order);

    /// The instance started counting down. Fires once per charge cycle.
    fn charging(&self, _host: EntityId, _key: &PowerKey) {}

    /// The instance finished charging. Fires once per charge cycle.
    fn charged(&self, _host: EntityId, _key: &PowerKey) {}

    /// Builds the interaction that collects a target for this power.
    ///
    /// The default produces a generic location pick from
    /// [`SupportPowerInfo::targeting`], and nothing for untargeted powers.
    fn order_generator(&self, key: &PowerKey, owner: PlayerId) -> Option<Box<dyn OrderGenerator>> {
        let targeting = self.info().targeting.as_ref()?;
        Some(Box::new(SelectGenericPowerTarget::new(
            key.clone(),
            owner,
            targeting.cursor.clone(),
            targeting.button,
        )))
    }
}

/// One source held by an instance, together with the entity carrying it.
#[derive(Clone)]
pub struct PowerMember {
    pub host: EntityId,
    pub power: Arc<dyn SupportPower>,
}

impl PowerMember {
    pub fn new(host: EntityId, power: Arc<dyn SupportPower>) -> Self {
        Self { host, power }
    }

    /// True if `other` is the same source on the same entity.
    pub fn is(&self, host: EntityId, power: &Arc<dyn SupportPower>) -> bool {
        self.host == host && Arc::ptr_eq(&self.power, power)
    }
}

impl fmt::Debug for PowerMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PowerMember")
            .field("host", &self.host)
            .field("power", &self.power.info().order_name)
            .finish()
    }
}
