//! Support powers: charge timers pooled per owner and key.
//!
//! - [`SupportPower`] is the provider attached to an entity.
//! - [`SupportPowerInstance`] pools all providers of one key and runs the
//!   countdown with its fire-once notifications.
//! - [`SupportPowerManager`] owns a player's instances and keeps them in step
//!   with entity lifecycle events.
mod info;
mod instance;
mod key;
mod manager;
mod source;
mod sync;

pub use info::{SupportPowerInfo, TargetingInfo};
pub use instance::{ChargeProgress, PowerState, SupportPowerInstance};
pub use key::PowerKey;
pub use manager::SupportPowerManager;
pub use source::{PowerMember, SupportPower};

use strum::{AsRefStr, Display};

/// Result of delivering an activation order.
///
/// Every outcome other than `Activated` means nothing happened. Hosts are free
/// to ignore it; it exists for logging and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ActivationOutcome {
    Activated,
    NotReady,
    UnknownPower,
}

/// Result of asking a power to start target selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum TargetingOutcome {
    Installed,
    NotReady,
    /// The power is ready but does not take a target.
    Untargeted,
    UnknownPower,
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::BTreeSet;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    use super::{PowerKey, SupportPower, SupportPowerInfo};
    use crate::env::ActorOracle;
    use crate::state::{EntityId, Order};

    /// Every entity is enabled.
    pub struct AllEnabled;

    impl ActorOracle for AllEnabled {
        fn is_disabled(&self, _id: EntityId) -> bool {
            false
        }
    }

    /// Listed entities are disabled.
    pub struct DisabledSet(BTreeSet<EntityId>);

    impl DisabledSet {
        pub fn of(ids: &[EntityId]) -> Self {
            Self(ids.iter().copied().collect())
        }
    }

    impl ActorOracle for DisabledSet {
        fn is_disabled(&self, id: EntityId) -> bool {
            self.0.contains(&id)
        }
    }

    /// Source that counts every callback it receives.
    pub struct CountingPower {
        info: SupportPowerInfo,
        charging: AtomicU32,
        charged: AtomicU32,
        activations: AtomicU32,
        last_activation: Mutex<Option<(EntityId, Order)>>,
    }

    impl CountingPower {
        pub fn shared(info: SupportPowerInfo) -> Arc<Self> {
            Arc::new(Self {
                info,
                charging: AtomicU32::new(0),
                charged: AtomicU32::new(0),
                activations: AtomicU32::new(0),
                last_activation: Mutex::new(None),
            })
        }

        pub fn charging_count(&self) -> u32 {
            self.charging.load(Ordering::SeqCst)
        }

        pub fn charged_count(&self) -> u32 {
            self.charged.load(Ordering::SeqCst)
        }

        pub fn activations(&self) -> u32 {
            self.activations.load(Ordering::SeqCst)
        }

        pub fn last_activation(&self) -> Option<(EntityId, Order)> {
            self.last_activation.lock().unwrap().clone()
        }
    }

    impl SupportPower for CountingPower {
        fn info(&self) -> &SupportPowerInfo {
            &self.info
        }

        fn activate(&self, host: EntityId, order: &Order) {
            self.activations.fetch_add(1, Ordering::SeqCst);
            *self.last_activation.lock().unwrap() = Some((host, order.clone()));
        }

        fn charging(&self, _host: EntityId, _key: &PowerKey) {
            self.charging.fetch_add(1, Ordering::SeqCst);
        }

        fn charged(&self, _host: EntityId, _key: &PowerKey) {
            self.charged.fetch_add(1, Ordering::SeqCst);
        }
    }
}
