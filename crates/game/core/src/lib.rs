//! Deterministic support power bookkeeping.
//!
//! `powers-core` tracks abilities that charge up over time, become ready, are
//! activated (optionally after the player picks a target) and then charge
//! again. Every live source of a power is grouped per owner and key into one
//! [`SupportPowerInstance`], which owns the countdown and fires its charging
//! and ready notifications exactly once per cycle.
//!
//! The crate is driven by a host simulation: entity lifecycle events arrive
//! through [`world::ActorListener`], the host calls `tick` once per simulation
//! step, and player commands reach [`SupportPowerManager::resolve_order`]. All
//! calls are synchronous and single-threaded, so every participant that feeds
//! the same ordered stream ends in the same state (see
//! [`SupportPowerManager::sync_hash`]).
pub mod config;
pub mod env;
pub mod error;
pub mod input;
pub mod power;
pub mod state;
pub mod world;

pub use config::PowersConfig;
pub use env::{ActorOracle, MapBounds, MapDimensions};
pub use error::{ConfigError, ErrorSeverity, PowersError, WorldError};
pub use input::{
    DEFAULT_CURSOR, InputContext, InputController, ModeTransition, MouseButton, MouseInput,
    OrderGenerator, OrderResponse, SelectGenericPowerTarget,
};
pub use power::{
    ActivationOutcome, ChargeProgress, PowerKey, PowerMember, PowerState, SupportPower,
    SupportPowerInfo, SupportPowerInstance, SupportPowerManager, TargetingInfo, TargetingOutcome,
};
pub use state::{DisableFlags, EntityId, Location, Order, PlayerId};
pub use world::{Actor, ActorListener, Actors, World};
