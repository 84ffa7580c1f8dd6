//! Headless host for the support power system.
//!
//! The simulator owns a [`powers_core::World`] with one
//! [`powers_core::SupportPowerManager`] per player, replays a scripted
//! scenario tick by tick and reports every notification and activation the
//! powers produced, together with per-player sync digests.

pub mod config;
pub mod logging;
pub mod power;
pub mod report;
pub mod runner;
pub mod scenario;

pub use config::SimConfig;
pub use power::{Journal, JournalEntry, JournalEvent, ScriptedPower};
pub use report::{PlayerReport, PowerReport, Report};
pub use runner::Simulation;
pub use scenario::Scenario;
