//! Final scenario report in text or JSON form.

use std::fmt;

use anyhow::Result;
use powers_core::{EntityId, PlayerId, PowerState, SupportPowerInstance, SupportPowerManager};
use serde::Serialize;

use crate::power::{JournalEntry, JournalEvent};

#[derive(Clone, Debug, Serialize)]
pub struct Report {
    /// Number of completed world ticks.
    pub frames: u64,
    pub journal: Vec<JournalEntry>,
    pub players: Vec<PlayerReport>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PlayerReport {
    pub player: PlayerId,
    /// Hex-encoded SHA-256 of the manager state.
    pub sync_hash: String,
    pub powers: Vec<PowerReport>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PowerReport {
    pub key: String,
    pub state: PowerState,
    pub remaining: u32,
    pub total: u32,
    pub members: Vec<EntityId>,
}

impl PlayerReport {
    pub fn from_manager(manager: &SupportPowerManager) -> Self {
        Self {
            player: manager.owner(),
            sync_hash: hex::encode(manager.sync_hash()),
            powers: manager.powers().map(PowerReport::from_instance).collect(),
        }
    }
}

impl PowerReport {
    pub fn from_instance(instance: &SupportPowerInstance) -> Self {
        let progress = instance.progress();
        Self {
            key: instance.key().to_string(),
            state: instance.state(),
            remaining: progress.remaining,
            total: progress.total,
            members: instance.members().iter().map(|m| m.host).collect(),
        }
    }
}

impl Report {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| anyhow::anyhow!("Failed to serialize report: {}", e))
    }

    pub fn player(&self, player: PlayerId) -> Option<&PlayerReport> {
        self.players.iter().find(|p| p.player == player)
    }

    /// Journal entries of one kind, in recording order.
    pub fn events(&self, event: JournalEvent) -> impl Iterator<Item = &JournalEntry> + '_ {
        self.journal.iter().filter(move |e| e.event == event)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "frames: {}", self.frames)?;

        writeln!(f, "journal:")?;
        for entry in &self.journal {
            write!(
                f,
                "  [{:>5}] {:<9} {} on {}",
                entry.frame,
                entry.event,
                entry.key,
                entry.host
            )?;
            if let Some(target) = entry.target {
                write!(f, " at {}", target)?;
            }
            writeln!(f)?;
        }

        for player in &self.players {
            writeln!(f, "{} sync {}", player.player, player.sync_hash)?;
            for power in &player.powers {
                writeln!(
                    f,
                    "  {:<20} {:<9} {}/{} ticks, {} source(s)",
                    power.key,
                    power.state,
                    power.remaining,
                    power.total,
                    power.members.len()
                )?;
            }
        }

        Ok(())
    }
}
