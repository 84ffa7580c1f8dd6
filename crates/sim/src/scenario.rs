//! Scripted scenario definitions.
//!
//! A scenario is a RON file describing entities, disable windows and player
//! commands keyed by simulation step:
//!
//! ```ron
//! (
//!     ticks: 100,
//!     map: (width: 64, height: 64),
//!     players: [1, 2],
//!     actors: [(id: 1, owner: 1, powers: ["ParaDrop"], spawn: 0)],
//!     disables: [(actor: 1, reason: "JAMMED", from: 10, to: Some(20))],
//!     orders: [(tick: 80, player: 1, key: "ParaDrop_1", target: Some((x: 4, y: 4)))],
//!     picks: [],
//! )
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use powers_content::PowerCatalog;
use powers_core::{DisableFlags, EntityId, Location, MapDimensions, MouseButton, PlayerId};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct Scenario {
    /// Number of simulation steps to run.
    pub ticks: u64,
    #[serde(default = "default_map")]
    pub map: MapDimensions,
    pub players: Vec<u32>,
    #[serde(default)]
    pub actors: Vec<ScriptedActor>,
    #[serde(default)]
    pub disables: Vec<DisableWindow>,
    #[serde(default)]
    pub orders: Vec<ScriptedOrder>,
    #[serde(default)]
    pub picks: Vec<ScriptedPick>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScriptedActor {
    pub id: u32,
    pub owner: u32,
    /// Order names looked up in the power catalog.
    #[serde(default)]
    pub powers: Vec<String>,
    #[serde(default)]
    pub spawn: u64,
    #[serde(default)]
    pub despawn: Option<u64>,
}

/// Disable window: reasons are set at `from` and cleared at `to`.
#[derive(Clone, Debug, Deserialize)]
pub struct DisableWindow {
    pub actor: u32,
    pub reason: DisableFlags,
    pub from: u64,
    #[serde(default)]
    pub to: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScriptedOrder {
    pub tick: u64,
    pub player: u32,
    pub key: String,
    #[serde(default)]
    pub target: Option<Location>,
    #[serde(default)]
    pub queued: bool,
}

/// Requests targeting for `key`, then delivers one pick in the same step.
#[derive(Clone, Debug, Deserialize)]
pub struct ScriptedPick {
    pub tick: u64,
    pub player: u32,
    pub key: String,
    pub location: Location,
    #[serde(default)]
    pub button: MouseButton,
}

fn default_map() -> MapDimensions {
    MapDimensions::new(64, 64)
}

impl ScriptedActor {
    pub fn entity(&self) -> EntityId {
        EntityId(self.id)
    }

    pub fn owner(&self) -> PlayerId {
        PlayerId(self.owner)
    }
}

impl DisableWindow {
    pub fn entity(&self) -> EntityId {
        EntityId(self.actor)
    }
}

impl ScriptedOrder {
    pub fn player(&self) -> PlayerId {
        PlayerId(self.player)
    }
}

impl ScriptedPick {
    pub fn player(&self) -> PlayerId {
        PlayerId(self.player)
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid scenario {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }

    /// Checks references against the catalog and the player list.
    pub fn validate(&self, catalog: &PowerCatalog) -> Result<()> {
        let players: BTreeSet<_> = self.players.iter().copied().collect();
        if players.len() != self.players.len() {
            anyhow::bail!("Duplicate player in scenario");
        }
        if let Some(&neutral) = self.players.iter().find(|&&p| PlayerId(p).is_neutral()) {
            anyhow::bail!("{} is neutral and cannot own powers", PlayerId(neutral));
        }

        let mut ids = BTreeSet::new();
        for actor in &self.actors {
            if !ids.insert(actor.id) {
                anyhow::bail!("Duplicate actor id {}", actor.entity());
            }
            for name in &actor.powers {
                if catalog.get(name).is_none() {
                    anyhow::bail!("Actor {} references unknown power {}", actor.entity(), name);
                }
            }
            if actor.despawn.is_some_and(|despawn| despawn < actor.spawn) {
                anyhow::bail!("Actor {} despawns before it spawns", actor.entity());
            }
        }

        for disable in &self.disables {
            if !ids.contains(&disable.actor) {
                anyhow::bail!("Disable window references unknown actor {}", disable.entity());
            }
            if disable.to.is_some_and(|to| to < disable.from) {
                anyhow::bail!("Disable window for {} ends before it starts", disable.entity());
            }
        }

        let commands = self
            .orders
            .iter()
            .map(ScriptedOrder::player)
            .chain(self.picks.iter().map(ScriptedPick::player));
        for player in commands {
            if !players.contains(&player.0) {
                anyhow::bail!("Command issued by unknown {}", player);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use powers_core::SupportPowerInfo;

    use super::*;

    fn catalog() -> PowerCatalog {
        PowerCatalog::from_definitions(vec![SupportPowerInfo::new("Sonar", 1)]).unwrap()
    }

    #[test]
    fn parses_with_defaults() {
        let scenario = Scenario::parse(
            r#"(
                ticks: 10,
                players: [1],
                actors: [(id: 3, owner: 1, powers: ["Sonar"])],
                disables: [(actor: 3, reason: "JAMMED | EMP", from: 2, to: Some(4))],
                picks: [(tick: 5, player: 1, key: "Sonar", location: (x: 1, y: 2))],
            )"#,
        )
        .unwrap();

        assert_eq!(scenario.map, MapDimensions::new(64, 64));
        assert_eq!(scenario.actors[0].spawn, 0);
        assert_eq!(
            scenario.disables[0].reason,
            DisableFlags::JAMMED | DisableFlags::EMP
        );
        assert_eq!(scenario.picks[0].button, MouseButton::Left);
        scenario.validate(&catalog()).unwrap();
    }

    #[test]
    fn rejects_unknown_power() {
        let scenario = Scenario::parse(
            r#"(ticks: 1, players: [1], actors: [(id: 1, owner: 1, powers: ["Nuke"])])"#,
        )
        .unwrap();
        let err = scenario.validate(&catalog()).unwrap_err();
        assert!(err.to_string().contains("Nuke"));
    }

    #[test]
    fn rejects_orders_from_unknown_players() {
        let scenario = Scenario::parse(
            r#"(ticks: 1, players: [1], orders: [(tick: 0, player: 2, key: "Sonar")])"#,
        )
        .unwrap();
        assert!(scenario.validate(&catalog()).is_err());
    }

    #[test]
    fn disable_reason_reads_flag_names() {
        let scenario = Scenario::parse(
            r#"(
                ticks: 1,
                players: [1],
                actors: [(id: 3, owner: 1)],
                disables: [
                    (actor: 3, reason: "JAMMED", from: 0),
                    (actor: 3, reason: "LOW_POWER|SCRIPTED", from: 0),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(scenario.disables[0].reason, DisableFlags::JAMMED);
        assert_eq!(scenario.disables[0].to, None);
        assert_eq!(
            scenario.disables[1].reason,
            DisableFlags::LOW_POWER | DisableFlags::SCRIPTED
        );
    }

    #[test]
    fn unknown_disable_reason_is_rejected() {
        let result = Scenario::parse(
            r#"(ticks: 1, players: [1], disables: [(actor: 3, reason: "STUNNED", from: 0)])"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn neutral_player_cannot_be_scripted() {
        let scenario = Scenario::parse(r#"(ticks: 1, players: [0, 1])"#).unwrap();
        let err = scenario.validate(&catalog()).unwrap_err();
        assert!(err.to_string().contains("player0"));
    }

    #[test]
    fn orders_are_unqueued_by_default() {
        let scenario = Scenario::parse(
            r#"(
                ticks: 1,
                players: [1],
                orders: [
                    (tick: 0, player: 1, key: "Sonar"),
                    (tick: 0, player: 1, key: "Sonar", queued: true),
                ],
            )"#,
        )
        .unwrap();
        assert!(!scenario.orders[0].queued);
        assert!(scenario.orders[1].queued);
    }
}
