//! Step-by-step scenario replay.

use std::sync::Arc;

use anyhow::{Context, Result};
use powers_content::PowerCatalog;
use powers_core::{
    Actor, InputContext, InputController, MouseInput, Order, PlayerId, PowersConfig,
    PowersError, SupportPowerManager, TargetingOutcome, World, WorldError,
};
use tracing::{debug, info, warn};

use crate::power::{Journal, ScriptedPower};
use crate::report::{PlayerReport, Report};
use crate::scenario::Scenario;

/// A world with one power manager and one input controller per player.
///
/// Each step applies, in order: spawns, despawns, disable window edges,
/// scripted orders, scripted picks, the world tick and finally the input
/// controller ticks. Commands scheduled for step `n` therefore resolve
/// against the state left by step `n - 1`.
pub struct Simulation {
    scenario: Scenario,
    catalog: PowerCatalog,
    world: World<Vec<SupportPowerManager>>,
    inputs: Vec<InputController>,
    journal: Arc<Journal>,
    step: u64,
}

impl Simulation {
    pub fn new(scenario: Scenario, catalog: PowerCatalog, config: &PowersConfig) -> Result<Self> {
        config.validate()?;
        scenario.validate(&catalog)?;

        let managers = scenario
            .players
            .iter()
            .map(|&player| SupportPowerManager::new(PlayerId(player), config))
            .collect();
        let inputs = scenario
            .players
            .iter()
            .map(|_| InputController::new())
            .collect();

        Ok(Self {
            world: World::new(scenario.map, managers),
            inputs,
            journal: Journal::new(),
            scenario,
            catalog,
            step: 0,
        })
    }

    /// Runs every remaining step and returns the final report.
    pub fn run(mut self) -> Result<Report> {
        info!(
            target: "powers::sim",
            ticks = self.scenario.ticks,
            players = self.scenario.players.len(),
            actors = self.scenario.actors.len(),
            "scenario started"
        );
        while self.step < self.scenario.ticks {
            self.advance()?;
        }
        info!(target: "powers::sim", frame = self.world.frame(), "scenario finished");
        Ok(self.report())
    }

    /// Processes the next step.
    pub fn advance(&mut self) -> Result<()> {
        let step = self.step;
        self.journal.set_frame(step);

        self.apply_lifecycle(step)?;
        self.apply_disables(step);
        self.apply_orders(step);
        self.apply_picks(step);

        self.world.tick();
        for (index, input) in self.inputs.iter_mut().enumerate() {
            let ctx = InputContext::new(&self.world.listener()[index], self.world.map());
            input.tick(&ctx);
        }

        self.step += 1;
        Ok(())
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn world(&self) -> &World<Vec<SupportPowerManager>> {
        &self.world
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Power manager of `player`, if the scenario declares that player.
    pub fn manager(&self, player: u32) -> Option<&SupportPowerManager> {
        self.player_index(player)
            .map(|index| &self.world.listener()[index])
    }

    pub fn input(&self, player: u32) -> Option<&InputController> {
        self.player_index(player).map(|index| &self.inputs[index])
    }

    pub fn report(&self) -> Report {
        Report {
            frames: self.world.frame(),
            journal: self.journal.entries(),
            players: self
                .world
                .listener()
                .iter()
                .map(PlayerReport::from_manager)
                .collect(),
        }
    }

    fn player_index(&self, player: u32) -> Option<usize> {
        self.scenario.players.iter().position(|&p| p == player)
    }

    fn apply_lifecycle(&mut self, step: u64) -> Result<()> {
        for entry in self.scenario.actors.iter().filter(|a| a.spawn == step) {
            let mut actor = Actor::new(entry.entity(), entry.owner());
            for name in &entry.powers {
                let info = self
                    .catalog
                    .get(name)
                    .with_context(|| format!("Unknown power {}", name))?;
                actor = actor.with_power(ScriptedPower::shared(info.clone(), &self.journal));
            }
            self.world
                .add_actor(actor)
                .with_context(|| format!("Failed to spawn actor at step {}", step))?;
        }

        for entry in self
            .scenario
            .actors
            .iter()
            .filter(|a| a.despawn == Some(step))
        {
            self.world
                .remove_actor(entry.entity())
                .with_context(|| format!("Failed to despawn actor at step {}", step))?;
        }

        Ok(())
    }

    fn apply_disables(&mut self, step: u64) {
        for entry in &self.scenario.disables {
            if entry.from == step {
                if let Err(err) = self.world.disable(entry.entity(), entry.reason) {
                    report_skipped(step, &err);
                }
            }
            if entry.to == Some(step) {
                if let Err(err) = self.world.enable(entry.entity(), entry.reason) {
                    report_skipped(step, &err);
                }
            }
        }
    }

    fn apply_orders(&mut self, step: u64) {
        for entry in self.scenario.orders.iter().filter(|o| o.tick == step) {
            let Some(index) = self.scenario.players.iter().position(|&p| p == entry.player) else {
                continue;
            };
            let mut order = Order::new(entry.key.as_str(), entry.player());
            order.target_location = entry.target;
            order.queued = entry.queued;

            let outcome = self.world.listener_mut()[index].resolve_order(&order);
            debug!(
                target: "powers::sim",
                step,
                player = %entry.player(),
                key = %entry.key,
                %outcome,
                "scripted order"
            );
        }
    }

    fn apply_picks(&mut self, step: u64) {
        for entry in self.scenario.picks.iter().filter(|p| p.tick == step) {
            let Some(index) = self.scenario.players.iter().position(|&p| p == entry.player) else {
                continue;
            };

            let manager = &self.world.listener()[index];
            let input = &mut self.inputs[index];
            let outcome = manager.target(&entry.key, input);
            if outcome != TargetingOutcome::Installed {
                debug!(
                    target: "powers::sim",
                    step,
                    player = %entry.player(),
                    key = %entry.key,
                    %outcome,
                    "targeting not started"
                );
                continue;
            }

            let ctx = InputContext::new(manager, self.world.map());
            let orders = input.handle_pick(&ctx, MouseInput::new(entry.button, entry.location));
            for order in &orders {
                let outcome = self.world.listener_mut()[index].resolve_order(order);
                debug!(
                    target: "powers::sim",
                    step,
                    player = %entry.player(),
                    key = %order.order_string,
                    %outcome,
                    "picked order"
                );
            }
        }
    }
}

fn report_skipped(step: u64, err: &WorldError) {
    warn!(
        target: "powers::sim",
        step,
        code = err.error_code(),
        severity = err.severity().as_str(),
        "skipped disable edge: {}",
        err
    );
}
