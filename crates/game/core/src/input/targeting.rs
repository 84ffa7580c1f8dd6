//! Generic location pick for targeted support powers.

use tracing::debug;

use super::{
    InputContext, ModeTransition, MouseButton, MouseInput, OrderGenerator, OrderResponse,
};
use crate::power::PowerKey;
use crate::state::{Location, Order, PlayerId};

/// Single-use session that collects one target cell for a power.
///
/// The session tracks the power by key rather than by instance: the instance
/// can disappear while the player is still choosing, in which case the next
/// interaction tick exits the mode.
#[derive(Clone, Debug)]
pub struct SelectGenericPowerTarget {
    key: PowerKey,
    owner: PlayerId,
    cursor: String,
    expected_button: MouseButton,
}

impl SelectGenericPowerTarget {
    /// Cursor shown while the pointer is off the map.
    pub const BLOCKED_CURSOR: &'static str = "generic-blocked";

    pub fn new(
        key: PowerKey,
        owner: PlayerId,
        cursor: impl Into<String>,
        expected_button: MouseButton,
    ) -> Self {
        Self {
            key,
            owner,
            cursor: cursor.into(),
            expected_button,
        }
    }

    pub fn key(&self) -> &PowerKey {
        &self.key
    }
}

impl OrderGenerator for SelectGenericPowerTarget {
    fn order(&mut self, ctx: &InputContext<'_>, input: MouseInput) -> OrderResponse {
        // Any pick ends the session, valid or not.
        let response = OrderResponse::exit();

        if input.button != self.expected_button || !ctx.map.contains(input.location) {
            debug!(
                target: "powers::input",
                key = %self.key,
                button = %input.button,
                location = %input.location,
                "targeting cancelled by invalid pick"
            );
            return response;
        }

        response.with_order(Order::new(self.key.as_str(), self.owner).with_target(input.location))
    }

    fn tick(&mut self, ctx: &InputContext<'_>) -> ModeTransition {
        if ctx.powers.contains(self.key.as_str()) {
            ModeTransition::Keep
        } else {
            ModeTransition::Exit
        }
    }

    fn cursor(&self, ctx: &InputContext<'_>, location: Location) -> &str {
        if ctx.map.contains(location) {
            &self.cursor
        } else {
            Self::BLOCKED_CURSOR
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::PowersConfig;
    use crate::env::MapDimensions;
    use crate::input::InputController;
    use crate::power::testing::CountingPower;
    use crate::power::{SupportPower, SupportPowerInfo, SupportPowerManager};
    use crate::state::EntityId;
    use crate::world::Actor;

    const OWNER: PlayerId = PlayerId(1);

    fn session() -> Box<SelectGenericPowerTarget> {
        Box::new(SelectGenericPowerTarget::new(
            PowerKey::new("Airstrike"),
            OWNER,
            "airstrike",
            MouseButton::Left,
        ))
    }

    fn manager_with_airstrike() -> (SupportPowerManager, Actor) {
        let power: Arc<dyn SupportPower> =
            CountingPower::shared(SupportPowerInfo::new("Airstrike", 1));
        let actor = Actor::new(EntityId(1), OWNER).with_power(power);
        let mut manager = SupportPowerManager::new(OWNER, &PowersConfig::default());
        manager.actor_added(&actor);
        (manager, actor)
    }

    #[test]
    fn valid_pick_emits_one_order_and_exits() {
        let (powers, _actor) = manager_with_airstrike();
        let map = MapDimensions::new(16, 16);
        let ctx = InputContext::new(&powers, &map);
        let mut input = InputController::new();
        input.install(session());

        let orders = input.handle_pick(&ctx, MouseInput::new(MouseButton::Left, Location::new(3, 4)));

        assert_eq!(
            orders,
            [Order::new("Airstrike", OWNER).with_target(Location::new(3, 4))]
        );
        assert!(!input.is_active());
    }

    #[test]
    fn wrong_button_exits_without_order() {
        let (powers, _actor) = manager_with_airstrike();
        let map = MapDimensions::new(16, 16);
        let ctx = InputContext::new(&powers, &map);
        let mut input = InputController::new();
        input.install(session());

        let orders = input.handle_pick(&ctx, MouseInput::new(MouseButton::Right, Location::new(3, 4)));

        assert!(orders.is_empty());
        assert!(!input.is_active());
    }

    #[test]
    fn off_map_pick_exits_without_order() {
        let (powers, _actor) = manager_with_airstrike();
        let map = MapDimensions::new(16, 16);
        let ctx = InputContext::new(&powers, &map);
        let mut input = InputController::new();
        input.install(session());

        let orders = input.handle_pick(&ctx, MouseInput::new(MouseButton::Left, Location::new(16, 0)));

        assert!(orders.is_empty());
        assert!(!input.is_active());
    }

    #[test]
    fn tick_exits_when_power_disappears() {
        let (mut powers, actor) = manager_with_airstrike();
        let map = MapDimensions::new(16, 16);
        let mut input = InputController::new();
        input.install(session());

        input.tick(&InputContext::new(&powers, &map));
        assert!(input.is_active());

        powers.actor_removed(&actor);
        input.tick(&InputContext::new(&powers, &map));
        assert!(!input.is_active());
    }

    #[test]
    fn cursor_is_blocked_off_map() {
        let (powers, _actor) = manager_with_airstrike();
        let map = MapDimensions::new(16, 16);
        let ctx = InputContext::new(&powers, &map);
        let target = session();

        assert_eq!(target.cursor(&ctx, Location::new(1, 1)), "airstrike");
        assert_eq!(
            target.cursor(&ctx, Location::new(-1, 1)),
            SelectGenericPowerTarget::BLOCKED_CURSOR
        );
    }
}
