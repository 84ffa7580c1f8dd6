//! Player interaction modes.
//!
//! At most one [`OrderGenerator`] is installed on a player's
//! [`InputController`] at a time. Installing a new one replaces the old one.
//! Modes never remove themselves from the slot directly; they answer with a
//! [`ModeTransition`] and the controller applies it, so a mode can always ask
//! to exit from inside its own callback.

mod targeting;

pub use targeting::SelectGenericPowerTarget;

use strum::{AsRefStr, Display, EnumString};
use tracing::debug;

use crate::env::MapBounds;
use crate::power::SupportPowerManager;
use crate::state::{Location, Order};

/// Cursor shown when no interaction mode is installed.
pub const DEFAULT_CURSOR: &str = "default";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Display, AsRefStr, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// A pointer pick delivered to the installed mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseInput {
    pub button: MouseButton,
    pub location: Location,
}

impl MouseInput {
    pub const fn new(button: MouseButton, location: Location) -> Self {
        Self { button, location }
    }
}

/// What the controller should do with the mode after a callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModeTransition {
    #[default]
    Keep,
    Exit,
}

/// Orders produced by a pick, plus the mode transition to apply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderResponse {
    pub orders: Vec<Order>,
    pub transition: ModeTransition,
}

impl OrderResponse {
    pub fn exit() -> Self {
        Self {
            orders: Vec::new(),
            transition: ModeTransition::Exit,
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }
}

/// Read-only state an interaction mode may consult.
#[derive(Clone, Copy)]
pub struct InputContext<'a> {
    pub powers: &'a SupportPowerManager,
    pub map: &'a dyn MapBounds,
}

impl<'a> InputContext<'a> {
    pub fn new(powers: &'a SupportPowerManager, map: &'a dyn MapBounds) -> Self {
        Self { powers, map }
    }
}

/// An interaction mode that turns pointer input into orders.
pub trait OrderGenerator {
    fn order(&mut self, ctx: &InputContext<'_>, input: MouseInput) -> OrderResponse;

    /// Called once per interaction tick, independent of picks.
    fn tick(&mut self, _ctx: &InputContext<'_>) -> ModeTransition {
        ModeTransition::Keep
    }

    fn cursor(&self, ctx: &InputContext<'_>, location: Location) -> &str;
}

/// Single-slot owner of a player's current interaction mode.
#[derive(Default)]
pub struct InputController {
    mode: Option<Box<dyn OrderGenerator>>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a mode, returning the one it replaced.
    pub fn install(&mut self, mode: Box<dyn OrderGenerator>) -> Option<Box<dyn OrderGenerator>> {
        self.mode.replace(mode)
    }

    /// Exits the current mode. Returns whether one was installed.
    pub fn cancel(&mut self) -> bool {
        self.mode.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.mode.is_some()
    }

    /// Delivers a pick to the installed mode and collects its orders.
    pub fn handle_pick(&mut self, ctx: &InputContext<'_>, input: MouseInput) -> Vec<Order> {
        let Some(mut mode) = self.mode.take() else {
            return Vec::new();
        };
        let response = mode.order(ctx, input);
        self.restore(mode, response.transition);
        response.orders
    }

    /// Gives the installed mode its per-tick chance to exit.
    pub fn tick(&mut self, ctx: &InputContext<'_>) {
        let Some(mut mode) = self.mode.take() else {
            return;
        };
        let transition = mode.tick(ctx);
        if transition == ModeTransition::Exit {
            debug!(target: "powers::input", "interaction mode exited on tick");
        }
        self.restore(mode, transition);
    }

    pub fn cursor(&self, ctx: &InputContext<'_>, location: Location) -> &str {
        match &self.mode {
            Some(mode) => mode.cursor(ctx, location),
            None => DEFAULT_CURSOR,
        }
    }

    fn restore(&mut self, mode: Box<dyn OrderGenerator>, transition: ModeTransition) {
        if transition == ModeTransition::Keep && self.mode.is_none() {
            self.mode = Some(mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PowersConfig;
    use crate::env::MapDimensions;
    use crate::state::PlayerId;

    /// Mode that counts picks and exits after a fixed number.
    struct Countdown(u32);

    impl OrderGenerator for Countdown {
        fn order(&mut self, _ctx: &InputContext<'_>, _input: MouseInput) -> OrderResponse {
            self.0 -= 1;
            OrderResponse {
                orders: Vec::new(),
                transition: if self.0 == 0 {
                    ModeTransition::Exit
                } else {
                    ModeTransition::Keep
                },
            }
        }

        fn cursor(&self, _ctx: &InputContext<'_>, _location: Location) -> &str {
            "countdown"
        }
    }

    #[test]
    fn mode_stays_until_it_exits() {
        let powers = SupportPowerManager::new(PlayerId(1), &PowersConfig::default());
        let map = MapDimensions::new(4, 4);
        let ctx = InputContext::new(&powers, &map);
        let mut input = InputController::new();
        input.install(Box::new(Countdown(2)));
        let pick = MouseInput::new(MouseButton::Left, Location::ORIGIN);

        input.handle_pick(&ctx, pick);
        assert!(input.is_active());
        assert_eq!(input.cursor(&ctx, Location::ORIGIN), "countdown");

        input.handle_pick(&ctx, pick);
        assert!(!input.is_active());
        assert_eq!(input.cursor(&ctx, Location::ORIGIN), DEFAULT_CURSOR);
    }

    #[test]
    fn install_replaces_previous_mode() {
        let mut input = InputController::new();
        assert!(input.install(Box::new(Countdown(1))).is_none());
        assert!(input.install(Box::new(Countdown(5))).is_some());
        assert!(input.cancel());
        assert!(!input.cancel());
    }

    #[test]
    fn button_names_parse_case_insensitively() {
        assert_eq!("Right".parse::<MouseButton>().unwrap(), MouseButton::Right);
        assert_eq!("middle".parse::<MouseButton>().unwrap(), MouseButton::Middle);
        assert_eq!(MouseButton::Left.to_string(), "left");
        assert!("thumb".parse::<MouseButton>().is_err());
    }
}
