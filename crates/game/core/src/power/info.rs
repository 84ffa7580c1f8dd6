//! Static support power definitions.

use crate::input::MouseButton;

/// Immutable definition shared by every source of one support power type.
///
/// A manager copies the definition of the first source it sees for a key and
/// never re-reads it, so later sources for the same key cannot change charge
/// time or one-shot behaviour of a running countdown.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SupportPowerInfo {
    /// Identity of the power; also the order string when only one copy counts.
    pub order_name: String,

    /// Charge time in seconds.
    pub charge_time: u32,

    /// When set, every entity carrying this power charges its own copy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allow_multiple: bool,

    /// When set, the power disables itself permanently after the first use.
    #[cfg_attr(feature = "serde", serde(default))]
    pub one_shot: bool,

    /// Present when the player must pick a location before activation.
    #[cfg_attr(feature = "serde", serde(default))]
    pub targeting: Option<TargetingInfo>,
}

impl SupportPowerInfo {
    pub fn new(order_name: impl Into<String>, charge_time: u32) -> Self {
        Self {
            order_name: order_name.into(),
            charge_time,
            allow_multiple: false,
            one_shot: false,
            targeting: None,
        }
    }

    #[must_use]
    pub fn allow_multiple(mut self) -> Self {
        self.allow_multiple = true;
        self
    }

    #[must_use]
    pub fn one_shot(mut self) -> Self {
        self.one_shot = true;
        self
    }

    #[must_use]
    pub fn with_targeting(mut self, targeting: TargetingInfo) -> Self {
        self.targeting = Some(targeting);
        self
    }

    /// Charge time converted to simulation ticks.
    pub fn charge_ticks(&self, ticks_per_second: u32) -> u32 {
        self.charge_time.saturating_mul(ticks_per_second)
    }
}

/// How a targeted power asks the player for a location.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetingInfo {
    #[cfg_attr(feature = "serde", serde(default = "TargetingInfo::default_cursor"))]
    pub cursor: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub button: MouseButton,
}

impl TargetingInfo {
    pub const DEFAULT_CURSOR: &'static str = "ability";

    pub fn new(cursor: impl Into<String>, button: MouseButton) -> Self {
        Self {
            cursor: cursor.into(),
            button,
        }
    }

    #[cfg(feature = "serde")]
    fn default_cursor() -> String {
        Self::DEFAULT_CURSOR.to_owned()
    }
}

impl Default for TargetingInfo {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CURSOR, MouseButton::Left)
    }
}
