use super::{Location, PlayerId};

/// A player command delivered from the ordered command stream.
///
/// For support powers the `order_string` is the power key; the manager that
/// receives the order looks the key up and activates the matching instance.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub order_string: String,

    /// Player that issued the order.
    pub subject: PlayerId,

    /// Cell picked by a targeting session, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_location: Option<Location>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub queued: bool,
}

impl Order {
    pub fn new(order_string: impl Into<String>, subject: PlayerId) -> Self {
        Self {
            order_string: order_string.into(),
            subject,
            target_location: None,
            queued: false,
        }
    }

    /// Attaches a target cell (builder pattern).
    #[must_use]
    pub fn with_target(mut self, location: Location) -> Self {
        self.target_location = Some(location);
        self
    }

    pub fn key(&self) -> &str {
        &self.order_string
    }
}
