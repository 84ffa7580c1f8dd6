use std::borrow::Borrow;
use std::fmt;

use super::SupportPowerInfo;
use crate::state::EntityId;

/// Identity of one independent countdown inside a manager.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerKey(String);

impl PowerKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Derives the key a source on `host` charges under.
    ///
    /// Shared powers pool every source under the bare order name. Powers that
    /// allow multiple copies get the host id appended, so each entity owns a
    /// separate countdown.
    pub fn derive(info: &SupportPowerInfo, host: EntityId) -> Self {
        if info.allow_multiple {
            Self(format!("{}_{}", info.order_name, host.0))
        } else {
            Self(info.order_name.clone())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PowerKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PowerKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PowerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_power_uses_order_name() {
        let info = SupportPowerInfo::new("SpyPlane", 10);
        assert_eq!(PowerKey::derive(&info, EntityId(7)).as_str(), "SpyPlane");
        assert_eq!(
            PowerKey::derive(&info, EntityId(7)),
            PowerKey::derive(&info, EntityId(9))
        );
    }

    #[test]
    fn multiple_copies_append_host_id() {
        let info = SupportPowerInfo::new("ParaDrop", 10).allow_multiple();
        assert_eq!(PowerKey::derive(&info, EntityId(7)).as_str(), "ParaDrop_7");
        assert_eq!(PowerKey::derive(&info, EntityId(9)).as_str(), "ParaDrop_9");
    }
}
