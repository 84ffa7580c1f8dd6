use bitflags::bitflags;

bitflags! {
    /// Reasons an entity is currently disabled.
    ///
    /// Several disablers may overlap on one entity (a jammed building can also
    /// be out of power). The entity is enabled only when no bit is set.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct DisableFlags: u8 {
        const LOW_POWER = 1 << 0;
        const JAMMED    = 1 << 1;
        const EMP       = 1 << 2;
        const SCRIPTED  = 1 << 3;
    }
}

impl DisableFlags {
    #[inline]
    pub fn is_disabled(self) -> bool {
        !self.is_empty()
    }
}

// Text form `"JAMMED | EMP"` in human-readable formats, raw bits otherwise.
#[cfg(feature = "serde")]
impl serde::Serialize for DisableFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DisableFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_reasons_keep_entity_disabled() {
        let mut flags = DisableFlags::empty();
        assert!(!flags.is_disabled());

        flags.insert(DisableFlags::JAMMED);
        flags.insert(DisableFlags::LOW_POWER);
        flags.remove(DisableFlags::JAMMED);
        assert!(flags.is_disabled());

        flags.remove(DisableFlags::LOW_POWER);
        assert!(!flags.is_disabled());
    }
}
