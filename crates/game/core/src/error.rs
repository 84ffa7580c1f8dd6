//! Common error infrastructure for powers-core.
//!
//! Support power operations never fail: activating or targeting an unknown or
//! charging power is a silent no-op reported through plain outcome enums.
//! The errors here cover host misuse only (bad configuration, inconsistent
//! entity bookkeeping), which is a bug in the caller rather than a game event.

use crate::state::EntityId;

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: zero tick rate, duplicate entity id
    Validation,

    /// Unexpected state inconsistency in the host.
    ///
    /// Examples: removing an entity that was never added
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all powers-core errors.
pub trait PowersError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Invalid simulation configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("ticks_per_second must be greater than zero")]
    ZeroTickRate,
}

impl PowersError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroTickRate => "CONFIG_ZERO_TICK_RATE",
        }
    }
}

/// Inconsistent entity bookkeeping reported by [`crate::world::World`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("entity {0} is already in the world")]
    DuplicateActor(EntityId),

    #[error("entity {0} is not in the world")]
    UnknownActor(EntityId),
}

impl PowersError for WorldError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateActor(_) => ErrorSeverity::Validation,
            Self::UnknownActor(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateActor(_) => "WORLD_DUPLICATE_ACTOR",
            Self::UnknownActor(_) => "WORLD_UNKNOWN_ACTOR",
        }
    }
}
