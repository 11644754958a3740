//! Session lifecycle phases.

use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
///
/// `AwaitingConfig -> Running <-> Paused -> Ended`, and `reset` returns to
/// `AwaitingConfig` from anywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a time control. No moves, no clock.
    #[default]
    AwaitingConfig,
    /// Moves accepted; the side to move's clock is counting down.
    Running,
    /// Clock stopped; moves rejected until resumed.
    Paused,
    /// An outcome has been recorded.
    Ended,
}

impl Phase {
    /// A game is live once configured and until it ends.
    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Phase::Running | Phase::Paused)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::AwaitingConfig => "awaiting configuration",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Ended => "ended",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_awaits_config() {
        assert_eq!(Phase::default(), Phase::AwaitingConfig);
    }

    #[test]
    fn test_is_live() {
        assert!(!Phase::AwaitingConfig.is_live());
        assert!(Phase::Running.is_live());
        assert!(Phase::Paused.is_live());
        assert!(!Phase::Ended.is_live());
    }
}
