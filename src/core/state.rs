//! Weapon state vocabulary.
//!
//! States are immutable values describing the weapon's current position
//! in the upgrade lifecycle. The set is closed here but the machine is
//! written against the `StateHandler` trait, so new states only require
//! a new enum variant and a handler registration.

use serde::{Deserialize, Serialize};

/// Discrete mode of a weapon in the upgrade lifecycle.
///
/// States are plain values - cloneable, comparable, hashable (they key
/// the handler registry) and serializable for checkpointing.
///
/// # Example
///
/// ```rust
/// use tempered::core::WeaponState;
///
/// let state = WeaponState::Idle;
/// assert_eq!(state.name(), "Idle");
/// assert!(!state.is_broken());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum WeaponState {
    /// At rest; the only state a machine is required to handle.
    Idle,
    /// An upgrade attempt is in flight.
    Upgrading,
    /// A successful upgrade landed.
    Enhanced,
    /// The weapon failed an upgrade. Terminal unless a handler is registered.
    Broken,
}

impl WeaponState {
    /// Get the state's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Upgrading => "Upgrading",
            Self::Enhanced => "Enhanced",
            Self::Broken => "Broken",
        }
    }

    /// Check if this is the broken (failure) state.
    pub fn is_broken(&self) -> bool {
        matches!(self, Self::Broken)
    }
}

impl std::fmt::Display for WeaponState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(WeaponState::Idle.name(), "Idle");
        assert_eq!(WeaponState::Upgrading.name(), "Upgrading");
        assert_eq!(WeaponState::Enhanced.name(), "Enhanced");
        assert_eq!(WeaponState::Broken.name(), "Broken");
    }

    #[test]
    fn is_broken_identifies_failure_state() {
        assert!(WeaponState::Broken.is_broken());
        assert!(!WeaponState::Idle.is_broken());
        assert!(!WeaponState::Upgrading.is_broken());
        assert!(!WeaponState::Enhanced.is_broken());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(WeaponState::Upgrading.to_string(), "Upgrading");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = WeaponState::Enhanced;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: WeaponState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn state_is_comparable_and_hashable() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(WeaponState::Idle, 1);
        map.insert(WeaponState::Idle, 2);

        assert_eq!(map.len(), 1);
        assert_eq!(map[&WeaponState::Idle], 2);
    }
}
