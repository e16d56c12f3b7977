//! Weapon event vocabulary.
//!
//! Events are the external stimuli fed to the machine. Like states they
//! are a closed set that extends by adding variants; handlers declare
//! which events they accept via an explicit allow-list.

use serde::{Deserialize, Serialize};

/// External stimulus applied to a weapon state machine.
///
/// # Example
///
/// ```rust
/// use tempered::core::WeaponEvent;
///
/// let event = WeaponEvent::UpgradeStart;
/// assert_eq!(event.name(), "UpgradeStart");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum WeaponEvent {
    /// Begin an upgrade attempt.
    UpgradeStart,
    /// The in-flight upgrade succeeded.
    UpgradeSuccess,
    /// The in-flight upgrade failed.
    UpgradeFail,
}

impl WeaponEvent {
    /// Get the event's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::UpgradeStart => "UpgradeStart",
            Self::UpgradeSuccess => "UpgradeSuccess",
            Self::UpgradeFail => "UpgradeFail",
        }
    }
}

impl std::fmt::Display for WeaponEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
