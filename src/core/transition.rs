//! Transition outcome value.

use super::state::WeaponState;
use serde::{Deserialize, Serialize};

/// Outcome of processing one event: the state to move to and the signed
/// durability delta to apply.
///
/// A `TransitionResult` is produced by a handler and consumed exactly
/// once by the machine, which commits both fields as a single step. It
/// has no lifecycle of its own - created and discarded per event.
///
/// # Example
///
/// ```rust
/// use tempered::core::{TransitionResult, WeaponState};
///
/// let result = TransitionResult::new(WeaponState::Upgrading, -10);
/// assert_eq!(result.new_state, WeaponState::Upgrading);
/// assert_eq!(result.durability_change, -10);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionResult {
    /// The state the machine moves to on commit.
    pub new_state: WeaponState,
    /// Signed durability delta, applied atomically with the state change.
    pub durability_change: i32,
}

impl TransitionResult {
    /// Create a transition result.
    pub fn new(new_state: WeaponState, durability_change: i32) -> Self {
        Self {
            new_state,
            durability_change,
        }
    }
}
