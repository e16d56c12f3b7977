//! Handler for the `Upgrading` state.

use super::{validate_event, StateHandler};
use crate::core::{TransitionResult, WeaponEvent, WeaponState};
use crate::machine::error::TransitionError;

/// Durability gained when an upgrade lands.
const UPGRADE_SUCCESS_BONUS: i32 = 20;

/// Transition logic for a weapon with an upgrade in flight.
///
/// [`WeaponEvent::UpgradeSuccess`] moves to `Enhanced` and grants +20
/// durability; [`WeaponEvent::UpgradeFail`] moves to `Broken` and zeroes
/// the counter. There is no durability floor - the outcome of an
/// in-flight upgrade is accepted regardless of current durability.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpgradingHandler;

impl UpgradingHandler {
    /// Create the handler.
    pub fn new() -> Self {
        Self
    }
}

impl StateHandler for UpgradingHandler {
    fn supported_state(&self) -> WeaponState {
        WeaponState::Upgrading
    }

    fn handle_event(
        &self,
        event: WeaponEvent,
        durability: i32,
    ) -> Result<TransitionResult, TransitionError> {
        validate_event(
            WeaponState::Upgrading,
            event,
            &[WeaponEvent::UpgradeSuccess, WeaponEvent::UpgradeFail],
        )?;

        match event {
            WeaponEvent::UpgradeSuccess => Ok(TransitionResult::new(
                WeaponState::Enhanced,
                UPGRADE_SUCCESS_BONUS,
            )),
            // Zero the counter: the delta cancels whatever is left.
            WeaponEvent::UpgradeFail => {
                Ok(TransitionResult::new(WeaponState::Broken, -durability))
            }
            WeaponEvent::UpgradeStart => unreachable!("filtered by validate_event"),
        }
    }
}
