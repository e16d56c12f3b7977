//! Handler for the `Idle` state.

use super::{validate_durability, validate_event, StateHandler};
use crate::core::{TransitionResult, WeaponEvent, WeaponState};
use crate::machine::error::TransitionError;

/// Starting an upgrade consumes this much durability.
const UPGRADE_START_COST: i32 = 10;

/// Transition logic for an idle weapon.
///
/// The only accepted event is [`WeaponEvent::UpgradeStart`], which
/// requires durability of at least 10 and moves the weapon to
/// `Upgrading` at a cost of 10 durability. Every machine must register
/// an `IdleHandler` (or a replacement supporting `Idle`) to build.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdleHandler;

impl IdleHandler {
    /// Create the handler.
    pub fn new() -> Self {
        Self
    }
}

impl StateHandler for IdleHandler {
    fn supported_state(&self) -> WeaponState {
        WeaponState::Idle
    }

    fn handle_event(
        &self,
        event: WeaponEvent,
        durability: i32,
    ) -> Result<TransitionResult, TransitionError> {
        validate_event(WeaponState::Idle, event, &[WeaponEvent::UpgradeStart])?;
        validate_durability(durability, UPGRADE_START_COST)?;

        Ok(TransitionResult::new(
            WeaponState::Upgrading,
            -UPGRADE_START_COST,
        ))
    }
}
