//! Builder for constructing weapon state machines.

use crate::checkpoint::Checkpoint;
use crate::core::{TransitionHistory, WeaponState};
use crate::handler::StateHandler;
use crate::machine::error::BuildError;
use crate::machine::WeaponStateMachine;
use std::collections::HashMap;
use std::sync::Arc;

/// Builder assembling a [`WeaponStateMachine`] with a fluent API.
///
/// Defaults: initial state `Idle`, initial durability 100, empty
/// registry. Handlers are keyed by their own
/// [`supported_state()`](StateHandler::supported_state); registering a
/// second handler for the same state replaces the first (last write
/// wins). `build()` validates that an `Idle` handler is present.
///
/// The builder is reusable - `with_handler` takes handlers by `Arc`
/// internally, so calling `build()` twice produces two machines sharing
/// handler instances.
///
/// # Example
///
/// ```rust
/// use tempered::core::WeaponState;
/// use tempered::handler::IdleHandler;
/// use tempered::machine::WeaponMachineBuilder;
///
/// let machine = WeaponMachineBuilder::new()
///     .with_initial_durability(50)
///     .with_handler(IdleHandler::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), WeaponState::Idle);
/// assert_eq!(machine.durability(), 50);
/// ```
pub struct WeaponMachineBuilder {
    initial_state: WeaponState,
    initial_durability: i32,
    // Where the machine's lifecycle originally began; differs from
    // `initial_state` only when resuming from a checkpoint.
    origin_state: Option<WeaponState>,
    history: TransitionHistory,
    handlers: HashMap<WeaponState, Arc<dyn StateHandler>>,
}

impl WeaponMachineBuilder {
    /// Create a builder with default initial state and durability.
    pub fn new() -> Self {
        Self {
            initial_state: WeaponState::Idle,
            initial_durability: 100,
            origin_state: None,
            history: TransitionHistory::new(),
            handlers: HashMap::new(),
        }
    }

    /// Create a builder pre-seeded from a checkpoint.
    ///
    /// Resumes at the saved state, durability, and history, while the
    /// checkpoint's own `initial_state` is preserved as the machine's
    /// origin so provenance survives repeated save/restore cycles.
    /// Handlers are not part of a checkpoint and must be registered
    /// again before `build()`.
    pub fn from_checkpoint(checkpoint: &Checkpoint) -> Self {
        Self {
            initial_state: checkpoint.current_state,
            initial_durability: checkpoint.durability,
            origin_state: Some(checkpoint.initial_state),
            history: checkpoint.history.clone(),
            handlers: HashMap::new(),
        }
    }

    /// Set the initial state (default `Idle`).
    pub fn with_initial_state(mut self, state: WeaponState) -> Self {
        self.initial_state = state;
        self
    }

    /// Set the initial durability (default 100).
    pub fn with_initial_durability(mut self, durability: i32) -> Self {
        self.initial_durability = durability;
        self
    }

    /// Register a handler under its own supported state.
    ///
    /// Re-registering for the same state silently replaces the previous
    /// handler.
    pub fn with_handler<H>(mut self, handler: H) -> Self
    where
        H: StateHandler + 'static,
    {
        self.handlers
            .insert(handler.supported_state(), Arc::new(handler));
        self
    }

    /// Build the machine.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingIdleHandler`] unless a handler for
    /// `Idle` was registered.
    pub fn build(&self) -> Result<WeaponStateMachine, BuildError> {
        if !self.handlers.contains_key(&WeaponState::Idle) {
            return Err(BuildError::MissingIdleHandler);
        }

        tracing::debug!(
            initial_state = self.initial_state.name(),
            initial_durability = self.initial_durability,
            handlers = self.handlers.len(),
            "machine built"
        );

        Ok(WeaponStateMachine::new(
            self.origin_state.unwrap_or(self.initial_state),
            self.initial_state,
            self.initial_durability,
            self.handlers.clone(),
            self.history.clone(),
        ))
    }
}

impl Default for WeaponMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TransitionResult, WeaponEvent};
    use crate::handler::{FnHandler, IdleHandler, UpgradingHandler};

    #[test]
    fn build_without_idle_handler_fails() {
        let result = WeaponMachineBuilder::new().build();
        assert!(matches!(result, Err(BuildError::MissingIdleHandler)));

        // Other handlers alone do not satisfy the requirement.
        let result = WeaponMachineBuilder::new()
            .with_handler(UpgradingHandler::new())
            .build();
        assert!(matches!(result, Err(BuildError::MissingIdleHandler)));
    }

    #[test]
    fn build_with_idle_handler_succeeds() {
        let machine = WeaponMachineBuilder::new()
            .with_handler(IdleHandler::new())
            .build()
            .unwrap();

        assert_eq!(machine.current_state(), WeaponState::Idle);
        assert_eq!(machine.durability(), 100);
    }

    #[test]
    fn defaults_are_idle_and_one_hundred() {
        let machine = WeaponMachineBuilder::new()
            .with_handler(IdleHandler::new())
            .build()
            .unwrap();

        assert_eq!(machine.snapshot(), (WeaponState::Idle, 100));
    }

    #[test]
    fn initial_state_and_durability_are_configurable() {
        let machine = WeaponMachineBuilder::new()
            .with_initial_state(WeaponState::Enhanced)
            .with_initial_durability(42)
            .with_handler(IdleHandler::new())
            .build()
            .unwrap();

        assert_eq!(machine.snapshot(), (WeaponState::Enhanced, 42));
    }

    #[test]
    fn last_registered_handler_wins() {
        // First Idle handler transitions to Upgrading; the replacement
        // transitions straight to Enhanced.
        let machine = WeaponMachineBuilder::new()
            .with_handler(IdleHandler::new())
            .with_handler(FnHandler::new(WeaponState::Idle, |_event, _durability| {
                Ok(TransitionResult::new(WeaponState::Enhanced, 0))
            }))
            .build()
            .unwrap();

        machine.process_event(WeaponEvent::UpgradeStart).unwrap();
        assert_eq!(machine.snapshot(), (WeaponState::Enhanced, 100));
    }

    #[test]
    fn builder_is_reusable() {
        let builder = WeaponMachineBuilder::new().with_handler(IdleHandler::new());

        let first = builder.build().unwrap();
        let second = builder.build().unwrap();

        first.process_event(WeaponEvent::UpgradeStart).unwrap();

        // Machines are independent.
        assert_eq!(first.snapshot(), (WeaponState::Upgrading, 90));
        assert_eq!(second.snapshot(), (WeaponState::Idle, 100));
    }

    #[test]
    fn registered_states_reflect_the_registry() {
        let machine = WeaponMachineBuilder::new()
            .with_handler(IdleHandler::new())
            .with_handler(UpgradingHandler::new())
            .build()
            .unwrap();

        let mut states = machine.registered_states();
        states.sort_by_key(|s| s.name());
        assert_eq!(states, vec![WeaponState::Idle, WeaponState::Upgrading]);
    }
}
