//! Per-state transition handlers.
//!
//! Each handler owns the transition logic for exactly one state: it
//! declares which events it accepts, checks durability preconditions,
//! and computes the resulting state and delta. The machine dispatches to
//! the handler keyed by its current state, replacing what would
//! otherwise be a branch chain with a lookup table.

pub mod idle;
pub mod upgrading;

pub use idle::IdleHandler;
pub use upgrading::UpgradingHandler;

use crate::core::{TransitionResult, WeaponEvent, WeaponState};
use crate::machine::error::TransitionError;

/// Transition logic for a single state.
///
/// Implementations are pure with respect to the machine: they receive
/// the committed durability as an argument and describe the change via
/// the returned [`TransitionResult`]; the machine applies the delta
/// itself. A handler is only ever invoked while the machine's current
/// state equals its `supported_state()`.
///
/// # Example
///
/// ```rust
/// use tempered::core::{TransitionResult, WeaponEvent, WeaponState};
/// use tempered::handler::{validate_event, StateHandler};
/// use tempered::machine::TransitionError;
///
/// struct BrokenHandler;
///
/// impl StateHandler for BrokenHandler {
///     fn supported_state(&self) -> WeaponState {
///         WeaponState::Broken
///     }
///
///     fn handle_event(
///         &self,
///         event: WeaponEvent,
///         _durability: i32,
///     ) -> Result<TransitionResult, TransitionError> {
///         // A repaired weapon goes back to Idle at minimal durability.
///         validate_event(WeaponState::Broken, event, &[WeaponEvent::UpgradeStart])?;
///         Ok(TransitionResult::new(WeaponState::Idle, 10))
///     }
/// }
/// ```
pub trait StateHandler: Send + Sync {
    /// The one state this handler owns. Pure and constant per instance;
    /// the builder keys the registry by this value.
    fn supported_state(&self) -> WeaponState;

    /// Validate the event against this state's allow-list and
    /// preconditions, then compute the transition.
    ///
    /// Returns [`TransitionError::IllegalEvent`] for events outside the
    /// allow-list and [`TransitionError::DurabilityTooLow`] for a
    /// violated durability floor. Must not have side effects: commit is
    /// the machine's job.
    fn handle_event(
        &self,
        event: WeaponEvent,
        durability: i32,
    ) -> Result<TransitionResult, TransitionError>;
}

/// Fail with [`TransitionError::IllegalEvent`] unless `event` is in the
/// explicit allow-list for `state`.
pub fn validate_event(
    state: WeaponState,
    event: WeaponEvent,
    allowed: &[WeaponEvent],
) -> Result<(), TransitionError> {
    if allowed.contains(&event) {
        Ok(())
    } else {
        Err(TransitionError::IllegalEvent { event, state })
    }
}

/// Fail with [`TransitionError::DurabilityTooLow`] if `durability` is
/// below `min`.
pub fn validate_durability(durability: i32, min: i32) -> Result<(), TransitionError> {
    if durability < min {
        Err(TransitionError::DurabilityTooLow {
            required: min,
            actual: durability,
        })
    } else {
        Ok(())
    }
}

/// Closure-backed handler for ad-hoc states.
///
/// Lets integrators register transition logic without defining a struct,
/// for example for the `Enhanced` and `Broken` states whose behavior is
/// an integration decision.
///
/// # Example
///
/// ```rust
/// use tempered::core::{TransitionResult, WeaponEvent, WeaponState};
/// use tempered::handler::{validate_event, FnHandler, StateHandler};
///
/// let enhanced = FnHandler::new(WeaponState::Enhanced, |event, _durability| {
///     validate_event(WeaponState::Enhanced, event, &[WeaponEvent::UpgradeStart])?;
///     Ok(TransitionResult::new(WeaponState::Upgrading, -10))
/// });
///
/// assert_eq!(enhanced.supported_state(), WeaponState::Enhanced);
/// ```
pub struct FnHandler {
    state: WeaponState,
    func: Box<dyn Fn(WeaponEvent, i32) -> Result<TransitionResult, TransitionError> + Send + Sync>,
}

impl FnHandler {
    /// Create a handler for `state` from a transition function.
    ///
    /// The function must be deterministic and thread-safe; it is called
    /// under the machine's event lock.
    pub fn new<F>(state: WeaponState, func: F) -> Self
    where
        F: Fn(WeaponEvent, i32) -> Result<TransitionResult, TransitionError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            state,
            func: Box::new(func),
        }
    }
}

impl StateHandler for FnHandler {
    fn supported_state(&self) -> WeaponState {
        self.state
    }

    fn handle_event(
        &self,
        event: WeaponEvent,
        durability: i32,
    ) -> Result<TransitionResult, TransitionError> {
        (self.func)(event, durability)
    }
}
