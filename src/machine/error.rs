//! Error types for machine construction and event processing.

use crate::core::{WeaponEvent, WeaponState};
use thiserror::Error;

/// Errors that can occur while processing an event.
///
/// Every variant is raised at the point of detection and propagates
/// unchanged to the caller; none is retried internally, and a failed
/// call never mutates the machine. `IllegalEvent` and `DurabilityTooLow`
/// are bad input; `MissingHandler` is bad setup - callers can
/// pattern-match to tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The event is not in the allow-list of the current state's handler.
    #[error("invalid event {event} for state {state}")]
    IllegalEvent {
        event: WeaponEvent,
        state: WeaponState,
    },

    /// A durability precondition was violated.
    #[error("durability {actual} below required minimum {required}")]
    DurabilityTooLow { required: i32, actual: i32 },

    /// No handler is registered for the machine's current state.
    /// A configuration defect, not a recoverable runtime condition.
    #[error("no handler registered for state {state}")]
    MissingHandler { state: WeaponState },
}

/// Errors that can occur when building a machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Every machine starts life able to process events from `Idle`;
    /// building without an `Idle` handler is rejected up front.
    #[error("missing Idle handler. Call .with_handler(IdleHandler::new()) before .build()")]
    MissingIdleHandler,
}
