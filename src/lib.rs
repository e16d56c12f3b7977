//! Tempered: an event-driven weapon upgrade state machine.
//!
//! A weapon holds a discrete state and a durability counter. It changes
//! only in response to events, and the transition logic for each state
//! lives in its own handler. Dispatch is a lookup in an immutable
//! state-to-handler registry instead of a branch chain, so new states
//! slot in without touching existing handlers.
//!
//! # Core Concepts
//!
//! - **State / Event**: closed vocabularies ([`WeaponState`],
//!   [`WeaponEvent`])
//! - **Handler**: per-state transition logic behind the
//!   [`StateHandler`](handler::StateHandler) trait
//! - **Machine**: commits state and durability atomically, built via
//!   [`WeaponMachineBuilder`]
//! - **Checkpoint**: serializable snapshot for resuming a machine
//!
//! Every failure is a typed error value: illegal events and durability
//! floors are bad input, a missing handler is bad setup, and none of
//! them mutate the machine.
//!
//! # Example
//!
//! ```rust
//! use tempered::core::{WeaponEvent, WeaponState};
//! use tempered::handler::{IdleHandler, UpgradingHandler};
//! use tempered::machine::{TransitionError, WeaponMachineBuilder};
//!
//! let machine = WeaponMachineBuilder::new()
//!     .with_handler(IdleHandler::new())
//!     .with_handler(UpgradingHandler::new())
//!     .build()
//!     .unwrap();
//!
//! machine.process_event(WeaponEvent::UpgradeStart).unwrap();
//! assert_eq!(machine.snapshot(), (WeaponState::Upgrading, 90));
//!
//! // Events outside the current state's allow-list fail loudly and
//! // leave the machine untouched.
//! let err = machine.process_event(WeaponEvent::UpgradeStart).unwrap_err();
//! assert!(matches!(err, TransitionError::IllegalEvent { .. }));
//! assert_eq!(machine.snapshot(), (WeaponState::Upgrading, 90));
//! ```

pub mod checkpoint;
pub mod core;
pub mod handler;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{TransitionResult, WeaponEvent, WeaponState};
pub use crate::handler::StateHandler;
pub use crate::machine::{BuildError, TransitionError, WeaponMachineBuilder, WeaponStateMachine};
