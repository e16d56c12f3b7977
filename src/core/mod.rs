//! Core vocabulary for the weapon upgrade state machine.
//!
//! Pure value types: states, events, transition results, and the
//! immutable transition history. Nothing in this module performs I/O or
//! holds locks.

pub mod event;
pub mod history;
pub mod state;
pub mod transition;

pub use event::WeaponEvent;
pub use history::{TransitionHistory, TransitionRecord};
pub use state::WeaponState;
pub use transition::TransitionResult;
