//! The weapon state machine and its builder.
//!
//! The machine holds the current state, the durability counter, and an
//! immutable registry mapping each state to its handler. Processing an
//! event is a short critical section: look up the handler, let it
//! validate and compute, then commit state and durability as one step.

pub mod builder;
pub mod error;

pub use builder::WeaponMachineBuilder;
pub use error::{BuildError, TransitionError};

use crate::checkpoint::{Checkpoint, CHECKPOINT_VERSION};
use crate::core::{TransitionHistory, TransitionRecord, WeaponEvent, WeaponState};
use crate::handler::StateHandler;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// Mutable core: everything that changes when an event commits.
/// Guarded by one mutex so state and durability can never tear.
struct MachineInner {
    current: WeaponState,
    durability: i32,
    history: TransitionHistory,
}

/// Event-driven weapon upgrade state machine.
///
/// Construct via [`WeaponMachineBuilder`]; there is no direct
/// constructor. The handler registry is fixed at build time and shared
/// read-only for the machine's lifetime, while the current state and
/// durability are guarded by a single lock so every transition commits
/// atomically. A failed [`process_event`](Self::process_event) call is
/// guaranteed to leave both exactly as they were.
///
/// # Example
///
/// ```rust
/// use tempered::core::{WeaponEvent, WeaponState};
/// use tempered::handler::{IdleHandler, UpgradingHandler};
/// use tempered::machine::WeaponMachineBuilder;
///
/// let machine = WeaponMachineBuilder::new()
///     .with_handler(IdleHandler::new())
///     .with_handler(UpgradingHandler::new())
///     .build()
///     .unwrap();
///
/// machine.process_event(WeaponEvent::UpgradeStart).unwrap();
/// assert_eq!(machine.current_state(), WeaponState::Upgrading);
/// assert_eq!(machine.durability(), 90);
/// ```
pub struct WeaponStateMachine {
    // The state the lifecycle originally began in, carried through
    // checkpoints unchanged.
    origin_state: WeaponState,
    registry: Arc<HashMap<WeaponState, Arc<dyn StateHandler>>>,
    inner: Mutex<MachineInner>,
}

impl WeaponStateMachine {
    pub(crate) fn new(
        origin_state: WeaponState,
        initial_state: WeaponState,
        initial_durability: i32,
        registry: HashMap<WeaponState, Arc<dyn StateHandler>>,
        history: TransitionHistory,
    ) -> Self {
        Self {
            origin_state,
            registry: Arc::new(registry),
            inner: Mutex::new(MachineInner {
                current: initial_state,
                durability: initial_durability,
                history,
            }),
        }
    }

    /// Lock the mutable core. A poisoned lock only means another thread
    /// panicked while holding it; commits are plain stores done last, so
    /// the data is still consistent and we keep going.
    fn lock(&self) -> MutexGuard<'_, MachineInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Process one event through the handler for the current state.
    ///
    /// Handler lookup, validation, and the commit of state plus
    /// durability run as one mutually-exclusive critical section; no two
    /// calls interleave their effects. On any error the machine is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// - [`TransitionError::MissingHandler`] if no handler is registered
    ///   for the current state (a configuration defect).
    /// - [`TransitionError::IllegalEvent`] if the handler does not allow
    ///   the event in this state.
    /// - [`TransitionError::DurabilityTooLow`] if a durability
    ///   precondition is violated.
    pub fn process_event(&self, event: WeaponEvent) -> Result<(), TransitionError> {
        let mut inner = self.lock();

        let handler = self
            .registry
            .get(&inner.current)
            .ok_or(TransitionError::MissingHandler {
                state: inner.current,
            })?;

        let result = match handler.handle_event(event, inner.durability) {
            Ok(result) => result,
            Err(err) => {
                tracing::debug!(
                    event = event.name(),
                    state = inner.current.name(),
                    error = %err,
                    "event rejected"
                );
                return Err(err);
            }
        };

        let record = TransitionRecord {
            from: inner.current,
            to: result.new_state,
            event,
            durability_before: inner.durability,
            durability_after: inner.durability + result.durability_change,
            timestamp: Utc::now(),
        };

        tracing::debug!(
            event = event.name(),
            from = record.from.name(),
            to = record.to.name(),
            durability = record.durability_after,
            "transition committed"
        );

        inner.durability += result.durability_change;
        inner.current = result.new_state;
        inner.history = inner.history.record(record);

        Ok(())
    }

    /// The current committed state.
    pub fn current_state(&self) -> WeaponState {
        self.lock().current
    }

    /// The current committed durability.
    pub fn durability(&self) -> i32 {
        self.lock().durability
    }

    /// Both committed values read under one lock, so the pair is never
    /// torn even while other threads are processing events.
    pub fn snapshot(&self) -> (WeaponState, i32) {
        let inner = self.lock();
        (inner.current, inner.durability)
    }

    /// Check whether the machine can make any further progress: a state
    /// with no registered handler rejects every event.
    pub fn is_terminal(&self) -> bool {
        !self.registry.contains_key(&self.lock().current)
    }

    /// The states with a registered handler.
    pub fn registered_states(&self) -> Vec<WeaponState> {
        self.registry.keys().copied().collect()
    }

    /// Committed transition history, oldest first.
    pub fn history(&self) -> TransitionHistory {
        self.lock().history.clone()
    }

    /// Capture a serializable checkpoint of the machine.
    ///
    /// Handlers are behavior, not data - restoring a checkpoint via
    /// [`WeaponMachineBuilder::from_checkpoint`] requires registering
    /// them again.
    pub fn checkpoint(&self) -> Checkpoint {
        let inner = self.lock();
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state: self.origin_state,
            current_state: inner.current,
            durability: inner.durability,
            history: inner.history.clone(),
        }
    }
}
