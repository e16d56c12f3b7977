//! Checkpointing for weapon state machines.
//!
//! A checkpoint is a serializable value capturing everything a machine
//! commits: current state, durability, and history. Handlers are
//! behavior rather than data and are not captured; restoring goes
//! through [`WeaponMachineBuilder::from_checkpoint`] followed by
//! re-registering handlers.
//!
//! [`WeaponMachineBuilder::from_checkpoint`]: crate::machine::WeaponMachineBuilder::from_checkpoint

use crate::core::{TransitionHistory, WeaponState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for the checkpoint format.
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a machine's committed state.
///
/// # Example
///
/// ```rust
/// use tempered::handler::IdleHandler;
/// use tempered::machine::WeaponMachineBuilder;
///
/// let machine = WeaponMachineBuilder::new()
///     .with_handler(IdleHandler::new())
///     .build()
///     .unwrap();
///
/// let checkpoint = machine.checkpoint();
/// let json = checkpoint.to_json().unwrap();
///
/// let restored = WeaponMachineBuilder::from_checkpoint(
///     &tempered::checkpoint::Checkpoint::from_json(&json).unwrap(),
/// )
/// .with_handler(IdleHandler::new())
/// .build()
/// .unwrap();
///
/// assert_eq!(restored.snapshot(), machine.snapshot());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version.
    pub version: u32,

    /// Unique checkpoint identifier.
    pub id: String,

    /// When the checkpoint was captured.
    pub timestamp: DateTime<Utc>,

    /// The state the machine was built with.
    pub initial_state: WeaponState,

    /// Committed state at capture time.
    pub current_state: WeaponState,

    /// Committed durability at capture time.
    pub durability: i32,

    /// Complete committed transition history.
    pub history: TransitionHistory,
}

impl Checkpoint {
    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON, rejecting unknown format versions.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate_version()?;
        Ok(checkpoint)
    }

    /// Encode as a compact binary blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Decode from a binary blob, rejecting unknown format versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate_version()?;
        Ok(checkpoint)
    }

    fn validate_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WeaponEvent;
    use crate::handler::{IdleHandler, UpgradingHandler};
    use crate::machine::WeaponMachineBuilder;

    fn machine_mid_cycle() -> crate::machine::WeaponStateMachine {
        let machine = WeaponMachineBuilder::new()
            .with_handler(IdleHandler::new())
            .with_handler(UpgradingHandler::new())
            .build()
            .unwrap();
        machine.process_event(WeaponEvent::UpgradeStart).unwrap();
        machine
    }

    #[test]
    fn checkpoint_captures_committed_values() {
        let machine = machine_mid_cycle();
        let checkpoint = machine.checkpoint();

        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.initial_state, WeaponState::Idle);
        assert_eq!(checkpoint.current_state, WeaponState::Upgrading);
        assert_eq!(checkpoint.durability, 90);
        assert_eq!(checkpoint.history.len(), 1);
        assert!(!checkpoint.id.is_empty());
    }

    #[test]
    fn json_roundtrip_preserves_checkpoint() {
        let checkpoint = machine_mid_cycle().checkpoint();

        let json = checkpoint.to_json().unwrap();
        let decoded = Checkpoint::from_json(&json).unwrap();

        assert_eq!(decoded.id, checkpoint.id);
        assert_eq!(decoded.current_state, checkpoint.current_state);
        assert_eq!(decoded.durability, checkpoint.durability);
        assert_eq!(decoded.history.len(), checkpoint.history.len());
    }

    #[test]
    fn binary_roundtrip_preserves_checkpoint() {
        let checkpoint = machine_mid_cycle().checkpoint();

        let bytes = checkpoint.to_bytes().unwrap();
        let decoded = Checkpoint::from_bytes(&bytes).unwrap();

        assert_eq!(decoded.current_state, checkpoint.current_state);
        assert_eq!(decoded.durability, checkpoint.durability);
    }

    #[test]
    fn unknown_version_is_rejected() {
        let mut checkpoint = machine_mid_cycle().checkpoint();
        checkpoint.version = 99;

        let json = serde_json::to_string(&checkpoint).unwrap();
        let err = Checkpoint::from_json(&json).unwrap_err();

        assert!(matches!(
            err,
            CheckpointError::UnsupportedVersion {
                found: 99,
                supported: CHECKPOINT_VERSION,
            }
        ));
    }

    #[test]
    fn garbage_input_is_a_deserialization_error() {
        assert!(matches!(
            Checkpoint::from_json("not json"),
            Err(CheckpointError::DeserializationFailed(_))
        ));
        assert!(matches!(
            Checkpoint::from_bytes(&[0xde, 0xad]),
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn initial_state_survives_repeated_save_restore_cycles() {
        let machine = machine_mid_cycle();
        let first = machine.checkpoint();
        assert_eq!(first.initial_state, WeaponState::Idle);
        assert_eq!(first.current_state, WeaponState::Upgrading);

        let restored = WeaponMachineBuilder::from_checkpoint(&first)
            .with_handler(IdleHandler::new())
            .with_handler(UpgradingHandler::new())
            .build()
            .unwrap();
        restored.process_event(WeaponEvent::UpgradeSuccess).unwrap();

        // A checkpoint of the restored machine still reports where the
        // lifecycle originally began, not the resume point.
        let second = restored.checkpoint();
        assert_eq!(second.initial_state, WeaponState::Idle);
        assert_eq!(second.current_state, WeaponState::Enhanced);
    }

    #[test]
    fn restored_machine_resumes_where_it_left_off() {
        let machine = machine_mid_cycle();
        let checkpoint = machine.checkpoint();

        let restored = WeaponMachineBuilder::from_checkpoint(&checkpoint)
            .with_handler(IdleHandler::new())
            .with_handler(UpgradingHandler::new())
            .build()
            .unwrap();

        assert_eq!(restored.snapshot(), (WeaponState::Upgrading, 90));
        assert_eq!(restored.history().len(), 1);

        restored.process_event(WeaponEvent::UpgradeSuccess).unwrap();
        assert_eq!(restored.snapshot(), (WeaponState::Enhanced, 110));
    }
}
