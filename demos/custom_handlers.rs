//! Custom Handler Registration
//!
//! The built-in registry only covers Idle and Upgrading; what Enhanced
//! and Broken weapons can do is an integration decision. This example
//! registers closure-backed handlers for both, turning Broken from a
//! terminal state into a repairable one, and resumes a machine from a
//! checkpoint.
//!
//! Run with: cargo run --example custom_handlers

use tempered::core::{TransitionResult, WeaponEvent, WeaponState};
use tempered::handler::{validate_durability, validate_event, FnHandler, IdleHandler, UpgradingHandler};
use tempered::machine::WeaponMachineBuilder;

fn main() {
    println!("=== Custom Handler Registration ===\n");

    // Enhanced weapons can re-enter the upgrade loop at a steeper cost.
    let enhanced = FnHandler::new(WeaponState::Enhanced, |event, durability| {
        validate_event(WeaponState::Enhanced, event, &[WeaponEvent::UpgradeStart])?;
        validate_durability(durability, 25)?;
        Ok(TransitionResult::new(WeaponState::Upgrading, -25))
    });

    // Repairing a broken weapon restores it to Idle at half durability.
    let broken = FnHandler::new(WeaponState::Broken, |event, durability| {
        validate_event(WeaponState::Broken, event, &[WeaponEvent::UpgradeStart])?;
        Ok(TransitionResult::new(WeaponState::Idle, 50 - durability))
    });

    let machine = WeaponMachineBuilder::new()
        .with_handler(IdleHandler::new())
        .with_handler(UpgradingHandler::new())
        .with_handler(enhanced)
        .with_handler(broken)
        .build()
        .unwrap();

    for event in [
        WeaponEvent::UpgradeStart,
        WeaponEvent::UpgradeFail,
        WeaponEvent::UpgradeStart, // repair
        WeaponEvent::UpgradeStart,
        WeaponEvent::UpgradeSuccess,
    ] {
        match machine.process_event(event) {
            Ok(()) => {
                let (state, durability) = machine.snapshot();
                println!("{event}: {state} | durability {durability}");
            }
            Err(err) => println!("{event}: rejected ({err})"),
        }
    }

    // Checkpoint the machine and resume it elsewhere. Handlers are
    // behavior, not data, so they are registered again on restore.
    let checkpoint = machine.checkpoint();
    let json = checkpoint.to_json().unwrap();
    println!("\nCheckpoint captured ({} bytes of JSON)", json.len());

    let restored = WeaponMachineBuilder::from_checkpoint(&checkpoint)
        .with_handler(IdleHandler::new())
        .with_handler(UpgradingHandler::new())
        .build()
        .unwrap();

    let (state, durability) = restored.snapshot();
    println!("Restored: {state} | durability {durability}");
    println!("History carried over: {} transitions", restored.history().len());

    println!("\n=== Example Complete ===");
}
