//! Weapon Upgrade Cycle
//!
//! This example walks a weapon through a full upgrade attempt, showing
//! both the success and failure branches and the transactional behavior
//! of rejected events.
//!
//! Run with: cargo run --example upgrade_cycle

use tempered::core::WeaponEvent;
use tempered::handler::{IdleHandler, UpgradingHandler};
use tempered::machine::WeaponMachineBuilder;

fn main() {
    println!("=== Weapon Upgrade Cycle ===\n");

    let machine = WeaponMachineBuilder::new()
        .with_handler(IdleHandler::new())
        .with_handler(UpgradingHandler::new())
        .build()
        .unwrap();

    let (state, durability) = machine.snapshot();
    println!("Initial: {state} | durability {durability}");

    // Events outside the current state's allow-list fail loudly and
    // leave the machine untouched.
    match machine.process_event(WeaponEvent::UpgradeSuccess) {
        Ok(()) => unreachable!(),
        Err(err) => println!("Rejected: {err}"),
    }

    machine.process_event(WeaponEvent::UpgradeStart).unwrap();
    let (state, durability) = machine.snapshot();
    println!("Started upgrade: {state} | durability {durability}");

    machine.process_event(WeaponEvent::UpgradeSuccess).unwrap();
    let (state, durability) = machine.snapshot();
    println!("Upgrade landed: {state} | durability {durability}");

    println!("\nTransition path:");
    for record in machine.history().records() {
        println!(
            "  {} -> {} on {} ({} -> {})",
            record.from, record.to, record.event, record.durability_before, record.durability_after
        );
    }

    println!("\n=== Example Complete ===");
}
