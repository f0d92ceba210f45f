//! Door State Machine
//!
//! This example drives a two-state door through a fixed list of events.
//!
//! Key concepts:
//! - Exit hooks run before entry hooks
//! - Unexpected events can be ignored instead of reported
//! - A failing hook leaves the door where it was
//!
//! Run with: cargo run --example door

use fsm::builder::MachineBuilder;
use fsm::core::State;
use fsm::machine::{Machine, MachineError};
use fsm::{event_enum, state_enum};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

state_enum! {
    enum DoorState {
        Opened,
        Closed,
    }
}

event_enum! {
    enum DoorEvent {
        PushOpen,
        PullShut,
    }
}

fn main() {
    println!("=== Door State Machine Example ===\n");

    let jammed = Arc::new(AtomicBool::new(false));
    let hinge = Arc::clone(&jammed);

    let door: Machine<DoorState, DoorEvent> = MachineBuilder::new()
        .initial(DoorState::Opened)
        .transition(DoorState::Opened, DoorEvent::PullShut, DoorState::Closed)
        .transition(DoorState::Closed, DoorEvent::PushOpen, DoorState::Opened)
        .on_exit(DoorState::Opened, |_| {
            println!("  Slam!");
            Ok(())
        })
        .on_exit(DoorState::Closed, move |_| {
            if hinge.load(Ordering::SeqCst) {
                return Err(MachineError::hook("the hinge is jammed"));
            }
            println!("  Creaaak!");
            Ok(())
        })
        .on_entry_with(DoorState::Opened, |ctx| {
            println!("  {:?} -> {:?} on {:?}", ctx.from, ctx.to, ctx.event);
            Ok(())
        })
        .on_entry_with(DoorState::Closed, |ctx| {
            println!("  {:?} -> {:?} on {:?}", ctx.from, ctx.to, ctx.event);
            Ok(())
        })
        .ignore_unexpected_events(true)
        .track_history(16)
        .build()
        .expect("door definition is complete");

    let events = [
        DoorEvent::PushOpen,
        DoorEvent::PullShut,
        DoorEvent::PullShut,
        DoorEvent::PushOpen,
    ];
    for event in events {
        println!("{event:?}:");
        door.occur(event).expect("door hooks never fail here");
        println!("  now {}\n", door.state().name());
    }

    println!("PullShut:");
    door.occur(DoorEvent::PullShut).expect("closing still works");
    println!("  now {}\n", door.state().name());

    println!("Jamming the hinge and pushing the door open...");
    jammed.store(true, Ordering::SeqCst);
    match door.occur(DoorEvent::PushOpen) {
        Ok(()) => println!("  unexpectedly opened"),
        Err(err) => println!("  push failed: {err}"),
    }
    println!("  still {}\n", door.state().name());

    if let Some(history) = door.history() {
        let path: Vec<&str> = history.get_path().into_iter().map(|s| s.name()).collect();
        println!("Path taken: {}", path.join(" -> "));
    }

    println!("\n=== Example Complete ===");
}
