//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Simple state enumeration with `state_enum!`
//! - A single trigger driving every step
//! - An observer printing each change
//!
//! Run with: cargo run --example traffic_light

use reflex::builder::{simple_transition, MachineBuilder};
use reflex::state_enum;

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
    initial: Red
}

#[derive(Clone, Copy, PartialEq, Debug)]
struct Tick;

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut machine = MachineBuilder::new()
        .transitions([
            simple_transition(TrafficLight::Red, TrafficLight::Green, Tick),
            simple_transition(TrafficLight::Green, TrafficLight::Yellow, Tick),
            simple_transition(TrafficLight::Yellow, TrafficLight::Red, Tick),
        ])
        .observer(|from, to, _| println!("  {from:?} -> {to:?}"))
        .build();

    println!("Initial state: {:?}\n", machine.state());
    println!("Transition sequence:");

    for _ in 0..7 {
        if let Err(err) = machine.execute(Tick) {
            eprintln!("unexpected: {err}");
            return;
        }
    }

    println!("\nFinal state: {:?}", machine.state());
    println!("\nThis is a cyclic state machine - the sequence repeats:");
    println!("  Red -> Green -> Yellow -> Red -> Green -> ...");

    println!("\n=== Example Complete ===");
}
