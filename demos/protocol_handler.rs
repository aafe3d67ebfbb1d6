//! Protocol Handler State Machine
//!
//! This example embeds a machine inside a small connection handler.
//!
//! Key concepts:
//! - Guards reading handler state (credentials, retry budget)
//! - Actions updating handler state
//! - Distinguishing "guard rejected" from "no matching trigger"
//! - Structured logging through `tracing`
//! - Inspecting the recorded transition history
//!
//! Run with: RUST_LOG=reflex=debug cargo run --example protocol_handler

use reflex::{state_enum, Dispatch, MachineBuilder, Transition};
use std::cell::Cell;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Session {
        Idle,
        Handshaking,
        Open,
        Closed,
    }
    initial: Idle
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Packet {
    Hello,
    Auth,
    Data,
    Bye,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Protocol Handler State Machine ===\n");

    let credentials_ok = Cell::new(false);
    let auth_attempts = Cell::new(0u32);
    let bytes_received = Cell::new(0usize);

    let mut session = MachineBuilder::new()
        .transitions([
            Transition::new(Session::Idle, Session::Handshaking, Packet::Hello),
            Transition::new(Session::Handshaking, Session::Open, Packet::Auth)
                .when(|| credentials_ok.get())
                .then(|| auth_attempts.set(auth_attempts.get() + 1)),
            Transition::new(Session::Handshaking, Session::Closed, Packet::Auth)
                .when(|| auth_attempts.get() >= 3),
            Transition::new(Session::Open, Session::Open, Packet::Data)
                .then(|| bytes_received.set(bytes_received.get() + 512)),
            Transition::new(Session::Open, Session::Closed, Packet::Bye),
        ])
        .observer(|from, to, packet| println!("  [{packet:?}] {from:?} -> {to:?}"))
        .record_history(Some(16))
        .build();

    let script = [
        Packet::Data,
        Packet::Hello,
        Packet::Auth,
        Packet::Auth,
        Packet::Data,
        Packet::Data,
        Packet::Bye,
        Packet::Hello,
    ];

    for (step, packet) in script.into_iter().enumerate() {
        if step == 3 {
            println!("  (credentials accepted)");
            credentials_ok.set(true);
        }
        match session.dispatch(packet) {
            Dispatch::Transitioned { .. } => {}
            Dispatch::GuardRejected => {
                println!(
                    "  [{packet:?}] recognized in {:?} but refused",
                    session.state()
                );
                auth_attempts.set(auth_attempts.get() + 1);
            }
            Dispatch::NoMatchingTrigger => {
                println!("  [{packet:?}] ignored in {:?}", session.state());
            }
        }
    }

    println!("\nFinal state: {:?}", session.state());
    println!("Bytes received: {}", bytes_received.get());

    if let Some(history) = session.history() {
        let path: Vec<String> = history
            .get_path()
            .iter()
            .map(|s| format!("{s:?}"))
            .collect();
        println!("Path: {}", path.join(" -> "));
        if let Some(elapsed) = history.duration() {
            println!("Session lifetime: {elapsed:?}");
        }
    }

    println!("\n=== Example Complete ===");
}
