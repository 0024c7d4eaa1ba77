//! Elevator Statechart
//!
//! This example imports a declarative elevator description and inspects
//! the linked model.
//!
//! Key concepts:
//! - Compound states with an initial child
//! - Guarded transitions with opaque guard handles
//! - Querying the hierarchy index and per-source transitions
//!
//! Run with: cargo run --example elevator

use statecraft::import_from_str;

const ELEVATOR: &str = "
name: elevator
initial: idle
states:
  - name: idle
    transitions:
      - target: moving
        event: floor requested
        guard: doors closed
  - name: moving
    initial: accelerating
    on entry: engage motor
    on exit: release motor
    states:
      - name: accelerating
        transitions:
          - target: cruising
      - name: cruising
        transitions:
          - target: braking
            event: approaching floor
      - name: braking
    transitions:
      - target: idle
        event: floor reached
        action: open doors
";

fn main() {
    let machine = import_from_str(ELEVATOR).expect("elevator document should import");

    println!("=== Elevator Statechart ===\n");
    println!("Machine: {}", machine.name());
    println!("Initial state: {}", machine.initial());
    println!("Registered states: {}\n", machine.state_count());

    println!("Hierarchy:");
    let mut names: Vec<&str> = machine.states().map(|s| s.name.as_str()).collect();
    names.sort_unstable();
    for name in names {
        let state = machine.state(name).unwrap();
        match machine.parent(name) {
            Some(parent) => println!("  {name} ({}) under {parent}", state.kind_name()),
            None => println!("  {name} ({}) at top level", state.kind_name()),
        }
    }

    println!("\nTransitions out of 'moving':");
    for transition in machine.transitions_from("moving") {
        let event = transition
            .event
            .as_ref()
            .map(|e| e.name().to_string())
            .unwrap_or_else(|| "<eventless>".to_string());
        let target = transition.target.as_deref().unwrap_or("<internal>");
        println!("  on '{event}' -> {target}");
    }

    println!("\nEvent catalog: {:?}", machine.events());
    println!("\n=== Example Complete ===");
}
