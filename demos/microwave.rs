//! Microwave Statechart
//!
//! This example demonstrates the full range of state kinds: orthogonal
//! regions, a history pseudostate with a default, and a final state.
//!
//! Key concepts:
//! - Orthogonal regions running concurrently (heating vs. lamp)
//! - Shallow history resuming an interrupted program
//! - Final state terminating a region
//!
//! Run with: cargo run --example microwave

use statecraft::{import_from_str, StateKind};

const MICROWAVE: &str = "
name: microwave
initial: closed
states:
  - name: closed
    initial: idle
    states:
      - name: idle
        transitions:
          - target: running
            event: start
      - name: running
        orthogonal states:
          - name: heating
            initial: low power
            states:
              - name: low power
                transitions:
                  - target: high power
                    event: boost
              - name: high power
          - name: lamp
            initial: lamp on
            states:
              - name: lamp on
        transitions:
          - target: done
            event: timer expired
      - name: resume point
        type: history
        initial: idle
      - name: done
        type: final
    transitions:
      - target: opened
        event: door opened
  - name: opened
    transitions:
      - target: resume point
        event: door closed
";

fn main() {
    let machine = import_from_str(MICROWAVE).expect("microwave document should import");

    println!("=== Microwave Statechart ===\n");
    println!("Machine: {}", machine.name());
    println!("States registered: {}", machine.state_count());

    let running = machine.state("running").unwrap();
    println!("\n'running' is {}", running.kind_name());
    let mut regions = machine.children("running");
    regions.sort_unstable();
    println!("  regions: {regions:?}");

    let resume = machine.state("resume point").unwrap();
    if let StateKind::History { initial, deep } = &resume.kind {
        println!("\n'resume point' is a history pseudostate");
        println!("  default: {:?}, deep: {deep}", initial.as_deref());
    }

    let done = machine.state("done").unwrap();
    println!("\n'done' is {} (terminal: {})", done.kind_name(), done.is_final());
    println!(
        "  declares transitions: {}",
        machine.transitions_from("done").count() > 0
    );

    println!("\nEvent catalog: {:?}", machine.events());
    println!("\n=== Example Complete ===");
}
