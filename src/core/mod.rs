//! Entity model for statecharts.
//!
//! This module defines the static structural model an execution engine
//! consumes:
//! - [`State`] and [`StateKind`]: the five state kinds as a tagged variant
//! - [`Event`]: named triggers compared by name
//! - [`Transition`]: edges between states with opaque guard/action handles
//! - [`StateMachine`]: the flat registry with its hierarchy index
//!
//! Entities are created once during import and are immutable afterwards;
//! the machine's registration operations are the only mutation points and
//! enforce the model's invariants.

mod error;
mod event;
mod machine;
mod state;
mod transition;

pub use error::MachineError;
pub use event::Event;
pub use machine::StateMachine;
pub use state::{State, StateKind};
pub use transition::Transition;
