//! Statecraft: declarative statecharts into fully linked models.
//!
//! Statecraft turns a nested, declarative description of a hierarchical
//! state machine (simple, compound, orthogonal, history, and final
//! states, each optionally carrying transitions) into a flat, fully
//! cross-referenced [`StateMachine`] ready for an execution engine.
//!
//! The importer walks the document with an explicit work list rather than
//! recursion, registers every state into a name-keyed registry with a
//! separate parent index, and resolves all name references in a second
//! pass, so forward references between siblings are legal. Guard and
//! action expressions are opaque handles: carried through verbatim, never
//! evaluated.
//!
//! # Example
//!
//! ```rust
//! use statecraft::import_from_str;
//!
//! let machine = import_from_str(
//!     "
//! name: media player
//! initial: stopped
//! states:
//!   - name: stopped
//!     transitions:
//!       - target: playing
//!         event: play
//!   - name: playing
//!     transitions:
//!       - target: stopped
//!         event: stop
//! ",
//! )
//! .unwrap();
//!
//! assert_eq!(machine.state_count(), 2);
//! assert_eq!(machine.initial(), "stopped");
//! assert!(machine
//!     .transitions_from("stopped")
//!     .any(|t| t.target.as_deref() == Some("playing")));
//! ```

pub mod core;
pub mod import;

// Re-export commonly used types
pub use crate::core::{Event, MachineError, State, StateKind, StateMachine, Transition};
pub use crate::import::{import_from_str, import_from_value, ImportError};
