//! Import pipeline: declarative statechart documents to linked models.
//!
//! The pipeline has three collaborators:
//! - a node accessor layer over the untyped document value
//! - two pure factories translating one node into one [`State`] or
//!   [`Transition`](crate::core::Transition)
//! - the walker, which owns the work list, registers every entity into
//!   the [`StateMachine`](crate::core::StateMachine), and runs the final
//!   reference-resolution pass
//!
//! Entry points are [`import_from_str`] for a raw document string and
//! [`import_from_value`] for an already-decoded document.
//!
//! [`State`]: crate::core::State

pub mod error;

mod node;
mod state;
mod transition;
mod walker;

pub use error::ImportError;
pub use walker::{import_from_str, import_from_value};
