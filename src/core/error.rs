//! Registration errors for the entity model.

use thiserror::Error;

/// Errors raised by [`StateMachine`](crate::core::StateMachine)
/// registration operations when an invariant would be violated.
#[derive(Debug, Error)]
pub enum MachineError {
    /// A state with this name is already registered.
    #[error("a state named '{0}' is already registered")]
    DuplicateState(String),

    /// The named parent has not been registered yet.
    #[error("cannot register '{child}': parent state '{parent}' is not registered")]
    UnknownParent { parent: String, child: String },

    /// The named parent is not a compound or orthogonal state.
    #[error("cannot nest '{child}' under '{parent}': a {kind} state owns no children")]
    ParentNotComposite {
        parent: String,
        child: String,
        kind: &'static str,
    },

    /// The transition's source has not been registered.
    #[error("transition declared on unregistered state '{0}'")]
    UnknownTransitionSource(String),

    /// The transition's source is a final or history pseudostate.
    #[error("a {kind} state cannot declare outgoing transitions (on '{source_state}')")]
    TransitionFromPseudostate {
        source_state: String,
        kind: &'static str,
    },
}
