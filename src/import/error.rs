//! Import errors.

use crate::core::MachineError;
use thiserror::Error;

/// Errors raised while importing a statechart document.
///
/// Every error is terminal for the import call: no partial machine is
/// returned, and nothing is retried internally. The variants carry enough
/// context (state name or node position) to locate the offending part of
/// the document.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The document string could not be decoded.
    #[error("failed to decode document: {0}")]
    Decode(#[from] serde_yaml::Error),

    /// The root document is missing `name`, `initial`, or `states`, or is
    /// not a mapping. Surfaced before any walking begins.
    #[error("invalid root document: {0}")]
    InvalidRoot(String),

    /// A node is missing a required field or has the wrong shape.
    #[error("malformed document at {at}: {reason}")]
    MalformedDocument { at: String, reason: String },

    /// A registration invariant was violated (duplicate state name,
    /// child under a non-composite state, transition on a pseudostate).
    #[error(transparent)]
    Registration(#[from] MachineError),

    /// A name reference did not resolve after the whole document was
    /// walked: a transition target, a compound or history `initial`, or
    /// the machine's own initial state.
    #[error("dangling reference on '{owner}': {role} '{name}' does not resolve")]
    DanglingReference {
        owner: String,
        role: &'static str,
        name: String,
    },
}
