//! State entities.
//!
//! A state is a name plus optional entry/exit action handles, tagged with
//! one of five kinds. The kinds have materially different field sets, so
//! they form a sum type dispatched by `match` rather than a trait
//! hierarchy. Parent/child linkage is deliberately *not* stored here: the
//! [`StateMachine`](crate::core::StateMachine) keeps a flat registry and a
//! separate parent index, so sibling subtrees cannot collide and a state
//! can be inspected without chasing containers.
//!
//! Action handles (`on_entry`, `on_exit`) are opaque strings resolved by
//! the execution engine; the model never interprets them.

use serde::{Deserialize, Serialize};

/// The kind-specific part of a state.
///
/// # Example
///
/// ```rust
/// use statecraft::{State, StateKind};
///
/// let cruising = State::new("cruising", StateKind::Basic);
/// assert!(!cruising.is_composite());
///
/// let flight = State::new(
///     "flight",
///     StateKind::Compound {
///         initial: "cruising".to_string(),
///     },
/// );
/// assert!(flight.is_composite());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum StateKind {
    /// Leaf state with no children.
    Basic,
    /// Holds mutually exclusive child states; exactly one is active at a
    /// time. `initial` names the child entered by default.
    Compound { initial: String },
    /// Holds independent child regions, all active concurrently. There is
    /// no single `initial`; each region carries its own.
    Orthogonal,
    /// Pseudostate remembering the last active child of its parent.
    /// `initial` is the default child when no history exists yet; `deep`
    /// history remembers the full nested configuration rather than only
    /// the direct child.
    History { initial: Option<String>, deep: bool },
    /// Terminal pseudostate: no children, no outgoing transitions.
    Final,
}

/// One state of a statechart.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct State {
    /// Name, unique across the whole machine.
    pub name: String,
    /// Opaque handle run when the state is entered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_entry: Option<String>,
    /// Opaque handle run when the state is exited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_exit: Option<String>,
    /// Kind tag with kind-specific attributes.
    pub kind: StateKind,
}

impl State {
    /// Create a state with no entry/exit actions.
    pub fn new(name: impl Into<String>, kind: StateKind) -> Self {
        Self {
            name: name.into(),
            on_entry: None,
            on_exit: None,
            kind,
        }
    }

    /// Whether this state may own child states.
    ///
    /// Only compound and orthogonal states are containers. Registering a
    /// child under any other kind is rejected by the machine.
    pub fn is_composite(&self) -> bool {
        matches!(self.kind, StateKind::Compound { .. } | StateKind::Orthogonal)
    }

    /// Whether this state may declare outgoing transitions.
    ///
    /// Final and history pseudostates never do: a final state is terminal,
    /// and a history state's "resume" behavior belongs to the runtime, not
    /// to declared transitions.
    pub fn owns_transitions(&self) -> bool {
        !matches!(self.kind, StateKind::Final | StateKind::History { .. })
    }

    /// Whether this is a terminal (final) state.
    pub fn is_final(&self) -> bool {
        matches!(self.kind, StateKind::Final)
    }

    /// Diagnostic label for the state's kind.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            StateKind::Basic => "basic",
            StateKind::Compound { .. } => "compound",
            StateKind::Orthogonal => "orthogonal",
            StateKind::History { .. } => "history",
            StateKind::Final => "final",
        }
    }
}
