//! Transition entities.

use crate::core::event::Event;
use serde::{Deserialize, Serialize};

/// A directed edge between states.
///
/// The source always names the state the transition was declared under.
/// The target is optional: a transition without one is internal, firing
/// without leaving its source. The event is optional too: an
/// eventless transition is evaluated opportunistically by the runtime
/// rather than waiting for an event. Guard and action are opaque handles
/// passed through verbatim for the execution engine to resolve.
///
/// # Example
///
/// ```rust
/// use statecraft::{Event, Transition};
///
/// let transition = Transition {
///     source: "idle".to_string(),
///     target: Some("running".to_string()),
///     event: Some(Event::new("start")),
///     guard: Some("operator present".to_string()),
///     action: None,
/// };
/// assert!(!transition.is_internal());
/// assert!(!transition.is_eventless());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Transition {
    /// Name of the owning state.
    pub source: String,
    /// Name of the state entered when the transition fires; `None` for an
    /// internal transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Triggering event; `None` for an eventless transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<Event>,
    /// Opaque condition handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guard: Option<String>,
    /// Opaque action handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl Transition {
    /// Whether the transition stays inside its source state.
    pub fn is_internal(&self) -> bool {
        self.target.is_none()
    }

    /// Whether the transition fires without a triggering event.
    pub fn is_eventless(&self) -> bool {
        self.event.is_none()
    }
}
