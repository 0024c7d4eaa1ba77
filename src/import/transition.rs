//! Transition factory: one document node to one typed transition.

use crate::core::{Event, Transition};
use crate::import::error::ImportError;
use crate::import::node::Node;
use serde_yaml::Value;

/// Build a transition declared under the named owning state.
///
/// The source is fixed to the owning state's name. Every other field is
/// optional; guard and action are opaque handles carried through without
/// interpretation. Fails only when the node is not a mapping or a present
/// field has the wrong shape.
pub(crate) fn transition_from_node(
    source: &str,
    value: &Value,
) -> Result<Transition, ImportError> {
    let node = Node::new(value, format!("transition on '{source}'"))?;
    Ok(Transition {
        source: source.to_string(),
        target: node.optional_str("target")?.map(str::to_string),
        event: node.optional_str("event")?.map(Event::new),
        guard: node.optional_str("guard")?.map(str::to_string),
        action: node.optional_str("action")?.map(str::to_string),
    })
}
