//! State factory: one document node to one typed state.

use crate::core::{State, StateKind};
use crate::import::error::ImportError;
use crate::import::node::Node;

/// Build a state from one document node.
///
/// The kind is selected by precedence: an explicit `type` field wins over
/// structure, then a `states` child list makes the state compound, an
/// `orthogonal states` list makes it orthogonal, and anything else is a
/// basic leaf. Pure construction: the registry is neither consulted nor
/// mutated, and the node's children are left for the walker.
pub(crate) fn state_from_node(node: &Node<'_>) -> Result<State, ImportError> {
    let name = node.required_str("name")?.to_string();
    let on_entry = node.optional_str("on entry")?.map(str::to_string);
    let on_exit = node.optional_str("on exit")?.map(str::to_string);

    let kind = match node.optional_str("type")? {
        Some("final") => StateKind::Final,
        Some("history") => StateKind::History {
            initial: node.optional_str("initial")?.map(str::to_string),
            deep: node.optional_bool("deep")?.unwrap_or(false),
        },
        Some(other) => {
            return Err(ImportError::MalformedDocument {
                at: name,
                reason: format!("unknown state type '{other}' (expected 'final' or 'history')"),
            })
        }
        None => {
            if node.contains("states") {
                let initial = node.optional_str("initial")?.ok_or_else(|| {
                    ImportError::MalformedDocument {
                        at: name.clone(),
                        reason: "compound state requires an `initial` child name".to_string(),
                    }
                })?;
                StateKind::Compound {
                    initial: initial.to_string(),
                }
            } else if node.contains("orthogonal states") {
                StateKind::Orthogonal
            } else {
                StateKind::Basic
            }
        }
    };

    Ok(State {
        name,
        on_entry,
        on_exit,
        kind,
    })
}
