//! Document walker: drives the import from root document to linked model.

use crate::core::{StateKind, StateMachine};
use crate::import::error::ImportError;
use crate::import::node::Node;
use crate::import::state::state_from_node;
use crate::import::transition::transition_from_node;
use serde_yaml::{Mapping, Value};

/// Import a statechart from its textual document form.
///
/// Thin wrapper around [`import_from_value`]: decoding the markup string
/// into an untyped document value is delegated to the document decoder.
///
/// # Example
///
/// ```rust
/// use statecraft::import_from_str;
///
/// let machine = import_from_str(
///     "
/// name: m
/// initial: a
/// states:
///   - name: a
///     transitions:
///       - target: b
///         event: go
///   - name: b
/// ",
/// )
/// .unwrap();
///
/// assert_eq!(machine.initial(), "a");
/// assert_eq!(machine.state_count(), 2);
/// ```
pub fn import_from_str(document: &str) -> Result<StateMachine, ImportError> {
    let value: Value = serde_yaml::from_str(document)?;
    import_from_value(&value)
}

/// Import a statechart from an already-decoded document value.
///
/// The document is traversed with an explicit work list of
/// (node, parent-name) pairs instead of recursive descent, so arbitrarily
/// deep nesting never grows the call stack. Sibling processing order is
/// unspecified and nothing here may depend on it. After every node has
/// been registered, a resolution pass checks that all name references
/// (transition targets, compound and history `initial`s, and the machine's
/// own initial state) resolve against the finished registry; forward
/// references across siblings are therefore legal.
pub fn import_from_value(document: &Value) -> Result<StateMachine, ImportError> {
    let root = document
        .as_mapping()
        .ok_or_else(|| ImportError::InvalidRoot("document root is not a mapping".to_string()))?;

    let name = required_root_str(root, "name")?;
    let initial = required_root_str(root, "initial")?;
    let on_entry = optional_root_str(root, "on entry")?.map(str::to_string);
    let top_states = match root.get("states") {
        Some(value) => value.as_sequence().ok_or_else(|| {
            ImportError::InvalidRoot("field `states` must be a sequence".to_string())
        })?,
        None => {
            return Err(ImportError::InvalidRoot(
                "missing required field `states`".to_string(),
            ))
        }
    };

    let mut machine = StateMachine::new(name, initial, on_entry);

    let mut work: Vec<(&Value, Option<String>)> =
        top_states.iter().map(|node| (node, None)).collect();

    while let Some((value, parent)) = work.pop() {
        let context = match &parent {
            Some(parent_name) => format!("state under '{parent_name}'"),
            None => "top-level state".to_string(),
        };
        let node = Node::new(value, context)?;
        let state = state_from_node(&node)?;
        let state_name = state.name.clone();
        machine.register_state(state, parent.as_deref())?;

        if let Some(transitions) = node.optional_seq("transitions")? {
            for transition_node in transitions {
                let transition = transition_from_node(&state_name, transition_node)?;
                machine.register_transition(transition)?;
            }
        }

        for children_key in ["states", "orthogonal states"] {
            if let Some(children) = node.optional_seq(children_key)? {
                for child in children {
                    work.push((child, Some(state_name.clone())));
                }
            }
        }
    }

    resolve_references(&machine)?;
    Ok(machine)
}

fn required_root_str<'a>(root: &'a Mapping, key: &str) -> Result<&'a str, ImportError> {
    match root.get(key) {
        Some(value) => value
            .as_str()
            .ok_or_else(|| ImportError::InvalidRoot(format!("field `{key}` must be a string"))),
        None => Err(ImportError::InvalidRoot(format!(
            "missing required field `{key}`"
        ))),
    }
}

fn optional_root_str<'a>(root: &'a Mapping, key: &str) -> Result<Option<&'a str>, ImportError> {
    match root.get(key) {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| ImportError::InvalidRoot(format!("field `{key}` must be a string"))),
    }
}

/// Check every name reference against the finished registry.
///
/// A compound `initial` must resolve to one of the compound's direct
/// children, which the parent index answers in one lookup. A history
/// `initial` may name any registered state (a deep history default can
/// legitimately point into a nested configuration).
fn resolve_references(machine: &StateMachine) -> Result<(), ImportError> {
    if !machine.contains(machine.initial()) {
        return Err(ImportError::DanglingReference {
            owner: machine.name().to_string(),
            role: "initial state",
            name: machine.initial().to_string(),
        });
    }

    for transition in machine.transitions() {
        if let Some(target) = &transition.target {
            if !machine.contains(target) {
                return Err(ImportError::DanglingReference {
                    owner: transition.source.clone(),
                    role: "transition target",
                    name: target.clone(),
                });
            }
        }
    }

    for state in machine.states() {
        match &state.kind {
            StateKind::Compound { initial } => {
                if machine.parent(initial) != Some(state.name.as_str()) {
                    return Err(ImportError::DanglingReference {
                        owner: state.name.clone(),
                        role: "initial child",
                        name: initial.clone(),
                    });
                }
            }
            StateKind::History {
                initial: Some(initial),
                ..
            } => {
                if !machine.contains(initial) {
                    return Err(ImportError::DanglingReference {
                        owner: state.name.clone(),
                        role: "history default",
                        name: initial.clone(),
                    });
                }
            }
            _ => {}
        }
    }

    Ok(())
}
