//! The statechart container: registry, hierarchy index, transitions.

use crate::core::error::MachineError;
use crate::core::state::State;
use crate::core::transition::Transition;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// A fully linked statechart model.
///
/// States live in a flat name-keyed registry; hierarchy is expressed
/// through a separate parent index instead of nested containers, so a
/// state is found by name in one lookup regardless of nesting depth.
/// Transitions are kept in declaration order and additionally indexed by
/// source state for runtime lookup.
///
/// The machine is mutated only through its registration operations, which
/// enforce the model's invariants: unique names, children only under
/// composite states, transitions only on registered non-pseudostate
/// sources. Once construction finishes the machine is handed to the
/// execution engine as a read-only structural model.
///
/// # Example
///
/// ```rust
/// use statecraft::{State, StateKind, StateMachine, Transition};
///
/// let mut machine = StateMachine::new("m", "a", None);
/// machine
///     .register_state(State::new("a", StateKind::Basic), None)
///     .unwrap();
/// machine
///     .register_transition(Transition {
///         source: "a".to_string(),
///         target: None,
///         event: None,
///         guard: None,
///         action: None,
///     })
///     .unwrap();
///
/// assert_eq!(machine.state_count(), 1);
/// assert_eq!(machine.transitions_from("a").count(), 1);
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct StateMachine {
    name: String,
    initial: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    on_entry: Option<String>,
    states: HashMap<String, State>,
    parent_of: HashMap<String, String>,
    transitions: Vec<Transition>,
    by_source: HashMap<String, Vec<usize>>,
}

impl StateMachine {
    /// Create an empty machine shell.
    ///
    /// `initial` names the state the machine starts in; whether it
    /// resolves is checked once all states are registered, not here.
    pub fn new(
        name: impl Into<String>,
        initial: impl Into<String>,
        on_entry: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            initial: initial.into(),
            on_entry,
            states: HashMap::new(),
            parent_of: HashMap::new(),
            transitions: Vec::new(),
            by_source: HashMap::new(),
        }
    }

    /// The machine's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the machine's initial state.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Opaque handle run when the machine starts.
    pub fn on_entry(&self) -> Option<&str> {
        self.on_entry.as_deref()
    }

    /// Register a state, optionally under a parent.
    ///
    /// The parent must already be registered and must be a composite
    /// (compound or orthogonal) state. Registration fails if the state's
    /// name is already taken.
    pub fn register_state(
        &mut self,
        state: State,
        parent: Option<&str>,
    ) -> Result<(), MachineError> {
        if self.states.contains_key(&state.name) {
            return Err(MachineError::DuplicateState(state.name));
        }

        if let Some(parent_name) = parent {
            let parent_state = self.states.get(parent_name).ok_or_else(|| {
                MachineError::UnknownParent {
                    parent: parent_name.to_string(),
                    child: state.name.clone(),
                }
            })?;
            if !parent_state.is_composite() {
                return Err(MachineError::ParentNotComposite {
                    parent: parent_name.to_string(),
                    child: state.name.clone(),
                    kind: parent_state.kind_name(),
                });
            }
            self.parent_of
                .insert(state.name.clone(), parent_name.to_string());
        }

        self.states.insert(state.name.clone(), state);
        Ok(())
    }

    /// Register a transition under its source state.
    ///
    /// The source must already be registered and must not be a final or
    /// history pseudostate. The target is not checked here; forward
    /// references are resolved after the whole document has been walked.
    pub fn register_transition(&mut self, transition: Transition) -> Result<(), MachineError> {
        let source = self
            .states
            .get(&transition.source)
            .ok_or_else(|| MachineError::UnknownTransitionSource(transition.source.clone()))?;
        if !source.owns_transitions() {
            return Err(MachineError::TransitionFromPseudostate {
                source_state: transition.source.clone(),
                kind: source.kind_name(),
            });
        }

        self.by_source
            .entry(transition.source.clone())
            .or_default()
            .push(self.transitions.len());
        self.transitions.push(transition);
        Ok(())
    }

    /// Look up a state by name.
    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.get(name)
    }

    /// Whether a state with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Name of a state's parent, if it has one. Root states have none.
    pub fn parent(&self, name: &str) -> Option<&str> {
        self.parent_of.get(name).map(String::as_str)
    }

    /// Names of a state's direct children. Order is unspecified.
    pub fn children(&self, name: &str) -> Vec<&str> {
        self.parent_of
            .iter()
            .filter(|(_, parent)| parent.as_str() == name)
            .map(|(child, _)| child.as_str())
            .collect()
    }

    /// Iterate over every registered state. Order is unspecified.
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.values()
    }

    /// Number of registered states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// All transitions, in declaration order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Transitions declared on the given source state, in declaration
    /// order.
    pub fn transitions_from<'a>(
        &'a self,
        source: &str,
    ) -> impl Iterator<Item = &'a Transition> + 'a {
        self.by_source
            .get(source)
            .into_iter()
            .flatten()
            .map(move |&index| &self.transitions[index])
    }

    /// Deduplicated, sorted catalog of event names appearing on
    /// transitions.
    pub fn events(&self) -> Vec<&str> {
        let names: BTreeSet<&str> = self
            .transitions
            .iter()
            .filter_map(|t| t.event.as_ref())
            .map(|event| event.name())
            .collect();
        names.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::Event;
    use crate::core::state::StateKind;

    fn compound(name: &str, initial: &str) -> State {
        State::new(
            name,
            StateKind::Compound {
                initial: initial.to_string(),
            },
        )
    }

    fn transition(source: &str, target: &str, event: Option<&str>) -> Transition {
        Transition {
            source: source.to_string(),
            target: Some(target.to_string()),
            event: event.map(Event::new),
            guard: None,
            action: None,
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut machine = StateMachine::new("m", "a", None);
        machine
            .register_state(State::new("a", StateKind::Basic), None)
            .unwrap();

        let result = machine.register_state(State::new("a", StateKind::Final), None);
        assert!(matches!(result, Err(MachineError::DuplicateState(name)) if name == "a"));
        assert_eq!(machine.state_count(), 1);
    }

    #[test]
    fn parent_index_tracks_registration() {
        let mut machine = StateMachine::new("m", "c", None);
        machine.register_state(compound("c", "c1"), None).unwrap();
        machine
            .register_state(State::new("c1", StateKind::Basic), Some("c"))
            .unwrap();

        assert_eq!(machine.parent("c1"), Some("c"));
        assert_eq!(machine.parent("c"), None);
        assert_eq!(machine.children("c"), vec!["c1"]);
    }

    #[test]
    fn parent_must_already_be_registered() {
        let mut machine = StateMachine::new("m", "a", None);
        let result = machine.register_state(State::new("a", StateKind::Basic), Some("missing"));

        assert!(matches!(
            result,
            Err(MachineError::UnknownParent { parent, .. }) if parent == "missing"
        ));
    }

    #[test]
    fn only_composite_states_accept_children() {
        let mut machine = StateMachine::new("m", "f", None);
        machine
            .register_state(State::new("f", StateKind::Final), None)
            .unwrap();

        let result = machine.register_state(State::new("child", StateKind::Basic), Some("f"));
        assert!(matches!(
            result,
            Err(MachineError::ParentNotComposite { kind, .. }) if kind == "final"
        ));
    }

    #[test]
    fn orthogonal_states_accept_children() {
        let mut machine = StateMachine::new("m", "o", None);
        machine
            .register_state(State::new("o", StateKind::Orthogonal), None)
            .unwrap();
        machine
            .register_state(State::new("region", StateKind::Basic), Some("o"))
            .unwrap();

        assert_eq!(machine.parent("region"), Some("o"));
    }

    #[test]
    fn transitions_require_a_registered_source() {
        let mut machine = StateMachine::new("m", "a", None);
        let result = machine.register_transition(transition("a", "b", None));

        assert!(matches!(
            result,
            Err(MachineError::UnknownTransitionSource(source)) if source == "a"
        ));
    }

    #[test]
    fn pseudostates_reject_transitions() {
        let mut machine = StateMachine::new("m", "h", None);
        machine
            .register_state(
                State::new(
                    "h",
                    StateKind::History {
                        initial: None,
                        deep: false,
                    },
                ),
                None,
            )
            .unwrap();

        let result = machine.register_transition(transition("h", "a", None));
        assert!(matches!(
            result,
            Err(MachineError::TransitionFromPseudostate { kind, .. }) if kind == "history"
        ));
    }

    #[test]
    fn transitions_are_grouped_by_source() {
        let mut machine = StateMachine::new("m", "a", None);
        machine
            .register_state(State::new("a", StateKind::Basic), None)
            .unwrap();
        machine
            .register_state(State::new("b", StateKind::Basic), None)
            .unwrap();
        machine
            .register_transition(transition("a", "b", Some("go")))
            .unwrap();
        machine
            .register_transition(transition("b", "a", Some("back")))
            .unwrap();
        machine
            .register_transition(transition("a", "a", Some("retry")))
            .unwrap();

        let from_a: Vec<_> = machine
            .transitions_from("a")
            .map(|t| t.target.as_deref().unwrap())
            .collect();
        assert_eq!(from_a, vec!["b", "a"]);
        assert_eq!(machine.transitions_from("b").count(), 1);
        assert_eq!(machine.transitions_from("missing").count(), 0);
        assert_eq!(machine.transitions().len(), 3);
    }

    #[test]
    fn events_catalog_is_sorted_and_deduplicated() {
        let mut machine = StateMachine::new("m", "a", None);
        machine
            .register_state(State::new("a", StateKind::Basic), None)
            .unwrap();
        machine
            .register_transition(transition("a", "a", Some("go")))
            .unwrap();
        machine
            .register_transition(transition("a", "a", Some("back")))
            .unwrap();
        machine
            .register_transition(transition("a", "a", Some("go")))
            .unwrap();
        machine.register_transition(transition("a", "a", None)).unwrap();

        assert_eq!(machine.events(), vec!["back", "go"]);
    }
}
