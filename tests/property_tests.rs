//! Property-based tests for the import pipeline.
//!
//! These tests use proptest to verify structural properties hold across
//! many randomly generated statechart documents.

use proptest::prelude::*;
use serde_yaml::{Mapping, Value};
use statecraft::import_from_value;

/// Shape of one generated state node; names are assigned at render time
/// so every node is unique.
#[derive(Clone, Debug)]
enum Shape {
    Leaf,
    Compound(Vec<Shape>),
    Orthogonal(Vec<Shape>),
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = Just(Shape::Leaf);
    leaf.prop_recursive(4, 24, 4, |inner| {
        prop_oneof![
            2 => Just(Shape::Leaf),
            2 => prop::collection::vec(inner.clone(), 1..4).prop_map(Shape::Compound),
            1 => prop::collection::vec(inner, 2..4).prop_map(Shape::Orthogonal),
        ]
    })
}

/// Render a shape to a document node, recording every (name, parent)
/// pair the import is expected to reproduce. When `with_transitions` is
/// set, every node also declares a transition targeting the first
/// top-level state, which exercises references in both directions no
/// matter what order the walker picks.
fn render(
    shape: &Shape,
    name: &str,
    parent: Option<&str>,
    with_transitions: bool,
    links: &mut Vec<(String, Option<String>)>,
) -> Value {
    links.push((name.to_string(), parent.map(str::to_string)));

    let mut map = Mapping::new();
    map.insert("name".into(), name.into());

    if with_transitions {
        let mut transition = Mapping::new();
        transition.insert("target".into(), "s0".into());
        transition.insert("event".into(), "go".into());
        map.insert(
            "transitions".into(),
            Value::Sequence(vec![Value::Mapping(transition)]),
        );
    }

    match shape {
        Shape::Leaf => {}
        Shape::Compound(children) => {
            let rendered: Vec<Value> = children
                .iter()
                .enumerate()
                .map(|(i, child)| {
                    render(child, &format!("{name}-{i}"), Some(name), with_transitions, links)
                })
                .collect();
            map.insert("initial".into(), format!("{name}-0").into());
            map.insert("states".into(), Value::Sequence(rendered));
        }
        Shape::Orthogonal(children) => {
            let rendered: Vec<Value> = children
                .iter()
                .enumerate()
                .map(|(i, child)| {
                    render(child, &format!("{name}-{i}"), Some(name), with_transitions, links)
                })
                .collect();
            map.insert("orthogonal states".into(), Value::Sequence(rendered));
        }
    }

    Value::Mapping(map)
}

fn document(
    shapes: &[Shape],
    with_transitions: bool,
    links: &mut Vec<(String, Option<String>)>,
) -> Value {
    let rendered: Vec<Value> = shapes
        .iter()
        .enumerate()
        .map(|(i, s)| render(s, &format!("s{i}"), None, with_transitions, links))
        .collect();

    let mut root = Mapping::new();
    root.insert("name".into(), "m".into());
    root.insert("initial".into(), "s0".into());
    root.insert("states".into(), Value::Sequence(rendered));
    Value::Mapping(root)
}

proptest! {
    #[test]
    fn registry_matches_lexical_nesting(shapes in prop::collection::vec(shape(), 1..4)) {
        let mut links = Vec::new();
        let doc = document(&shapes, false, &mut links);

        let machine = import_from_value(&doc).unwrap();

        prop_assert_eq!(machine.state_count(), links.len());
        for (name, parent) in &links {
            prop_assert_eq!(machine.parent(name), parent.as_deref());
        }
    }

    #[test]
    fn references_resolve_in_any_declaration_order(
        shapes in prop::collection::vec(shape(), 1..4)
    ) {
        let mut links = Vec::new();
        let doc = document(&shapes, true, &mut links);

        let machine = import_from_value(&doc).unwrap();

        prop_assert_eq!(machine.transitions().len(), links.len());
        prop_assert!(machine
            .transitions()
            .iter()
            .all(|t| t.target.as_deref() == Some("s0")));
    }

    #[test]
    fn import_is_deterministic(shapes in prop::collection::vec(shape(), 1..4)) {
        let mut links = Vec::new();
        let doc = document(&shapes, true, &mut links);

        let first = import_from_value(&doc).unwrap();
        let second = import_from_value(&doc).unwrap();

        // serde_json object values compare key-by-key, so this is
        // independent of registry iteration order.
        prop_assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}
