//! Property-based tests for `BalancedTree`.
//!
//! These exercise the AVL balance invariant, the concatenated-key
//! ordering invariant, and the store contract against a model map.

use std::collections::HashMap;

use phonedex::{BalancedTree, Contact};
use proptest::prelude::*;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

/// Short names over a tiny alphabet so sequences collide often.
fn arbitrary_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-D]{0,3}").expect("valid regex")
}

fn arbitrary_contact() -> impl Strategy<Value = Contact> {
    (arbitrary_name(), arbitrary_name())
        .prop_map(|(first, last)| Contact::new(first, last, "555-0000", "NOWHERE"))
}

/// One step of a workload: insert a record or remove a key.
#[derive(Debug, Clone)]
enum Operation {
    Insert(Contact),
    Remove(String, String),
}

fn arbitrary_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => arbitrary_contact().prop_map(Operation::Insert),
        1 => (arbitrary_name(), arbitrary_name())
            .prop_map(|(first, last)| Operation::Remove(first, last)),
    ]
}

fn concatenated_keys(tree: &BalancedTree) -> Vec<String> {
    tree.iter()
        .map(|contact| format!("{}{}", contact.first_name(), contact.last_name()))
        .collect()
}

// =============================================================================
// Balance and Ordering Invariants
// =============================================================================

proptest! {
    /// After every single operation the AVL invariant holds at every node.
    #[test]
    fn prop_balance_invariant_holds_after_every_operation(
        operations in prop::collection::vec(arbitrary_operation(), 0..60)
    ) {
        let mut tree = BalancedTree::new();
        for operation in operations {
            match operation {
                Operation::Insert(contact) => {
                    tree.insert(contact);
                }
                Operation::Remove(first, last) => {
                    tree.remove(&first, &last);
                }
            }
            prop_assert!(tree.is_height_balanced());
        }
    }

    /// In-order iteration always yields non-decreasing concatenated keys.
    #[test]
    fn prop_in_order_iteration_is_sorted(
        contacts in prop::collection::vec(arbitrary_contact(), 0..40)
    ) {
        let tree: BalancedTree = contacts.into_iter().collect();
        let keys = concatenated_keys(&tree);
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }

    /// The cached root heights agree with the balance bound.
    #[test]
    fn prop_subtree_heights_differ_by_at_most_one(
        contacts in prop::collection::vec(arbitrary_contact(), 1..40)
    ) {
        let tree: BalancedTree = contacts.into_iter().collect();
        let left = tree.height_left_subtree().unwrap();
        let right = tree.height_right_subtree().unwrap();
        prop_assert!((left - right).abs() <= 1);
    }
}

// =============================================================================
// Store Contract Laws
// =============================================================================

proptest! {
    /// Insert then find returns the record with every field unchanged.
    #[test]
    fn prop_insert_then_find_round_trips(
        contacts in prop::collection::vec(arbitrary_contact(), 0..30),
        first in arbitrary_name(),
        last in arbitrary_name(),
    ) {
        let mut tree: BalancedTree = contacts.into_iter().collect();
        let record = Contact::new(first.clone(), last.clone(), "555-1234", "BOSTON");
        if tree.insert(record.clone()) {
            prop_assert_eq!(tree.find(&first, &last), Some(&record));
        }
    }

    /// Remove then find reports the key absent, and the length drops by
    /// exactly one when the key was present.
    #[test]
    fn prop_remove_then_find_is_absent(
        contacts in prop::collection::vec(arbitrary_contact(), 0..30),
        first in arbitrary_name(),
        last in arbitrary_name(),
    ) {
        let mut tree: BalancedTree = contacts.into_iter().collect();
        let length_before = tree.len();
        let was_present = tree.find(&first, &last).is_some();

        let removed = tree.remove(&first, &last);
        prop_assert_eq!(removed, was_present);
        prop_assert!(tree.find(&first, &last).is_none());
        let expected_length = if removed { length_before - 1 } else { length_before };
        prop_assert_eq!(tree.len(), expected_length);
    }

    /// A full workload agrees with a model map keyed by the exact name
    /// pair; in particular, at most one record per key ever exists.
    #[test]
    fn prop_tree_agrees_with_model_map(
        operations in prop::collection::vec(arbitrary_operation(), 0..80)
    ) {
        let mut tree = BalancedTree::new();
        let mut model: HashMap<(String, String), Contact> = HashMap::new();

        for operation in operations {
            match operation {
                Operation::Insert(contact) => {
                    let key = (
                        contact.first_name().to_owned(),
                        contact.last_name().to_owned(),
                    );
                    let inserted = tree.insert(contact.clone());
                    prop_assert_eq!(inserted, !model.contains_key(&key));
                    model.entry(key).or_insert(contact);
                }
                Operation::Remove(first, last) => {
                    let removed = tree.remove(&first, &last);
                    let model_removed = model.remove(&(first, last)).is_some();
                    prop_assert_eq!(removed, model_removed);
                }
            }
        }

        prop_assert_eq!(tree.len(), model.len());
        for ((first, last), record) in &model {
            prop_assert_eq!(tree.find(first, last), Some(record));
        }
    }

    /// Prefix search returns exactly the records whose first name starts
    /// with the prefix, in concatenated-key order.
    #[test]
    fn prop_prefix_search_matches_filtered_iteration(
        contacts in prop::collection::vec(arbitrary_contact(), 0..30),
        prefix in proptest::string::string_regex("[A-D]{0,2}").expect("valid regex"),
    ) {
        let tree: BalancedTree = contacts.into_iter().collect();
        let expected: Vec<&Contact> = tree
            .iter()
            .filter(|contact| contact.first_name().starts_with(&prefix))
            .collect();
        prop_assert_eq!(tree.find_by_first_name(&prefix), expected);
    }
}
