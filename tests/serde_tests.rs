#![cfg(feature = "serde")]

//! JSON round-trip tests for the `serde` feature.

use phonedex::{BalancedTree, Contact, ProbingHashTable};
use rstest::rstest;

fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::new("JOHN", "SMITH", "555-1234", "BOSTON"),
        Contact::new("ALICE", "JONES", "555-5678", "DENVER"),
        Contact::new("BOB", "SMITH", "555-9999", "BOSTON"),
    ]
}

// =============================================================================
// Contact Tests
// =============================================================================

#[rstest]
fn test_contact_json_roundtrip() {
    let contact = Contact::new("JOHN", "SMITH", "555-1234", "BOSTON");
    let json = serde_json::to_string(&contact).unwrap();
    let restored: Contact = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, contact);
}

#[rstest]
fn test_contact_serializes_named_fields() {
    let contact = Contact::new("JOHN", "SMITH", "555-1234", "BOSTON");
    let value = serde_json::to_value(&contact).unwrap();
    assert_eq!(value["first_name"], "JOHN");
    assert_eq!(value["last_name"], "SMITH");
    assert_eq!(value["phone_number"], "555-1234");
    assert_eq!(value["city"], "BOSTON");
}

// =============================================================================
// BalancedTree Tests
// =============================================================================

#[rstest]
fn test_balanced_tree_json_roundtrip() {
    let tree: BalancedTree = sample_contacts().into_iter().collect();
    let json = serde_json::to_string(&tree).unwrap();
    let restored: BalancedTree = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, tree);
    assert!(restored.is_height_balanced());
}

#[rstest]
fn test_balanced_tree_serializes_as_sorted_sequence() {
    let tree: BalancedTree = sample_contacts().into_iter().collect();
    let value = serde_json::to_value(&tree).unwrap();
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["first_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["ALICE", "BOB", "JOHN"]);
}

#[rstest]
fn test_balanced_tree_deserializing_duplicate_keys_keeps_first() {
    let json = r#"[
        {"first_name":"JOHN","last_name":"SMITH","phone_number":"555-1234","city":"BOSTON"},
        {"first_name":"JOHN","last_name":"SMITH","phone_number":"555-0000","city":"AUSTIN"}
    ]"#;
    let tree: BalancedTree = serde_json::from_str(json).unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.find("JOHN", "SMITH").unwrap().city(), "BOSTON");
}

// =============================================================================
// ProbingHashTable Tests
// =============================================================================

#[rstest]
fn test_probing_hash_table_json_roundtrip() {
    let table: ProbingHashTable = sample_contacts().into_iter().collect();
    let json = serde_json::to_string(&table).unwrap();
    let restored: ProbingHashTable = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, table);
    assert_eq!(restored.len(), 3);
    assert!(restored.find("JOHN", "SMITH").is_some());
}

#[rstest]
fn test_empty_stores_serialize_as_empty_arrays() {
    assert_eq!(serde_json::to_string(&BalancedTree::new()).unwrap(), "[]");
    assert_eq!(
        serde_json::to_string(&ProbingHashTable::new()).unwrap(),
        "[]"
    );
}
