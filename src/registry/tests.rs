//! Unit tests for the identifier registry.

use crate::Position;

use super::registry::{IdentifierRegistry, IdentifierSummary};

fn at(row: usize, column: usize) -> Position {
    Position {
        offset: 0,
        row,
        column,
    }
}

#[test]
fn test_add_new_identifier() {
    let mut registry = IdentifierRegistry::new();
    assert!(registry.is_empty());

    registry.add("total", at(3, 5));

    let entry = registry.lookup("total").unwrap();
    assert_eq!(entry.sequence, 1);
    assert_eq!(entry.name, "total");
    assert_eq!(entry.first_occurrence, at(3, 5));
    assert_eq!(entry.occurrences, vec![at(3, 5)]);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_add_existing_identifier_appends() {
    let mut registry = IdentifierRegistry::new();
    registry.add("x", at(1, 1));
    registry.add("y", at(1, 3));
    registry.add("x", at(2, 7));

    let x = registry.lookup("x").unwrap();
    assert_eq!(x.sequence, 1);
    assert_eq!(x.first_occurrence, at(1, 1));
    assert_eq!(x.occurrence_count(), 2);
    assert_eq!(x.occurrences[1], at(2, 7));
    assert_eq!(registry.lookup("y").unwrap().sequence, 2);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_sequences_are_dense_in_first_encounter_order() {
    let mut registry = IdentifierRegistry::new();
    for (i, name) in ["zeta", "alpha", "zeta", "mid", "alpha", "beta"].iter().enumerate() {
        registry.add(name, at(1, i + 1));
    }

    let mut sequences: Vec<usize> = registry.iter().map(|entry| entry.sequence).collect();
    sequences.sort();
    assert_eq!(sequences, vec![1, 2, 3, 4]);

    assert_eq!(registry.lookup("zeta").unwrap().sequence, 1);
    assert_eq!(registry.lookup("alpha").unwrap().sequence, 2);
    assert_eq!(registry.lookup("mid").unwrap().sequence, 3);
    assert_eq!(registry.lookup("beta").unwrap().sequence, 4);
}

#[test]
fn test_lookup_missing() {
    let mut registry = IdentifierRegistry::new();
    registry.add("present", at(1, 1));

    assert!(registry.lookup("absent").is_none());
    assert!(registry.lookup("Present").is_none());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_snapshot_ordered_by_name() {
    let mut registry = IdentifierRegistry::new();
    registry.add("b", at(1, 1));
    registry.add("a", at(1, 3));
    registry.add("B", at(2, 1));
    registry.add("b", at(2, 3));

    assert_eq!(
        registry.snapshot(),
        vec![
            IdentifierSummary {
                sequence: 3,
                name: String::from("B"),
                first_occurrence: (2, 1),
                occurrence_count: 1,
            },
            IdentifierSummary {
                sequence: 2,
                name: String::from("a"),
                first_occurrence: (1, 3),
                occurrence_count: 1,
            },
            IdentifierSummary {
                sequence: 1,
                name: String::from("b"),
                first_occurrence: (1, 1),
                occurrence_count: 2,
            },
        ]
    );
}

#[test]
fn test_snapshot_of_empty_registry() {
    assert!(IdentifierRegistry::new().snapshot().is_empty());
}
