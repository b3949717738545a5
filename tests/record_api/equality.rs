//! Structural equality: scalars, nested records, function fields

use dataclass::{FieldValue, FuncValue, Patch, Record};

use crate::fixtures::{honk, Car, Person};

#[test]
fn equality_is_reflexive() {
    let person = Record::<Person>::new();
    assert!(person.equals(&person));

    let car = Record::<Car>::new();
    assert!(car.equals(&car));
}

#[test]
fn identically_constructed_instances_are_equal() {
    let patch = Patch::new().set("name", "Ham Sandwich").set("phone", 1_i64);
    let a = Record::<Person>::with(&patch);
    let b = Record::<Person>::with(&patch);
    assert!(a.equals(&b));
    assert_eq!(a, b);
}

#[test]
fn differing_scalar_field_breaks_equality() {
    let a = Record::<Person>::new();
    let b = Record::<Person>::with(&Patch::new().set("phone", 1_i64));
    assert!(!a.equals(&b));
    assert_ne!(a, b);
}

#[test]
fn distinct_but_structurally_equal_nested_records_are_equal() {
    // Each construction produces a fresh owner instance.
    let a = Record::<Car>::with(&Patch::new().set("owner", Record::<Person>::new()));
    let b = Record::<Car>::with(&Patch::new().set("owner", Record::<Person>::new()));
    assert!(a.equals(&b));
}

#[test]
fn differing_nested_record_breaks_equality() {
    let a = Record::<Car>::new();
    let b = Record::<Car>::with(&Patch::new().set(
        "owner",
        Record::<Person>::with(&Patch::new().set("name", "Shanks Mackle")),
    ));
    assert!(!a.equals(&b));
}

#[test]
fn function_fields_with_identical_source_are_equal() {
    // honk() builds a fresh closure each call; only the source text matches.
    let a = Record::<Car>::with(&Patch::new().set("honk", honk()));
    let b = Record::<Car>::with(&Patch::new().set("honk", honk()));
    assert!(a.equals(&b));
}

#[test]
fn function_fields_with_differing_source_are_unequal() {
    // Behaviorally identical to honk(), textually different.
    let quiet_honk = FuncValue::new("|| \"Honk\".to_owned()", |_| FieldValue::from("Honk"));
    let a = Record::<Car>::new();
    let b = Record::<Car>::with(&Patch::new().set("honk", quiet_honk));
    assert!(!a.equals(&b));
}

#[test]
fn record_field_against_plain_map_field_is_unequal() {
    // After a plain-map update the owner field holds a map, not a record;
    // a record on one side and a map on the other never compare equal.
    let car = Record::<Car>::new();
    let flattened = car.update(&Patch::new());
    assert!(flattened.get("owner").unwrap().as_map().is_some());
    assert!(!car.equals(&flattened));
}

#[test]
fn equality_is_deterministic_across_repeated_checks() {
    let a = Record::<Person>::with(&Patch::new().set("name", "Dane John"));
    let b = Record::<Person>::with(&Patch::new().set("name", "Dane John"));
    for _ in 0..100 {
        assert!(a.equals(&b));
    }
}
