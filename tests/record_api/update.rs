//! Updates: patch form, function form, non-mutation

use dataclass::{Patch, Record};

use crate::fixtures::{Car, Person};

#[test]
fn patch_update_merges_over_prior_state() {
    let initial = Record::<Person>::with(&Patch::new().set("name", "Dane John"));
    let updated = initial.update(&Patch::new().set("phone", 3_333_333_333_i64));

    assert_eq!(updated.get("name").and_then(|v| v.as_str()), Some("Dane John"));
    assert_eq!(updated.get("phone").and_then(|v| v.as_int()), Some(3_333_333_333));
    assert_eq!(updated.get("is_person").and_then(|v| v.as_bool()), Some(true));
}

#[test]
fn update_never_mutates_the_original() {
    let initial = Record::<Person>::with(&Patch::new().set("name", "Dane John"));
    let before = initial.to_plain();

    let _updated = initial.update(&Patch::new().set("phone", 3_333_333_333_i64));

    assert_eq!(initial.to_plain(), before);
    assert_eq!(initial.get("phone").and_then(|v| v.as_int()), Some(5_555_555_555));
}

#[test]
fn updated_instance_differs_from_original() {
    let initial = Record::<Person>::new();
    let updated = initial.update(&Patch::new().set("phone", 3_333_333_333_i64));
    assert!(!initial.equals(&updated));
}

#[test]
fn nested_update_through_a_record_valued_patch() {
    let car = Record::<Car>::new();
    let owner = Record::<Person>::with(&Patch::new().set("name", "Shanks Mackle"));
    let updated = car.update(&Patch::new().set("owner", owner));

    let json = serde_json::to_string(&updated).unwrap();
    assert_eq!(
        json,
        r#"{"make":"Shimwagon","owner":{"name":"Shanks Mackle","phone":5555555555,"is_person":true},"honk":"|| \"Honk\""}"#
    );

    // Original car keeps its default owner.
    assert_eq!(
        Record::<Car>::new()
            .to_plain()
            .get("owner")
            .and_then(|v| v.as_map())
            .and_then(|owner| owner.get("name"))
            .and_then(|v| v.as_str()),
        Some("Apple Bacon")
    );
}

#[test]
fn function_form_transforms_the_plain_state() {
    let initial = Record::<Person>::new();
    let updated = initial.update_with(|mut plain| {
        plain.insert("name", "Shanks Mackle");
        plain.insert("phone", 3_333_333_333_i64);
        plain
    });

    assert_eq!(updated.get("name").and_then(|v| v.as_str()), Some("Shanks Mackle"));
    assert_eq!(updated.get("phone").and_then(|v| v.as_int()), Some(3_333_333_333));
    assert_eq!(initial.get("name").and_then(|v| v.as_str()), Some("Apple Bacon"));
}

#[test]
fn empty_patch_update_preserves_state() {
    let initial = Record::<Person>::with(&Patch::new().set("name", "Dane John"));
    let updated = initial.update(&Patch::new());
    assert!(initial.equals(&updated));
}

#[test]
fn updates_chain() {
    let person = Record::<Person>::new()
        .update(&Patch::new().set("name", "Dane John"))
        .update(&Patch::new().set("phone", 3_333_333_333_i64));

    assert_eq!(person.get("name").and_then(|v| v.as_str()), Some("Dane John"));
    assert_eq!(person.get("phone").and_then(|v| v.as_int()), Some(3_333_333_333));
}
