//! Property-based coverage of the record algebra

use dataclass::{FieldValue, Patch, Record};
use proptest::prelude::*;

use crate::fixtures::Person;

proptest! {
    #[test]
    fn override_precedence_holds_for_any_name(name in ".{0,40}") {
        let person = Record::<Person>::with(&Patch::new().set("name", name.as_str()));
        let plain = person.to_plain();
        prop_assert_eq!(
            plain.get("name"),
            Some(&FieldValue::from(name.as_str()))
        );
        // Untouched fields keep their defaults.
        prop_assert_eq!(
            person.get("phone").and_then(|v| v.as_int()),
            Some(5_555_555_555)
        );
    }

    #[test]
    fn update_never_mutates_for_any_phone(phone in any::<i64>()) {
        let initial = Record::<Person>::new();
        let before = initial.to_plain();

        let updated = initial.update(&Patch::new().set("phone", phone));

        prop_assert_eq!(initial.to_plain(), before);
        prop_assert_eq!(updated.get("phone").and_then(|v| v.as_int()), Some(phone));
    }

    #[test]
    fn identically_patched_instances_are_equal(
        name in ".{0,40}",
        phone in any::<i64>(),
        is_person in any::<bool>(),
    ) {
        let patch = Patch::new()
            .set("name", name.as_str())
            .set("phone", phone)
            .set("is_person", is_person);

        let a = Record::<Person>::with(&patch);
        let b = Record::<Person>::with(&patch);

        prop_assert!(a.equals(&a));
        prop_assert!(a.equals(&b));
    }
}
