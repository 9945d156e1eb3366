use chipkit_types::{ChipValue, DEFAULT_SIZE, DEFAULT_VARIANT};
use proptest::prelude::*;

fn non_empty() -> impl Strategy<Value = String> {
    ".{1,24}"
}

proptest! {
    #[test]
    fn non_empty_inputs_are_kept(label in non_empty(), variant in non_empty(), size in non_empty()) {
        let chip = ChipValue::new(label.clone(), variant.clone(), size.clone()).unwrap();
        prop_assert_eq!(chip.label(), label.as_str());
        prop_assert_eq!(chip.variant(), variant.as_str());
        prop_assert_eq!(chip.size(), size.as_str());
    }

    #[test]
    fn empty_tokens_fall_back_to_defaults(label in non_empty()) {
        let explicit = ChipValue::new(label.clone(), "", "").unwrap();
        let omitted = ChipValue::from_label(label).unwrap();
        prop_assert_eq!(explicit.variant(), DEFAULT_VARIANT);
        prop_assert_eq!(explicit.size(), DEFAULT_SIZE);
        prop_assert_eq!(explicit, omitted);
    }

    #[test]
    fn empty_label_always_fails(variant in ".{0,24}", size in ".{0,24}") {
        let err = ChipValue::new("", variant, size).unwrap_err();
        prop_assert_eq!(err.field(), "label");
        prop_assert!(err.to_string().contains("Incorrect value for label"));
    }

    #[test]
    fn construction_is_value_idempotent(label in non_empty(), variant in ".{0,24}", size in ".{0,24}") {
        let first = ChipValue::new(label.clone(), variant.clone(), size.clone()).unwrap();
        let second = ChipValue::new(label, variant, size).unwrap();
        prop_assert_eq!(first, second);
    }
}
