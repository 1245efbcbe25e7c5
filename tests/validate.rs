use proptest::prelude::*;
use serde_json::{json, Map, Value};
use supplement_check::handler::validate_input;

fn body(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn accepts_two_names() {
    let input = body(json!({"supplement_1": "Vitamin C", "supplement_2": "Iron"}));
    let (is_valid, a, b) = validate_input(&input);
    assert!(is_valid);
    assert_eq!(a, "Vitamin C");
    assert_eq!(b, "Iron");
}

#[test]
fn trims_surrounding_whitespace() {
    let input = body(json!({"supplement_1": "  Zinc\t", "supplement_2": "\nCopper "}));
    assert_eq!(
        validate_input(&input),
        (true, "Zinc".to_string(), "Copper".to_string())
    );
}

#[test]
fn rejects_missing_field() {
    let input = body(json!({"supplement_1": "Vitamin C"}));
    assert_eq!(validate_input(&input), (false, String::new(), String::new()));
}

#[test]
fn rejects_empty_and_blank_values() {
    for input in [
        json!({"supplement_1": "Vitamin C", "supplement_2": ""}),
        json!({"supplement_1": "   ", "supplement_2": "Iron"}),
        json!({}),
    ] {
        let (is_valid, a, b) = validate_input(&body(input));
        assert!(!is_valid);
        assert!(a.is_empty() && b.is_empty());
    }
}

#[test]
fn non_string_values_count_as_missing() {
    let input = body(json!({"supplement_1": 42, "supplement_2": "Iron"}));
    assert!(!validate_input(&input).0);
}

proptest! {
    #[test]
    fn validation_is_pure_and_trims(a in "[ \t]{0,3}[A-Za-z0-9 ]{0,12}[ \t]{0,3}", b in "[ \t]{0,3}[A-Za-z0-9 ]{0,12}[ \t]{0,3}") {
        let input = body(json!({"supplement_1": a.clone(), "supplement_2": b.clone()}));
        let first = validate_input(&input);
        let second = validate_input(&input);
        prop_assert_eq!(&first, &second);

        let expected_valid = !a.trim().is_empty() && !b.trim().is_empty();
        prop_assert_eq!(first.0, expected_valid);
        if expected_valid {
            prop_assert_eq!(first.1.as_str(), a.trim());
            prop_assert_eq!(first.2.as_str(), b.trim());
        }
    }
}
