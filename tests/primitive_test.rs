use scrutiny::{
    any, bool_literal, boolean, missing, null, num_literal, number, str_literal, string, Input,
};
use serde_json::{json, Value};
use stillwater::Validation;

#[test]
fn test_boolean_accepts_booleans() {
    let result = boolean().validate_value(&json!(true));
    match result {
        Validation::Success(flag) => assert!(flag),
        Validation::Failure(diagnostic) => panic!("unexpected failure: {}", diagnostic),
    }

    assert!(boolean().validate_value(&json!(false)).is_success());
}

#[test]
fn test_boolean_rejects_other_kinds() {
    for wrong in [json!(1), json!("true"), json!(null), json!([]), json!({})] {
        let result = boolean().validate_value(&wrong);
        assert!(result.is_failure());

        if let Validation::Failure(diagnostic) = result {
            assert!(diagnostic.path().is_root());
            assert_eq!(diagnostic.expectations().len(), 1);
            assert_eq!(diagnostic.expectations()[0].label(), "a boolean");
        }
    }
}

#[test]
fn test_number_accepts_numbers() {
    match number().validate_value(&json!(42)) {
        Validation::Success(n) => assert_eq!(n, 42.0),
        Validation::Failure(diagnostic) => panic!("unexpected failure: {}", diagnostic),
    }

    assert!(number().validate_value(&json!(-1.5)).is_success());
    assert!(number().validate_value(&json!("42")).is_failure());
}

#[test]
fn test_string_narrows_to_owned_string() {
    match string().validate_value(&json!("hello")) {
        Validation::Success(text) => assert_eq!(text, "hello"),
        Validation::Failure(diagnostic) => panic!("unexpected failure: {}", diagnostic),
    }

    assert!(string().validate_value(&json!(5)).is_failure());
}

#[test]
fn test_null_accepts_exactly_null() {
    assert!(null().validate_value(&json!(null)).is_success());
    assert!(null().validate_value(&json!(0)).is_failure());
    assert!(null().validate(Input::Absent).is_failure());
}

#[test]
fn test_missing_accepts_only_absence() {
    assert!(missing().validate(Input::Absent).is_success());
    assert!(missing().validate_value(&json!(null)).is_failure());
    assert!(missing().validate_value(&json!("present")).is_failure());
}

#[test]
fn test_any_passes_everything_through() {
    for value in [json!(null), json!(1), json!("x"), json!([1, 2]), json!({"a": 1})] {
        match any().validate_value(&value) {
            Validation::Success(passed) => assert_eq!(passed, value),
            Validation::Failure(diagnostic) => panic!("unexpected failure: {}", diagnostic),
        }
    }

    match any().validate(Input::Absent) {
        Validation::Success(passed) => assert_eq!(passed, Value::Null),
        Validation::Failure(diagnostic) => panic!("unexpected failure: {}", diagnostic),
    }
}

#[test]
fn test_str_literal_matches_value_and_kind() {
    let validator = str_literal("test");
    assert!(validator.validate_value(&json!("test")).is_success());
    assert!(validator.validate_value(&json!("other")).is_failure());

    if let Validation::Failure(diagnostic) = validator.validate_value(&json!("other")) {
        assert_eq!(diagnostic.expectations()[0].label(), "\"test\"");
    }
}

#[test]
fn test_num_literal_matches_value_and_kind() {
    let validator = num_literal(2.0);
    assert!(validator.validate_value(&json!(2)).is_success());
    assert!(validator.validate_value(&json!(2.5)).is_failure());
    assert!(validator.validate_value(&json!("2")).is_failure());

    if let Validation::Failure(diagnostic) = validator.validate_value(&json!(3)) {
        assert_eq!(diagnostic.expectations()[0].label(), "2");
    }
}

#[test]
fn test_bool_literal_distinguishes_true_from_false() {
    assert!(bool_literal(true).validate_value(&json!(true)).is_success());
    assert!(bool_literal(true).validate_value(&json!(false)).is_failure());
    assert!(bool_literal(false).validate_value(&json!(false)).is_success());
}

#[test]
fn test_validation_is_idempotent() {
    let validator = string();
    let value = json!(7);

    let first = validator.validate_value(&value);
    let second = validator.validate_value(&value);

    match (first, second) {
        (Validation::Failure(a), Validation::Failure(b)) => assert_eq!(a, b),
        _ => panic!("expected both runs to fail identically"),
    }
}
