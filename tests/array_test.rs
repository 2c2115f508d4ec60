use scrutiny::{array, boolean, number, string, validate};
use serde_json::json;
use stillwater::Validation;

#[test]
fn test_array_narrows_every_element_in_order() {
    let validator = array(number());

    match validator.validate_value(&json!([1, 2, 3, 4])) {
        Validation::Success(values) => assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]),
        Validation::Failure(diagnostic) => panic!("unexpected failure: {}", diagnostic),
    }
}

#[test]
fn test_array_accepts_empty_input() {
    match array(string()).validate_value(&json!([])) {
        Validation::Success(values) => assert!(values.is_empty()),
        Validation::Failure(diagnostic) => panic!("unexpected failure: {}", diagnostic),
    }
}

#[test]
fn test_non_array_input_fails_at_the_current_path() {
    let result = array(number()).validate_value(&json!(5));
    assert!(result.is_failure());

    if let Validation::Failure(diagnostic) = result {
        assert!(diagnostic.path().is_root());
        assert_eq!(diagnostic.expectations()[0].label(), "an array");
    }
}

#[test]
fn test_first_bad_element_is_reported_by_index() {
    let diagnostic = validate(&json!([1, 2, "three", 4]), &array(number())).unwrap_err();

    assert_eq!(diagnostic.path().to_string(), "2");
    assert_eq!(
        diagnostic.to_string(),
        "data.2 is invalid. We expected a number but found \"three\" instead."
    );
}

#[test]
fn test_nested_arrays_thread_both_indices() {
    let grid = array(array(boolean()));

    let diagnostic = validate(&json!([[true], [false, "x"]]), &grid).unwrap_err();
    assert_eq!(diagnostic.path().to_string(), "1.1");
}

#[test]
fn test_element_failures_stop_at_the_first() {
    // Both index 1 and index 2 are invalid; only index 1 is reported.
    let diagnostic = validate(&json!([1, "a", "b"]), &array(number())).unwrap_err();
    assert_eq!(diagnostic.path().to_string(), "1");
}
