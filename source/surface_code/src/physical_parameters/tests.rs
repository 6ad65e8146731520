// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::*;

#[test]
fn test_default_parameters_are_valid() {
    let params = PhysicalParameters::default();
    assert_eq!(params.validate(), Ok(()));
    assert!((params.physical_error_rate() - 1e-3).abs() <= f64::EPSILON);
    assert!((params.cycle_time_us() - 1.0).abs() <= f64::EPSILON);
    assert_eq!(params.qec_scheme(), &FOWLER_SUPERCONDUCTING);
}

#[test]
fn test_invalid_physical_error_rate() {
    for p in [0.0, 1.0, -1e-3, 1.5, f64::NAN] {
        let err = PhysicalParameters::new(p, 1.0).expect_err("rate should be rejected");
        assert!(matches!(err, Error::InvalidPhysicalErrorRate(_)), "{err:?}");
    }
}

#[test]
fn test_invalid_cycle_time() {
    for cycle_time in [0.0, -1.0, f64::INFINITY, f64::NAN] {
        let err = PhysicalParameters::new(1e-3, cycle_time).expect_err("cycle time rejected");
        assert!(matches!(err, Error::InvalidCycleTime(_)), "{err:?}");
    }
}

#[test]
fn test_error_budget_validation() {
    assert_eq!(validate_error_budget(0.01), Ok(0.01));
    assert_eq!(validate_error_budget(1.0), Ok(1.0));
    assert_eq!(validate_error_budget(2.5), Ok(2.5));
    assert_eq!(
        validate_error_budget(0.0),
        Err(Error::InvalidErrorBudget(0.0))
    );
    assert_eq!(
        validate_error_budget(-0.1),
        Err(Error::InvalidErrorBudget(-0.1))
    );
    assert!(validate_error_budget(f64::NAN).is_err());
    assert!(validate_error_budget(f64::INFINITY).is_err());
}

#[test]
fn test_deserialize_partial_parameters() {
    let params: PhysicalParameters =
        serde_json::from_str(r#"{"physicalErrorRate": 1e-4}"#).expect("valid json");
    assert!((params.physical_error_rate() - 1e-4).abs() <= f64::EPSILON);
    assert!((params.cycle_time_us() - 1.0).abs() <= f64::EPSILON);
    assert_eq!(params.qec_scheme(), &FOWLER_SUPERCONDUCTING);
}

#[test]
fn test_custom_qec_scheme() {
    let scheme = QecScheme::new(0.03, 0.01, 2);
    let params = PhysicalParameters::default().with_qec_scheme(scheme);
    let rate = params.logical_error_rate(3).expect("valid rate");
    assert!((rate - 0.03 * 0.01).abs() < 1e-15);
}
