// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use expect_test::expect;

use super::*;

#[test]
fn test_total_t_count() {
    let summary = AlgorithmSummary::new(10, 3, 5);
    assert_eq!(summary.total_t_count(), Ok(22));
}

#[test]
fn test_ccz_accounting_rounds_t_gates_up() {
    let even = AlgorithmSummary::new(10, 3, 5);
    assert_eq!(even.n_catalyzations(), 5);
    assert_eq!(even.n_ccz_states(), Ok(8));

    let odd = AlgorithmSummary::new(11, 3, 5);
    assert_eq!(odd.n_catalyzations(), 6);
    assert_eq!(odd.n_ccz_states(), Ok(9));
}

#[test]
fn test_sequential_composition() {
    let prepare = AlgorithmSummary::new(100, 0, 12);
    let select = AlgorithmSummary::new(4, 250, 40);
    let reflect = AlgorithmSummary::new(0, 39, 40);

    let iteration = [prepare, select, reflect]
        .into_iter()
        .sum::<Result<AlgorithmSummary, Error>>()
        .expect("counts fit");
    assert_eq!(iteration, AlgorithmSummary::new(104, 289, 40));

    let walk = iteration.repeated(1000).expect("counts fit");
    assert_eq!(walk, AlgorithmSummary::new(104_000, 289_000, 40));
}

#[test]
fn test_large_counts_fail_instead_of_wrapping() {
    let huge = AlgorithmSummary::new(1, u64::MAX / 4 + 1, 1);
    assert_eq!(
        huge.total_t_count(),
        Err(Error::CountOverflow("T-equivalent gate count"))
    );
    assert_eq!(
        huge.validate(),
        Err(Error::CountOverflow("T-equivalent gate count"))
    );
    assert_eq!(
        AlgorithmSummary::new(3, u64::MAX - 1, 1).n_ccz_states(),
        Err(Error::CountOverflow("CCZ state count"))
    );
    assert_eq!(
        huge.repeated(4),
        Err(Error::CountOverflow("repeated gate count"))
    );
    assert_eq!(
        [huge, huge]
            .into_iter()
            .sum::<Result<AlgorithmSummary, Error>>(),
        Ok(AlgorithmSummary::new(2, 1 << 63, 1))
    );
    assert_eq!(
        [huge; 4]
            .into_iter()
            .sum::<Result<AlgorithmSummary, Error>>(),
        Err(Error::CountOverflow("combined gate count"))
    );
    assert_eq!(
        AlgorithmSummary::new(u64::MAX, 0, 1).checked_add(&AlgorithmSummary::new(1, 0, 1)),
        Err(Error::CountOverflow("combined gate count"))
    );
}

#[test]
fn test_large_counts_rejected_by_estimators() {
    let params = crate::PhysicalParameters::default();
    let huge = AlgorithmSummary::new(1, u64::MAX / 4 + 1, 1);
    assert_eq!(
        crate::estimate_costs_from_error_budget(&huge, 0.01, &params),
        Err(Error::CountOverflow("T-equivalent gate count"))
    );
}

#[test]
fn test_validate() {
    assert_eq!(
        AlgorithmSummary::new(1, 0, 0).validate(),
        Err(Error::NoAlgorithmQubits)
    );
    assert_eq!(
        AlgorithmSummary::new(0, 0, 10).validate(),
        Err(Error::NoMagicStates)
    );
    assert_eq!(AlgorithmSummary::new(0, 1, 10).validate(), Ok(()));
}

#[test]
fn test_display() {
    let summary = AlgorithmSummary::new(100_000_000, 100_000_000, 100);
    expect!["T gates: 100000000, Toffoli gates: 100000000, Algorithm qubits: 100"]
        .assert_eq(&summary.to_string());
}

#[test]
fn test_deserialize_with_missing_counts() {
    let summary: AlgorithmSummary =
        serde_json::from_str(r#"{"toffoliGates": 7, "nAlgoQubits": 3}"#).expect("valid json");
    assert_eq!(summary, AlgorithmSummary::new(0, 7, 3));
}
