// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use expect_test::expect;

use super::*;

#[test]
fn test_display() {
    let cost = PhysicalCost::new(0.008_406_855, 400_204, 7.534_722);
    expect!["Failure probability: 8.41e-3, Footprint: 400204 qubits, Duration: 7.53 hours"]
        .assert_eq(&cost.to_string());
}

#[test]
fn test_spacetime_volume() {
    let cost = PhysicalCost::new(0.01, 1000, 2.5);
    assert!((cost.spacetime_volume() - 2500.0).abs() <= f64::EPSILON);
}

#[test]
fn test_json_round_trip_field_names() {
    let cost = PhysicalCost::new(0.5, 12, 0.25);
    let json = serde_json::to_string(&cost).expect("serializable");
    expect![[r#"{"failureProb":0.5,"footprint":12,"durationHr":0.25}"#]].assert_eq(&json);
}
