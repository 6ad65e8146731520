// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::*;

#[test]
fn test_routing_overhead_rounds_up() {
    let block = SimpleDataBlock::new(25).expect("valid distance");
    assert_eq!(block.n_logical_qubits(100), 150);
    assert_eq!(block.n_logical_qubits(3), 5);

    let dense = SimpleDataBlock::with_routing_overhead(25, 0.0).expect("valid block");
    assert_eq!(dense.n_logical_qubits(3), 3);
}

#[test]
fn test_footprint() {
    let params = PhysicalParameters::default();
    let block = SimpleDataBlock::new(29).expect("valid distance");
    assert_eq!(block.footprint(100, &params), 150 * 1682);
}

#[test]
fn test_footprint_strictly_increasing_in_distance() {
    let params = PhysicalParameters::default();
    let footprints = (1..=31)
        .step_by(2)
        .map(|d| {
            SimpleDataBlock::new(d)
                .expect("valid distance")
                .footprint(100, &params)
        })
        .collect::<Vec<_>>();
    for pair in footprints.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn test_stats_and_data_error() {
    let params = PhysicalParameters::default();
    let block = SimpleDataBlock::new(29).expect("valid distance");
    let stats = block.stats(100, &params).expect("valid stats");
    assert_eq!(stats.footprint, 252_300);
    assert!((stats.per_cycle_error - 1.5e-14).abs() < 1e-24);

    let error = block
        .data_error(100, 27_125_000_000, &params)
        .expect("valid error");
    assert!((error - 4.068_75e-4).abs() < 1e-12);
}

#[test]
fn test_invalid_blocks() {
    assert_eq!(
        SimpleDataBlock::new(10),
        Err(Error::InvalidCodeDistance(10))
    );
    assert!(matches!(
        SimpleDataBlock::with_routing_overhead(11, -0.5),
        Err(Error::InvalidRoutingOverhead(_))
    ));
    assert!(matches!(
        SimpleDataBlock::with_routing_overhead(11, f64::NAN),
        Err(Error::InvalidRoutingOverhead(_))
    ));
}
