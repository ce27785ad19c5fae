// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use infodynamics::error::Error;
use infodynamics::estimators::entropy::Entropy;
use infodynamics::estimators::traits::{GlobalValue, LocalValues};
use infodynamics::estimators::windowed::EntropyRate;
use ndarray::array;
use rstest::rstest;

#[rstest]
#[case(vec![1, 1, 0, 0, 1, 0, 0, 1], 0.000000)]
#[case(vec![1, 0, 0, 0, 0, 0, 0, 0, 0], 0.000000)]
#[case(vec![0, 0, 1, 1, 1, 1, 0, 0, 0], 0.679270)]
#[case(vec![1, 0, 0, 0, 0, 0, 0, 1, 1], 0.515663)]
#[case(vec![0, 0, 0, 0, 0, 1, 1, 0, 0], 0.463587)]
#[case(vec![1, 1, 1, 0, 0, 0, 0, 1, 1], 0.679270)]
fn entropy_rate_base_2(#[case] series: Vec<i32>, #[case] expected: f64) {
    let er = EntropyRate::new(series, 2, None).unwrap();
    assert_abs_diff_eq!(er.global_value(), expected, epsilon = 1e-6);
}

#[test]
fn local_entropy_rate_is_positive() {
    let er = Entropy::new_rate(vec![0, 0, 1, 1, 1, 1, 0, 0, 0], 2, None).unwrap();
    let expected = array![[1.0, 0.0, 0.5849625, 0.5849625, 1.5849625, 0.0, 1.0]];
    let local = er.local_values();
    assert_eq!(local.shape(), expected.shape());
    for (value, want) in local.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*value, *want, epsilon = 1e-7);
        assert!(*value >= 0.0);
    }
}

#[test]
fn entropy_rate_ensembles() {
    let xs = array![[1, 1, 0, 0, 1, 0, 0, 1], [0, 0, 0, 1, 0, 0, 0, 1]];
    let er = EntropyRate::new(xs, 2, None).unwrap();
    assert_abs_diff_eq!(er.global_value(), 0.459148, epsilon = 1e-6);

    let xs = array![
        [1, 0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 1, 1, 1, 1, 0, 0, 0],
        [1, 0, 0, 0, 0, 0, 0, 1, 1],
        [1, 0, 0, 0, 0, 0, 0, 1, 1],
        [0, 0, 0, 0, 0, 1, 1, 0, 0],
        [0, 0, 0, 0, 1, 1, 0, 0, 0],
        [1, 1, 1, 0, 0, 0, 0, 1, 1],
        [0, 0, 0, 1, 1, 1, 1, 0, 0],
        [0, 0, 0, 0, 0, 0, 1, 1, 0]
    ];
    let er = EntropyRate::new(xs, 2, None).unwrap();
    assert_abs_diff_eq!(er.global_value(), 0.610249, epsilon = 1e-6);

    let xs = array![[0, 0, 1, 1, 1, 1, 0, 0, 0], [1, 0, 0, 1, 0, 0, 1, 0, 0]];
    let er = EntropyRate::new(xs, 2, None).unwrap();
    assert_abs_diff_eq!(er.global_value(), 0.6253491072973907, epsilon = 1e-10);
    assert_eq!(er.local_values().shape(), &[2, 7]);
}

#[test]
fn entropy_rate_errors() {
    assert_eq!(
        EntropyRate::new(vec![1], 1, None).unwrap_err(),
        Error::HistoryTooLong { k: 1, len: 1 }
    );
    let cube = ndarray::ArrayD::<i32>::zeros(ndarray::IxDyn(&[2, 2, 4]));
    assert_eq!(
        EntropyRate::new(cube, 1, None).unwrap_err(),
        Error::DimensionError { got: 3, max: 2 }
    );
    let err = EntropyRate::new(vec![0, 3, 1, 0], 1, Some(3)).unwrap_err();
    assert!(matches!(err, Error::Encoding { func: "entropy_rate", .. }));
}
