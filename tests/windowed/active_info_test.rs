// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use infodynamics::error::Error;
use infodynamics::estimators::mutual_information::MutualInformation;
use infodynamics::estimators::traits::{GlobalValue, LocalValues};
use infodynamics::estimators::windowed::ActiveInformation;
use ndarray::array;
use rstest::rstest;

#[rstest]
#[case(vec![1, 1, 0, 0, 1, 0, 0, 1], 0.918296)]
#[case(vec![1, 0, 0, 0, 0, 0, 0, 0, 0], 0.000000)]
#[case(vec![0, 0, 1, 1, 1, 1, 0, 0, 0], 0.305958)]
#[case(vec![1, 0, 0, 0, 0, 0, 0, 1, 1], 0.347458)]
#[case(vec![0, 0, 0, 0, 0, 1, 1, 0, 0], 0.399533)]
#[case(vec![0, 0, 0, 1, 1, 1, 1, 0, 0], 0.305958)]
fn active_info_base_2(#[case] series: Vec<i32>, #[case] expected: f64) {
    let ai = ActiveInformation::new(series, 2, None).unwrap();
    assert_eq!(ai.base(), 2);
    assert_abs_diff_eq!(ai.global_value(), expected, epsilon = 1e-6);
    assert_abs_diff_eq!(ai.global_from_local(), expected, epsilon = 1e-6);
}

#[rstest]
#[case(vec![3, 3, 3, 2, 1, 0, 0, 0, 1])]
#[case(vec![2, 2, 3, 3, 3, 3, 2, 1, 0])]
fn active_info_base_4_is_reported_in_bits(#[case] series: Vec<i32>) {
    let ai = ActiveInformation::new(series, 2, None).unwrap();
    assert_eq!(ai.base(), 4);
    assert_abs_diff_eq!(ai.global_value(), 1.270942, epsilon = 1e-6);
}

#[test]
fn active_info_ensembles_share_histograms() {
    let xs = array![[1, 1, 0, 0, 1, 0, 0, 1], [0, 0, 0, 1, 0, 0, 0, 1]];
    let ai = ActiveInformation::new(xs, 2, None).unwrap();
    assert_abs_diff_eq!(ai.global_value(), 0.459148, epsilon = 1e-6);

    let xs = vec![
        vec![0, 0, 1, 1, 1, 1, 0, 0, 0],
        vec![1, 0, 0, 1, 0, 0, 1, 0, 0],
    ];
    let ai = ActiveInformation::new(xs, 2, None).unwrap();
    assert_abs_diff_eq!(ai.global_value(), 0.35987902873686073, epsilon = 1e-10);

    let xs = array![
        [3, 3, 3, 2, 1, 0, 0, 0, 1],
        [2, 2, 3, 3, 3, 3, 2, 1, 0],
        [0, 0, 0, 0, 1, 1, 0, 0, 0],
        [1, 1, 0, 0, 0, 1, 1, 2, 2]
    ];
    let ai = ActiveInformation::new(xs, 2, None).unwrap();
    assert_abs_diff_eq!(ai.global_value(), 1.324291, epsilon = 1e-6);
    assert_eq!(ai.local_values().shape(), &[4, 7]);
}

#[test]
fn local_active_info_values() {
    let ai = MutualInformation::new_active_info(vec![0, 0, 1, 1, 1, 1, 0, 0, 0], 2, None).unwrap();
    let expected = array![[
        -0.19264508,
        0.80735492,
        0.22239242,
        0.22239242,
        -0.36257008,
        1.22239242,
        0.22239242
    ]];
    let local = ai.local_values();
    assert_eq!(local.shape(), expected.shape());
    for (value, want) in local.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*value, *want, epsilon = 1e-7);
    }
}

#[test]
fn active_info_errors() {
    assert_eq!(ActiveInformation::new(Vec::<i32>::new(), 1, None).unwrap_err(), Error::EmptySeries);
    assert_eq!(ActiveInformation::new(vec![1, 2], 0, None).unwrap_err(), Error::ZeroHistory);
    assert_eq!(
        ActiveInformation::new(vec![1, 2], 2, None).unwrap_err(),
        Error::HistoryTooLong { k: 2, len: 2 }
    );
    assert_eq!(
        ActiveInformation::new(vec![0, 1, 0], 1, Some(0)).unwrap_err(),
        Error::InvalidBase(0)
    );

    let err = ActiveInformation::new(vec![-1, 0, 0], 1, None).unwrap_err();
    assert_eq!(err.code(), 16);
    assert!(!err.is_precondition());
    match err {
        Error::Encoding { func, source } => {
            assert_eq!(func, "active_info");
            assert_eq!(*source, Error::BaseOverflow { symbol: -1, base: 2 });
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn explicit_base_is_validated_lazily() {
    // base 2 is accepted up front; the symbol 2 only fails when it is encoded
    let err = ActiveInformation::new(vec![0, 1, 2, 1], 1, Some(2)).unwrap_err();
    assert!(matches!(err, Error::Encoding { func: "active_info", .. }));

    let ai = ActiveInformation::new(vec![0, 1, 0, 1], 1, Some(5)).unwrap();
    assert_eq!(ai.base(), 5);
    assert_abs_diff_eq!(ai.global_value(), 0.918296, epsilon = 1e-6);
}
