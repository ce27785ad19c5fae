// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::test_helpers::{
    assert_average_is_mean, generate_symbol_ensemble, generate_symbol_series, lagged_copy,
};
use approx::assert_abs_diff_eq;
use infodynamics::estimators::traits::{GlobalValue, LocalValues};
use infodynamics::estimators::windowed::{
    ActiveInformation, BlockEntropy, DiscreteTransferEntropy, EntropyRate,
};
use ndarray::Array2;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(1, 50, 2, 1, 1)]
#[case(1, 200, 3, 2, 7)]
#[case(4, 30, 2, 3, 42)]
#[case(10, 20, 4, 2, 1234)]
fn averages_are_means_of_locals(
    #[case] members: usize,
    #[case] len: usize,
    #[case] base: i32,
    #[case] k: usize,
    #[case] seed: u64,
) {
    let xs = generate_symbol_ensemble(members, len, base, seed);
    let ys = generate_symbol_ensemble(members, len, base, seed + 1);
    let ws = generate_symbol_ensemble(members, len, base, seed + 2);

    let ai = ActiveInformation::new(xs.clone(), k, None).unwrap();
    assert_average_is_mean(ai.global_value(), &ai.local_values(), "active_info");
    assert_eq!(ai.local_values().shape(), &[members, len - k]);

    let be = BlockEntropy::new(xs.clone(), k, None).unwrap();
    assert_average_is_mean(be.global_value(), &be.local_values(), "block_entropy");
    assert_eq!(be.local_values().shape(), &[members, len - k + 1]);

    let er = EntropyRate::new(xs.clone(), k, None).unwrap();
    assert_average_is_mean(er.global_value(), &er.local_values(), "entropy_rate");

    let te = DiscreteTransferEntropy::new(ys.clone(), xs.clone(), k, None, None).unwrap();
    assert_average_is_mean(te.global_value(), &te.local_values(), "transfer_entropy");

    let cte = DiscreteTransferEntropy::new(ys, xs, k, Some(ws.into()), None).unwrap();
    assert_average_is_mean(cte.global_value(), &cte.local_values(), "conditional_transfer_entropy");
}

#[test]
fn storage_and_rate_split_the_next_symbol_entropy() {
    // A(k) + H_rate(k) = H(next symbol)
    let xs = generate_symbol_series(500, 3, 99);
    let k = 2;
    let ai = ActiveInformation::new(xs.clone(), k, None).unwrap();
    let er = EntropyRate::new(xs.clone(), k, None).unwrap();
    let next = xs.slice(ndarray::s![k..]).to_owned();
    let h = BlockEntropy::new(next, 1, Some(3)).unwrap();
    assert_abs_diff_eq!(ai.global_value() + er.global_value(), h.global_value(), epsilon = 1e-10);
}

#[test]
fn lagged_copy_transfers_the_source_entropy() {
    let source = generate_symbol_series(2000, 2, 5);
    let target = lagged_copy(&source);
    let te = DiscreteTransferEntropy::new(source.clone(), target.clone(), 1, None, None).unwrap();
    // the target is fully determined by the source, which is close to a fair coin
    assert!(te.global_value() > 0.9);
    let back = DiscreteTransferEntropy::new(target, source, 1, None, None).unwrap();
    assert!(back.global_value() < 0.05);
}

#[test]
fn ensemble_is_not_the_mean_of_members() {
    let xs = Array2::from_shape_vec(
        (2, 9),
        vec![0, 0, 1, 1, 1, 1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0],
    )
    .unwrap();
    let pooled = ActiveInformation::new(xs.clone(), 2, None).unwrap().global_value();
    let separate: f64 = xs
        .outer_iter()
        .map(|row| ActiveInformation::new(row.to_owned(), 2, None).unwrap().global_value())
        .sum::<f64>()
        / 2.0;
    assert!((pooled - separate).abs() > 1e-3);
}

proptest! {
    #[test]
    fn windowed_measures_are_finite_and_non_negative(
        xs in prop::collection::vec(0i32..3, 4..60),
        k in 1usize..3,
    ) {
        prop_assume!(xs.len() > k);
        let ai = ActiveInformation::new(xs.clone(), k, None).unwrap().global_value();
        let er = EntropyRate::new(xs.clone(), k, None).unwrap().global_value();
        let be = BlockEntropy::new(xs.clone(), k, None).unwrap().global_value();
        prop_assert!(ai.is_finite() && ai > -1e-12);
        prop_assert!(er.is_finite() && er > -1e-12);
        prop_assert!(be.is_finite() && be > -1e-12);
    }
}
