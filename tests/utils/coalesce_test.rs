use infodynamics::error::Error;
use infodynamics::utils::coalesce_series;
use ndarray::{Array1, array};
use proptest::prelude::*;

#[test]
fn sparse_alphabet_is_compacted() {
    let (series, states) = coalesce_series(&array![10, -3, 42, 10, -3]).unwrap();
    assert_eq!(series, array![1, 0, 2, 1, 0]);
    assert_eq!(states, 3);
}

#[test]
fn ensemble_shape_is_preserved() {
    let (series, states) = coalesce_series(&array![[5, 7], [7, 9]]).unwrap();
    assert_eq!(series, array![[0, 1], [1, 2]]);
    assert_eq!(states, 3);
}

#[test]
fn empty_series_is_rejected() {
    assert_eq!(coalesce_series(&Array1::<i32>::zeros(0)), Err(Error::EmptySeries));
}

proptest! {
    #[test]
    fn coalescing_preserves_order(xs in prop::collection::vec(-1000i32..1000, 1..100)) {
        let series = Array1::from(xs.clone());
        let (coalesced, states) = coalesce_series(&series).unwrap();
        prop_assert!(coalesced.iter().all(|&s| s >= 0 && (s as usize) < states));
        for i in 0..xs.len() {
            for j in 0..xs.len() {
                if xs[i] < xs[j] {
                    prop_assert!(coalesced[i] < coalesced[j]);
                }
            }
        }
    }
}
