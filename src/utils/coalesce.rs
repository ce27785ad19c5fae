// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::{Error, Result};
use ndarray::{Array, ArrayBase, Data, Dimension};

/// Renumbers the distinct symbols of `series` onto `0..m`, preserving order.
///
/// Returns the coalesced series (same shape as the input) together with `m`,
/// the number of distinct symbols. Sparse alphabets such as `{-3, 10, 42}`
/// become `{0, 1, 2}`, which keeps the histograms of the measures small.
pub fn coalesce_series<S, D>(series: &ArrayBase<S, D>) -> Result<(Array<i32, D>, usize)>
where
    S: Data<Elem = i32>,
    D: Dimension,
{
    if series.is_empty() {
        return Err(Error::EmptySeries);
    }
    let mut states: Vec<i32> = series.iter().copied().collect();
    states.sort_unstable();
    states.dedup();

    // every value is present in `states`, so the search always hits
    let coalesced = series.mapv(|x| states.partition_point(|&s| s < x) as i32);
    Ok((coalesced, states.len()))
}
