// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Binning of continuously-valued time series.
//!
//! All measures of this crate are defined on symbolic series, so continuous
//! observations have to be forced into discrete states first. Three
//! partitionings are supported:
//!
//! 1. a number of uniform bins spanning `[min, max]` ([`Binning::Count`]),
//! 2. uniform bins of a fixed width starting at `min` ([`Binning::Step`]),
//! 3. explicit interior thresholds ([`Binning::Bounds`]).
//!
//! ```rust
//! use infodynamics::utils::binning::{bin_series, BinSpec, Binning};
//! use ndarray::array;
//!
//! let xs = array![0.5, 2.4, 7.9, 3.1, 9.0];
//! let binned = bin_series(&xs, &Binning::Bounds(vec![2.0, 7.5])).unwrap();
//! assert_eq!(binned.series, array![0, 1, 2, 1, 2]);
//! assert_eq!(binned.bins, 3);
//! assert_eq!(binned.spec, BinSpec::Bounds(vec![2.0, 7.5]));
//! ```

use crate::error::{Error, Result};
use ndarray::{Array, ArrayBase, Data, Dimension};

/// How a continuous series is partitioned.
#[derive(Debug, Clone, PartialEq)]
pub enum Binning {
    /// Number of equal-width bins over the range of the series.
    Count(usize),
    /// Width of each bin, starting at the minimum of the series.
    Step(f64),
    /// Ascending interior boundaries; `len + 1` bins.
    Bounds(Vec<f64>),
}

impl Binning {
    /// Resolves optional keyword-style arguments into a partitioning.
    ///
    /// Exactly one of the three must be given, otherwise
    /// `AmbiguousBinningSpec` is returned.
    pub fn from_options(
        bins: Option<usize>,
        step: Option<f64>,
        bounds: Option<Vec<f64>>,
    ) -> Result<Self> {
        match (bins, step, bounds) {
            (Some(b), None, None) => Ok(Binning::Count(b)),
            (None, Some(s), None) => Ok(Binning::Step(s)),
            (None, None, Some(bs)) => Ok(Binning::Bounds(bs)),
            _ => Err(Error::AmbiguousBinningSpec),
        }
    }
}

/// Description of the bins that were used.
#[derive(Debug, Clone, PartialEq)]
pub enum BinSpec {
    /// Width shared by every bin.
    Width(f64),
    /// Interior boundaries between bins.
    Bounds(Vec<f64>),
}

/// Result of [`bin_series`]: the symbols, the number of bins and the bins used.
#[derive(Debug, Clone, PartialEq)]
pub struct Binned<D: Dimension> {
    pub series: Array<i32, D>,
    pub bins: usize,
    pub spec: BinSpec,
}

/// Range of a series as `(max - min, min, max)`.
pub fn series_range<S, D>(series: &ArrayBase<S, D>) -> Result<(f64, f64, f64)>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if series.is_empty() {
        return Err(Error::EmptySeries);
    }
    let (min, max) = series
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    Ok((max - min, min, max))
}

/// Bins a continuously-valued series, preserving its shape.
pub fn bin_series<S, D>(series: &ArrayBase<S, D>, binning: &Binning) -> Result<Binned<D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let (range, min, _) = series_range(series)?;
    match binning {
        Binning::Count(b) => {
            let b = *b;
            if b == 0 || b > i32::MAX as usize {
                return Err(Error::InvalidBinning("number of bins must be in 1..=i32::MAX"));
            }
            let width = range / b as f64;
            let binned = series.mapv(|x| uniform_bin(x, min, width, b));
            Ok(Binned {
                series: binned,
                bins: b,
                spec: BinSpec::Width(width),
            })
        }
        Binning::Step(step) => {
            let step = *step;
            if !(step.is_finite() && step > 0.0) {
                return Err(Error::InvalidBinning("step size must be positive and finite"));
            }
            let needed = (range / step).ceil().max(1.0);
            if needed > i32::MAX as f64 {
                return Err(Error::InvalidBinning("step size yields too many bins"));
            }
            let b = needed as usize;
            let binned = series.mapv(|x| uniform_bin(x, min, step, b));
            Ok(Binned {
                series: binned,
                bins: b,
                spec: BinSpec::Width(step),
            })
        }
        Binning::Bounds(bounds) => {
            if bounds.windows(2).any(|w| !(w[0] <= w[1])) {
                return Err(Error::InvalidBinning("bounds must be in ascending order"));
            }
            if bounds.len() >= i32::MAX as usize {
                return Err(Error::InvalidBinning("too many bounds"));
            }
            let binned = series.mapv(|x| bounds.partition_point(|&bound| bound <= x) as i32);
            Ok(Binned {
                series: binned,
                bins: bounds.len() + 1,
                spec: BinSpec::Bounds(bounds.clone()),
            })
        }
    }
}

// The last bin is closed so that `max` lands in bin `b - 1`.
fn uniform_bin(x: f64, min: f64, width: f64, b: usize) -> i32 {
    if width <= 0.0 {
        return 0;
    }
    let idx = ((x - min) / width).floor();
    if idx <= 0.0 {
        0
    } else {
        (idx as usize).min(b - 1) as i32
    }
}
