//! Shannon measures between two symbol series, without histories.
//!
//! Ensembles are pooled: every `(x_i, y_i)` pair of every member is one
//! observation. Unlike the windowed measures these take the logarithmic
//! base explicitly, independent of the alphabets.

pub mod conditional_entropy;
pub mod mutual_info;
pub mod relative_entropy;

pub use conditional_entropy::SeriesConditionalEntropy;
pub use mutual_info::SeriesMutualInformation;
pub use relative_entropy::SeriesRelativeEntropy;

use crate::error::{Error, Result};
use crate::estimators::data::Ensemble;
use crate::estimators::utils::history::symbols_at;
use ndarray::Array2;

/// `log_base(x)`, `NaN` for a non-positive base.
#[inline]
pub(crate) fn log_in(x: f64, log_base: f64) -> f64 {
    if !(log_base > 0.0) {
        return f64::NAN;
    }
    x.log2() / log_base.log2()
}

/// Every symbol of `series` as a histogram event of an alphabet of `base`.
pub(crate) fn events(series: &Ensemble, base: u32, func: &'static str) -> Result<Array2<usize>> {
    symbols_at(series, 0, series.timesteps(), base).map_err(|e| e.in_measure(func))
}

/// Joint support `bx * by`.
pub(crate) fn joint_support(bx: u32, by: u32, func: &'static str) -> Result<usize> {
    (bx as usize).checked_mul(by as usize).ok_or(Error::Memory {
        func,
        events: bx as u128 * by as u128,
    })
}
