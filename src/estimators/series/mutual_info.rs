// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{events, joint_support, log_in};
use crate::dist::Dist;
use crate::error::Result;
use crate::estimators::data::{Ensemble, SymbolData, resolve_base};
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::estimators::utils::history::{accumulate, combine};
use crate::shannon;
use log::debug;
use ndarray::Array2;

const FUNC: &str = "mutual_info";

/// Mutual information between two equally shaped symbol series.
///
/// The joint event of a pair is `x * by + y`, matching the row-major layout
/// [`shannon::mutual_info`] expects.
///
/// ```rust
/// use infodynamics::estimators::series::SeriesMutualInformation;
/// use infodynamics::estimators::traits::GlobalValue;
///
/// let xs = vec![0, 0, 0, 0, 1, 1, 1, 1];
/// let ys = vec![1, 1, 1, 1, 0, 0, 0, 0];
/// let mi = SeriesMutualInformation::new(xs, ys, None, None, 2.0).unwrap();
/// assert!((mi.global_value() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct SeriesMutualInformation {
    log_base: f64,
    x: Array2<usize>,
    y: Array2<usize>,
    xy: Array2<usize>,
    p_x: Dist,
    p_y: Dist,
    p_xy: Dist,
}

impl SeriesMutualInformation {
    /// `bx` and `by` are the alphabets of `xs` and `ys`, each inferred from
    /// its own series when `None`.
    pub fn new(
        xs: impl Into<SymbolData>,
        ys: impl Into<SymbolData>,
        bx: Option<u32>,
        by: Option<u32>,
        log_base: f64,
    ) -> Result<Self> {
        let xs = Ensemble::new(xs)?;
        let ys = Ensemble::new(ys)?;
        xs.ensure_same_shape(&ys)?;
        let bx = resolve_base(bx, &[&xs])?;
        let by = resolve_base(by, &[&ys])?;
        let joint_states = joint_support(bx, by, FUNC)?;
        debug!("{FUNC}: bases {bx} x {by}, {} observations", xs.size());

        let x = events(&xs, bx, FUNC)?;
        let y = events(&ys, by, FUNC)?;
        let xy = combine(&x, &y, by as usize);
        Ok(Self {
            log_base,
            p_x: accumulate(&x, bx as usize, FUNC)?,
            p_y: accumulate(&y, by as usize, FUNC)?,
            p_xy: accumulate(&xy, joint_states, FUNC)?,
            x,
            y,
            xy,
        })
    }
}

impl GlobalValue for SeriesMutualInformation {
    fn global_value(&self) -> f64 {
        shannon::mutual_info(&self.p_xy, &self.p_x, &self.p_y, self.log_base)
    }
}

impl LocalValues for SeriesMutualInformation {
    fn local_values(&self) -> Array2<f64> {
        let n = self.p_xy.counts() as f64;
        let (cx, cy, cxy) = (self.p_x.as_slice(), self.p_y.as_slice(), self.p_xy.as_slice());
        let mut local = Array2::zeros(self.xy.raw_dim());
        for (((value, &xy), &x), &y) in local
            .iter_mut()
            .zip(self.xy.iter())
            .zip(self.x.iter())
            .zip(self.y.iter())
        {
            let ratio = cxy[xy] as f64 * n / (cx[x] as f64 * cy[y] as f64);
            *value = log_in(ratio, self.log_base);
        }
        local
    }
}
