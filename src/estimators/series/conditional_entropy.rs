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

const FUNC: &str = "conditional_entropy";

/// Conditional entropy `H(Y | X)` of `ys` given the condition `xs`.
///
/// Note the argument order: the condition comes first.
#[derive(Debug, Clone)]
pub struct SeriesConditionalEntropy {
    log_base: f64,
    x: Array2<usize>,
    xy: Array2<usize>,
    p_x: Dist,
    p_xy: Dist,
}

impl SeriesConditionalEntropy {
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
            p_xy: accumulate(&xy, joint_states, FUNC)?,
            x,
            xy,
        })
    }
}

impl GlobalValue for SeriesConditionalEntropy {
    fn global_value(&self) -> f64 {
        shannon::conditional_entropy(&self.p_xy, &self.p_x, self.log_base)
    }
}

impl LocalValues for SeriesConditionalEntropy {
    fn local_values(&self) -> Array2<f64> {
        let (cx, cxy) = (self.p_x.as_slice(), self.p_xy.as_slice());
        let mut local = Array2::zeros(self.xy.raw_dim());
        for ((value, &xy), &x) in local.iter_mut().zip(self.xy.iter()).zip(self.x.iter()) {
            *value = log_in(cx[x] as f64 / cxy[xy] as f64, self.log_base);
        }
        local
    }
}
