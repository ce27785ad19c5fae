// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::dist::Dist;
use crate::error::Result;
use crate::estimators::data::{Ensemble, SymbolData, resolve_base};
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::estimators::utils::history::{
    accumulate, check_history, combine, support, symbols_at, window_states,
};
use log::debug;
use ndarray::Array2;

const FUNC: &str = "active_info";

/// Active information storage of a series or ensemble.
///
/// The mutual information between the `k`-history `h` of a series and its
/// next symbol `f`, `A = Σ p(h, f) log2 [p(h, f) / (p(h) p(f))]`.
///
/// # Examples
///
/// ```rust
/// use infodynamics::estimators::windowed::ActiveInformation;
/// use infodynamics::estimators::traits::GlobalValue;
///
/// let ai = ActiveInformation::new(vec![0, 0, 1, 1, 1, 1, 0, 0, 0], 2, None).unwrap();
/// assert!((ai.global_value() - 0.305958).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct ActiveInformation {
    base: u32,
    history: Array2<usize>,
    future: Array2<usize>,
    joint: Array2<usize>,
    p_joint: Dist,
    p_history: Dist,
    p_future: Dist,
}

impl ActiveInformation {
    /// Accumulates the `k`-histories of `data`.
    ///
    /// `base` is inferred from the data when `None`.
    pub fn new(data: impl Into<SymbolData>, k: usize, base: Option<u32>) -> Result<Self> {
        let series = Ensemble::new(data)?;
        check_history(k, series.timesteps())?;
        let base = resolve_base(base, &[&series])?;
        let count = series.timesteps() - k;

        let history_states = support(base, k, FUNC)?;
        let joint_states = support(base, k + 1, FUNC)?;
        debug!(
            "{FUNC}: base {base}, k {k}, {} x {count} observations, joint support {joint_states}",
            series.members()
        );

        let history = window_states(&series, k, count, base).map_err(|e| e.in_measure(FUNC))?;
        let future = symbols_at(&series, k, count, base).map_err(|e| e.in_measure(FUNC))?;
        let joint = combine(&history, &future, base as usize);

        let p_joint = accumulate(&joint, joint_states, FUNC)?;
        let p_history = accumulate(&history, history_states, FUNC)?;
        let p_future = accumulate(&future, base as usize, FUNC)?;

        Ok(Self {
            base,
            history,
            future,
            joint,
            p_joint,
            p_history,
            p_future,
        })
    }

    /// Alphabet size the measure was accumulated with.
    pub fn base(&self) -> u32 {
        self.base
    }

    fn local(&self, joint: u32, history: u32, future: u32) -> f64 {
        let n = self.p_joint.counts() as f64;
        (joint as f64 * n / (history as f64 * future as f64)).log2()
    }
}

impl GlobalValue for ActiveInformation {
    fn global_value(&self) -> f64 {
        let b = self.base as usize;
        let n = self.p_joint.counts() as f64;
        let history = self.p_history.as_slice();
        let future = self.p_future.as_slice();
        self.p_joint
            .as_slice()
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(event, &c)| c as f64 / n * self.local(c, history[event / b], future[event % b]))
            .sum()
    }
}

impl LocalValues for ActiveInformation {
    fn local_values(&self) -> Array2<f64> {
        let joint = self.p_joint.as_slice();
        let history = self.p_history.as_slice();
        let future = self.p_future.as_slice();
        let mut local = Array2::zeros(self.joint.raw_dim());
        for (((value, &j), &h), &f) in local
            .iter_mut()
            .zip(self.joint.iter())
            .zip(self.history.iter())
            .zip(self.future.iter())
        {
            *value = self.local(joint[j], history[h], future[f]);
        }
        local
    }
}
