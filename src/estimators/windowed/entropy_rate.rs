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

const FUNC: &str = "entropy_rate";

/// Finite-`k` entropy rate: the uncertainty of the next symbol given its
/// `k`-history, `H(f | h) = -Σ p(h, f) log2 p(f | h)`.
///
/// # Examples
///
/// ```rust
/// use infodynamics::estimators::windowed::EntropyRate;
/// use infodynamics::estimators::traits::{GlobalValue, LocalValues};
///
/// let er = EntropyRate::new(vec![0, 0, 1, 1, 1, 1, 0, 0, 0], 2, None).unwrap();
/// assert!((er.global_value() - 0.679270).abs() < 1e-6);
/// assert_eq!(er.local_values().shape(), &[1, 7]);
/// ```
#[derive(Debug, Clone)]
pub struct EntropyRate {
    base: u32,
    history: Array2<usize>,
    joint: Array2<usize>,
    p_joint: Dist,
    p_history: Dist,
}

impl EntropyRate {
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
        Ok(Self {
            base,
            history,
            joint,
            p_joint,
            p_history,
        })
    }

    pub fn base(&self) -> u32 {
        self.base
    }
}

impl GlobalValue for EntropyRate {
    fn global_value(&self) -> f64 {
        let b = self.base as usize;
        let n = self.p_joint.counts() as f64;
        let history = self.p_history.as_slice();
        self.p_joint
            .as_slice()
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(event, &c)| c as f64 / n * (history[event / b] as f64 / c as f64).log2())
            .sum()
    }
}

impl LocalValues for EntropyRate {
    fn local_values(&self) -> Array2<f64> {
        let joint = self.p_joint.as_slice();
        let history = self.p_history.as_slice();
        let mut local = Array2::zeros(self.joint.raw_dim());
        for ((value, &j), &h) in local.iter_mut().zip(self.joint.iter()).zip(self.history.iter()) {
            *value = (history[h] as f64 / joint[j] as f64).log2();
        }
        local
    }
}
