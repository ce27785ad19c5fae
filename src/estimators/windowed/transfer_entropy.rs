// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::dist::Dist;
use crate::error::Result;
use crate::estimators::data::{ConditionData, Ensemble, SymbolData, resolve_base};
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::estimators::utils::history::{
    accumulate, check_history, combine, support, symbols_at, window_states,
};
use log::{debug, trace};
use ndarray::Array2;

const FUNC: &str = "transfer_entropy";

/// Transfer entropy from a source to a target series, optionally
/// conditioned on background processes.
///
/// At timestep `t` the conditioning key is the target history
/// `h = x[t..t+k]` followed by the symbol of each background process `w`
/// at `t + k - 1`. The source symbol `s = y[t+k-1]` is compared against the
/// next target symbol `f = x[t+k]`:
///
/// `T = Σ p(h, w, f, s) log2 [p(f, s | h, w) / (p(f | h, w) p(s | h, w))]`
///
/// # Examples
///
/// ```rust
/// use infodynamics::estimators::windowed::DiscreteTransferEntropy;
/// use infodynamics::estimators::traits::GlobalValue;
///
/// let source = vec![0, 1, 1, 1, 1, 0, 0, 0, 0];
/// let target = vec![0, 0, 1, 1, 1, 1, 0, 0, 0];
/// let te = DiscreteTransferEntropy::new(source, target, 2, None, None).unwrap();
/// assert!((te.global_value() - 0.679270).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct DiscreteTransferEntropy {
    base: u32,
    key: Array2<usize>,
    key_future: Array2<usize>,
    key_source: Array2<usize>,
    joint: Array2<usize>,
    p_key: Dist,
    p_key_future: Dist,
    p_key_source: Dist,
    p_joint: Dist,
}

impl DiscreteTransferEntropy {
    /// Accumulates the transfer entropy from `source` to `target` with
    /// target history length `k`.
    ///
    /// Source and target must have the same shape. `condition` holds the
    /// background processes, see [`ConditionData`] for accepted shapes.
    /// `base` is inferred over all inputs when `None`.
    pub fn new(
        source: impl Into<SymbolData>,
        target: impl Into<SymbolData>,
        k: usize,
        condition: Option<ConditionData>,
        base: Option<u32>,
    ) -> Result<Self> {
        let source = Ensemble::new(source)?;
        let target = Ensemble::new(target)?;
        target.ensure_same_shape(&source)?;
        let backgrounds = match condition {
            Some(condition) => condition.into_backgrounds(&target)?,
            None => Vec::new(),
        };
        check_history(k, target.timesteps())?;

        let mut inputs = vec![&source, &target];
        inputs.extend(backgrounds.iter());
        let base = resolve_base(base, &inputs)?;
        let b = base as usize;
        let l = backgrounds.len();
        let count = target.timesteps() - k;

        let key_states = support(base, k + l, FUNC)?;
        let pair_states = support(base, k + l + 1, FUNC)?;
        let joint_states = support(base, k + l + 2, FUNC)?;
        debug!(
            "{FUNC}: base {base}, k {k}, {l} background processes, {} x {count} observations, joint support {joint_states}",
            target.members()
        );

        let history = window_states(&target, k, count, base).map_err(|e| e.in_measure(FUNC))?;
        let mut key = history;
        for background in &backgrounds {
            let w = symbols_at(background, k - 1, count, base).map_err(|e| e.in_measure(FUNC))?;
            key = combine(&key, &w, b);
        }
        let future = symbols_at(&target, k, count, base).map_err(|e| e.in_measure(FUNC))?;
        let src = symbols_at(&source, k - 1, count, base).map_err(|e| e.in_measure(FUNC))?;

        let key_future = combine(&key, &future, b);
        let key_source = combine(&key, &src, b);
        let joint = combine(&key_future, &src, b);

        let p_key = accumulate(&key, key_states, FUNC)?;
        let p_key_future = accumulate(&key_future, pair_states, FUNC)?;
        let p_key_source = accumulate(&key_source, pair_states, FUNC)?;
        let p_joint = accumulate(&joint, joint_states, FUNC)?;

        Ok(Self {
            base,
            key,
            key_future,
            key_source,
            joint,
            p_key,
            p_key_future,
            p_key_source,
            p_joint,
        })
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    fn local(&self, joint: u32, key: u32, key_future: u32, key_source: u32) -> f64 {
        let num = joint as f64 * key as f64;
        let den = key_future as f64 * key_source as f64;
        (num / den).log2()
    }
}

impl GlobalValue for DiscreteTransferEntropy {
    fn global_value(&self) -> f64 {
        let b = self.base as usize;
        let n = self.p_joint.counts() as f64;
        let keys = self.p_key.as_slice();
        let key_future = self.p_key_future.as_slice();
        let key_source = self.p_key_source.as_slice();

        let te: f64 = self
            .p_joint
            .as_slice()
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(event, &c)| {
                let (kf, s) = (event / b, event % b);
                let key = kf / b;
                let p = c as f64 / n;
                p * self.local(c, keys[key], key_future[kf], key_source[key * b + s])
            })
            .sum();
        trace!("{FUNC}: average {te}");
        te
    }
}

impl LocalValues for DiscreteTransferEntropy {
    fn local_values(&self) -> Array2<f64> {
        let keys = self.p_key.as_slice();
        let key_future = self.p_key_future.as_slice();
        let key_source = self.p_key_source.as_slice();
        let joint = self.p_joint.as_slice();

        let mut local = Array2::zeros(self.joint.raw_dim());
        for ((((value, &j), &key), &kf), &ks) in local
            .iter_mut()
            .zip(self.joint.iter())
            .zip(self.key.iter())
            .zip(self.key_future.iter())
            .zip(self.key_source.iter())
        {
            *value = self.local(joint[j], keys[key], key_future[kf], key_source[ks]);
        }
        local
    }
}
