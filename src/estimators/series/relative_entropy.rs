// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{events, log_in};
use crate::dist::Dist;
use crate::error::Result;
use crate::estimators::data::{Ensemble, SymbolData, resolve_base};
use crate::estimators::traits::GlobalValue;
use crate::estimators::utils::history::accumulate;
use crate::shannon;
use log::debug;
use ndarray::Array1;

const FUNC: &str = "relative_entropy";

/// Relative entropy `D(p || q)` of the symbol distribution of `xs`
/// (posterior) with respect to that of `ys` (prior).
///
/// Both histograms share one alphabet. If the prior sample never shows a
/// symbol the posterior sample does, the empirical prior cannot support the
/// posterior and the average is `NaN`.
#[derive(Debug, Clone)]
pub struct SeriesRelativeEntropy {
    log_base: f64,
    p: Dist,
    q: Dist,
}

impl SeriesRelativeEntropy {
    pub fn new(
        xs: impl Into<SymbolData>,
        ys: impl Into<SymbolData>,
        base: Option<u32>,
        log_base: f64,
    ) -> Result<Self> {
        let xs = Ensemble::new(xs)?;
        let ys = Ensemble::new(ys)?;
        xs.ensure_same_shape(&ys)?;
        let base = resolve_base(base, &[&xs, &ys])?;
        debug!("{FUNC}: base {base}, {} observations", xs.size());

        let p = accumulate(&events(&xs, base, FUNC)?, base as usize, FUNC)?;
        let q = accumulate(&events(&ys, base, FUNC)?, base as usize, FUNC)?;
        Ok(Self { log_base, p, q })
    }

    /// Posterior histogram, built from `xs`.
    pub fn posterior(&self) -> &Dist {
        &self.p
    }

    /// Prior histogram, built from `ys`.
    pub fn prior(&self) -> &Dist {
        &self.q
    }

    /// Per-symbol contribution `log_b [p(x) / q(x)]`, one entry per symbol
    /// of the alphabet.
    ///
    /// A symbol seen only in the posterior gives `+inf`, one seen only in
    /// the prior `-inf`, and one seen in neither `NaN`.
    pub fn local_values(&self) -> Array1<f64> {
        let (n_p, n_q) = (self.p.counts() as f64, self.q.counts() as f64);
        self.p
            .as_slice()
            .iter()
            .zip(self.q.as_slice())
            .map(|(&cp, &cq)| log_in((cp as f64 / n_p) / (cq as f64 / n_q), self.log_base))
            .collect()
    }
}

impl GlobalValue for SeriesRelativeEntropy {
    fn global_value(&self) -> f64 {
        let unsupported = self
            .p
            .as_slice()
            .iter()
            .zip(self.q.as_slice())
            .any(|(&cp, &cq)| cp > 0 && cq == 0);
        if unsupported {
            return f64::NAN;
        }
        shannon::relative_entropy(&self.p, &self.q, self.log_base)
    }
}
