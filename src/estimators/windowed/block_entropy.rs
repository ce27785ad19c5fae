// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::dist::Dist;
use crate::error::Result;
use crate::estimators::data::{Ensemble, SymbolData, resolve_base};
use crate::estimators::traits::{GlobalValue, LocalValues};
use crate::estimators::utils::history::{accumulate, check_history, support, window_states};
use log::debug;
use ndarray::Array2;

const FUNC: &str = "block_entropy";

/// Entropy of the length-`k` blocks of a series or ensemble.
///
/// Blocks start at every timestep `0..=m-k`, so a member of length `m`
/// yields `m - k + 1` local values. The series must still be longer than
/// `k`. With `k = 1` this is the plain Shannon entropy of the symbols.
#[derive(Debug, Clone)]
pub struct BlockEntropy {
    base: u32,
    blocks: Array2<usize>,
    p_blocks: Dist,
}

impl BlockEntropy {
    pub fn new(data: impl Into<SymbolData>, k: usize, base: Option<u32>) -> Result<Self> {
        let series = Ensemble::new(data)?;
        check_history(k, series.timesteps())?;
        let base = resolve_base(base, &[&series])?;
        let count = series.timesteps() - k + 1;

        let states = support(base, k, FUNC)?;
        debug!(
            "{FUNC}: base {base}, k {k}, {} x {count} blocks, support {states}",
            series.members()
        );

        let blocks = window_states(&series, k, count, base).map_err(|e| e.in_measure(FUNC))?;
        let p_blocks = accumulate(&blocks, states, FUNC)?;
        Ok(Self {
            base,
            blocks,
            p_blocks,
        })
    }

    pub fn base(&self) -> u32 {
        self.base
    }
}

impl GlobalValue for BlockEntropy {
    fn global_value(&self) -> f64 {
        let n = self.p_blocks.counts() as f64;
        self.p_blocks
            .as_slice()
            .iter()
            .filter(|&&c| c > 0)
            .map(|&c| {
                let p = c as f64 / n;
                -p * p.log2()
            })
            .sum()
    }
}

impl LocalValues for BlockEntropy {
    fn local_values(&self) -> Array2<f64> {
        let n = self.p_blocks.counts() as f64;
        let counts = self.p_blocks.as_slice();
        self.blocks.mapv(|block| -(counts[block] as f64 / n).log2())
    }
}
